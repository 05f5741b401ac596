//! Input documents for the CLI.
//!
//! `render` takes the JSON an external sorter produced from `extract`
//! output: an array of import element groups.

use std::io::Read;
use std::path::Path;

use crate::error::{ErrorContext, ImportError, ImportResult};
use crate::generation::ImportElementGroup;

/// Read a JSON array of [`ImportElementGroup`]s
pub fn read_groups(path: &Path) -> ImportResult<Vec<ImportElementGroup>> {
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_groups(&content).with_path(path)
}

/// Parse group JSON from a string
pub fn parse_groups(content: &str) -> Result<Vec<ImportElementGroup>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Read all of stdin as source text
pub fn read_stdin() -> ImportResult<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read source text from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_groups_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        std::fs::write(
            &path,
            r#"[
  {
    "elements": [
      {"module_specifier": "react", "has_binding_clause": true, "default_local_name": "React"}
    ],
    "blank_lines_after": 1
  },
  {"elements": [{"module_specifier": "./styles.css", "has_binding_clause": false}]}
]"#,
        )
        .unwrap();

        let groups = read_groups(&path).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].blank_lines_after, 1);
        assert_eq!(groups[1].blank_lines_after, 0);
        assert_eq!(groups[1].elements[0].module_specifier, "./styles.css");
    }

    #[test]
    fn test_malformed_groups_report_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        std::fs::write(&path, "{\"elements\": 3}").unwrap();

        let err = read_groups(&path).unwrap_err();
        assert_eq!(err.status_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("groups.json"));
    }
}
