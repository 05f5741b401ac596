//! Import parser trait
//!
//! This module defines the interface the import extractor exposes to
//! orchestrators. A parser turns one unit of source text into
//! [`ParsedImports`].

use std::path::Path;

use crate::error::{ImportError, ImportResult};
use crate::parsing::import::ParsedImports;

/// Common interface for import extractors
pub trait ImportParser: Send {
    /// Extract imports and identifier references.
    ///
    /// `path` labels the source (it selects the grammar) and is read only
    /// when `source` is `None`. Blank `source` text short-circuits to an
    /// empty result without parsing or touching the filesystem.
    fn parse_imports(&mut self, path: &Path, source: Option<&str>) -> ImportResult<ParsedImports>;
}

/// Resolve the text to parse, reading `path` only when no text was supplied.
///
/// Returns `None` when the supplied text is blank.
pub fn resolve_source<'a>(
    path: &Path,
    source: Option<&'a str>,
) -> ImportResult<Option<std::borrow::Cow<'a, str>>> {
    match source {
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => Ok(Some(std::borrow::Cow::Borrowed(text))),
        None => std::fs::read_to_string(path)
            .map(|text| Some(std::borrow::Cow::Owned(text)))
            .map_err(|source| ImportError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_source_skips_filesystem() {
        let missing = Path::new("/definitely/not/here.ts");
        assert!(resolve_source(missing, Some("  \n\t ")).unwrap().is_none());
        assert!(resolve_source(missing, Some("")).unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let missing = Path::new("/definitely/not/here.ts");
        let err = resolve_source(missing, None).unwrap_err();
        assert_eq!(err.status_code(), "FILE_READ_ERROR");
    }
}
