//! Import statement representation
//!
//! This module defines the records produced by the extractor and consumed
//! by the text generator. They are plain values: the extractor builds them
//! once per call, an external sorter may regroup them, and the generator
//! renders them back to text.

use serde::{Deserialize, Serialize};

/// Binding name used for the namespace form `* as alias`
pub const NAMESPACE_BINDING: &str = "*";

/// A comment found in the trivia around an import statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Byte offset of the first comment character
    pub range_start: usize,
    /// Byte offset one past the last comment character
    pub range_end: usize,
    /// Exact source slice including delimiters, with `\r` removed
    pub raw_text: String,
    /// `/// <reference ... />` style directive that must stay where it is
    pub is_directive_comment: bool,
}

/// Comments attached to one import statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportComments {
    #[serde(default)]
    pub leading_comments: Vec<Comment>,
    #[serde(default)]
    pub trailing_comments: Vec<Comment>,
}

impl ImportComments {
    pub fn is_empty(&self) -> bool {
        self.leading_comments.is_empty() && self.trailing_comments.is_empty()
    }
}

/// Zero-based line/character position.
///
/// `character` counts UTF-16 code units from the start of the line, which
/// is what editors use for columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// One imported symbol, optionally renamed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedBinding {
    /// Exported name, or `*` for the namespace form
    pub imported_name: String,
    /// Local name when it differs from `imported_name`
    #[serde(default)]
    pub local_alias: Option<String>,
    /// `import { type Foo }`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_type_only: bool,
}

impl NamedBinding {
    pub fn new(imported_name: impl Into<String>) -> Self {
        Self {
            imported_name: imported_name.into(),
            local_alias: None,
            is_type_only: false,
        }
    }

    pub fn aliased(imported_name: impl Into<String>, local_alias: impl Into<String>) -> Self {
        Self {
            imported_name: imported_name.into(),
            local_alias: Some(local_alias.into()),
            is_type_only: false,
        }
    }

    /// The `* as alias` sentinel
    pub fn namespace(local_alias: impl Into<String>) -> Self {
        Self::aliased(NAMESPACE_BINDING, local_alias)
    }

    pub fn is_namespace(&self) -> bool {
        self.imported_name == NAMESPACE_BINDING && self.local_alias.is_some()
    }

    /// Name the binding introduces into the importing module
    pub fn local_name(&self) -> &str {
        self.local_alias.as_deref().unwrap_or(&self.imported_name)
    }
}

/// A decomposed import statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportElement {
    /// String literal content, or the raw specifier text when not a literal
    pub module_specifier: String,
    #[serde(default)]
    pub start_position: Position,
    #[serde(default)]
    pub end_position: Position,
    /// False only for side-effect imports (`import './polyfill';`)
    pub has_binding_clause: bool,
    #[serde(default)]
    pub default_local_name: Option<String>,
    #[serde(default)]
    pub bindings: Vec<NamedBinding>,
    /// `import type ...`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_type_only: bool,
    #[serde(default)]
    pub attached_comment: ImportComments,
}

impl ImportElement {
    /// A side-effect import with no binding clause
    pub fn new(module_specifier: impl Into<String>) -> Self {
        Self {
            module_specifier: module_specifier.into(),
            start_position: Position::default(),
            end_position: Position::default(),
            has_binding_clause: false,
            default_local_name: None,
            bindings: Vec::new(),
            is_type_only: false,
            attached_comment: ImportComments::default(),
        }
    }

    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default_local_name = Some(name.into());
        self.has_binding_clause = true;
        self
    }

    pub fn with_binding(mut self, binding: NamedBinding) -> Self {
        self.bindings.push(binding);
        self.has_binding_clause = true;
        self
    }

    pub fn with_span(mut self, start: Position, end: Position) -> Self {
        self.start_position = start;
        self.end_position = end;
        self
    }

    /// Alias of the namespace binding when this is a `* as alias` import
    pub fn namespace_alias(&self) -> Option<&str> {
        match self.bindings.as_slice() {
            [only] if only.is_namespace() => only.local_alias.as_deref(),
            _ => None,
        }
    }

    /// Every local name this import introduces, default name first
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.default_local_name
            .as_deref()
            .into_iter()
            .chain(self.bindings.iter().map(NamedBinding::local_name))
    }
}

/// Result of decomposing one import occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(ImportElement),
    /// Binding clause shape the pipeline does not handle; the statement is
    /// left untouched in the source
    Skipped { reason: String },
}

impl ParseOutcome {
    pub fn into_element(self) -> Option<ImportElement> {
        match self {
            ParseOutcome::Parsed(element) => Some(element),
            ParseOutcome::Skipped { .. } => None,
        }
    }
}

/// Extractor output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedImports {
    /// Supported imports in source order
    pub import_elements: Vec<ImportElement>,
    /// Every identifier seen outside import statements, in traversal order
    /// with duplicates kept
    pub used_type_references: Vec<String>,
}

impl ParsedImports {
    pub fn is_empty(&self) -> bool {
        self.import_elements.is_empty() && self.used_type_references.is_empty()
    }

    /// Whether `name` is referenced anywhere outside the import block
    pub fn is_referenced(&self, name: &str) -> bool {
        self.used_type_references.iter().any(|r| r == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_alias_requires_sole_binding() {
        let ns = ImportElement::new("fs").with_binding(NamedBinding::namespace("fs"));
        assert_eq!(ns.namespace_alias(), Some("fs"));

        let mixed = ImportElement::new("fs")
            .with_binding(NamedBinding::namespace("fs"))
            .with_binding(NamedBinding::new("readFile"));
        assert_eq!(mixed.namespace_alias(), None);
    }

    #[test]
    fn test_local_names() {
        let element = ImportElement::new("react")
            .with_default("React")
            .with_binding(NamedBinding::new("useState"))
            .with_binding(NamedBinding::aliased("Component", "Base"));

        let names: Vec<_> = element.local_names().collect();
        assert_eq!(names, vec!["React", "useState", "Base"]);
        assert!(element.has_binding_clause);
    }

    #[test]
    fn test_skipped_outcome_has_no_element() {
        let parsed = ParseOutcome::Parsed(ImportElement::new("a"));
        assert_eq!(parsed.into_element(), Some(ImportElement::new("a")));

        let skipped = ParseOutcome::Skipped {
            reason: "unsupported".to_string(),
        };
        assert_eq!(skipped.into_element(), None);
    }

    #[test]
    fn test_element_json_shape() {
        let element = ImportElement::new("./a").with_binding(NamedBinding::new("A"));
        let json = serde_json::to_value(&element).unwrap();

        assert_eq!(json["module_specifier"], "./a");
        assert_eq!(json["bindings"][0]["imported_name"], "A");
        assert!(json["bindings"][0].get("is_type_only").is_none());

        // Positions and comments are optional on input
        let parsed: ImportElement = serde_json::from_str(
            r#"{"module_specifier":"x","has_binding_clause":true,"default_local_name":"X"}"#,
        )
        .unwrap();
        assert_eq!(parsed.default_local_name.as_deref(), Some("X"));
        assert!(parsed.attached_comment.is_empty());
    }
}
