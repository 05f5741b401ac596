//! TypeScript / JavaScript import extractor
//!
//! **Tree-sitter ABI Version**: ABI-14 (tree-sitter-typescript 0.23.2)
//!
//! One walk over the tree collects every `import_statement` (without
//! descending into it) and every identifier token outside of imports. Each
//! collected statement is then decomposed into an [`ImportElement`].

use std::path::Path;
use tracing::{debug, warn};
use tree_sitter::{Node, Parser, Point};

use crate::error::{ImportError, ImportResult};
use crate::parsing::comments::{comments_for, last_code_child};
use crate::parsing::import::{
    ImportComments, ImportElement, NamedBinding, ParseOutcome, ParsedImports, Position,
};
use crate::parsing::parser::{ImportParser, resolve_source};
use crate::parsing::Language;

/// Token kinds reported as identifier references
const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
];

/// An import statement as found in the tree, before decomposition
#[derive(Debug, Clone)]
pub(crate) struct ImportOccurrence<'tree> {
    pub node: Node<'tree>,
    pub start: Position,
    pub end: Position,
    pub comments: ImportComments,
}

/// Import extractor backed by tree-sitter
pub struct TypeScriptImportParser {
    parser: Parser,
    language: Language,
}

impl TypeScriptImportParser {
    /// Create a parser using the TSX grammar, which also accepts plain
    /// TypeScript. The grammar is switched per file in `parse_imports`.
    pub fn new() -> ImportResult<Self> {
        Self::with_language(Language::Tsx)
    }

    pub fn with_language(language: Language) -> ImportResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .map_err(|e| ImportError::ParserInit {
                language: language.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser, language })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn switch_language(&mut self, language: Language) -> ImportResult<()> {
        if language == self.language {
            return Ok(());
        }
        self.parser
            .set_language(&language.tree_sitter_language())
            .map_err(|e| ImportError::ParserInit {
                language: language.to_string(),
                reason: e.to_string(),
            })?;
        self.language = language;
        Ok(())
    }

    /// Parse `code` with the current grammar and extract its imports.
    ///
    /// `path` is only used in diagnostics.
    pub fn extract(&mut self, code: &str, path: &Path) -> ImportResult<ParsedImports> {
        let tree = self
            .parser
            .parse(code, None)
            .ok_or_else(|| ImportError::ParseFailed {
                path: path.to_path_buf(),
            })?;

        let mut occurrences = Vec::new();
        let mut used_type_references = Vec::new();
        collect_imports_and_identifiers(
            tree.root_node(),
            code,
            &mut occurrences,
            &mut used_type_references,
        );

        let import_elements: Vec<ImportElement> = occurrences
            .iter()
            .filter_map(|occurrence| {
                let outcome = parse_import(occurrence, code);
                if let ParseOutcome::Skipped { reason } = &outcome {
                    warn!(
                        "Skipping import at {}:{}: {reason}",
                        path.display(),
                        occurrence.start.line + 1
                    );
                }
                outcome.into_element()
            })
            .collect();

        debug!(
            "Extracted {} of {} imports and {} identifier references from {} ({})",
            import_elements.len(),
            occurrences.len(),
            used_type_references.len(),
            path.display(),
            self.language
        );

        Ok(ParsedImports {
            import_elements,
            used_type_references,
        })
    }
}

impl ImportParser for TypeScriptImportParser {
    fn parse_imports(&mut self, path: &Path, source: Option<&str>) -> ImportResult<ParsedImports> {
        let Some(code) = resolve_source(path, source)? else {
            return Ok(ParsedImports::default());
        };

        self.switch_language(Language::from_path(path))?;
        self.extract(&code, path)
    }
}

/// Single top-down walk. Import statements are recorded and not entered,
/// so names bound by imports never count as references. Iterative, so
/// nesting depth is bounded by the tree and not by the stack.
fn collect_imports_and_identifiers<'tree>(
    root: Node<'tree>,
    code: &str,
    occurrences: &mut Vec<ImportOccurrence<'tree>>,
    used_type_references: &mut Vec<String>,
) {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        let mut enter = true;

        match node.kind() {
            "import_statement" => {
                let end = last_code_child(node);
                occurrences.push(ImportOccurrence {
                    node,
                    start: position_at(code, node.start_byte(), node.start_position()),
                    end: position_at(code, end.end_byte(), end.end_position()),
                    comments: comments_for(node, code),
                });
                // `import x = require('y')` declares a plain binding
                enter = has_child_of_kind(node, "import_require_clause");
            }
            kind if IDENTIFIER_KINDS.contains(&kind) => {
                used_type_references.push(code[node.byte_range()].to_string());
            }
            _ => {}
        }

        if enter && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn has_child_of_kind(node: Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| child.kind() == kind)
}

/// Convert a tree-sitter point (byte column) into a UTF-16 based position
fn position_at(code: &str, byte: usize, point: Point) -> Position {
    let line_start = byte.saturating_sub(point.column);
    let character = code
        .get(line_start..byte)
        .map_or(point.column, |line| line.encode_utf16().count());

    Position::new(point.row as u32, character as u32)
}

/// Decompose one import statement.
///
/// Supported clause shapes: default, namespace, named list,
/// default + namespace, default + named list, plus side-effect imports
/// without a clause. Everything else is skipped.
pub(crate) fn parse_import(occurrence: &ImportOccurrence, code: &str) -> ParseOutcome {
    let node = occurrence.node;

    let mut import_clause = None;
    let mut is_type_only = false;
    let mut cursor = node.walk();
    for (i, child) in node.children(&mut cursor).enumerate() {
        match child.kind() {
            "import_clause" => import_clause = Some(child),
            // import fs = require('fs');
            "import_require_clause" => {
                return ParseOutcome::Skipped {
                    reason: format!(
                        "unsupported import form `{}`",
                        code[node.byte_range()].trim()
                    ),
                };
            }
            // with { type: 'json' } has no place in ImportElement
            "import_attribute" => {
                return ParseOutcome::Skipped {
                    reason: format!(
                        "import attributes are not supported in `{}`",
                        code[node.byte_range()].trim()
                    ),
                };
            }
            "type" if i == 1 => is_type_only = true,
            _ => {}
        }
    }

    let Some(source) = node.child_by_field_name("source") else {
        return ParseOutcome::Skipped {
            reason: "import statement without a module specifier".to_string(),
        };
    };

    let mut element = ImportElement::new(module_specifier_text(source, code))
        .with_span(occurrence.start, occurrence.end);
    element.is_type_only = is_type_only;
    element.attached_comment = occurrence.comments.clone();

    let Some(clause) = import_clause else {
        return ParseOutcome::Parsed(element);
    };

    let mut namespace_import = None;
    let mut named_imports = None;
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                element = element.with_default(&code[child.byte_range()]);
            }
            "namespace_import" => namespace_import = Some(child),
            "named_imports" => named_imports = Some(child),
            "comment" => {}
            other => {
                return ParseOutcome::Skipped {
                    reason: format!("unsupported `{other}` in import clause"),
                };
            }
        }
    }

    match (namespace_import, named_imports) {
        (Some(namespace), None) => {
            let Some(alias) = last_identifier(namespace, code) else {
                return ParseOutcome::Skipped {
                    reason: "namespace import without a local name".to_string(),
                };
            };
            element = element.with_binding(NamedBinding::namespace(alias));
        }
        (None, Some(list)) => {
            element.has_binding_clause = true;
            let mut cursor = list.walk();
            for specifier in list.named_children(&mut cursor) {
                if specifier.kind() != "import_specifier" {
                    continue;
                }
                match named_binding(specifier, code) {
                    Some(binding) => element.bindings.push(binding),
                    None => {
                        return ParseOutcome::Skipped {
                            reason: format!(
                                "unsupported import specifier `{}`",
                                &code[specifier.byte_range()]
                            ),
                        };
                    }
                }
            }
        }
        (None, None) if element.default_local_name.is_some() => {}
        _ => {
            return ParseOutcome::Skipped {
                reason: format!(
                    "unsupported import clause `{}`",
                    &code[clause.byte_range()]
                ),
            };
        }
    }

    ParseOutcome::Parsed(element)
}

/// `name` or `name as alias`. String names (`"a-b" as ab`) keep their quotes
/// so the binding renders back verbatim.
fn named_binding(specifier: Node, code: &str) -> Option<NamedBinding> {
    let name = specifier.child_by_field_name("name")?;
    let mut binding = match specifier.child_by_field_name("alias") {
        Some(alias) => NamedBinding::aliased(&code[name.byte_range()], &code[alias.byte_range()]),
        None => NamedBinding::new(&code[name.byte_range()]),
    };

    let mut cursor = specifier.walk();
    binding.is_type_only = specifier
        .children(&mut cursor)
        .next()
        .is_some_and(|first| first.kind() == "type");

    Some(binding)
}

fn last_identifier(node: Node, code: &str) -> Option<String> {
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();
    children
        .iter()
        .rev()
        .find(|n| n.kind() == "identifier")
        .map(|n| code[n.byte_range()].to_string())
}

/// Literal content for string specifiers, raw text for anything else
fn module_specifier_text(source: Node, code: &str) -> String {
    let raw = &code[source.byte_range()];
    if source.kind() == "string" && raw.len() >= 2 {
        raw[1..raw.len() - 1].to_string()
    } else {
        raw.trim().to_string()
    }
}
