//! Import text generation
//!
//! [`ImportCreator`] renders groups of [`ImportElement`]s back to source
//! text. Each statement is rendered on its own: the single-line vs wrapped
//! decision never looks at neighbouring elements.

use crate::generation::group::ImportElementGroup;
use crate::generation::style::{StyleConfiguration, WrapMode};
use crate::parsing::{ImportElement, NamedBinding};

/// Renders import statements under a fixed [`StyleConfiguration`]
#[derive(Debug, Clone)]
pub struct ImportCreator {
    config: StyleConfiguration,
}

impl ImportCreator {
    pub fn new(config: StyleConfiguration) -> Self {
        Self { config }
    }

    /// Render the whole import block.
    ///
    /// Groups are separated by their own `blank_lines_after`. After the last
    /// group only `blank_lines_after_all_groups` applies; the block replaces
    /// the original import span, so the newline ending the last statement
    /// is already in the surrounding text.
    pub fn create_import_text(&self, groups: &[ImportElementGroup]) -> String {
        let mut text = String::new();
        let mut pending_blank_lines = None;

        for group in groups.iter().filter(|group| !group.is_empty()) {
            if let Some(blank_lines) = pending_blank_lines {
                text.push('\n');
                text.push_str(&"\n".repeat(blank_lines));
            }

            let statements: Vec<String> = group
                .elements
                .iter()
                .map(|element| self.create_import_statement(element))
                .collect();
            text.push_str(&statements.join("\n"));

            pending_blank_lines = Some(group.blank_lines_after);
        }

        if pending_blank_lines.is_some() {
            text.push_str(&"\n".repeat(self.config.blank_lines_after_all_groups));
        }

        text
    }

    /// Render one statement together with its attached comments
    pub fn create_import_statement(&self, element: &ImportElement) -> String {
        let statement = self.render_statement(element);
        let comments = &element.attached_comment;
        if comments.is_empty() {
            return statement;
        }

        let mut text = String::new();
        for comment in &comments.leading_comments {
            text.push_str(&comment.raw_text);
            text.push('\n');
        }
        text.push_str(&statement);
        for comment in &comments.trailing_comments {
            text.push(' ');
            text.push_str(&comment.raw_text);
        }
        text
    }

    fn render_statement(&self, element: &ImportElement) -> String {
        let keyword = if element.is_type_only {
            "import type "
        } else {
            "import "
        };
        let from_clause = format!(" from {}", self.quote(&element.module_specifier));

        let has_binding_clause = element.has_binding_clause
            || element.default_local_name.is_some()
            || !element.bindings.is_empty();
        if !has_binding_clause {
            return format!("{keyword}{};", self.quote(&element.module_specifier));
        }

        let default_name = element.default_local_name.as_deref();
        if element.bindings.is_empty() {
            return match default_name {
                Some(name) => format!("{keyword}{name}{from_clause};"),
                None => format!("{keyword}{{}}{from_clause};"),
            };
        }

        let head = match default_name {
            Some(name) => format!("{keyword}{name}, "),
            None => keyword.to_string(),
        };

        if let Some(alias) = element.namespace_alias() {
            return format!("{head}* as {alias}{from_clause};");
        }

        let bindings: Vec<String> = element.bindings.iter().map(render_binding).collect();
        let single_line = self.single_line(&head, &bindings, &from_clause);
        if self.fits_on_single_line(&single_line, bindings.len()) {
            format!("{single_line};")
        } else {
            self.wrapped(&head, &bindings, &from_clause)
        }
    }

    /// Single-line candidate without the terminating `;`
    fn single_line(&self, head: &str, bindings: &[String], from_clause: &str) -> String {
        let spacing = &self.config.spacing;
        let separator = format!(
            "{},{}",
            spaces(spacing.before_comma),
            spaces(spacing.after_comma)
        );

        let mut list = bindings.join(&separator);
        if self.config.trailing_comma_policy.in_single_line() {
            list.push(',');
        }

        format!(
            "{head}{{{}{list}{}}}{from_clause}",
            spaces(spacing.after_open_brace),
            spaces(spacing.before_close_brace)
        )
    }

    fn fits_on_single_line(&self, single_line: &str, binding_count: usize) -> bool {
        let policy = &self.config.wrap_policy;
        match policy.mode {
            // measured in UTF-16 code units, like editor columns
            WrapMode::LineLength => single_line.encode_utf16().count() < policy.threshold,
            WrapMode::Words | WrapMode::NewLineEachExpressionAfterCountLimit => {
                binding_count < policy.threshold
            }
            WrapMode::NewLineEachExpressionAfterCountLimitExceptIfOnlyOne => {
                binding_count == 1 || binding_count < policy.threshold
            }
        }
    }

    fn wrapped(&self, head: &str, bindings: &[String], from_clause: &str) -> String {
        let indent = spaces(self.config.indent_width);
        let trailing_comma = if self.config.trailing_comma_policy.in_wrapped() {
            ","
        } else {
            ""
        };

        let body = match self.config.wrap_policy.mode {
            WrapMode::NewLineEachExpressionAfterCountLimit
            | WrapMode::NewLineEachExpressionAfterCountLimitExceptIfOnlyOne => bindings
                .iter()
                .map(|binding| format!("{indent}{binding}"))
                .collect::<Vec<_>>()
                .join(",\n"),
            WrapMode::LineLength | WrapMode::Words => {
                let separator = format!(",{}", spaces(self.config.spacing.after_comma));
                format!("{indent}{}", bindings.join(&separator))
            }
        };

        format!("{head}{{\n{body}{trailing_comma}\n}}{from_clause};")
    }

    /// Wrap the specifier in the configured quote. The specifier keeps its
    /// escapes as written, so only bare occurrences of the quote need one.
    fn quote(&self, module_specifier: &str) -> String {
        let quote = self.config.quote_style.quote_char();
        let mut quoted = String::with_capacity(module_specifier.len() + 2);
        quoted.push(quote);

        let mut chars = module_specifier.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                quoted.push(c);
                if let Some(escaped) = chars.next() {
                    quoted.push(escaped);
                }
                continue;
            }
            if c == quote {
                quoted.push('\\');
            }
            quoted.push(c);
        }

        quoted.push(quote);
        quoted
    }
}

fn render_binding(binding: &NamedBinding) -> String {
    let modifier = if binding.is_type_only { "type " } else { "" };
    match &binding.local_alias {
        Some(alias) => format!("{modifier}{} as {alias}", binding.imported_name),
        None => format!("{modifier}{}", binding.imported_name),
    }
}

fn spaces(count: usize) -> String {
    " ".repeat(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::style::{QuoteStyle, TrailingCommaPolicy, WrapPolicy};
    use crate::parsing::{Comment, ImportComments};

    fn creator() -> ImportCreator {
        ImportCreator::new(StyleConfiguration::default())
    }

    #[test]
    fn test_side_effect_import() {
        let element = ImportElement::new("./polyfills");
        assert_eq!(
            creator().create_import_statement(&element),
            "import './polyfills';"
        );
    }

    #[test]
    fn test_default_only_import() {
        let element = ImportElement::new("react").with_default("React");
        assert_eq!(
            creator().create_import_statement(&element),
            "import React from 'react';"
        );
    }

    #[test]
    fn test_empty_named_list() {
        let mut element = ImportElement::new("./types");
        element.has_binding_clause = true;
        assert_eq!(
            creator().create_import_statement(&element),
            "import {} from './types';"
        );
    }

    #[test]
    fn test_namespace_with_default() {
        let element = ImportElement::new("foo")
            .with_default("Foo")
            .with_binding(NamedBinding::namespace("ns"));
        assert_eq!(
            creator().create_import_statement(&element),
            "import Foo, * as ns from 'foo';"
        );
    }

    #[test]
    fn test_double_quotes_and_type_only() {
        let mut element = ImportElement::new("./props").with_binding(NamedBinding::new("Props"));
        element.is_type_only = true;
        let creator = ImportCreator::new(StyleConfiguration {
            quote_style: QuoteStyle::Double,
            ..Default::default()
        });

        assert_eq!(
            creator.create_import_statement(&element),
            "import type { Props } from \"./props\";"
        );
    }

    #[test]
    fn test_specifier_quote_is_escaped() {
        let element = ImportElement::new("it's").with_default("a");
        assert_eq!(
            creator().create_import_statement(&element),
            r"import a from 'it\'s';"
        );

        // Escapes already present are kept as written
        let escaped = ImportElement::new(r"it\'s").with_default("a");
        assert_eq!(
            creator().create_import_statement(&escaped),
            r"import a from 'it\'s';"
        );

        let double = ImportCreator::new(StyleConfiguration {
            quote_style: QuoteStyle::Double,
            ..Default::default()
        });
        let element = ImportElement::new(r#"say "hi""#).with_default("a");
        assert_eq!(
            double.create_import_statement(&element),
            r#"import a from "say \"hi\"";"#
        );
    }

    #[test]
    fn test_custom_spacing() {
        let element = ImportElement::new("m")
            .with_binding(NamedBinding::new("a"))
            .with_binding(NamedBinding::new("b"));
        let creator = ImportCreator::new(StyleConfiguration {
            spacing: crate::generation::style::Spacing {
                after_open_brace: 0,
                before_close_brace: 2,
                before_comma: 1,
                after_comma: 0,
            },
            ..Default::default()
        });

        assert_eq!(
            creator.create_import_statement(&element),
            "import {a ,b  } from 'm';"
        );
    }

    #[test]
    fn test_new_line_each_expression_layout() {
        let element = ImportElement::new("m")
            .with_binding(NamedBinding::new("a"))
            .with_binding(NamedBinding::aliased("b", "c"))
            .with_binding(NamedBinding::new("d"));
        let creator = ImportCreator::new(StyleConfiguration {
            indent_width: 2,
            trailing_comma_policy: TrailingCommaPolicy::MultiLine,
            wrap_policy: WrapPolicy {
                threshold: 3,
                mode: WrapMode::NewLineEachExpressionAfterCountLimit,
            },
            ..Default::default()
        });

        assert_eq!(
            creator.create_import_statement(&element),
            "import {\n  a,\n  b as c,\n  d,\n} from 'm';"
        );
    }

    #[test]
    fn test_words_mode_counts_bindings() {
        let two = ImportElement::new("m")
            .with_binding(NamedBinding::new("a"))
            .with_binding(NamedBinding::new("b"));
        let policy = |threshold| StyleConfiguration {
            wrap_policy: WrapPolicy {
                threshold,
                mode: WrapMode::Words,
            },
            ..Default::default()
        };

        assert_eq!(
            ImportCreator::new(policy(3)).create_import_statement(&two),
            "import { a, b } from 'm';"
        );
        assert_eq!(
            ImportCreator::new(policy(2)).create_import_statement(&two),
            "import {\n    a, b\n} from 'm';"
        );
    }

    #[test]
    fn test_lone_binding_never_wraps_when_excepted() {
        let one = ImportElement::new("m").with_binding(NamedBinding::new("a"));
        let creator = ImportCreator::new(StyleConfiguration {
            wrap_policy: WrapPolicy {
                threshold: 1,
                mode: WrapMode::NewLineEachExpressionAfterCountLimitExceptIfOnlyOne,
            },
            ..Default::default()
        });

        assert_eq!(
            creator.create_import_statement(&one),
            "import { a } from 'm';"
        );
    }

    #[test]
    fn test_comments_are_reemitted_in_place() {
        let comment = |text: &str, is_directive_comment| Comment {
            range_start: 0,
            range_end: text.len(),
            raw_text: text.to_string(),
            is_directive_comment,
        };
        let mut element = ImportElement::new("a").with_default("a");
        element.attached_comment = ImportComments {
            leading_comments: vec![
                comment("/// <reference path=\"g.d.ts\" />", true),
                comment("/** docs */", false),
            ],
            trailing_comments: vec![comment("// keep", false)],
        };

        assert_eq!(
            creator().create_import_statement(&element),
            "/// <reference path=\"g.d.ts\" />\n/** docs */\nimport a from 'a'; // keep"
        );
    }

    #[test]
    fn test_no_groups_render_nothing() {
        assert_eq!(creator().create_import_text(&[]), "");
        assert_eq!(
            creator().create_import_text(&[ImportElementGroup::new(Vec::new(), 2)]),
            ""
        );
    }
}
