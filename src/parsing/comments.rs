//! Comment association for import statements
//!
//! tree-sitter keeps comments as `comment` nodes among the statements
//! instead of exposing trivia, so the leading/trailing split is rebuilt
//! from sibling order and row numbers:
//!
//! - trailing: comments inside the node after its module specifier (a
//!   statement without `;` swallows them), then comment siblings right
//!   after the node that start on the row the node ends on
//! - leading: the run of comment siblings right before the node, minus the
//!   ones that trail the previous statement

use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

use super::import::{Comment, ImportComments};

const COMMENT_KIND: &str = "comment";

static REFERENCE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"///\s?<").expect("REFERENCE_DIRECTIVE regex is invalid"));

/// Collect the comments attached to `node`
pub fn comments_for(node: Node, code: &str) -> ImportComments {
    ImportComments {
        leading_comments: leading_comments(node, code),
        trailing_comments: trailing_comments(node, code),
    }
}

fn leading_comments(node: Node, code: &str) -> Vec<Comment> {
    let mut run = Vec::new();
    let mut anchor_row = None;

    let mut sibling = node.prev_sibling();
    while let Some(prev) = sibling {
        if prev.kind() != COMMENT_KIND {
            anchor_row = Some(prev.end_position().row);
            break;
        }
        run.push(prev);
        sibling = prev.prev_sibling();
    }
    run.reverse();

    run.into_iter()
        .filter(|comment| Some(comment.start_position().row) != anchor_row)
        .map(|comment| to_comment(comment, code))
        .collect()
}

fn trailing_comments(node: Node, code: &str) -> Vec<Comment> {
    let end_row = node.end_position().row;
    let mut comments = Vec::new();

    if let Some(source) = node.child_by_field_name("source") {
        let mut cursor = node.walk();
        comments.extend(
            node.children(&mut cursor)
                .filter(|child| {
                    child.kind() == COMMENT_KIND && child.start_byte() >= source.end_byte()
                })
                .map(|child| to_comment(child, code)),
        );
    }

    let mut sibling = node.next_sibling();
    while let Some(next) = sibling {
        if next.kind() != COMMENT_KIND || next.start_position().row != end_row {
            break;
        }
        comments.push(to_comment(next, code));
        sibling = next.next_sibling();
    }

    comments
}

/// The last child of `node` that is actual code: not a comment and not a
/// zero-width inserted semicolon. Falls back to `node` itself.
pub fn last_code_child(node: Node<'_>) -> Node<'_> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .rev()
        .find(|child| child.kind() != COMMENT_KIND && child.start_byte() < child.end_byte())
        .unwrap_or(node)
}

/// Build a [`Comment`] from a `comment` node
pub fn to_comment(node: Node, code: &str) -> Comment {
    let raw_text = code[node.byte_range()].replace('\r', "");
    Comment {
        range_start: node.start_byte(),
        range_end: node.end_byte(),
        is_directive_comment: is_directive_comment(&raw_text),
        raw_text,
    }
}

/// Triple-slash directives such as `/// <reference path="..." />`
pub fn is_directive_comment(text: &str) -> bool {
    text.starts_with("//") && REFERENCE_DIRECTIVE.is_match(text)
}
