//! Import extraction from parsed syntax trees
//!
//! - [`import`]: the records handed to orchestrators and the generator
//! - [`comments`]: comment association around import statements
//! - [`parser`]: the [`ImportParser`] seam
//! - [`typescript`]: the tree-sitter backed extractor

pub mod comments;
pub mod import;
pub mod language;
pub mod parser;
pub mod typescript;

pub use import::{
    Comment, ImportComments, ImportElement, NAMESPACE_BINDING, NamedBinding, ParseOutcome,
    ParsedImports, Position,
};
pub use language::Language;
pub use parser::ImportParser;
pub use typescript::TypeScriptImportParser;
