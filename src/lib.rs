//! The main library module for tidyimports
//!
//! Extracts import statements from TypeScript / JavaScript source and
//! renders them back as canonical text. Grouping and ordering are left to
//! the caller: feed [`ParsedImports::import_elements`] through your own
//! sorter into [`ImportElementGroup`]s, then hand those to an
//! [`ImportCreator`].

pub mod config;
pub mod error;
pub mod generation;
pub mod io;
pub mod logging;
pub mod parsing;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{ImportError, ImportResult};
pub use generation::{
    ImportCreator, ImportElementGroup, QuoteStyle, Spacing, StyleConfiguration,
    TrailingCommaPolicy, WrapMode, WrapPolicy,
};
pub use parsing::{
    Comment, ImportComments, ImportElement, ImportParser, Language, NamedBinding, ParseOutcome,
    ParsedImports, Position, TypeScriptImportParser,
};
