//! TypeScript / JavaScript import extraction

pub mod parser;

pub use parser::TypeScriptImportParser;
