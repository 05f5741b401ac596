//! Import text generation
//!
//! Turns externally grouped [`ImportElement`](crate::parsing::ImportElement)s
//! back into source text under a [`StyleConfiguration`].

pub mod creator;
pub mod group;
pub mod style;

pub use creator::ImportCreator;
pub use group::ImportElementGroup;
pub use style::{QuoteStyle, Spacing, StyleConfiguration, TrailingCommaPolicy, WrapMode, WrapPolicy};
