//! Style bytecode compiler and cascade interpreter.
//!
//! Declarations are tokenized by [`lexer`], compiled by the property parsers
//! in [`parse`] into compact bytecode held in a [`StyleBuffer`], and later
//! replayed by [`select`] into a [`ComputedStyle`]. Parent/child inheritance
//! is resolved with [`ComputedStyle::compose`].

pub mod bytecode;
pub mod computed;
pub mod cursor;
pub mod lexer;
pub mod parse;
pub mod select;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bytecode::{PropertyId, StringTable, StyleBuffer};
pub use computed::{ComputedStyle, Slot};
pub use lexer::tokenize;
pub use parse::{ParseContext, parse_declaration_list};
pub use select::SelectState;
