#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the spvkit crates.
//!
//! - [`Id`] and [`IdAllocator`]: module-unique result identifiers
//! - [`DefinitionIndex`]: structural key to identifier lookup used for interning
//! - [`words`]: packing of literal strings into 32-bit operand words
//! - [`Palette`]: ANSI colors for dump output

mod colors;
mod ids;
mod interner;
pub mod words;

#[cfg(test)]
mod words_tests;

pub use colors::Palette;
pub use ids::{Id, IdAllocator};
pub use interner::{DefinitionIndex, DefinitionKey};
