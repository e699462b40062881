#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Single-pass SPIR-V module assembler.
//!
//! A [`Module`] accumulates instructions into nine ordered sections:
//! - capabilities are de-duplicated by scanning their section
//! - types and constants are interned by structure, so each distinct
//!   definition is emitted once
//! - everything else is appended as requested, allocating result ids on the
//!   way
//!
//! [`Module::compile`] concatenates the header and sections into a
//! [`Binary`](spvkit_bytecode::Binary).

mod capabilities;
mod code;
mod config;
mod constants;
mod declarations;
mod interner;
mod module;
mod structure;
mod types;

#[cfg(test)]
mod interner_tests;
#[cfg(test)]
mod module_tests;
#[cfg(test)]
mod properties_tests;
#[cfg(test)]
mod test_utils;

pub use config::ModuleConfig;
pub use module::Module;
pub use structure::StructureError;
pub use types::ImageType;
