#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! SPIR-V binary format for spvkit.
//!
//! This crate contains:
//! - Format definitions (header, opcodes, enumerated operands)
//! - [`Section`]: the append-only word stream instructions are written into
//! - Checked instruction decoding ([`Instructions`], [`DecodeError`])
//! - [`Binary`]: loading a compiled module and splitting it into regions
//! - [`dump`]: human-readable disassembly

#[macro_use]
mod macros;

mod binary;
mod constants;
pub mod dump;
mod header;
mod instruction;
mod opcode;
mod operand;
mod section;


pub use binary::{Binary, BinaryError, Region};
pub use constants::{DEFAULT_GENERATOR, HEADER_WORDS, MAGIC, MAGIC_SWAPPED};
pub use dump::dump;
pub use header::{Header, Version, VersionParseError};
pub use instruction::{DecodeError, Instruction, Instructions, pack_header, unpack_header};
pub use opcode::{Op, OpShape, OperandKind};
pub use operand::{
    AddressingModel, BuiltIn, Capability, Decoration, Dim, ExecutionMode, ExecutionModel,
    FunctionControl, ImageFormat, LoopControl, MemoryAccess, MemoryModel, SelectionControl,
    StorageClass,
};
pub use section::{Section, SectionKind};
