//! Sections: append-only word streams of self-describing instructions.

use std::fmt;

use super::instruction::{Instructions, pack_header};
use super::opcode::Op;

/// The nine logical sections, in binary order.
///
/// Ordering of the variants is the order the format's grammar requires;
/// comparing two kinds compares their position in the binary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SectionKind {
    Capabilities,
    MemoryModel,
    EntryPoints,
    ExecutionModes,
    DebugNames,
    Annotations,
    TypeConstDefs,
    GlobalVariables,
    Code,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Capabilities,
        SectionKind::MemoryModel,
        SectionKind::EntryPoints,
        SectionKind::ExecutionModes,
        SectionKind::DebugNames,
        SectionKind::Annotations,
        SectionKind::TypeConstDefs,
        SectionKind::GlobalVariables,
        SectionKind::Code,
    ];

    /// Position in the binary, 0-based.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Capabilities => "capabilities",
            SectionKind::MemoryModel => "memory_model",
            SectionKind::EntryPoints => "entry_points",
            SectionKind::ExecutionModes => "execution_modes",
            SectionKind::DebugNames => "debug_names",
            SectionKind::Annotations => "annotations",
            SectionKind::TypeConstDefs => "types_constants",
            SectionKind::GlobalVariables => "global_variables",
            SectionKind::Code => "code",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Growable buffer of instruction words.
///
/// Every append writes a header word followed by exactly `word_count - 1`
/// operand words, so walking the buffer by word counts always lands on
/// instruction boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    words: Vec<u32>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one instruction.
    ///
    /// # Panics
    /// Panics if the instruction would exceed 65535 words; the header cannot
    /// encode a larger count.
    pub fn append(&mut self, op: Op, operands: &[u32]) {
        self.append_raw(op.word(), operands);
    }

    /// Append an instruction with an opcode the [`Op`] enum does not name.
    pub fn append_raw(&mut self, opcode: u16, operands: &[u32]) {
        self.words.reserve(operands.len() + 1);
        self.words.push(pack_header(opcode, operands.len() + 1));
        self.words.extend_from_slice(operands);
    }

    /// Decode the instructions written so far.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions::new(&self.words)
    }

    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    #[inline]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
