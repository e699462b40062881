//! Compiled module binaries.
//!
//! A [`Binary`] is produced by the assembler or loaded from disk. It can be
//! walked instruction by instruction, and split back into section
//! [`Region`]s to verify that the grammar's section order holds.

use std::io;
use std::path::Path;

use super::header::Header;
use super::instruction::{DecodeError, Instruction, Instructions};
use super::opcode::Op;
use super::section::SectionKind;
use super::{HEADER_WORDS, MAGIC, MAGIC_SWAPPED};

/// Binary load or validation error.
#[derive(Debug, thiserror::Error)]
pub enum BinaryError {
    #[error("binary too small: {0} words (minimum {HEADER_WORDS})")]
    TooSmall(usize),
    #[error("binary length {0} is not a multiple of 4 bytes")]
    Misaligned(usize),
    #[error("invalid magic: {0:#010x} (expected {MAGIC:#010x})")]
    InvalidMagic(u32),
    #[error("malformed instruction: {0}")]
    Decode(#[from] DecodeError),
    #[error("{found} instruction at word {offset} appears after {after}")]
    SectionOutOfOrder {
        offset: usize,
        found: SectionKind,
        after: SectionKind,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Maximal run of instructions belonging to one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub kind: SectionKind,
    /// Word offset of the first instruction, counted from the start of the binary.
    pub offset: usize,
    pub word_count: usize,
    pub instruction_count: usize,
}

/// A complete module: header followed by instruction words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binary {
    words: Vec<u32>,
    header: Header,
}

impl Binary {
    /// Concatenate a header and section payloads. Used by the assembler.
    pub fn assemble<'a>(header: Header, sections: impl IntoIterator<Item = &'a [u32]>) -> Self {
        let mut words = header.to_words().to_vec();
        for section in sections {
            words.extend_from_slice(section);
        }
        Self { words, header }
    }

    /// Load from words, validating size and magic.
    pub fn from_words(words: Vec<u32>) -> Result<Self, BinaryError> {
        if words.len() < HEADER_WORDS {
            return Err(BinaryError::TooSmall(words.len()));
        }

        let header = Header::from_words(&words);
        if !header.validate_magic() {
            return Err(BinaryError::InvalidMagic(header.magic));
        }

        Ok(Self { words, header })
    }

    /// Load from bytes in either byte order; the magic number decides which.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BinaryError> {
        if bytes.len() % 4 != 0 {
            return Err(BinaryError::Misaligned(bytes.len()));
        }

        let mut words: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        if words.first() == Some(&MAGIC_SWAPPED) {
            for word in &mut words {
                *word = word.swap_bytes();
            }
        }

        Self::from_words(words)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BinaryError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// All words, header included.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Instruction words after the header.
    pub fn body(&self) -> &[u32] {
        &self.words[HEADER_WORDS..]
    }

    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Little-endian byte image, ready to hand to a driver.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    /// Decode the instructions after the header. Offsets are absolute word
    /// positions within the binary.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions::with_base(self.body(), HEADER_WORDS)
    }

    /// Split the body into section regions.
    ///
    /// Fails on a malformed instruction or when an instruction belongs to a
    /// section that must precede one already seen.
    pub fn regions(&self) -> Result<Vec<Region>, BinaryError> {
        let mut regions: Vec<Region> = Vec::new();
        let mut in_functions = false;

        for instruction in self.instructions() {
            let instruction = instruction?;
            let op = instruction.op();
            if op == Some(Op::Function) {
                in_functions = true;
            }
            let current = regions.last().map(|region| region.kind);
            let kind = classify(&instruction, in_functions, current);

            match regions.last_mut() {
                Some(last) if last.kind == kind => {
                    last.word_count += instruction.word_count();
                    last.instruction_count += 1;
                }
                Some(last) if last.kind > kind => {
                    return Err(BinaryError::SectionOutOfOrder {
                        offset: instruction.offset(),
                        found: kind,
                        after: last.kind,
                    });
                }
                _ => regions.push(Region {
                    kind,
                    offset: instruction.offset(),
                    word_count: instruction.word_count(),
                    instruction_count: 1,
                }),
            }
        }

        Ok(regions)
    }

    /// Instruction count per section, indexed by [`SectionKind::index`].
    pub fn section_counts(&self) -> Result<[usize; 9], BinaryError> {
        let mut counts = [0usize; 9];
        for region in self.regions()? {
            counts[region.kind.index()] += region.instruction_count;
        }
        Ok(counts)
    }
}

/// Section an instruction belongs to, given whether a function has begun.
///
/// `current` is the section of the previous instruction. Debug line markers
/// may interrupt any section and stay in it.
pub(crate) fn classify(
    instruction: &Instruction<'_>,
    in_functions: bool,
    current: Option<SectionKind>,
) -> SectionKind {
    match instruction.op() {
        Some(Op::Variable) if in_functions => SectionKind::Code,
        Some(Op::Undef) if !in_functions => SectionKind::TypeConstDefs,
        Some(op) => op.section(),
        None => match raw_section(instruction.opcode()) {
            Some(kind) => kind,
            None => current.unwrap_or(SectionKind::DebugNames),
        },
    }
}

/// Section of an opcode the assembler never emits. `None` for line markers.
fn raw_section(opcode: u16) -> Option<SectionKind> {
    let kind = match opcode {
        8 | 317 => return None,
        // OpExtension, OpExtInstImport
        10 | 11 => SectionKind::Capabilities,
        // OpSourceContinued, OpSource, OpSourceExtension, OpString, OpModuleProcessed
        2..=4 | 7 | 330 => SectionKind::DebugNames,
        // OpExecutionModeId
        331 => SectionKind::ExecutionModes,
        // decoration groups, OpDecorateId, OpDecorateString, OpMemberDecorateString
        73..=75 | 332 | 5632 | 5633 => SectionKind::Annotations,
        // remaining types, spec constants, ray query and acceleration structures
        19..=39 | 41..=46 | 48..=52 | 322 | 327 | 4472 | 5341 => SectionKind::TypeConstDefs,
        _ => SectionKind::Code,
    };
    Some(kind)
}
