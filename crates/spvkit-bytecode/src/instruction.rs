//! Instruction headers and checked decoding.

use spvkit_core::Id;

use super::opcode::Op;

/// Pack `(word_count << 16) | opcode`.
///
/// # Panics
/// Panics if `word_count` does not fit in 16 bits.
#[inline]
pub fn pack_header(opcode: u16, word_count: usize) -> u32 {
    assert!(
        word_count <= u16::MAX as usize,
        "instruction too long: {word_count} words (max 65535)"
    );
    ((word_count as u32) << 16) | opcode as u32
}

/// Split a header word into `(word_count, opcode)`.
#[inline]
pub fn unpack_header(word: u32) -> (u16, u16) {
    ((word >> 16) as u16, (word & 0xFFFF) as u16)
}

/// Malformed instruction stream.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("instruction at word {offset} has a zero word count")]
    ZeroWordCount { offset: usize },
    #[error(
        "instruction at word {offset} claims {word_count} words but only {available} remain"
    )]
    Truncated {
        offset: usize,
        word_count: u16,
        available: usize,
    },
}

/// Read-only view of one decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction<'a> {
    opcode: u16,
    offset: usize,
    operands: &'a [u32],
}

impl<'a> Instruction<'a> {
    /// Raw opcode, including ones [`Op`] does not name.
    #[inline]
    pub fn opcode(&self) -> u16 {
        self.opcode
    }

    #[inline]
    pub fn op(&self) -> Option<Op> {
        Op::from_word(self.opcode)
    }

    /// Total words including the header word.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.operands.len() + 1
    }

    /// Word offset of the header within the decoded stream.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn operands(&self) -> &'a [u32] {
        self.operands
    }

    #[inline]
    pub fn operand(&self, index: usize) -> Option<u32> {
        self.operands.get(index).copied()
    }

    /// Result id, for opcodes whose shape is known.
    pub fn result_id(&self) -> Option<Id> {
        let index = self.op()?.shape().result_index()?;
        self.operand(index).map(Id::from_raw)
    }

    /// Result type id, for opcodes that carry one.
    pub fn result_type(&self) -> Option<Id> {
        if self.op()?.shape().result_type {
            self.operand(0).map(Id::from_raw)
        } else {
            None
        }
    }
}

/// Lazy iterator over an instruction stream.
///
/// Yields a single `Err` on the first malformed header and then stops, so a
/// corrupt word count can never cause an out-of-bounds read.
#[derive(Clone, Debug)]
pub struct Instructions<'a> {
    words: &'a [u32],
    /// Added to reported offsets when decoding a sub-slice of a larger buffer.
    base: usize,
    offset: usize,
    failed: bool,
}

impl<'a> Instructions<'a> {
    pub fn new(words: &'a [u32]) -> Self {
        Self::with_base(words, 0)
    }

    pub(crate) fn with_base(words: &'a [u32], base: usize) -> Self {
        Self {
            words,
            base,
            offset: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Result<Instruction<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.words.len() {
            return None;
        }

        let local = self.offset;
        let offset = self.base + local;
        let (word_count, opcode) = unpack_header(self.words[local]);
        if word_count == 0 {
            self.failed = true;
            return Some(Err(DecodeError::ZeroWordCount { offset }));
        }

        let available = self.words.len() - local;
        if word_count as usize > available {
            self.failed = true;
            return Some(Err(DecodeError::Truncated {
                offset,
                word_count,
                available,
            }));
        }

        let end = local + word_count as usize;
        self.offset = end;
        Some(Ok(Instruction {
            opcode,
            offset,
            operands: &self.words[local + 1..end],
        }))
    }
}

impl std::iter::FusedIterator for Instructions<'_> {}
