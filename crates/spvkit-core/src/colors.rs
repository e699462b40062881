//! ANSI colors for disassembly output.
//!
//! - `section`: section headings
//! - `opcode`: instruction names
//! - `id`: result and operand identifiers
//! - `literal`: strings and enum operands
//! - `comment`: trailing annotations

/// Palette used by the dump renderer.
///
/// Only the standard 16-color escape codes are used so the output reads on
/// light and dark terminals alike.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub section: &'static str,
    pub opcode: &'static str,
    pub id: &'static str,
    pub literal: &'static str,
    pub comment: &'static str,
    pub reset: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl Palette {
    pub const ANSI: Self = Self {
        section: "\x1b[1;34m",
        opcode: "\x1b[34m",
        id: "\x1b[33m",
        literal: "\x1b[32m",
        comment: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        section: "",
        opcode: "",
        id: "",
        literal: "",
        comment: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }
}
