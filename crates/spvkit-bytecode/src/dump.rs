//! Human-readable disassembly of a compiled binary.
//!
//! Instructions are printed one per line, grouped under a `[section]` heading
//! whenever the section changes. Result ids are right-aligned so opcodes line
//! up:
//!
//! ```text
//! [types_constants]
//! %1 = OpTypeInt 32 0
//! %2 = OpConstant %1 7
//! ```

use std::fmt::Write as _;

use spvkit_core::Palette;
use spvkit_core::words::unpack_str;

use super::binary::{Binary, classify};
use super::instruction::Instruction;
use super::opcode::{Op, OperandKind};
use super::operand::{
    AddressingModel, BuiltIn, Capability, Decoration, Dim, ExecutionMode, ExecutionModel,
    FunctionControl, ImageFormat, LoopControl, MemoryAccess, MemoryModel, SelectionControl,
    StorageClass,
};
use super::section::SectionKind;

/// Render the whole binary.
pub fn dump(binary: &Binary, palette: Palette) -> String {
    let mut out = String::new();
    let p = &palette;
    let header = binary.header();

    writeln!(out, "{}; SPIR-V{}", p.comment, p.reset).unwrap();
    writeln!(out, "{}; Version: {}{}", p.comment, header.version, p.reset).unwrap();
    writeln!(
        out,
        "{}; Generator: {:#010x}{}",
        p.comment, header.generator, p.reset
    )
    .unwrap();
    writeln!(out, "{}; Bound: {}{}", p.comment, header.bound, p.reset).unwrap();
    writeln!(out, "{}; Schema: {}{}", p.comment, header.schema, p.reset).unwrap();

    let width = id_width(header.bound);
    let mut current: Option<SectionKind> = None;
    let mut in_functions = false;

    for instruction in binary.instructions() {
        let instruction = match instruction {
            Ok(instruction) => instruction,
            Err(e) => {
                writeln!(out, "{}; error: {e}{}", p.comment, p.reset).unwrap();
                break;
            }
        };

        let op = instruction.op();
        if op == Some(Op::Function) {
            in_functions = true;
        }
        let kind = classify(&instruction, in_functions, current);
        if current != Some(kind) {
            out.push('\n');
            writeln!(out, "{}[{kind}]{}", p.section, p.reset).unwrap();
            current = Some(kind);
        }

        out.push_str(&format_instruction(&instruction, width, p));
        out.push('\n');
    }

    out
}

/// Width of the result-id column for a module with the given bound.
pub fn id_width(bound: u32) -> usize {
    format!("%{}", bound.saturating_sub(1).max(1)).len()
}

/// Format one instruction without a trailing newline.
pub fn format_instruction(instruction: &Instruction<'_>, width: usize, p: &Palette) -> String {
    let mut line = String::new();
    let operands = instruction.operands();

    let Some(op) = instruction.op() else {
        write!(
            line,
            "{:width$}   {}Op<{}>{}",
            "",
            p.opcode,
            instruction.opcode(),
            p.reset
        )
        .unwrap();
        for word in operands {
            write!(line, " {word}").unwrap();
        }
        return line;
    };

    let shape = op.shape();
    match shape.result_index().and_then(|i| operands.get(i)) {
        Some(result) => {
            let result = format!("%{result}");
            write!(line, "{}{result:>width$}{} = ", p.id, p.reset).unwrap();
        }
        None => write!(line, "{:width$}   ", "").unwrap(),
    }
    write!(line, "{}{}{}", p.opcode, op.mnemonic(), p.reset).unwrap();

    if shape.result_type
        && let Some(ty) = operands.first()
    {
        write!(line, " {}%{ty}{}", p.id, p.reset).unwrap();
    }

    let rest = operands.get(shape.prefix_len()..).unwrap_or(&[]);
    for token in render_operands(op.operand_layout(), rest, p) {
        line.push(' ');
        line.push_str(&token);
    }
    line
}

fn render_operands(layout: &[OperandKind], words: &[u32], p: &Palette) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut builtin_follows = false;

    for &kind in layout {
        if pos >= words.len() {
            break;
        }
        match kind {
            OperandKind::IdList => {
                tokens.extend(words[pos..].iter().map(|w| format!("{}%{w}{}", p.id, p.reset)));
                pos = words.len();
            }
            OperandKind::LiteralList => {
                for (i, &word) in words[pos..].iter().enumerate() {
                    if i == 0 && builtin_follows {
                        tokens.push(named(BuiltIn::from_word(word).map(BuiltIn::name), word, p));
                    } else {
                        tokens.push(word.to_string());
                    }
                }
                pos = words.len();
            }
            OperandKind::String => match unpack_str(&words[pos..]) {
                Some((text, used)) => {
                    tokens.push(format!("{}{text:?}{}", p.literal, p.reset));
                    pos += used;
                }
                None => {
                    tokens.push(format!("{}<unterminated string>{}", p.comment, p.reset));
                    pos = words.len();
                }
            },
            OperandKind::Decoration => {
                let word = words[pos];
                builtin_follows = word == Decoration::BuiltIn.word();
                tokens.push(named(Decoration::from_word(word).map(Decoration::name), word, p));
                pos += 1;
            }
            single => {
                tokens.push(render_word(single, words[pos], p));
                pos += 1;
            }
        }
    }

    tokens.extend(words[pos..].iter().map(|w| w.to_string()));
    tokens
}

fn render_word(kind: OperandKind, word: u32, p: &Palette) -> String {
    match kind {
        OperandKind::Id => format!("{}%{word}{}", p.id, p.reset),
        OperandKind::Capability => named(Capability::from_word(word).map(Capability::name), word, p),
        OperandKind::AddressingModel => named(
            AddressingModel::from_word(word).map(AddressingModel::name),
            word,
            p,
        ),
        OperandKind::MemoryModel => {
            named(MemoryModel::from_word(word).map(MemoryModel::name), word, p)
        }
        OperandKind::ExecutionModel => named(
            ExecutionModel::from_word(word).map(ExecutionModel::name),
            word,
            p,
        ),
        OperandKind::ExecutionMode => named(
            ExecutionMode::from_word(word).map(ExecutionMode::name),
            word,
            p,
        ),
        OperandKind::StorageClass => {
            named(StorageClass::from_word(word).map(StorageClass::name), word, p)
        }
        OperandKind::Dim => named(Dim::from_word(word).map(Dim::name), word, p),
        OperandKind::ImageFormat => {
            named(ImageFormat::from_word(word).map(ImageFormat::name), word, p)
        }
        OperandKind::FunctionControl => masked(FunctionControl::describe(word), p),
        OperandKind::SelectionControl => masked(SelectionControl::describe(word), p),
        OperandKind::LoopControl => masked(LoopControl::describe(word), p),
        OperandKind::MemoryAccess => masked(MemoryAccess::describe(word), p),
        OperandKind::Decoration => named(Decoration::from_word(word).map(Decoration::name), word, p),
        OperandKind::Literal
        | OperandKind::String
        | OperandKind::IdList
        | OperandKind::LiteralList => word.to_string(),
    }
}

fn named(name: Option<&str>, word: u32, p: &Palette) -> String {
    match name {
        Some(name) => format!("{}{name}{}", p.literal, p.reset),
        None => word.to_string(),
    }
}

fn masked(text: String, p: &Palette) -> String {
    format!("{}{text}{}", p.literal, p.reset)
}
