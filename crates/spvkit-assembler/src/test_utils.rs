//! Helpers for inspecting module sections in tests.

use spvkit_bytecode::{Op, SectionKind};

use crate::Module;

/// Decode one section into `(op, operands)` pairs.
pub fn decode(module: &Module, kind: SectionKind) -> Vec<(Op, Vec<u32>)> {
    module
        .section(kind)
        .instructions()
        .map(|inst| {
            let inst = inst.expect("builder output decodes");
            let op = inst.op().expect("builder output uses known opcodes");
            (op, inst.operands().to_vec())
        })
        .collect()
}

/// Opcodes in one section.
pub fn ops(module: &Module, kind: SectionKind) -> Vec<Op> {
    decode(module, kind).into_iter().map(|(op, _)| op).collect()
}

/// Count of `op` in its section.
pub fn count_op(module: &Module, op: Op) -> usize {
    ops(module, op.section())
        .into_iter()
        .filter(|&o| o == op)
        .count()
}
