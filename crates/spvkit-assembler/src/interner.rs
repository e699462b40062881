//! Type and constant interning.
//!
//! Every type and constant goes through [`Module::define_type`] or
//! [`Module::define_const`]. The definition section remains the only thing
//! compiled into the binary; the side index just remembers which key got
//! which id, so a repeated request costs one hash lookup instead of a scan.

use spvkit_bytecode::{Op, SectionKind};
use spvkit_core::{DefinitionKey, Id};
use tracing::trace;

use crate::Module;

impl Module {
    /// Intern a type. `operands` excludes the result id, which is operand 0
    /// of the emitted instruction.
    pub fn define_type(&mut self, op: Op, operands: &[u32]) -> Id {
        debug_assert!(op.is_type(), "{} is not a type opcode", op.mnemonic());
        self.intern(op, operands, 0)
    }

    /// Intern a constant of type `type_id`. The emitted instruction is
    /// `type_id, result, literals...`.
    pub fn define_const(&mut self, op: Op, type_id: Id, literals: &[u32]) -> Id {
        debug_assert!(op.is_constant(), "{} is not a constant opcode", op.mnemonic());
        let mut key = Vec::with_capacity(literals.len() + 1);
        key.push(type_id.as_u32());
        key.extend_from_slice(literals);
        self.intern(op, &key, 1)
    }

    /// Find an existing definition by walking the definition section.
    ///
    /// `operands` has the same layout as the interner key: every operand
    /// except the result id. Agrees with the side index for every
    /// definition emitted through the interner.
    pub fn scan_type_section(&self, op: Op, operands: &[u32]) -> Option<Id> {
        let result_index = op.shape().result_index()?;
        if operands.len() < result_index {
            return None;
        }
        let (before, after) = operands.split_at(result_index);

        self.section(SectionKind::TypeConstDefs)
            .instructions()
            .map_while(Result::ok)
            .filter(|inst| inst.opcode() == op.word())
            .find_map(|inst| {
                let words = inst.operands();
                if words.len() != operands.len() + 1 {
                    return None;
                }
                let matches = words[..result_index] == *before
                    && words[result_index + 1..] == *after;
                matches.then(|| Id::from_raw(words[result_index]))
            })
    }

    fn intern(&mut self, op: Op, operands: &[u32], result_index: usize) -> Id {
        let key = DefinitionKey::new(op.word(), operands);
        let Self {
            ids,
            sections,
            definitions,
            ..
        } = self;

        let (id, created) = definitions.get_or_insert_with(key, |key| {
            let id = ids.allocate();
            let mut words = Vec::with_capacity(key.operands.len() + 1);
            words.extend_from_slice(&key.operands[..result_index]);
            words.push(id.as_u32());
            words.extend_from_slice(&key.operands[result_index..]);
            sections[SectionKind::TypeConstDefs.index()].append(op, &words);
            id
        });

        if created {
            trace!(%id, op = op.name(), "interned definition");
        }
        id
    }
}
