//! Structural checks over an assembled module.
//!
//! Builders never validate; they append. [`Module::check_structure`] walks
//! the sections afterwards and reports the first layout problem a consumer
//! would reject. Offsets are word positions inside the named section.

use std::collections::HashSet;

use spvkit_bytecode::{DecodeError, Op, SectionKind};
use spvkit_core::Id;

use crate::Module;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("module has no OpMemoryModel")]
    MissingMemoryModel,

    #[error("module has {0} OpMemoryModel instructions, expected exactly one")]
    DuplicateMemoryModel(usize),

    #[error("OpFunction at code word {offset} begins inside another function")]
    NestedFunction { offset: usize },

    #[error("OpFunctionEnd at code word {offset} has no matching OpFunction")]
    UnmatchedFunctionEnd { offset: usize },

    #[error("function {function} is never closed with OpFunctionEnd")]
    UnclosedFunction { function: Id },

    #[error("{mnemonic} at code word {offset} is outside a function")]
    OutsideFunction { offset: usize, mnemonic: String },

    #[error("OpFunctionParameter at code word {offset} follows the first block label")]
    ParameterAfterLabel { offset: usize },

    #[error("entry point {0} does not name a function defined in this module")]
    UndefinedEntryPoint(Id),

    #[error("malformed {section} section: {source}")]
    Decode {
        section: SectionKind,
        source: DecodeError,
    },
}

impl Module {
    /// Check section contents for layout problems.
    ///
    /// Not needed for [`Module::compile`]; intended for tests and for callers
    /// that want to fail early rather than inside a driver.
    pub fn check_structure(&self) -> Result<(), StructureError> {
        let models = self.count(SectionKind::MemoryModel)?;
        match models {
            0 => return Err(StructureError::MissingMemoryModel),
            1 => {}
            n => return Err(StructureError::DuplicateMemoryModel(n)),
        }

        let functions = self.check_code()?;

        for inst in self.section(SectionKind::EntryPoints).instructions() {
            let inst = inst.map_err(|source| StructureError::Decode {
                section: SectionKind::EntryPoints,
                source,
            })?;
            let Some(entry) = inst.operand(1).map(Id::from_raw) else {
                continue;
            };
            if !functions.contains(&entry) {
                return Err(StructureError::UndefinedEntryPoint(entry));
            }
        }

        Ok(())
    }

    fn count(&self, kind: SectionKind) -> Result<usize, StructureError> {
        let mut n = 0;
        for inst in self.section(kind).instructions() {
            inst.map_err(|source| StructureError::Decode {
                section: kind,
                source,
            })?;
            n += 1;
        }
        Ok(n)
    }

    /// Walk the code section, returning the ids of all defined functions.
    fn check_code(&self) -> Result<HashSet<Id>, StructureError> {
        let mut functions = HashSet::new();
        let mut open: Option<Id> = None;
        let mut labeled = false;

        for inst in self.section(SectionKind::Code).instructions() {
            let inst = inst.map_err(|source| StructureError::Decode {
                section: SectionKind::Code,
                source,
            })?;
            let offset = inst.offset();

            match inst.op() {
                Some(Op::Function) => {
                    if open.is_some() {
                        return Err(StructureError::NestedFunction { offset });
                    }
                    // A truncated OpFunction still opens a function; id 0 is never valid.
                    let id = inst.result_id().unwrap_or(Id::from_raw(0));
                    functions.insert(id);
                    open = Some(id);
                    labeled = false;
                }
                Some(Op::FunctionEnd) => {
                    if open.take().is_none() {
                        return Err(StructureError::UnmatchedFunctionEnd { offset });
                    }
                }
                Some(Op::FunctionParameter) if open.is_some() && labeled => {
                    return Err(StructureError::ParameterAfterLabel { offset });
                }
                Some(Op::Label) if open.is_some() => labeled = true,
                op if open.is_none() => {
                    let mnemonic = match op {
                        Some(op) => op.mnemonic(),
                        None => format!("Op<{}>", inst.opcode()),
                    };
                    return Err(StructureError::OutsideFunction { offset, mnemonic });
                }
                _ => {}
            }
        }

        if let Some(function) = open {
            return Err(StructureError::UnclosedFunction { function });
        }
        Ok(functions)
    }
}
