//! Module state and compilation.

use spvkit_bytecode::{Binary, Header, MAGIC, Op, Section, SectionKind};
use spvkit_core::{DefinitionIndex, Id, IdAllocator};
use tracing::debug;

use crate::ModuleConfig;

/// Function nesting as seen by the builders.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FunctionState {
    /// An `OpFunction` has been emitted without its `OpFunctionEnd`.
    pub(crate) open: bool,
    /// The open function has emitted its first `OpLabel`.
    pub(crate) labeled: bool,
}

/// An in-progress module.
///
/// Builders append to the section that owns their instruction and return
/// result ids immediately. Nothing is patched after it has been appended;
/// [`Module::compile`] only concatenates.
///
/// ```
/// use spvkit_assembler::Module;
/// use spvkit_bytecode::{AddressingModel, MemoryModel};
///
/// let mut module = Module::new();
/// module.set_memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
/// let u32_ty = module.def_int_type(32, false);
/// assert_eq!(module.def_int_type(32, false), u32_ty);
///
/// let binary = module.compile();
/// assert_eq!(binary.header().bound, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Module {
    pub(crate) config: ModuleConfig,
    pub(crate) ids: IdAllocator,
    pub(crate) sections: [Section; 9],
    pub(crate) definitions: DefinitionIndex,
    pub(crate) function: FunctionState,
}

impl Default for Module {
    fn default() -> Self {
        Self::with_config(ModuleConfig::default())
    }
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ModuleConfig) -> Self {
        Self {
            config,
            ids: IdAllocator::new(),
            sections: std::array::from_fn(|_| Section::new()),
            definitions: DefinitionIndex::new(),
            function: FunctionState::default(),
        }
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Allocate a fresh id without emitting anything.
    ///
    /// Used for forward references: a function or label id is allocated
    /// first and passed to [`Module::function_begin`] or
    /// [`Module::op_label`] later.
    pub fn allocate_id(&mut self) -> Id {
        self.ids.allocate()
    }

    /// One past the highest id allocated so far.
    pub fn bound(&self) -> u32 {
        self.ids.bound()
    }

    pub fn section(&self, kind: SectionKind) -> &Section {
        &self.sections[kind.index()]
    }

    /// Number of distinct types and constants interned so far.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Concatenate header and sections into a binary.
    ///
    /// Does not mutate the module; compiling twice without intervening
    /// builder calls yields identical binaries.
    pub fn compile(&self) -> Binary {
        let header = Header {
            magic: MAGIC,
            version: self.config.version,
            generator: self.config.generator,
            bound: self.ids.bound(),
            schema: 0,
        };
        let binary = Binary::assemble(header, self.sections.iter().map(Section::words));

        debug!(
            bound = header.bound,
            words = binary.word_len(),
            "compiled module"
        );
        binary
    }

    /// Append an instruction that has no dedicated builder.
    ///
    /// No id is allocated; the operands are written verbatim, result ids
    /// included.
    ///
    /// # Panics
    ///
    /// If `op` is a type or constant (those are only created through
    /// interning), or if `kind` is not the section `op` belongs to.
    /// `OpVariable` may also go to the code section and `OpUndef` to the
    /// types section.
    pub fn append_raw(&mut self, kind: SectionKind, op: Op, operands: &[u32]) {
        assert!(
            !op.is_type() && !op.is_constant(),
            "{} must be defined through the interner",
            op.mnemonic()
        );
        let alternate = matches!(
            (op, kind),
            (Op::Variable, SectionKind::Code) | (Op::Undef, SectionKind::TypeConstDefs)
        );
        assert!(
            kind == op.section() || alternate,
            "{} belongs to {}, not {kind}",
            op.mnemonic(),
            op.section()
        );
        self.section_mut(kind).append(op, operands);
    }

    pub(crate) fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        &mut self.sections[kind.index()]
    }

    /// Append to the code section.
    pub(crate) fn emit_code(&mut self, op: Op, operands: &[u32]) {
        self.sections[SectionKind::Code.index()].append(op, operands);
    }

    /// Allocate a result id and append a `result_type, result, operands...`
    /// instruction to the code section.
    pub(crate) fn emit_typed(&mut self, op: Op, result_type: Id, operands: &[u32]) -> Id {
        let result = self.ids.allocate();
        let mut words = Vec::with_capacity(operands.len() + 2);
        words.push(result_type.as_u32());
        words.push(result.as_u32());
        words.extend_from_slice(operands);
        self.emit_code(op, &words);
        result
    }
}

/// Raw words of an id list.
pub(crate) fn id_words(ids: &[Id]) -> impl Iterator<Item = u32> + '_ {
    ids.iter().map(|id| id.as_u32())
}
