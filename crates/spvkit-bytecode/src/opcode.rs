//! Instruction opcodes and their operand grammar.

use crate::section::SectionKind;

word_enum! {
    /// Opcodes emitted by the assembler.
    ///
    /// Variant names drop the `Op` prefix; [`Op::mnemonic`] restores it.
    pub enum Op: u16 {
        Nop = 0,
        Undef = 1,
        Name = 5,
        MemberName = 6,
        MemoryModel = 14,
        EntryPoint = 15,
        ExecutionMode = 16,
        Capability = 17,
        TypeVoid = 19,
        TypeBool = 20,
        TypeInt = 21,
        TypeFloat = 22,
        TypeVector = 23,
        TypeMatrix = 24,
        TypeImage = 25,
        TypeSampler = 26,
        TypeSampledImage = 27,
        TypeArray = 28,
        TypeRuntimeArray = 29,
        TypeStruct = 30,
        TypePointer = 32,
        TypeFunction = 33,
        ConstantTrue = 41,
        ConstantFalse = 42,
        Constant = 43,
        ConstantComposite = 44,
        ConstantNull = 46,
        Function = 54,
        FunctionParameter = 55,
        FunctionEnd = 56,
        FunctionCall = 57,
        Variable = 59,
        Load = 61,
        Store = 62,
        AccessChain = 65,
        Decorate = 71,
        MemberDecorate = 72,
        VectorShuffle = 79,
        CompositeConstruct = 80,
        CompositeExtract = 81,
        ConvertFToU = 109,
        ConvertFToS = 110,
        ConvertSToF = 111,
        ConvertUToF = 112,
        Bitcast = 124,
        SNegate = 126,
        FNegate = 127,
        IAdd = 128,
        FAdd = 129,
        ISub = 130,
        FSub = 131,
        IMul = 132,
        FMul = 133,
        UDiv = 134,
        SDiv = 135,
        FDiv = 136,
        IEqual = 170,
        INotEqual = 171,
        ULessThan = 176,
        SLessThan = 177,
        FOrdLessThan = 184,
        LoopMerge = 246,
        SelectionMerge = 247,
        Label = 248,
        Branch = 249,
        BranchConditional = 250,
        Kill = 252,
        Return = 253,
        ReturnValue = 254,
    }
}

/// How a single operand word (or run of words) is interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperandKind {
    /// Reference to another result id.
    Id,
    /// Plain 32-bit literal.
    Literal,
    /// Packed NUL-terminated string, one or more words.
    String,
    Capability,
    AddressingModel,
    MemoryModel,
    ExecutionModel,
    ExecutionMode,
    StorageClass,
    /// Decoration; a `BuiltIn` decoration turns the next literal into a [`BuiltIn`](crate::BuiltIn).
    Decoration,
    Dim,
    ImageFormat,
    FunctionControl,
    SelectionControl,
    LoopControl,
    MemoryAccess,
    /// Zero or more ids until the end of the instruction.
    IdList,
    /// Zero or more literals until the end of the instruction.
    LiteralList,
}

/// Whether an opcode carries a result type and/or a result id.
///
/// When both are present the result type is operand 0 and the result id
/// operand 1. A result id without a type is operand 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OpShape {
    pub result_type: bool,
    pub result: bool,
}

impl OpShape {
    const NONE: Self = Self {
        result_type: false,
        result: false,
    };
    const RESULT: Self = Self {
        result_type: false,
        result: true,
    };
    const TYPED: Self = Self {
        result_type: true,
        result: true,
    };

    /// Operand index of the result id, if any.
    pub fn result_index(self) -> Option<usize> {
        match (self.result_type, self.result) {
            (_, false) => None,
            (false, true) => Some(0),
            (true, true) => Some(1),
        }
    }

    /// Number of leading operands taken by result type and result id.
    pub fn prefix_len(self) -> usize {
        self.result_type as usize + self.result as usize
    }
}

impl Op {
    /// Full mnemonic, e.g. `OpTypeInt`.
    pub fn mnemonic(self) -> String {
        format!("Op{}", self.name())
    }

    pub fn is_type(self) -> bool {
        matches!(
            self,
            Op::TypeVoid
                | Op::TypeBool
                | Op::TypeInt
                | Op::TypeFloat
                | Op::TypeVector
                | Op::TypeMatrix
                | Op::TypeImage
                | Op::TypeSampler
                | Op::TypeSampledImage
                | Op::TypeArray
                | Op::TypeRuntimeArray
                | Op::TypeStruct
                | Op::TypePointer
                | Op::TypeFunction
        )
    }

    pub fn is_constant(self) -> bool {
        matches!(
            self,
            Op::ConstantTrue
                | Op::ConstantFalse
                | Op::Constant
                | Op::ConstantComposite
                | Op::ConstantNull
        )
    }

    pub fn shape(self) -> OpShape {
        if self.is_type() {
            return OpShape::RESULT;
        }
        if self.is_constant() {
            return OpShape::TYPED;
        }
        match self {
            Op::Label => OpShape::RESULT,
            Op::Undef
            | Op::Function
            | Op::FunctionParameter
            | Op::FunctionCall
            | Op::Variable
            | Op::Load
            | Op::AccessChain
            | Op::VectorShuffle
            | Op::CompositeConstruct
            | Op::CompositeExtract
            | Op::ConvertFToU
            | Op::ConvertFToS
            | Op::ConvertSToF
            | Op::ConvertUToF
            | Op::Bitcast
            | Op::SNegate
            | Op::FNegate
            | Op::IAdd
            | Op::FAdd
            | Op::ISub
            | Op::FSub
            | Op::IMul
            | Op::FMul
            | Op::UDiv
            | Op::SDiv
            | Op::FDiv
            | Op::IEqual
            | Op::INotEqual
            | Op::ULessThan
            | Op::SLessThan
            | Op::FOrdLessThan => OpShape::TYPED,
            _ => OpShape::NONE,
        }
    }

    /// Operand grammar after the result type and result id.
    ///
    /// A trailing list kind absorbs every remaining word.
    pub fn operand_layout(self) -> &'static [OperandKind] {
        use OperandKind as K;

        match self {
            Op::Capability => &[K::Capability],
            Op::MemoryModel => &[K::AddressingModel, K::MemoryModel],
            Op::EntryPoint => &[K::ExecutionModel, K::Id, K::String, K::IdList],
            Op::ExecutionMode => &[K::Id, K::ExecutionMode, K::LiteralList],
            Op::Name => &[K::Id, K::String],
            Op::MemberName => &[K::Id, K::Literal, K::String],
            Op::Decorate => &[K::Id, K::Decoration, K::LiteralList],
            Op::MemberDecorate => &[K::Id, K::Literal, K::Decoration, K::LiteralList],
            Op::TypeInt => &[K::Literal, K::Literal],
            Op::TypeFloat => &[K::Literal],
            Op::TypeVector | Op::TypeMatrix => &[K::Id, K::Literal],
            Op::TypeImage => &[
                K::Id,
                K::Dim,
                K::Literal,
                K::Literal,
                K::Literal,
                K::Literal,
                K::ImageFormat,
            ],
            Op::TypeSampledImage | Op::TypeRuntimeArray => &[K::Id],
            Op::TypeArray => &[K::Id, K::Id],
            Op::TypePointer => &[K::StorageClass, K::Id],
            Op::TypeStruct | Op::TypeFunction => &[K::IdList],
            Op::Constant => &[K::LiteralList],
            Op::ConstantComposite => &[K::IdList],
            Op::Variable => &[K::StorageClass, K::IdList],
            Op::Function => &[K::FunctionControl, K::Id],
            Op::Load => &[K::Id, K::MemoryAccess, K::LiteralList],
            Op::Store => &[K::Id, K::Id, K::MemoryAccess, K::LiteralList],
            Op::CompositeExtract => &[K::Id, K::LiteralList],
            Op::VectorShuffle => &[K::Id, K::Id, K::LiteralList],
            Op::Branch | Op::ReturnValue => &[K::Id],
            Op::BranchConditional => &[K::Id, K::Id, K::Id, K::LiteralList],
            Op::SelectionMerge => &[K::Id, K::SelectionControl],
            Op::LoopMerge => &[K::Id, K::Id, K::LoopControl, K::LiteralList],
            Op::Nop
            | Op::TypeVoid
            | Op::TypeBool
            | Op::TypeSampler
            | Op::ConstantTrue
            | Op::ConstantFalse
            | Op::ConstantNull
            | Op::FunctionEnd
            | Op::Label
            | Op::Kill
            | Op::Return => &[],
            _ => &[K::IdList],
        }
    }

    /// Section this opcode is emitted into.
    ///
    /// `OpVariable` is listed as a global; once a function has begun it
    /// belongs to the code section instead, which callers decoding a whole
    /// binary must account for.
    pub fn section(self) -> SectionKind {
        if self.is_type() || self.is_constant() {
            return SectionKind::TypeConstDefs;
        }
        match self {
            Op::Capability => SectionKind::Capabilities,
            Op::MemoryModel => SectionKind::MemoryModel,
            Op::EntryPoint => SectionKind::EntryPoints,
            Op::ExecutionMode => SectionKind::ExecutionModes,
            Op::Name | Op::MemberName => SectionKind::DebugNames,
            Op::Decorate | Op::MemberDecorate => SectionKind::Annotations,
            Op::Variable => SectionKind::GlobalVariables,
            _ => SectionKind::Code,
        }
    }
}
