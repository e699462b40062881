//! Variables, functions and function bodies.

use spvkit_bytecode::{
    FunctionControl, LoopControl, MemoryAccess, Op, SectionKind, SelectionControl,
    StorageClass,
};
use spvkit_core::Id;

use crate::Module;
use crate::module::id_words;

impl Module {
    /// Declare a global variable of pointer type `pointer_type`.
    pub fn new_var(&mut self, pointer_type: Id, storage_class: StorageClass) -> Id {
        let result = self.ids.allocate();
        self.section_mut(SectionKind::GlobalVariables).append(
            Op::Variable,
            &[pointer_type.as_u32(), result.as_u32(), storage_class.word()],
        );
        result
    }

    /// Declare a function-local variable. Must follow the function's first
    /// label.
    pub fn new_function_var(&mut self, pointer_type: Id) -> Id {
        self.emit_typed(
            Op::Variable,
            pointer_type,
            &[StorageClass::Function.word()],
        )
    }

    /// Open a function. `function_id` is usually pre-allocated with
    /// [`Module::allocate_id`] so it can be referenced before its body.
    pub fn function_begin(
        &mut self,
        return_type: Id,
        function_id: Id,
        function_type: Id,
        control: FunctionControl,
    ) {
        debug_assert!(
            !self.function.open,
            "function {function_id} begins inside another function"
        );
        self.function.open = true;
        self.function.labeled = false;

        self.emit_code(
            Op::Function,
            &[
                return_type.as_u32(),
                function_id.as_u32(),
                control.word(),
                function_type.as_u32(),
            ],
        );
    }

    pub fn function_parameter(&mut self, parameter_type: Id) -> Id {
        debug_assert!(
            self.function.open && !self.function.labeled,
            "function parameter must directly follow OpFunction"
        );
        self.emit_typed(Op::FunctionParameter, parameter_type, &[])
    }

    pub fn function_end(&mut self) {
        debug_assert!(self.function.open, "function_end without function_begin");
        self.function.open = false;
        self.emit_code(Op::FunctionEnd, &[]);
    }

    /// Start a block. The label id is pre-allocated by the caller.
    pub fn op_label(&mut self, label_id: Id) {
        debug_assert!(self.function.open, "label {label_id} outside a function");
        self.function.labeled = true;
        self.emit_code(Op::Label, &[label_id.as_u32()]);
    }

    pub fn op_bitcast(&mut self, result_type: Id, operand: Id) -> Id {
        self.emit_typed(Op::Bitcast, result_type, &[operand.as_u32()])
    }

    /// One-operand arithmetic or conversion (`OpSNegate`, `OpConvertFToU`, ...).
    pub fn op_unary(&mut self, op: Op, result_type: Id, operand: Id) -> Id {
        self.emit_typed(op, result_type, &[operand.as_u32()])
    }

    /// Two-operand arithmetic or comparison (`OpIAdd`, `OpFMul`, `OpIEqual`, ...).
    pub fn op_binary(&mut self, op: Op, result_type: Id, lhs: Id, rhs: Id) -> Id {
        self.emit_typed(op, result_type, &[lhs.as_u32(), rhs.as_u32()])
    }

    pub fn op_composite_extract(&mut self, result_type: Id, composite: Id, indices: &[u32]) -> Id {
        let mut operands = Vec::with_capacity(1 + indices.len());
        operands.push(composite.as_u32());
        operands.extend_from_slice(indices);
        self.emit_typed(Op::CompositeExtract, result_type, &operands)
    }

    pub fn op_composite_construct(&mut self, result_type: Id, constituents: &[Id]) -> Id {
        let operands: Vec<u32> = id_words(constituents).collect();
        self.emit_typed(Op::CompositeConstruct, result_type, &operands)
    }

    /// Select components from two vectors. Index `0xFFFF_FFFF` marks an
    /// undefined component.
    pub fn op_vector_shuffle(
        &mut self,
        result_type: Id,
        left: Id,
        right: Id,
        components: &[u32],
    ) -> Id {
        let mut operands = Vec::with_capacity(2 + components.len());
        operands.push(left.as_u32());
        operands.push(right.as_u32());
        operands.extend_from_slice(components);
        self.emit_typed(Op::VectorShuffle, result_type, &operands)
    }

    pub fn op_function_call(&mut self, result_type: Id, function_id: Id, args: &[Id]) -> Id {
        let mut operands = Vec::with_capacity(1 + args.len());
        operands.push(function_id.as_u32());
        operands.extend(id_words(args));
        self.emit_typed(Op::FunctionCall, result_type, &operands)
    }

    /// Pointer into a composite. Indices are ids of integer constants or
    /// values.
    pub fn op_access_chain(&mut self, result_type: Id, base: Id, indices: &[Id]) -> Id {
        let mut operands = Vec::with_capacity(1 + indices.len());
        operands.push(base.as_u32());
        operands.extend(id_words(indices));
        self.emit_typed(Op::AccessChain, result_type, &operands)
    }

    pub fn op_load(&mut self, result_type: Id, pointer: Id) -> Id {
        self.emit_typed(Op::Load, result_type, &[pointer.as_u32()])
    }

    pub fn op_load_with(&mut self, result_type: Id, pointer: Id, access: MemoryAccess) -> Id {
        self.emit_typed(Op::Load, result_type, &[pointer.as_u32(), access.word()])
    }

    pub fn op_store(&mut self, pointer: Id, value: Id) {
        self.emit_code(Op::Store, &[pointer.as_u32(), value.as_u32()]);
    }

    pub fn op_return(&mut self) {
        self.emit_code(Op::Return, &[]);
    }

    pub fn op_return_value(&mut self, value: Id) {
        self.emit_code(Op::ReturnValue, &[value.as_u32()]);
    }

    pub fn op_kill(&mut self) {
        self.emit_code(Op::Kill, &[]);
    }

    pub fn op_branch(&mut self, target: Id) {
        self.emit_code(Op::Branch, &[target.as_u32()]);
    }

    pub fn op_branch_conditional(&mut self, condition: Id, true_label: Id, false_label: Id) {
        self.emit_code(
            Op::BranchConditional,
            &[condition.as_u32(), true_label.as_u32(), false_label.as_u32()],
        );
    }

    /// Declare the merge block of a selection. Must immediately precede the
    /// block's branch instruction.
    pub fn op_selection_merge(&mut self, merge_block: Id, control: SelectionControl) {
        self.emit_code(Op::SelectionMerge, &[merge_block.as_u32(), control.word()]);
    }

    pub fn op_loop_merge(&mut self, merge_block: Id, continue_target: Id, control: LoopControl) {
        self.emit_code(
            Op::LoopMerge,
            &[merge_block.as_u32(), continue_target.as_u32(), control.word()],
        );
    }
}
