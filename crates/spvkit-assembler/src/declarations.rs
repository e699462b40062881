//! Module-level declarations: memory model, entry points, execution modes,
//! debug names and decorations.

use spvkit_bytecode::{
    AddressingModel, BuiltIn, Decoration, ExecutionMode, ExecutionModel, MemoryModel, Op,
    SectionKind,
};
use spvkit_core::Id;
use spvkit_core::words::{push_str, str_word_count};

use crate::Module;
use crate::module::id_words;

impl Module {
    pub fn set_memory_model(&mut self, addressing: AddressingModel, memory: MemoryModel) {
        self.section_mut(SectionKind::MemoryModel)
            .append(Op::MemoryModel, &[addressing.word(), memory.word()]);
    }

    /// Declare `entry_id` as an entry point. `interface_ids` lists the
    /// global variables the entry point reads or writes.
    pub fn add_entry_point(
        &mut self,
        model: ExecutionModel,
        entry_id: Id,
        name: &str,
        interface_ids: &[Id],
    ) {
        let mut operands =
            Vec::with_capacity(2 + str_word_count(name) + interface_ids.len());
        operands.push(model.word());
        operands.push(entry_id.as_u32());
        push_str(&mut operands, name);
        operands.extend(id_words(interface_ids));
        self.section_mut(SectionKind::EntryPoints)
            .append(Op::EntryPoint, &operands);
    }

    pub fn set_execution_mode(&mut self, entry_id: Id, mode: ExecutionMode, literals: &[u32]) {
        let mut operands = Vec::with_capacity(2 + literals.len());
        operands.push(entry_id.as_u32());
        operands.push(mode.word());
        operands.extend_from_slice(literals);
        self.section_mut(SectionKind::ExecutionModes)
            .append(Op::ExecutionMode, &operands);
    }

    pub fn enable_early_fragment_tests(&mut self, entry_id: Id) {
        self.set_execution_mode(entry_id, ExecutionMode::EarlyFragmentTests, &[]);
    }

    pub fn set_local_size(&mut self, entry_id: Id, x: u32, y: u32, z: u32) {
        self.set_execution_mode(entry_id, ExecutionMode::LocalSize, &[x, y, z]);
    }

    pub fn set_origin_upper_left(&mut self, entry_id: Id) {
        self.set_execution_mode(entry_id, ExecutionMode::OriginUpperLeft, &[]);
    }

    /// Attach a debug name. No-op when debug names are disabled.
    pub fn set_debug_name(&mut self, id: Id, name: &str) {
        if !self.config.debug_names {
            return;
        }
        let mut operands = Vec::with_capacity(1 + str_word_count(name));
        operands.push(id.as_u32());
        push_str(&mut operands, name);
        self.section_mut(SectionKind::DebugNames)
            .append(Op::Name, &operands);
    }

    pub fn set_debug_member_name(&mut self, struct_id: Id, member: u32, name: &str) {
        if !self.config.debug_names {
            return;
        }
        let mut operands = Vec::with_capacity(2 + str_word_count(name));
        operands.push(struct_id.as_u32());
        operands.push(member);
        push_str(&mut operands, name);
        self.section_mut(SectionKind::DebugNames)
            .append(Op::MemberName, &operands);
    }

    pub fn decorate(&mut self, id: Id, decoration: Decoration, literals: &[u32]) {
        let mut operands = Vec::with_capacity(2 + literals.len());
        operands.push(id.as_u32());
        operands.push(decoration.word());
        operands.extend_from_slice(literals);
        self.section_mut(SectionKind::Annotations)
            .append(Op::Decorate, &operands);
    }

    pub fn decorate_block(&mut self, id: Id) {
        self.decorate(id, Decoration::Block, &[]);
    }

    pub fn decorate_builtin(&mut self, id: Id, builtin: BuiltIn) {
        self.decorate(id, Decoration::BuiltIn, &[builtin.word()]);
    }

    pub fn decorate_component(&mut self, id: Id, component: u32) {
        self.decorate(id, Decoration::Component, &[component]);
    }

    pub fn decorate_location(&mut self, id: Id, location: u32) {
        self.decorate(id, Decoration::Location, &[location]);
    }

    pub fn decorate_binding(&mut self, id: Id, binding: u32) {
        self.decorate(id, Decoration::Binding, &[binding]);
    }

    pub fn decorate_descriptor_set(&mut self, id: Id, set: u32) {
        self.decorate(id, Decoration::DescriptorSet, &[set]);
    }

    pub fn member_decorate(
        &mut self,
        struct_id: Id,
        member: u32,
        decoration: Decoration,
        literals: &[u32],
    ) {
        let mut operands = Vec::with_capacity(3 + literals.len());
        operands.push(struct_id.as_u32());
        operands.push(member);
        operands.push(decoration.word());
        operands.extend_from_slice(literals);
        self.section_mut(SectionKind::Annotations)
            .append(Op::MemberDecorate, &operands);
    }

    pub fn member_decorate_builtin(&mut self, struct_id: Id, member: u32, builtin: BuiltIn) {
        self.member_decorate(struct_id, member, Decoration::BuiltIn, &[builtin.word()]);
    }

    /// Byte offset of `member` within its struct.
    pub fn member_decorate_offset(&mut self, struct_id: Id, member: u32, offset: u32) {
        self.member_decorate(struct_id, member, Decoration::Offset, &[offset]);
    }
}
