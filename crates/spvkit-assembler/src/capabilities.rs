//! Capability declarations.

use spvkit_bytecode::{Capability, Op, SectionKind};
use tracing::trace;

use crate::Module;

impl Module {
    /// Declare `capability`, once.
    ///
    /// The capability section is scanned for an existing declaration; it
    /// stays small, so a linear scan is enough.
    pub fn enable_capability(&mut self, capability: Capability) {
        if self.has_capability(capability) {
            return;
        }

        self.section_mut(SectionKind::Capabilities)
            .append(Op::Capability, &[capability.word()]);
        trace!(capability = capability.name(), "enabled capability");
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.section(SectionKind::Capabilities)
            .instructions()
            .map_while(Result::ok)
            .any(|inst| {
                inst.op() == Some(Op::Capability) && inst.operand(0) == Some(capability.word())
            })
    }
}
