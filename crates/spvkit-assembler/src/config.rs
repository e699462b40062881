//! Module configuration.

use spvkit_bytecode::{DEFAULT_GENERATOR, Version};

/// Settings that affect the compiled header and which optional
/// instructions are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Format version written to the header (default: 1.0).
    pub(crate) version: Version,
    /// Generator magic written to the header (default: 0, unregistered).
    pub(crate) generator: u32,
    /// Emit `OpName`/`OpMemberName` (default: true).
    pub(crate) debug_names: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            version: Version::V1_0,
            generator: DEFAULT_GENERATOR,
            debug_names: true,
        }
    }
}

impl ModuleConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header version.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set the generator word, `(tool << 16) | tool_version`.
    pub fn generator(mut self, generator: u32) -> Self {
        self.generator = generator;
        self
    }

    /// Set whether debug names are emitted.
    pub fn debug_names(mut self, enabled: bool) -> Self {
        self.debug_names = enabled;
        self
    }

    pub fn get_version(&self) -> Version {
        self.version
    }
    pub fn get_generator(&self) -> u32 {
        self.generator
    }
    pub fn get_debug_names(&self) -> bool {
        self.debug_names
    }
}
