//! Binary format constants.

/// First word of every module.
pub const MAGIC: u32 = 0x0723_0203;

/// `MAGIC` as it reads when the producer used the opposite byte order.
pub const MAGIC_SWAPPED: u32 = MAGIC.swap_bytes();

/// Header length in words: magic, version, generator, bound, schema.
pub const HEADER_WORDS: usize = 5;

/// Generator id written when none is configured (unregistered tool).
pub const DEFAULT_GENERATOR: u32 = 0;
