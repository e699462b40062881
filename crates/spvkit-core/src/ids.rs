//! Result identifiers and their allocator.

use std::fmt;

/// A module-unique result identifier.
///
/// Identifiers carry no meaning beyond identity. They are ordered by
/// allocation order, which is the only ordering the format cares about.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct Id(u32);

impl Id {
    /// Raw word for encoding into operands.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create an Id from a raw operand word. Use only when decoding.
    #[inline]
    pub fn from_raw(word: u32) -> Self {
        Self(word)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> Self {
        id.0
    }
}

/// Hands out strictly increasing identifiers.
///
/// Id 0 is never valid in a module, so the counter starts at 1. The current
/// counter value is the module's id bound: every allocated id is below it.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next identifier and advance the counter.
    ///
    /// No ceiling is enforced here; consumers of the binary impose their own.
    #[inline]
    pub fn allocate(&mut self) -> Id {
        let id = Id(self.next);
        self.next += 1;
        id
    }

    /// One past the highest identifier handed out so far.
    #[inline]
    pub fn bound(&self) -> u32 {
        self.next
    }
}
