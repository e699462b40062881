//! Structural interning of definitions.
//!
//! A definition is identified by its opcode and its operand words, excluding
//! the result identifier. Two requests with the same key must resolve to the
//! same [`Id`]; the index records the first identifier assigned to each key.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::Id;

/// Structural identity of a type or constant definition.
///
/// `operands` holds every operand except the result id, in encoding order
/// (a constant's result type comes first).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DefinitionKey {
    pub opcode: u16,
    pub operands: Box<[u32]>,
}

impl DefinitionKey {
    pub fn new(opcode: u16, operands: &[u32]) -> Self {
        Self {
            opcode,
            operands: operands.into(),
        }
    }
}

/// Map from definition key to the identifier assigned on first request.
///
/// Iteration follows insertion order, which matches the order the
/// definitions were appended to their section.
#[derive(Debug, Clone, Default)]
pub struct DefinitionIndex {
    map: IndexMap<DefinitionKey, Id>,
}

impl DefinitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously interned definition.
    #[inline]
    pub fn get(&self, key: &DefinitionKey) -> Option<Id> {
        self.map.get(key).copied()
    }

    /// Return the identifier for `key`, calling `create` only when the key is
    /// new. The flag is `true` when `create` ran.
    pub fn get_or_insert_with(
        &mut self,
        key: DefinitionKey,
        create: impl FnOnce(&DefinitionKey) -> Id,
    ) -> (Id, bool) {
        match self.map.entry(key) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                let id = create(entry.key());
                entry.insert(id);
                (id, true)
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate definitions in the order they were interned.
    pub fn iter(&self) -> impl Iterator<Item = (&DefinitionKey, Id)> {
        self.map.iter().map(|(key, &id)| (key, id))
    }
}
