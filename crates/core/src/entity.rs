//! Entity trait: identity that outlives the values attached to it.

/// Entity marker + minimal interface.
///
/// A scored receipt is an entity: two submissions of byte-identical receipts
/// are still two distinct records with distinct identifiers.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
