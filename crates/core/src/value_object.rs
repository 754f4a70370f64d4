//! Value object trait: equality by value, not identity.
//!
//! Receipts and their line items are value objects: a receipt is nothing more
//! than the fields it was submitted with, and two receipts with the same fields
//! are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct LineItem {
///     short_description: String,
///     price: String,
/// }
///
/// impl ValueObject for LineItem {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
