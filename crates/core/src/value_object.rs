//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. Every structure the
/// prediction engines return (forecast points, summaries, recommendations)
/// is a value object: created fresh per call, no identity, no lifecycle.
///
/// The trait bounds encode the contract:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: values are compared attribute-by-attribute
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
