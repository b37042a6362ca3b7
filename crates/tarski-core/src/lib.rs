//! Core types for Tarski grid worlds: entities, the world registry, and the
//! predicate library.
//!
//! This crate is independent of the query language: you can build a
//! [`World`] programmatically or load one from JSON, and call the predicates
//! in [`predicate`] directly.

/// Entity types: shapes, sizes, and grid positions.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The fixed library of geometric predicates.
pub mod predicate;
/// The world registry that owns entities.
pub mod world;

/// Re-export core entity types.
pub use entity::{Entity, Position, Shape, Size};
/// Re-export error types.
pub use error::{TarskiError, TarskiResult};
/// Re-export predicate types.
pub use predicate::{Predicate, PredicateFn};
/// Re-export world model types.
pub use world::World;
