//! Core business logic - framework-agnostic inventory operations.
//!
//! Everything in here is independent of the presentation layer: the storage
//! modules take a `DatabaseConnection` and return models or typed errors,
//! while `summary` and `view` are pure functions over already-fetched rows.

/// Category operations - create, list, lookup
pub mod category;
/// Product operations - create, list with category join, delete
pub mod product;
/// Aggregate statistics over the current product set
pub mod summary;
/// Display rows and the selection-to-identifier index
pub mod view;
