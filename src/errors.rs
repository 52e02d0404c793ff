//! Unified error types for the inventory core.
//!
//! Every operation in the crate returns [`Result`]. None of these variants is
//! fatal to the process: the caller surfaces the message and aborts the single
//! operation that failed.

use thiserror::Error;

/// All errors the inventory core can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field failed input validation (empty name after trimming).
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of what failed validation
        message: String,
    },

    /// A product quantity was negative.
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// A product unit price was negative or not finite.
    #[error("Invalid unit price: {price}")]
    InvalidUnitPrice {
        /// The rejected price
        price: f64,
    },

    /// A category with the same name already exists.
    #[error("Category '{name}' already exists")]
    DuplicateCategory {
        /// The conflicting category name
        name: String,
    },

    /// No product row matched the given identifier.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The identifier that matched nothing
        id: i64,
    },

    /// Configuration problem (bad database URL, missing environment).
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration problem
        message: String,
    },

    /// Storage engine failure (connectivity, constraint, transport).
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
