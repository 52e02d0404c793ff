//! Product business logic - Handles all product-related operations.
//!
//! This module provides functions for creating, listing, and deleting products
//! within the inventory. Listing comes in two flavors: plain product rows for
//! aggregation, and products joined with their category for display. The join
//! is a left join so a product whose category reference does not resolve still
//! appears, with the category side absent. All functions are async and return
//! Result types for proper error handling throughout the system.

use crate::{
    entities::{Category, Product, category, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all products from the database, ordered alphabetically by name.
///
/// This is the snapshot the aggregator consumes; it carries no category
/// information.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all products joined with their category, ordered alphabetically
/// by product name.
///
/// Performs a left join: a product whose `category_id` is null or points at a
/// category that no longer exists is still returned, paired with `None`.
pub async fn list_products_with_category(
    db: &DatabaseConnection,
) -> Result<Vec<(product::Model, Option<category::Model>)>> {
    Product::find()
        .find_also_related(Category)
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product with the specified parameters, performing input validation.
///
/// This function validates that the name is not empty after trimming, the
/// quantity is non-negative, and the unit price is non-negative and finite.
/// Validation happens here even when the input boundary already checked, so
/// the storage layer never sees a row that violates the invariants.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The quantity is negative
/// - The unit price is negative or not finite (NaN, infinity)
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    quantity: i64,
    unit_price: f64,
    category_id: Option<i64>,
) -> Result<product::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if quantity < 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    if unit_price < 0.0 || !unit_price.is_finite() {
        return Err(Error::InvalidUnitPrice { price: unit_price });
    }

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        category_id: Set(category_id),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Deletes the product with the given ID.
///
/// Removes exactly one row. If no row matches, returns
/// [`Error::ProductNotFound`] and changes nothing, so repeating a delete is
/// harmless: the second call reports not-found instead of corrupting state.
///
/// # Errors
/// Returns an error if:
/// - No product with the given ID exists
/// - The database delete operation fails
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    Ok(())
}
