//! Shared test utilities for `Stockroom`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{category, product},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test category with the given name.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string()).await
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `quantity`: 1
/// * `unit_price`: 10.0
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    category_id: Option<i64>,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), 1, 10.0, category_id).await
}

/// Creates a test product with custom quantity and price.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    quantity: i64,
    unit_price: f64,
    category_id: Option<i64>,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), quantity, unit_price, category_id).await
}

/// Sets up a complete test environment with one category.
/// Returns (db, category) for common test scenarios.
pub async fn setup_with_category() -> Result<(DatabaseConnection, entities::category::Model)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Tools").await?;
    Ok((db, category))
}
