//! Category business logic - Handles all category-related operations.
//!
//! Provides functions for creating, listing, and looking up categories.
//! All functions are async and return Result types for error handling.
//! Categories are never updated or deleted; the only mutation is creation.

use crate::{
    entities::{Category, category},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, SqlErr, prelude::*};

/// Retrieves all categories from the database, ordered alphabetically by name.
///
/// The ordering keeps selection lists stable across refreshes regardless of
/// insertion order.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific category by its name, returning None if not found.
///
/// Used to resolve a category selected by name back to its row, e.g. when a
/// product is created against a category chosen from a list.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new category with the given name, performing input validation.
///
/// The name is trimmed before storage. Category names are unique: a conflict
/// with an existing name is reported as [`Error::DuplicateCategory`] so the
/// caller can surface it as a warning instead of a storage fault.
///
/// # Errors
/// Returns an error if:
/// - The category name is empty or whitespace-only
/// - A category with the same name already exists
/// - The database insert operation fails
pub async fn create_category(db: &DatabaseConnection, name: String) -> Result<category::Model> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let category = category::ActiveModel {
        name: Set(trimmed.to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    match category.insert(db).await {
        Ok(model) => Ok(model),
        Err(err) => {
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                Err(Error::DuplicateCategory {
                    name: trimmed.to_string(),
                })
            } else {
                Err(err.into())
            }
        }
    }
}
