//! Database configuration module for `Stockroom`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Category, Product, product};
use crate::errors::Result;
use sea_orm::sea_query::{ColumnDef, Table};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default local `SQLite` database, used when `DATABASE_URL` is not set.
/// `mode=rwc` creates the file on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/stockroom.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or
/// returns the default local `SQLite` path.
///
/// Connection strings are never embedded in source; they always arrive from
/// the environment (typically via a `.env` file loaded at startup).
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local file if unset.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables.
///
/// Idempotent: every statement carries `IF NOT EXISTS`, so calling this on
/// every process start leaves an already-initialized schema untouched.
///
/// The categories table is generated from its entity definition. The products
/// table is built by hand: entity generation would emit a FOREIGN KEY from the
/// category relation, and `SQLite` (via sqlx) enforces foreign keys, which
/// would make a dangling `category_id` unstorable. The category reference is
/// declared at the ORM level only; unresolved references are handled at query
/// time with an outer join, so listings keep working when a reference does not
/// resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut category_table = schema.create_table_from_entity(Category);
    category_table.if_not_exists();

    let product_table = Table::create()
        .table(Product)
        .if_not_exists()
        .col(
            ColumnDef::new(product::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(product::Column::Name).string().not_null())
        .col(
            ColumnDef::new(product::Column::Quantity)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(product::Column::UnitPrice)
                .double()
                .not_null(),
        )
        .col(ColumnDef::new(product::Column::CategoryId).big_integer())
        .col(
            ColumnDef::new(product::Column::CreatedAt)
                .date_time()
                .not_null(),
        )
        .to_owned();

    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&product_table)).await?;

    Ok(())
}
