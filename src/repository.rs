//! The repository - the sole mutation and query boundary of the core.
//!
//! [`InventoryRepository`] owns the database connection with an explicit
//! lifecycle: opened once at startup (which also ensures the schema exists),
//! passed to whatever needs it, closed at shutdown. No ambient global handle.

use crate::{
    config,
    core::{category, product},
    entities,
    errors::Result,
};
use sea_orm::{Database, DatabaseConnection};
use tracing::{info, instrument};

/// Handle over the inventory storage. All reads and writes go through here.
#[derive(Debug)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Opens the database at `url` and ensures the schema exists.
    ///
    /// Schema setup is idempotent, so calling this on every process start is
    /// safe.
    #[instrument]
    pub async fn open(url: &str) -> Result<Self> {
        let db = Database::connect(url).await?;
        config::database::create_tables(&db).await?;
        info!("Database opened and schema ensured");
        Ok(Self { db })
    }

    /// Wraps an already-established connection.
    ///
    /// The caller is responsible for having run schema setup; used by tests
    /// and by callers that manage the connection themselves.
    #[must_use]
    pub const fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Borrow the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Creates a new category. See [`category::create_category`].
    pub async fn create_category(&self, name: String) -> Result<entities::category::Model> {
        category::create_category(&self.db, name).await
    }

    /// Lists all categories, ordered by name.
    pub async fn list_categories(&self) -> Result<Vec<entities::category::Model>> {
        category::list_categories(&self.db).await
    }

    /// Resolves a category name to its row, if present.
    pub async fn get_category_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entities::category::Model>> {
        category::get_category_by_name(&self.db, name).await
    }

    /// Creates a new product. See [`product::create_product`].
    pub async fn create_product(
        &self,
        name: String,
        quantity: i64,
        unit_price: f64,
        category_id: Option<i64>,
    ) -> Result<entities::product::Model> {
        product::create_product(&self.db, name, quantity, unit_price, category_id).await
    }

    /// Lists all products, ordered by name.
    pub async fn list_products(&self) -> Result<Vec<entities::product::Model>> {
        product::list_products(&self.db).await
    }

    /// Lists all products left-joined with their category, ordered by name.
    pub async fn list_products_with_category(
        &self,
    ) -> Result<Vec<(entities::product::Model, Option<entities::category::Model>)>> {
        product::list_products_with_category(&self.db).await
    }

    /// Deletes the product with the given id. See [`product::delete_product`].
    pub async fn delete_product(&self, product_id: i64) -> Result<()> {
        product::delete_product(&self.db, product_id).await
    }

    /// Closes the underlying connection, consuming the handle.
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        core::{summary, view},
        errors::Error,
        test_utils::{create_custom_product, setup_test_db},
    };

    async fn setup_repository() -> Result<InventoryRepository> {
        Ok(InventoryRepository::from_connection(setup_test_db().await?))
    }

    #[tokio::test]
    async fn test_empty_inventory_snapshot() -> Result<()> {
        let repo = setup_repository().await?;

        let products = repo.list_products().await?;
        let stats = summary::compute_summary(&products);
        assert_eq!(stats.total_quantity, 0);
        assert_eq!(stats.formatted_value(), "0.00");

        let rows = view::compose_rows(repo.list_products_with_category().await?);
        assert!(rows.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_view_product_in_category() -> Result<()> {
        let repo = setup_repository().await?;

        let tools = repo.create_category("Tools".to_string()).await?;
        repo.create_product("Hammer".to_string(), 10, 5.50, Some(tools.id))
            .await?;

        let rows = view::compose_rows(repo.list_products_with_category().await?);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Hammer");
        assert_eq!(rows[0].quantity, 10);
        assert_eq!(rows[0].unit_price, 5.50);
        assert_eq!(rows[0].category, "Tools");

        let stats = summary::compute_summary(&repo.list_products().await?);
        assert_eq!(stats.total_quantity, 10);
        assert_eq!(stats.formatted_value(), "55.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_via_selection_entry_with_duplicate_names() -> Result<()> {
        let repo = setup_repository().await?;

        let first = repo
            .create_product("Widget".to_string(), 1, 1.0, None)
            .await?;
        let second = repo
            .create_product("Widget".to_string(), 2, 2.0, None)
            .await?;

        let rows = view::compose_rows(repo.list_products_with_category().await?);
        let index = view::build_selection_index(&rows);
        assert_eq!(index.len(), 2);

        // Pick the entry for the second product and delete through it
        let entry = index
            .iter()
            .find(|e| e.product_id == second.id)
            .unwrap();
        repo.delete_product(entry.product_id).await?;

        let remaining = repo.list_products().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, first.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_orphan_reference_renders_placeholder() -> Result<()> {
        let repo = setup_repository().await?;

        // Seed directly through the borrowed connection, dangling reference
        create_custom_product(repo.connection(), "Orphan", 2, 3.0, Some(999)).await?;

        let rows = view::compose_rows(repo.list_products_with_category().await?);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, view::NO_CATEGORY_LABEL);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_rows_untouched() -> Result<()> {
        let repo = setup_repository().await?;

        repo.create_product("Hammer".to_string(), 10, 5.50, None)
            .await?;

        let result = repo.delete_product(999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ProductNotFound { id: 999 }
        ));
        assert_eq!(repo.list_products().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_mutation_then_refetch_reflects_state() -> Result<()> {
        let repo = setup_repository().await?;

        let tools = repo.create_category("Tools".to_string()).await?;
        let hammer = repo
            .create_product("Hammer".to_string(), 10, 5.50, Some(tools.id))
            .await?;
        repo.create_product("Wrench".to_string(), 3, 12.0, Some(tools.id))
            .await?;

        // Full refetch after a mutation, as the presentation layer does
        repo.delete_product(hammer.id).await?;
        let products = repo.list_products().await?;
        let stats = summary::compute_summary(&products);
        assert_eq!(stats.total_quantity, 3);
        assert_eq!(stats.formatted_value(), "36.00");

        Ok(())
    }
}
