//! Category entity - Represents the named groupings products are assigned to.
//!
//! Categories only carry a name. They are created once and never updated or
//! deleted by this core, so a product can outlive the category selection it
//! was created with only by carrying a dangling reference (handled at query
//! time with an outer join, never assumed resolved).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the category (e.g., "Tools", "Electronics").
    /// Unique across all categories; conflicts surface as a recoverable
    /// duplicate error rather than a crash.
    #[sea_orm(unique)]
    pub name: String,
    /// When the category was created
    pub created_at: DateTime,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
