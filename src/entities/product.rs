//! Product entity - Represents a stocked inventory item.
//!
//! Each product has a name, an on-hand quantity, a unit price, and an optional
//! category reference. The reference is nullable on purpose: listings must not
//! break when a product's category cannot be resolved, so the join side always
//! treats the category as optional.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Hammer"). Not required to be unique.
    pub name: String,
    /// Units currently on hand, never negative
    pub quantity: i64,
    /// Price per unit, never negative
    pub unit_price: f64,
    /// ID of the category this product belongs to, if any
    pub category_id: Option<i64>,
    /// When the product was created
    pub created_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to at most one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
