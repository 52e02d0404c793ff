//! Display rows and the selection index.
//!
//! Pure functions that turn the repository's joined listing into what the
//! presentation layer shows: denormalized rows with a readable category label,
//! and a label-to-identifier index for resolving the user's delete selection
//! back to a concrete row.

use crate::entities::{category, product};

/// Label rendered when a product's category reference does not resolve.
pub const NO_CATEGORY_LABEL: &str = "(none)";

/// A denormalized product row ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Units on hand
    pub quantity: i64,
    /// Price per unit
    pub unit_price: f64,
    /// Category name, or [`NO_CATEGORY_LABEL`] when unresolved
    pub category: String,
}

/// One entry of the selection index: a human-readable label tied to the
/// product it identifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    /// Display label, unique across the current row set
    pub label: String,
    /// Identifier of the product the label resolves to
    pub product_id: i64,
}

/// Builds display rows from the repository's joined listing, preserving its
/// order.
///
/// A missing category never propagates as a null; it renders as
/// [`NO_CATEGORY_LABEL`].
#[must_use]
pub fn compose_rows(products: Vec<(product::Model, Option<category::Model>)>) -> Vec<DisplayRow> {
    products
        .into_iter()
        .map(|(product, category)| DisplayRow {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            unit_price: product.unit_price,
            category: category.map_or_else(|| NO_CATEGORY_LABEL.to_string(), |c| c.name),
        })
        .collect()
}

/// Builds the selection index for the given rows, preserving their order.
///
/// The product id is embedded in every label, so two products sharing a name
/// still get distinct labels and the selection always resolves to the row the
/// user actually picked. A name-only label would delete the wrong product on
/// a name collision.
#[must_use]
pub fn build_selection_index(rows: &[DisplayRow]) -> Vec<SelectionEntry> {
    rows.iter()
        .map(|row| SelectionEntry {
            label: format!("{} (ID {})", row.name, row.id),
            product_id: row.id,
        })
        .collect()
}
