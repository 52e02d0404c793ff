//! Inventory summary statistics.
//!
//! Pure computation over an already-fetched product snapshot: no storage
//! access, no side effects. The presentation layer fetches the product list
//! once and feeds it here, so a failed fetch never produces a half-computed
//! summary.

use crate::entities::product;

/// Aggregate statistics over the current product set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    /// Sum of all product quantities
    pub total_quantity: i64,
    /// Sum of quantity times unit price over all products, full precision
    pub total_value: f64,
}

impl InventorySummary {
    /// Renders the total value with two-decimal monetary rounding.
    ///
    /// Rounding happens here, at presentation time only; `total_value` itself
    /// stays full precision.
    #[must_use]
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.total_value)
    }
}

/// Computes summary statistics for a product snapshot.
///
/// An empty snapshot is a valid, common state (an empty warehouse) and yields
/// zeros rather than an error.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_summary(products: &[product::Model]) -> InventorySummary {
    let total_quantity = products.iter().map(|p| p.quantity).sum();
    // Fold from +0.0 rather than `sum()`: the float `Sum` identity is -0.0,
    // which would render the empty warehouse as "-0.00"
    let total_value = products
        .iter()
        .fold(0.0, |acc, p| acc + p.quantity as f64 * p.unit_price);

    InventorySummary {
        total_quantity,
        total_value,
    }
}
