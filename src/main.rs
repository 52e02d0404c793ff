//! Startup flow: open the inventory repository and print the current
//! snapshot (summary statistics plus the joined product listing).
//! The interactive admin frontend lives outside this crate.

use dotenvy::dotenv;
use stockroom::{
    config,
    core::{summary, view},
    errors::Result,
    repository::InventoryRepository,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Open the repository (connect + ensure schema)
    let url = config::database::get_database_url();
    let repo = InventoryRepository::open(&url)
        .await
        .inspect_err(|e| error!("Failed to open inventory database: {e}"))?;

    // 4. Summary statistics
    let products = repo.list_products().await?;
    let stats = summary::compute_summary(&products);
    println!("Items in stock: {}", stats.total_quantity);
    println!("Inventory value: {}", stats.formatted_value());

    // 5. Joined listing
    let rows = view::compose_rows(repo.list_products_with_category().await?);
    if rows.is_empty() {
        println!("No products in inventory.");
    } else {
        for row in &rows {
            println!(
                "#{} {} | qty {} | unit {:.2} | {}",
                row.id, row.name, row.quantity, row.unit_price, row.category
            );
        }
    }

    repo.close().await?;
    info!("Repository closed.");
    Ok(())
}
