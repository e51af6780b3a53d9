//! Demo: load the catalog, fill a basket, print it.

use basket_store::config::StoreConfig;
use basket_store::lifecycle::{setup_tracing, StoreSystem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = StoreConfig::from_env().map_err(|e| e.to_string())?;
    info!(url = %config.catalog_url, "Starting store");

    let system = StoreSystem::new(&config).map_err(|e| e.to_string())?;
    let store = &system.store_client;

    let span = tracing::info_span!("catalog_load");
    let loaded = async { store.fetch_products().await }.instrument(span).await;
    match loaded {
        Ok(count) => info!(count, "Catalog loaded"),
        Err(e) => error!(error = %e, "Catalog load failed, continuing with an empty catalog"),
    }

    let products = store.products().await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("shopping");
    async {
        // First product twice, then the next two once each
        let picks = products
            .first()
            .into_iter()
            .chain(products.first())
            .chain(products.iter().skip(1).take(2));
        for product in picks {
            let item = store
                .add_to_basket(product.clone())
                .await
                .map_err(|e| e.to_string())?;
            info!(product_id = %item.id(), quantity = item.quantity, "Added");
        }

        if store.basket().await.map_err(|e| e.to_string())?.len() > 1 {
            let removed = store
                .remove_from_basket(1)
                .await
                .map_err(|e| e.to_string())?;
            info!(product_id = %removed.id(), "Removed");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let basket = store.basket().await.map_err(|e| e.to_string())?;
    for (index, item) in basket.iter().enumerate() {
        info!(
            index,
            product_id = %item.id(),
            title = item.product.title().unwrap_or("-"),
            quantity = item.quantity,
            "Basket line"
        );
    }
    info!(lines = basket.len(), units = basket.total_quantity(), "Basket total");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
