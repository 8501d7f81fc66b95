mod actors;
mod app_system;
mod clients;
mod config;
mod domain;
mod error;
mod messages;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, OrderSystem};
use crate::config::Config;
use crate::domain::{OrderItemRequest, OrderPageQuery, OrderStatus, ProductRecord};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting order system");

    // Create the entire order system (starts all actors)
    let system = OrderSystem::new(&config);

    // Seed the stand-in catalog the way the external product service would.
    let products = [
        ProductRecord::new("prod_keyboard", "Mechanical Keyboard", Decimal::new(7999, 2)),
        ProductRecord::new("prod_mouse", "Wireless Mouse", Decimal::new(2450, 2)),
    ];
    for product in products {
        system
            .catalog_client
            .register_product(product)
            .await
            .map_err(|e| e.to_string())?;
    }

    let span = tracing::info_span!("order_creation");
    let created = async {
        info!("Creating demo order");
        system
            .order_client
            .create_order(vec![
                OrderItemRequest::new("prod_keyboard", 1),
                OrderItemRequest::new("prod_mouse", 2),
            ])
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        order_id = %created.order.id,
        total_amount = %created.order.total_amount,
        total_items = created.order.total_items,
        "Order created successfully"
    );

    let fetched = system
        .order_client
        .find_order_by_id(created.order.id.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(item_count = fetched.items.len(), "Order fetched with enriched items");

    let span = tracing::info_span!("status_change");
    let updated = async {
        info!("Marking order as paid");
        system
            .order_client
            .change_order_status(created.order.id.clone(), OrderStatus::Paid)
            .await
    }
    .instrument(span)
    .await;

    match updated {
        Ok(view) => info!(status = ?view.order.status, "Order status changed"),
        Err(e) => error!(error = %e, "Status change failed"),
    }

    let page = system
        .order_client
        .find_orders(OrderPageQuery::default())
        .await
        .map_err(|e| e.to_string())?;
    info!(
        total = page.meta.total,
        last_page = page.meta.last_page,
        "Listed orders"
    );

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
