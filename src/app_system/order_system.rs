use tracing::{error, info};
use uuid::Uuid;

use crate::actors::{CatalogService, OrderService, OrderStoreService};
use crate::clients::{CatalogClient, OrderClient, OrderStoreClient};
use crate::config::Config;

/// The main application system that wires and supervises all actors.
///
/// Responsible for starting up actors, injecting their dependencies, and
/// handling shutdown. The order service receives its collaborator clients
/// here, once, at startup; nothing reaches them through globals.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub catalog_client: CatalogClient,
    pub store_client: OrderStoreClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(config: &Config) -> Self {
        let capacity = config.channel_capacity;

        // 1. Catalog collaborator
        let (catalog_service, catalog_client) = CatalogService::new(capacity);
        let catalog_handle = tokio::spawn(catalog_service.run());

        // 2. Order store collaborator
        let next_order_id = || Uuid::new_v4().to_string();
        let (store_service, store_client) = OrderStoreService::new(capacity, next_order_id);
        let store_handle = tokio::spawn(store_service.run());

        // 3. Order service core
        let (order_service, order_client) = OrderService::new(
            capacity,
            catalog_client.clone(),
            store_client.clone(),
            config.default_page_size,
        );
        let order_handle = tokio::spawn(order_service.run());

        Self {
            order_client,
            catalog_client,
            store_client,
            handles: vec![catalog_handle, store_handle, order_handle],
        }
    }

    /// Graceful shutdown: dropping the clients closes the request channels,
    /// and each actor exits once its channel drains.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.catalog_client);
        drop(self.store_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
