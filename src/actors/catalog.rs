use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::CatalogClient;
use crate::domain::ProductRecord;
use crate::messages::CatalogRequest;

/// In-process stand-in for the external product catalog service.
///
/// Answers a validation request with exactly the subset of requested ids it
/// can resolve; missing ids are simply absent from the response. Registered
/// products can be re-registered to simulate catalog price drift.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    products: HashMap<String, ProductRecord>,
}

impl CatalogService {
    pub fn new(buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            products: HashMap::new(),
        };
        let client = CatalogClient::new(sender);
        (service, client)
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!("CatalogService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::ValidateProducts { ids, respond_to } => {
                    let resolved: Vec<ProductRecord> = ids
                        .iter()
                        .filter_map(|id| self.products.get(id).cloned())
                        .collect();
                    debug!(
                        requested = ids.len(),
                        resolved = resolved.len(),
                        "Validated products"
                    );
                    let _ = respond_to.send(Ok(resolved));
                }
                CatalogRequest::RegisterProduct { product, respond_to } => {
                    info!(product_id = %product.id, "Product registered");
                    self.products.insert(product.id.clone(), product);
                    let _ = respond_to.send(Ok(()));
                }
            }
        }
        info!("CatalogService stopped");
    }
}
