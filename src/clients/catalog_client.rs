use tokio::sync::mpsc;

use crate::client_method;
use crate::domain::ProductRecord;
use crate::error::CatalogError;
use crate::messages::CatalogRequest;

/// Client for the product catalog collaborator.
///
/// One batched round trip resolves product ids to live records; this is the
/// single suspension point of every order pipeline. No retries here: retry
/// policy belongs to the channel, not the core.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }
}

client_method!(CatalogClient => fn validate_products(ids: Vec<String>) -> Vec<ProductRecord> as CatalogRequest::ValidateProducts, Error = CatalogError);
client_method!(CatalogClient => fn register_product(product: ProductRecord) -> () as CatalogRequest::RegisterProduct, Error = CatalogError);
