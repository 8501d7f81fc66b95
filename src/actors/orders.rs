use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::{CatalogClient, OrderClient, OrderStoreClient};
use crate::domain::{
    OrderDraft, OrderItem, OrderItemRequest, OrderItemView, OrderPage, OrderPageQuery,
    OrderStatus, OrderView, OrderWithItems, PageMeta, ProductRecord,
};
use crate::error::{OrderError, StoreError};
use crate::messages::{OrderRequest, ServiceResponse};

/// The order service core.
///
/// Receives the RPC surface as typed messages and orchestrates the product
/// catalog and the order store, which it holds by composition. The catalog
/// round trip is the only suspension point of each pipeline; validation
/// strictly precedes persistence, persistence strictly precedes the
/// response, and nothing is retried.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    catalog: CatalogClient,
    store: OrderStoreClient,
    default_page_size: u32,
}

impl OrderService {
    pub fn new(
        buffer_size: usize,
        catalog: CatalogClient,
        store: OrderStoreClient,
        default_page_size: u32,
    ) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            catalog,
            store,
            default_page_size,
        };
        let client = OrderClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::CreateOrder { items, respond_to } => {
                    let result = self.create_order(items).await;
                    Self::reply(result, respond_to);
                }
                OrderRequest::FindOrders { query, respond_to } => {
                    let result = self.find_orders(query).await;
                    Self::reply(result, respond_to);
                }
                OrderRequest::FindOrderById { id, respond_to } => {
                    let result = self.find_order_by_id(id).await;
                    Self::reply(result, respond_to);
                }
                OrderRequest::ChangeOrderStatus { id, status, respond_to } => {
                    let result = self.change_order_status(id, status).await;
                    Self::reply(result, respond_to);
                }
            }
        }
        info!("OrderService stopped");
    }

    /// Uniform pipeline boundary: failures are logged with their client
    /// status code, then re-signaled to the caller as a value.
    fn reply<T>(result: Result<T, OrderError>, respond_to: ServiceResponse<T, OrderError>) {
        if let Err(e) = &result {
            error!(status = e.status(), error = %e, "Request rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, items))]
    async fn create_order(&self, items: Vec<OrderItemRequest>) -> Result<OrderView, OrderError> {
        info!(item_count = items.len(), "Processing create_order request");
        validate_items(&items)?;

        // One batched round trip over the distinct id set; each input row
        // still becomes its own item below.
        let ids = distinct_product_ids(items.iter().map(|item| &item.product_id));
        let products = self.validate_products(ids).await?;

        let mut rows = Vec::with_capacity(items.len());
        for item in &items {
            let product = find_product(&products, &item.product_id)?;
            rows.push(OrderItem {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                price: product.price,
            });
        }

        let total_amount: Decimal = rows
            .iter()
            .map(|row| row.price * Decimal::from(row.quantity))
            .sum();
        let total_items: u32 = rows.iter().map(|row| row.quantity).sum();

        let draft = OrderDraft {
            total_amount,
            total_items,
            items: rows,
        };
        let persisted = self
            .store
            .create_with_items(draft)
            .await
            .map_err(store_failure)?;
        info!(
            order_id = %persisted.order.id,
            total_amount = %persisted.order.total_amount,
            "Order created"
        );

        enrich(persisted, &products)
    }

    #[instrument(skip(self))]
    async fn find_orders(&self, query: OrderPageQuery) -> Result<OrderPage, OrderError> {
        let page = query.page.unwrap_or(1);
        let limit = query.limit.unwrap_or(self.default_page_size);
        if page < 1 {
            return Err(OrderError::ValidationError(
                "page must be at least 1".to_string(),
            ));
        }
        if limit < 1 {
            return Err(OrderError::ValidationError(
                "limit must be at least 1".to_string(),
            ));
        }

        let total = self
            .store
            .count_by_status(query.status)
            .await
            .map_err(store_failure)?;
        let data = self
            .store
            .list_page(query.status, page, limit)
            .await
            .map_err(store_failure)?;
        let last_page = total.div_ceil(u64::from(limit));
        debug!(page, total, last_page, "Listed orders");

        Ok(OrderPage {
            data,
            meta: PageMeta {
                page,
                total,
                last_page,
            },
        })
    }

    #[instrument(fields(order_id = %id), skip(self, id))]
    async fn find_order_by_id(&self, id: String) -> Result<OrderView, OrderError> {
        debug!("Processing find_order_by_id request");
        let stored = self
            .store
            .find_by_id(id.clone())
            .await
            .map_err(store_failure)?
            .ok_or(OrderError::NotFound(id))?;

        let ids = distinct_product_ids(stored.items.iter().map(|item| &item.product_id));
        let products = self.validate_products(ids).await?;
        enrich(stored, &products)
    }

    #[instrument(fields(order_id = %id), skip(self, id))]
    async fn change_order_status(
        &self,
        id: String,
        status: OrderStatus,
    ) -> Result<OrderView, OrderError> {
        info!(status = ?status, "Processing change_order_status request");
        let view = self.find_order_by_id(id.clone()).await?;
        if view.order.status == status {
            debug!("Status unchanged, skipping write");
            return Ok(view);
        }

        let updated = self
            .store
            .update_status(id, status)
            .await
            .map_err(store_failure)?;
        Ok(OrderView {
            order: updated,
            items: view.items,
        })
    }

    async fn validate_products(&self, ids: Vec<String>) -> Result<Vec<ProductRecord>, OrderError> {
        self.catalog.validate_products(ids).await.map_err(|e| {
            error!(error = %e, "Product validation call failed");
            OrderError::CatalogUnavailable(e.to_string())
        })
    }
}

/// Input-shape checks, enforced before the pipeline runs.
fn validate_items(items: &[OrderItemRequest]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::ValidationError(
            "order must contain at least one item".to_string(),
        ));
    }
    for item in items {
        if item.quantity == 0 {
            return Err(OrderError::ValidationError(format!(
                "quantity must be positive for product {}",
                item.product_id
            )));
        }
    }
    Ok(())
}

/// Distinct product ids in first-seen order.
fn distinct_product_ids<'a>(ids: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for id in ids {
        if !distinct.contains(id) {
            distinct.push(id.clone());
        }
    }
    distinct
}

fn find_product<'a>(
    products: &'a [ProductRecord],
    product_id: &str,
) -> Result<&'a ProductRecord, OrderError> {
    products
        .iter()
        .find(|product| product.id == product_id)
        .ok_or_else(|| OrderError::UnresolvedProduct(product_id.to_string()))
}

/// Attaches live product names to a stored order.
///
/// A stored product id the catalog can no longer resolve is a
/// data-integrity fault and fails the read.
fn enrich(stored: OrderWithItems, products: &[ProductRecord]) -> Result<OrderView, OrderError> {
    let mut views = Vec::with_capacity(stored.items.len());
    for item in stored.items {
        let name = find_product(products, &item.product_id)?.name.clone();
        views.push(OrderItemView::new(item, name));
    }
    Ok(OrderView {
        order: stored.order,
        items: views,
    })
}

fn store_failure(error: StoreError) -> OrderError {
    match error {
        StoreError::NotFound(id) => OrderError::NotFound(id),
        other => OrderError::StorageError(other.to_string()),
    }
}
