use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::OrderStoreClient;
use crate::domain::{Order, OrderDraft, OrderItem, OrderStatus, OrderWithItems};
use crate::error::StoreError;
use crate::messages::{ServiceResponse, StoreRequest};

/// Transactional order store.
///
/// Orders and their items live in two maps joined by order id, mirroring a
/// relational one-to-many layout. The actor handles one request to
/// completion before taking the next, so the two-map write in
/// `CreateWithItems` is atomic: no request can observe an order without its
/// items, and a failed creation writes nothing.
///
/// Order ids come from an injected generator so tests can use deterministic
/// ids while production wiring uses UUIDs.
pub struct OrderStoreService {
    receiver: mpsc::Receiver<StoreRequest>,
    orders: HashMap<String, Order>,
    items: HashMap<String, Vec<OrderItem>>,
    // Insertion order, drives listing.
    sequence: Vec<String>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl OrderStoreService {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, OrderStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            orders: HashMap::new(),
            items: HashMap::new(),
            sequence: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = OrderStoreClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_store", skip(self))]
    pub async fn run(mut self) {
        info!("OrderStoreService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::CreateWithItems { draft, respond_to } => {
                    self.handle_create_with_items(draft, respond_to);
                }
                StoreRequest::FindById { id, respond_to } => {
                    self.handle_find_by_id(id, respond_to);
                }
                StoreRequest::CountByStatus { status, respond_to } => {
                    self.handle_count_by_status(status, respond_to);
                }
                StoreRequest::ListPage { status, page, limit, respond_to } => {
                    self.handle_list_page(status, page, limit, respond_to);
                }
                StoreRequest::UpdateStatus { id, status, respond_to } => {
                    self.handle_update_status(id, status, respond_to);
                }
            }
        }
        info!("OrderStoreService stopped");
    }

    #[instrument(skip(self, draft, respond_to))]
    fn handle_create_with_items(
        &mut self,
        draft: OrderDraft,
        respond_to: ServiceResponse<OrderWithItems, StoreError>,
    ) {
        let id = (self.next_id_fn)();
        let order = Order {
            id: id.clone(),
            total_amount: draft.total_amount,
            total_items: draft.total_items,
            status: OrderStatus::default(),
            created_at: Utc::now(),
        };
        self.orders.insert(id.clone(), order.clone());
        self.items.insert(id.clone(), draft.items.clone());
        self.sequence.push(id.clone());
        info!(order_id = %id, item_count = draft.items.len(), "Order persisted");
        let _ = respond_to.send(Ok(OrderWithItems {
            order,
            items: draft.items,
        }));
    }

    #[instrument(fields(order_id = %id), skip(self, id, respond_to))]
    fn handle_find_by_id(
        &self,
        id: String,
        respond_to: ServiceResponse<Option<OrderWithItems>, StoreError>,
    ) {
        debug!("Processing find_by_id request");
        let found = self.orders.get(&id).map(|order| OrderWithItems {
            order: order.clone(),
            items: self.items.get(&id).cloned().unwrap_or_default(),
        });
        let _ = respond_to.send(Ok(found));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_count_by_status(
        &self,
        status: Option<OrderStatus>,
        respond_to: ServiceResponse<u64, StoreError>,
    ) {
        let count = self.matching(status).count() as u64;
        debug!(count, "Counted orders");
        let _ = respond_to.send(Ok(count));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_page(
        &self,
        status: Option<OrderStatus>,
        page: u32,
        limit: u32,
        respond_to: ServiceResponse<Vec<Order>, StoreError>,
    ) {
        let offset = (page.saturating_sub(1) as usize) * limit as usize;
        let data: Vec<Order> = self
            .matching(status)
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect();
        debug!(returned = data.len(), "Listed order page");
        let _ = respond_to.send(Ok(data));
    }

    #[instrument(fields(order_id = %id), skip(self, id, respond_to))]
    fn handle_update_status(
        &mut self,
        id: String,
        status: OrderStatus,
        respond_to: ServiceResponse<Order, StoreError>,
    ) {
        match self.orders.get_mut(&id) {
            Some(order) => {
                order.status = status;
                info!(status = ?status, "Order status updated");
                let _ = respond_to.send(Ok(order.clone()));
            }
            None => {
                debug!("Order not found");
                let _ = respond_to.send(Err(StoreError::NotFound(id)));
            }
        }
    }

    /// Orders matching the filter, in insertion order.
    fn matching(&self, status: Option<OrderStatus>) -> impl Iterator<Item = &Order> + '_ {
        self.sequence
            .iter()
            .filter_map(move |id| self.orders.get(id))
            .filter(move |order| status.map_or(true, |s| order.status == s))
    }
}
