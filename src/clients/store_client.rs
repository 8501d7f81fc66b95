use tokio::sync::mpsc;

use crate::client_method;
use crate::domain::{Order, OrderDraft, OrderStatus, OrderWithItems};
use crate::error::StoreError;
use crate::messages::StoreRequest;

/// Client for the order store collaborator.
///
/// This is the narrow storage interface the order service composes:
/// atomic create, point lookup with items, status-filtered count, offset
/// paging, and the single-field status update.
#[derive(Clone)]
pub struct OrderStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl OrderStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }
}

client_method!(OrderStoreClient => fn create_with_items(draft: OrderDraft) -> OrderWithItems as StoreRequest::CreateWithItems, Error = StoreError);
client_method!(OrderStoreClient => fn find_by_id(id: String) -> Option<OrderWithItems> as StoreRequest::FindById, Error = StoreError);
client_method!(OrderStoreClient => fn count_by_status(status: Option<OrderStatus>) -> u64 as StoreRequest::CountByStatus, Error = StoreError);
client_method!(OrderStoreClient => fn list_page(status: Option<OrderStatus>, page: u32, limit: u32) -> Vec<Order> as StoreRequest::ListPage, Error = StoreError);
client_method!(OrderStoreClient => fn update_status(id: String, status: OrderStatus) -> Order as StoreRequest::UpdateStatus, Error = StoreError);
