use tokio::sync::mpsc;

use crate::client_method;
use crate::domain::{OrderItemRequest, OrderPage, OrderPageQuery, OrderStatus, OrderView};
use crate::error::OrderError;
use crate::messages::OrderRequest;

/// Caller-side handle for the order service.
///
/// Exposes the RPC surface of the service as async methods.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }
}

client_method!(OrderClient => fn create_order(items: Vec<OrderItemRequest>) -> OrderView as OrderRequest::CreateOrder, Error = OrderError);
client_method!(OrderClient => fn find_orders(query: OrderPageQuery) -> OrderPage as OrderRequest::FindOrders, Error = OrderError);
client_method!(OrderClient => fn find_order_by_id(id: String) -> OrderView as OrderRequest::FindOrderById, Error = OrderError);
client_method!(OrderClient => fn change_order_status(id: String, status: OrderStatus) -> OrderView as OrderRequest::ChangeOrderStatus, Error = OrderError);
