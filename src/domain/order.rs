use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle states of an order.
///
/// The full set is an external contract; the status-change operation accepts
/// any variant as a target as long as it differs from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Delivered,
    Cancelled,
}

/// A single line of an order.
///
/// `price` is the catalog price snapshotted when the order was created and
/// never recomputed afterwards, regardless of later catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// Order header as persisted by the order store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub total_amount: Decimal,
    pub total_items: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// An order header together with its line items, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Read model: an order whose items carry the live product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub order: Order,
    pub items: Vec<OrderItemView>,
}

/// A line item annotated with the product name resolved at read time.
///
/// The name is a read convenience and is not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemView {
    pub product_id: String,
    pub quantity: u32,
    pub price: Decimal,
    pub name: String,
}

impl OrderItemView {
    pub fn new(item: OrderItem, name: impl Into<String>) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
            name: name.into(),
        }
    }
}

/// A requested line item, before validation against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

impl OrderItemRequest {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Payload handed to the order store for the atomic create.
///
/// Id, status, and the creation timestamp are filled in by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub total_amount: Decimal,
    pub total_items: u32,
    pub items: Vec<OrderItem>,
}

/// Listing query. Unset fields fall back to the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<OrderStatus>,
}

/// One page of order headers plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPage {
    pub data: Vec<Order>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub total: u64,
    pub last_page: u64,
}
