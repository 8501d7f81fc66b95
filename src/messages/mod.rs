use tokio::sync::oneshot;

use crate::domain::{
    Order, OrderDraft, OrderItemRequest, OrderPage, OrderPageQuery, OrderStatus, OrderView,
    OrderWithItems, ProductRecord,
};
use crate::error::{CatalogError, OrderError, StoreError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for actor communication. Each variant includes
/// parameters and a oneshot channel for responses.

#[derive(Debug)]
pub enum CatalogRequest {
    /// Resolve a batch of product ids to live records. The response holds
    /// exactly the resolvable subset; absent ids signal unresolved products.
    ValidateProducts {
        ids: Vec<String>,
        respond_to: ServiceResponse<Vec<ProductRecord>, CatalogError>,
    },
    /// Seed the catalog with a product, the way the external product
    /// service would own one.
    RegisterProduct {
        product: ProductRecord,
        respond_to: ServiceResponse<(), CatalogError>,
    },
}

#[derive(Debug)]
pub enum StoreRequest {
    /// Atomic write of an order header and all of its items.
    CreateWithItems {
        draft: OrderDraft,
        respond_to: ServiceResponse<OrderWithItems, StoreError>,
    },
    FindById {
        id: String,
        respond_to: ServiceResponse<Option<OrderWithItems>, StoreError>,
    },
    CountByStatus {
        status: Option<OrderStatus>,
        respond_to: ServiceResponse<u64, StoreError>,
    },
    ListPage {
        status: Option<OrderStatus>,
        page: u32,
        limit: u32,
        respond_to: ServiceResponse<Vec<Order>, StoreError>,
    },
    UpdateStatus {
        id: String,
        status: OrderStatus,
        respond_to: ServiceResponse<Order, StoreError>,
    },
}

#[derive(Debug)]
pub enum OrderRequest {
    CreateOrder {
        items: Vec<OrderItemRequest>,
        respond_to: ServiceResponse<OrderView, OrderError>,
    },
    FindOrders {
        query: OrderPageQuery,
        respond_to: ServiceResponse<OrderPage, OrderError>,
    },
    FindOrderById {
        id: String,
        respond_to: ServiceResponse<OrderView, OrderError>,
    },
    ChangeOrderStatus {
        id: String,
        status: OrderStatus,
        respond_to: ServiceResponse<OrderView, OrderError>,
    },
}
