//! # Mock Framework
//!
//! Utilities for testing the order pipeline in isolation.
//!
//! Instead of spinning up real collaborator actors, tests create "mock
//! clients" whose request receivers they control. Inspecting the messages
//! arriving on those receivers asserts exactly what a pipeline sent, and
//! also what it did not send (the no-write properties of atomicity and
//! idempotent status changes).

use tokio::sync::mpsc;

use crate::clients::{CatalogClient, OrderStoreClient};
use crate::domain::{
    Order, OrderDraft, OrderStatus, OrderWithItems, ProductRecord,
};
use crate::error::{CatalogError, StoreError};
use crate::messages::{CatalogRequest, ServiceResponse, StoreRequest};

/// Creates a catalog client whose requests land on the returned receiver.
pub fn mock_catalog_client(
    buffer_size: usize,
) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Creates a store client whose requests land on the returned receiver.
pub fn mock_store_client(
    buffer_size: usize,
) -> (OrderStoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderStoreClient::new(sender), receiver)
}

/// A stored order as the real store would materialize it from a draft.
pub fn order_fixture(id: &str, draft: &OrderDraft) -> OrderWithItems {
    OrderWithItems {
        order: Order {
            id: id.to_string(),
            total_amount: draft.total_amount,
            total_items: draft.total_items,
            status: OrderStatus::Pending,
            created_at: chrono::Utc::now(),
        },
        items: draft.items.clone(),
    }
}

/// Helper to verify that the next catalog message is a ValidateProducts request
pub async fn expect_validate_products(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(Vec<String>, ServiceResponse<Vec<ProductRecord>, CatalogError>)> {
    match receiver.recv().await {
        Some(CatalogRequest::ValidateProducts { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a CreateWithItems request
pub async fn expect_create_with_items(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(OrderDraft, ServiceResponse<OrderWithItems, StoreError>)> {
    match receiver.recv().await {
        Some(StoreRequest::CreateWithItems { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a FindById request
pub async fn expect_find_by_id(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, ServiceResponse<Option<OrderWithItems>, StoreError>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a CountByStatus request
pub async fn expect_count_by_status(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(Option<OrderStatus>, ServiceResponse<u64, StoreError>)> {
    match receiver.recv().await {
        Some(StoreRequest::CountByStatus { status, respond_to }) => Some((status, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a ListPage request
pub async fn expect_list_page(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(
    Option<OrderStatus>,
    u32,
    u32,
    ServiceResponse<Vec<Order>, StoreError>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::ListPage { status, page, limit, respond_to }) => {
            Some((status, page, limit, respond_to))
        }
        _ => None,
    }
}

/// Helper to verify that the next store message is an UpdateStatus request
pub async fn expect_update_status(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, OrderStatus, ServiceResponse<Order, StoreError>)> {
    match receiver.recv().await {
        Some(StoreRequest::UpdateStatus { id, status, respond_to }) => {
            Some((id, status, respond_to))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_catalog_client() {
        let (client, mut receiver) = mock_catalog_client(10);

        let validate_task = tokio::spawn(async move {
            client.validate_products(vec!["prod_1".to_string()]).await
        });

        let (ids, responder) = expect_validate_products(&mut receiver)
            .await
            .expect("Expected ValidateProducts request");
        assert_eq!(ids, vec!["prod_1".to_string()]);
        responder
            .send(Ok(vec![ProductRecord::new(
                "prod_1",
                "Widget",
                Decimal::new(500, 2),
            )]))
            .unwrap();

        let resolved = validate_task.await.unwrap().unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Widget");
    }
}
