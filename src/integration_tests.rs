#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::app_system::OrderSystem;
    use crate::config::Config;
    use crate::domain::{OrderItemRequest, OrderPageQuery, OrderStatus, ProductRecord};
    use crate::error::OrderError;

    async fn system_with_products(products: Vec<ProductRecord>) -> OrderSystem {
        let system = OrderSystem::new(&Config::default());
        for product in products {
            system.catalog_client.register_product(product).await.unwrap();
        }
        system
    }

    fn keyboard() -> ProductRecord {
        ProductRecord::new("prod_keyboard", "Mechanical Keyboard", Decimal::new(7999, 2))
    }

    fn mouse() -> ProductRecord {
        ProductRecord::new("prod_mouse", "Wireless Mouse", Decimal::new(2450, 2))
    }

    #[tokio::test]
    async fn test_create_order_end_to_end() {
        let system = system_with_products(vec![keyboard(), mouse()]).await;

        let view = system
            .order_client
            .create_order(vec![
                OrderItemRequest::new("prod_keyboard", 1),
                OrderItemRequest::new("prod_mouse", 2),
            ])
            .await
            .unwrap();

        // 79.99 + 2 * 24.50
        assert_eq!(view.order.total_amount, Decimal::new(12899, 2));
        assert_eq!(view.order.total_items, 3);
        assert_eq!(view.order.status, OrderStatus::Pending);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].name, "Mechanical Keyboard");
        assert_eq!(view.items[1].name, "Wireless Mouse");
        assert_eq!(view.items[1].price, Decimal::new(2450, 2));

        let fetched = system
            .order_client
            .find_order_by_id(view.order.id.clone())
            .await
            .unwrap();
        assert_eq!(fetched, view);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unresolved_product_persists_nothing() {
        let system = system_with_products(vec![keyboard()]).await;

        let result = system
            .order_client
            .create_order(vec![
                OrderItemRequest::new("prod_keyboard", 1),
                OrderItemRequest::new("prod_ghost", 1),
            ])
            .await;

        assert_eq!(
            result,
            Err(OrderError::UnresolvedProduct("prod_ghost".to_string()))
        );

        // All-or-nothing: the failed creation left no rows behind.
        let page = system
            .order_client
            .find_orders(OrderPageQuery::default())
            .await
            .unwrap();
        assert_eq!(page.meta.total, 0);
        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn test_price_snapshot_survives_catalog_drift() {
        let system = system_with_products(vec![keyboard()]).await;

        let view = system
            .order_client
            .create_order(vec![OrderItemRequest::new("prod_keyboard", 1)])
            .await
            .unwrap();
        assert_eq!(view.items[0].price, Decimal::new(7999, 2));

        // The catalog price changes after the order was taken.
        system
            .catalog_client
            .register_product(ProductRecord::new(
                "prod_keyboard",
                "Mechanical Keyboard",
                Decimal::new(9999, 2),
            ))
            .await
            .unwrap();

        let fetched = system
            .order_client
            .find_order_by_id(view.order.id.clone())
            .await
            .unwrap();
        // Snapshotted price is immutable; only the name is live.
        assert_eq!(fetched.items[0].price, Decimal::new(7999, 2));
        assert_eq!(fetched.order.total_amount, Decimal::new(7999, 2));
    }

    #[tokio::test]
    async fn test_find_order_by_id_unknown_id() {
        let system = system_with_products(vec![]).await;

        let result = system
            .order_client
            .find_order_by_id("order_404".to_string())
            .await;
        assert_eq!(result, Err(OrderError::NotFound("order_404".to_string())));
    }

    #[tokio::test]
    async fn test_pagination_meta_and_overrun() {
        let system = system_with_products(vec![keyboard()]).await;
        let mut ids = Vec::new();
        for _ in 0..5 {
            let view = system
                .order_client
                .create_order(vec![OrderItemRequest::new("prod_keyboard", 1)])
                .await
                .unwrap();
            ids.push(view.order.id);
        }

        let query = OrderPageQuery {
            page: Some(1),
            limit: Some(2),
            status: None,
        };
        let first = system.order_client.find_orders(query).await.unwrap();
        assert_eq!(first.meta.total, 5);
        assert_eq!(first.meta.last_page, 3);
        assert_eq!(first.data.len(), 2);
        // Listing preserves creation order.
        assert_eq!(first.data[0].id, ids[0]);
        assert_eq!(first.data[1].id, ids[1]);

        // One page past the last: empty data, same meta.
        let beyond = system
            .order_client
            .find_orders(OrderPageQuery {
                page: Some(4),
                limit: Some(2),
                status: None,
            })
            .await
            .unwrap();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.meta.total, 5);
        assert_eq!(beyond.meta.last_page, 3);
    }

    #[tokio::test]
    async fn test_status_filter_in_listing() {
        let system = system_with_products(vec![keyboard()]).await;
        let mut ids = Vec::new();
        for _ in 0..3 {
            let view = system
                .order_client
                .create_order(vec![OrderItemRequest::new("prod_keyboard", 1)])
                .await
                .unwrap();
            ids.push(view.order.id);
        }
        system
            .order_client
            .change_order_status(ids[1].clone(), OrderStatus::Paid)
            .await
            .unwrap();

        let paid = system
            .order_client
            .find_orders(OrderPageQuery {
                page: None,
                limit: None,
                status: Some(OrderStatus::Paid),
            })
            .await
            .unwrap();
        assert_eq!(paid.meta.total, 1);
        assert_eq!(paid.data.len(), 1);
        assert_eq!(paid.data[0].id, ids[1]);
    }

    #[tokio::test]
    async fn test_change_status_and_idempotent_repeat() {
        let system = system_with_products(vec![keyboard()]).await;
        let created = system
            .order_client
            .create_order(vec![OrderItemRequest::new("prod_keyboard", 2)])
            .await
            .unwrap();

        let paid = system
            .order_client
            .change_order_status(created.order.id.clone(), OrderStatus::Paid)
            .await
            .unwrap();
        assert_eq!(paid.order.status, OrderStatus::Paid);
        assert_eq!(paid.order.total_amount, created.order.total_amount);
        assert_eq!(paid.order.created_at, created.order.created_at);
        assert_eq!(paid.items, created.items);

        // Same target status again: identical result, no further change.
        let repeated = system
            .order_client
            .change_order_status(created.order.id.clone(), OrderStatus::Paid)
            .await
            .unwrap();
        assert_eq!(repeated, paid);

        let unknown = system
            .order_client
            .change_order_status("order_404".to_string(), OrderStatus::Cancelled)
            .await;
        assert_eq!(unknown, Err(OrderError::NotFound("order_404".to_string())));
    }
}
