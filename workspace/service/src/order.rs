//! Order placement and maintenance.
//!
//! Orders are always written through to storage. The user and cart an order
//! refers to must already exist; they are resolved through [`UserService`]
//! and [`CartService`] so a missing owner surfaces as its own not-found kind.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use model::entities::order;
use rust_decimal::Decimal;
use sea_orm::Set;
use tracing::{debug, info, instrument, trace};

use crate::cart::CartService;
use crate::error::{Result, ServiceError};
use crate::repository::OrderRepository;
use crate::user::UserService;

/// The writable fields of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub delivery_method: String,
    pub delivery_address: String,
    pub value: Decimal,
    /// Defaults to the current time when creating; kept as stored when updating.
    pub order_date_time: Option<NaiveDateTime>,
    pub user_id: i32,
    pub cart_id: i32,
}

#[derive(Debug, Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    users: UserService,
    carts: CartService,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderRepository>, users: UserService, carts: CartService) -> Self {
        Self {
            orders,
            users,
            carts,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<order::Model>> {
        let orders = self.orders.find_all().await?;
        debug!("Retrieved {} orders", orders.len());
        Ok(orders)
    }

    /// One page of orders sorted by id. `page` starts at 1.
    #[instrument(skip(self))]
    pub async fn list_orders_page(&self, page: u64, limit: u64) -> Result<Vec<order::Model>> {
        if page == 0 || limit == 0 {
            return Err(ServiceError::Validation(
                "page and limit must both be at least 1".to_string(),
            ));
        }
        Ok(self.orders.find_page(page, limit).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: i32) -> Result<order::Model> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::OrderNotFound(id))
    }

    #[instrument(skip(self, draft), fields(user_id = draft.user_id, cart_id = draft.cart_id))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<order::Model> {
        trace!("Resolving owner and cart for new order");
        let owner = self.users.get_user(draft.user_id).await?;
        let cart = self.carts.get_cart(draft.cart_id).await?;

        let record = order::ActiveModel {
            delivery_method: Set(draft.delivery_method),
            delivery_address: Set(draft.delivery_address),
            value: Set(draft.value.into()),
            order_date_time: Set(draft
                .order_date_time
                .unwrap_or_else(|| Utc::now().naive_utc())),
            user_id: Set(owner.id),
            cart_id: Set(cart.id),
            ..Default::default()
        };

        let created = self.orders.save(record).await?;
        info!(
            "Order created with ID: {} for user {} (value {})",
            created.id, created.user_id, created.value
        );
        Ok(created)
    }

    /// Replaces the writable fields of an existing order.
    #[instrument(skip(self, draft))]
    pub async fn update_order(&self, id: i32, draft: OrderDraft) -> Result<order::Model> {
        let existing = self.get_order(id).await?;
        let owner = self.users.get_user(draft.user_id).await?;
        let cart = self.carts.get_cart(draft.cart_id).await?;

        let mut record: order::ActiveModel = existing.into();
        record.delivery_method = Set(draft.delivery_method);
        record.delivery_address = Set(draft.delivery_address);
        record.value = Set(draft.value.into());
        if let Some(order_date_time) = draft.order_date_time {
            record.order_date_time = Set(order_date_time);
        }
        record.user_id = Set(owner.id);
        record.cart_id = Set(cart.id);

        let updated = self.orders.save(record).await?;
        info!("Order with ID {} updated (value {})", updated.id, updated.value);
        Ok(updated)
    }

    /// Removes an order. The owning user and the cart are left in place.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: i32) -> Result<()> {
        self.orders.delete_by_id(id).await?;
        info!("Order with ID {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::default_services;
    use crate::testing::{new_user, ordered_at, setup_db};

    fn draft(user_id: i32, cart_id: i32) -> OrderDraft {
        OrderDraft {
            delivery_method: "courier".to_string(),
            delivery_address: "delivery address".to_string(),
            value: Decimal::new(145, 0),
            order_date_time: Some(ordered_at()),
            user_id,
            cart_id,
        }
    }

    #[tokio::test]
    async fn test_create_order_requires_existing_user_and_cart() {
        let db = setup_db().await.unwrap();
        let services = default_services(db);
        let user = services.users.register_user(new_user()).await.unwrap();
        let cart = services.carts.create_cart().await.unwrap();

        let err = services
            .orders
            .create_order(draft(user.id + 100, cart.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::UserNotFound(_)));

        let err = services
            .orders
            .create_order(draft(user.id, cart.id + 100))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::CartNotFound(_)));

        assert!(services.orders.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_round_trip() {
        let db = setup_db().await.unwrap();
        let services = default_services(db);
        let user = services.users.register_user(new_user()).await.unwrap();
        let cart = services.carts.create_cart().await.unwrap();

        let created = services
            .orders
            .create_order(draft(user.id, cart.id))
            .await
            .unwrap();
        let fetched = services.orders.get_order(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.order_date_time, ordered_at());

        let mut changes = draft(user.id, cart.id);
        changes.value = Decimal::from_str("300.15").unwrap();
        changes.order_date_time = None;
        let updated = services
            .orders
            .update_order(created.id, changes)
            .await
            .unwrap();
        assert_eq!(updated.value, Decimal::from_str("300.15").unwrap());
        // Timestamp kept when the update leaves it out
        assert_eq!(updated.order_date_time, ordered_at());

        services.orders.delete_order(created.id).await.unwrap();
        let err = services.orders.get_order(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::OrderNotFound(id) if id == created.id));
        assert!(services.users.get_user(user.id).await.is_ok());
        assert!(services.carts.get_cart(cart.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_order_defaults_timestamp() {
        let db = setup_db().await.unwrap();
        let services = default_services(db);
        let user = services.users.register_user(new_user()).await.unwrap();
        let cart = services.carts.create_cart().await.unwrap();

        let before = Utc::now().naive_utc() - chrono::Duration::seconds(1);
        let mut without_time = draft(user.id, cart.id);
        without_time.order_date_time = None;
        let created = services.orders.create_order(without_time).await.unwrap();

        assert!(created.order_date_time >= before);
    }

    #[tokio::test]
    async fn test_update_unknown_order() {
        let db = setup_db().await.unwrap();
        let services = default_services(db);
        let user = services.users.register_user(new_user()).await.unwrap();
        let cart = services.carts.create_cart().await.unwrap();

        let err = services
            .orders
            .update_order(77, draft(user.id, cart.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::OrderNotFound(77)));
    }

    #[tokio::test]
    async fn test_list_orders_page() {
        let db = setup_db().await.unwrap();
        let services = default_services(db);
        let user = services.users.register_user(new_user()).await.unwrap();
        for _ in 0..3 {
            let cart = services.carts.create_cart().await.unwrap();
            services
                .orders
                .create_order(draft(user.id, cart.id))
                .await
                .unwrap();
        }

        assert_eq!(services.orders.list_orders().await.unwrap().len(), 3);
        assert_eq!(services.orders.list_orders_page(1, 2).await.unwrap().len(), 2);
        assert_eq!(services.orders.list_orders_page(2, 2).await.unwrap().len(), 1);

        let err = services.orders.list_orders_page(0, 2).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
