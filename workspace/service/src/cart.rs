//! Cart lifecycle.

use std::sync::Arc;

use model::entities::cart;
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, ServiceError};
use crate::repository::{OrderRepository, Repository};

#[derive(Debug, Clone)]
pub struct CartService {
    carts: Arc<dyn Repository<cart::Entity>>,
    orders: Arc<dyn OrderRepository>,
}

impl CartService {
    pub fn new(
        carts: Arc<dyn Repository<cart::Entity>>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self { carts, orders }
    }

    #[instrument(skip(self))]
    pub async fn list_carts(&self) -> Result<Vec<cart::Model>> {
        let carts = self.carts.find_all().await?;
        debug!("Retrieved {} carts", carts.len());
        Ok(carts)
    }

    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<cart::Model> {
        let created = self.carts.save(cart::ActiveModel::opened_now()).await?;
        info!("Cart created with ID: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_cart(&self, id: i32) -> Result<cart::Model> {
        self.carts
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::CartNotFound(id))
    }

    /// Removes a cart unless an order was placed from it.
    #[instrument(skip(self))]
    pub async fn delete_cart(&self, id: i32) -> Result<()> {
        let placed = self.orders.count_by_cart(id).await?;
        if placed > 0 {
            warn!("Refusing to delete cart {} referenced by {} orders", id, placed);
            return Err(ServiceError::Conflict(format!(
                "cart {} is attached to {} order(s)",
                id, placed
            )));
        }

        self.carts.delete_by_id(id).await?;
        info!("Cart with ID {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_services;
    use crate::order::OrderDraft;
    use crate::testing::{new_user, setup_db};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_create_and_get_cart() {
        let db = setup_db().await.unwrap();
        let services = default_services(db);

        let created = services.carts.create_cart().await.unwrap();
        let fetched = services.carts.get_cart(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(services.carts.list_carts().await.unwrap().len(), 1);

        let err = services.carts.get_cart(created.id + 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::CartNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_cart_attached_to_order_is_rejected() {
        let db = setup_db().await.unwrap();
        let services = default_services(db);
        let user = services.users.register_user(new_user()).await.unwrap();
        let attached = services.carts.create_cart().await.unwrap();
        let spare = services.carts.create_cart().await.unwrap();
        services
            .orders
            .create_order(OrderDraft {
                delivery_method: "courier".to_string(),
                delivery_address: "delivery address".to_string(),
                value: Decimal::new(145, 0),
                order_date_time: None,
                user_id: user.id,
                cart_id: attached.id,
            })
            .await
            .unwrap();

        let err = services.carts.delete_cart(attached.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        services.carts.delete_cart(spare.id).await.unwrap();
        let remaining = services.carts.list_carts().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, attached.id);
    }
}
