pub mod cart;
pub mod error;
pub mod order;
pub mod repository;
pub mod user;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use cart::CartService;
pub use error::{Result, ServiceError};
pub use order::{OrderDraft, OrderService};
pub use user::{NewUser, UserChanges, UserService};

use repository::{SeaOrmCartRepository, SeaOrmOrderRepository, SeaOrmUserRepository};

/// The services the HTTP layer talks to, sharing one set of repositories.
#[derive(Debug, Clone)]
pub struct Services {
    pub users: UserService,
    pub carts: CartService,
    pub orders: OrderService,
}

/// Returns the default service set backed by SeaORM repositories on `db`.
pub fn default_services(db: DatabaseConnection) -> Services {
    let order_repository = Arc::new(SeaOrmOrderRepository::new(db.clone()));

    let users = UserService::new(
        Arc::new(SeaOrmUserRepository::new(db.clone())),
        order_repository.clone(),
    );
    let carts = CartService::new(
        Arc::new(SeaOrmCartRepository::new(db)),
        order_repository.clone(),
    );
    let orders = OrderService::new(order_repository, users.clone(), carts.clone());

    Services {
        users,
        carts,
        orders,
    }
}
