//! Storage access, one repository per entity.
//!
//! Every repository speaks the same five primitives. Cross-entity consistency
//! is not checked here; the services do that before deleting referenced rows.

use std::fmt::Debug;

use async_trait::async_trait;
use model::entities::order as order_entity;
use sea_orm::{DbErr, EntityTrait};

mod cart;
mod order;
mod user;

pub use cart::SeaOrmCartRepository;
pub use order::SeaOrmOrderRepository;
pub use user::SeaOrmUserRepository;

/// CRUD primitives for entity `E` keyed by an `i32` id.
#[async_trait]
pub trait Repository<E: EntityTrait>: Debug + Send + Sync {
    /// Returns the stored record, or `None` when the id is unknown.
    async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr>;

    /// Returns every stored record. Order is unspecified.
    async fn find_all(&self) -> Result<Vec<E::Model>, DbErr>;

    /// Inserts the record when its primary key is not set, otherwise updates
    /// the row with that key. Returns the persisted record.
    async fn save(&self, record: E::ActiveModel) -> Result<E::Model, DbErr>;

    /// Removes the record if present. Deleting an unknown id is a no-op.
    async fn delete_by_id(&self, id: i32) -> Result<(), DbErr>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64, DbErr>;
}

/// Order storage with the extra lookups the services need.
#[async_trait]
pub trait OrderRepository: Repository<order_entity::Entity> {
    /// Orders ordered by id, `page` is 1-based.
    async fn find_page(&self, page: u64, limit: u64) -> Result<Vec<order_entity::Model>, DbErr>;

    /// Number of orders placed by the given user.
    async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr>;

    /// Number of orders placed from the given cart.
    async fn count_by_cart(&self, cart_id: i32) -> Result<u64, DbErr>;
}
