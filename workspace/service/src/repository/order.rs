use async_trait::async_trait;
use model::entities::order;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TryIntoModel,
};
use tracing::{debug, trace};

use super::{OrderRepository, Repository};

/// SeaORM-backed order storage.
#[derive(Debug, Clone)]
pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<order::Entity> for SeaOrmOrderRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<order::Model>, DbErr> {
        trace!("Looking up order with ID: {}", id);
        order::Entity::find_by_id(id).one(&self.db).await
    }

    async fn find_all(&self) -> Result<Vec<order::Model>, DbErr> {
        order::Entity::find().all(&self.db).await
    }

    async fn save(&self, record: order::ActiveModel) -> Result<order::Model, DbErr> {
        let saved = record.save(&self.db).await?.try_into_model()?;
        debug!("Saved order with ID: {}, value: {}", saved.id, saved.value);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        let result = order::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!("Deleted order {}. Rows affected: {}", id, result.rows_affected);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        order::Entity::find().count(&self.db).await
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_page(&self, page: u64, limit: u64) -> Result<Vec<order::Model>, DbErr> {
        trace!("Fetching orders page {} with limit {}", page, limit);
        order::Entity::find()
            .order_by_asc(order::Column::Id)
            .paginate(&self.db, limit)
            .fetch_page(page.saturating_sub(1))
            .await
    }

    async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
    }

    async fn count_by_cart(&self, cart_id: i32) -> Result<u64, DbErr> {
        order::Entity::find()
            .filter(order::Column::CartId.eq(cart_id))
            .count(&self.db)
            .await
    }
}
