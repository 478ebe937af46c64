use async_trait::async_trait;
use model::entities::cart;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TryIntoModel,
};
use tracing::{debug, trace};

use super::Repository;

/// SeaORM-backed cart storage.
#[derive(Debug, Clone)]
pub struct SeaOrmCartRepository {
    db: DatabaseConnection,
}

impl SeaOrmCartRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<cart::Entity> for SeaOrmCartRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<cart::Model>, DbErr> {
        trace!("Looking up cart with ID: {}", id);
        cart::Entity::find_by_id(id).one(&self.db).await
    }

    async fn find_all(&self) -> Result<Vec<cart::Model>, DbErr> {
        cart::Entity::find().all(&self.db).await
    }

    async fn save(&self, record: cart::ActiveModel) -> Result<cart::Model, DbErr> {
        let saved = record.save(&self.db).await?.try_into_model()?;
        debug!("Saved cart with ID: {}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        let result = cart::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!("Deleted cart {}. Rows affected: {}", id, result.rows_affected);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        cart::Entity::find().count(&self.db).await
    }
}
