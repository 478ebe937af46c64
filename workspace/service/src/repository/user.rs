use async_trait::async_trait;
use model::entities::user;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TryIntoModel,
};
use tracing::{debug, trace};

use super::Repository;

/// SeaORM-backed user storage.
#[derive(Debug, Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<user::Entity> for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, DbErr> {
        trace!("Looking up user with ID: {}", id);
        user::Entity::find_by_id(id).one(&self.db).await
    }

    async fn find_all(&self) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find().all(&self.db).await
    }

    async fn save(&self, record: user::ActiveModel) -> Result<user::Model, DbErr> {
        let saved = record.save(&self.db).await?.try_into_model()?;
        debug!("Saved user with ID: {}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!("Deleted user {}. Rows affected: {}", id, result.rows_affected);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        user::Entity::find().count(&self.db).await
    }
}
