//! User lookup and registration.

use std::sync::Arc;

use model::entities::user;
use sea_orm::Set;
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{Result, ServiceError};
use crate::repository::{OrderRepository, Repository};

/// Fields supplied when registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub surname: String,
    pub delivery_address: String,
    pub login: String,
    pub password: String,
}

/// Partial update of a user; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub delivery_address: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

/// Looks users up by id and manages their lifecycle.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn Repository<user::Entity>>,
    orders: Arc<dyn OrderRepository>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn Repository<user::Entity>>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self { users, orders }
    }

    /// Fetches a user, failing with [`ServiceError::UserNotFound`] when the id is unknown.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i32) -> Result<user::Model> {
        trace!("Entering get_user for user_id: {}", id);
        self.users
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::UserNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<user::Model>> {
        let users = self.users.find_all().await?;
        debug!("Retrieved {} users", users.len());
        Ok(users)
    }

    #[instrument(skip(self, new_user), fields(login = %new_user.login))]
    pub async fn register_user(&self, new_user: NewUser) -> Result<user::Model> {
        let record = user::ActiveModel {
            first_name: Set(new_user.first_name),
            surname: Set(new_user.surname),
            delivery_address: Set(new_user.delivery_address),
            login: Set(new_user.login),
            password: Set(new_user.password),
            ..Default::default()
        };

        let created = self.users.save(record).await?;
        info!("User registered with ID: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update_user(&self, id: i32, changes: UserChanges) -> Result<user::Model> {
        let existing = self.get_user(id).await?;
        let mut record: user::ActiveModel = existing.into();

        if let Some(first_name) = changes.first_name {
            record.first_name = Set(first_name);
        }
        if let Some(surname) = changes.surname {
            record.surname = Set(surname);
        }
        if let Some(delivery_address) = changes.delivery_address {
            record.delivery_address = Set(delivery_address);
        }
        if let Some(login) = changes.login {
            record.login = Set(login);
        }
        if let Some(password) = changes.password {
            record.password = Set(password);
        }

        let updated = self.users.save(record).await?;
        info!("User with ID {} updated", updated.id);
        Ok(updated)
    }

    /// Removes a user. Unknown ids are ignored; users with orders are kept
    /// and reported as a conflict.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i32) -> Result<()> {
        let placed = self.orders.count_by_user(id).await?;
        if placed > 0 {
            warn!("Refusing to delete user {} referenced by {} orders", id, placed);
            return Err(ServiceError::Conflict(format!(
                "user {} still has {} order(s)",
                id, placed
            )));
        }

        self.users.delete_by_id(id).await?;
        info!("User with ID {} deleted", id);
        Ok(())
    }
}
