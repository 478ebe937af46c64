use thiserror::Error;

/// Error types for the service layer
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No user is stored under the requested id
    #[error("User {0} not found")]
    UserNotFound(i32),

    /// No cart is stored under the requested id
    #[error("Cart {0} not found")]
    CartNotFound(i32),

    /// No order is stored under the requested id
    #[error("Order {0} not found")]
    OrderNotFound(i32),

    /// The operation would leave an order pointing at a missing record
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Structurally invalid input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ServiceError {
    /// True for the three not-found kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::CartNotFound(_) | Self::OrderNotFound(_)
        )
    }
}

/// Type alias for Result with ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;
