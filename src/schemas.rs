use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use service::{CartService, OrderService, UserService};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::carts::CartResponse;
use crate::handlers::orders::OrderView;
use crate::handlers::users::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// User lookup and lifecycle
    pub users: UserService,
    /// Cart lifecycle
    pub carts: CartService,
    /// Order placement and maintenance
    pub orders: OrderService,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::orders::list_orders,
        crate::handlers::orders::create_order,
        crate::handlers::orders::get_order,
        crate::handlers::orders::update_order,
        crate::handlers::orders::delete_order,
        crate::handlers::users::get_users,
        crate::handlers::users::create_user,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::carts::get_carts,
        crate::handlers::carts::create_cart,
        crate::handlers::carts::get_cart,
        crate::handlers::carts::delete_cart,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            OrderView,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            CartResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "orders", description = "Order endpoints"),
        (name = "users", description = "User endpoints"),
        (name = "carts", description = "Cart endpoints"),
    ),
    info(
        title = "E-commerce API",
        description = "Orders, users and carts backed by a relational store",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
