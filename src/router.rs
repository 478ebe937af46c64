use crate::handlers::{
    carts::{create_cart, delete_cart, get_cart, get_carts},
    health::health_check,
    orders::{create_order, delete_order, get_order, list_orders, update_order},
    users::{create_user, delete_user, get_user, get_users, update_user},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Orders; updates carry the id in the body
        .route(
            "/v1/orders",
            get(list_orders).post(create_order).put(update_order),
        )
        .route("/v1/orders/:order_id", get(get_order).delete(delete_order))
        // Users
        .route("/v1/users", post(create_user).get(get_users))
        .route(
            "/v1/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Carts
        .route("/v1/carts", post(create_cart).get(get_carts))
        .route("/v1/carts/:cart_id", get(get_cart).delete(delete_cart))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
