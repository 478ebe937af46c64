use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDateTime;
use model::entities::cart;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, trace};
use utoipa::ToSchema;

/// Cart as returned by the API
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CartResponse {
    /// Cart ID
    pub id: i32,
    /// When the cart was opened
    pub created_at: NaiveDateTime,
}

impl From<cart::Model> for CartResponse {
    fn from(model: cart::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/carts",
    tag = "carts",
    responses(
        (status = 200, description = "Carts retrieved successfully", body = Vec<CartResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_carts(State(state): State<AppState>) -> Result<Json<Vec<CartResponse>>, ApiError> {
    let carts = state.carts.list_carts().await?;
    Ok(Json(carts.into_iter().map(CartResponse::from).collect()))
}

/// Open a new, empty cart
#[utoipa::path(
    post,
    path = "/v1/carts",
    tag = "carts",
    responses(
        (status = 201, description = "Cart created successfully", body = CartResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_cart(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CartResponse>), ApiError> {
    let created = state.carts.create_cart().await?;
    info!("Cart created successfully with ID: {}", created.id);
    Ok((StatusCode::CREATED, Json(CartResponse::from(created))))
}

#[utoipa::path(
    get,
    path = "/v1/carts/{cart_id}",
    tag = "carts",
    params(
        ("cart_id" = i32, Path, description = "Cart ID"),
    ),
    responses(
        (status = 200, description = "Cart retrieved successfully", body = CartResponse),
        (status = 404, description = "Cart not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_cart(
    Path(cart_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<CartResponse>, ApiError> {
    trace!("Entering get_cart function for cart_id: {}", cart_id);

    let found = state.carts.get_cart(cart_id).await?;
    Ok(Json(CartResponse::from(found)))
}

/// Delete a cart that no order references
#[utoipa::path(
    delete,
    path = "/v1/carts/{cart_id}",
    tag = "carts",
    params(
        ("cart_id" = i32, Path, description = "Cart ID"),
    ),
    responses(
        (status = 204, description = "Cart deleted"),
        (status = 409, description = "Cart is referenced by an order", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_cart(
    Path(cart_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    trace!("Entering delete_cart function for cart_id: {}", cart_id);

    state.carts.delete_cart(cart_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
