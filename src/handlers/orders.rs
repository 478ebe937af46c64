use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::NaiveDateTime;
use model::entities::order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use service::{OrderDraft, ServiceError};
use tracing::{debug, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Order as exchanged over HTTP, both as request body and response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OrderView {
    /// Order ID. Assigned by the server on create, required on update.
    pub id: Option<i32>,
    /// Delivery method, e.g. "Courier GLS"
    pub delivery_method: String,
    /// Delivery address
    pub delivery_address: String,
    /// Order value as an exact decimal string
    #[schema(value_type = String, example = "300.15")]
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    /// When the order was placed. Defaults to now on create.
    pub order_date_time: Option<NaiveDateTime>,
    /// Owner user ID
    pub user_id: i32,
    /// Cart ID the order was placed from
    pub cart_id: i32,
}

impl From<order::Model> for OrderView {
    fn from(model: order::Model) -> Self {
        Self {
            id: Some(model.id),
            delivery_method: model.delivery_method,
            delivery_address: model.delivery_address,
            value: model.value.decimal(),
            order_date_time: Some(model.order_date_time),
            user_id: model.user_id,
            cart_id: model.cart_id,
        }
    }
}

impl From<OrderView> for OrderDraft {
    fn from(view: OrderView) -> Self {
        Self {
            delivery_method: view.delivery_method,
            delivery_address: view.delivery_address,
            value: view.value,
            order_date_time: view.order_date_time,
            user_id: view.user_id,
            cart_id: view.cart_id,
        }
    }
}

/// Query parameters for listing orders. Without either parameter every
/// order is returned.
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct ListOrdersQuery {
    /// Page number (default: 1)
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u64>,
    /// Page size (default: 50)
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u64>,
}

/// Get all orders
#[utoipa::path(
    get,
    path = "/v1/orders",
    tag = "orders",
    params(ListOrdersQuery),
    responses(
        (status = 200, description = "Orders retrieved successfully", body = Vec<OrderView>),
        (status = 400, description = "Invalid pagination parameters", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_orders(
    Valid(Query(query)): Valid<Query<ListOrdersQuery>>,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    trace!("Entering list_orders function");

    let orders = if query.page.is_none() && query.limit.is_none() {
        state.orders.list_orders().await?
    } else {
        let page = query.page.unwrap_or(1);
        let limit = query.limit.unwrap_or(50);
        debug!("Fetching orders - page: {}, limit: {}", page, limit);
        state.orders.list_orders_page(page, limit).await?
    };

    info!("Successfully retrieved {} orders", orders.len());
    Ok(Json(orders.into_iter().map(OrderView::from).collect()))
}

/// Create a new order
#[utoipa::path(
    post,
    path = "/v1/orders",
    tag = "orders",
    request_body = OrderView,
    responses(
        (status = 201, description = "Order created successfully", body = OrderView),
        (status = 404, description = "Referenced user or cart not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderView>,
) -> Result<(StatusCode, Json<OrderView>), ApiError> {
    trace!("Entering create_order function");
    if let Some(id) = request.id {
        debug!("Ignoring client supplied order ID {} on create", id);
    }

    let created = state.orders.create_order(request.into()).await?;
    info!("Order created successfully with ID: {}", created.id);
    Ok((StatusCode::CREATED, Json(OrderView::from(created))))
}

/// Get a specific order by ID
#[utoipa::path(
    get,
    path = "/v1/orders/{order_id}",
    tag = "orders",
    params(
        ("order_id" = i32, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, description = "Order retrieved successfully", body = OrderView),
        (status = 404, description = "Order not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_order(
    Path(order_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<OrderView>, ApiError> {
    trace!("Entering get_order function for order_id: {}", order_id);

    let found = state.orders.get_order(order_id).await?;
    Ok(Json(OrderView::from(found)))
}

/// Update an order. The order to update is identified by the `id` in the body.
#[utoipa::path(
    put,
    path = "/v1/orders",
    tag = "orders",
    request_body = OrderView,
    responses(
        (status = 200, description = "Order updated successfully", body = OrderView),
        (status = 400, description = "Order ID missing from the body", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Order, user or cart not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_order(
    State(state): State<AppState>,
    Json(request): Json<OrderView>,
) -> Result<Json<OrderView>, ApiError> {
    trace!("Entering update_order function");

    let order_id = request.id.ok_or_else(|| {
        ServiceError::Validation("order id is required for an update".to_string())
    })?;

    let updated = state.orders.update_order(order_id, request.into()).await?;
    info!("Order with ID {} updated successfully", order_id);
    Ok(Json(OrderView::from(updated)))
}

/// Delete an order. Unknown IDs are accepted and ignored.
#[utoipa::path(
    delete,
    path = "/v1/orders/{order_id}",
    tag = "orders",
    params(
        ("order_id" = i32, Path, description = "Order ID"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_order(
    Path(order_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    trace!("Entering delete_order function for order_id: {}", order_id);

    state.orders.delete_order(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
