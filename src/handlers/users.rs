use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::user;
use serde::{Deserialize, Serialize};
use service::{NewUser, UserChanges};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

/// Request body for registering a user
#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// First name
    pub first_name: String,
    /// Surname
    pub surname: String,
    /// Default delivery address
    pub delivery_address: String,
    /// Login name
    pub login: String,
    /// Password
    pub password: String,
}

// Hand-written so passwords never reach the logs through #[instrument].
impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("first_name", &self.first_name)
            .field("surname", &self.surname)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Request body for updating a user. Omitted fields keep their stored value.
#[derive(Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub delivery_address: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("first_name", &self.first_name)
            .field("surname", &self.surname)
            .field("delivery_address", &self.delivery_address)
            .field("login", &self.login)
            .field("password_changed", &self.password.is_some())
            .finish()
    }
}

/// User as returned by the API
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    /// User ID
    pub id: i32,
    /// First name
    pub first_name: String,
    /// Surname
    pub surname: String,
    /// Default delivery address
    pub delivery_address: String,
    /// Login name
    pub login: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            surname: model.surname,
            delivery_address: model.delivery_address,
            login: model.login,
        }
    }
}

/// Get all users
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    trace!("Entering get_users function");

    let users = state.users.list_users().await?;
    debug!("Found {} users", users.len());
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    trace!("Entering create_user function");

    let new_user = NewUser {
        first_name: request.first_name,
        surname: request.surname,
        delivery_address: request.delivery_address,
        login: request.login,
        password: request.password,
    };

    let created = state.users.register_user(new_user).await?;
    info!("User created successfully with ID: {}", created.id);
    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/v1/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering get_user function for user_id: {}", user_id);

    let found = state.users.get_user(user_id).await?;
    Ok(Json(UserResponse::from(found)))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/v1/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering update_user function for user_id: {}", user_id);

    let changes = UserChanges {
        first_name: request.first_name,
        surname: request.surname,
        delivery_address: request.delivery_address,
        login: request.login,
        password: request.password,
    };

    let updated = state.users.update_user(user_id, changes).await?;
    info!("User with ID {} updated successfully", user_id);
    Ok(Json(UserResponse::from(updated)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/v1/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 409, description = "User still has orders", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    trace!("Entering delete_user function for user_id: {}", user_id);

    state.users.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
