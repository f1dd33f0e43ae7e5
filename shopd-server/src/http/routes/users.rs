//! User endpoints
//!
//! CRUD over /users. Handlers validate payloads into domain values,
//! then hand off to the repository; errors surface through ApiError.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{User, UserListQuery, UserRepo, UserSort};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewUser, Pagination, UserEmail, UserName, UserPatch, ValidationError};

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Fail-fast validation: the first violation is the whole answer.
    fn validate(&self) -> Result<NewUser, ValidationError> {
        let name = match self.name.as_deref() {
            Some(s) => UserName::new(s)?,
            None => return Err(ValidationError::Empty { field: "name" }),
        };

        let email = match self.email.as_deref() {
            Some(s) => UserEmail::new(s)?,
            None => return Err(ValidationError::Empty { field: "email" }),
        };

        Ok(NewUser { name, email })
    }
}

/// Update user request; both fields optional
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    fn validate(&self) -> Result<UserPatch, ValidationError> {
        let name = self.name.as_deref().map(UserName::for_update).transpose()?;
        let email = self
            .email
            .as_deref()
            .map(UserEmail::for_update)
            .transpose()?;

        Ok(UserPatch { name, email })
    }
}

/// Query parameters for GET /users (wire names kept from the existing API)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<ListUsersParams> for UserListQuery {
    fn from(p: ListUsersParams) -> Self {
        Self {
            page: Pagination::from_params(p.page, p.page_size),
            name: p.name,
            sort: UserSort::from_params(p.sort_by.as_deref(), p.sort_order.as_deref()),
        }
    }
}

/// User response
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at.and_utc().to_rfc3339(),
        }
    }
}

/// Create confirmation; `userId` is the wire name clients expect
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    #[serde(rename = "userId")]
    pub user_id: i32,
}

/// Delete confirmation
#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let new_user = req.validate()?;
    let user_id = UserRepo::new(&state.pool).create(new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User created successfully",
            user_id,
        }),
    ))
}

/// GET /users - list users with optional pagination, filtering, and sorting
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let query = UserListQuery::from(params);
    let users = UserRepo::new(&state.pool).list(&query).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /users/{id} - update name and/or email
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let patch = req.validate()?;
    let user = UserRepo::new(&state.pool).update(id, patch).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, ApiError> {
    UserRepo::new(&state.pool).delete(id).await?;

    Ok(Json(DeletedResponse {
        message: "User deleted successfully",
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
