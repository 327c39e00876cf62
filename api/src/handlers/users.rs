//! User handlers
//!
//! CRUD endpoints under `/api/users`.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::handlers::validation;
use crate::AppState;

/// User as it travels over the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub login_name: Option<String>,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.0),
            created_at: user.created_at,
            updated_at: user.updated_at,
            login_name: Some(user.login_name),
            email_address: Some(user.email_address),
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
        }
    }
}

impl UserDto {
    /// Validate and map to the domain model
    ///
    /// Timestamps are never taken from the client.
    pub fn into_domain(self) -> Result<User, AppError> {
        Ok(User {
            id: self.id.map(UserId),
            created_at: None,
            updated_at: None,
            login_name: validation::required("loginName", self.login_name)?,
            email_address: validation::email("emailAddress", self.email_address)?,
            first_name: validation::required("firstName", self.first_name)?,
            last_name: validation::required("lastName", self.last_name)?,
        })
    }
}

/// Query parameters for `GET /api/users/filter`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub login_name: String,
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = state.user_service.get_all().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, AppError> {
    let user = state.user_service.get_by_id(UserId(id)).await?;
    Ok(Json(user.into()))
}

/// GET /api/users/filter?loginName=
pub async fn filter_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<UserDto>, AppError> {
    let user = state
        .user_service
        .get_by_login_name(&filter.login_name)
        .await?;
    Ok(Json(user.into()))
}

/// POST /api/users
///
/// Always creates; an id in the body is ignored.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserDto { id: None, ..request }.into_domain()?;
    let created = state.user_service.upsert(&user).await?;
    let location = created
        .id
        .map(|id| format!("/api/users/{}", id))
        .unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto::from(created)),
    ))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UserDto>,
) -> Result<Json<UserDto>, AppError> {
    validation::matching_id(id, request.id)?;
    let user = request.into_domain()?;
    let updated = state.user_service.upsert(&user).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(UserId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
