//! Point-of-sale handlers
//!
//! CRUD endpoints under `/api/pos`.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CampusType, Pos, PosId, PosType};
use crate::error::AppError;
use crate::handlers::validation;
use crate::AppState;

/// Point of sale as it travels over the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosDto {
    pub id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub pos_type: Option<PosType>,
    pub campus: Option<CampusType>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postal_code: Option<i32>,
    pub city: Option<String>,
}

impl From<Pos> for PosDto {
    fn from(pos: Pos) -> Self {
        Self {
            id: pos.id.map(|id| id.0),
            created_at: pos.created_at,
            updated_at: pos.updated_at,
            name: Some(pos.name),
            description: Some(pos.description),
            pos_type: Some(pos.pos_type),
            campus: Some(pos.campus),
            street: Some(pos.street),
            house_number: Some(pos.house_number),
            postal_code: Some(pos.postal_code),
            city: Some(pos.city),
        }
    }
}

impl PosDto {
    pub fn into_domain(self) -> Result<Pos, AppError> {
        Ok(Pos {
            id: self.id.map(PosId),
            created_at: None,
            updated_at: None,
            name: validation::required("name", self.name)?,
            description: validation::required("description", self.description)?,
            pos_type: validation::present("type", self.pos_type)?,
            campus: validation::present("campus", self.campus)?,
            street: validation::required("street", self.street)?,
            house_number: validation::required("houseNumber", self.house_number)?,
            postal_code: validation::positive("postalCode", self.postal_code)?,
            city: validation::required("city", self.city)?,
        })
    }
}

/// Query parameters for `GET /api/pos/filter`
#[derive(Debug, Deserialize)]
pub struct PosFilter {
    pub name: String,
}

/// GET /api/pos
pub async fn list_pos(State(state): State<AppState>) -> Result<Json<Vec<PosDto>>, AppError> {
    let pos = state.pos_service.get_all().await?;
    Ok(Json(pos.into_iter().map(PosDto::from).collect()))
}

/// GET /api/pos/:id
pub async fn get_pos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PosDto>, AppError> {
    let pos = state.pos_service.get_by_id(PosId(id)).await?;
    Ok(Json(pos.into()))
}

/// GET /api/pos/filter?name=
pub async fn filter_pos(
    State(state): State<AppState>,
    Query(filter): Query<PosFilter>,
) -> Result<Json<PosDto>, AppError> {
    let pos = state.pos_service.get_by_name(&filter.name).await?;
    Ok(Json(pos.into()))
}

/// POST /api/pos
pub async fn create_pos(
    State(state): State<AppState>,
    Json(request): Json<PosDto>,
) -> Result<impl IntoResponse, AppError> {
    let pos = PosDto { id: None, ..request }.into_domain()?;
    let created = state.pos_service.upsert(&pos).await?;
    let location = created
        .id
        .map(|id| format!("/api/pos/{}", id))
        .unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PosDto::from(created)),
    ))
}

/// PUT /api/pos/:id
pub async fn update_pos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<PosDto>,
) -> Result<Json<PosDto>, AppError> {
    validation::matching_id(id, request.id)?;
    let pos = request.into_domain()?;
    let updated = state.pos_service.upsert(&pos).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/pos/:id
pub async fn delete_pos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.pos_service.delete(PosId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
