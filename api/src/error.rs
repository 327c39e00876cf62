//! Unified error types for the Campus Coffee API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Errors the domain services raise and callers branch on
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::EntityKind;

/// How a missing record was looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(i64),
    Field { field: &'static str, value: String },
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "ID {}", id),
            Lookup::Field { field, value } => write!(f, "{} '{}'", field, value),
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{kind} with {lookup} does not exist")]
    NotFound { kind: EntityKind, lookup: Lookup },

    #[error("{kind} with {field} '{value}' already exists")]
    Duplication {
        kind: EntityKind,
        field: &'static str,
        value: String,
    },

    /// Storage failure that maps to no domain error, passed through as-is
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl DomainError {
    pub fn not_found_by_id(kind: EntityKind, id: i64) -> Self {
        DomainError::NotFound {
            kind,
            lookup: Lookup::Id(id),
        }
    }

    pub fn not_found_by_field(kind: EntityKind, field: &'static str, value: &str) -> Self {
        DomainError::NotFound {
            kind,
            lookup: Lookup::Field {
                field,
                value: value.to_string(),
            },
        }
    }

    pub fn duplication(kind: EntityKind, field: &'static str, value: &str) -> Self {
        DomainError::Duplication {
            kind,
            field,
            value: value.to_string(),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e @ DomainError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Not found", Some(e.to_string()))
            }
            AppError::Domain(e @ DomainError::Duplication { .. }) => {
                (StatusCode::CONFLICT, "Already exists", Some(e.to_string()))
            }
            AppError::Domain(DomainError::Database(e)) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
