//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod pos;
pub mod users;
pub mod validation;

pub use health::health;
pub use pos::{create_pos, delete_pos, filter_pos, get_pos, list_pos, update_pos};
pub use users::{create_user, delete_user, filter_users, get_user, list_users, update_user};
