//! SeaORM table models
//!
//! Column layout mirrors the SQL in `migrations/`.

pub mod pos;
pub mod users;
