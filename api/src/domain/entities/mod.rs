//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod kind;
pub mod pos;
pub mod user;

pub use kind::EntityKind;
pub use pos::{CampusType, Pos, PosId, PosType};
pub use user::{User, UserId};
