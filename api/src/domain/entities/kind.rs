//! Entity kinds used as context in domain errors

use serde::Serialize;

/// Logical type of a domain record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Pos,
    User,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Pos => write!(f, "Pos"),
            EntityKind::User => write!(f, "User"),
        }
    }
}
