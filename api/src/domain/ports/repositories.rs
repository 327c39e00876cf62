//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Every implementation owns two guarantees the domain relies on: a missing
//! row is reported as `DomainError::NotFound`, and a write rejected by a
//! unique constraint is reported as `DomainError::Duplication`.

use async_trait::async_trait;

use crate::domain::entities::{Pos, PosId, User, UserId};
use crate::error::DomainError;

/// Repository for point-of-sale entities
#[async_trait]
pub trait PosRepository: Send + Sync {
    /// Delete every point of sale and restart id assignment from 1
    ///
    /// Destructive; used to isolate tests.
    async fn clear(&self) -> Result<(), DomainError>;

    /// All points of sale, ordered by id
    async fn get_all(&self) -> Result<Vec<Pos>, DomainError>;

    /// Fails with `NotFound` if no row has this id
    async fn get_by_id(&self, id: PosId) -> Result<Pos, DomainError>;

    /// Fails with `NotFound` if no row has this name
    async fn get_by_name(&self, name: &str) -> Result<Pos, DomainError>;

    /// Insert when `pos.id` is `None`, otherwise update the row with that id
    ///
    /// Returns the stored value with id and timestamps populated.
    async fn upsert(&self, pos: &Pos) -> Result<Pos, DomainError>;

    /// Fails with `NotFound` if no row has this id
    async fn delete(&self, id: PosId) -> Result<(), DomainError>;
}

/// Repository for user entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Delete every user and restart id assignment from 1
    async fn clear(&self) -> Result<(), DomainError>;

    /// All users, ordered by id
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;

    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError>;

    async fn get_by_login_name(&self, login_name: &str) -> Result<User, DomainError>;

    /// Insert when `user.id` is `None`, otherwise update the row with that id
    async fn upsert(&self, user: &User) -> Result<User, DomainError>;

    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
}
