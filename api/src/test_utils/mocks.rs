//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They mirror the PostgreSQL adapters: ids come from a sequence that
//! `clear` restarts, and unique fields are checked on every write.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{EntityKind, Pos, PosId, User, UserId};
use crate::domain::ports::{PosRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Pos Repository
// ============================================================================

#[derive(Default)]
struct PosTable {
    rows: BTreeMap<PosId, Pos>,
    last_id: i64,
}

#[derive(Default, Clone)]
pub struct InMemoryPosRepository {
    table: Arc<RwLock<PosTable>>,
}

impl InMemoryPosRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a stored point of sale for testing
    pub fn with_pos(self, pos: Pos) -> Self {
        {
            let mut table = self.table.write().unwrap();
            let id = pos.id.expect("seeded pos needs an id");
            table.last_id = table.last_id.max(id.0);
            table.rows.insert(id, pos);
        }
        self
    }
}

#[async_trait]
impl PosRepository for InMemoryPosRepository {
    async fn clear(&self) -> Result<(), DomainError> {
        let mut table = self.table.write().unwrap();
        table.rows.clear();
        table.last_id = 0;
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Pos>, DomainError> {
        let table = self.table.read().unwrap();
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: PosId) -> Result<Pos, DomainError> {
        let table = self.table.read().unwrap();
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::Pos, id.0))
    }

    async fn get_by_name(&self, name: &str) -> Result<Pos, DomainError> {
        let table = self.table.read().unwrap();
        table
            .rows
            .values()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| DomainError::not_found_by_field(EntityKind::Pos, "name", name))
    }

    async fn upsert(&self, pos: &Pos) -> Result<Pos, DomainError> {
        let mut table = self.table.write().unwrap();

        if let Some(id) = pos.id {
            if !table.rows.contains_key(&id) {
                return Err(DomainError::not_found_by_id(EntityKind::Pos, id.0));
            }
        }

        if table
            .rows
            .values()
            .any(|p| p.id != pos.id && p.name == pos.name)
        {
            return Err(DomainError::duplication(EntityKind::Pos, "name", &pos.name));
        }

        let now = Utc::now();
        let stored = match pos.id {
            None => {
                table.last_id += 1;
                Pos {
                    id: Some(PosId(table.last_id)),
                    created_at: Some(now),
                    updated_at: Some(now),
                    ..pos.clone()
                }
            }
            Some(id) => {
                let existing = table
                    .rows
                    .get(&id)
                    .ok_or_else(|| DomainError::not_found_by_id(EntityKind::Pos, id.0))?;
                Pos {
                    created_at: existing.created_at,
                    updated_at: Some(now),
                    ..pos.clone()
                }
            }
        };

        if let Some(id) = stored.id {
            table.rows.insert(id, stored.clone());
        }
        Ok(stored)
    }

    async fn delete(&self, id: PosId) -> Result<(), DomainError> {
        let mut table = self.table.write().unwrap();
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::Pos, id.0))
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
struct UserTable {
    rows: BTreeMap<UserId, User>,
    last_id: i64,
}

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a stored user for testing
    pub fn with_user(self, user: User) -> Self {
        {
            let mut table = self.table.write().unwrap();
            let id = user.id.expect("seeded user needs an id");
            table.last_id = table.last_id.max(id.0);
            table.rows.insert(id, user);
        }
        self
    }

    /// Number of stored users
    pub fn count(&self) -> usize {
        self.table.read().unwrap().rows.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn clear(&self) -> Result<(), DomainError> {
        let mut table = self.table.write().unwrap();
        table.rows.clear();
        table.last_id = 0;
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().unwrap();
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError> {
        let table = self.table.read().unwrap();
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::User, id.0))
    }

    async fn get_by_login_name(&self, login_name: &str) -> Result<User, DomainError> {
        let table = self.table.read().unwrap();
        table
            .rows
            .values()
            .find(|u| u.login_name == login_name)
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found_by_field(EntityKind::User, "loginName", login_name)
            })
    }

    async fn upsert(&self, user: &User) -> Result<User, DomainError> {
        let mut table = self.table.write().unwrap();

        if let Some(id) = user.id {
            if !table.rows.contains_key(&id) {
                return Err(DomainError::not_found_by_id(EntityKind::User, id.0));
            }
        }

        let taken = |same: fn(&User, &User) -> bool| {
            table
                .rows
                .values()
                .any(|other| other.id != user.id && same(other, user))
        };
        if taken(|a, b| a.login_name == b.login_name) {
            return Err(DomainError::duplication(
                EntityKind::User,
                "loginName",
                &user.login_name,
            ));
        }
        if taken(|a, b| a.email_address == b.email_address) {
            return Err(DomainError::duplication(
                EntityKind::User,
                "emailAddress",
                &user.email_address,
            ));
        }

        let now = Utc::now();
        let stored = match user.id {
            None => {
                table.last_id += 1;
                User {
                    id: Some(UserId(table.last_id)),
                    created_at: Some(now),
                    updated_at: Some(now),
                    ..user.clone()
                }
            }
            Some(id) => {
                let existing = table
                    .rows
                    .get(&id)
                    .ok_or_else(|| DomainError::not_found_by_id(EntityKind::User, id.0))?;
                User {
                    created_at: existing.created_at,
                    updated_at: Some(now),
                    ..user.clone()
                }
            }
        };

        if let Some(id) = stored.id {
            table.rows.insert(id, stored.clone());
        }
        Ok(stored)
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut table = self.table.write().unwrap();
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::User, id.0))
    }
}
