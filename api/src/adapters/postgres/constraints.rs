//! Unique-constraint translation
//!
//! Each entity kind declares, once, which named database constraints guard
//! which of its fields. A failed write is looked up in that table: a unique
//! violation on a known constraint becomes `DomainError::Duplication`, any
//! other failure is handed back untouched.

use sea_orm::sqlx;
use sea_orm::{DbErr, RuntimeErr};

use crate::domain::entities::{EntityKind, Pos, User};
use crate::error::DomainError;

/// One unique constraint and the domain field it protects
pub struct UniqueConstraint<E> {
    pub constraint: &'static str,
    pub field: &'static str,
    pub value: fn(&E) -> &str,
}

/// All unique constraints of one entity kind
pub struct ConstraintMap<E: 'static> {
    pub kind: EntityKind,
    pub constraints: &'static [UniqueConstraint<E>],
}

impl<E: 'static> ConstraintMap<E> {
    /// Translate a failed write of `entity` into the domain vocabulary
    pub fn translate(&self, err: DbErr, entity: &E) -> DomainError {
        let duplication = unique_violation(&err).and_then(|name| self.duplication(name, entity));
        duplication.unwrap_or(DomainError::Database(err))
    }

    /// `Duplication` for a violated constraint, if this map knows it
    pub fn duplication(&self, constraint: &str, entity: &E) -> Option<DomainError> {
        self.constraints
            .iter()
            .find(|c| c.constraint == constraint)
            .map(|c| DomainError::duplication(self.kind, c.field, (c.value)(entity)))
    }
}

/// Name of the unique constraint a write tripped over, if that is why it failed
fn unique_violation(err: &DbErr) -> Option<&str> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
            if db_err.is_unique_violation() =>
        {
            db_err.constraint()
        }
        _ => None,
    }
}

fn pos_name(pos: &Pos) -> &str {
    &pos.name
}

fn user_login_name(user: &User) -> &str {
    &user.login_name
}

fn user_email_address(user: &User) -> &str {
    &user.email_address
}

pub const POS_CONSTRAINTS: ConstraintMap<Pos> = ConstraintMap {
    kind: EntityKind::Pos,
    constraints: &[UniqueConstraint {
        constraint: "pos_name_key",
        field: "name",
        value: pos_name,
    }],
};

pub const USER_CONSTRAINTS: ConstraintMap<User> = ConstraintMap {
    kind: EntityKind::User,
    constraints: &[
        UniqueConstraint {
            constraint: "users_login_name_key",
            field: "loginName",
            value: user_login_name,
        },
        UniqueConstraint {
            constraint: "users_email_address_key",
            field: "emailAddress",
            value: user_email_address,
        },
    ],
};
