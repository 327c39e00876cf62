//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, Statement,
};

use crate::domain::entities::{EntityKind, User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

use super::constraints::USER_CONSTRAINTS;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn create(&self, user: &User) -> Result<users::Model, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = users::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            login_name: Set(user.login_name.clone()),
            email_address: Set(user.email_address.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| USER_CONSTRAINTS.translate(e, user))
    }

    async fn update(&self, id: UserId, user: &User) -> Result<users::Model, DomainError> {
        // Guarded here as well as in the service: the adapter may be called directly
        let existing = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::User, id.0))?;

        let mut model: users::ActiveModel = existing.into();
        model.updated_at = Set(Utc::now().fixed_offset());
        model.login_name = Set(user.login_name.clone());
        model.email_address = Set(user.email_address.clone());
        model.first_name = Set(user.first_name.clone());
        model.last_name = Set(user.last_name.clone());

        model
            .update(&self.db)
            .await
            .map_err(|e| USER_CONSTRAINTS.translate(e, user))
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn clear(&self) -> Result<(), DomainError> {
        users::Entity::delete_many().exec(&self.db).await?;

        // Keeps ids deterministic between test runs
        let backend = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(
                backend,
                "ALTER SEQUENCE users_id_seq RESTART WITH 1",
            ))
            .await?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError> {
        let result = users::Entity::find_by_id(id.0).one(&self.db).await?;

        result
            .map(|m| m.into())
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::User, id.0))
    }

    async fn get_by_login_name(&self, login_name: &str) -> Result<User, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::LoginName.eq(login_name))
            .one(&self.db)
            .await?;

        result.map(|m| m.into()).ok_or_else(|| {
            DomainError::not_found_by_field(EntityKind::User, "loginName", login_name)
        })
    }

    async fn upsert(&self, user: &User) -> Result<User, DomainError> {
        let stored = match user.id {
            None => self.create(user).await?,
            Some(id) => self.update(id, user).await?,
        };

        Ok(stored.into())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let result = users::Entity::delete_by_id(id.0).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found_by_id(EntityKind::User, id.0));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: Some(UserId(model.id)),
            created_at: Some(model.created_at.with_timezone(&Utc)),
            updated_at: Some(model.updated_at.with_timezone(&Utc)),
            login_name: model.login_name,
            email_address: model.email_address,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}
