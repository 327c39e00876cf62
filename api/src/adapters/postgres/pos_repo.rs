//! PostgreSQL adapter for PosRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, Statement,
};

use crate::domain::entities::{CampusType, EntityKind, Pos, PosId, PosType};
use crate::domain::ports::PosRepository;
use crate::entity::pos;
use crate::error::DomainError;

use super::constraints::POS_CONSTRAINTS;

/// PostgreSQL implementation of PosRepository
pub struct PostgresPosRepository {
    db: DatabaseConnection,
}

impl PostgresPosRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn create(&self, new_pos: &Pos) -> Result<pos::Model, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = pos::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            name: Set(new_pos.name.clone()),
            description: Set(new_pos.description.clone()),
            pos_type: Set(new_pos.pos_type.to_string()),
            campus: Set(new_pos.campus.to_string()),
            street: Set(new_pos.street.clone()),
            house_number: Set(new_pos.house_number.clone()),
            postal_code: Set(new_pos.postal_code),
            city: Set(new_pos.city.clone()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| POS_CONSTRAINTS.translate(e, new_pos))
    }

    async fn update(&self, id: PosId, changed: &Pos) -> Result<pos::Model, DomainError> {
        let existing = pos::Entity::find_by_id(id.0)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::Pos, id.0))?;

        // created_at stays as loaded
        let mut model: pos::ActiveModel = existing.into();
        model.updated_at = Set(Utc::now().fixed_offset());
        model.name = Set(changed.name.clone());
        model.description = Set(changed.description.clone());
        model.pos_type = Set(changed.pos_type.to_string());
        model.campus = Set(changed.campus.to_string());
        model.street = Set(changed.street.clone());
        model.house_number = Set(changed.house_number.clone());
        model.postal_code = Set(changed.postal_code);
        model.city = Set(changed.city.clone());

        model
            .update(&self.db)
            .await
            .map_err(|e| POS_CONSTRAINTS.translate(e, changed))
    }
}

#[async_trait]
impl PosRepository for PostgresPosRepository {
    async fn clear(&self) -> Result<(), DomainError> {
        pos::Entity::delete_many().exec(&self.db).await?;

        let backend = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(
                backend,
                "ALTER SEQUENCE pos_id_seq RESTART WITH 1",
            ))
            .await?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Pos>, DomainError> {
        let results = pos::Entity::find()
            .order_by_asc(pos::Column::Id)
            .all(&self.db)
            .await?;

        results.into_iter().map(Pos::try_from).collect()
    }

    async fn get_by_id(&self, id: PosId) -> Result<Pos, DomainError> {
        pos::Entity::find_by_id(id.0)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found_by_id(EntityKind::Pos, id.0))
            .and_then(Pos::try_from)
    }

    async fn get_by_name(&self, name: &str) -> Result<Pos, DomainError> {
        pos::Entity::find()
            .filter(pos::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found_by_field(EntityKind::Pos, "name", name))
            .and_then(Pos::try_from)
    }

    async fn upsert(&self, pos: &Pos) -> Result<Pos, DomainError> {
        let stored = match pos.id {
            None => self.create(pos).await?,
            Some(id) => self.update(id, pos).await?,
        };

        Pos::try_from(stored)
    }

    async fn delete(&self, id: PosId) -> Result<(), DomainError> {
        let result = pos::Entity::delete_by_id(id.0).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found_by_id(EntityKind::Pos, id.0));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
///
/// Fails only if the enum columns hold a value this build does not know.
impl TryFrom<pos::Model> for Pos {
    type Error = DomainError;

    fn try_from(model: pos::Model) -> Result<Self, Self::Error> {
        let pos_type: PosType = model.pos_type.parse().map_err(corrupt_column)?;
        let campus: CampusType = model.campus.parse().map_err(corrupt_column)?;

        Ok(Pos {
            id: Some(PosId(model.id)),
            created_at: Some(model.created_at.with_timezone(&Utc)),
            updated_at: Some(model.updated_at.with_timezone(&Utc)),
            name: model.name,
            description: model.description,
            pos_type,
            campus,
            street: model.street,
            house_number: model.house_number,
            postal_code: model.postal_code,
            city: model.city,
        })
    }
}

fn corrupt_column(msg: String) -> DomainError {
    DomainError::Database(sea_orm::DbErr::Type(msg))
}
