//! Point-of-sale service
//!
//! Caller-facing operations on points of sale.

use std::sync::Arc;

use crate::domain::entities::{Pos, PosId};
use crate::domain::ports::PosRepository;
use crate::error::DomainError;

/// Service for managing points of sale
pub struct PosService<PR>
where
    PR: PosRepository + ?Sized,
{
    pos: Arc<PR>,
}

impl<PR> PosService<PR>
where
    PR: PosRepository + ?Sized,
{
    pub fn new(pos: Arc<PR>) -> Self {
        Self { pos }
    }

    pub async fn clear(&self) -> Result<(), DomainError> {
        tracing::warn!("Clearing all POS data");
        self.pos.clear().await
    }

    pub async fn get_all(&self) -> Result<Vec<Pos>, DomainError> {
        tracing::debug!("Retrieving all POS");
        self.pos.get_all().await
    }

    pub async fn get_by_id(&self, id: PosId) -> Result<Pos, DomainError> {
        tracing::debug!("Retrieving POS with ID: {}", id);
        self.pos.get_by_id(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Pos, DomainError> {
        tracing::debug!("Retrieving POS with name: {}", name);
        self.pos.get_by_name(name).await
    }

    /// Create a point of sale (no id) or update an existing one (id set)
    pub async fn upsert(&self, pos: &Pos) -> Result<Pos, DomainError> {
        match pos.id {
            None => tracing::info!("Creating new POS: {}", pos.name),
            Some(id) => {
                tracing::info!("Updating POS with ID: {}", id);
                // must exist before the update
                self.pos.get_by_id(id).await?;
            }
        }

        self.pos.upsert(pos).await.inspect_err(|e| {
            if matches!(e, DomainError::Duplication { .. }) {
                tracing::error!("Error upserting POS '{}': {}", pos.name, e);
            }
        })
    }

    pub async fn delete(&self, id: PosId) -> Result<(), DomainError> {
        tracing::info!("Trying to delete POS with ID: {}", id);
        self.pos.delete(id).await?;
        tracing::info!("Deleted POS with ID: {}", id);
        Ok(())
    }
}
