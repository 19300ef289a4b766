//! [`ActorEntity`] implementation for [`Production`]: an append-only archive.
//!
//! The orchestration (validation, provisioning, stock mutation, rollback)
//! happens in [`ProductionClient`](crate::clients::ProductionClient) before
//! this actor is ever involved. By the time a record reaches `Create` every
//! stock mutation has been applied, so the actor only archives fully resolved
//! records. Updates are rejected outright.

use super::error::ProductionError;
use crate::model::{Production, ProductionLine, ProductionStatus, RatioEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::ActorEntity;

/// A fully resolved production record, ready to archive. Every line references
/// an existing product and every stock mutation has already been applied.
#[derive(Debug, Clone)]
pub struct ProductionCreate {
    pub date: DateTime<Utc>,
    pub raw_materials: Vec<ProductionLine>,
    pub produced_products: Vec<ProductionLine>,
    pub ratios: Vec<RatioEntry>,
    pub notes: Option<String>,
}

/// Productions support no custom actions.
#[derive(Debug)]
pub enum ProductionAction {}

#[async_trait]
impl ActorEntity for Production {
    type Id = crate::model::ProductionId;
    type Create = ProductionCreate;
    type Update = ();
    type Action = ProductionAction;
    type ActionResult = ();
    type Context = ();
    type Error = ProductionError;

    fn from_create_params(id: Self::Id, params: ProductionCreate) -> Result<Self, ProductionError> {
        Ok(Self {
            id,
            date: params.date,
            raw_materials: params.raw_materials,
            produced_products: params.produced_products,
            ratios: params.ratios,
            status: ProductionStatus::Completed,
            notes: params.notes,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), ProductionError> {
        Err(ProductionError::Validation(
            "Production records are immutable".into(),
        ))
    }

    async fn handle_action(
        &mut self,
        action: ProductionAction,
        _ctx: &(),
    ) -> Result<(), ProductionError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductionId;

    #[tokio::test]
    async fn records_are_immutable() {
        let mut record = Production::from_create_params(
            ProductionId(1),
            ProductionCreate {
                date: Utc::now(),
                raw_materials: vec![],
                produced_products: vec![],
                ratios: vec![],
                notes: None,
            },
        )
        .unwrap();
        assert_eq!(record.status, ProductionStatus::Completed);

        let err = record.on_update((), &()).await.unwrap_err();
        assert_eq!(
            err,
            ProductionError::Validation("Production records are immutable".into())
        );
    }
}
