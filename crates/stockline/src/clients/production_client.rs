//! Typed client for the Production actor, and the transaction orchestrator.
//!
//! `create_production` is the heart of the system: it validates the request,
//! provisions any new products, debits every raw material, credits every
//! produced product, archives the record, and rolls every stock mutation back
//! if any step fails. The record exists iff all mutations applied.

use crate::alerts::AlertTracker;
use crate::clients::ProductClient;
use crate::model::{
    DateRange, Production, ProductionLine, ProductionRequest, ProductType,
};
use crate::production_actor::saga::MutationLog;
use crate::production_actor::{provision, ratio, ProductionCreate, ProductionError};
use crate::product_actor::ProductError;
use crate::stats::{self, ProductionStats};
use chrono::{NaiveDate, Utc};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, warn};

/// Client for production operations.
#[derive(Clone)]
pub struct ProductionClient {
    inner: ResourceClient<Production>,
    products: ProductClient,
    alerts: AlertTracker,
}

impl ProductionClient {
    pub fn new(
        inner: ResourceClient<Production>,
        products: ProductClient,
        alerts: AlertTracker,
    ) -> Self {
        Self {
            inner,
            products,
            alerts,
        }
    }

    /// Runs one production conversion end to end.
    ///
    /// Phases: validate, provision new products, resolve lines, compute the
    /// ratio matrix, apply stock mutations under a [`MutationLog`], archive
    /// the record, then best-effort low-stock checks on every touched
    /// product. Any failure up to and including archival rolls back every
    /// mutation this attempt applied, in reverse order.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_production(
        &self,
        request: ProductionRequest,
    ) -> Result<Production, ProductionError> {
        let raw_lines = self.validate_raw_materials(&request).await?;

        if request.produced_products.is_empty() {
            return Err(ProductionError::Validation(
                "Produced products are required".into(),
            ));
        }
        for line in &request.produced_products {
            if line.quantity <= 0.0 {
                return Err(ProductionError::Validation(
                    "Produced product quantities must be greater than 0".into(),
                ));
            }
        }

        let resolved = provision::provision(&self.products, &request.produced_products).await?;

        let mut produced_lines = Vec::with_capacity(resolved.len());
        for (product_id, quantity) in resolved {
            let product = self.products.get_product(product_id).await.map_err(|_| {
                ProductionError::Consistency("Invalid product ids in produced products".into())
            })?;
            produced_lines.push(ProductionLine {
                product_id,
                quantity,
                product_name: product.name,
            });
        }

        let ratios = ratio::ratio_matrix(&raw_lines, &produced_lines);

        let mut log = MutationLog::new(self.products.clone());
        for line in &raw_lines {
            if let Err(e) = log.debit(line.product_id, line.quantity).await {
                log.rollback().await;
                return Err(Self::map_product_error(e));
            }
        }
        for line in &produced_lines {
            if let Err(e) = log.credit(line.product_id, line.quantity).await {
                log.rollback().await;
                return Err(Self::map_product_error(e));
            }
        }

        let create = ProductionCreate {
            date: request.date.unwrap_or_else(Utc::now),
            raw_materials: raw_lines.clone(),
            produced_products: produced_lines.clone(),
            ratios,
            notes: request.notes,
        };
        let id = match self.inner.create(create).await.map_err(Self::map_error) {
            Ok(id) => id,
            Err(e) => {
                log.rollback().await;
                return Err(e);
            }
        };
        log.commit();

        // Best effort: alert outcomes never affect the committed production.
        for line in raw_lines.iter().chain(produced_lines.iter()) {
            match self.products.get_product(line.product_id).await {
                Ok(product) => {
                    let outcome = self.alerts.check_product(&product, None).await;
                    debug!(product = %product.name, ?outcome, "Post-production stock check");
                }
                Err(e) => {
                    warn!(product_id = %line.product_id, error = %e, "Post-production stock check skipped")
                }
            }
        }

        self.get(id).await?.ok_or_else(|| {
            ProductionError::Consistency("Production record missing after commit".into())
        })
    }

    /// Resolves and validates the raw-material lines without side effects.
    async fn validate_raw_materials(
        &self,
        request: &ProductionRequest,
    ) -> Result<Vec<ProductionLine>, ProductionError> {
        if request.raw_materials.is_empty() {
            return Err(ProductionError::Validation(
                "Raw materials are required".into(),
            ));
        }
        for line in &request.raw_materials {
            if line.quantity <= 0.0 {
                return Err(ProductionError::Validation(
                    "Raw material quantities must be greater than 0".into(),
                ));
            }
        }

        let mut raw_lines = Vec::with_capacity(request.raw_materials.len());
        for line in &request.raw_materials {
            let product = self
                .products
                .get_product(line.product_id)
                .await
                .map_err(|e| match e {
                    ProductError::NotFound(_) => ProductionError::NotFound(
                        "Invalid product ids in raw materials".into(),
                    ),
                    other => ProductionError::ActorCommunication(other.to_string()),
                })?;
            if product.product_type != ProductType::Raw {
                return Err(ProductionError::Validation(
                    "All raw materials must be of type raw".into(),
                ));
            }
            raw_lines.push(ProductionLine {
                product_id: line.product_id,
                quantity: line.quantity,
                product_name: product.name,
            });
        }
        Ok(raw_lines)
    }

    /// Production records, newest business date first, ties broken by
    /// creation time descending. `range` filters on the business date.
    pub async fn list_productions(
        &self,
        range: Option<DateRange>,
    ) -> Result<Vec<Production>, ProductionError> {
        let mut records = self.list().await?;
        if let Some(range) = range {
            records.retain(|p| range.contains(p.date));
        }
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(records)
    }

    /// Every record whose business date falls on `date`, newest created
    /// first.
    pub async fn productions_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Production>, ProductionError> {
        let mut records = self.list_productions(Some(DateRange::day(date))).await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Aggregate totals and per-product breakdowns over the matching records.
    pub async fn production_stats(
        &self,
        range: Option<DateRange>,
    ) -> Result<ProductionStats, ProductionError> {
        let records = self.list_productions(range).await?;
        Ok(stats::aggregate(&records))
    }

    fn map_product_error(e: ProductError) -> ProductionError {
        match e {
            ProductError::InsufficientStock {
                name,
                available,
                required,
            } => ProductionError::InsufficientStock {
                name,
                available,
                required,
            },
            ProductError::NotFound(id) => {
                ProductionError::NotFound(format!("Product not found: {id}"))
            }
            ProductError::InvalidQuantity(q) => {
                ProductionError::Validation(format!("Invalid quantity: {q}"))
            }
            ProductError::Validation(msg) => ProductionError::Validation(msg),
            ProductError::ActorCommunication(msg) => ProductionError::ActorCommunication(msg),
        }
    }
}

impl ActorClient<Production> for ProductionClient {
    type Error = ProductionError;

    fn inner(&self) -> &ResourceClient<Production> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ProductionError {
        match e {
            FrameworkError::NotFound(id) => {
                ProductionError::NotFound(format!("Production not found: {id}"))
            }
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductionError>() {
                Ok(err) => *err,
                Err(other) => ProductionError::ActorCommunication(other.to_string()),
            },
            other => ProductionError::ActorCommunication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::RecordingNotifier;
    use crate::config::AlertConfig;
    use crate::model::{Product, ProductCreate, ProductId, RawMaterialRequest};
    use resource_actor::mock::MockClient;
    use resource_actor::ActorEntity;
    use std::sync::Arc;

    fn client_with_mocks() -> (MockClient<Product>, MockClient<Production>, ProductionClient) {
        let product_mock = MockClient::<Product>::new();
        let production_mock = MockClient::<Production>::new();
        let products = ProductClient::new(product_mock.client());
        let alerts = AlertTracker::new(
            products.clone(),
            Arc::new(RecordingNotifier::new()),
            AlertConfig::default(),
        );
        let client = ProductionClient::new(production_mock.client(), products, alerts);
        (product_mock, production_mock, client)
    }

    fn request(raw: Vec<RawMaterialRequest>, produced: Vec<crate::model::ProducedRequest>) -> ProductionRequest {
        ProductionRequest {
            date: None,
            raw_materials: raw,
            produced_products: produced,
            notes: None,
        }
    }

    #[tokio::test]
    async fn empty_line_lists_fail_fast_without_any_requests() {
        let (product_mock, production_mock, client) = client_with_mocks();

        let err = client
            .create_production(request(vec![], vec![]))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductionError::Validation("Raw materials are required".into())
        );
        assert_eq!(err.status_code(), 400);

        product_mock.verify();
        production_mock.verify();
    }

    #[tokio::test]
    async fn non_positive_quantities_fail_fast() {
        let (_, _, client) = client_with_mocks();

        let err = client
            .create_production(request(
                vec![RawMaterialRequest {
                    product_id: ProductId(1),
                    quantity: 0.0,
                }],
                vec![crate::model::ProducedRequest::existing(ProductId(2), 5.0)],
            ))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductionError::Validation("Raw material quantities must be greater than 0".into())
        );
    }

    #[tokio::test]
    async fn non_raw_inputs_are_rejected() {
        let (mut product_mock, production_mock, client) = client_with_mocks();

        let selling =
            Product::from_create_params(ProductId(1), ProductCreate::selling("Bread", 4.0, 10.0))
                .unwrap();
        product_mock.expect_get(ProductId(1)).return_ok(Some(selling));

        let err = client
            .create_production(request(
                vec![RawMaterialRequest {
                    product_id: ProductId(1),
                    quantity: 2.0,
                }],
                vec![crate::model::ProducedRequest::existing(ProductId(2), 5.0)],
            ))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductionError::Validation("All raw materials must be of type raw".into())
        );

        product_mock.verify();
        production_mock.verify();
    }

    #[tokio::test]
    async fn unknown_raw_ids_map_to_not_found() {
        let (mut product_mock, _production_mock, client) = client_with_mocks();

        product_mock.expect_get(ProductId(7)).return_ok(None);

        let err = client
            .create_production(request(
                vec![RawMaterialRequest {
                    product_id: ProductId(7),
                    quantity: 2.0,
                }],
                vec![crate::model::ProducedRequest::existing(ProductId(2), 5.0)],
            ))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductionError::NotFound("Invalid product ids in raw materials".into())
        );
        assert_eq!(err.status_code(), 404);
    }
}
