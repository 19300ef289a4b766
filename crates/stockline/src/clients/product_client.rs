//! Typed client for the Product actor.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::debug;

/// Client for product operations. Wraps the generic [`ResourceClient`] with
/// domain methods and maps framework errors back to [`ProductError`].
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch by id, turning a miss into [`ProductError::NotFound`].
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn check_stock(&self, id: ProductId) -> Result<f64, ProductError> {
        match self.action(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Conditional debit: succeeds with the new level iff stock was
    /// sufficient.
    #[tracing::instrument(skip(self))]
    pub async fn consume(&self, id: ProductId, quantity: f64) -> Result<f64, ProductError> {
        match self.action(id, ProductAction::Consume { quantity }).await? {
            ProductActionResult::Consume(level) => Ok(level),
            other => Err(Self::unexpected(other)),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, quantity: f64) -> Result<f64, ProductError> {
        match self.action(id, ProductAction::Restock { quantity }).await? {
            ProductActionResult::Restock(level) => Ok(level),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Rollback credit: reverses a `consume` without touching
    /// `last_restocked`.
    pub async fn release(&self, id: ProductId, quantity: f64) -> Result<f64, ProductError> {
        match self.action(id, ProductAction::Release { quantity }).await? {
            ProductActionResult::Release(level) => Ok(level),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Rollback debit: reverses a `restock`, clamped at zero.
    pub async fn revoke(&self, id: ProductId, quantity: f64) -> Result<f64, ProductError> {
        match self.action(id, ProductAction::Revoke { quantity }).await? {
            ProductActionResult::Revoke(level) => Ok(level),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Every product with stock strictly below `threshold`, most depleted
    /// first.
    pub async fn find_low_stock(&self, threshold: f64) -> Result<Vec<Product>, ProductError> {
        let mut low: Vec<Product> = self
            .list()
            .await?
            .into_iter()
            .filter(|p| p.stock < threshold)
            .collect();
        low.sort_by(|a, b| a.stock.total_cmp(&b.stock));
        Ok(low)
    }

    async fn action(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    fn unexpected(result: ProductActionResult) -> ProductError {
        ProductError::ActorCommunication(format!("unexpected action result: {result:?}"))
    }
}

impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ProductError {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunication(other.to_string()),
            },
            other => ProductError::ActorCommunication(other.to_string()),
        }
    }
}
