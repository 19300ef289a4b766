//! [`ActorEntity`] implementation for [`Product`]: the stock ledger.
//!
//! The non-negativity invariant lives here. `Consume` is the only conditional
//! debit, `Revoke` clamps, and create/update reject negative figures, so no
//! observable product state ever carries negative stock.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use tracing::warn;

#[async_trait]
impl ActorEntity for Product {
    type Id = crate::model::ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: Self::Id, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::Validation("name must not be empty".into()));
        }
        if params.price < 0.0 {
            return Err(ProductError::Validation(format!(
                "price must not be negative, got {}",
                params.price
            )));
        }
        if params.stock < 0.0 {
            return Err(ProductError::Validation(format!(
                "stock must not be negative, got {}",
                params.stock
            )));
        }
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            stock: params.stock,
            product_type: params.product_type,
            supplier: params.supplier,
            last_restocked: Utc::now(),
        })
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), ProductError> {
        if let Some(price) = update.price {
            if price < 0.0 {
                return Err(ProductError::Validation(format!(
                    "price must not be negative, got {price}"
                )));
            }
            self.price = price;
        }
        if let Some(stock) = update.stock {
            if stock < 0.0 {
                return Err(ProductError::Validation(format!(
                    "stock must not be negative, got {stock}"
                )));
            }
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::Consume { quantity } => {
                if quantity <= 0.0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                if self.stock >= quantity {
                    self.stock -= quantity;
                    Ok(ProductActionResult::Consume(self.stock))
                } else {
                    Err(ProductError::InsufficientStock {
                        name: self.name.clone(),
                        available: self.stock,
                        required: quantity,
                    })
                }
            }
            ProductAction::Restock { quantity } => {
                if quantity <= 0.0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                self.stock += quantity;
                self.last_restocked = Utc::now();
                Ok(ProductActionResult::Restock(self.stock))
            }
            ProductAction::Release { quantity } => {
                if quantity <= 0.0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                self.stock += quantity;
                Ok(ProductActionResult::Release(self.stock))
            }
            ProductAction::Revoke { quantity } => {
                if quantity <= 0.0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                if self.stock < quantity {
                    warn!(
                        product = %self.name,
                        stock = self.stock,
                        quantity,
                        "Revoke clamped at zero"
                    );
                }
                self.stock = (self.stock - quantity).max(0.0);
                Ok(ProductActionResult::Revoke(self.stock))
            }
        }
    }
}
