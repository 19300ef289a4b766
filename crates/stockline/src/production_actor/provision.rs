//! Provisioning of new produced products.
//!
//! A production request may name products that do not exist yet. Before any
//! stock moves, those lines are partitioned out, created through the product
//! client with `stock = 0` (the run's `Restock` credit delivers the actual
//! output), and the minted ids are merged back in request order.

use super::error::ProductionError;
use crate::clients::ProductClient;
use crate::model::{ProducedRequest, ProducedTarget, ProductCreate, ProductId, ProductType};

/// A produced line resolved to a concrete catalog id.
pub type ResolvedLine = (ProductId, f64);

/// Produced lines split into already-catalogued and to-be-created, each tagged
/// with its position in the original request.
#[derive(Debug)]
pub struct PartitionedLines {
    pub existing: Vec<(usize, ProductId)>,
    pub pending: Vec<(usize, ProductCreate)>,
}

/// Splits produced lines by whether they reference an existing product.
///
/// New lines get their creation defaults here: missing price becomes 0,
/// missing type becomes `Selling`, stock starts at 0.
pub fn partition(produced: &[ProducedRequest]) -> Result<PartitionedLines, ProductionError> {
    let mut existing = Vec::new();
    let mut pending = Vec::new();

    for (position, line) in produced.iter().enumerate() {
        match &line.target {
            ProducedTarget::Existing { product_id } => existing.push((position, *product_id)),
            ProducedTarget::New {
                name,
                category,
                price,
                product_type,
            } => {
                if name.trim().is_empty() {
                    return Err(ProductionError::Validation(
                        "New produced products require a name".into(),
                    ));
                }
                pending.push((
                    position,
                    ProductCreate {
                        name: name.clone(),
                        category: category.clone(),
                        price: price.unwrap_or(0.0),
                        stock: 0.0,
                        product_type: product_type.unwrap_or(ProductType::Selling),
                        supplier: None,
                    },
                ));
            }
        }
    }

    Ok(PartitionedLines { existing, pending })
}

impl PartitionedLines {
    /// Merges minted ids back into the original request order.
    pub fn merge(
        self,
        minted: &[ProductId],
        produced: &[ProducedRequest],
    ) -> Result<Vec<ResolvedLine>, ProductionError> {
        if minted.len() != self.pending.len() {
            return Err(ProductionError::Provisioning(format!(
                "expected {} new products, got {}",
                self.pending.len(),
                minted.len()
            )));
        }

        let mut slots: Vec<Option<ProductId>> = vec![None; produced.len()];
        for (position, id) in self.existing {
            slots[position] = Some(id);
        }
        for ((position, _), id) in self.pending.into_iter().zip(minted) {
            slots[position] = Some(*id);
        }

        produced
            .iter()
            .zip(slots)
            .map(|(line, slot)| {
                slot.map(|id| (id, line.quantity)).ok_or_else(|| {
                    ProductionError::Consistency("Invalid product ids in produced products".into())
                })
            })
            .collect()
    }
}

/// Creates every new produced product and resolves all lines to catalog ids,
/// preserving request order.
pub async fn provision(
    products: &ProductClient,
    produced: &[ProducedRequest],
) -> Result<Vec<ResolvedLine>, ProductionError> {
    let partitioned = partition(produced)?;

    let mut minted = Vec::with_capacity(partitioned.pending.len());
    for (_, params) in &partitioned.pending {
        let id = products
            .create_product(params.clone())
            .await
            .map_err(|e| ProductionError::Provisioning(e.to_string()))?;
        minted.push(id);
    }

    partitioned.merge(&minted, produced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_splits_and_defaults_new_lines() {
        let produced = vec![
            ProducedRequest::existing(ProductId(3), 15.0),
            ProducedRequest::new_product("Juice", 12.0),
            ProducedRequest::existing(ProductId(9), 2.0),
        ];

        let partitioned = partition(&produced).unwrap();
        assert_eq!(
            partitioned.existing,
            vec![(0, ProductId(3)), (2, ProductId(9))]
        );
        assert_eq!(partitioned.pending.len(), 1);

        let (position, params) = &partitioned.pending[0];
        assert_eq!(*position, 1);
        assert_eq!(params.name, "Juice");
        assert_eq!(params.price, 0.0);
        assert_eq!(params.stock, 0.0);
        assert_eq!(params.product_type, ProductType::Selling);
    }

    #[test]
    fn merge_preserves_request_order() {
        let produced = vec![
            ProducedRequest::new_product("Juice", 12.0),
            ProducedRequest::existing(ProductId(3), 15.0),
            ProducedRequest::new_product("Pulp", 1.0),
        ];

        let partitioned = partition(&produced).unwrap();
        let resolved = partitioned
            .merge(&[ProductId(40), ProductId(41)], &produced)
            .unwrap();

        assert_eq!(
            resolved,
            vec![
                (ProductId(40), 12.0),
                (ProductId(3), 15.0),
                (ProductId(41), 1.0),
            ]
        );
    }

    #[test]
    fn merge_rejects_count_mismatch() {
        let produced = vec![ProducedRequest::new_product("Juice", 12.0)];
        let partitioned = partition(&produced).unwrap();
        let err = partitioned.merge(&[], &produced).unwrap_err();
        assert!(matches!(err, ProductionError::Provisioning(_)));
    }

    #[test]
    fn partition_rejects_blank_names() {
        let produced = vec![ProducedRequest::new_product("  ", 1.0)];
        let err = partition(&produced).unwrap_err();
        assert_eq!(
            err,
            ProductionError::Validation("New produced products require a name".into())
        );
    }
}
