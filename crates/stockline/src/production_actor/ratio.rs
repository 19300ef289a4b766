//! Conversion-ratio matrix for a production run.

use crate::model::{ProductionLine, RatioEntry};

/// Units of output per unit of input. Zero input yields a ratio of 0 rather
/// than a division error.
pub fn conversion_ratio(produced_quantity: f64, raw_quantity: f64) -> f64 {
    if raw_quantity == 0.0 {
        0.0
    } else {
        produced_quantity / raw_quantity
    }
}

/// The full cross product: one [`RatioEntry`] for every (raw material,
/// produced product) pair, raw materials outermost, input order preserved.
pub fn ratio_matrix(
    raw_materials: &[ProductionLine],
    produced_products: &[ProductionLine],
) -> Vec<RatioEntry> {
    let mut ratios = Vec::with_capacity(raw_materials.len() * produced_products.len());
    for rm in raw_materials {
        for pp in produced_products {
            ratios.push(RatioEntry {
                raw_material_id: rm.product_id,
                raw_material_name: rm.product_name.clone(),
                product_id: pp.product_id,
                product_name: pp.product_name.clone(),
                ratio: conversion_ratio(pp.quantity, rm.quantity),
            });
        }
    }
    ratios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn line(id: u32, name: &str, quantity: f64) -> ProductionLine {
        ProductionLine {
            product_id: ProductId(id),
            quantity,
            product_name: name.to_string(),
        }
    }

    #[test]
    fn matrix_has_one_entry_per_pair() {
        let raw = vec![line(1, "Flour", 30.0), line(2, "Water", 10.0)];
        let produced = vec![
            line(3, "Bread", 15.0),
            line(4, "Rolls", 5.0),
            line(5, "Crumbs", 1.0),
        ];

        let matrix = ratio_matrix(&raw, &produced);
        assert_eq!(matrix.len(), 6);

        // Raw materials outermost, produced order preserved within.
        assert_eq!(matrix[0].raw_material_name, "Flour");
        assert_eq!(matrix[0].product_name, "Bread");
        assert_eq!(matrix[0].ratio, 0.5);
        assert_eq!(matrix[2].product_name, "Crumbs");
        assert_eq!(matrix[3].raw_material_name, "Water");
        assert_eq!(matrix[4].ratio, 0.5);
    }

    #[test]
    fn zero_raw_quantity_yields_zero_ratio() {
        assert_eq!(conversion_ratio(15.0, 0.0), 0.0);
        assert_eq!(conversion_ratio(0.0, 0.0), 0.0);
        assert_eq!(conversion_ratio(15.0, 30.0), 0.5);
    }
}
