//! Aggregate statistics over production records.

use crate::model::Production;
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals and per-product breakdowns for a set of production records.
/// Breakdowns are keyed by the name snapshot taken at commit time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionStats {
    pub total_productions: usize,
    pub total_raw_materials_used: f64,
    pub total_products_produced: f64,
    pub raw_materials_breakdown: BTreeMap<String, f64>,
    pub products_breakdown: BTreeMap<String, f64>,
}

/// Sums quantities across records, grouped by product name.
pub fn aggregate(records: &[Production]) -> ProductionStats {
    let mut stats = ProductionStats {
        total_productions: records.len(),
        ..ProductionStats::default()
    };

    for record in records {
        for line in &record.raw_materials {
            stats.total_raw_materials_used += line.quantity;
            *stats
                .raw_materials_breakdown
                .entry(line.product_name.clone())
                .or_insert(0.0) += line.quantity;
        }
        for line in &record.produced_products {
            stats.total_products_produced += line.quantity;
            *stats
                .products_breakdown
                .entry(line.product_name.clone())
                .or_insert(0.0) += line.quantity;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, ProductionId, ProductionLine, ProductionStatus};
    use chrono::Utc;

    fn line(id: u32, name: &str, quantity: f64) -> ProductionLine {
        ProductionLine {
            product_id: ProductId(id),
            quantity,
            product_name: name.to_string(),
        }
    }

    fn record(id: u32, raw: Vec<ProductionLine>, produced: Vec<ProductionLine>) -> Production {
        Production {
            id: ProductionId(id),
            date: Utc::now(),
            raw_materials: raw,
            produced_products: produced,
            ratios: vec![],
            status: ProductionStatus::Completed,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn aggregates_totals_and_breakdowns_per_name() {
        let records = vec![
            record(
                1,
                vec![line(1, "Flour", 30.0)],
                vec![line(3, "Bread", 15.0)],
            ),
            record(
                2,
                vec![line(1, "Flour", 10.0), line(2, "Sugar", 5.0)],
                vec![line(3, "Bread", 6.0)],
            ),
        ];

        let stats = aggregate(&records);
        assert_eq!(stats.total_productions, 2);
        assert_eq!(stats.total_raw_materials_used, 45.0);
        assert_eq!(stats.total_products_produced, 21.0);
        assert_eq!(stats.raw_materials_breakdown["Flour"], 40.0);
        assert_eq!(stats.raw_materials_breakdown["Sugar"], 5.0);
        assert_eq!(stats.products_breakdown["Bread"], 21.0);
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        assert_eq!(aggregate(&[]), ProductionStats::default());
    }
}
