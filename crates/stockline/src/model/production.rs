//! The immutable production record and its request DTOs.
//!
//! A [`Production`] is written exactly once, after every stock mutation of the
//! run has been applied, and is never modified afterwards. Product names are
//! snapshotted into the record at commit time so the history stays readable
//! even if the catalog entry is later renamed.

use crate::model::ProductId;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionId(pub u32);

impl From<u32> for ProductionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "production_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionStatus {
    Pending,
    Completed,
}

/// One raw-material or produced-product line of a production record.
///
/// `product_name` is the snapshot captured at commit time, not a live
/// reference into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLine {
    pub product_id: ProductId,
    pub quantity: f64,
    pub product_name: String,
}

/// One cell of the conversion-ratio matrix: units of `product_name` produced
/// per unit of `raw_material_name` consumed in this run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioEntry {
    pub raw_material_id: ProductId,
    pub raw_material_name: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub ratio: f64,
}

/// An immutable historical record of one production run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    pub id: ProductionId,
    pub date: DateTime<Utc>,
    pub raw_materials: Vec<ProductionLine>,
    pub produced_products: Vec<ProductionLine>,
    pub ratios: Vec<RatioEntry>,
    pub status: ProductionStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- Request DTOs ---

/// One raw-material line of a production request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialRequest {
    pub product_id: ProductId,
    pub quantity: f64,
}

/// What a produced-product line points at: an existing catalog entry, or a
/// brand-new product to be provisioned before the run.
///
/// Untagged on the wire: a line with a `productId` is `Existing`, a line
/// without one is `New`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProducedTarget {
    #[serde(rename_all = "camelCase")]
    Existing { product_id: ProductId },
    #[serde(rename_all = "camelCase")]
    New {
        name: String,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        price: Option<f64>,
        #[serde(default, rename = "type")]
        product_type: Option<crate::model::ProductType>,
    },
}

/// One produced-product line of a production request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducedRequest {
    #[serde(flatten)]
    pub target: ProducedTarget,
    pub quantity: f64,
}

impl ProducedRequest {
    pub fn existing(product_id: ProductId, quantity: f64) -> Self {
        Self {
            target: ProducedTarget::Existing { product_id },
            quantity,
        }
    }

    pub fn new_product(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            target: ProducedTarget::New {
                name: name.into(),
                category: None,
                price: None,
                product_type: None,
            },
            quantity,
        }
    }
}

/// A client request to run one production conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRequest {
    /// Business date of the run; defaults to submission time.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub raw_materials: Vec<RawMaterialRequest>,
    pub produced_products: Vec<ProducedRequest>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// An inclusive date-range filter over production records.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// The full calendar day `[00:00:00.000, 23:59:59.999]` in UTC.
    pub fn day(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1) - Duration::milliseconds(1);
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| ts >= s) && self.end.map_or(true, |e| ts <= e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn produced_line_with_product_id_deserializes_as_existing() {
        let line: ProducedRequest =
            serde_json::from_str(r#"{"productId": 7, "quantity": 4.0}"#).unwrap();
        assert!(matches!(
            line.target,
            ProducedTarget::Existing {
                product_id: ProductId(7)
            }
        ));
        assert_eq!(line.quantity, 4.0);
    }

    #[test]
    fn produced_line_without_product_id_deserializes_as_new() {
        let line: ProducedRequest =
            serde_json::from_str(r#"{"name": "Juice", "quantity": 12}"#).unwrap();
        match line.target {
            ProducedTarget::New {
                name,
                category,
                price,
                product_type,
            } => {
                assert_eq!(name, "Juice");
                assert!(category.is_none());
                assert!(price.is_none());
                assert!(product_type.is_none());
            }
            other => panic!("expected New, got {:?}", other),
        }
    }

    #[test]
    fn day_range_is_inclusive_of_both_bounds() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let range = DateRange::day(day);

        let midnight = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        let last_milli = Utc.with_ymd_and_hms(2026, 3, 5, 23, 59, 59).unwrap()
            + Duration::milliseconds(999);
        let next_day = Utc.with_ymd_and_hms(2026, 3, 6, 0, 0, 0).unwrap();

        assert!(range.contains(midnight));
        assert!(range.contains(last_milli));
        assert!(!range.contains(next_day));
    }

    #[test]
    fn open_range_matches_everything() {
        let range = DateRange::default();
        assert!(range.contains(Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap()));
    }
}
