use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::formulator::constants::KG_PER_ARROBA;

/// Category of a recorded batch cost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Feed,
    Pasture,
    Maintenance,
    Transport,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 5] = [
        CostCategory::Feed,
        CostCategory::Pasture,
        CostCategory::Maintenance,
        CostCategory::Transport,
        CostCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Feed => "feed",
            CostCategory::Pasture => "pasture",
            CostCategory::Maintenance => "maintenance",
            CostCategory::Transport => "transport",
            CostCategory::Other => "other",
        }
    }
}

/// One cost ledger entry for a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEntry {
    #[serde(rename = "Category")]
    pub category: CostCategory,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Date")]
    pub date: NaiveDate,
}

/// A fattening batch: a group of cattle bought, fed, and sold together.
///
/// Weights are kilograms per head. The arroba price is the reference market
/// quote captured at registration time; reports may simulate other prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "CattleCount")]
    pub cattle_count: u32,

    #[serde(rename = "PurchaseValue")]
    pub purchase_value: f64,

    #[serde(rename = "TransportCost")]
    pub transport_cost: f64,

    #[serde(rename = "InitialWeight")]
    pub initial_weight: f64,

    #[serde(rename = "CurrentWeight", default)]
    pub current_weight: f64,

    #[serde(rename = "TargetWeight")]
    pub target_weight: f64,

    #[serde(rename = "StartDate")]
    pub start_date: NaiveDate,

    #[serde(rename = "EndDate")]
    pub end_date: NaiveDate,

    #[serde(rename = "ArrobaPrice")]
    pub arroba_price: f64,

    #[serde(rename = "Costs", default)]
    pub costs: Vec<CostEntry>,
}

impl Batch {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Purchase value plus transport cost.
    #[inline]
    pub fn initial_cost(&self) -> f64 {
        self.purchase_value + self.transport_cost
    }

    /// Sum of all recorded cost entries.
    pub fn accumulated_cost(&self) -> f64 {
        self.costs.iter().map(|c| c.amount).sum()
    }

    /// Initial cost plus accumulated ledger costs.
    pub fn total_cost(&self) -> f64 {
        self.initial_cost() + self.accumulated_cost()
    }

    /// Target weight per head expressed in arrobas.
    #[inline]
    pub fn target_weight_arrobas(&self) -> f64 {
        self.target_weight / KG_PER_ARROBA
    }

    /// Calendar months between start and end date.
    ///
    /// Counts whole calendar-month boundaries crossed, so Jan 31 to Feb 1
    /// still counts as one month.
    pub fn fattening_months(&self) -> i32 {
        (self.end_date.year() - self.start_date.year()) * 12
            + (self.end_date.month() as i32 - self.start_date.month() as i32)
    }

    pub fn add_cost(&mut self, entry: CostEntry) {
        self.costs.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Batch {
        Batch {
            name: "Lot 1 - Nelore".to_string(),
            cattle_count: 50,
            purchase_value: 120_000.0,
            transport_cost: 3_000.0,
            initial_weight: 350.0,
            current_weight: 420.0,
            target_weight: 520.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            arroba_price: 310.0,
            costs: vec![],
        }
    }

    #[test]
    fn test_initial_and_total_cost() {
        let mut batch = sample_batch();
        assert!((batch.initial_cost() - 123_000.0).abs() < 1e-9);

        batch.add_cost(CostEntry {
            category: CostCategory::Feed,
            description: "corn silage".to_string(),
            amount: 4_500.0,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        });
        assert!((batch.accumulated_cost() - 4_500.0).abs() < 1e-9);
        assert!((batch.total_cost() - 127_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_fattening_months() {
        let batch = sample_batch();
        assert_eq!(batch.fattening_months(), 12);

        let mut short = sample_batch();
        short.end_date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(short.fattening_months(), 1);
    }

    #[test]
    fn test_target_weight_arrobas() {
        let batch = sample_batch();
        // 520 kg / 15 kg per arroba
        assert!((batch.target_weight_arrobas() - 34.666_666_666_666_664).abs() < 1e-9);
    }

    #[test]
    fn test_key_is_lowercase() {
        let batch = sample_batch();
        assert_eq!(batch.key(), "lot 1 - nelore");
    }
}
