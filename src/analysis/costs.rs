use std::collections::HashMap;

use crate::error::AnalysisError;
use crate::formulator::constants::{DAILY_INTAKE_RATIO, KG_PER_ARROBA};
use crate::models::{Batch, CostCategory, CostEntry};

/// Total recorded amount per cost category.
pub fn category_totals(costs: &[CostEntry]) -> HashMap<CostCategory, f64> {
    let mut totals = HashMap::new();
    for entry in costs {
        *totals.entry(entry.category).or_insert(0.0) += entry.amount;
    }
    totals
}

/// Recurring monthly cost per head: feed + pasture + maintenance.
///
/// Transport and one-off costs are excluded; they belong to the initial
/// outlay, not the monthly run rate.
pub fn monthly_cost_per_head(batch: &Batch) -> Result<f64, AnalysisError> {
    if batch.cattle_count == 0 {
        return Err(AnalysisError::EmptyBatch);
    }

    let totals = category_totals(&batch.costs);
    let recurring = totals.get(&CostCategory::Feed).copied().unwrap_or(0.0)
        + totals.get(&CostCategory::Pasture).copied().unwrap_or(0.0)
        + totals.get(&CostCategory::Maintenance).copied().unwrap_or(0.0);

    Ok(recurring / batch.cattle_count as f64)
}

/// Recurring monthly cost for the whole batch.
pub fn monthly_cost(batch: &Batch) -> Result<f64, AnalysisError> {
    Ok(monthly_cost_per_head(batch)? * batch.cattle_count as f64)
}

/// Estimated daily feed consumption per head from current live weight.
#[inline]
pub fn estimate_daily_consumption(current_weight_per_head: f64) -> f64 {
    current_weight_per_head * DAILY_INTAKE_RATIO
}

/// Purchase cost per arroba at batch registration.
///
/// Total initial outlay divided by the arrobas bought (head count times
/// initial weight in arrobas).
pub fn initial_arroba_value(batch: &Batch) -> Result<f64, AnalysisError> {
    if batch.cattle_count == 0 {
        return Err(AnalysisError::EmptyBatch);
    }
    if batch.initial_weight == 0.0 {
        return Err(AnalysisError::ZeroWeight);
    }

    let bought_arrobas = batch.cattle_count as f64 * (batch.initial_weight / KG_PER_ARROBA);
    Ok(batch.initial_cost() / bought_arrobas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(category: CostCategory, amount: f64) -> CostEntry {
        CostEntry {
            category,
            description: String::new(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    fn sample_batch() -> Batch {
        Batch {
            name: "Lot 1".to_string(),
            cattle_count: 50,
            purchase_value: 120_000.0,
            transport_cost: 3_000.0,
            initial_weight: 350.0,
            current_weight: 420.0,
            target_weight: 520.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            arroba_price: 310.0,
            costs: vec![
                entry(CostCategory::Feed, 4_000.0),
                entry(CostCategory::Feed, 1_000.0),
                entry(CostCategory::Pasture, 2_000.0),
                entry(CostCategory::Maintenance, 500.0),
                entry(CostCategory::Transport, 900.0),
            ],
        }
    }

    #[test]
    fn test_category_totals_groups_amounts() {
        let totals = category_totals(&sample_batch().costs);
        assert!((totals[&CostCategory::Feed] - 5_000.0).abs() < 1e-9);
        assert!((totals[&CostCategory::Pasture] - 2_000.0).abs() < 1e-9);
        assert!(!totals.contains_key(&CostCategory::Other));
    }

    #[test]
    fn test_monthly_cost_excludes_transport() {
        let batch = sample_batch();
        // (5000 + 2000 + 500) / 50 head
        assert!((monthly_cost_per_head(&batch).unwrap() - 150.0).abs() < 1e-9);
        assert!((monthly_cost(&batch).unwrap() - 7_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_consumption_from_weight() {
        assert!((estimate_daily_consumption(420.0) - 1.26).abs() < 1e-9);
        assert_eq!(estimate_daily_consumption(0.0), 0.0);
    }

    #[test]
    fn test_initial_arroba_value() {
        let batch = sample_batch();
        // 123_000 / (50 * 350/15)
        let expected = 123_000.0 / (50.0 * 350.0 / 15.0);
        assert!((initial_arroba_value(&batch).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch_guards() {
        let mut batch = sample_batch();
        batch.cattle_count = 0;
        assert_eq!(
            monthly_cost_per_head(&batch).unwrap_err(),
            AnalysisError::EmptyBatch
        );
        assert_eq!(
            initial_arroba_value(&batch).unwrap_err(),
            AnalysisError::EmptyBatch
        );

        let mut weightless = sample_batch();
        weightless.initial_weight = 0.0;
        assert_eq!(
            initial_arroba_value(&weightless).unwrap_err(),
            AnalysisError::ZeroWeight
        );
    }
}
