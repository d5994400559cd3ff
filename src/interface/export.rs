use std::path::Path;

use crate::analysis::{ProfitMetrics, ProfitPoint};
use crate::error::Result;
use crate::models::Batch;

/// Export a batch's cost ledger to CSV.
pub fn export_cost_ledger<P: AsRef<Path>>(path: P, batch: &Batch) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["date", "category", "description", "amount"])?;
    for entry in &batch.costs {
        writer.write_record([
            entry.date.to_string(),
            entry.category.label().to_string(),
            entry.description.clone(),
            format!("{:.2}", entry.amount),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Export a profit report (metrics plus projection curve) to CSV.
///
/// The metrics block comes first as key/value rows, then the curve samples.
pub fn export_profit_report<P: AsRef<Path>>(
    path: P,
    batch: &Batch,
    metrics: &ProfitMetrics,
    break_even: f64,
    curve: &[ProfitPoint],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["metric", "value"])?;
    let metric_rows = [
        ("batch", batch.name.clone()),
        ("total_revenue", format!("{:.2}", metrics.total_revenue)),
        ("total_cost", format!("{:.2}", metrics.total_cost)),
        ("total_profit", format!("{:.2}", metrics.total_profit)),
        ("profit_per_head", format!("{:.2}", metrics.profit_per_head)),
        ("roi_percent", format!("{:.2}", metrics.roi_percent)),
        ("months", metrics.months.to_string()),
        ("monthly_profit", format!("{:.2}", metrics.monthly_profit)),
        ("break_even_price", format!("{:.2}", break_even)),
    ];
    for (key, value) in metric_rows {
        writer.write_record([key, value.as_str()])?;
    }

    writer.write_record(["arroba_price", "profit"])?;
    for point in curve {
        writer.write_record([
            format!("{:.2}", point.arroba_price),
            format!("{:.2}", point.profit),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostCategory, CostEntry};
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

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
            costs: vec![CostEntry {
                category: CostCategory::Feed,
                description: "corn silage".to_string(),
                amount: 4_500.0,
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            }],
        }
    }

    #[test]
    fn test_cost_ledger_csv() {
        let file = NamedTempFile::new().unwrap();
        export_cost_ledger(file.path(), &sample_batch()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("date,category,description,amount"));
        assert!(content.contains("2025-03-01,feed,corn silage,4500.00"));
    }
}
