use crate::analysis::{ProfitMetrics, ProfitPoint};
use crate::models::{Batch, CalculationResult};

/// Display a ration calculation in a formatted table.
pub fn display_calculation(result: &CalculationResult) {
    println!();
    println!("=== Ration Cost Breakdown ===");
    println!();

    // Find max ingredient name length for alignment
    let max_name_len = result
        .per_ingredient
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    println!(
        "{:<width$}  {:>8}  {:>12}  {:>12}",
        "Ingredient",
        "Share",
        "Weight (kg)",
        "Cost",
        width = max_name_len
    );

    for item in &result.per_ingredient {
        println!(
            "{:<width$}  {:>7.1}%  {:>12.2}  {:>12.2}",
            item.name,
            item.percentage,
            item.weight,
            item.cost,
            width = max_name_len
        );
    }

    println!(
        "{:<width$}  {:>7.1}%  {:>12.2}  {:>12.2}",
        "Total",
        100.0,
        result.total_weight,
        result.total_cost,
        width = max_name_len
    );

    println!();
    println!("--- Summary ---");
    println!("Cost per kg: {:.2}", result.cost_per_kg);
    println!("Daily herd consumption: {:.1} kg", result.daily_consumption);
    println!("Daily herd cost: {:.2}", result.daily_cost);
    println!("Daily cost per head: {:.2}", result.daily_cost_per_head);
    println!();
}

/// Display a profit projection report with its break-even price and curve.
pub fn display_profit_report(
    batch: &Batch,
    arroba_price: f64,
    metrics: &ProfitMetrics,
    break_even: f64,
    curve: &[ProfitPoint],
) {
    println!();
    println!("=== Profit Report: {} ===", batch.name);
    println!(
        "{} head, {} to {}",
        batch.cattle_count, batch.start_date, batch.end_date
    );
    println!();

    println!("Arroba price: {:.2}", arroba_price);
    println!("Estimated revenue: {:.2}", metrics.total_revenue);
    println!("Total cost: {:.2}", metrics.total_cost);
    println!("Net profit: {:.2}", metrics.total_profit);
    println!("Profit per head: {:.2}", metrics.profit_per_head);
    println!("ROI: {:.2}%", metrics.roi_percent);
    println!();
    println!(
        "Over {} months: {:.2}/month, {:.2} kg gained per head per month",
        metrics.months, metrics.monthly_profit, metrics.monthly_weight_gain
    );
    println!("Break-even arroba price: {:.2}", break_even);

    if !curve.is_empty() {
        println!();
        println!("--- Profit vs arroba price ---");
        for point in curve {
            println!("  @ {:>7.2}  {:>14.2}", point.arroba_price, point.profit);
        }
    }

    println!();
    if metrics.total_profit >= 0.0 {
        println!("Projection is profitable at the current price.");
    } else {
        println!(
            "Projection is NOT profitable; profit turns positive above {:.2} per arroba.",
            break_even
        );
    }
    println!();
}

/// Display a one-line-per-batch overview.
pub fn display_batch_list(batches: &[&Batch]) {
    if batches.is_empty() {
        println!("No batches registered. Use 'add-batch' to create one.");
        return;
    }

    println!();
    println!("=== Batches ({} total) ===", batches.len());
    println!();

    for batch in batches {
        println!(
            "  {} - {} head, {:.0} -> {:.0} kg, total cost {:.2}",
            batch.name,
            batch.cattle_count,
            batch.initial_weight,
            batch.target_weight,
            batch.total_cost()
        );
    }

    println!();
}

/// Display the cost ledger and monthly summaries for a batch.
pub fn display_cost_summary(
    batch: &Batch,
    monthly_per_head: f64,
    monthly_total: f64,
    daily_consumption: f64,
) {
    println!();
    println!("=== Costs: {} ===", batch.name);
    println!();

    if batch.costs.is_empty() {
        println!("No cost entries recorded.");
    } else {
        for entry in &batch.costs {
            println!(
                "  {}  {:<12}  {:>10.2}  {}",
                entry.date,
                entry.category.label(),
                entry.amount,
                entry.description
            );
        }
    }

    println!();
    println!("Initial outlay: {:.2}", batch.initial_cost());
    println!("Accumulated costs: {:.2}", batch.accumulated_cost());
    println!(
        "Monthly cost: {:.2} total, {:.2} per head",
        monthly_total, monthly_per_head
    );
    println!(
        "Estimated feed consumption: {:.2} kg/head/day at {:.0} kg live weight",
        daily_consumption, batch.current_weight
    );
    println!();
}
