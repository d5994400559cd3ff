use crate::error::AnalysisError;
use crate::models::Batch;

/// Projected financial outcome of a batch at a given arroba price.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitMetrics {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    pub profit_per_head: f64,
    pub roi_percent: f64,
    pub months: i32,
    pub monthly_profit: f64,
    pub monthly_weight_gain: f64,
}

/// One sample of the profit-vs-arroba-price projection curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitPoint {
    pub arroba_price: f64,
    pub profit: f64,
}

/// Project revenue, profit, and ROI for a batch sold at `arroba_price`.
///
/// Revenue assumes every head reaches target weight; costs are the purchase
/// and transport outlay plus the accumulated ledger.
pub fn project_profit(batch: &Batch, arroba_price: f64) -> Result<ProfitMetrics, AnalysisError> {
    if arroba_price < 0.0 {
        return Err(AnalysisError::NegativePrice);
    }
    if batch.cattle_count == 0 {
        return Err(AnalysisError::EmptyBatch);
    }
    let total_cost = batch.total_cost();
    if total_cost == 0.0 {
        return Err(AnalysisError::ZeroCost);
    }
    let months = batch.fattening_months();
    if months <= 0 {
        return Err(AnalysisError::ZeroDuration);
    }

    let head_count = batch.cattle_count as f64;
    let total_revenue = head_count * batch.target_weight_arrobas() * arroba_price;
    let total_profit = total_revenue - total_cost;

    Ok(ProfitMetrics {
        total_revenue,
        total_cost,
        total_profit,
        profit_per_head: total_profit / head_count,
        roi_percent: (total_profit / total_cost) * 100.0,
        months,
        monthly_profit: total_profit / months as f64,
        monthly_weight_gain: (batch.target_weight - batch.initial_weight) / months as f64,
    })
}

/// Arroba price at which projected profit is exactly zero.
pub fn break_even_price(batch: &Batch) -> Result<f64, AnalysisError> {
    if batch.cattle_count == 0 {
        return Err(AnalysisError::EmptyBatch);
    }
    let sold_arrobas = batch.cattle_count as f64 * batch.target_weight_arrobas();
    if sold_arrobas == 0.0 {
        return Err(AnalysisError::ZeroWeight);
    }
    Ok(batch.total_cost() / sold_arrobas)
}

/// Sample the profit curve at `points` prices starting from `start_price`.
pub fn profit_curve(
    batch: &Batch,
    start_price: f64,
    step: f64,
    points: usize,
) -> Result<Vec<ProfitPoint>, AnalysisError> {
    (0..points)
        .map(|i| {
            let arroba_price = start_price + step * i as f64;
            let metrics = project_profit(batch, arroba_price)?;
            Ok(ProfitPoint {
                arroba_price,
                profit: metrics.total_profit,
            })
        })
        .collect()
}
