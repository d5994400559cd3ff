pub mod costs;
pub mod profit;

pub use costs::{
    category_totals, estimate_daily_consumption, initial_arroba_value, monthly_cost,
    monthly_cost_per_head,
};
pub use profit::{ProfitMetrics, ProfitPoint, break_even_price, profit_curve, project_profit};
