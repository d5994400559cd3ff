use serde::{Deserialize, Serialize};

/// A feed ingredient in a ration mix.
///
/// Names are display-only and need not be unique. Percentage is the share of
/// the mix by weight, in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Percentage")]
    pub percentage: f64,

    #[serde(rename = "PricePerKg")]
    pub price_per_kg: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, percentage: f64, price_per_kg: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
            price_per_kg,
        }
    }
}

/// Everything needed to cost one ration mix.
///
/// Built fresh from caller input on each calculation; nothing here outlives a
/// single call to [`crate::formulator::calculate`].
#[derive(Debug, Clone)]
pub struct MixRequest {
    /// Total kilograms of mix to produce.
    pub total_weight: f64,

    /// Number of animals the mix feeds.
    pub herd_size: u32,

    /// Kilograms consumed per animal per day.
    pub daily_consumption_per_head: f64,

    /// Mix composition, in display order.
    pub ingredients: Vec<Ingredient>,
}

/// Itemized cost of a single ingredient inside a calculated mix.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientCost {
    pub name: String,
    pub weight: f64,
    pub cost: f64,
    pub percentage: f64,
}

/// Full cost breakdown of a ration mix.
///
/// All values are unrounded; presentation rounds for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub total_weight: f64,
    pub per_ingredient: Vec<IngredientCost>,
    pub total_cost: f64,
    pub cost_per_kg: f64,
    pub daily_consumption: f64,
    pub daily_cost: f64,
    pub daily_cost_per_head: f64,
}
