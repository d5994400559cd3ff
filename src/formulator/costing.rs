use crate::error::CompositionError;
use crate::formulator::composition::{ValidationOutcome, validate_composition};
use crate::formulator::constants::PERCENT_TOTAL;
use crate::models::{CalculationResult, IngredientCost, MixRequest};

/// Cost a ration mix.
///
/// Pure and stateless: the same request always yields the same result, and a
/// failed request produces no partial output. Values are unrounded; rounding
/// for display is the caller's job and must never feed back in.
pub fn calculate(request: &MixRequest) -> Result<CalculationResult, CompositionError> {
    check_non_negative(request)?;

    if let ValidationOutcome::Invalid { actual_sum } = validate_composition(&request.ingredients) {
        return Err(CompositionError::PercentageMismatch {
            expected: PERCENT_TOTAL,
            actual: actual_sum,
        });
    }

    if request.total_weight == 0.0 {
        return Err(CompositionError::DegenerateMix);
    }
    if request.herd_size == 0 {
        return Err(CompositionError::EmptyHerd);
    }

    let per_ingredient: Vec<IngredientCost> = request
        .ingredients
        .iter()
        .map(|ingredient| {
            let weight = (ingredient.percentage / PERCENT_TOTAL) * request.total_weight;
            let cost = weight * ingredient.price_per_kg;
            IngredientCost {
                name: ingredient.name.clone(),
                weight,
                cost,
                percentage: ingredient.percentage,
            }
        })
        .collect();

    let total_cost: f64 = per_ingredient.iter().map(|i| i.cost).sum();
    let cost_per_kg = total_cost / request.total_weight;

    let daily_consumption = request.daily_consumption_per_head * request.herd_size as f64;
    let daily_cost = daily_consumption * cost_per_kg;
    let daily_cost_per_head = daily_cost / request.herd_size as f64;

    Ok(CalculationResult {
        total_weight: request.total_weight,
        per_ingredient,
        total_cost,
        cost_per_kg,
        daily_consumption,
        daily_cost,
        daily_cost_per_head,
    })
}

/// Reject any negative numeric input before touching the arithmetic.
fn check_non_negative(request: &MixRequest) -> Result<(), CompositionError> {
    if request.total_weight < 0.0 {
        return Err(CompositionError::NegativeValue {
            field: "total_weight",
        });
    }
    if request.daily_consumption_per_head < 0.0 {
        return Err(CompositionError::NegativeValue {
            field: "daily_consumption_per_head",
        });
    }
    for ingredient in &request.ingredients {
        if ingredient.percentage < 0.0 {
            return Err(CompositionError::NegativeValue {
                field: "percentage",
            });
        }
        if ingredient.price_per_kg < 0.0 {
            return Err(CompositionError::NegativeValue {
                field: "price_per_kg",
            });
        }
    }
    Ok(())
}
