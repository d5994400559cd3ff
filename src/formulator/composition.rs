use crate::formulator::constants::PERCENT_TOTAL;
use crate::models::Ingredient;

/// Result of checking a mix composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    Invalid { actual_sum: f64 },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Sum of ingredient percentages.
pub fn sum_percentages(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(|i| i.percentage).sum()
}

/// Check that ingredient percentages sum to exactly 100.
///
/// Strict equality, no epsilon: sums that miss 100 by float rounding are
/// rejected. An empty list sums to 0 and is rejected the same way.
pub fn validate_composition(ingredients: &[Ingredient]) -> ValidationOutcome {
    let sum = sum_percentages(ingredients);
    if sum == PERCENT_TOTAL {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid { actual_sum: sum }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mix(percentages: &[f64]) -> Vec<Ingredient> {
        percentages
            .iter()
            .enumerate()
            .map(|(i, &p)| Ingredient::new(format!("ing{}", i), p, 1.0))
            .collect()
    }

    #[test]
    fn test_exact_hundred_is_valid() {
        assert!(validate_composition(&mix(&[50.0, 30.0, 10.0, 10.0])).is_valid());
        assert!(validate_composition(&mix(&[100.0])).is_valid());
    }

    #[test]
    fn test_off_sum_is_invalid() {
        let outcome = validate_composition(&mix(&[50.0, 30.0, 10.0]));
        assert_eq!(outcome, ValidationOutcome::Invalid { actual_sum: 90.0 });
    }

    #[test]
    fn test_empty_list_is_invalid() {
        let outcome = validate_composition(&[]);
        assert_eq!(outcome, ValidationOutcome::Invalid { actual_sum: 0.0 });
    }

    #[test]
    fn test_float_rounding_is_rejected() {
        // 3 * 33.33 + 0.01 lands a hair off 100 under binary floats; the
        // strict-equality contract rejects it.
        let outcome = validate_composition(&mix(&[33.33, 33.33, 33.33, 0.01]));
        assert!(!outcome.is_valid());
    }
}
