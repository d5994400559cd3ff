pub mod batch;
pub mod ration;

pub use batch::{Batch, CostCategory, CostEntry};
pub use ration::{CalculationResult, Ingredient, IngredientCost, MixRequest};
