pub mod analysis;
pub mod cli;
pub mod error;
pub mod formulator;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{AnalysisError, CompositionError, FattenError, Result};
pub use models::{Batch, CalculationResult, CostEntry, Ingredient, MixRequest};
