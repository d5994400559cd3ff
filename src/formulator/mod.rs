pub mod composition;
pub mod constants;
pub mod costing;

pub use composition::{ValidationOutcome, sum_percentages, validate_composition};
pub use constants::*;
pub use costing::calculate;
