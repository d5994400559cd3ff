pub mod manager;
pub mod persistence;

pub use manager::HerdStateManager;
pub use persistence::{load_batches, save_batches};
