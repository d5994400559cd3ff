use std::collections::HashMap;

use crate::error::{FattenError, Result};
use crate::models::{Batch, CostEntry};

/// Manages the in-memory set of fattening batches and their cost ledgers.
pub struct HerdStateManager {
    /// All batches keyed by lowercase name.
    batches: HashMap<String, Batch>,
}

impl HerdStateManager {
    /// Create a new state manager from a list of batches.
    ///
    /// Duplicate names (case-insensitive) collapse to the last occurrence.
    pub fn new(batches: Vec<Batch>) -> Self {
        let mut map = HashMap::new();
        for batch in batches {
            map.insert(batch.key(), batch);
        }
        Self { batches: map }
    }

    /// Get a batch by name (case-insensitive).
    pub fn get_batch(&self, name: &str) -> Option<&Batch> {
        self.batches.get(&name.to_lowercase())
    }

    /// Get a mutable reference to a batch by name (case-insensitive).
    pub fn get_batch_mut(&mut self, name: &str) -> Option<&mut Batch> {
        self.batches.get_mut(&name.to_lowercase())
    }

    /// Insert a batch, replacing any existing batch with the same key.
    pub fn insert_batch(&mut self, batch: Batch) {
        self.batches.insert(batch.key(), batch);
    }

    /// Append a cost entry to the named batch.
    pub fn add_cost(&mut self, name: &str, entry: CostEntry) -> Result<()> {
        let batch = self
            .get_batch_mut(name)
            .ok_or_else(|| FattenError::BatchNotFound(name.to_string()))?;
        batch.add_cost(entry);
        Ok(())
    }

    /// All batches, sorted by name for stable display.
    pub fn all_batches(&self) -> Vec<&Batch> {
        let mut batches: Vec<&Batch> = self.batches.values().collect();
        batches.sort_by(|a, b| a.name.cmp(&b.name));
        batches
    }

    /// All batch names, sorted, for prompts and fuzzy matching.
    pub fn batch_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.batches.values().map(|b| b.name.clone()).collect();
        names.sort();
        names
    }

    /// Total head count across all batches.
    pub fn total_cattle(&self) -> u32 {
        self.batches.values().map(|b| b.cattle_count).sum()
    }

    /// Convert state to a list of batches for JSON serialization.
    pub fn to_batches(&self) -> Vec<Batch> {
        self.batches.values().cloned().collect()
    }

    /// Count of batches in the manager.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Check if manager has no batches.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CostCategory;
    use chrono::NaiveDate;

    fn sample_batch(name: &str, cattle_count: u32) -> Batch {
        Batch {
            name: name.to_string(),
            cattle_count,
            purchase_value: 100_000.0,
            transport_cost: 2_000.0,
            initial_weight: 350.0,
            current_weight: 400.0,
            target_weight: 520.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            arroba_price: 300.0,
            costs: vec![],
        }
    }

    #[test]
    fn test_get_batch_case_insensitive() {
        let manager = HerdStateManager::new(vec![sample_batch("Lot 1", 50)]);
        assert!(manager.get_batch("lot 1").is_some());
        assert!(manager.get_batch("LOT 1").is_some());
        assert!(manager.get_batch("lot 2").is_none());
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let manager =
            HerdStateManager::new(vec![sample_batch("Lot 1", 50), sample_batch("lot 1", 30)]);
        assert_eq!(manager.len(), 1);
        // Last occurrence wins
        assert_eq!(manager.get_batch("Lot 1").unwrap().cattle_count, 30);
    }

    #[test]
    fn test_add_cost() {
        let mut manager = HerdStateManager::new(vec![sample_batch("Lot 1", 50)]);
        let entry = CostEntry {
            category: CostCategory::Feed,
            description: "silage".to_string(),
            amount: 1_200.0,
            date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        };

        manager.add_cost("lot 1", entry).unwrap();
        assert_eq!(manager.get_batch("Lot 1").unwrap().costs.len(), 1);

        let missing = manager.add_cost("lot 9", CostEntry {
            category: CostCategory::Other,
            description: String::new(),
            amount: 1.0,
            date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        });
        assert!(matches!(missing, Err(FattenError::BatchNotFound(_))));
    }

    #[test]
    fn test_all_batches_sorted() {
        let manager =
            HerdStateManager::new(vec![sample_batch("Lot B", 30), sample_batch("Lot A", 50)]);
        let names: Vec<&str> = manager.all_batches().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Lot A", "Lot B"]);
        assert_eq!(manager.total_cattle(), 80);
    }
}
