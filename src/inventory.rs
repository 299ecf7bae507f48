//! Seed and produce bookkeeping.
//!
//! Two independent counters keyed by species name. Counts never go negative;
//! a species that drops to zero keeps its (zero) entry so listings stay
//! stable across a session.

use std::collections::BTreeMap;

use log::info;

use crate::gardener::GardenError;

/// The gardener's pouch: unplanted seeds and harvested produce, by species.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    seeds: BTreeMap<String, u32>,
    produce: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Inventory {
        Inventory::default()
    }

    /// Add one seed of `species`.
    pub fn add_seed(&mut self, species: &str) {
        let count = self.seeds.entry(species.to_string()).or_insert(0);
        *count += 1;
        info!("+1 {species} seed (now {count})");
    }

    /// Remove one seed of `species`.
    ///
    /// # Errors
    /// [`GardenError::OutOfSeeds`] when the count is zero or the species has
    /// never been seen; nothing is mutated on failure.
    pub fn take_seed(&mut self, species: &str) -> Result<(), GardenError> {
        match self.seeds.get_mut(species) {
            Some(count) if *count > 0 => {
                *count -= 1;
                info!("-1 {species} seed (now {count})");
                Ok(())
            },
            _ => Err(GardenError::OutOfSeeds(species.to_string())),
        }
    }

    /// Credit `amount` harvested units of `species`.
    pub fn add_produce(&mut self, species: &str, amount: u32) {
        let count = self.produce.entry(species.to_string()).or_insert(0);
        *count += amount;
        info!("+{amount} {species} harvested (now {count})");
    }

    pub fn seed_count(&self, species: &str) -> u32 {
        self.seeds.get(species).copied().unwrap_or(0)
    }

    pub fn produce_count(&self, species: &str) -> u32 {
        self.produce.get(species).copied().unwrap_or(0)
    }

    /// Total seeds of every species combined.
    pub fn total_seeds(&self) -> u32 {
        self.seeds.values().sum()
    }

    /// Read-only view of the seed counter.
    pub fn seeds(&self) -> &BTreeMap<String, u32> {
        &self.seeds
    }

    /// Read-only view of the produce counter.
    pub fn produce(&self) -> &BTreeMap<String, u32> {
        &self.produce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_seed_creates_entry_at_one() {
        let mut inv = Inventory::new();
        inv.add_seed("Tomato");
        assert_eq!(inv.seed_count("Tomato"), 1);
        inv.add_seed("Tomato");
        assert_eq!(inv.seed_count("Tomato"), 2);
    }

    #[test]
    fn take_seed_fails_on_absent_species() {
        let mut inv = Inventory::new();
        assert!(matches!(inv.take_seed("Tomato"), Err(GardenError::OutOfSeeds(_))));
        assert_eq!(inv.seed_count("Tomato"), 0);
    }

    #[test]
    fn take_seed_fails_at_zero_without_mutation() {
        let mut inv = Inventory::new();
        inv.add_seed("Radish");
        inv.take_seed("Radish").unwrap();
        assert_eq!(inv.seed_count("Radish"), 0);
        assert!(inv.take_seed("Radish").is_err());
        assert_eq!(inv.seed_count("Radish"), 0);
        // the zero entry is kept for display
        assert!(inv.seeds().contains_key("Radish"));
    }

    #[test]
    fn add_produce_accumulates_by_amount() {
        let mut inv = Inventory::new();
        inv.add_produce("Tomato", 3);
        inv.add_produce("Tomato", 2);
        assert_eq!(inv.produce_count("Tomato"), 5);
        assert_eq!(inv.produce_count("Radish"), 0);
    }

    #[test]
    fn total_seeds_spans_species() {
        let mut inv = Inventory::new();
        inv.add_seed("Tomato");
        inv.add_seed("Radish");
        inv.add_seed("Radish");
        assert_eq!(inv.total_seeds(), 3);
    }
}
