//! Gardener -- owns the seed pouch and the growing beds.
//!
//! All of the game's verbs live here as plain methods returning status
//! values. Failures are local and recoverable; the REPL displays them and
//! the session continues.

use std::collections::BTreeMap;
use std::mem;

use log::info;
use thiserror::Error;
use uuid::Uuid;
use variantly::Variantly;

use crate::catalog::PlantCatalog;
use crate::inventory::Inventory;
use crate::plant::{GrowthReport, Plant};
use crate::rng::GardenRng;

/// Recoverable failures from garden operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GardenError {
    #[error("no seeds of any kind available")]
    NoSeedsAvailable,
    #[error("no {0} seeds left in the pouch")]
    OutOfSeeds(String),
    #[error("'{0}' is not a species in the catalog")]
    UnknownSpecies(String),
    #[error("the species catalog is empty")]
    EmptyCatalog,
    #[error("'{0}' is not a usable gardener name (letters only, at least one)")]
    InvalidName(String),
}

/// One plant's growth report from a tend pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TendReport {
    pub species: String,
    pub report: GrowthReport,
}

/// Outcome of a tend pass over the growing beds.
///
/// `Tended` is returned whenever any plants were present, even if none of
/// them actually advanced a stage.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum TendOutcome {
    Tended(Vec<TendReport>),
    NothingToTend,
}

/// One collected plant from a harvest pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    pub species: String,
    pub amount: u32,
}

/// Outcome of a harvest pass over the growing beds.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum HarvestOutcome {
    Harvested(Vec<HarvestReport>),
    NothingReady,
}

/// The player character: a named gardener with an inventory and an ordered
/// collection of growing plants (insertion order = planting order).
#[derive(Debug)]
pub struct Gardener {
    pub id: Uuid,
    pub name: String,
    pub inventory: Inventory,
    pub growing: Vec<Plant>,
}

impl Gardener {
    /// Create a gardener.
    ///
    /// # Errors
    /// [`GardenError::InvalidName`] unless the name is non-empty and
    /// entirely alphabetic.
    pub fn new(name: &str) -> Result<Gardener, GardenError> {
        if name.is_empty() || !name.chars().all(char::is_alphabetic) {
            return Err(GardenError::InvalidName(name.to_string()));
        }
        info!("gardener '{name}' takes the plot");
        Ok(Gardener {
            id: Uuid::new_v4(),
            name: name.to_string(),
            inventory: Inventory::new(),
            growing: Vec::new(),
        })
    }

    /// Plant one seed of `species` into a new bed.
    ///
    /// # Errors
    /// - [`GardenError::NoSeedsAvailable`] when every seed count is zero
    /// - [`GardenError::UnknownSpecies`] when the catalog has no such entry
    /// - [`GardenError::OutOfSeeds`] when that particular species is at zero
    ///
    /// Nothing is mutated on failure.
    pub fn plant(
        &mut self,
        species: &str,
        catalog: &PlantCatalog,
        rng: &mut dyn GardenRng,
    ) -> Result<&Plant, GardenError> {
        if self.inventory.total_seeds() == 0 {
            return Err(GardenError::NoSeedsAvailable);
        }
        let def = catalog
            .get(species)
            .ok_or_else(|| GardenError::UnknownSpecies(species.to_string()))?;
        self.inventory.take_seed(&def.name)?;
        let plant = Plant::from_def(def, rng);
        info!("{} planted a {} ({})", self.name, plant.species(), plant.id());
        let idx = self.growing.len();
        self.growing.push(plant);
        Ok(&self.growing[idx])
    }

    /// Grow every planted bed by one tick, in planting order.
    pub fn tend(&mut self) -> TendOutcome {
        if self.growing.is_empty() {
            info!("{} has nothing to tend", self.name);
            return TendOutcome::NothingToTend;
        }
        let reports = self
            .growing
            .iter_mut()
            .map(|plant| TendReport {
                species: plant.species().to_string(),
                report: plant.grow(),
            })
            .collect();
        TendOutcome::Tended(reports)
    }

    /// Collect every harvest-ready plant, crediting its yield to the
    /// inventory and clearing its bed. Immature plants are untouched and
    /// keep their relative order.
    pub fn harvest(&mut self) -> HarvestOutcome {
        if !self.growing.iter().any(Plant::is_harvestable) {
            info!("{} has nothing ready to harvest", self.name);
            return HarvestOutcome::NothingReady;
        }
        let mut kept = Vec::with_capacity(self.growing.len());
        let mut reports = Vec::new();
        for mut plant in mem::take(&mut self.growing) {
            if plant.harvest() {
                self.inventory.add_produce(plant.species(), plant.harvest_yield());
                reports.push(HarvestReport {
                    species: plant.species().to_string(),
                    amount: plant.harvest_yield(),
                });
            } else {
                kept.push(plant);
            }
        }
        self.growing = kept;
        HarvestOutcome::Harvested(reports)
    }

    /// Find one seed of a species chosen uniformly from the whole catalog,
    /// regardless of what is already in the pouch.
    ///
    /// # Errors
    /// [`GardenError::EmptyCatalog`] -- unreachable with a loaded catalog,
    /// which is validated to be non-empty.
    pub fn forage(&mut self, catalog: &PlantCatalog, rng: &mut dyn GardenRng) -> Result<String, GardenError> {
        let species = rng.pick(catalog.species_names()).ok_or(GardenError::EmptyCatalog)?;
        self.inventory.add_seed(species);
        info!("{} foraged a {species} seed", self.name);
        Ok(species.to_string())
    }

    /// Species the gardener can plant right now, in catalog order.
    pub fn plantable_species(&self, catalog: &PlantCatalog) -> Vec<String> {
        catalog
            .iter()
            .filter(|def| self.inventory.seed_count(&def.name) > 0)
            .map(|def| def.name.clone())
            .collect()
    }

    /// Read-only view of both inventory counters, for display.
    pub fn inventory_snapshot(&self) -> (&BTreeMap<String, u32>, &BTreeMap<String, u32>) {
        (self.inventory.seeds(), self.inventory.produce())
    }
}
