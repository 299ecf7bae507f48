//! Plant -- the growth/harvest state machine.
//!
//! A `Plant` walks an ordered list of stage names from first to last, one
//! step per [`Plant::grow`] call. Reaching the last stage makes it
//! harvestable; harvesting consumes that readiness and the owner discards
//! the plant rather than regrowing it.

use log::info;
use uuid::Uuid;
use variantly::Variantly;

use crate::catalog::SpeciesDef;
use crate::rng::GardenRng;

/// What one growth tick did to a single plant.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum GrowthReport {
    /// Moved one stage closer to maturity.
    Advanced { from: String, to: String },
    /// Just reached the terminal stage; the plant can now be harvested.
    NowHarvestable,
    /// Already at the terminal stage; cannot grow further.
    FullyGrown,
}

/// A single growing plant.
#[derive(Debug, Clone)]
pub struct Plant {
    id: Uuid,
    species: String,
    stages: Vec<String>,
    stage_idx: usize,
    harvestable: bool,
    harvest_yield: u32,
}

impl Plant {
    /// Create a plant from a catalog entry, rolling its yield from the
    /// species' inclusive range.
    pub fn from_def(def: &SpeciesDef, rng: &mut dyn GardenRng) -> Plant {
        let harvest_yield = rng.roll_range(def.yield_min, def.yield_max);
        // a single-stage species starts out already harvest-ready
        let harvestable = def.stages.len() == 1;
        let plant = Plant {
            id: Uuid::new_v4(),
            species: def.name.clone(),
            stages: def.stages.clone(),
            stage_idx: 0,
            harvestable,
            harvest_yield,
        };
        info!(
            "new {} ({}) planted: {} stages, yield {}",
            plant.species,
            plant.id,
            plant.stages.len(),
            plant.harvest_yield
        );
        plant
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    /// Name of the stage the plant is currently in.
    pub fn current_stage(&self) -> &str {
        self.stages.get(self.stage_idx).map_or("", String::as_str)
    }

    pub fn is_harvestable(&self) -> bool {
        self.harvestable
    }

    /// Quantity credited to the inventory when this plant is harvested.
    pub fn harvest_yield(&self) -> u32 {
        self.harvest_yield
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Advance one growth stage.
    ///
    /// A plant already at its terminal stage stays put and reports
    /// [`GrowthReport::FullyGrown`]. The step that lands on the terminal
    /// stage flips the harvestable flag and reports
    /// [`GrowthReport::NowHarvestable`].
    pub fn grow(&mut self) -> GrowthReport {
        if self.stage_idx + 1 >= self.stages.len() {
            info!("{} ({}) cannot grow further", self.species, self.id);
            return GrowthReport::FullyGrown;
        }
        let from = self.current_stage().to_string();
        self.stage_idx += 1;
        let to = self.current_stage().to_string();
        if self.stage_idx + 1 == self.stages.len() {
            self.harvestable = true;
            info!("{} ({}) reached '{to}' and can be harvested", self.species, self.id);
            GrowthReport::NowHarvestable
        } else {
            info!("{} ({}) advanced from '{from}' to '{to}'", self.species, self.id);
            GrowthReport::Advanced { from, to }
        }
    }

    /// Collect the plant if it is ready.
    ///
    /// Returns `true` exactly once per readiness: the flag is cleared on
    /// success and the growth stage is left alone, since a harvested plant
    /// is discarded by its owner rather than regrown.
    pub fn harvest(&mut self) -> bool {
        if self.harvestable {
            self.harvestable = false;
            info!("{} ({}) harvested for {}", self.species, self.id, self.harvest_yield);
            true
        } else {
            info!("{} ({}) is not ready to harvest", self.species, self.id);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::MinRoller;

    fn def(stages: &[&str], min: u32, max: u32) -> SpeciesDef {
        SpeciesDef {
            name: "Testplant".into(),
            stages: stages.iter().map(|s| (*s).to_string()).collect(),
            yield_min: min,
            yield_max: max,
        }
    }

    #[test]
    fn fresh_plant_starts_at_first_stage() {
        let mut rng = MinRoller;
        let plant = Plant::from_def(&def(&["seed", "sprout", "harvest_ready"], 1, 3), &mut rng);
        assert_eq!(plant.current_stage(), "seed");
        assert!(!plant.is_harvestable());
        assert_eq!(plant.harvest_yield(), 1);
    }

    #[test]
    fn n_minus_one_grows_reach_maturity() {
        let mut rng = MinRoller;
        let stages = ["seed", "sprout", "plant", "flower", "harvest_ready"];
        let mut plant = Plant::from_def(&def(&stages, 1, 1), &mut rng);
        for _ in 0..stages.len() - 2 {
            assert!(plant.grow().is_advanced());
        }
        assert!(plant.grow().is_now_harvestable());
        assert!(plant.is_harvestable());
        assert_eq!(plant.current_stage(), "harvest_ready");
    }

    #[test]
    fn grow_past_terminal_is_a_no_op() {
        let mut rng = MinRoller;
        let mut plant = Plant::from_def(&def(&["seed", "harvest_ready"], 1, 1), &mut rng);
        assert!(plant.grow().is_now_harvestable());
        assert!(plant.grow().is_fully_grown());
        assert!(plant.is_harvestable());
        assert_eq!(plant.current_stage(), "harvest_ready");
    }

    #[test]
    fn harvest_succeeds_exactly_once() {
        let mut rng = MinRoller;
        let mut plant = Plant::from_def(&def(&["seed", "harvest_ready"], 2, 2), &mut rng);
        assert!(!plant.harvest());
        plant.grow();
        assert!(plant.harvest());
        assert!(!plant.harvest());
        // stage does not reset on harvest
        assert_eq!(plant.current_stage(), "harvest_ready");
    }

    #[test]
    fn single_stage_species_is_born_ready() {
        let mut rng = MinRoller;
        let mut plant = Plant::from_def(&def(&["harvest_ready"], 1, 1), &mut rng);
        assert!(plant.is_harvestable());
        assert!(plant.grow().is_fully_grown());
        assert!(plant.harvest());
    }

    #[test]
    fn advanced_report_names_both_stages() {
        let mut rng = MinRoller;
        let mut plant = Plant::from_def(&def(&["seed", "sprout", "harvest_ready"], 1, 1), &mut rng);
        let report = plant.grow();
        assert_eq!(
            report,
            GrowthReport::Advanced {
                from: "seed".into(),
                to: "sprout".into()
            }
        );
    }
}
