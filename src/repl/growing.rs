//! `repl::growing` module
//!
//! Contains REPL handlers for the commands that work the beds: plant, tend,
//! harvest, and forage.

use anyhow::Result;
use log::info;

use crate::garden::Garden;
use crate::gardener::{HarvestOutcome, TendOutcome};
use crate::plant::GrowthReport;
use crate::repl::input::{InputManager, select};
use crate::rng::GardenRng;
use crate::style::GardenStyle;

/// Put one seed in the ground, via the numbered menu when no species was
/// named on the command line.
pub fn plant_handler(
    garden: &mut Garden,
    input: &mut InputManager,
    rng: &mut dyn GardenRng,
    choice: Option<&str>,
) -> Result<()> {
    let candidates = garden.gardener.plantable_species(&garden.catalog);
    if candidates.is_empty() {
        println!("{} Try foraging first.", "You have no seeds to plant.".error_style());
        return Ok(());
    }

    let species = match choice {
        Some(name) => name.to_string(),
        None => match select(input, "Plant which seed?", &candidates)? {
            Some(picked) => picked,
            None => {
                println!("Never mind, then.");
                return Ok(());
            },
        },
    };

    match garden.gardener.plant(&species, &garden.catalog, rng) {
        Ok(plant) => {
            println!(
                "You tuck a {} seed into a fresh bed. ({})\n",
                plant.species().species_style(),
                plant.current_stage().stage_style()
            );
        },
        Err(err) => println!("{}", err.to_string().error_style()),
    }
    Ok(())
}

/// Tend every bed, advancing each plant one growth stage. This is the one
/// command that moves the turn counter.
pub fn tend_handler(garden: &mut Garden) {
    match garden.gardener.tend() {
        TendOutcome::NothingToTend => {
            println!("There is nothing planted to tend.");
        },
        TendOutcome::Tended(reports) => {
            garden.turn_count += 1;
            info!("turn advanced to {} by tending", garden.turn_count);
            println!("You water and weed the beds.");
            for tended in &reports {
                match &tended.report {
                    GrowthReport::Advanced { to, .. } => {
                        println!(
                            "  The {} grows into a {}.",
                            tended.species.species_style(),
                            to.stage_style()
                        );
                    },
                    GrowthReport::NowHarvestable => {
                        println!(
                            "  The {} {}",
                            tended.species.species_style(),
                            "can be harvested!".ready_style()
                        );
                    },
                    GrowthReport::FullyGrown => {
                        println!("  The {} cannot grow further.", tended.species.species_style());
                    },
                }
            }
            println!();
        },
    }
}

/// Collect everything that is ready.
pub fn harvest_handler(garden: &mut Garden) {
    match garden.gardener.harvest() {
        HarvestOutcome::NothingReady => {
            println!("Nothing out there is ready to harvest.");
        },
        HarvestOutcome::Harvested(reports) => {
            for report in &reports {
                println!(
                    "You harvest {} {}.",
                    report.amount,
                    report.species.produce_style()
                );
            }
            println!("{} plant(s) cleared from the beds.\n", reports.len());
        },
    }
}

/// Scrounge the hedgerows for one random seed.
///
/// # Errors
/// Only on an empty catalog, which a loaded session never has.
pub fn forage_handler(garden: &mut Garden, rng: &mut dyn GardenRng) -> Result<()> {
    let species = garden.gardener.forage(&garden.catalog, rng)?;
    println!(
        "Rooting around the hedgerow, you find a {} seed.\n",
        species.seed_style()
    );
    Ok(())
}
