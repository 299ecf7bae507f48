//! `repl::system` module
//!
//! Contains REPL handlers for looking things over and leaving: inventory,
//! garden listing, help, and quit.

use log::info;

use crate::garden::Garden;
use crate::repl::ReplControl;
use crate::style::GardenStyle;

/// Show both inventory counters. Zero entries are listed too, so a species
/// the gardener has touched stays visible for the rest of the session.
pub fn inventory_handler(garden: &Garden) {
    let (seeds, produce) = garden.gardener.inventory_snapshot();

    println!("{}", "Seed pouch".subheading_style());
    if seeds.is_empty() {
        println!("  (empty)");
    }
    for (species, count) in seeds {
        println!("  {:>3} x {}", count, species.seed_style());
    }

    println!("{}", "Harvest basket".subheading_style());
    if produce.is_empty() {
        println!("  (empty)");
    }
    for (species, count) in produce {
        println!("  {:>3} x {}", count, species.produce_style());
    }
    println!();
}

/// List every growing bed with its current stage.
pub fn garden_handler(garden: &Garden) {
    if garden.gardener.growing.is_empty() {
        println!("The beds are bare earth. Nothing is growing.\n");
        return;
    }
    println!("{}", "Growing beds".subheading_style());
    for (idx, plant) in garden.gardener.growing.iter().enumerate() {
        let marker = if plant.is_harvestable() {
            format!(" -- {}", "ready to harvest".ready_style())
        } else {
            String::new()
        };
        println!(
            "  {}. {} ({}){}",
            idx + 1,
            plant.species().species_style(),
            plant.current_stage().stage_style(),
            marker
        );
    }
    println!();
}

/// Show the command list.
pub fn help_handler() {
    println!("{}", "Commands".subheading_style());
    println!("  plant [species]   put a seed in the ground (menu if no species given)");
    println!("  tend              water and weed; every plant grows one stage");
    println!("  harvest           collect everything that is ready");
    println!("  forage            search the hedgerows for a random seed");
    println!("  inventory         show your seed pouch and harvest basket");
    println!("  garden            look over the growing beds");
    println!("  quit              leave the garden");
    println!();
}

/// Leave the garden, logging the session's final state.
pub fn quit_handler(garden: &Garden) -> ReplControl {
    info!(
        "{} quit after {} turn(s)",
        garden.gardener.name, garden.turn_count
    );
    info!("final seed counts:");
    for (species, count) in garden.gardener.inventory.seeds() {
        info!("* {species}: {count}");
    }
    info!("final harvest counts:");
    for (species, count) in garden.gardener.inventory.produce() {
        info!("* {species}: {count}");
    }
    println!(
        "You latch the gate behind you, {}. The garden keeps growing without you.",
        garden.gardener.name.heading_style()
    );
    ReplControl::Quit
}
