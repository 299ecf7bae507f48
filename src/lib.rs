#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const VERDANT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod catalog;
pub mod command;
pub mod garden;
pub mod gardener;
pub mod inventory;
pub mod loader;
pub mod plant;
pub mod repl;
pub mod rng;
pub mod style;

// Re-exports for convenience
pub use catalog::{PlantCatalog, SpeciesDef};
pub use garden::Garden;
pub use gardener::{GardenError, Gardener};
pub use inventory::Inventory;
pub use loader::load_catalog;
pub use plant::Plant;
pub use repl::run_repl;
pub use rng::{GardenRng, seeded_entropy, thread_entropy};
