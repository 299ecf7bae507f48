//! Session state for a running game.
//!
//! [`Garden`] bundles everything the REPL mutates: the gardener, the fixed
//! species catalog, and the turn counter. It is created once at startup and
//! lives for the whole session.

use log::info;

use crate::VERDANT_VERSION;
use crate::catalog::PlantCatalog;
use crate::gardener::Gardener;

/// Complete state of a running session.
#[derive(Debug)]
pub struct Garden {
    pub gardener: Gardener,
    pub catalog: PlantCatalog,
    pub turn_count: usize,
    pub version: String,
}

impl Garden {
    pub fn new(gardener: Gardener, catalog: PlantCatalog) -> Garden {
        info!(
            "garden opened for '{}' with {} catalog species",
            gardener.name,
            catalog.len()
        );
        Garden {
            gardener,
            catalog,
            turn_count: 0,
            version: VERDANT_VERSION.to_string(),
        }
    }
}
