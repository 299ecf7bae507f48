//! Species catalog.
//!
//! The catalog is the fixed, read-only registry of everything that can be
//! planted or foraged. It is built once at startup by [`crate::loader`] and
//! never mutated afterward.

use serde::Deserialize;

/// Growth and yield configuration for one species.
///
/// `stages` is the ordered list of growth phases; the last entry is the
/// harvest-ready stage. The yield range is inclusive on both ends.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesDef {
    pub name: String,
    pub stages: Vec<String>,
    pub yield_min: u32,
    pub yield_max: u32,
}

impl SpeciesDef {
    /// Name of the final (harvest-ready) growth stage.
    pub fn terminal_stage(&self) -> &str {
        self.stages.last().map_or("", String::as_str)
    }
}

/// Fixed registry mapping species names to their [`SpeciesDef`].
///
/// Entries keep file order, which doubles as menu order and the forage
/// universe. Lookup is a linear scan -- the catalog is a handful of entries.
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    species: Vec<SpeciesDef>,
    names: Vec<String>,
}

impl PlantCatalog {
    pub(crate) fn from_defs(species: Vec<SpeciesDef>) -> PlantCatalog {
        let names = species.iter().map(|def| def.name.clone()).collect();
        PlantCatalog { species, names }
    }

    /// Look up a species by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&SpeciesDef> {
        self.species.iter().find(|def| def.name.eq_ignore_ascii_case(name))
    }

    /// Every species name, in catalog order. This is the forage universe.
    pub fn species_names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesDef> {
        self.species.iter()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
