//! Loader for the species catalog.
//!
//! The catalog ships inside the binary as TOML (`data/catalog.toml`) and is
//! deserialized and validated here. Validation problems are aggregated into a
//! single error so a bad data file reports everything wrong with it at once.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use log::info;
use serde::Deserialize;

use crate::catalog::{PlantCatalog, SpeciesDef};

/// The built-in catalog data file.
pub const CATALOG_TOML: &str = include_str!("../data/catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogDef {
    species: Vec<SpeciesDef>,
}

/// Build the [`PlantCatalog`] from the embedded data file.
///
/// # Errors
/// Errors bubble up from deserialization or validation.
pub fn load_catalog() -> Result<PlantCatalog> {
    load_catalog_from_str(CATALOG_TOML).context("while loading the built-in species catalog")
}

/// Build a [`PlantCatalog`] from raw TOML.
///
/// # Errors
/// - malformed TOML
/// - an empty catalog, duplicate or blank names, empty stage lists, or an
///   invalid yield range (reported together)
pub fn load_catalog_from_str(raw: &str) -> Result<PlantCatalog> {
    let def: CatalogDef = toml::from_str(raw).context("while parsing catalog TOML")?;
    validate_catalog(&def)?;
    info!("{} species loaded into the plant catalog", def.species.len());
    Ok(PlantCatalog::from_defs(def.species))
}

/// Validate the parsed catalog and return a single aggregated error.
fn validate_catalog(def: &CatalogDef) -> Result<()> {
    let mut errors = Vec::new();
    if def.species.is_empty() {
        errors.push("catalog defines no species".to_string());
    }
    let mut seen = HashSet::new();
    for sp in &def.species {
        if sp.name.trim().is_empty() {
            errors.push("species with a blank name".to_string());
        }
        if !seen.insert(sp.name.to_lowercase()) {
            errors.push(format!("duplicate species name '{}'", sp.name));
        }
        if sp.stages.is_empty() {
            errors.push(format!("species '{}' has no growth stages", sp.name));
        }
        if sp.yield_min < 1 {
            errors.push(format!("species '{}' has a zero minimum yield", sp.name));
        }
        if sp.yield_min > sp.yield_max {
            errors.push(format!(
                "species '{}' yield range {}..={} is inverted",
                sp.name, sp.yield_min, sp.yield_max
            ));
        }
    }
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors.iter().map(|err| format!("- {err}")).collect::<Vec<_>>().join("\n");
    bail!("catalog validation failed:\n{details}");
}
