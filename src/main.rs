#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Verdant **
//! A small turn-based gardening simulation played at the terminal.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use verdant::style::GardenStyle;
use verdant::{Garden, Gardener, load_catalog, run_repl, thread_entropy};

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading the species catalog...");
    let catalog = load_catalog().context("while loading the species catalog")?;
    info!("catalog loaded successfully.");

    println!("{:^72}", "VERDANT: A SMALL PATCH OF EARTH".heading_style());
    println!("\n{}", include_str!("../data/intro.txt").flavor_style());

    let gardener = prompt_gardener().context("while naming the gardener")?;
    println!("\nWelcome to the plot, {}.", gardener.name.heading_style());

    let mut garden = Garden::new(gardener, catalog);
    let mut rng = thread_entropy();
    run_repl(&mut garden, &mut rng)
}

/// Prompt until the entered name passes [`Gardener::new`] validation.
/// EOF settles for a default name so piped sessions still run.
fn prompt_gardener() -> Result<Gardener> {
    let mut buffer = String::new();
    loop {
        print!("What is your name, gardener? ");
        io::stdout().flush()?;
        buffer.clear();
        let bytes = io::stdin().read_line(&mut buffer)?;
        if bytes == 0 {
            info!("input closed during the name prompt; using the default name");
            return Ok(Gardener::new("Gardener")?);
        }
        match Gardener::new(buffer.trim()) {
            Ok(gardener) => return Ok(gardener),
            Err(err) => println!("{}", err.to_string().error_style()),
        }
    }
}
