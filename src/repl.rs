//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`Garden`].

pub mod growing;
mod input;
pub mod system;

pub use growing::*;
pub use input::{InputEvent, InputManager};
pub use system::*;

use anyhow::Result;
use log::info;

use crate::command::{Command, parse_command};
use crate::garden::Garden;
use crate::rng::GardenRng;
use crate::style::GardenStyle;

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read-eval-print loop until the gardener quits.
///
/// Handles prompting, command parsing, and dispatching to the handler
/// modules. The turn counter only moves when the beds are tended.
///
/// # Errors
/// - Propagates input backend failures and handler errors.
pub fn run_repl(garden: &mut Garden, rng: &mut dyn GardenRng) -> Result<()> {
    let mut input = InputManager::new();
    loop {
        let prompt = format!("\n[Turn {}|{}]>> ", garden.turn_count, garden.gardener.name)
            .prompt_style()
            .to_string();

        let line = match input.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("Command canceled.");
                continue;
            },
        };

        let command = parse_command(&line);
        info!("command parsed: {command:?}");
        match &command {
            Command::Plant(choice) => plant_handler(garden, &mut input, rng, choice.as_deref())?,
            Command::Tend => tend_handler(garden),
            Command::Harvest => harvest_handler(garden),
            Command::Forage => forage_handler(garden, rng)?,
            Command::Inventory => inventory_handler(garden),
            Command::Garden => garden_handler(garden),
            Command::Help => help_handler(),
            Command::Quit => {
                if let ReplControl::Quit = quit_handler(garden) {
                    break;
                }
            },
            Command::Unknown => {
                println!("{}", "Didn't quite catch that. Try 'help'.".error_style());
            },
        }
    }
    Ok(())
}
