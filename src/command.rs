//! Command module
//!
//! Describes possible commands used during a session.

/// Commands that can be executed by the gardener.
#[derive(Debug, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    /// Plant a seed; the species may be named inline or chosen from a menu.
    Plant(Option<String>),
    Tend,
    Harvest,
    Forage,
    Inventory,
    /// Look over the growing beds.
    Garden,
    Help,
    Quit,
    Unknown,
}

/// Parses an input string and returns a corresponding [`Command`] if recognized.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["plant" | "sow"] => Command::Plant(None),
        ["plant" | "sow", species] | ["plant" | "sow", "a" | "the", species] => {
            Command::Plant(Some((*species).to_string()))
        },
        ["tend" | "water"] | ["tend", "garden" | "plants"] => Command::Tend,
        ["harvest" | "pick" | "gather"] => Command::Harvest,
        ["forage" | "scrounge"] | ["forage", "for", "seeds"] => Command::Forage,
        ["inventory" | "inv" | "pouch"] => Command::Inventory,
        ["garden" | "look" | "plots" | "beds"] | ["look", "at", "garden" | "plants"] => Command::Garden,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}
