//! Styling helpers for terminal output.
//!
//! The [`GardenStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GardenStyle {
    fn species_style(&self) -> ColoredString;
    fn stage_style(&self) -> ColoredString;
    fn ready_style(&self) -> ColoredString;
    fn seed_style(&self) -> ColoredString;
    fn produce_style(&self) -> ColoredString;
    fn heading_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn flavor_style(&self) -> ColoredString;
}

impl GardenStyle for &str {
    fn species_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn stage_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn ready_style(&self) -> ColoredString {
        self.bold().truecolor(230, 130, 30)
    }
    fn seed_style(&self) -> ColoredString {
        self.truecolor(150, 120, 70)
    }
    fn produce_style(&self) -> ColoredString {
        self.truecolor(200, 60, 60)
    }
    fn heading_style(&self) -> ColoredString {
        self.bold().truecolor(102, 208, 250)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(75, 180, 75)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn flavor_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
}

impl GardenStyle for String {
    fn species_style(&self) -> ColoredString {
        self.as_str().species_style()
    }
    fn stage_style(&self) -> ColoredString {
        self.as_str().stage_style()
    }
    fn ready_style(&self) -> ColoredString {
        self.as_str().ready_style()
    }
    fn seed_style(&self) -> ColoredString {
        self.as_str().seed_style()
    }
    fn produce_style(&self) -> ColoredString {
        self.as_str().produce_style()
    }
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn flavor_style(&self) -> ColoredString {
        self.as_str().flavor_style()
    }
}
