//! Planet mass lookup tool
//!
//! Fixed mapping of the eight planets to their masses in units of
//! 10^24 kg. Lookup is case-sensitive and exact; a miss produces an
//! explanatory error string rather than a failure.

use super::Tool;

/// Planet masses in units of 10^24 kg.
const PLANET_MASSES: [(&str, f64); 8] = [
    ("Mercury", 0.33011),
    ("Venus", 4.8675),
    ("Earth", 5.972),
    ("Mars", 0.64171),
    ("Jupiter", 1898.19),
    ("Saturn", 568.34),
    ("Uranus", 86.813),
    ("Neptune", 102.413),
];

/// The `planet_mass` tool.
pub struct PlanetMassTool;

impl Tool for PlanetMassTool {
    fn name(&self) -> &str {
        "planet_mass"
    }

    fn description(&self) -> &str {
        "Returns the mass of a planet in the solar system"
    }

    fn run(&self, argument: &str) -> String {
        match PLANET_MASSES.iter().find(|(name, _)| *name == argument) {
            Some((name, mass)) => format!("{} has a mass of {} × 10^24 kg", name, mass),
            None => format!("Error: {} not found in database", argument),
        }
    }
}
