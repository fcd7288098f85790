//! Core data models for the Holocron CLI
//!
//! This module contains the domain types for characters and their homeworlds,
//! along with the text formatting used for display and for the cached `data`
//! blobs.

pub mod swapi;

pub use swapi::{LookupError, SwapiClient};

/// A Star Wars character as returned by the search endpoint
///
/// All measurable fields stay as the API's strings because the API reports
/// `"unknown"` for characters without recorded values.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Height in centimeters, as reported
    pub height: String,
    /// Mass in kilograms, as reported
    pub mass: String,
    /// In-universe birth year (e.g. "19BBY")
    pub birth_year: String,
    /// Detail URL of the character's homeworld, if the API provides one
    pub homeworld: Option<String>,
}

impl Character {
    /// Formats the character as a multi-line display block
    ///
    /// Ends with a trailing newline so blocks joined with `"\n"` are
    /// separated by a blank line.
    pub fn display_block(&self) -> String {
        format!(
            "Name: {}\nHeight: {} cm\nMass: {} kg\nBirth Year: {}\n",
            self.name, self.height, self.mass, self.birth_year
        )
    }
}

/// A character's homeworld with ratios relative to Earth time
#[derive(Debug, Clone, PartialEq)]
pub struct Homeworld {
    /// Planet name
    pub name: String,
    /// Population, as reported (often "unknown")
    pub population: String,
    /// Orbital period divided by 365 Earth days
    pub years_ratio: f64,
    /// Rotation period divided by 24 Earth hours
    pub days_ratio: f64,
}

impl Homeworld {
    /// Formats the homeworld as a multi-line display block, with the time
    /// ratios rounded to two decimal places
    pub fn display_block(&self) -> String {
        format!(
            "Name: {}\nPopulation: {}\nOn {}, 1 year on Earth is {:.2} years and 1 day is {:.2} days.",
            self.name, self.population, self.name, self.years_ratio, self.days_ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_display_block_layout() {
        let character = Character {
            name: "Luke Skywalker".to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            birth_year: "19BBY".to_string(),
            homeworld: None,
        };

        assert_eq!(
            character.display_block(),
            "Name: Luke Skywalker\nHeight: 172 cm\nMass: 77 kg\nBirth Year: 19BBY\n"
        );
    }

    #[test]
    fn test_character_display_block_keeps_unknown_values() {
        let character = Character {
            name: "Yoda".to_string(),
            height: "66".to_string(),
            mass: "unknown".to_string(),
            birth_year: "896BBY".to_string(),
            homeworld: None,
        };

        assert!(character.display_block().contains("Mass: unknown kg"));
    }

    #[test]
    fn test_homeworld_display_block_two_decimal_ratios() {
        let world = Homeworld {
            name: "Tatooine".to_string(),
            population: "200000".to_string(),
            years_ratio: 304.0 / 365.0,
            days_ratio: 23.0 / 24.0,
        };

        assert_eq!(
            world.display_block(),
            "Name: Tatooine\nPopulation: 200000\nOn Tatooine, 1 year on Earth is 0.83 years and 1 day is 0.96 days."
        );
    }

    #[test]
    fn test_homeworld_display_block_earth_equivalent_is_one() {
        let world = Homeworld {
            name: "Earthlike".to_string(),
            population: "8000000000".to_string(),
            years_ratio: 365.0 / 365.0,
            days_ratio: 24.0 / 24.0,
        };

        let block = world.display_block();
        assert!(block.contains("1 year on Earth is 1.00 years"));
        assert!(block.contains("1 day is 1.00 days"));
    }
}
