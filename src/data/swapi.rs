//! swapi.tech API client
//!
//! This module provides functionality to query the swapi.tech people endpoint
//! by name and to fetch homeworld details from the URLs embedded in character
//! records, parsing the responses into our domain types.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{Character, Homeworld};

/// Base URL for the swapi.tech people endpoint
const SWAPI_PEOPLE_URL: &str = "https://www.swapi.tech/api/people/";

/// Errors that can occur when looking up characters or homeworlds
///
/// `Transport` and `Schema` display as their underlying cause so call sites
/// choose the user-facing prefix.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed (network error or error status)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Response JSON was undecodable or lacked expected fields
    #[error("{0}")]
    Schema(#[from] serde_json::Error),

    /// A numeric field arrived as a non-numeric string
    #[error("field '{field}' is not a number: '{value}'")]
    InvalidNumber {
        /// Name of the offending field
        field: &'static str,
        /// The value as received
        value: String,
    },
}

/// Response from the people search endpoint
#[derive(Debug, Deserialize)]
struct PeopleResponse {
    /// Matching records; absent when the search found nothing
    #[serde(default)]
    result: Option<Vec<PersonResult>>,
}

/// A single search result wrapper
#[derive(Debug, Deserialize)]
struct PersonResult {
    properties: PersonProperties,
}

/// Character properties from the API; all values arrive as strings
#[derive(Debug, Deserialize)]
struct PersonProperties {
    name: String,
    height: String,
    mass: String,
    birth_year: String,
    #[serde(default)]
    homeworld: Option<String>,
}

/// Response from a planet detail URL
#[derive(Debug, Deserialize)]
struct PlanetResponse {
    #[serde(default)]
    result: Option<PlanetResult>,
}

#[derive(Debug, Deserialize)]
struct PlanetResult {
    #[serde(default)]
    properties: Option<PlanetProperties>,
}

/// Planet properties from the API; all values arrive as strings
#[derive(Debug, Deserialize)]
struct PlanetProperties {
    name: String,
    population: String,
    orbital_period: String,
    rotation_period: String,
}

/// Client for querying the swapi.tech API
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: Client,
    /// People endpoint URL (allows override for testing)
    people_url: String,
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapiClient {
    /// Creates a new SwapiClient against the public swapi.tech endpoint
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            people_url: SWAPI_PEOPLE_URL.to_string(),
        }
    }

    /// Creates a new SwapiClient with a custom people endpoint (for testing)
    pub fn with_base_url(people_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            people_url: people_url.into(),
        }
    }

    /// Searches characters by full or partial name
    ///
    /// # Returns
    /// * `Ok(characters)` - All matching records; an empty vec is a normal
    ///   "no results" outcome, not an error
    /// * `Err(LookupError)` - If the request or parsing fails
    pub async fn search_characters(&self, name: &str) -> Result<Vec<Character>, LookupError> {
        let response = self
            .client
            .get(&self.people_url)
            .query(&[("name", name)])
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;

        parse_people(&text)
    }

    /// Fetches homeworld details from a URL taken from a character record
    ///
    /// # Returns
    /// * `Ok(Some(homeworld))` - Planet details with derived Earth-time ratios
    /// * `Ok(None)` - The response carried no planet properties
    /// * `Err(LookupError)` - If the request or parsing fails
    pub async fn fetch_homeworld(&self, url: &str) -> Result<Option<Homeworld>, LookupError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let text = response.text().await?;

        parse_planet(&text)
    }
}

/// Parses a people search response into domain characters
fn parse_people(text: &str) -> Result<Vec<Character>, LookupError> {
    let response: PeopleResponse = serde_json::from_str(text)?;

    let characters = response
        .result
        .unwrap_or_default()
        .into_iter()
        .map(|result| {
            let properties = result.properties;
            Character {
                name: properties.name,
                height: properties.height,
                mass: properties.mass,
                birth_year: properties.birth_year,
                homeworld: properties.homeworld,
            }
        })
        .collect();

    Ok(characters)
}

/// Parses a planet detail response, computing the Earth-time ratios
fn parse_planet(text: &str) -> Result<Option<Homeworld>, LookupError> {
    let response: PlanetResponse = serde_json::from_str(text)?;

    let Some(properties) = response.result.and_then(|result| result.properties) else {
        return Ok(None);
    };

    let orbital_period = parse_number("orbital_period", &properties.orbital_period)?;
    let rotation_period = parse_number("rotation_period", &properties.rotation_period)?;

    Ok(Some(Homeworld {
        name: properties.name,
        population: properties.population,
        years_ratio: orbital_period / 365.0,
        days_ratio: rotation_period / 24.0,
    }))
}

/// Parses a stringly-typed numeric field from the API
fn parse_number(field: &'static str, value: &str) -> Result<f64, LookupError> {
    value.parse().map_err(|_| LookupError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUKE_RESPONSE: &str = r#"{
        "result": [
            {
                "properties": {
                    "name": "Luke Skywalker",
                    "height": "172",
                    "mass": "77",
                    "birth_year": "19BBY",
                    "homeworld": "https://www.swapi.tech/api/planets/1"
                }
            }
        ]
    }"#;

    const TATOOINE_RESPONSE: &str = r#"{
        "result": {
            "properties": {
                "name": "Tatooine",
                "population": "200000",
                "orbital_period": "304",
                "rotation_period": "23"
            }
        }
    }"#;

    #[test]
    fn test_parse_people_single_record() {
        let characters = parse_people(LUKE_RESPONSE).expect("Should parse");

        assert_eq!(characters.len(), 1);
        let luke = &characters[0];
        assert_eq!(luke.name, "Luke Skywalker");
        assert_eq!(luke.height, "172");
        assert_eq!(luke.mass, "77");
        assert_eq!(luke.birth_year, "19BBY");
        assert_eq!(
            luke.homeworld.as_deref(),
            Some("https://www.swapi.tech/api/planets/1")
        );
    }

    #[test]
    fn test_parse_people_missing_result_is_empty() {
        let characters = parse_people(r#"{"message": "not found"}"#).expect("Should parse");
        assert!(characters.is_empty());
    }

    #[test]
    fn test_parse_people_empty_result_is_empty() {
        let characters = parse_people(r#"{"result": []}"#).expect("Should parse");
        assert!(characters.is_empty());
    }

    #[test]
    fn test_parse_people_missing_field_is_schema_error() {
        let text = r#"{"result": [{"properties": {"name": "Luke Skywalker"}}]}"#;
        let err = parse_people(text).expect_err("Should fail");
        assert!(matches!(err, LookupError::Schema(_)));
    }

    #[test]
    fn test_parse_people_invalid_json_is_schema_error() {
        let err = parse_people("not json").expect_err("Should fail");
        assert!(matches!(err, LookupError::Schema(_)));
    }

    #[test]
    fn test_parse_people_without_homeworld_url() {
        let text = r#"{
            "result": [
                {
                    "properties": {
                        "name": "Arvel Crynyd",
                        "height": "unknown",
                        "mass": "unknown",
                        "birth_year": "unknown"
                    }
                }
            ]
        }"#;
        let characters = parse_people(text).expect("Should parse");
        assert!(characters[0].homeworld.is_none());
    }

    #[test]
    fn test_parse_planet_computes_ratios() {
        let world = parse_planet(TATOOINE_RESPONSE)
            .expect("Should parse")
            .expect("Should have properties");

        assert_eq!(world.name, "Tatooine");
        assert_eq!(world.population, "200000");
        assert!((world.years_ratio - 304.0 / 365.0).abs() < 1e-9);
        assert!((world.days_ratio - 23.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_planet_earth_periods_give_unit_ratios() {
        let text = r#"{
            "result": {
                "properties": {
                    "name": "Earthlike",
                    "population": "1000",
                    "orbital_period": "365",
                    "rotation_period": "24"
                }
            }
        }"#;
        let world = parse_planet(text)
            .expect("Should parse")
            .expect("Should have properties");

        assert!((world.years_ratio - 1.0).abs() < 1e-9);
        assert!((world.days_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_planet_null_result_is_none() {
        let world = parse_planet(r#"{"result": null}"#).expect("Should parse");
        assert!(world.is_none());
    }

    #[test]
    fn test_parse_planet_missing_result_is_none() {
        let world = parse_planet(r#"{}"#).expect("Should parse");
        assert!(world.is_none());
    }

    #[test]
    fn test_parse_planet_unknown_period_is_invalid_number() {
        let text = r#"{
            "result": {
                "properties": {
                    "name": "Aleen Minor",
                    "population": "unknown",
                    "orbital_period": "unknown",
                    "rotation_period": "unknown"
                }
            }
        }"#;
        let err = parse_planet(text).expect_err("Should fail");
        assert!(matches!(
            err,
            LookupError::InvalidNumber {
                field: "orbital_period",
                ..
            }
        ));
        assert!(err.to_string().contains("orbital_period"));
    }
}
