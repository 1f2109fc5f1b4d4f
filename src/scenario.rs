/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::LoadError;
use crate::shared::{Passenger, PassengerRef};

/// A batch of ride requests, in the order they are made.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub passengers: Vec<PassengerEntry>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PassengerEntry {
    pub name: String,
    pub origin_floor: i32,
    pub destination_floor: i32,
}

impl Scenario {
    /// One fresh handle per entry, so identical entries stay separate passengers.
    pub fn into_passengers(self) -> Vec<PassengerRef> {
        self.passengers
            .into_iter()
            .map(|entry| Passenger::new_ref(entry.name, entry.origin_floor, entry.destination_floor))
            .collect()
    }
}

pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, LoadError> {
    let path = path.as_ref();
    let scenario_str = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_scenario(&scenario_str, path)
}

pub(crate) fn parse_scenario(scenario_str: &str, path: &Path) -> Result<Scenario, LoadError> {
    toml::from_str(scenario_str).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}
