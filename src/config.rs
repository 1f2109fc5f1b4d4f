/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{Clock, FixedClock, SystemClock};
use crate::error::LoadError;
use crate::shared::Strategy;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub controller: ControllerConfig,
    pub clock: ClockConfig,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ControllerConfig {
    pub strategy: Strategy,
    pub start_floor: i32,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Pins the clock to this hour of 2026-01-01. Absent means wall clock.
    pub fixed_hour: Option<u32>,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, LoadError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&config_str, path)
}

/// Like `load_config`, but a missing file yields the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<Config, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

pub(crate) fn parse_config(config_str: &str, path: &Path) -> Result<Config, LoadError> {
    toml::from_str(config_str).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

impl ClockConfig {
    pub fn build(&self) -> Result<Box<dyn Clock>, LoadError> {
        match self.fixed_hour {
            Some(hour) => fixed_clock(hour).map(|clock| Box::new(clock) as Box<dyn Clock>),
            None => Ok(Box::new(SystemClock::new())),
        }
    }
}

pub fn fixed_clock(hour: u32) -> Result<FixedClock, LoadError> {
    FixedClock::at_hour(hour).ok_or(LoadError::InvalidHour(hour))
}

/***************************************/
/*             Unit tests              */
/***************************************/
