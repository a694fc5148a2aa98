/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub n_elevators: u8,
    pub capacity: usize,
    #[serde(default = "default_start_floor")]
    pub start_floor: u8,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub max_ticks: Option<u64>,
    #[serde(default)]
    pub json_output: bool,
    #[serde(default)]
    pub initial_requests: Vec<RequestConfig>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestConfig {
    pub origin: u8,
    pub destination: u8,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
}

fn default_start_floor() -> u8 {
    1
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_passengers() -> u32 {
    1
}

impl Default for BuildingConfig {
    fn default() -> BuildingConfig {
        BuildingConfig {
            n_floors: 10,
            n_elevators: 3,
            capacity: 8,
            start_floor: default_start_floor(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: None,
            json_output: false,
            initial_requests: Vec::new(),
        }
    }
}

impl Default for Config {
    // Same building and seed traffic as the shipped config.toml
    fn default() -> Config {
        let seed = |origin, destination, passengers| RequestConfig {
            origin,
            destination,
            passengers,
        };

        Config {
            building: BuildingConfig::default(),
            simulation: SimulationConfig {
                initial_requests: vec![seed(1, 5, 2), seed(3, 8, 1), seed(7, 2, 3)],
                ..SimulationConfig::default()
            },
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
