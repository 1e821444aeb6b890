use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration: where the city CSV files live and how each
/// city maps to its file. The mapping is fixed after load; nothing mutates
/// it at runtime.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_chicago_file")]
    pub chicago_file: String,
    #[serde(default = "default_new_york_city_file")]
    pub new_york_city_file: String,
    #[serde(default = "default_washington_file")]
    pub washington_file: String,
}

fn default_chicago_file() -> String {
    "chicago.csv".to_string()
}
fn default_new_york_city_file() -> String {
    "new_york_city.csv".to_string()
}
fn default_washington_file() -> String {
    "washington.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            chicago_file: default_chicago_file(),
            new_york_city_file: default_new_york_city_file(),
            washington_file: default_washington_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bikestats")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikestats.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolve the CSV file for a city against the data directory
    pub fn city_file(&self, city: City) -> PathBuf {
        let name = match city {
            City::Chicago => &self.chicago_file,
            City::NewYorkCity => &self.new_york_city_file,
            City::Washington => &self.washington_file,
        };
        PathBuf::from(&self.data_dir).join(name)
    }
}
