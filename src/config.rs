use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

/// Max number of historical days Open-Meteo serves in one request
pub const MAX_PAST_DAYS: u32 = 92;

/// Max number of forecast days Open-Meteo serves in one request
pub const MAX_FORECAST_DAYS: u32 = 16;

#[derive(Deserialize)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
    pub location: String,
}

#[derive(Deserialize)]
pub struct Timeline {
    pub past_days: u32,
    pub forecast_days: u32,
}

#[derive(Deserialize)]
pub struct Files {
    pub store_dir: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
    #[serde(default)]
    pub skip_store: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub timeline: Timeline,
    pub files: Files,
    pub general: General,
}

impl Config {
    /// Checks that location and day range are within what Open-Meteo accepts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.geo_ref.lat) {
            return Err(ConfigError(format!("latitude {} out of range", self.geo_ref.lat)));
        }
        if !(-180.0..=180.0).contains(&self.geo_ref.long) {
            return Err(ConfigError(format!("longitude {} out of range", self.geo_ref.long)));
        }
        if self.timeline.past_days > MAX_PAST_DAYS {
            return Err(ConfigError(format!("past_days {} exceeds max {}", self.timeline.past_days, MAX_PAST_DAYS)));
        }
        if self.timeline.forecast_days == 0 || self.timeline.forecast_days > MAX_FORECAST_DAYS {
            return Err(ConfigError(format!("forecast_days must be 1-{}, got {}", MAX_FORECAST_DAYS, self.timeline.forecast_days)));
        }

        Ok(())
    }
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let config = parse_config(&toml)?;

    Ok(config)
}

/// Parses and validates a configuration document
///
/// # Arguments
///
/// * 'toml' - the configuration as a toml string
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [geo_ref]
        lat = 37.3394
        long = -121.895
        location = "San Jose, CA"

        [timeline]
        past_days = 7
        forecast_days = 3

        [files]
        store_dir = "/var/lib/sunset_predictor/"

        [general]
        log_path = "/var/log/sunset_predictor/sunset.log"
        log_level = "info"
        log_to_stdout = false
    "#;

    #[test]
    fn parses_full_config() {
        let config = parse_config(CONFIG).unwrap();

        assert_eq!(config.geo_ref.lat, 37.3394);
        assert_eq!(config.geo_ref.long, -121.895);
        assert_eq!(config.geo_ref.location, "San Jose, CA");
        assert_eq!(config.timeline.past_days, 7);
        assert_eq!(config.timeline.forecast_days, 3);
        assert_eq!(config.files.store_dir, "/var/lib/sunset_predictor/");
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(!config.general.log_to_stdout);
        assert!(!config.general.skip_store);
    }

    #[test]
    fn rejects_day_range_outside_api_limits() {
        let too_many = CONFIG.replace("forecast_days = 3", "forecast_days = 17");
        assert!(parse_config(&too_many).is_err());

        let none = CONFIG.replace("forecast_days = 3", "forecast_days = 0");
        assert!(parse_config(&none).is_err());

        let history = CONFIG.replace("past_days = 7", "past_days = 93");
        assert!(parse_config(&history).is_err());
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let lat = CONFIG.replace("lat = 37.3394", "lat = 91.0");
        assert!(parse_config(&lat).is_err());

        let long = CONFIG.replace("long = -121.895", "long = -181.0");
        assert!(parse_config(&long).is_err());
    }

    #[test]
    fn missing_section_is_an_error() {
        let partial = CONFIG.replace("[files]", "[unused]");
        match parse_config(&partial) {
            Err(e) => assert!(e.to_string().starts_with("ConfigError:")),
            Ok(_) => panic!("expected error for missing [files]"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config("/nonexistent/sunset_predictor/config.toml").is_err());
    }
}
