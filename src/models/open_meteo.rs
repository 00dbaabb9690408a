use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Open-Meteo reports local times without seconds, e.g. "2025-06-01T20:31"
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const TIME_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Deserialize, Debug)]
pub struct WeatherHourly {
    #[serde(deserialize_with = "deserialize_times")]
    pub time: Vec<NaiveDateTime>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub visibility: Vec<Option<f64>>,
    #[serde(default)]
    pub cloud_cover_low: Vec<Option<f64>>,
    #[serde(default)]
    pub cloud_cover_mid: Vec<Option<f64>>,
    #[serde(default)]
    pub cloud_cover_high: Vec<Option<f64>>,
    #[serde(default)]
    pub cloud_cover: Vec<Option<f64>>,
    #[serde(default)]
    pub vapour_pressure_deficit: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug)]
pub struct WeatherDaily {
    pub time: Vec<NaiveDate>,
    #[serde(deserialize_with = "deserialize_times")]
    pub sunset: Vec<NaiveDateTime>,
}

#[derive(Deserialize, Debug)]
pub struct WeatherForecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    pub hourly: WeatherHourly,
    pub daily: WeatherDaily,
}

#[derive(Deserialize, Debug)]
pub struct AirQualityHourly {
    #[serde(deserialize_with = "deserialize_times")]
    pub time: Vec<NaiveDateTime>,
    #[serde(default)]
    pub pm10: Vec<Option<f64>>,
    #[serde(default)]
    pub pm2_5: Vec<Option<f64>>,
    #[serde(default)]
    pub aerosol_optical_depth: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug)]
pub struct AirQualityForecast {
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: AirQualityHourly,
}

/// Parses a local Open-Meteo time stamp, with or without seconds
///
/// # Arguments
///
/// * 'value' - the time stamp string
pub fn parse_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, TIME_FORMAT_SECONDS))
}

fn deserialize_times<'de, D>(deserializer: D) -> Result<Vec<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    raw.iter()
        .map(|s| parse_time(s).map_err(|e| <D::Error as serde::de::Error>::custom(format!("invalid time '{}': {}", s, e))))
        .collect()
}
