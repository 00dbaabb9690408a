pub mod errors;

use std::time::Duration;
use log::info;
use ureq::Agent;
use crate::manager_open_meteo::errors::OpenMeteoError;
use crate::models::open_meteo::{AirQualityForecast, WeatherForecast};

const WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

const WEATHER_HOURLY: &str = "relative_humidity_2m,visibility,cloud_cover_low,cloud_cover_mid,\
cloud_cover_high,cloud_cover,vapour_pressure_deficit";
const AIR_QUALITY_HOURLY: &str = "pm10,pm2_5,dust,aerosol_optical_depth";

/// The air quality API serves fewer forecast days than the weather API, days beyond
/// this are left out of the air quality series and read as missing
const MAX_AIR_QUALITY_FORECAST_DAYS: u32 = 7;

/// Struct for fetching weather and air quality series from Open-Meteo
pub struct OpenMeteo {
    agent: Agent,
    lat: f64,
    long: f64,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching data for the given point
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude for the point to get data for
    /// * 'long' - longitude for the point to get data for
    pub fn new(lat: f64, long: f64) -> OpenMeteo {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self { agent, lat, long }
    }

    /// Retrieves weather and air quality data covering a range of days around today.
    ///
    /// Both series are requested with the same start day and `timezone=auto`, so they share
    /// the same hourly index and start at local midnight of the first day. The air quality
    /// series stops after at most 7 forecast days. The whole range costs exactly two
    /// requests regardless of the number of days.
    ///
    /// # Arguments
    ///
    /// * 'past_days' - number of historical days to include before today
    /// * 'forecast_days' - number of days to include from today and forward
    pub fn get_timeline_data(&self, past_days: u32, forecast_days: u32)
        -> Result<(WeatherForecast, AirQualityForecast), OpenMeteoError> {

        info!("fetching {} days historical + {} days forecast for ({}, {})",
              past_days, forecast_days, self.lat, self.long);

        let json = self.get(&self.weather_url(past_days, forecast_days))?;
        let weather: WeatherForecast = serde_json::from_str(&json)?;

        let json = self.get(&self.air_quality_url(past_days, forecast_days))?;
        let air_quality: AirQualityForecast = serde_json::from_str(&json)?;

        info!("received {} hourly weather values for ({}, {}) in {} with {} sunsets",
              weather.hourly.time.len(), weather.latitude, weather.longitude,
              weather.timezone, weather.daily.sunset.len());
        info!("received {} hourly air quality values for ({}, {})",
              air_quality.hourly.time.len(), air_quality.latitude, air_quality.longitude);

        Ok((weather, air_quality))
    }

    fn get(&self, url: &str) -> Result<String, OpenMeteoError> {
        let json = self.agent
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?;

        Ok(json)
    }

    fn weather_url(&self, past_days: u32, forecast_days: u32) -> String {
        format!("{}?latitude={}&longitude={}&daily=sunrise,sunset&hourly={}&timezone=auto&past_days={}&forecast_days={}",
                WEATHER_URL, self.lat, self.long, WEATHER_HOURLY, past_days, forecast_days)
    }

    fn air_quality_url(&self, past_days: u32, forecast_days: u32) -> String {
        format!("{}?latitude={}&longitude={}&hourly={}&timezone=auto&past_days={}&forecast_days={}",
                AIR_QUALITY_URL, self.lat, self.long, AIR_QUALITY_HOURLY, past_days,
                forecast_days.min(MAX_AIR_QUALITY_FORECAST_DAYS))
    }
}
