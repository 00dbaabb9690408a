use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::{error, info};
use crate::config::{load_config, Config};
use crate::logging::setup_logger;
use crate::manager_open_meteo::OpenMeteo;
use crate::models::prediction::Prediction;
use crate::report::{format_detail, format_timeline};
use crate::store::save_predictions;
use crate::timeline::{build_timeline, DataType, TimelineEntry};

mod alignment;
mod config;
mod errors;
mod logging;
mod manager_open_meteo;
mod models;
mod report;
mod store;
mod sunset_score;
mod timeline;

/// Predict sunset quality for a location
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, env = "SUNSET_CONFIG", default_value = "config.toml")]
    config: String,

    /// Latitude, overrides the configuration
    #[arg(long, visible_alias = "latitude", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude, overrides the configuration
    #[arg(long, visible_aliases = ["lng", "longitude"], allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Location name for display purposes
    #[arg(long)]
    location: Option<String>,

    /// Number of historical days to fetch (max 92)
    #[arg(long)]
    past_days: Option<u32>,

    /// Number of forecast days to fetch (max 16)
    #[arg(long)]
    forecast_days: Option<u32>,

    /// Skip storing predictions (just print results)
    #[arg(long)]
    skip_db: bool,

    /// Only score today's sunset and print a detailed view
    #[arg(long)]
    today: bool,
}

impl Cli {
    /// Applies command line overrides to the loaded configuration
    ///
    /// # Arguments
    ///
    /// * 'config' - configuration to update
    fn apply(&self, config: &mut Config) {
        if let Some(lat) = self.lat {
            config.geo_ref.lat = lat;
        }
        if let Some(long) = self.lon {
            config.geo_ref.long = long;
        }
        if let Some(location) = &self.location {
            config.geo_ref.location = location.clone();
        }
        if let Some(past_days) = self.past_days {
            config.timeline.past_days = past_days;
        }
        if let Some(forecast_days) = self.forecast_days {
            config.timeline.forecast_days = forecast_days;
        }
        if self.today {
            config.timeline.past_days = 0;
            config.timeline.forecast_days = 1;
        }
        if self.skip_db {
            config.general.skip_store = true;
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli.config)?;
    cli.apply(&mut config);
    config.validate()?;

    setup_logger(&config.general)?;
    info!("sunset_predictor version: {}", env!("CARGO_PKG_VERSION"));

    let open_meteo = OpenMeteo::new(config.geo_ref.lat, config.geo_ref.long);
    let (weather, air_quality) = open_meteo.get_timeline_data(config.timeline.past_days, config.timeline.forecast_days)?;

    let today = Local::now().date_naive();
    let entries = build_timeline(&weather, &air_quality, today)?;

    if cli.today {
        match entries.iter().find(|e| e.data_type == DataType::Current).or(entries.first()) {
            Some(entry) => print!("{}", format_detail(entry, &config.geo_ref.location, config.geo_ref.lat, config.geo_ref.long)),
            None => println!("No sunset found for {}", today),
        }
    } else {
        print!("{}", format_timeline(&entries, &config.geo_ref.location));
    }

    if !config.general.skip_store {
        let predictions = to_predictions(&entries, config.geo_ref.lat, config.geo_ref.long);
        match save_predictions(&config.files.store_dir, &predictions) {
            Ok(added) => println!("Stored {} new predictions ({} already stored)", added, predictions.len() - added),
            Err(e) => {
                error!("storing predictions failed: {}", e);
                println!("Storing predictions failed: {}", e);
                println!("(Use --skip-db to skip storing predictions)");
            }
        }
    }

    Ok(())
}

/// Transforms timeline entries into predictions ready for storing
///
/// # Arguments
///
/// * 'entries' - the scored timeline
/// * 'lat' - latitude of the location
/// * 'long' - longitude of the location
fn to_predictions(entries: &[TimelineEntry], lat: f64, long: f64) -> Vec<Prediction> {
    let timestamp = Local::now();

    entries
        .iter()
        .map(|e| Prediction {
            timestamp,
            latitude: lat,
            longitude: long,
            sunset_time: e.sunset_time,
            factors: e.factors,
            predicted_score: e.result.score,
        })
        .collect()
}
