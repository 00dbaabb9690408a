use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::models::reading::HourlyReading;

/// A stored sunset prediction for one location and sunset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub timestamp: DateTime<Local>,
    pub latitude: f64,
    pub longitude: f64,
    pub sunset_time: NaiveDateTime,
    #[serde(flatten)]
    pub factors: HourlyReading,
    pub predicted_score: f64,
}

impl Prediction {
    /// Returns true if both predictions concern the same location and sunset
    ///
    /// # Arguments
    ///
    /// * 'other' - prediction to compare with
    pub fn same_sunset(&self, other: &Prediction) -> bool {
        self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.sunset_time == other.sunset_time
    }
}
