use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One hour's atmospheric snapshot as used by the scorer
///
/// Missing values from the data providers are represented as 0.0. The `vpd` value is
/// carried along for storage and reporting but doesn't take part in the score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct HourlyReading {
    pub cloud_cover: f64,
    pub cloud_low: f64,
    pub cloud_mid: f64,
    pub cloud_high: f64,
    pub humidity: f64,
    pub visibility: f64,
    pub vpd: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub aod: f64,
}

impl HourlyReading {
    /// Returns a copy where every value is forced into its stated domain.
    ///
    /// Non-finite values become 0, negative values become 0 and percentages are capped at 100.
    /// This is applied where readings enter the system so that the scoring formula itself
    /// never has to deal with out of range input.
    pub fn sanitized(&self) -> HourlyReading {
        HourlyReading {
            cloud_cover: percent(self.cloud_cover),
            cloud_low: percent(self.cloud_low),
            cloud_mid: percent(self.cloud_mid),
            cloud_high: percent(self.cloud_high),
            humidity: percent(self.humidity),
            visibility: non_negative(self.visibility),
            vpd: non_negative(self.vpd),
            pm2_5: non_negative(self.pm2_5),
            pm10: non_negative(self.pm10),
            aod: non_negative(self.aod),
        }
    }
}

/// One calendar day of hourly data together with the sunset time of that day
///
/// `hours` and `readings` are index aligned, normally with 24 entries each starting at
/// local midnight.
#[derive(Clone, Debug)]
pub struct DayTimeline {
    pub date: NaiveDate,
    pub sunset: NaiveDateTime,
    pub hours: Vec<NaiveDateTime>,
    pub readings: Vec<HourlyReading>,
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn percent(value: f64) -> f64 {
    non_negative(value).min(100.0)
}
