use std::fmt;
use std::fmt::Formatter;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use log::{debug, warn};
use crate::alignment::align;
use crate::errors::TimelineError;
use crate::models::open_meteo::{AirQualityForecast, WeatherForecast};
use crate::models::reading::{DayTimeline, HourlyReading};
use crate::models::score::{Rating, ScoreResult};
use crate::sunset_score::score_sunset;

/// Number of hourly values per calendar day in the Open-Meteo series
pub const HOURS_PER_DAY: usize = 24;

/// Where a sunset lies in relation to today
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Historical,
    Current,
    Forecast,
}

impl DataType {
    /// Classifies a sunset date against the given today date
    ///
    /// # Arguments
    ///
    /// * 'sunset_date' - date of the sunset
    /// * 'today' - the date to consider as today
    pub fn classify(sunset_date: NaiveDate, today: NaiveDate) -> DataType {
        if sunset_date < today {
            DataType::Historical
        } else if sunset_date == today {
            DataType::Current
        } else {
            DataType::Forecast
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DataType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let label = match self {
            DataType::Historical => "Historical",
            DataType::Current    => "Current",
            DataType::Forecast   => "Forecast",
        };
        f.pad(label)
    }
}

/// A scored sunset for one day
#[derive(Clone, Debug)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub sunset_time: NaiveDateTime,
    pub data_type: DataType,
    pub hour_index: usize,
    pub factors: HourlyReading,
    pub result: ScoreResult,
    pub rating: Rating,
}

/// Splits the fetched series into one DayTimeline per sunset.
///
/// Day `d` owns the hourly values at `[d*24, d*24+24)`. Missing or null values are read
/// as 0. A day where the weather series has no time stamps at all means the series are
/// misaligned with the daily sunsets and results in an error, as does an air quality
/// series whose first hour of a day differs from the weather series'. Air quality days
/// past the end of its series are not checked.
///
/// # Arguments
///
/// * 'weather' - the weather forecast including sunsets
/// * 'air_quality' - the air quality forecast sharing the weather series' hourly index
pub fn split_days(weather: &WeatherForecast, air_quality: &AirQualityForecast) -> Result<Vec<DayTimeline>, TimelineError> {
    let hourly_times = &weather.hourly.time;
    let mut days: Vec<DayTimeline> = Vec::with_capacity(weather.daily.sunset.len());

    for (day_idx, sunset) in weather.daily.sunset.iter().enumerate() {
        let date = weather.daily.time.get(day_idx).copied().unwrap_or(sunset.date());
        let day_start = day_idx * HOURS_PER_DAY;
        let day_end = (day_start + HOURS_PER_DAY).min(hourly_times.len());

        if day_start >= day_end {
            return Err(TimelineError::MissingHours(date));
        }

        if let Some(aq_start) = air_quality.hourly.time.get(day_start)
            && *aq_start != hourly_times[day_start] {
            return Err(TimelineError::MisalignedSeries(hourly_times[day_start], *aq_start));
        }

        let readings = (day_start..day_end)
            .map(|i| get_reading(weather, air_quality, i))
            .collect::<Vec<HourlyReading>>();

        days.push(DayTimeline {
            date,
            sunset: *sunset,
            hours: hourly_times[day_start..day_end].to_vec(),
            readings,
        });
    }

    Ok(days)
}

/// Scores the sunset of one day.
///
/// Returns the index (within the day) of the hour used, the sanitized reading for
/// that hour and the score result.
///
/// # Arguments
///
/// * 'day' - the day to score
pub fn score_day(day: &DayTimeline) -> (usize, HourlyReading, ScoreResult) {
    let index = align(&day.hours, day.sunset);
    if day.hours.get(index).is_none_or(|t| t.hour() != day.sunset.hour()) {
        warn!("no hourly value matches sunset {}, using hour index {}", day.sunset, index);
    }

    let raw = day.readings.get(index).copied().unwrap_or_default();
    let reading = raw.sanitized();
    if reading != raw {
        warn!("reading for {} out of range, clamped: {:?}", day.sunset, raw);
    }

    (index, reading, score_sunset(&reading))
}

/// Builds the scored sunset timeline, one entry per day
///
/// # Arguments
///
/// * 'weather' - the weather forecast including sunsets
/// * 'air_quality' - the air quality forecast
/// * 'today' - the date to consider as today when classifying entries
pub fn build_timeline(weather: &WeatherForecast, air_quality: &AirQualityForecast, today: NaiveDate)
    -> Result<Vec<TimelineEntry>, TimelineError> {

    let days = split_days(weather, air_quality)?;

    let entries = days
        .iter()
        .enumerate()
        .map(|(day_idx, day)| {
            let (index, factors, result) = score_day(day);
            let hour_index = day_idx * HOURS_PER_DAY + index;
            debug!("{} sunset {} -> hour index {}, score {:.1}", day.date, day.sunset.format("%H:%M"), hour_index, result.score);

            TimelineEntry {
                date: day.date,
                sunset_time: day.sunset,
                data_type: DataType::classify(day.sunset.date(), today),
                hour_index,
                factors,
                result,
                rating: Rating::from_score(result.score),
            }
        })
        .collect();

    Ok(entries)
}

fn get_reading(weather: &WeatherForecast, air_quality: &AirQualityForecast, index: usize) -> HourlyReading {
    let w = &weather.hourly;
    let a = &air_quality.hourly;

    HourlyReading {
        cloud_cover: value_at(&w.cloud_cover, index),
        cloud_low: value_at(&w.cloud_cover_low, index),
        cloud_mid: value_at(&w.cloud_cover_mid, index),
        cloud_high: value_at(&w.cloud_cover_high, index),
        humidity: value_at(&w.relative_humidity_2m, index),
        visibility: value_at(&w.visibility, index),
        vpd: value_at(&w.vapour_pressure_deficit, index),
        pm2_5: value_at(&a.pm2_5, index),
        pm10: value_at(&a.pm10, index),
        aod: value_at(&a.aerosol_optical_depth, index),
    }
}

fn value_at(series: &[Option<f64>], index: usize) -> f64 {
    series.get(index).copied().flatten().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use crate::models::open_meteo::{AirQualityHourly, WeatherDaily, WeatherHourly};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    fn hours(days: usize) -> Vec<NaiveDateTime> {
        let midnight = start().and_hms_opt(0, 0, 0).unwrap();
        (0..days * HOURS_PER_DAY).map(|h| midnight + TimeDelta::hours(h as i64)).collect()
    }

    fn series(len: usize, value: f64) -> Vec<Option<f64>> {
        vec![Some(value); len]
    }

    fn weather(days: usize, sunsets: Vec<NaiveDateTime>) -> WeatherForecast {
        let n = days * HOURS_PER_DAY;
        WeatherForecast {
            latitude: 37.34,
            longitude: -121.89,
            timezone: "America/Los_Angeles".to_string(),
            hourly: WeatherHourly {
                time: hours(days),
                relative_humidity_2m: series(n, 60.0),
                visibility: series(n, 20000.0),
                cloud_cover_low: series(n, 0.0),
                cloud_cover_mid: series(n, 30.0),
                cloud_cover_high: series(n, 40.0),
                cloud_cover: series(n, 50.0),
                vapour_pressure_deficit: series(n, 0.5),
            },
            daily: WeatherDaily {
                time: sunsets.iter().map(|s| s.date()).collect(),
                sunset: sunsets,
            },
        }
    }

    fn air_quality(days: usize) -> AirQualityForecast {
        let n = days * HOURS_PER_DAY;
        AirQualityForecast {
            latitude: 37.34,
            longitude: -121.89,
            hourly: AirQualityHourly {
                time: hours(days),
                pm10: series(n, 37.5),
                pm2_5: series(n, 15.0),
                aerosol_optical_depth: series(n, 0.3),
            },
        }
    }

    fn sunset(day: u64, hour: u32, minute: u32) -> NaiveDateTime {
        (start() + chrono::Days::new(day)).and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn classify_against_today() {
        let today = start();
        assert_eq!(DataType::classify(start().pred_opt().unwrap(), today), DataType::Historical);
        assert_eq!(DataType::classify(start(), today), DataType::Current);
        assert_eq!(DataType::classify(start().succ_opt().unwrap(), today), DataType::Forecast);
    }

    #[test]
    fn maps_each_day_to_its_sunset_hour() {
        let sunsets = vec![sunset(0, 18, 52), sunset(1, 18, 50), sunset(2, 17, 59)];
        let mut w = weather(3, sunsets);
        let aq = air_quality(3);

        // Make the sunset hour of day two stand out
        w.hourly.cloud_cover[HOURS_PER_DAY + 18] = Some(5.0);

        let entries = build_timeline(&w, &aq, start().succ_opt().unwrap()).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].hour_index, 18);
        assert_eq!(entries[1].hour_index, 42);
        assert_eq!(entries[2].hour_index, 65);
        assert_eq!(entries[1].factors.cloud_cover, 5.0);
        assert_eq!(entries[1].result.cloud_ceiling, 30.0);
        assert_eq!(entries[0].data_type, DataType::Historical);
        assert_eq!(entries[1].data_type, DataType::Current);
        assert_eq!(entries[2].data_type, DataType::Forecast);
    }

    #[test]
    fn scores_match_direct_scoring() {
        let w = weather(1, vec![sunset(0, 19, 5)]);
        let aq = air_quality(1);

        let entries = build_timeline(&w, &aq, start()).unwrap();
        let expected = score_sunset(&entries[0].factors);

        assert_eq!(entries[0].result, expected);
        assert_eq!(entries[0].rating, Rating::from_score(expected.score));
        assert_eq!(entries[0].factors.vpd, 0.5);
    }

    #[test]
    fn nulls_and_short_series_read_as_zero() {
        let mut w = weather(2, vec![sunset(0, 18, 30), sunset(1, 18, 30)]);
        let mut aq = air_quality(2);
        w.hourly.relative_humidity_2m[18] = None;
        aq.hourly.aerosol_optical_depth.truncate(HOURS_PER_DAY);

        let entries = build_timeline(&w, &aq, start()).unwrap();

        assert_eq!(entries[0].factors.humidity, 0.0);
        assert_eq!(entries[0].factors.aod, 0.3);
        assert_eq!(entries[1].factors.aod, 0.0);
        assert_eq!(entries[1].result.aod_score, 30.0);
    }

    #[test]
    fn falls_back_to_last_hour_of_short_day() {
        let mut w = weather(2, vec![sunset(0, 18, 30), sunset(1, 21, 10)]);
        w.hourly.time.truncate(HOURS_PER_DAY + 20);
        let aq = air_quality(2);

        let days = split_days(&w, &aq).unwrap();
        assert_eq!(days[1].hours.len(), 20);

        let (index, _, _) = score_day(&days[1]);
        assert_eq!(index, 19);
        assert_eq!(days[1].hours[index].hour(), 19);
    }

    #[test]
    fn missing_day_is_an_error() {
        let mut w = weather(2, vec![sunset(0, 18, 30), sunset(1, 18, 30)]);
        w.hourly.time.truncate(HOURS_PER_DAY);
        let aq = air_quality(2);

        match build_timeline(&w, &aq, start()) {
            Err(TimelineError::MissingHours(date)) => assert_eq!(date, start().succ_opt().unwrap()),
            other => panic!("expected missing hours error, got {:?}", other.map(|e| e.len())),
        }
    }

    #[test]
    fn shifted_air_quality_series_is_an_error() {
        let w = weather(2, vec![sunset(0, 18, 30), sunset(1, 18, 30)]);
        let mut aq = air_quality(2);
        aq.hourly.time = aq.hourly.time.iter().map(|t| *t + TimeDelta::hours(1)).collect();

        match build_timeline(&w, &aq, start()) {
            Err(TimelineError::MisalignedSeries(weather_hour, aq_hour)) => {
                assert_eq!(weather_hour, start().and_hms_opt(0, 0, 0).unwrap());
                assert_eq!(aq_hour, start().and_hms_opt(1, 0, 0).unwrap());
            }
            other => panic!("expected misaligned series error, got {:?}", other.map(|e| e.len())),
        }
    }

    #[test]
    fn air_quality_ending_early_reads_as_zero() {
        let w = weather(2, vec![sunset(0, 18, 30), sunset(1, 18, 30)]);
        let mut aq = air_quality(2);
        aq.hourly.time.truncate(HOURS_PER_DAY);
        aq.hourly.pm2_5.truncate(HOURS_PER_DAY);

        let entries = build_timeline(&w, &aq, start()).unwrap();

        assert_eq!(entries[0].factors.pm2_5, 15.0);
        assert_eq!(entries[1].factors.pm2_5, 0.0);
    }

    #[test]
    fn out_of_range_values_are_clamped_before_scoring() {
        let mut w = weather(1, vec![sunset(0, 18, 30)]);
        let mut aq = air_quality(1);
        w.hourly.cloud_cover[18] = Some(140.0);
        aq.hourly.pm2_5[18] = Some(-4.0);

        let entries = build_timeline(&w, &aq, start()).unwrap();

        assert_eq!(entries[0].factors.cloud_cover, 100.0);
        assert_eq!(entries[0].factors.pm2_5, 0.0);
        assert_eq!(entries[0].result.size_score, 50.0);
    }
}
