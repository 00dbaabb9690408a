use chrono::{NaiveDateTime, Timelike};

/// Returns the index of the hourly sample that represents the sunset.
///
/// The first entry in `day_hours` with the same hour of day as `sunset` is selected, minutes
/// are not considered. If no entry matches, the last index of the slice is returned, which
/// for an empty slice is 0.
///
/// The function knows nothing about days, the caller is responsible for handing over the
/// slice of hourly time stamps belonging to the sunset's day.
///
/// # Arguments
///
/// * 'day_hours' - hourly time stamps for one day, in order
/// * 'sunset' - the sunset time of that day
pub fn align(day_hours: &[NaiveDateTime], sunset: NaiveDateTime) -> usize {
    let sunset_hour = sunset.hour();

    day_hours
        .iter()
        .position(|t| t.hour() == sunset_hour)
        .unwrap_or(day_hours.len().saturating_sub(1))
}
