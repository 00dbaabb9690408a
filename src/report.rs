use std::fmt::Write;
use crate::timeline::TimelineEntry;

const WIDTH: usize = 80;

/// Formats the timeline as a console table, one row per day
///
/// # Arguments
///
/// * 'entries' - the scored timeline
/// * 'location' - location name for the caption
pub fn format_timeline(entries: &[TimelineEntry], location: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{:=<WIDTH$}", "");
    let _ = writeln!(out, "Sunset Quality Timeline: {}", location);
    let _ = writeln!(out, "{:=<WIDTH$}", "");
    let _ = writeln!(out, "{:<12} {:<12} {:<8} {:<6} {:<8} {:<7} {:<7} {}",
                     "Date", "Type", "Sunset", "Score", "Rating", "Clouds", "PM2.5", "Vis(km)");
    let _ = writeln!(out, "{:-<WIDTH$}", "");

    for entry in entries {
        let _ = writeln!(out, "{:<12} {:<12} {:<8} {:>5.1} {:<8} {:>6.1}% {:>6.1} {:>7.1}",
                         entry.date.format("%Y-%m-%d").to_string(),
                         entry.data_type,
                         entry.sunset_time.format("%H:%M").to_string(),
                         entry.result.score,
                         entry.rating,
                         entry.factors.cloud_cover,
                         entry.factors.pm2_5,
                         entry.factors.visibility / 1000.0);
    }

    let _ = writeln!(out, "{:=<WIDTH$}", "");

    out
}

/// Formats a detailed view of a single day's sunset
///
/// # Arguments
///
/// * 'entry' - the scored day
/// * 'location' - location name
/// * 'lat' - latitude of the location
/// * 'long' - longitude of the location
pub fn format_detail(entry: &TimelineEntry, location: &str, lat: f64, long: f64) -> String {
    let f = &entry.factors;
    let r = &entry.result;

    format!("Location: {} ({}, {})\n\
             Sunset at {}\n\
             Cloud cover: {}% (low {}%, mid {}%, high {}%)\n\
             Humidity: {}%\n\
             Visibility: {}m\n\
             VPD: {} kPa\n\
             PM2.5: {} µg/m³\n\
             PM10: {} µg/m³\n\
             AOD: {}\n\
             Components: cloud {:.1}, particle {:.1}, visibility {:.1}, humidity {:.1}, ceiling {}\n\
             Sunset Quality Score: {:.1}/100\n\
             Rating: {}\n",
            location, lat, long,
            entry.sunset_time.format("%H:%M"),
            f.cloud_cover, f.cloud_low, f.cloud_mid, f.cloud_high,
            f.humidity,
            f.visibility,
            f.vpd,
            f.pm2_5,
            f.pm10,
            f.aod,
            r.cloud_score, r.particle_score, r.visibility_score, r.humidity_score, r.ceiling,
            r.score,
            entry.rating)
}
