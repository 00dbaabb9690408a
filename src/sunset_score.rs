use crate::models::reading::HourlyReading;
use crate::models::score::ScoreResult;

/// Ideal total cloud cover in percent and the spread around it
const CLOUD_COVER_IDEAL: f64 = 50.0;
const CLOUD_COVER_SIGMA: f64 = 20.0;

/// Divisor applied to the cloud quality before the sigmoid
const CLOUD_QUALITY_SCALE: f64 = 20.0;

/// Ideal PM2.5 concentration in µg/m³ and the spread around it
const PM2_5_IDEAL: f64 = 15.0;
const PM2_5_SIGMA: f64 = 35.0;

/// Ideal aerosol optical depth and the spread around it
const AOD_IDEAL: f64 = 0.3;
const AOD_SIGMA: f64 = 0.4;

/// Below this AOD there are too few aerosols to scatter any colour
const AOD_MIN: f64 = 0.05;
const AOD_TOO_CLEAN_SCORE: f64 = 30.0;

/// PM10/PM2.5 range indicating a favourable mix of coarse and fine particles
const SIZE_RATIO_RANGE: (f64, f64) = (2.0, 3.5);
const SIZE_SCORE_FAVOURABLE: f64 = 100.0;
const SIZE_SCORE_UNFAVOURABLE: f64 = 70.0;
const SIZE_SCORE_UNKNOWN: f64 = 50.0;

/// Ideal relative humidity in percent and the spread around it
const HUMIDITY_IDEAL: f64 = 60.0;
const HUMIDITY_SIGMA: f64 = 20.0;

/// Visibility in meters below which haze is penalized linearly, and where the score saturates
const VISIBILITY_HAZE: f64 = 5000.0;
const VISIBILITY_FULL: f64 = 10000.0;

/// Component weights in the base score
const CLOUD_WEIGHT: f64 = 0.40;
const PARTICLE_WEIGHT: f64 = 0.30;
const VISIBILITY_WEIGHT: f64 = 0.20;
const HUMIDITY_WEIGHT: f64 = 0.10;

/// Particle sub-factor weights
const PM_WEIGHT: f64 = 0.5;
const AOD_WEIGHT: f64 = 0.4;
const SIZE_WEIGHT: f64 = 0.1;

const NO_CEILING: f64 = 100.0;

/// Returns a factor between 0 and 1 telling how close a value is to its optimum
///
/// # Arguments
///
/// * 'distance' - distance from the optimal value
/// * 'sigma' - spread of the bell curve
pub fn gaussian_score(distance: f64, sigma: f64) -> f64 {
    (-(distance * distance) / (2.0 * sigma * sigma)).exp()
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Scores the sunset quality for the given atmospheric reading.
///
/// The score is a weighted blend of cloud, particle, visibility and humidity component
/// scores (each 0-100). The blend is then capped by hard ceilings: with too few clouds or
/// too much pollution no combination of the other factors can give a good sunset.
///
/// The reading is expected to already be within its domains, see `HourlyReading::sanitized`.
///
/// # Arguments
///
/// * 'reading' - atmospheric conditions at the sunset hour
pub fn score_sunset(reading: &HourlyReading) -> ScoreResult {
    // Clouds, coverage and type
    let cloud_coverage_score =
        gaussian_score((reading.cloud_cover - CLOUD_COVER_IDEAL).abs(), CLOUD_COVER_SIGMA) * 100.0;
    let cloud_quality = (reading.cloud_mid + reading.cloud_high) / 2.0 - reading.cloud_low;
    let cloud_type_score = sigmoid(cloud_quality / CLOUD_QUALITY_SCALE) * 100.0;
    let cloud_score = (cloud_coverage_score + cloud_type_score) / 2.0;

    // Particles, PM2.5, AOD and size ratio
    let pm_score = gaussian_score((reading.pm2_5 - PM2_5_IDEAL).abs(), PM2_5_SIGMA) * 100.0;
    let aod_score = if reading.aod < AOD_MIN {
        AOD_TOO_CLEAN_SCORE
    } else {
        gaussian_score((reading.aod - AOD_IDEAL).abs(), AOD_SIGMA) * 100.0
    };
    let size_score = get_size_score(reading.pm2_5, reading.pm10);
    let particle_score = pm_score * PM_WEIGHT
        + aod_score * AOD_WEIGHT
        + size_score * SIZE_WEIGHT;

    let humidity_score =
        gaussian_score((reading.humidity - HUMIDITY_IDEAL).abs(), HUMIDITY_SIGMA) * 100.0;
    let visibility_score = get_visibility_score(reading.visibility);

    let base_score = cloud_score * CLOUD_WEIGHT
        + particle_score * PARTICLE_WEIGHT
        + visibility_score * VISIBILITY_WEIGHT
        + humidity_score * HUMIDITY_WEIGHT;

    let cloud_ceiling = get_cloud_ceiling(reading.cloud_cover);
    let particle_ceiling = get_particle_ceiling(reading.pm2_5, reading.aod);
    let ceiling = cloud_ceiling.min(particle_ceiling);

    let score = base_score.min(ceiling).clamp(0.0, 100.0);

    ScoreResult {
        score,
        cloud_coverage_score,
        cloud_type_score,
        cloud_score,
        pm_score,
        aod_score,
        size_score,
        particle_score,
        humidity_score,
        visibility_score,
        base_score,
        cloud_ceiling,
        particle_ceiling,
        ceiling,
    }
}

/// Scores the mix of coarse and fine particles
///
/// # Arguments
///
/// * 'pm2_5' - fine particles in µg/m³
/// * 'pm10' - coarse particles in µg/m³
fn get_size_score(pm2_5: f64, pm10: f64) -> f64 {
    if pm2_5 > 0.0 {
        let ratio = pm10 / pm2_5;
        if ratio >= SIZE_RATIO_RANGE.0 && ratio <= SIZE_RATIO_RANGE.1 {
            SIZE_SCORE_FAVOURABLE
        } else {
            SIZE_SCORE_UNFAVOURABLE
        }
    } else {
        SIZE_SCORE_UNKNOWN
    }
}

fn get_visibility_score(visibility: f64) -> f64 {
    if visibility < VISIBILITY_HAZE {
        visibility / VISIBILITY_HAZE * 100.0
    } else {
        (visibility / VISIBILITY_FULL * 100.0).min(100.0)
    }
}

fn get_cloud_ceiling(cloud_cover: f64) -> f64 {
    if cloud_cover < 10.0 {
        30.0
    } else if cloud_cover < 25.0 {
        50.0
    } else {
        NO_CEILING
    }
}

fn get_particle_ceiling(pm2_5: f64, aod: f64) -> f64 {
    if pm2_5 > 75.0 || aod > 1.5 {
        40.0
    } else if pm2_5 > 55.0 || aod > 1.0 {
        60.0
    } else {
        NO_CEILING
    }
}
