use std::fmt;
use std::fmt::Formatter;

/// Result of scoring one hourly reading
///
/// `score` is the final value, the other fields are the intermediate component scores
/// and ceilings the final value was derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub cloud_coverage_score: f64,
    pub cloud_type_score: f64,
    pub cloud_score: f64,
    pub pm_score: f64,
    pub aod_score: f64,
    pub size_score: f64,
    pub particle_score: f64,
    pub humidity_score: f64,
    pub visibility_score: f64,
    pub base_score: f64,
    pub cloud_ceiling: f64,
    pub particle_ceiling: f64,
    pub ceiling: f64,
}

/// Categorical label for a sunset score, buckets are 20 points wide
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Great,
    Amazing,
}

const RATINGS: [Rating; 5] = [Rating::Poor, Rating::Fair, Rating::Good, Rating::Great, Rating::Amazing];

impl Rating {
    /// Returns the rating bucket for a score
    ///
    /// A score of exactly 100 belongs to the last bucket. Negative and NaN scores are
    /// treated as Poor.
    ///
    /// # Arguments
    ///
    /// * 'score' - the sunset score (0-100)
    pub fn from_score(score: f64) -> Rating {
        if score.is_nan() || score <= 0.0 {
            return Rating::Poor;
        }
        let bucket = (score / 20.0).floor() as usize;

        RATINGS[bucket.min(RATINGS.len() - 1)]
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Rating {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let label = match self {
            Rating::Poor    => "Poor",
            Rating::Fair    => "Fair",
            Rating::Good    => "Good",
            Rating::Great   => "Great",
            Rating::Amazing => "Amazing",
        };
        f.pad(label)
    }
}
