use std::fs;
use std::path::{Path, PathBuf};
use log::info;
use crate::errors::StoreError;
use crate::models::prediction::Prediction;

const PREDICTIONS_FILE: &str = "predictions.json";

/// Saves predictions to the store, skipping any prediction already stored for the same
/// location and sunset. Returns the number of predictions actually added.
///
/// # Arguments
///
/// * 'store_dir' - the directory holding the predictions file
/// * 'predictions' - predictions to save
pub fn save_predictions(store_dir: &str, predictions: &[Prediction]) -> Result<usize, StoreError> {
    let mut stored = load_predictions(store_dir)?;
    let before = stored.len();

    for prediction in predictions {
        if !stored.iter().any(|p| p.same_sunset(prediction)) {
            stored.push(prediction.clone());
        }
    }

    let added = stored.len() - before;
    if added > 0 {
        fs::create_dir_all(store_dir)?;
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(predictions_path(store_dir), json)?;
    }
    info!("stored {} of {} predictions in {}", added, predictions.len(), store_dir);

    Ok(added)
}

/// Loads all stored predictions, an empty vector is returned if nothing has been stored yet
///
/// # Arguments
///
/// * 'store_dir' - the directory holding the predictions file
pub fn load_predictions(store_dir: &str) -> Result<Vec<Prediction>, StoreError> {
    let file_path = predictions_path(store_dir);

    if file_path.exists() {
        let json = fs::read_to_string(file_path)?;
        let predictions: Vec<Prediction> = serde_json::from_str(&json)?;
        Ok(predictions)
    } else {
        Ok(Vec::new())
    }
}

fn predictions_path(store_dir: &str) -> PathBuf {
    Path::new(store_dir).join(PREDICTIONS_FILE)
}
