pub mod open_meteo;
pub mod prediction;
pub mod reading;
pub mod score;
