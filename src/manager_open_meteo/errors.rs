use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenMeteoError {
    #[error("OpenMeteoError::Request: {0}")]
    Request(String),
    #[error("OpenMeteoError::Document: {0}")]
    Document(String),
}

impl From<ureq::Error> for OpenMeteoError {
    fn from(e: ureq::Error) -> Self {
        OpenMeteoError::Request(e.to_string())
    }
}
impl From<serde_json::Error> for OpenMeteoError {
    fn from(e: serde_json::Error) -> Self {
        OpenMeteoError::Document(e.to_string())
    }
}
