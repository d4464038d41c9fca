use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyWiseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No Gemini API key is configured")]
    MissingApiKey,

    #[error("StudyWiseError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for StudyWiseError {
    fn from(error: reqwest::Error) -> Self {
        StudyWiseError::Reqwest(Box::new(error))
    }
}
