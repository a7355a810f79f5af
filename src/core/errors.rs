use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatFinderError {
    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: reqwest::StatusCode, url: String },

    #[error("the CAT_API_KEY environment variable is not set or empty")]
    MissingApiKey,

    #[error("no cat with id {0} in the session history")]
    UnknownCat(String),

    #[error("CatFinderError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for CatFinderError {
    fn from(error: reqwest::Error) -> Self {
        CatFinderError::Reqwest(Box::new(error))
    }
}
