use vsm_http::HttpError;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Invalid response: {0}")]
    Parse(#[from] serde_json::Error),
}
