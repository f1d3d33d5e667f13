use thiserror::Error;

/// Failures surfaced by the storage provider or by the client talking to it.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The service answered with an S3 `<Error>` document
    #[error("{code}: {message} (HTTP {status})")]
    Service {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Rejected by the client before any request was sent
    #[error("Parameter validation failed: invalid bucket name {bucket:?}: {reason}")]
    ParamValidation { bucket: String, reason: String },

    /// The provider answered with a status this client does not treat as success
    #[error("unexpected HTTP status code: {0}")]
    UnexpectedStatus(u16),

    #[error("unable to build request: {0}")]
    Request(String),

    #[error("unable to parse response: {0}")]
    Response(#[from] quick_xml::DeError),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ProviderError {
    /// S3 error code, `BucketAlreadyExists`, `InvalidBucketName`, ...
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}
