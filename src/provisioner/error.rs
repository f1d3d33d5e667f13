use crate::s3::ProviderError;
use std::io;
use thiserror::Error;

/// Failure categories reported to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyOwnedByCaller,
    AlreadyExists,
    InvalidName,
    InvalidCharacters,
    Unclassified,
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("{name} already owned by you")]
    AlreadyOwnedByCaller {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("{name} already exists")]
    AlreadyExists {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("`{name}` is not a valid bucket name")]
    InvalidName {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("`{name}` contains invalid characters")]
    InvalidCharacters {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error(transparent)]
    Unclassified(#[from] ProviderError),

    #[error("console I/O failed")]
    Console(#[from] io::Error),
}

impl ProvisionError {
    /// Sort a provider failure for bucket `name` into the operator facing categories
    #[must_use]
    pub fn classify(name: &str, source: ProviderError) -> Self {
        let name = name.to_string();
        match kind_of(&source) {
            ErrorKind::AlreadyOwnedByCaller => Self::AlreadyOwnedByCaller { name, source },
            ErrorKind::AlreadyExists => Self::AlreadyExists { name, source },
            ErrorKind::InvalidName => Self::InvalidName { name, source },
            ErrorKind::InvalidCharacters => Self::InvalidCharacters { name, source },
            ErrorKind::Unclassified => Self::Unclassified(source),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyOwnedByCaller { .. } => ErrorKind::AlreadyOwnedByCaller,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::InvalidName { .. } => ErrorKind::InvalidName,
            Self::InvalidCharacters { .. } => ErrorKind::InvalidCharacters,
            Self::Unclassified(_) | Self::Console(_) => ErrorKind::Unclassified,
        }
    }

    /// The underlying provider error, if any
    #[must_use]
    pub const fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::AlreadyOwnedByCaller { source, .. }
            | Self::AlreadyExists { source, .. }
            | Self::InvalidName { source, .. }
            | Self::InvalidCharacters { source, .. }
            | Self::Unclassified(source) => Some(source),
            Self::Console(_) => None,
        }
    }
}

fn kind_of(error: &ProviderError) -> ErrorKind {
    match error {
        ProviderError::Service { code, .. } if code == "BucketAlreadyOwnedByYou" => {
            ErrorKind::AlreadyOwnedByCaller
        }
        ProviderError::Service { code, .. } if code == "BucketAlreadyExists" => {
            ErrorKind::AlreadyExists
        }
        ProviderError::Service { code, message, .. }
            if code == "InvalidBucketName"
                || message.to_lowercase().contains("invalid bucket name") =>
        {
            ErrorKind::InvalidName
        }
        ProviderError::ParamValidation { .. } => ErrorKind::InvalidCharacters,
        _ => ErrorKind::Unclassified,
    }
}
