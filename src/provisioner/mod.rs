//! Interactive creation of a versioned Terraform state bucket.
//!
//! [`BucketProvisioner`] asks for a bucket name, creates the bucket through a
//! [`Provider`], enables versioning on it and tells the operator what
//! happened. Every failure is reported on the console and then returned, the
//! operator is expected to run it again with a better name.

mod error;
pub use self::error::{ErrorKind, ProvisionError};

mod provider;
pub use self::provider::Provider;

mod reader;
pub use self::reader::{LineReader, StdinReader, read_line_from};

use crate::s3::{ProviderError, Region};
use std::io::Write;

pub const PROMPT: &str = "Please enter name for terraform backend bucket: ";

pub const NAMING_RULES_URL: &str =
    "https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html";

#[derive(Debug)]
pub struct BucketProvisioner<P, R, W> {
    provider: P,
    reader: R,
    out: W,
    region: Region,
}

impl<P, R, W> BucketProvisioner<P, R, W>
where
    P: Provider,
    R: LineReader,
    W: Write,
{
    #[must_use]
    pub const fn new(provider: P, reader: R, out: W, region: Region) -> Self {
        Self {
            provider,
            reader,
            out,
            region,
        }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Run once, returns the name of the created bucket
    ///
    /// # Errors
    ///
    /// Will return `Err` if no name could be read, the bucket could not be
    /// created or versioning could not be enabled. Classified errors have
    /// already been reported on the console when returned.
    pub async fn provision(&mut self) -> Result<String, ProvisionError> {
        let name = self.reader.read_line(PROMPT)?;

        log::info!("creating bucket {name:?} in {}", self.region);

        match self.create_versioned(&name).await {
            Ok(()) => {
                writeln!(self.out, "✅ {name} successfully created.")?;
                Ok(name)
            }
            Err(err) => {
                log::debug!("{name:?} failed as {:?}: {err:?}", err.kind());
                self.report(&err);
                Err(err)
            }
        }
    }

    async fn create_versioned(&self, name: &str) -> Result<(), ProvisionError> {
        let status = self
            .provider
            .create_bucket(name, &self.region)
            .await
            .map_err(|e| ProvisionError::classify(name, e))?;

        // versioning only goes on a bucket the provider confirmed
        if !(200..300).contains(&status) {
            return Err(ProviderError::UnexpectedStatus(status).into());
        }

        log::info!("bucket {name:?} created (HTTP {status}), enabling versioning");

        self.provider
            .enable_versioning(name)
            .await
            .map_err(|e| ProvisionError::classify(name, e))
    }

    fn report(&mut self, err: &ProvisionError) {
        if let Some(message) = failure_message(err) {
            if let Err(e) = writeln!(self.out, "{message}") {
                log::warn!("unable to write to console: {e}");
            }
        }
    }
}

/// Console message for a classified failure, `None` for anything else
#[must_use]
pub fn failure_message(err: &ProvisionError) -> Option<String> {
    match err {
        ProvisionError::AlreadyOwnedByCaller { name, .. } => {
            Some(format!("❌ {name} already owned by you - please try again."))
        }
        ProvisionError::AlreadyExists { name, .. } => {
            Some(format!("❌ {name} already exists - please try again."))
        }
        ProvisionError::InvalidName { name, .. } => Some(format!(
            "❌ `{name}` is not a valid bucket name - please try again.\nSee the bucket naming rules: {NAMING_RULES_URL}"
        )),
        ProvisionError::InvalidCharacters { name, .. } => Some(format!(
            "❌ `{name}` contains invalid characters - please try again.\nSee the bucket naming rules: {NAMING_RULES_URL}"
        )),
        ProvisionError::Unclassified(_) | ProvisionError::Console(_) => None,
    }
}
