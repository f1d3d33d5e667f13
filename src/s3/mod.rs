pub mod actions;
pub mod credentials;
pub mod error;
pub mod region;
pub mod request;
pub mod responses;
pub mod signature;
pub mod tools;

pub use self::{
    credentials::Credentials, error::ProviderError, region::Region, signature::Signature,
};

use std::fmt;
use url::Url;

#[derive(Debug, Clone)]
pub struct S3 {
    // AWS Credentials
    credentials: Credentials,
    // AWS Region
    region: Region,
    // bucket name
    bucket: Option<String>,
}

// Amazon S3 API Reference
// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations.html>
impl S3 {
    #[must_use]
    pub fn new(credentials: &Credentials, region: &Region, bucket: Option<String>) -> Self {
        Self {
            credentials: credentials.clone(),
            region: region.clone(),
            bucket,
        }
    }

    /// Same client scoped to another bucket
    #[must_use]
    pub fn with_bucket(&self, bucket: &str) -> Self {
        Self {
            credentials: self.credentials.clone(),
            region: self.region.clone(),
            bucket: Some(bucket.to_string()),
        }
    }

    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Path-style URL for the bucket, `https://<endpoint>/<bucket>`
    ///
    /// # Errors
    ///
    /// Will return `Err` if the endpoint is not a valid URL
    pub fn endpoint(&self) -> Result<Url, ProviderError> {
        let endpoint = self.region.endpoint();
        let mut url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            Url::parse(&endpoint)?
        } else {
            Url::parse(&format!("https://{endpoint}"))?
        };

        if let Some(bucket) = &self.bucket {
            url.path_segments_mut()
                .map_err(|()| ProviderError::Request(format!("cannot be base: {endpoint}")))?
                .pop_if_empty()
                .push(bucket);
        }

        Ok(url)
    }
}

impl fmt::Display for S3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "region: {}", self.region.name())?;
        writeln!(f, "endpoint: {}", self.region.endpoint())?;
        writeln!(f, "access key: {}", self.credentials.aws_access_key_id())?;
        write!(f, "bucket: {}", self.bucket.as_deref().unwrap_or("-"))
    }
}
