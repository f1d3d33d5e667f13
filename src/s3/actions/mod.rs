//! Actions
//! <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations.html>

use crate::s3::{ProviderError, S3, Signature, responses::ErrorResponse};
use http::Method;
use quick_xml::de::from_str;
use regex::Regex;
use reqwest::Response;
use std::collections::BTreeMap;
use url::Url;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html>
mod createbucket;
pub use self::createbucket::CreateBucket;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketVersioning.html>
mod putbucketversioning;
pub use self::putbucketversioning::{PutBucketVersioning, VersioningStatus};

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketVersioning.html>
mod getbucketversioning;
pub use self::getbucketversioning::GetBucketVersioning;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html>
mod listbuckets;
pub use self::listbuckets::ListBuckets;

/// Pattern AWS SDKs check bucket names against before sending a request
pub const BUCKET_NAME_PATTERN: &str = r"^[a-zA-Z0-9.\-_]{1,255}$";

pub trait Action {
    // headers to send in the request
    fn headers(&self) -> Option<BTreeMap<&str, &str>>;

    // method to use GET/PUT...
    fn http_method(&self) -> Method;

    // URL query pairs
    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>>;

    // URL path
    fn path(&self) -> Option<Vec<&str>>;

    /// # Errors
    ///
    /// Will return `Err` if the endpoint can not be parsed
    fn sign(
        &self,
        s3: &S3,
        hash_payload: &str,
        md5: Option<&str>,
        content_length: Option<usize>,
    ) -> Result<(Url, BTreeMap<String, String>), ProviderError> {
        let mut url = s3.endpoint()?;

        if let Some(path) = self.path() {
            url.path_segments_mut()
                .map_err(|()| ProviderError::Request("endpoint cannot be a base URL".to_string()))?
                .extend(path);
        }

        if let Some(pairs) = &self.query_pairs() {
            for (k, v) in pairs {
                url.query_pairs_mut().append_pair(k, v);
            }
        }

        let mut signature = Signature::new(s3, "s3", self.http_method());
        let headers = signature.sign(&url, hash_payload, md5, content_length, self.headers());

        Ok((url, headers))
    }
}

/// The bucket the client is scoped to, checked the way AWS SDKs do before
/// anything goes over the wire. Length and naming rules are left to the service.
///
/// # Errors
///
/// Will return `Err` if there is no bucket or it fails the pattern check
pub fn bucket_name(s3: &S3) -> Result<&str, ProviderError> {
    let bucket = s3
        .bucket()
        .ok_or_else(|| ProviderError::Request("bucket name missing".to_string()))?;

    let bucket_regex =
        Regex::new(BUCKET_NAME_PATTERN).map_err(|e| ProviderError::Request(e.to_string()))?;

    if bucket_regex.is_match(bucket) {
        Ok(bucket)
    } else {
        Err(ProviderError::ParamValidation {
            bucket: bucket.to_string(),
            reason: format!("must match the pattern \"{BUCKET_NAME_PATTERN}\""),
        })
    }
}

/// Turn a non 2xx response into a [`ProviderError::Service`]
pub async fn response_error(response: Response) -> ProviderError {
    let status = response.status();

    let request_id = response
        .headers()
        .get("x-amz-request-id")
        .and_then(|rid| rid.to_str().ok())
        .map(ToString::to_string);

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return ProviderError::Transport(e),
    };

    log::debug!("error response ({status}): {body}");

    match from_str::<ErrorResponse>(&body) {
        Ok(e) => ProviderError::Service {
            status: status.as_u16(),
            code: e.code,
            message: e.message,
            request_id: e.request_id.or(request_id),
        },
        Err(_) => ProviderError::Service {
            status: status.as_u16(),
            code: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .replace(' ', ""),
            message: body,
            request_id,
        },
    }
}
