use crate::{
    s3::actions::{Action, response_error},
    s3::responses::ListAllMyBucketsResult,
    s3::{ProviderError, S3, request, tools},
};
use http::Method;
use quick_xml::de::from_str;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct ListBuckets {}

impl ListBuckets {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request or parse the response
    pub async fn request(&self, s3: &S3) -> Result<ListAllMyBucketsResult, ProviderError> {
        let (url, headers) = &self.sign(s3, &tools::sha256_digest_string(""), None, None)?;

        let response = request::request(url.clone(), self.http_method(), headers, None).await?;

        if response.status().is_success() {
            Ok(from_str(&response.text().await?)?)
        } else {
            Err(response_error(response).await)
        }
    }
}

impl Action for ListBuckets {
    fn http_method(&self) -> Method {
        Method::GET
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn path(&self) -> Option<Vec<&str>> {
        None
    }
}
