use crate::{
    s3::actions::{Action, VersioningStatus, bucket_name, response_error},
    s3::responses::VersioningConfiguration,
    s3::{ProviderError, S3, request, tools},
};
use http::Method;
use quick_xml::de::from_str;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct GetBucketVersioning {}

impl GetBucketVersioning {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// `None` when versioning was never configured on the bucket
    ///
    /// # Errors
    ///
    /// Will return `Err` if can not make the request or parse the response
    pub async fn request(&self, s3: &S3) -> Result<Option<VersioningStatus>, ProviderError> {
        bucket_name(s3)?;

        let (url, headers) = &self.sign(s3, &tools::sha256_digest_string(""), None, None)?;

        let response = request::request(url.clone(), self.http_method(), headers, None).await?;

        if response.status().is_success() {
            let config: VersioningConfiguration = from_str(&response.text().await?)?;

            Ok(config.status.and_then(|status| status.parse().ok()))
        } else {
            Err(response_error(response).await)
        }
    }
}

impl Action for GetBucketVersioning {
    fn http_method(&self) -> Method {
        Method::GET
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        let mut map: BTreeMap<&str, &str> = BTreeMap::new();
        map.insert("versioning", "");
        Some(map)
    }

    fn path(&self) -> Option<Vec<&str>> {
        None
    }
}
