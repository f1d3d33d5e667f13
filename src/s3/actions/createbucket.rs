use crate::{
    s3::actions::{Action, bucket_name, response_error},
    s3::{ProviderError, Region, S3, request, tools},
};
use bytes::Bytes;
use http::Method;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct CreateBucket<'a> {
    region: &'a Region,
}

impl<'a> CreateBucket<'a> {
    #[must_use]
    pub const fn new(region: &'a Region) -> Self {
        Self { region }
    }

    /// Request body, empty when the region takes no location constraint
    #[must_use]
    pub fn body(&self) -> String {
        self.region
            .location_constraint()
            .map_or_else(String::new, |constraint| {
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8"?>
<CreateBucketConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
    <LocationConstraint>{constraint}</LocationConstraint>
</CreateBucketConfiguration>"#
                )
            })
    }

    /// Returns the HTTP status code reported by the service
    ///
    /// # Errors
    ///
    /// Will return `Err` if the bucket name fails validation, the request can
    /// not be made or the service rejects it
    pub async fn request(&self, s3: &S3) -> Result<u16, ProviderError> {
        let bucket = bucket_name(s3)?;

        let body = self.body();

        let (url, headers) = &self.sign(
            s3,
            &tools::sha256_digest_string(&body),
            None,
            Some(body.len()),
        )?;

        let response =
            request::request(url.clone(), self.http_method(), headers, Some(Bytes::from(body)))
                .await?;

        if response.status().is_success() {
            if let Some(location) = response.headers().get("location") {
                log::info!("bucket {bucket} location: {location:?}");
            }
            Ok(response.status().as_u16())
        } else {
            Err(response_error(response).await)
        }
    }
}

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html>
impl Action for CreateBucket<'_> {
    fn http_method(&self) -> Method {
        Method::PUT
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
