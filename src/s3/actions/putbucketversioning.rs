use crate::{
    s3::actions::{Action, bucket_name, response_error},
    s3::{ProviderError, S3, request, tools},
};
use bytes::Bytes;
use http::Method;
use std::{collections::BTreeMap, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersioningStatus {
    Enabled,
    Suspended,
}

impl VersioningStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersioningStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enabled" => Ok(Self::Enabled),
            "Suspended" => Ok(Self::Suspended),
            other => Err(format!("unknown versioning status: {other}")),
        }
    }
}

#[derive(Debug)]
pub struct PutBucketVersioning {
    status: VersioningStatus,
}

impl PutBucketVersioning {
    #[must_use]
    pub const fn new(status: VersioningStatus) -> Self {
        Self { status }
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<VersioningConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
    <Status>{}</Status>
</VersioningConfiguration>"#,
            self.status
        )
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the service rejects it
    pub async fn request(&self, s3: &S3) -> Result<(), ProviderError> {
        let bucket = bucket_name(s3)?;

        let body = self.body();
        let md5 = tools::base64_md5(&body);

        let (url, headers) = &self.sign(
            s3,
            &tools::sha256_digest_string(&body),
            Some(&md5),
            Some(body.len()),
        )?;

        let response =
            request::request(url.clone(), self.http_method(), headers, Some(Bytes::from(body)))
                .await?;

        if response.status().is_success() {
            log::info!("bucket {bucket} versioning: {}", self.status);
            Ok(())
        } else {
            Err(response_error(response).await)
        }
    }
}

impl Action for PutBucketVersioning {
    fn http_method(&self) -> Method {
        Method::PUT
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
