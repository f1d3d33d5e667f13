use crate::s3::{
    ProviderError, Region, S3,
    actions::{CreateBucket, PutBucketVersioning, VersioningStatus},
};
use std::future::Future;

/// The storage operations the provisioner needs
pub trait Provider {
    /// Create bucket `name` pinned to `region`, returns the HTTP status code
    fn create_bucket(
        &self,
        name: &str,
        region: &Region,
    ) -> impl Future<Output = Result<u16, ProviderError>>;

    fn enable_versioning(&self, name: &str) -> impl Future<Output = Result<(), ProviderError>>;
}

impl Provider for S3 {
    async fn create_bucket(&self, name: &str, region: &Region) -> Result<u16, ProviderError> {
        let s3 = self.with_bucket(name);
        CreateBucket::new(region).request(&s3).await
    }

    async fn enable_versioning(&self, name: &str) -> Result<(), ProviderError> {
        let s3 = self.with_bucket(name);
        PutBucketVersioning::new(VersioningStatus::Enabled)
            .request(&s3)
            .await
    }
}

impl<P: Provider + ?Sized> Provider for &P {
    fn create_bucket(
        &self,
        name: &str,
        region: &Region,
    ) -> impl Future<Output = Result<u16, ProviderError>> {
        (**self).create_bucket(name, region)
    }

    fn enable_versioning(&self, name: &str) -> impl Future<Output = Result<(), ProviderError>> {
        (**self).enable_versioning(name)
    }
}
