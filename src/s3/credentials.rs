use secrecy::{ExposeSecret, SecretString};
use std::env;

#[derive(Clone, Debug)]
pub struct Credentials {
    // AWS_ACCESS_KEY_ID
    key: String,
    // AWS_SECRET_ACCESS_KEY
    secret: SecretString,
}

impl Credentials {
    /// Environment variables win over the keys passed in, so a config file
    /// without keys still works with the usual AWS variables set.
    #[must_use]
    pub fn new(access: &str, secret: &SecretString) -> Self {
        let key = env::var("AWS_ACCESS_KEY_ID").unwrap_or_else(|_| access.to_string());
        let secret = env::var("AWS_SECRET_ACCESS_KEY")
            .map_or_else(|_| secret.clone(), |s| SecretString::new(s.into()));
        Self { key, secret }
    }

    /// Get a reference to the access key ID.
    #[must_use]
    pub fn aws_access_key_id(&self) -> &str {
        &self.key
    }

    /// Get a reference to the secret access key.
    #[must_use]
    pub fn aws_secret_access_key(&self) -> &SecretString {
        &self.secret
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}
