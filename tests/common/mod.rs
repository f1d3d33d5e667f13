//! Common test helpers for integration tests
//!
//! - `MinioContext`: external `MinIO` or a testcontainer
//! - Config file helpers: temporary tfbucket config files
//! - Binary helpers: run tfbucket with a bucket name on stdin

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

pub mod minio;

pub use minio::{MINIO_ROOT_PASSWORD, MINIO_ROOT_USER, MinioContainer};

use secrecy::SecretString;
use std::env;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;
use tfbucket::provisioner::{LineReader, read_line_from};
use tfbucket::s3::{Credentials, Region, S3};

/// Client against an S3 compatible `endpoint`, signing for `region`
pub fn s3_client(endpoint: &str, region: &str, access_key: &str, secret_key: &str) -> S3 {
    let credentials = Credentials::new(access_key, &SecretString::new(secret_key.into()));

    let region = Region::Custom {
        name: region.to_string(),
        endpoint: endpoint.to_string(),
    };

    S3::new(&credentials, &region, None)
}

/// Bucket names typed by the operator, one per line
pub struct Input(std::io::Cursor<String>);

impl Input {
    pub fn new(lines: &str) -> Self {
        Self(std::io::Cursor::new(lines.to_string()))
    }
}

impl LineReader for Input {
    fn read_line(&mut self, _prompt: &str) -> std::io::Result<String> {
        read_line_from(&mut self.0)
    }
}

/// Create a temporary config.yml with a single `s3` host
pub fn create_config_file(
    endpoint: &str,
    region: &str,
    access_key: &str,
    secret_key: &str,
) -> NamedTempFile {
    let config_content = format!(
        r"---
hosts:
  s3:
    endpoint: {endpoint}
    region: {region}
    access_key: {access_key}
    secret_key: {secret_key}
"
    );

    let mut config_file = NamedTempFile::new().expect("Failed to create temp config file");
    config_file
        .write_all(config_content.as_bytes())
        .expect("Failed to write config");
    config_file.flush().expect("Failed to flush config");
    config_file
}

/// Run tfbucket with `args`, feeding `stdin` to the prompt
pub fn run_tfbucket(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tfbucket"))
        .args(args)
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute tfbucket");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait on tfbucket")
}

/// Run tfbucket against the `s3` host of a generated config file
pub fn run_tfbucket_with_host(
    endpoint: &str,
    region: &str,
    access_key: &str,
    secret_key: &str,
    stdin: &str,
) -> Output {
    let config_file = create_config_file(endpoint, region, access_key, secret_key);
    let config_path = config_file.path().to_str().expect("Invalid config path");

    let output = run_tfbucket(&["--config", config_path, "--host", "s3"], stdin);

    // keep config_file alive until the command completes
    drop(config_file);

    output
}

/// `MinIO` test context - either external or testcontainer-based
pub enum MinioContext {
    External {
        endpoint: String,
        access_key: String,
        secret_key: String,
    },
    Container(Box<MinioContainer>),
}

impl MinioContext {
    /// Uses `MINIO_ENDPOINT` if set, otherwise starts a container
    pub async fn get_or_start() -> Self {
        if let Ok(endpoint) = env::var("MINIO_ENDPOINT") {
            let access_key =
                env::var("MINIO_ACCESS_KEY").unwrap_or_else(|_| MINIO_ROOT_USER.to_string());
            let secret_key =
                env::var("MINIO_SECRET_KEY").unwrap_or_else(|_| MINIO_ROOT_PASSWORD.to_string());

            println!("Using external MinIO at {endpoint}");

            Self::External {
                endpoint,
                access_key,
                secret_key,
            }
        } else {
            println!("Starting MinIO testcontainer");
            let container = MinioContainer::start().await;
            container.wait_for_ready().await.expect("MinIO ready");
            Self::Container(Box::new(container))
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::External { endpoint, .. } => endpoint,
            Self::Container(c) => &c.endpoint,
        }
    }

    pub fn access_key(&self) -> &str {
        match self {
            Self::External { access_key, .. } => access_key,
            Self::Container(c) => &c.access_key,
        }
    }

    pub fn secret_key(&self) -> &str {
        match self {
            Self::External { secret_key, .. } => secret_key,
            Self::Container(c) => &c.secret_key,
        }
    }

    /// `MinIO` accepts any signing region, us-east-1 keeps the request body empty
    pub fn s3_client(&self) -> S3 {
        s3_client(
            self.endpoint(),
            "us-east-1",
            self.access_key(),
            self.secret_key(),
        )
    }
}

/// Bucket name unique to this test run
pub fn unique_bucket(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{prefix}-{}-{nanos}", std::process::id())
}
