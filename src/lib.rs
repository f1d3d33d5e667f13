//! Create an S3 bucket to hold Terraform remote state and enable versioning on it.
//!
//! The binary prompts for a bucket name, creates the bucket in a fixed region
//! and reports the outcome on the console. The [`provisioner`] module holds the
//! procedure itself, [`s3`] a small `SigV4` client and [`cli`] the command line
//! plumbing.

pub mod cli;
pub mod provisioner;
pub mod s3;
