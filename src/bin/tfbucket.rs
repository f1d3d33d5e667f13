use anyhow::Result;
use colored::Colorize;
use std::{io, process};
use tfbucket::{
    cli,
    provisioner::{BucketProvisioner, StdinReader},
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {e:#}", "Error:".red());
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let s3 = cli::start()?;

    let region = s3.region().clone();

    BucketProvisioner::new(&s3, StdinReader::new(), io::stdout(), region)
        .provision()
        .await?;

    Ok(())
}
