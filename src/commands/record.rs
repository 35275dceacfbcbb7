use std::{error::Error, io, path::PathBuf};

use clap::Args;
use moky::{diagnostics::is_json, mock::write_mock_back, RequestDescriptor};
use serde_json::Value;
use tracing::info;

/// Record response data as a request's mock, following the rewrite policy.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Config file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// HTTP method of the request
    #[arg(short, long, default_value = "GET")]
    pub method: String,

    /// Request target, e.g. /api/widgets
    pub path: String,

    /// JSON payload to record
    #[arg(short, long, value_name = "JSON")]
    pub data: String,
}

pub fn run(args: RecordArgs) -> Result<(), Box<dyn Error>> {
    if !is_json(&args.data) {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "--data is not valid JSON").into());
    }
    let data: Value = serde_json::from_str(&args.data)?;

    let config = super::load(&args.config)?;
    let req = RequestDescriptor::new(args.method, &args.path);

    match write_mock_back(&req, &config, &data) {
        Some(path) => info!(path = %path.display(), "mock recorded"),
        None => info!(rewrite = ?config.rewrite, "nothing recorded"),
    }
    Ok(())
}
