use std::{error::Error, path::PathBuf};

use clap::Args;
use moky::{
    mock::{get_path, resolve_mock, ResolvedMock},
    RequestDescriptor,
};

/// Show which fixture a request maps to and the mock data it yields.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Config file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// HTTP method of the request
    #[arg(short, long, default_value = "GET")]
    pub method: String,

    /// Request target, e.g. /user/42?tab=posts
    pub path: String,
}

pub fn run(args: ResolveArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load(&args.config)?;
    let req = RequestDescriptor::new(args.method, &args.path);

    match get_path(&req, &config) {
        Some(base) => println!("fixture: {}", base.display()),
        None => println!("fixture: (no mock folder configured)"),
    }

    let resolved = resolve_mock(&req, &config);
    match &resolved {
        ResolvedMock::View { page, .. } => println!("view:    {page}"),
        ResolvedMock::Async { .. } => println!("async:   {} {}", req.method_dir(), req.path),
    }
    println!("{}", serde_json::to_string_pretty(resolved.data())?);
    Ok(())
}
