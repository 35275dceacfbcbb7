use std::{error::Error, io, path::PathBuf};

use clap::Args;
use moky::{config::EnvSelection, diagnostics::print_proxy_maps};

/// Check a proxy selection against the configured proxy maps.
#[derive(Args, Debug)]
pub struct ProxiesArgs {
    /// Config file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Proxy name or URL; given without a value it only lists the proxy maps
    #[arg(short, long, value_name = "NAME", num_args = 0..=1)]
    pub env: Option<Option<String>>,
}

pub fn run(args: ProxiesArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load(&args.config)?;
    let env = match args.env {
        Some(Some(name)) => EnvSelection::Named(name),
        Some(None) => EnvSelection::Flag,
        None => config.env.clone(),
    };

    match print_proxy_maps(&config.proxy_maps, &env) {
        Some(_) => Err(io::Error::new(io::ErrorKind::InvalidInput, "no usable proxy selection").into()),
        None => Ok(()),
    }
}
