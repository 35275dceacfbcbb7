use std::{error::Error, path::PathBuf};

use clap::Args;
use moky::diagnostics::print_proxy_maps;
use tracing::info;

/// Load and validate a config file, then summarize it.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Config file to check
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn Error>> {
    let config = super::load(&args.config)?;
    info!(config = %args.config.display(), "configuration is valid");

    println!("viewsPath:     {}", config.views_path.display());
    println!("viewsMockPath: {}", display_opt(config.views_mock_path.as_deref()));
    println!("asyncMockPath: {}", display_opt(config.async_mock_path.as_deref()));
    println!("autoGenMock:   {}", config.auto_gen_mock);
    println!("rewrite:       {:?}", config.rewrite);
    println!("urlMaps:");
    for (pattern, page) in config.url_maps.iter() {
        println!("  {pattern} -> {page}");
    }

    print_proxy_maps(&config.proxy_maps, &config.env);
    Ok(())
}

fn display_opt(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}
