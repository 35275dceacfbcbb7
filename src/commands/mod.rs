pub mod check;
pub mod proxies;
pub mod record;
pub mod resolve;

use std::{error::Error, io, path::Path};

use moky::{load_config, MockConfig};

/// Loads the config for a command, turning a load failure into a command
/// error so `main` can report it and exit non-zero.
pub fn load(config: &Path) -> Result<MockConfig, Box<dyn Error>> {
    let config = load_config(config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("load_config failed: {}", e)))?;
    Ok(config)
}
