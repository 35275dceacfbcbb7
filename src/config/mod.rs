pub mod errors;
pub mod raw;
pub mod resolved;
pub mod resolver;

pub use errors::ConfigError;
pub use resolved::{EnvSelection, MockConfig, RewritePolicy};
pub use resolver::{load_config, parse_config};
