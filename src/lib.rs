//! Mock resolution for a development mock server: map request paths to
//! fixture files, read and record JSON mocks, and report proxy selection.

pub mod config;
pub mod diagnostics;
pub mod http;
pub mod mock;

pub use config::{load_config, parse_config, MockConfig};
pub use http::{request::RequestDescriptor, router::map_url_to_page};
