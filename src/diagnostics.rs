//! Console diagnostics and small checks used around the mock server.

use colored::Colorize;
use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

use crate::config::{EnvSelection, MockConfig};

/// Header set by the proxy layer on responses it forwarded.
pub const PROXY_HEADER: &str = "x-proxy-header";

/// Prints which proxy maps can be selected when the current selection is not
/// usable, and returns the printed message. `None` means the selection is
/// fine (or names a URL directly) and nothing was printed.
///
/// An unset selection is treated like a flag without a value.
pub fn print_proxy_maps(proxy_maps: &IndexMap<String, Value>, env: &EnvSelection) -> Option<String> {
    let message = if proxy_maps.is_empty() {
        Some("No available proxyMaps".to_string())
    } else {
        let needs_listing = match env {
            EnvSelection::Unset | EnvSelection::Flag => true,
            EnvSelection::Named(name) => Url::parse(name).is_err() && !proxy_maps.contains_key(name),
        };
        needs_listing.then(|| {
            let names: Vec<String> = proxy_maps
                .keys()
                .map(|name| name.as_str().reversed().to_string())
                .collect();
            format!("Available proxyMaps: {}", names.join(" "))
        })
    };

    if let Some(message) = &message {
        println!("{}", message);
    }
    message
}

/// [`print_proxy_maps`] for a loaded configuration; no configuration means no
/// proxy maps.
pub fn print_config_proxy_maps(config: Option<&MockConfig>) -> Option<String> {
    match config {
        Some(config) => print_proxy_maps(&config.proxy_maps, &config.env),
        None => print_proxy_maps(&IndexMap::new(), &EnvSelection::Unset),
    }
}

pub fn is_json(s: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(s).is_ok()
}

/// Whether a response passed through the proxy layer, i.e. carries a
/// non-empty [`PROXY_HEADER`]. Header names compare case-insensitively.
pub fn has_proxy_header<I, K, V>(headers: I) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    headers
        .into_iter()
        .any(|(k, v)| k.as_ref().eq_ignore_ascii_case(PROXY_HEADER) && !v.as_ref().is_empty())
}
