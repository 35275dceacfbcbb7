use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::Value;

use crate::http::router::RouteTable;

/// When a live response may overwrite a mock fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewritePolicy {
    /// Never write fixtures back.
    #[default]
    Never,
    /// Write only when no fixture exists yet.
    SeedOnce,
    /// Always overwrite.
    Always,
}

impl RewritePolicy {
    /// Decides the policy from the raw `rewrite` value, casting it to a number
    /// first: `0`, `false`, `null` and anything non-numeric mean never, `1` and
    /// `true` mean seed once, any other number means always.
    pub fn from_value(raw: Option<&Value>) -> Self {
        let n = match raw {
            None | Some(Value::Null) => 0.0,
            Some(Value::Bool(b)) => f64::from(u8::from(*b)),
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
            Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
        };

        if n.is_nan() || n == 0.0 {
            RewritePolicy::Never
        } else if n == 1.0 {
            RewritePolicy::SeedOnce
        } else {
            RewritePolicy::Always
        }
    }
}

/// Which proxy map the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnvSelection {
    #[default]
    Unset,
    /// The proxy flag was given without a value.
    Flag,
    Named(String),
}

impl EnvSelection {
    pub fn from_value(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => EnvSelection::Unset,
            Some(Value::Bool(_)) => EnvSelection::Flag,
            Some(Value::String(s)) => EnvSelection::Named(s.clone()),
            Some(other) => EnvSelection::Named(other.to_string()),
        }
    }
}

/// A validated configuration. Paths are absolute and routes are compiled.
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub views_path: PathBuf,
    pub view_config: Value,
    pub url_maps: RouteTable,
    pub views_mock_path: Option<PathBuf>,
    pub async_mock_path: Option<PathBuf>,
    pub auto_gen_mock: bool,
    pub default_mock: Value,
    pub rewrite: RewritePolicy,
    pub verbose: bool,
    pub proxy_maps: IndexMap<String, Value>,
    pub env: EnvSelection,
}

impl MockConfig {
    /// A configuration with only the required fields set. Mostly useful for
    /// embedding callers that build their config in code.
    pub fn new(views_path: impl Into<PathBuf>, view_config: Value, url_maps: RouteTable) -> Self {
        MockConfig {
            views_path: views_path.into(),
            view_config,
            url_maps,
            views_mock_path: None,
            async_mock_path: None,
            auto_gen_mock: false,
            default_mock: super::raw::default_mock(),
            rewrite: RewritePolicy::Never,
            verbose: false,
            proxy_maps: IndexMap::new(),
            env: EnvSelection::Unset,
        }
    }
}
