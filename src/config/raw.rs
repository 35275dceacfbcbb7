use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub fn default_mock() -> Value {
    Value::Object(Default::default())
}

/// The configuration file exactly as written, before validation.
///
/// Required keys are still optional here so a missing one can be reported by
/// name instead of surfacing as a generic parse error.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub views_path: Option<String>,
    #[serde(default)]
    pub view_config: Option<Value>,
    #[serde(default)]
    pub url_maps: Option<IndexMap<String, String>>,

    #[serde(default)]
    pub views_mock_path: Option<String>,
    #[serde(default)]
    pub async_mock_path: Option<String>,
    #[serde(default)]
    pub auto_gen_mock: bool,
    #[serde(default = "default_mock")]
    pub default_mock: Value,
    #[serde(default)]
    pub rewrite: Option<Value>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub proxy_maps: IndexMap<String, Value>,
    #[serde(default)]
    pub env: Option<Value>,
}
