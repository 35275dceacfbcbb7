use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, error};

use super::{
    errors::ConfigError,
    raw::RawConfig,
    resolved::{EnvSelection, MockConfig, RewritePolicy},
};
use crate::http::router::RouteTable;

/// Makes a config path absolute against the current working directory.
pub fn get_config_path_cwd(config_arg: &Path) -> PathBuf {
    if config_arg.is_absolute() {
        return config_arg.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(config_arg),
        Err(e) => {
            debug!(error = %e, "current directory unavailable, keeping relative config path");
            config_arg.to_path_buf()
        }
    }
}

/// Resolves a path from the config file relative to the config's folder.
pub fn resolve_path(reference: &str, base: &Path) -> PathBuf {
    let ref_path = Path::new(reference);
    if ref_path.is_absolute() {
        ref_path.to_path_buf()
    } else {
        base.join(ref_path)
    }
}

/// Loose truthiness used for the required keys: `null`, `false`, `0`, `NaN`
/// and `""` are missing, every array or object counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let file_content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    serde_json::from_str(&file_content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Checks the required keys and turns the raw file into a [`MockConfig`].
pub fn resolve_config(raw: RawConfig, root_folder: &Path) -> Result<MockConfig, ConfigError> {
    let views_path = raw
        .views_path
        .filter(|p| !p.is_empty())
        .ok_or(ConfigError::MissingKey("viewsPath"))?;
    let view_config = raw
        .view_config
        .filter(is_truthy)
        .ok_or(ConfigError::MissingKey("viewConfig"))?;
    let url_maps = raw.url_maps.ok_or(ConfigError::MissingKey("urlMaps"))?;

    let optional_path = |p: Option<String>| {
        p.filter(|p| !p.is_empty())
            .map(|p| resolve_path(&p, root_folder))
    };

    Ok(MockConfig {
        views_path: resolve_path(&views_path, root_folder),
        view_config,
        url_maps: RouteTable::new(url_maps),
        views_mock_path: optional_path(raw.views_mock_path),
        async_mock_path: optional_path(raw.async_mock_path),
        auto_gen_mock: raw.auto_gen_mock,
        default_mock: raw.default_mock,
        rewrite: RewritePolicy::from_value(raw.rewrite.as_ref()),
        verbose: raw.verbose,
        proxy_maps: raw.proxy_maps,
        env: EnvSelection::from_value(raw.env.as_ref()),
    })
}

/// Reads, validates and resolves the configuration at `path`.
pub fn load_config(path: &Path) -> Result<MockConfig, ConfigError> {
    let path = get_config_path_cwd(path);
    let root_folder = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let raw = read_raw_config(&path)?;
    let config = resolve_config(raw, &root_folder)?;
    debug!(path = %path.display(), routes = config.url_maps.len(), "configuration loaded");
    Ok(config)
}

/// Like [`load_config`] but never fails: problems are logged and `None` is
/// returned, which callers treat as "no usable configuration".
pub fn parse_config(path: &Path) -> Option<MockConfig> {
    match load_config(path) {
        Ok(config) => Some(config),
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}
