//! Shared fixtures for the integration tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use moky::{parse_config, MockConfig};
use serde_json::{json, Value};
use tempfile::TempDir;

/// A temporary project folder holding a `moky.json` and its mock folders.
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// A minimal valid configuration, with `overrides` merged on top.
    pub fn base_config(overrides: Value) -> Value {
        let mut config = json!({
            "viewsPath": "views",
            "viewConfig": { "engine": "tera" },
            "urlMaps": {
                "/user/:id": "user",
                "/": "index"
            },
            "viewsMockPath": "mock/views",
            "asyncMockPath": "mock/async"
        });
        if let (Value::Object(base), Value::Object(extra)) = (&mut config, overrides) {
            base.extend(extra);
        }
        config
    }

    pub fn write_config(&self, config: &Value) -> PathBuf {
        let path = self.path("moky.json");
        fs::write(&path, serde_json::to_string_pretty(config).unwrap()).unwrap();
        path
    }

    pub fn write_raw_config(&self, content: &str) -> PathBuf {
        let path = self.path("moky.json");
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes the base config with `overrides` and loads it.
    pub fn config(&self, overrides: Value) -> MockConfig {
        let path = self.write_config(&Self::base_config(overrides));
        parse_config(&path).expect("test config should load")
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read_json(&self, relative: &str) -> Value {
        let content = fs::read_to_string(self.path(relative)).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}
