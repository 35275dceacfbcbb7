//! Fixture files on disk: `<base>.json` or `<base>.js`, read fresh on every
//! call.

use std::{
    ffi::OsString,
    fs,
    path::{Component, Path, PathBuf},
};

use serde_json::Value;
use tracing::{error, info, warn};

use super::errors::MockError;

pub const JSON_EXT: &str = "json";
pub const SCRIPT_EXT: &str = "js";

/// Appends `.ext` to a base path. Unlike `Path::with_extension` this never
/// replaces a dot already in the last segment (`/a/v1.2` -> `/a/v1.2.json`).
pub fn with_ext(base: &Path, ext: &str) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Joins a URL-ish relative path under `root`. Empty and `.` segments are
/// skipped and `..` never climbs above `root`. A trailing `/` is kept, so the
/// fixture for `/` or `/dir/` lands inside that folder as `.json`.
pub fn join_under(root: &Path, relative: &str) -> PathBuf {
    let mut segments: Vec<&str> = Vec::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(seg) => {
                if let Some(seg) = seg.to_str() {
                    segments.push(seg);
                }
            }
            Component::ParentDir => {
                segments.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    let path = segments.iter().fold(root.to_path_buf(), |path, seg| path.join(seg));
    if relative.ends_with('/') {
        path.join("")
    } else {
        path
    }
}

pub fn exists(base: &Path) -> bool {
    with_ext(base, JSON_EXT).exists() || with_ext(base, SCRIPT_EXT).exists()
}

/// Script fixtures are accepted when they export a plain JSON value.
fn script_body(source: &str) -> &str {
    let body = source.trim();
    let body = body
        .strip_prefix("module.exports")
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .or_else(|| body.strip_prefix("export default"))
        .unwrap_or(body);
    body.trim().trim_end_matches(';').trim_end()
}

/// Reads and parses the fixture at `base`, preferring the JSON file.
pub fn load(base: &Path) -> Result<Value, MockError> {
    let json_path = with_ext(base, JSON_EXT);
    let (path, is_script) = if json_path.exists() {
        (json_path, false)
    } else {
        (with_ext(base, SCRIPT_EXT), true)
    };

    let content = fs::read_to_string(&path).map_err(|source| MockError::Read {
        path: path.clone(),
        source,
    })?;
    let body = if is_script { script_body(&content) } else { content.as_str() };
    serde_json::from_str(body).map_err(|source| MockError::Parse { path, source })
}

/// Writes `data` to `<base>.json`, creating parent folders as needed.
pub fn store(base: &Path, data: &Value) -> Result<PathBuf, MockError> {
    let path = with_ext(base, JSON_EXT);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| MockError::Write {
            path: path.clone(),
            source,
        })?;
    }
    let mut json = serde_json::to_string_pretty(data).map_err(MockError::Serialize)?;
    json.push('\n');
    fs::write(&path, json).map_err(|source| MockError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Removes `<base>.js` if present so it cannot shadow the JSON fixture.
pub fn remove_script(base: &Path) -> Result<(), MockError> {
    let path = with_ext(base, SCRIPT_EXT);
    if path.exists() {
        fs::remove_file(&path).map_err(|source| MockError::Remove { path, source })?;
    }
    Ok(())
}

/// Reads the fixture at `base`, falling back to `default_mock`.
///
/// When neither file exists and `auto_gen_mock` is set, `<base>.json` is
/// seeded with `default_mock`. The returned value is the in-memory default,
/// the new file is not read back.
pub fn read_obj_from_file(base: &Path, auto_gen_mock: bool, default_mock: &Value) -> Value {
    if !exists(base) {
        warn!("{}.js{{on}} doesn't exist", base.display());
        if auto_gen_mock {
            match store(base, default_mock) {
                Ok(path) => info!("Create file: {}", path.display()),
                Err(err) => error!("{}", err),
            }
        }
        return default_mock.clone();
    }

    match load(base) {
        Ok(value) => value,
        Err(err) => {
            error!("{}", err);
            default_mock.clone()
        }
    }
}
