use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::fixture::{self, join_under};
use crate::{
    config::{MockConfig, RewritePolicy},
    http::request::RequestDescriptor,
};

/// Fixture shared by every view page.
pub const COMMON_MOCK: &str = "__COMMON__";

/// Which branch served a request, with the data it produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedMock {
    View { page: String, data: Value },
    Async { data: Value },
}

impl ResolvedMock {
    pub fn data(&self) -> &Value {
        match self {
            ResolvedMock::View { data, .. } | ResolvedMock::Async { data } => data,
        }
    }

    pub fn into_data(self) -> Value {
        match self {
            ResolvedMock::View { data, .. } | ResolvedMock::Async { data } => data,
        }
    }
}

/// Fixture location for a request, without extension.
///
/// View routes live under `views_mock_path/<page>`, everything else under
/// `async_mock_path/<method>/<path>`. `None` when that root is not configured.
pub fn get_path(req: &RequestDescriptor, config: &MockConfig) -> Option<PathBuf> {
    if let Some(page) = config.url_maps.page_for(&req.path) {
        let page = page.strip_prefix('/').unwrap_or(page);
        return config
            .views_mock_path
            .as_deref()
            .map(|root| join_under(root, page));
    }

    config
        .async_mock_path
        .as_deref()
        .map(|root| join_under(&root.join(req.method_dir()), &req.path))
}

/// Page keys win over `__COMMON__` keys. A non-object on either side is not
/// merged: the page value is used as-is, or the common keys alone.
fn merge_shallow(common: Value, page: Value) -> Value {
    match (common, page) {
        (Value::Object(mut common), Value::Object(page)) => {
            common.extend(page);
            Value::Object(common)
        }
        (Value::Object(common), _) => Value::Object(common),
        (_, Value::Object(page)) => Value::Object(page),
        (_, page) => page,
    }
}

/// Mock data for a rendered page: `__COMMON__` merged with the page fixture.
pub fn get_views_mock(page: &str, config: &MockConfig) -> Value {
    let Some(root) = config.views_mock_path.as_deref() else {
        warn!(page = %page, "viewsMockPath is not configured, using the default mock");
        return config.default_mock.clone();
    };

    let common = fixture::read_obj_from_file(
        &root.join(COMMON_MOCK),
        config.auto_gen_mock,
        &config.default_mock,
    );
    let page = page.strip_prefix('/').unwrap_or(page);
    let page_mock = fixture::read_obj_from_file(
        &join_under(root, page),
        config.auto_gen_mock,
        &Value::Object(Map::new()),
    );
    merge_shallow(common, page_mock)
}

/// Mock data for an API request, keyed by method and raw path.
pub fn get_async_mock(method: &str, url_path: &str, config: &MockConfig) -> Value {
    let Some(root) = config.async_mock_path.as_deref() else {
        warn!("urlPath: {}, asyncMockPath is not configured", url_path);
        return config.default_mock.clone();
    };

    let base = join_under(&root.join(method.to_lowercase()), url_path);
    fixture::read_obj_from_file(&base, config.auto_gen_mock, &config.default_mock)
}

/// Serves a request the way the mock server does: view routes first, then the
/// async fallback.
pub fn resolve_mock(req: &RequestDescriptor, config: &MockConfig) -> ResolvedMock {
    match config.url_maps.page_for(&req.path) {
        Some(page) => ResolvedMock::View {
            page: page.to_string(),
            data: get_views_mock(page, config),
        },
        None => ResolvedMock::Async {
            data: get_async_mock(&req.method, &req.path, config),
        },
    }
}

/// Records live response data as the request's fixture, as allowed by the
/// configured [`RewritePolicy`]. Returns the written file, if any.
pub fn write_mock_back(req: &RequestDescriptor, config: &MockConfig, data: &Value) -> Option<PathBuf> {
    if config.rewrite == RewritePolicy::Never {
        return None;
    }

    let Some(base) = get_path(req, config) else {
        warn!(method = %req.method, path = %req.path, "no mock folder configured for request, not writing");
        return None;
    };
    if config.rewrite == RewritePolicy::SeedOnce && fixture::exists(&base) {
        return None;
    }

    let written = fixture::remove_script(&base).and_then(|()| fixture::store(&base, data));
    match written {
        Ok(path) => {
            info!("Write mock: {}", path.display());
            if config.verbose {
                info!("Write mock data: {}", data);
            }
            Some(path)
        }
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::router::RouteTable;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config() -> MockConfig {
        let routes = RouteTable::new(
            [("/user/:id", "user"), ("/about", "/pages/about")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        let mut config = MockConfig::new("/views", json!({"engine": "tera"}), routes);
        config.views_mock_path = Some(PathBuf::from("/m"));
        config.async_mock_path = Some(PathBuf::from("/a"));
        config
    }

    #[test]
    fn view_route_resolves_under_views_mock_path() {
        let req = RequestDescriptor::new("GET", "/user/42");
        assert_eq!(get_path(&req, &config()), Some(PathBuf::from("/m/user")));
    }

    #[test]
    fn leading_slash_of_page_key_is_stripped() {
        let req = RequestDescriptor::new("GET", "/about");
        assert_eq!(get_path(&req, &config()), Some(PathBuf::from("/m/pages/about")));
    }

    #[test]
    fn unmatched_route_resolves_under_async_mock_path() {
        let req = RequestDescriptor::new("GET", "/api/widgets");
        assert_eq!(get_path(&req, &config()), Some(PathBuf::from("/a/get/api/widgets")));
    }

    #[test]
    fn empty_page_key_resolves_under_async_mock_path() {
        let mut config = config();
        config.url_maps = RouteTable::new(
            [("/api/:x", ""), ("/user/:id", "user")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        let req = RequestDescriptor::new("GET", "/api/widgets");
        assert_eq!(get_path(&req, &config), Some(PathBuf::from("/a/get/api/widgets")));
    }

    #[test]
    fn missing_root_yields_no_path() {
        let mut config = config();
        config.async_mock_path = None;
        assert_eq!(get_path(&RequestDescriptor::new("POST", "/api/x"), &config), None);
        assert_eq!(
            get_path(&RequestDescriptor::new("GET", "/user/1"), &config),
            Some(PathBuf::from("/m/user"))
        );
    }

    #[test]
    fn shallow_merge_prefers_page_keys() {
        let merged = merge_shallow(
            json!({"title": "common", "nav": ["a"], "user": {"name": "x"}}),
            json!({"title": "page", "user": {"id": 1}}),
        );
        assert_eq!(merged, json!({"title": "page", "nav": ["a"], "user": {"id": 1}}));
    }

    #[test]
    fn shallow_merge_with_non_objects() {
        assert_eq!(merge_shallow(json!({"a": 1}), json!([1])), json!({"a": 1}));
        assert_eq!(merge_shallow(json!(null), json!({"b": 2})), json!({"b": 2}));
        assert_eq!(merge_shallow(json!(1), json!("page")), json!("page"));
    }

    #[test]
    fn unset_roots_return_the_default_mock() {
        let mut config = config();
        config.views_mock_path = None;
        config.async_mock_path = None;
        config.default_mock = json!({"default": true});

        assert_eq!(get_views_mock("user", &config), json!({"default": true}));
        assert_eq!(get_async_mock("GET", "/api", &config), json!({"default": true}));
    }

    #[test]
    fn never_policy_writes_nothing() {
        let req = RequestDescriptor::new("GET", "/api/widgets");
        assert_eq!(write_mock_back(&req, &config(), &json!({"x": 1})), None);
    }
}
