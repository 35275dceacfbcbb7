use indexmap::IndexMap;
use tracing::warn;

use super::pattern::PathPattern;

#[derive(Debug, Clone)]
struct Route {
    template: String,
    pattern: Option<PathPattern>,
    page: String,
}

/// `urlMaps` with every pattern compiled once. Order is the insertion order of
/// the source map and the first matching route wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(url_maps: IndexMap<String, String>) -> Self {
        url_maps.into_iter().collect()
    }

    /// Page key of the first route matching `path`. A first match with an
    /// empty page key counts as no match.
    pub fn page_for(&self, path: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.pattern.as_ref().is_some_and(|p| p.is_match(path)))
            .map(|route| route.page.as_str())
            .filter(|page| !page.is_empty())
    }

    /// `(pattern, page)` pairs in match order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|route| (route.template.as_str(), route.page.as_str()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<(String, String)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let routes = iter
            .into_iter()
            .map(|(template, page)| {
                let pattern = compile_or_warn(&template);
                Route { template, pattern, page }
            })
            .collect();
        RouteTable { routes }
    }
}

fn compile_or_warn(template: &str) -> Option<PathPattern> {
    match PathPattern::compile(template) {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

/// Walks `url_maps` in order and returns the page of the first pattern that
/// matches `url`. Patterns are compiled on every call; use [`RouteTable`] to
/// compile them once.
pub fn map_url_to_page<'a>(url: &str, url_maps: &'a IndexMap<String, String>) -> Option<&'a str> {
    url_maps
        .iter()
        .find(|(template, _)| compile_or_warn(template).is_some_and(|p| p.is_match(url)))
        .map(|(_, page)| page.as_str())
        .filter(|page| !page.is_empty())
}
