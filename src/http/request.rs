/// The two pieces of an incoming request the mock store looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: String,
    pub path: String,
}

impl RequestDescriptor {
    /// Builds a descriptor from a request target, dropping any `?query` or
    /// `#fragment` so only the path is matched.
    pub fn new(method: impl Into<String>, target: &str) -> Self {
        let path = match target.find(|c: char| c == '?' || c == '#') {
            Some(idx) => &target[..idx],
            None => target,
        };
        let path = if path.is_empty() { "/" } else { path };
        Self {
            method: method.into(),
            path: path.to_string(),
        }
    }

    /// Lower-cased method, as used in async mock directories.
    pub fn method_dir(&self) -> String {
        self.method.to_lowercase()
    }
}
