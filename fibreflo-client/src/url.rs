use std::env;

/// Production base URL of the FibreFlo API.
pub const DEFAULT_API_URL: &str = "https://api.fibreflo.com";

/// Base URL that API paths are appended to.
#[derive(Debug, Clone)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// An explicit base URL (staging, a local stub).
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// The production API, unless `FIBREFLO_URL` overrides it.
    pub fn from_env() -> Self {
        Self(env::var("FIBREFLO_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    /// Append `path` to the base, normalizing the joining slash.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{trimmed_url}/{trimmed_path}"))
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
