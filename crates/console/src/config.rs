/// Console configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL of the workouts API, without a trailing slash.
    pub api_url: String,
}

impl ConsoleConfig {
    /// Reads `WORKOUTS_API_URL` (default: `http://localhost:3000`).
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("WORKOUTS_API_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        )
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}
