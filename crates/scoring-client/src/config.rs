use serde::Deserialize;

/// The scoring service's `find_best_movie` capability
pub const DEFAULT_SCORING_ENDPOINT: &str = "http://localhost:8000/find_best_movie";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Full URL requests are POSTed to (env: `SCORING_ENDPOINT`)
    #[serde(default = "default_scoring_endpoint")]
    pub scoring_endpoint: String,
}

fn default_scoring_endpoint() -> String {
    DEFAULT_SCORING_ENDPOINT.to_string()
}

impl ClientConfig {
    /// Read from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Read from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scoring_endpoint: default_scoring_endpoint(),
        }
    }
}
