use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding movies.json, genres.json and movie_genres.json
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,

    /// Origin allowed to call the API from a browser; any origin when unset
    #[serde(default)]
    pub cors_origin: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("data/catalog")
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address to bind, e.g. `127.0.0.1:8000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.catalog_dir, PathBuf::from("data/catalog"));
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "9000".to_string()),
            ("CATALOG_DIR".to_string(), "/srv/catalog".to_string()),
            ("CORS_ORIGIN".to_string(), "http://localhost:3000".to_string()),
        ];
        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.catalog_dir, PathBuf::from("/srv/catalog"));
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_invalid_port() {
        let vars = vec![("PORT".to_string(), "eighty".to_string())];
        assert!(Config::from_vars(vars).is_err());
    }
}
