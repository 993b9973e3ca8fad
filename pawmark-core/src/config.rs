use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct PawmarkConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Store endpoint + credential. The url is supplied externally (config file
/// or PAWMARK__DATABASE__URL); there is no default, so a missing value fails
/// config load instead of silently running without a store.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8780,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FavoritesConfig {
    /// Hard cap on rows returned by a list call.
    pub list_limit: i64,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            list_limit: crate::store::DEFAULT_LIST_LIMIT,
        }
    }
}

impl PawmarkConfig {
    /// Load from a TOML file, then overlay PAWMARK__* environment variables
    /// (e.g. PAWMARK__DATABASE__URL).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("PAWMARK").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}
