use serde::{Deserialize, Serialize};

pub const DEFAULT_CONN_STRING: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "plp_bookstore";
pub const DEFAULT_COLLECTION_NAME: &str = "books";

#[derive(Debug)]
#[derive(Serialize, Deserialize)]
#[derive(Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug)]
#[derive(Serialize, Deserialize)]
#[derive(Clone)]
pub struct DatabaseConfig {
    pub conn_string: String,
    pub database_name: String,
    pub collection_name: String,
    pub app_name: String,
    /// Insert the sample books before running queries if the collection is empty.
    pub seed_if_empty: bool,
}

#[derive(Debug)]
#[derive(Serialize, Deserialize)]
#[derive(Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            conn_string: DEFAULT_CONN_STRING.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            app_name: "bookstore-queries".to_string(),
            seed_if_empty: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from built-in defaults, the optional file at `config_file`
    /// and `BOOKSTORE__*` environment variables, in increasing precedence.
    pub fn load(config_file: &str) -> Result<AppConfig, config::ConfigError> {
        Self::load_with(config_file, environment())
    }

    fn load_with(config_file: &str, env: config::Environment) -> Result<AppConfig, config::ConfigError> {
        let imported_config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(config_file).required(false))
            .add_source(env)
            .build()?;
        imported_config.try_deserialize::<AppConfig>()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("BOOKSTORE")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn defaults_point_at_local_bookstore() {
        let loaded = AppConfig::load_with("does-not-exist.toml", env_from(&[])).unwrap();
        assert_eq!(loaded.database.conn_string, "mongodb://localhost:27017");
        assert_eq!(loaded.database.database_name, "plp_bookstore");
        assert_eq!(loaded.database.collection_name, "books");
        assert!(!loaded.database.seed_if_empty);
        assert_eq!(loaded.logging.level, "info");
        assert!(!loaded.logging.json);
    }

    #[test]
    fn environment_overrides_defaults() {
        let env = env_from(&[
            ("BOOKSTORE__DATABASE__CONN_STRING", "mongodb://db.internal:27018"),
            ("BOOKSTORE__DATABASE__SEED_IF_EMPTY", "true"),
            ("BOOKSTORE__LOGGING__LEVEL", "debug"),
        ]);
        let loaded = AppConfig::load_with("does-not-exist.toml", env).unwrap();
        assert_eq!(loaded.database.conn_string, "mongodb://db.internal:27018");
        assert!(loaded.database.seed_if_empty);
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.database.collection_name, "books");
    }

    #[test]
    fn file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("bookstore-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[database]\ndatabase_name = \"library\"\n\n[logging]\njson = true\n",
        )
        .unwrap();
        let loaded = AppConfig::load_with(path.to_str().unwrap(), env_from(&[])).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.database.database_name, "library");
        assert_eq!(loaded.database.conn_string, "mongodb://localhost:27017");
        assert!(loaded.logging.json);
    }
}
