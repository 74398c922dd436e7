use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub templates_dir: String,
    pub static_dir: String,
    // JSON seed file; the built-in sample data is used when unset
    pub seed_file: Option<String>,
    pub recent_activity_limit: usize,
    pub notification_limit: usize,
    pub earnings_months: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    pub max_body_size: usize,  // in bytes
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 3000,
            },
            dashboard: DashboardConfig {
                templates_dir: "templates".into(),
                static_dir: "static".into(),
                seed_file: None,
                recent_activity_limit: 5,
                notification_limit: 3,
                earnings_months: 6,
            },
            form: FormConfig {
                max_body_size: 64 * 1024,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_matches_defaults() {
        let loaded = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .build()
            .and_then(|c| c.try_deserialize::<Config>())
            .unwrap();
        let defaults = Config::default();

        assert_eq!(loaded.server.port, defaults.server.port);
        assert_eq!(loaded.dashboard.templates_dir, defaults.dashboard.templates_dir);
        assert_eq!(loaded.dashboard.recent_activity_limit, 5);
        assert_eq!(loaded.dashboard.notification_limit, 3);
        assert_eq!(loaded.dashboard.earnings_months, 6);
        assert!(loaded.dashboard.seed_file.is_none());
    }
}
