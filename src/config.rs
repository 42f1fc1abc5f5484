use serde::Deserialize;

/// Output format of the log subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub web_host: String,
    pub web_port: u16,
    pub static_dir: String,
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_source(config::Environment::default().try_parsing(true))
    }

    pub fn from_source<S>(source: S) -> crate::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .set_default("web_host", "0.0.0.0")?
            .set_default("web_port", 5005)?
            .set_default("static_dir", "public")?
            .set_default("db_max_connections", 10)?
            .set_default("log_format", "pretty")?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn web_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::default()
            .source(Some(map))
            .try_parsing(true)
    }

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_source(env(&[("DATABASE_URL", "postgres://localhost/picpost")]))
            .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/picpost");
        assert_eq!(config.web_addr(), "0.0.0.0:5005");
        assert_eq!(config.static_dir, "public");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_source(env(&[
            ("DATABASE_URL", "postgres://db/picpost"),
            ("WEB_HOST", "127.0.0.1"),
            ("WEB_PORT", "8080"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.web_addr(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_database_url() {
        let result = Config::from_source(env(&[("WEB_PORT", "8080")]));

        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_source(env(&[
            ("DATABASE_URL", "postgres://db/picpost"),
            ("WEB_PORT", "not-a-port"),
        ]));

        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
