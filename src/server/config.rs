use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
static DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// - `DATABASE_URL` - defaults to a SQLite file under `/tmp`
    /// - `PORT` - defaults to 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
