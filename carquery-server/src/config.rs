//! Database connection settings
//!
//! Defaults match the local development database; the CLI layers flags
//! and environment variables on top.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Connection settings for the cars database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Session time zone (`SET TimeZone`)
    pub timezone: String,
    /// Full connection string; takes precedence over the individual parts
    pub url: Option<String>,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "sqlbuilderuser".to_string(),
            password: "password".to_string(),
            database: "sqlbuildertest".to_string(),
            timezone: "Asia/Jakarta".to_string(),
            url: None,
        }
    }
}

impl DbSettings {
    /// Build sqlx connect options.
    ///
    /// When `url` is set it is parsed as-is and only the time zone is
    /// added; otherwise options are assembled from the parts with TLS
    /// disabled.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => url.parse::<PgConnectOptions>()?,
            None => PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)
                .ssl_mode(PgSslMode::Disable),
        };

        Ok(options.options([("TimeZone", self.timezone.as_str())]))
    }

    /// Connection target without credentials, for logging.
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database),
        }
    }
}
