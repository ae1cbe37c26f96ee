//! Connection settings.

use serde::Deserialize;

/// Environment variable consulted by [`DbConfig::from_env_or`].
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// How to open the standards database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// SQLite URL, e.g. `sqlite://standards.db` or `sqlite::memory:`.
    pub database_url: String,
    /// Create the database file when it does not exist yet.
    pub create_if_missing: bool,
    /// Enforce declared `FOREIGN KEY` constraints. Off by default: bulk
    /// loads are free to insert children before their tag rows.
    pub foreign_keys: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_owned(),
            create_if_missing: true,
            foreign_keys: false,
        }
    }
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Reads `DATABASE_URL`, falling back to `fallback_url` when it is unset.
    pub fn from_env_or(fallback_url: &str) -> Self {
        let url = std::env::var(DATABASE_URL_ENV).unwrap_or_else(|_| fallback_url.to_owned());
        Self::new(url)
    }

    pub fn with_foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }
}
