//! Process configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, configuration files and environment
//! variables. The binary accepts no command-line flags, so settings are
//! loaded from the program name alone.

use std::ffi::OsString;
use std::fmt;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DB_HOST: &str = "mongodb-service";
const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Program name handed to the loaders in place of real arguments.
const PROGRAM_NAME: &str = "users-backend";

/// Document store connection values (`DB_USER`, `DB_PASS`, `DB_HOST`,
/// `DB_PORT`, `DB_NAME`).
///
/// Presence is not checked here; the connection bootstrap reports missing
/// values when it builds the connection string.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    /// User name used to authenticate against the `admin` database.
    pub user: Option<String>,
    /// Password for [`DatabaseSettings::user`].
    pub pass: Option<String>,
    /// Store hostname.
    pub host: Option<String>,
    /// Store port.
    #[ortho_config(default = 27017)]
    pub port: u16,
    /// Database holding the `users` collection.
    pub name: Option<String>,
}

impl DatabaseSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    /// Returns the loader's message when a value cannot be parsed.
    pub fn load_from_env() -> Result<Self, String> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| err.to_string())
    }

    /// Return the configured host, falling back to the internal service name.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_DB_HOST)
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .finish()
    }
}

/// HTTP listener settings (`SERVER_HOST`, `SERVER_PORT`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SERVER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
}

impl ServerSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    /// Returns the loader's message when a value cannot be parsed.
    pub fn load_from_env() -> Result<Self, String> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| err.to_string())
    }

    /// Address the listener binds to.
    pub fn bind_addr(&self) -> (String, u16) {
        let host = self.host.as_deref().unwrap_or(DEFAULT_SERVER_HOST);
        (host.to_owned(), self.port)
    }
}
