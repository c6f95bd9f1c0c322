use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Error;

const ENV_PREFIX: &str = "MOVIES_";

// `Env` parses values, so `2024` would arrive as an integer. These keys take the raw text.
const TEXT_KEYS: [&str; 6] = [
    "database.host",
    "database.name",
    "database.user",
    "database.password",
    "cors.development_origin",
    "cors.production_origin",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3001,
        }
    }
}

impl Server {
    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: Option<String>,
    pub max_connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "rc_test".to_string(),
            user: "postgres".to_string(),
            password: None,
            max_connections: 5,
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Cors {
    pub development_origin: String,
    pub production_origin: Option<String>,
}

impl Default for Cors {
    fn default() -> Self {
        Self {
            development_origin: "http://localhost:3000".to_string(),
            production_origin: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,
    pub server: Server,
    pub database: Database,
    pub cors: Cors,
}

impl Config {
    /// Defaults overridden by `MOVIES_*` environment variables, nested keys split on `__`.
    pub fn figment() -> Figment {
        let env = Env::prefixed(ENV_PREFIX).split("__");
        let text = env.clone().only(&TEXT_KEYS);

        text.iter().fold(
            Figment::from(Serialized::defaults(Config::default())).merge(env.ignore(&TEXT_KEYS)),
            |figment, (key, value)| figment.merge(Serialized::default(key.as_str(), value)),
        )
    }

    pub fn load() -> Result<Self, Error> {
        Ok(Self::figment().extract()?)
    }

    /// The single origin allowed to make cross-origin requests in the current mode.
    pub fn allowed_origin(&self) -> Result<HeaderValue, Error> {
        let origin = match self.mode {
            Mode::Development => self.cors.development_origin.as_str(),
            Mode::Production => self.cors.production_origin.as_deref().ok_or_else(|| {
                Error::Config("cors.production_origin is required in production mode".to_string())
            })?,
        };
        HeaderValue::from_str(origin)
            .map_err(|_| Error::Config(format!("invalid allowed origin `{origin}`")))
    }
}
