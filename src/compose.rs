//! Compose document assembly and YAML rendering.
//!
//! The document is built once per run from the wizard answers and is the
//! only thing the tool persists. Service entries are typed structs so
//! field order (and thus key order in the emitted file) is fixed; the
//! `services` map itself keeps insertion order.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::AppError;
use crate::wizard::{DatabaseDetails, ProxyDetails};

/// Relative output path; any previous file is replaced.
pub const OUTPUT_FILE: &str = "docker-compose.yml";

const COMPOSE_VERSION: &str = "3.8";
const GATEWAY_IMAGE: &str = "guacamole/guacamole";
const DAEMON_IMAGE: &str = "guacamole/guacd";
const DATABASE_IMAGE: &str = "mysql";

const DEFAULT_DB_HOST: &str = "mysql";
const DEFAULT_DB_NAME: &str = "guacamole_db";
const DEFAULT_DB_USER: &str = "guacamole_user";
const DEFAULT_DB_PASSWORD: &str = "guacamole_password";

/// Guacamole web front-end container.
#[derive(Debug, Serialize)]
struct GatewayService {
    image: &'static str,
    ports: [&'static str; 1],
    environment: GatewayEnvironment,
    depends_on: [&'static str; 1],
}

#[derive(Debug, Serialize)]
struct GatewayEnvironment {
    #[serde(rename = "GUACD_HOSTNAME")]
    guacd_hostname: &'static str,
    #[serde(rename = "MYSQL_HOSTNAME")]
    mysql_hostname: String,
    #[serde(rename = "MYSQL_DATABASE")]
    mysql_database: String,
    #[serde(rename = "MYSQL_USER")]
    mysql_user: String,
    #[serde(rename = "MYSQL_PASSWORD")]
    mysql_password: String,
}

/// Protocol-translation daemon; always present, nothing to configure.
#[derive(Debug, Serialize)]
struct DaemonService {
    image: &'static str,
}

/// Auto-provisioned database, emitted only when the user has no existing
/// one. Its credentials are the fixed defaults the gateway points at in
/// that same branch, never anything the user typed.
#[derive(Debug, Serialize)]
struct DatabaseService {
    image: &'static str,
    environment: DatabaseEnvironment,
}

#[derive(Debug, Serialize)]
struct DatabaseEnvironment {
    #[serde(rename = "MYSQL_ROOT_PASSWORD")]
    root_password: &'static str,
    #[serde(rename = "MYSQL_DATABASE")]
    database: &'static str,
    #[serde(rename = "MYSQL_USER")]
    user: &'static str,
    #[serde(rename = "MYSQL_PASSWORD")]
    password: &'static str,
}

/// Reverse proxy container, keyed and imaged by the user-supplied type.
#[derive(Debug, Serialize)]
struct ProxyService {
    image: String,
    ports: [String; 1],
}

/// The emitted document: a version marker plus insertion-ordered services.
#[derive(Debug, Serialize)]
pub struct ComposeDocument {
    version: &'static str,
    services: Mapping,
}

impl ComposeDocument {
    /// Assemble the document. Pure; the wizard answers are the only inputs.
    ///
    /// A `None` database means the user wants the bundled one; a `None`
    /// proxy (or a cloudflare proxy) adds no service entry.
    pub fn generate(
        database: Option<&DatabaseDetails>,
        proxy: Option<&ProxyDetails>,
    ) -> Result<Self, AppError> {
        let environment = match database {
            Some(db) => GatewayEnvironment {
                guacd_hostname: "guacd",
                mysql_hostname: db.host.clone(),
                mysql_database: db.name.clone(),
                mysql_user: db.username.clone(),
                mysql_password: db.password.clone(),
            },
            None => GatewayEnvironment {
                guacd_hostname: "guacd",
                mysql_hostname: DEFAULT_DB_HOST.to_string(),
                mysql_database: DEFAULT_DB_NAME.to_string(),
                mysql_user: DEFAULT_DB_USER.to_string(),
                mysql_password: DEFAULT_DB_PASSWORD.to_string(),
            },
        };

        let mut services = Mapping::new();
        services.insert(
            Value::from("guacamole"),
            serde_yaml::to_value(GatewayService {
                image: GATEWAY_IMAGE,
                ports: ["8080:8080"],
                environment,
                depends_on: ["guacd"],
            })?,
        );
        services.insert(
            Value::from("guacd"),
            serde_yaml::to_value(DaemonService { image: DAEMON_IMAGE })?,
        );

        if database.is_none() {
            services.insert(
                Value::from("mysql"),
                serde_yaml::to_value(DatabaseService {
                    image: DATABASE_IMAGE,
                    environment: DatabaseEnvironment {
                        root_password: DEFAULT_DB_PASSWORD,
                        database: DEFAULT_DB_NAME,
                        user: DEFAULT_DB_USER,
                        password: DEFAULT_DB_PASSWORD,
                    },
                })?,
            );
        }

        if let Some(proxy) = proxy
            && !proxy.is_cloudflare()
        {
            // The key is whatever the user typed; a type of "guacamole" or
            // "guacd" replaces the fixed entry.
            let port = proxy.port.as_deref().unwrap_or_default();
            services.insert(
                Value::from(proxy.kind.clone()),
                serde_yaml::to_value(ProxyService {
                    image: proxy.kind.clone(),
                    ports: [format!("{port}:80")],
                })?,
            );
        }

        Ok(Self { version: COMPOSE_VERSION, services })
    }

    /// Render to block-style YAML with keys in insertion order.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
