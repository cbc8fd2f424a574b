//! Interactive wizard collecting the deployment choices.
//!
//! Two yes/no questions, each gating a short fixed sequence of detail
//! prompts. Nothing the user types is validated beyond the prompt loop's
//! required/optional rules.

use std::io::{BufRead, Write};

use crate::error::AppError;
use crate::prompt::{read_optional, read_required, read_yes_no};

/// Connection parameters for an existing database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseDetails {
    pub host: String,
    /// Kept as free text, never parsed.
    pub port: String,
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Reverse proxy selection.
///
/// `host` and `port` are genuinely absent (not empty strings) when the
/// proxy is cloudflare, which runs outside the compose file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyDetails {
    pub kind: String,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl ProxyDetails {
    pub fn is_cloudflare(&self) -> bool {
        self.kind.to_lowercase() == "cloudflare"
    }
}

/// Everything one wizard run collects. A `None` record means the user
/// answered "no" to the corresponding question.
#[derive(Debug, Clone)]
pub struct DeploymentChoices {
    pub database: Option<DatabaseDetails>,
    pub proxy: Option<ProxyDetails>,
}

/// Ask for existing-database connection parameters, all required, in a
/// fixed order.
pub fn collect_database_details<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<DatabaseDetails, AppError> {
    let host = read_required(input, output, "Enter the database host address: ")?;
    let port = read_required(input, output, "Enter the database port: ")?;
    let username = read_required(input, output, "Enter the database username: ")?;
    let password = read_required(input, output, "Enter the database password: ")?;
    let name = read_required(input, output, "Enter the database name: ")?;
    Ok(DatabaseDetails { host, port, username, password, name })
}

/// Ask for the reverse proxy type and, unless it is cloudflare, its host
/// and port (both optional, empty answers accepted).
pub fn collect_proxy_details<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ProxyDetails, AppError> {
    let kind = read_required(
        input,
        output,
        "Enter the type of reverse proxy (e.g., 'nginx', 'traefik', 'cloudflare'): ",
    )?;
    let (host, port) = if kind.to_lowercase() != "cloudflare" {
        let host = read_optional(input, output, "Enter the proxy host address: ")?;
        let port = read_optional(input, output, "Enter the proxy port: ")?;
        (Some(host), Some(port))
    } else {
        (None, None)
    };
    Ok(ProxyDetails { kind, host, port })
}

/// Run the full question sequence in its fixed order.
pub fn run_wizard<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<DeploymentChoices, AppError> {
    let use_db =
        read_yes_no(input, output, "Do you have an existing RDBMS system for Guacamole? (yes/no)")?;
    let database = if use_db { Some(collect_database_details(input, output)?) } else { None };

    let use_proxy =
        read_yes_no(input, output, "Do you want to proxy the Guacamole web service? (yes/no)")?;
    let proxy = if use_proxy { Some(collect_proxy_details(input, output)?) } else { None };

    Ok(DeploymentChoices { database, proxy })
}
