//! guacgen: interactive docker-compose generator for Apache Guacamole.
//!
//! Asks a short series of questions (existing database? reverse proxy?)
//! and writes `docker-compose.yml` to the current directory, replacing any
//! previous file.

pub mod compose;
pub mod error;
pub mod prompt;
pub mod wizard;

use std::fs;
use std::io::{self, Write};

pub use compose::ComposeDocument;
pub use error::AppError;
pub use wizard::{DatabaseDetails, DeploymentChoices, ProxyDetails};

/// Run the wizard on stdin/stdout and write the generated compose file.
pub fn run() -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let choices = wizard::run_wizard(&mut input, &mut output)?;
    let document = ComposeDocument::generate(choices.database.as_ref(), choices.proxy.as_ref())?;
    fs::write(compose::OUTPUT_FILE, document.to_yaml()?)?;

    writeln!(output, "✅ Generated docker-compose.yml")?;
    Ok(())
}
