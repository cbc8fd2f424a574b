use clap::Parser;
use guacgen::AppError;

#[derive(Parser)]
#[command(name = "guacgen")]
#[command(version)]
#[command(
    about = "Generate a docker-compose.yml for an Apache Guacamole deployment",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let result: Result<(), AppError> = guacgen::run();
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
