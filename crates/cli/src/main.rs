use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use doytoql_cli::{run, Command};

#[derive(Debug, Parser)]
#[command(name = "doytoql", version, about = "Compile DoytoQL requests into parameterized SQL")]
struct Cli {
    /// The directory holding configuration.json.
    #[arg(long, env = "DOYTOQL_CONTEXT_PATH", value_name = "DIR", default_value = ".")]
    context_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
pub async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match run(cli.command, &cli.context_path, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
