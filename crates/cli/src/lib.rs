//! The doytoql command line: initialize a configuration directory, or compile
//! a request and print the statements it produces.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use doytoql_configuration as configuration;
use doytoql_models::QueryRequest;
use query_engine_sql::sql;
use query_engine_translation::translation;

/// The commands understood by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write a default configuration and its JSON schema into the context directory.
    Initialize,
    /// Compile a request into SQL and print each statement with its arguments.
    Compile {
        /// Read the request from this file instead of standard input.
        #[arg(long, value_name = "FILE")]
        request: Option<PathBuf>,
        /// Format the SQL over several lines.
        #[arg(long)]
        pretty: bool,
    },
}

/// Run a command against the configuration found in `context_path`,
/// printing results to `output`.
pub async fn run(
    command: Command,
    context_path: &Path,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Initialize => initialize(context_path).await,
        Command::Compile { request, pretty } => {
            let request = match request {
                Some(path) => tokio::fs::read_to_string(&path).await.map_err(|err| {
                    anyhow::anyhow!("unable to read {}: {err}", path.display())
                })?,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            compile(context_path, &request, pretty, output).await
        }
    }
}

/// Write the initial configuration. An existing configuration is never
/// overwritten.
async fn initialize(context_path: &Path) -> anyhow::Result<()> {
    let configuration_file = context_path.join(configuration::CONFIGURATION_FILENAME);
    if tokio::fs::try_exists(&configuration_file).await? {
        anyhow::bail!(
            "a configuration already exists at {}",
            configuration_file.display()
        );
    }
    configuration::write_parsed_configuration(
        configuration::ParsedConfiguration::initial(),
        context_path,
    )
    .await?;
    tracing::info!(path = %context_path.display(), "configuration initialized");
    Ok(())
}

/// Compile a JSON request and print every statement of the plan, each
/// followed by its arguments as a JSON array.
pub async fn compile(
    context_path: &Path,
    request: &str,
    pretty: bool,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let configuration = configuration::load_configuration(context_path).await?;
    let request: QueryRequest = serde_json::from_str(request)?;

    let plan = translation::query::translate(&configuration.metadata, &request)
        .map_err(|err| anyhow::anyhow!("{} ({}): {err}", err.name(), err.code()))?;

    for statement in plan.statement.statements() {
        writeln!(output, "{}", render(statement, pretty))?;
        writeln!(output, "{}", serde_json::to_string(&statement.args)?)?;
    }
    Ok(())
}

fn render(statement: &sql::string::SqlAndArgs, pretty: bool) -> String {
    if pretty {
        sqlformat::format(
            &statement.sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default(),
        )
    } else {
        statement.sql.clone()
    }
}
