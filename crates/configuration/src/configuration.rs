//! Runtime configuration.

use std::path::Path;

use query_engine_metadata::metadata::{self, placeholder_count};

use crate::error::{LoadConfigurationError, MakeRuntimeConfigurationError};
use crate::version1::{self, ParsedConfiguration, CONFIGURATION_FILENAME};

/// The 'Configuration' type collects all the information necessary to compile
/// requests at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which checks that the naming templates can
/// be filled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
}

/// Validate a parsed configuration and turn it into a runtime configuration.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let naming = &parsed_config.metadata.naming;
    check_template("tableFormat", &naming.table_format, 1)?;
    check_template("joinTableFormat", &naming.join_table_format, 2)?;
    check_template("joinIdFormat", &naming.join_id_format, 1)?;
    if naming.id_column.trim().is_empty() {
        return Err(MakeRuntimeConfigurationError::EmptyIdColumn);
    }
    Ok(Configuration {
        metadata: parsed_config.metadata,
    })
}

fn check_template(
    field: &'static str,
    template: &str,
    expected: usize,
) -> Result<(), MakeRuntimeConfigurationError> {
    let found = placeholder_count(template);
    if found == expected {
        Ok(())
    } else {
        Err(MakeRuntimeConfigurationError::InvalidTemplate {
            field,
            template: template.to_string(),
            expected,
            found,
        })
    }
}

/// Load the runtime configuration from a directory. A directory without a
/// configuration file yields the defaults.
pub async fn load_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<Configuration, LoadConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);
    if !tokio::fs::try_exists(&configuration_file)
        .await
        .map_err(crate::error::ParseConfigurationError::IoError)?
    {
        tracing::info!(
            path = %configuration_file.display(),
            "no configuration file found, using defaults"
        );
        return Ok(Configuration::default());
    }
    let parsed_config = version1::parse_configuration(configuration_dir).await?;
    Ok(make_runtime_configuration(parsed_config)?)
}
