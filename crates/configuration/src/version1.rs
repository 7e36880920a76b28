//! The version 1 configuration format.

use std::path::Path;

use query_engine_metadata::metadata;
use schemars::{schema::RootSchema, JsonSchema};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};

pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub enum Version {
    #[serde(rename = "1")]
    #[default]
    This,
}

/// The contents of `configuration.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Which version of the configuration format are we using.
    pub version: Version,
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Naming conventions and paging defaults.
    #[serde(default)]
    pub metadata: metadata::Metadata,
}

impl ParsedConfiguration {
    /// The configuration written by `initialize`: every setting at its default.
    pub fn initial() -> Self {
        ParsedConfiguration {
            version: Version::This,
            schema: Some(CONFIGURATION_JSONSCHEMA_FILENAME.to_string()),
            metadata: metadata::Metadata::empty(),
        }
    }
}

/// The JSON schema of `configuration.json`.
pub fn configuration_schema() -> RootSchema {
    schemars::schema_for!(ParsedConfiguration)
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    tracing::debug!(
        path = %configuration_file.display(),
        "parsed configuration"
    );
    Ok(parsed_config)
}

/// Write the parsed configuration and its JSON schema into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = configuration_schema();
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
