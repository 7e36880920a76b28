pub mod configuration;
pub mod error;
pub mod version1;

pub use configuration::{load_configuration, make_runtime_configuration, Configuration};
pub use version1::{
    configuration_schema, parse_configuration, write_parsed_configuration, ParsedConfiguration,
    Version, CONFIGURATION_FILENAME, CONFIGURATION_JSONSCHEMA_FILENAME,
};
