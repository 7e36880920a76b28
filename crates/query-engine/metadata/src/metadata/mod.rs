//! Metadata information regarding naming conventions and paging defaults.

pub mod naming;
pub mod paging;

// re-export without modules
pub use naming::*;
pub use paging::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub naming: NamingConvention,
    #[serde(default)]
    pub paging: PagingSettings,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            naming: NamingConvention::default(),
            paging: PagingSettings::default(),
        }
    }
}
