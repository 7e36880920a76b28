//! Paging defaults.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How page requests are turned into LIMIT/OFFSET values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagingSettings {
    /// Page size used when a page request does not carry one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Whether the first page is numbered 1 (otherwise 0).
    #[serde(default = "default_start_page_number_from_one")]
    pub start_page_number_from_one: bool,
}

fn default_page_size() -> u32 {
    10
}

fn default_start_page_number_from_one() -> bool {
    true
}

impl Default for PagingSettings {
    fn default() -> Self {
        PagingSettings {
            default_page_size: default_page_size(),
            start_page_number_from_one: default_start_page_number_from_one(),
        }
    }
}

impl PagingSettings {
    /// Number of rows to skip to reach `page_number`. A missing page number
    /// means the first page.
    pub fn offset(&self, page_number: Option<u32>, page_size: u32) -> u64 {
        let index = match page_number {
            None => 0,
            Some(number) if self.start_page_number_from_one => number.saturating_sub(1),
            Some(number) => number,
        };
        u64::from(index) * u64::from(page_size)
    }
}
