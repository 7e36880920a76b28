//! Running compiled statements through a database executor.

pub mod error;
pub mod execution;
pub mod executor;
pub mod metrics;
pub mod response;
