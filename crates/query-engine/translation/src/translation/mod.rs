//! Translate the incoming QueryRequest to an ExecutionPlan (SQL) to be run against the database.

pub mod error;
pub mod query;
