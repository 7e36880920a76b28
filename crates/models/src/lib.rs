//! The request model accepted by the query compiler.
//!
//! A request names a target domain, an operation, and a set of filter
//! conditions whose keys encode both a column and an operator suffix.

pub mod request;
pub mod value;

pub use request::{DomainRoute, PageQuery, QueryRequest};
pub use value::{Mapping, Row, Scalar, Value};
