//! Errors for query translation.

use thiserror::Error;

/// A type for translation errors.
///
/// Every error is a problem with the shape of the request. Nothing is
/// retried and no SQL is produced once one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Operation is required.")]
    MissingOperation,
    #[error("Domain is required.")]
    MissingDomain,
    #[error("Operation '{0}' is not supported.")]
    UnsupportedOperation(String),
    #[error("Value of the OR filter '{key}' should be an object.")]
    InvalidFilterShape { key: String },
    #[error("OR filter '{key}' should contain at least one condition.")]
    EmptyOrGroup { key: String },
    #[error("Filter '{key}' should contain at least one value.")]
    EmptyInList { key: String },
    #[error("Value of '{key}' should be {expected}.")]
    UnexpectedValue { key: String, expected: &'static str },
    #[error("Data should not be null.")]
    DataRequired,
    #[error("Data should not be empty.")]
    DataEmpty,
    #[error("Data should contain at least one field.")]
    NoUpdateFields,
    #[error("Row {row} should contain at least one field.")]
    EmptyRow { row: usize },
    #[error("Row {row} should contain the same fields as the first row.")]
    InconsistentRow { row: usize },
    #[error("Domain route should contain at least two domains.")]
    RouteTooShort,
    #[error("Domain route filters '{first}' and '{second}' both target domain '{domain}'.")]
    AmbiguousRouteFilter {
        domain: String,
        first: String,
        second: String,
    },
    #[error("Sort '{0}' is invalid.")]
    InvalidSort(String),
    #[error("Page size should be greater than zero.")]
    InvalidPageSize,
    #[error("'{0}' is not a valid identifier.")]
    InvalidIdentifier(String),
}

impl Error {
    /// A stable machine-readable code for the error kind.
    pub fn code(&self) -> u32 {
        match self {
            Error::DataRequired => 1000,
            Error::DataEmpty => 1001,
            Error::NoUpdateFields => 1002,
            Error::InvalidFilterShape { .. } => 1003,
            Error::EmptyOrGroup { .. } => 1004,
            Error::MissingOperation => 1005,
            Error::MissingDomain => 1006,
            Error::UnsupportedOperation(_) => 1007,
            Error::EmptyInList { .. } => 1008,
            Error::UnexpectedValue { .. } => 1009,
            Error::EmptyRow { .. } => 1010,
            Error::InconsistentRow { .. } => 1011,
            Error::RouteTooShort => 1012,
            Error::AmbiguousRouteFilter { .. } => 1013,
            Error::InvalidSort(_) => 1014,
            Error::InvalidPageSize => 1015,
            Error::InvalidIdentifier(_) => 1016,
        }
    }

    /// A stable name for the error kind.
    pub fn name(&self) -> &'static str {
        match self {
            Error::DataRequired => "DATA_SHOULD_NOT_BE_NULL",
            Error::DataEmpty => "DATA_SHOULD_NOT_BE_EMPTY",
            Error::NoUpdateFields => "DATA_SHOULD_CONTAIN_AT_LEAST_ONE_FIELD",
            Error::InvalidFilterShape { .. } => "TYPE_OF_OR_FILTER_SHOULD_BE_OBJECT",
            Error::EmptyOrGroup { .. } => "OR_FILTER_SHOULD_CONTAIN_AT_LEAST_ONE_CONDITION",
            Error::MissingOperation => "OPERATION_SHOULD_NOT_BE_EMPTY",
            Error::MissingDomain => "DOMAIN_SHOULD_NOT_BE_EMPTY",
            Error::UnsupportedOperation(_) => "UNSUPPORTED_OPERATION",
            Error::EmptyInList { .. } => "IN_FILTER_SHOULD_CONTAIN_AT_LEAST_ONE_VALUE",
            Error::UnexpectedValue { .. } => "UNEXPECTED_VALUE",
            Error::EmptyRow { .. } => "ROW_SHOULD_CONTAIN_AT_LEAST_ONE_FIELD",
            Error::InconsistentRow { .. } => "ROWS_SHOULD_CONTAIN_THE_SAME_FIELDS",
            Error::RouteTooShort => "DOMAIN_ROUTE_SHOULD_CONTAIN_AT_LEAST_TWO_DOMAINS",
            Error::AmbiguousRouteFilter { .. } => "AMBIGUOUS_DOMAIN_ROUTE_FILTER",
            Error::InvalidSort(_) => "INVALID_SORT",
            Error::InvalidPageSize => "INVALID_PAGE_SIZE",
            Error::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
        }
    }
}
