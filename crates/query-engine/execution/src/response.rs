//! The response envelope returned to callers.

use serde::Serialize;

use crate::error::Error;
use crate::execution::ExecutionResult;

/// `{"success": true, "data": ...}` or
/// `{"success": false, "code": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success {
        success: bool,
        data: ExecutionResult,
    },
    Failure {
        success: bool,
        code: u32,
        message: String,
    },
}

impl Response {
    pub fn success(data: ExecutionResult) -> Self {
        Response::Success {
            success: true,
            data,
        }
    }

    pub fn failure(err: &Error) -> Self {
        Response::Failure {
            success: false,
            code: err.code(),
            message: err.to_string(),
        }
    }
}
