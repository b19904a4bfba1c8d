use std::borrow::Cow;

use notes_core::control::ControlError;
use notes_core::store::StoreError;
use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_err(err: ControlError) -> ErrorData {
    match err {
        ControlError::InvalidInput(message)
        | ControlError::Store(StoreError::InvalidInput(message)) => {
            mcp_err(ErrorCode::INVALID_PARAMS, message)
        }
        ControlError::Store(err @ StoreError::NotFound(_)) => {
            mcp_err(ErrorCode::RESOURCE_NOT_FOUND, err.to_string())
        }
        ControlError::Parse(err) if err.is_unsupported() => {
            mcp_err(ErrorCode::INVALID_PARAMS, err.to_string())
        }
        ControlError::Parse(err) => mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("Failed to process file: {err}"),
        ),
        ControlError::Sink(err) => mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("Failed to update database: {err}"),
        ),
    }
}
