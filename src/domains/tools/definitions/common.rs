//! Common utilities shared across the transit tools.
//!
//! Result-envelope helpers and direction-flag validation live here so the
//! individual tool definitions stay thin.

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::transit::{Direction, TransitError};

/// Render a decoded upstream value as the tool's single text item.
///
/// The serialization is pretty-printed and deterministic: the same decoded
/// value always yields byte-identical text.
pub fn pretty_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Wrap free-form text (the notice body) as a result, unmodified.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Turn an upstream failure into the tool's error result. The status and
/// status text ride along in the message; nothing is retried.
pub fn upstream_error_result(err: &TransitError) -> CallToolResult {
    let message = err.to_string();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Validate a direction flag before any network I/O happens.
pub fn parse_direction(flag: u8) -> Result<Direction, McpError> {
    Direction::from_flag(flag).ok_or_else(|| {
        McpError::invalid_params(
            format!("direction must be 1 (main) or 2 (return), got {}", flag),
            None,
        )
    })
}

/// Extract the single text item from a result, for assertions.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_result_is_deterministic() {
        let value = vec!["陈瑶湖镇".to_string(), "陈店".to_string()];
        let a = pretty_result(&value).unwrap();
        let b = pretty_result(&value).unwrap();
        assert_eq!(result_text(&a), result_text(&b));
        assert_eq!(
            result_text(&a),
            serde_json::to_string_pretty(&value).unwrap()
        );
    }

    #[test]
    fn test_upstream_error_result_carries_status() {
        let err = TransitError::RequestFailed {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        let result = upstream_error_result(&err);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("500 Internal Server Error"));
    }

    #[test]
    fn test_parse_direction_accepts_domain() {
        assert_eq!(parse_direction(1).unwrap(), Direction::Main);
        assert_eq!(parse_direction(2).unwrap(), Direction::Sub);
    }

    #[test]
    fn test_parse_direction_rejects_out_of_range() {
        assert!(parse_direction(0).is_err());
        assert!(parse_direction(3).is_err());
    }
}
