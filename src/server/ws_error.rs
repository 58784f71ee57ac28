/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Every error carries a code, a message and an optional context, so clients
/// can handle them the same way on both transports.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_COMMAND").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. viewer_id, game_id).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    })
    .to_string()
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_error_message_escapes_text() {
        let text = ws_error_message("INVALID_COMMAND", "bad \"quote\"", Some("viewer-1"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["action"], "Error");
        assert_eq!(value["data"]["code"], "INVALID_COMMAND");
        assert_eq!(value["data"]["message"], "bad \"quote\"");
        assert_eq!(value["data"]["context"], "viewer-1");
    }

    #[test]
    fn test_http_error_response_status() {
        let response = http_error_response("GAME_STOPPED", "stopped", None, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
