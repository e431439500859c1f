use crate::domain::ApiStatus;
use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// JSON error reply for the API routes: `{"status": "error", "message": ...}` with the
/// HTTP status matching the error.
pub fn json_error_response(err: &ServerError) -> Response {
    let body = serde_json::to_string(&ApiStatus::error(err.to_string()))
        .unwrap_or_else(|_| r#"{"status":"error"}"#.to_string());

    ResponseBuilder::new()
        .status(err.status_code())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
