//! HTTP route handlers for the Vigilio gateway API.
//!
//! Handlers extract query and path parameters, open a per-request gateway,
//! delegate to [`crate::services`] and serialize the result. They perform no
//! business logic beyond parameter validation and shape translation.

use actix_web::HttpResponse;
use actix_web::http::header::CONTENT_DISPOSITION;
use serde_json::json;

use crate::gateway::errors::GatewayError;
use crate::services::ServiceError;

pub mod cash_flows;
pub mod funds;
pub mod returns;
pub mod shareholders;

pub const EXCEL_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Maps a service failure onto the HTTP surface: validation failures are the
/// caller's fault, transport failures mean the remote service is unavailable,
/// anything else is an internal error.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(msg) => HttpResponse::BadRequest().json(json!({ "error": msg })),
        ServiceError::Gateway(err) => gateway_error_response(err),
    }
}

pub fn gateway_error_response(err: &GatewayError) -> HttpResponse {
    match err {
        GatewayError::Transport { code, detail } => HttpResponse::ServiceUnavailable()
            .json(json!({ "error": format!("gRPC error: {code:?} - {detail}") })),
        other => HttpResponse::InternalServerError().json(json!({ "error": other.to_string() })),
    }
}

/// Builds a spreadsheet download response with an attachment filename.
pub fn excel_response(bytes: Vec<u8>, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(EXCEL_CONTENT_TYPE)
        .insert_header((
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes)
}
