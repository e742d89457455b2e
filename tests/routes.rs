use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_DISPOSITION;
use actix_web::{App, web};

use vigilio_gateway::gateway::errors::GatewayError;
use vigilio_gateway::models::config::{GatewayConfig, ServerConfig};
use vigilio_gateway::routes::cash_flows::list_cash_flows;
use vigilio_gateway::routes::funds::list_fund_types;
use vigilio_gateway::routes::{
    EXCEL_CONTENT_TYPE, error_response, excel_response, gateway_error_response,
};
use vigilio_gateway::services::ServiceError;

fn transport_error() -> GatewayError {
    GatewayError::Transport {
        code: tonic::Code::Unavailable,
        detail: "connection refused".to_string(),
    }
}

#[test]
fn validation_errors_map_to_bad_request() {
    let response = error_response(&ServiceError::Validation(
        "start_date and end_date query parameters are required".to_string(),
    ));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn transport_errors_map_to_service_unavailable() {
    let response = error_response(&ServiceError::Gateway(transport_error()));
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn configuration_errors_map_to_internal_server_error() {
    let response =
        gateway_error_response(&GatewayError::Configuration("bad CA path".to_string()));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn io_errors_map_to_internal_server_error() {
    let err = GatewayError::Io(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ));
    let response = gateway_error_response(&err);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn excel_response_sets_content_type_and_disposition() {
    let response = excel_response(vec![1, 2, 3], "shareholders_summary_1.xlsx");

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("content-type").unwrap().to_str().unwrap(),
        EXCEL_CONTENT_TYPE
    );
    assert_eq!(
        headers.get(CONTENT_DISPOSITION).unwrap().to_str().unwrap(),
        "attachment; filename=\"shareholders_summary_1.xlsx\""
    );
}

/// Config pointing at a port nothing listens on; the lazy channel means no
/// connection is attempted until a handler actually issues an RPC.
fn unreachable_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        grpc: GatewayConfig {
            host: "127.0.0.1:1".to_string(),
            secure: false,
            ca_cert: None,
        },
    }
}

#[actix_web::test]
async fn cash_flows_without_required_dates_is_a_client_error() {
    let app = actix_web::test::init_service(
        App::new()
            .service(web::scope("/api/v1/vigilio").service(list_cash_flows))
            .app_data(web::Data::new(unreachable_config())),
    )
    .await;

    let request = actix_web::test::TestRequest::get()
        .uri("/api/v1/vigilio/cash-flows?end_date=1403/08/15")
        .to_request();
    let response = actix_web::test::call_service(&app, request).await;

    // Rejected by validation before the unreachable remote is ever dialed.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn fund_types_against_unreachable_remote_is_service_unavailable() {
    let app = actix_web::test::init_service(
        App::new()
            .service(web::scope("/api/v1/vigilio").service(list_fund_types))
            .app_data(web::Data::new(unreachable_config())),
    )
    .await;

    let request = actix_web::test::TestRequest::get()
        .uri("/api/v1/vigilio/fund-types")
        .to_request();
    let response = actix_web::test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
