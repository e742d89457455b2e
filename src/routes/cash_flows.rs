use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::gateway::grpc::GrpcGateway;
use crate::models::config::ServerConfig;
use crate::routes::{error_response, gateway_error_response};
use crate::services::cash_flows::{self, DetailParams, ListParams};

#[get("/cash-flows")]
pub async fn list_cash_flows(
    params: web::Query<ListParams>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match cash_flows::list_cash_flows(&gateway, params.into_inner()).await {
        Ok(cash_flows) => HttpResponse::Ok().json(cash_flows),
        Err(e) => error_response(&e),
    }
}

#[get("/cash-flows/{fund_id}/detail")]
pub async fn cash_flow_detail(
    fund_id: web::Path<i32>,
    params: web::Query<DetailParams>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match cash_flows::cash_flow_detail(&gateway, fund_id.into_inner(), params.into_inner()).await
    {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => error_response(&e),
    }
}
