use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::gateway::grpc::GrpcGateway;
use crate::models::config::ServerConfig;
use crate::routes::{error_response, gateway_error_response};
use crate::services::returns::{self, EtfParams, TotalParams};

#[get("/total-returns")]
pub async fn list_total_returns(
    params: web::Query<TotalParams>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match returns::list_total_returns(&gateway, params.into_inner()).await {
        Ok(returns) => HttpResponse::Ok().json(returns),
        Err(e) => error_response(&e),
    }
}

#[get("/etf-returns")]
pub async fn list_etf_returns(
    params: web::Query<EtfParams>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match returns::list_etf_returns(&gateway, params.into_inner()).await {
        Ok(returns) => HttpResponse::Ok().json(returns),
        Err(e) => error_response(&e),
    }
}
