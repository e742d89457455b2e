use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::gateway::grpc::GrpcGateway;
use crate::models::config::ServerConfig;
use crate::routes::{error_response, gateway_error_response};
use crate::services::funds;

#[get("/fund-types")]
pub async fn list_fund_types(server_config: web::Data<ServerConfig>) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match funds::list_fund_types(&gateway).await {
        Ok(fund_types) => HttpResponse::Ok().json(fund_types),
        Err(e) => error_response(&e),
    }
}

#[get("/funds/{fund_id}/nav_trend")]
pub async fn nav_trend(
    fund_id: web::Path<i32>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match funds::nav_trend(&gateway, fund_id.into_inner()).await {
        Ok(trend) => HttpResponse::Ok().json(trend),
        Err(e) => error_response(&e),
    }
}

#[get("/funds/{fund_id}/splits")]
pub async fn splits(
    fund_id: web::Path<i32>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match funds::splits(&gateway, fund_id.into_inner()).await {
        Ok(splits) => HttpResponse::Ok().json(splits),
        Err(e) => error_response(&e),
    }
}

#[get("/funds/{fund_id}/profits")]
pub async fn profits(
    fund_id: web::Path<i32>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match funds::profits(&gateway, fund_id.into_inner()).await {
        Ok(profits) => HttpResponse::Ok().json(profits),
        Err(e) => error_response(&e),
    }
}

#[get("/funds/{fund_id}/prices")]
pub async fn prices(
    fund_id: web::Path<i32>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match funds::prices(&gateway, fund_id.into_inner()).await {
        Ok(prices) => HttpResponse::Ok().json(prices),
        Err(e) => error_response(&e),
    }
}
