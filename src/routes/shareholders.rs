use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::gateway::grpc::GrpcGateway;
use crate::models::config::ServerConfig;
use crate::routes::{error_response, excel_response, gateway_error_response};
use crate::services::shareholders::{
    self, DetailParams, ForDateParams, ListParams, SummaryExcelParams, SummaryParams,
};

#[get("/shareholders")]
pub async fn list_shareholders(
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

    match shareholders::list_shareholders(&gateway, params.into_inner()).await {
        Ok(shareholders) => HttpResponse::Ok().json(shareholders),
        Err(e) => error_response(&e),
    }
}

#[get("/shareholders/summary")]
pub async fn shareholders_summary(
    params: web::Query<SummaryParams>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match shareholders::shareholders_summary(&gateway, params.into_inner()).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => error_response(&e),
    }
}

#[get("/shareholders/summary_excel")]
pub async fn shareholders_summary_excel(
    params: web::Query<SummaryExcelParams>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    // Label for the download filename; validation happens in the service.
    let fund_type = params.fund_type.clone().unwrap_or_default();

    match shareholders::shareholders_summary_excel(&gateway, params.into_inner()).await {
        Ok(payload) => excel_response(
            payload.bytes,
            &format!("shareholders_summary_{}.xlsx", fund_type.trim()),
        ),
        Err(e) => error_response(&e),
    }
}

#[get("/shareholders/{shareholder_id}")]
pub async fn shareholder_detail(
    shareholder_id: web::Path<i32>,
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

    match shareholders::shareholder_detail(
        &gateway,
        shareholder_id.into_inner(),
        params.into_inner(),
    )
    .await
    {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => error_response(&e),
    }
}

#[get("/shareholders/{shareholder_id}/for_date")]
pub async fn shareholder_for_date(
    shareholder_id: web::Path<i32>,
    params: web::Query<ForDateParams>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let gateway = match GrpcGateway::connect(&server_config.grpc) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to open gateway channel: {e}");
            return gateway_error_response(&e);
        }
    };

    match shareholders::shareholder_for_date(
        &gateway,
        shareholder_id.into_inner(),
        params.into_inner(),
    )
    .await
    {
        Ok(shareholder) => HttpResponse::Ok().json(shareholder),
        Err(e) => error_response(&e),
    }
}

#[get("/shareholders/{shareholder_id}/excel")]
pub async fn shareholder_excel(
    shareholder_id: web::Path<i32>,
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

    let shareholder_id = shareholder_id.into_inner();

    match shareholders::shareholder_excel(&gateway, shareholder_id, params.into_inner()).await {
        Ok(payload) => excel_response(
            payload.bytes,
            &format!("shareholder_{shareholder_id}.xlsx"),
        ),
        Err(e) => error_response(&e),
    }
}
