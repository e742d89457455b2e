use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::routes::cash_flows::{cash_flow_detail, list_cash_flows};
use crate::routes::funds::{list_fund_types, nav_trend, prices, profits, splits};
use crate::routes::returns::{list_etf_returns, list_total_returns};
use crate::routes::shareholders::{
    list_shareholders, shareholder_detail, shareholder_excel, shareholder_for_date,
    shareholders_summary, shareholders_summary_excel,
};

pub mod domain;
pub mod gateway;
pub mod models;
pub mod pb;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
///
/// The server itself is stateless: every request that reaches a handler opens
/// its own gateway channel and drops it before responding, so no shared state
/// exists across concurrent requests.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting Vigilio gateway on {}:{} (remote {})",
        server_config.address,
        server_config.port,
        server_config.grpc.host
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/v1/vigilio")
                    .service(list_fund_types)
                    // Literal shareholder paths must register before the
                    // `{shareholder_id}` matchers.
                    .service(shareholders_summary)
                    .service(shareholders_summary_excel)
                    .service(list_shareholders)
                    .service(shareholder_for_date)
                    .service(shareholder_excel)
                    .service(shareholder_detail)
                    .service(list_cash_flows)
                    .service(cash_flow_detail)
                    .service(list_total_returns)
                    .service(list_etf_returns)
                    .service(nav_trend)
                    .service(splits)
                    .service(profits)
                    .service(prices),
            )
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
