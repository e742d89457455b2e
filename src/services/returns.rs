//! Total-returns and ETF-returns services. All parameters are optional.

use serde::Deserialize;

use crate::domain::returns::ReturnRecord;
use crate::gateway::{EtfReturnsQuery, ReturnsReader, TotalReturnsQuery};
use crate::services::{ServiceError, ServiceResult, normalize};

/// Query parameters accepted by the total returns resource.
#[derive(Debug, Default, Deserialize)]
pub struct TotalParams {
    pub fund_type: Option<String>,
    pub fund_id: Option<i32>,
    pub institute_kind: Option<String>,
    pub date: Option<String>,
}

/// Query parameters accepted by the ETF returns resource.
#[derive(Debug, Default, Deserialize)]
pub struct EtfParams {
    pub fund_id: Option<i32>,
    pub institute_kind: Option<String>,
    pub date: Option<String>,
}

pub async fn list_total_returns<G>(
    gateway: &G,
    params: TotalParams,
) -> ServiceResult<Vec<ReturnRecord>>
where
    G: ReturnsReader + ?Sized,
{
    let mut query = TotalReturnsQuery::new();
    if let Some(fund_type) = normalize(params.fund_type) {
        query = query.fund_type(fund_type);
    }
    if let Some(fund_id) = params.fund_id {
        query = query.fund_id(fund_id);
    }
    if let Some(institute_kind) = normalize(params.institute_kind) {
        query = query.institute_kind(institute_kind);
    }
    if let Some(date) = normalize(params.date) {
        query = query.date(date);
    }

    gateway.list_total_returns(query).await.map_err(|err| {
        log::error!("Failed to list total returns: {err}");
        ServiceError::from(err)
    })
}

pub async fn list_etf_returns<G>(
    gateway: &G,
    params: EtfParams,
) -> ServiceResult<Vec<ReturnRecord>>
where
    G: ReturnsReader + ?Sized,
{
    let mut query = EtfReturnsQuery::new();
    if let Some(fund_id) = params.fund_id {
        query = query.fund_id(fund_id);
    }
    if let Some(institute_kind) = normalize(params.institute_kind) {
        query = query.institute_kind(institute_kind);
    }
    if let Some(date) = normalize(params.date) {
        query = query.date(date);
    }

    gateway.list_etf_returns(query).await.map_err(|err| {
        log::error!("Failed to list ETF returns: {err}");
        ServiceError::from(err)
    })
}
