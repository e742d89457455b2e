//! Shareholder list, summary, detail and export services.

use serde::Deserialize;

use crate::domain::shareholder::{
    Shareholder, ShareholderDetail, ShareholderForDate, ShareholderSummary,
};
use crate::gateway::{
    DetailQuery, ExportPayload, ForDateQuery, ShareholderExportQuery, ShareholderExporter,
    ShareholderListQuery, ShareholderReader, SummaryExportQuery, SummaryQuery,
};
use crate::services::{ServiceError, ServiceResult, normalize};

/// Query parameters accepted by the shareholders list resource.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub fund_type: Option<String>,
}

/// Query parameters accepted by the shareholders summary resource.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub date: Option<String>,
    pub fund_type: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Query parameters accepted by the summary export resource.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryExcelParams {
    pub fund_type: Option<String>,
    pub date: Option<String>,
}

/// Query parameters accepted by the shareholder detail resource.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    pub fund: Option<String>,
}

/// Query parameters accepted by the for-date resource.
#[derive(Debug, Default, Deserialize)]
pub struct ForDateParams {
    pub date: Option<String>,
    pub fund_type: Option<String>,
}

pub async fn list_shareholders<G>(
    gateway: &G,
    params: ListParams,
) -> ServiceResult<Vec<Shareholder>>
where
    G: ShareholderReader + ?Sized,
{
    let mut query = ShareholderListQuery::new();
    if let Some(fund_type) = normalize(params.fund_type) {
        query = query.fund_type(fund_type);
    }

    gateway.list_shareholders(query).await.map_err(|err| {
        log::error!("Failed to list shareholders: {err}");
        ServiceError::from(err)
    })
}

pub async fn shareholders_summary<G>(
    gateway: &G,
    params: SummaryParams,
) -> ServiceResult<Vec<ShareholderSummary>>
where
    G: ShareholderReader + ?Sized,
{
    let mut query = SummaryQuery::new();
    if let Some(date) = normalize(params.date) {
        query = query.date(date);
    }
    if let Some(fund_type) = normalize(params.fund_type) {
        query = query.fund_type(fund_type);
    }
    if let Some(search) = normalize(params.search) {
        query = query.search(search);
    }
    // Forwarded verbatim; the remote side interprets a leading "-".
    if let Some(ordering) = normalize(params.ordering) {
        query = query.ordering(ordering);
    }

    gateway.get_shareholders_summary(query).await.map_err(|err| {
        log::error!("Failed to get shareholders summary: {err}");
        ServiceError::from(err)
    })
}

pub async fn shareholders_summary_excel<G>(
    gateway: &G,
    params: SummaryExcelParams,
) -> ServiceResult<ExportPayload>
where
    G: ShareholderExporter + ?Sized,
{
    let fund_type = normalize(params.fund_type).ok_or_else(|| {
        ServiceError::Validation("fund_type query parameter is required".to_string())
    })?;

    let mut query = SummaryExportQuery::new(fund_type);
    if let Some(date) = normalize(params.date) {
        query = query.date(date);
    }

    gateway
        .export_shareholders_summary_excel(query)
        .await
        .map_err(|err| {
            log::error!("Failed to export shareholders summary: {err}");
            ServiceError::from(err)
        })
}

pub async fn shareholder_detail<G>(
    gateway: &G,
    shareholder_id: i32,
    params: DetailParams,
) -> ServiceResult<ShareholderDetail>
where
    G: ShareholderReader + ?Sized,
{
    let mut query = DetailQuery::new(shareholder_id);
    if let Some(fund) = normalize(params.fund) {
        query = query.fund(fund);
    }

    gateway.get_shareholder_detail(query).await.map_err(|err| {
        log::error!("Failed to get shareholder {shareholder_id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn shareholder_for_date<G>(
    gateway: &G,
    shareholder_id: i32,
    params: ForDateParams,
) -> ServiceResult<ShareholderForDate>
where
    G: ShareholderReader + ?Sized,
{
    let mut query = ForDateQuery::new(shareholder_id);
    if let Some(date) = normalize(params.date) {
        query = query.date(date);
    }
    if let Some(fund_type) = normalize(params.fund_type) {
        query = query.fund_type(fund_type);
    }

    gateway
        .get_shareholder_for_date(query)
        .await
        .map_err(|err| {
            log::error!("Failed to get shareholder {shareholder_id} for date: {err}");
            ServiceError::from(err)
        })
}

pub async fn shareholder_excel<G>(
    gateway: &G,
    shareholder_id: i32,
    params: DetailParams,
) -> ServiceResult<ExportPayload>
where
    G: ShareholderExporter + ?Sized,
{
    let mut query = ShareholderExportQuery::new(shareholder_id);
    if let Some(fund) = normalize(params.fund) {
        query = query.fund(fund);
    }

    gateway.export_shareholder_excel(query).await.map_err(|err| {
        log::error!("Failed to export shareholder {shareholder_id}: {err}");
        ServiceError::from(err)
    })
}
