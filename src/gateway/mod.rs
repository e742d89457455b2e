//! Typed gateway to the remote Vigilio fund-data service.
//!
//! The traits below are the seams between HTTP services and the gRPC
//! transport: one async method per logical query, each performing exactly one
//! remote call. Query structs normalize absent optional arguments to the
//! wire-format zero-value when the request is built, and replies are mapped
//! into [`crate::domain`] values without re-ordering or dropping fields.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::cash_flow::{CashFlow, CashFlowDay};
use crate::domain::fund::{FundType, NavTrend, Price, Profit, Split};
use crate::domain::returns::ReturnRecord;
use crate::domain::shareholder::{
    Shareholder, ShareholderDetail, ShareholderForDate, ShareholderSummary,
};
use crate::gateway::errors::GatewayResult;

pub mod channel;
pub mod errors;
pub mod grpc;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Spreadsheet bytes produced remotely, with the server-suggested filename.
/// The binary layout is owned by the remote service and treated as opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
}

#[derive(Debug, Clone, Default)]
pub struct ShareholderListQuery {
    pub fund_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SummaryQuery {
    pub date: Option<String>,
    pub fund_type: Option<String>,
    pub search: Option<String>,
    /// Ordering key forwarded verbatim; a leading `-` requests descending.
    pub ordering: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SummaryExportQuery {
    pub fund_type: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ForDateQuery {
    pub shareholder_id: i32,
    pub date: Option<String>,
    pub fund_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DetailQuery {
    pub shareholder_id: i32,
    pub fund: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShareholderExportQuery {
    pub shareholder_id: i32,
    pub fund: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CashFlowListQuery {
    pub start_date: String,
    pub end_date: String,
    pub institute_kind: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CashFlowDetailQuery {
    pub fund_id: i32,
    pub start_date: String,
    pub end_date: String,
    pub fund_type: String,
    pub institute_kind: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TotalReturnsQuery {
    pub fund_type: Option<String>,
    pub fund_id: Option<i32>,
    pub institute_kind: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EtfReturnsQuery {
    pub fund_id: Option<i32>,
    pub institute_kind: Option<String>,
    pub date: Option<String>,
}

impl ShareholderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund_type(mut self, fund_type: impl Into<String>) -> Self {
        self.fund_type = Some(fund_type.into());
        self
    }
}

impl SummaryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn fund_type(mut self, fund_type: impl Into<String>) -> Self {
        self.fund_type = Some(fund_type.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }
}

impl SummaryExportQuery {
    pub fn new(fund_type: impl Into<String>) -> Self {
        Self {
            fund_type: fund_type.into(),
            date: None,
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl ForDateQuery {
    pub fn new(shareholder_id: i32) -> Self {
        Self {
            shareholder_id,
            date: None,
            fund_type: None,
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn fund_type(mut self, fund_type: impl Into<String>) -> Self {
        self.fund_type = Some(fund_type.into());
        self
    }
}

impl DetailQuery {
    pub fn new(shareholder_id: i32) -> Self {
        Self {
            shareholder_id,
            fund: None,
        }
    }

    pub fn fund(mut self, fund: impl Into<String>) -> Self {
        self.fund = Some(fund.into());
        self
    }
}

impl ShareholderExportQuery {
    pub fn new(shareholder_id: i32) -> Self {
        Self {
            shareholder_id,
            fund: None,
        }
    }

    pub fn fund(mut self, fund: impl Into<String>) -> Self {
        self.fund = Some(fund.into());
        self
    }
}

impl CashFlowListQuery {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            institute_kind: None,
        }
    }

    pub fn institute_kind(mut self, institute_kind: impl Into<String>) -> Self {
        self.institute_kind = Some(institute_kind.into());
        self
    }
}

impl CashFlowDetailQuery {
    pub fn new(
        fund_id: i32,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        fund_type: impl Into<String>,
    ) -> Self {
        Self {
            fund_id,
            start_date: start_date.into(),
            end_date: end_date.into(),
            fund_type: fund_type.into(),
            institute_kind: None,
        }
    }

    pub fn institute_kind(mut self, institute_kind: impl Into<String>) -> Self {
        self.institute_kind = Some(institute_kind.into());
        self
    }
}

impl TotalReturnsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund_type(mut self, fund_type: impl Into<String>) -> Self {
        self.fund_type = Some(fund_type.into());
        self
    }

    pub fn fund_id(mut self, fund_id: i32) -> Self {
        self.fund_id = Some(fund_id);
        self
    }

    pub fn institute_kind(mut self, institute_kind: impl Into<String>) -> Self {
        self.institute_kind = Some(institute_kind.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl EtfReturnsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund_id(mut self, fund_id: i32) -> Self {
        self.fund_id = Some(fund_id);
        self
    }

    pub fn institute_kind(mut self, institute_kind: impl Into<String>) -> Self {
        self.institute_kind = Some(institute_kind.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

#[async_trait]
pub trait FundReader {
    async fn get_fund_types(&self) -> GatewayResult<Vec<FundType>>;
    async fn get_nav_trend(&self, fund_id: i32) -> GatewayResult<NavTrend>;
    async fn get_splits(&self, fund_id: i32) -> GatewayResult<Vec<Split>>;
    async fn get_profits(&self, fund_id: i32) -> GatewayResult<Vec<Profit>>;
    async fn get_prices(&self, fund_id: i32) -> GatewayResult<Vec<Price>>;
}

#[async_trait]
pub trait ShareholderReader {
    async fn list_shareholders(
        &self,
        query: ShareholderListQuery,
    ) -> GatewayResult<Vec<Shareholder>>;
    async fn get_shareholders_summary(
        &self,
        query: SummaryQuery,
    ) -> GatewayResult<Vec<ShareholderSummary>>;
    async fn get_shareholder_for_date(
        &self,
        query: ForDateQuery,
    ) -> GatewayResult<ShareholderForDate>;
    async fn get_shareholder_detail(&self, query: DetailQuery)
    -> GatewayResult<ShareholderDetail>;
}

#[async_trait]
pub trait ShareholderExporter {
    async fn export_shareholders_summary_excel(
        &self,
        query: SummaryExportQuery,
    ) -> GatewayResult<ExportPayload>;
    async fn export_shareholder_excel(
        &self,
        query: ShareholderExportQuery,
    ) -> GatewayResult<ExportPayload>;
}

#[async_trait]
pub trait CashFlowReader {
    async fn list_cash_flows(&self, query: CashFlowListQuery) -> GatewayResult<Vec<CashFlow>>;
    async fn get_cash_flow_detail(
        &self,
        query: CashFlowDetailQuery,
    ) -> GatewayResult<Vec<CashFlowDay>>;
}

#[async_trait]
pub trait ReturnsReader {
    async fn list_total_returns(
        &self,
        query: TotalReturnsQuery,
    ) -> GatewayResult<Vec<ReturnRecord>>;
    async fn list_etf_returns(&self, query: EtfReturnsQuery) -> GatewayResult<Vec<ReturnRecord>>;
}

/// Connectivity probe: issues the cheapest query and converts any failure
/// into `false`. The one place a gateway error is deliberately swallowed.
pub async fn ping<G>(gateway: &G) -> bool
where
    G: FundReader + ?Sized,
{
    gateway.get_fund_types().await.is_ok()
}

/// Exports the shareholders summary and writes it to `output_path`, or to the
/// OS temp directory under the server-suggested filename when no path is
/// given. Filesystem failures surface as [`errors::GatewayError::Io`].
pub async fn save_shareholders_summary_excel<G>(
    gateway: &G,
    query: SummaryExportQuery,
    output_path: Option<PathBuf>,
) -> GatewayResult<PathBuf>
where
    G: ShareholderExporter + ?Sized,
{
    let payload = gateway.export_shareholders_summary_excel(query).await?;
    persist_export(payload, output_path)
}

/// Exports one shareholder's positions and writes them to disk, defaulting
/// to the temp directory like [`save_shareholders_summary_excel`].
pub async fn save_shareholder_excel<G>(
    gateway: &G,
    query: ShareholderExportQuery,
    output_path: Option<PathBuf>,
) -> GatewayResult<PathBuf>
where
    G: ShareholderExporter + ?Sized,
{
    let payload = gateway.export_shareholder_excel(query).await?;
    persist_export(payload, output_path)
}

fn persist_export(payload: ExportPayload, output_path: Option<PathBuf>) -> GatewayResult<PathBuf> {
    let path = output_path.unwrap_or_else(|| std::env::temp_dir().join(&payload.filename));
    std::fs::write(&path, &payload.bytes)?;
    Ok(path)
}
