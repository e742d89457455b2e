//! gRPC-backed implementation of the gateway traits.
//!
//! Each method builds one request, performs one remote call and maps the
//! reply into domain values via the conversions in [`crate::models`]. Reply
//! ordering is preserved; filtering and sorting happen remotely.

use async_trait::async_trait;
use tonic::transport::Channel;

use crate::domain::cash_flow::{CashFlow, CashFlowDay};
use crate::domain::fund::{FundType, NavTrend, Price, Profit, Split};
use crate::domain::returns::ReturnRecord;
use crate::domain::shareholder::{
    Shareholder, ShareholderDetail, ShareholderForDate, ShareholderSummary,
};
use crate::gateway::errors::GatewayResult;
use crate::gateway::{
    CashFlowDetailQuery, CashFlowListQuery, CashFlowReader, DetailQuery, EtfReturnsQuery,
    ExportPayload, ForDateQuery, FundReader, ReturnsReader, ShareholderExportQuery,
    ShareholderExporter, ShareholderListQuery, ShareholderReader, SummaryExportQuery,
    SummaryQuery, TotalReturnsQuery, channel,
};
use crate::models::config::GatewayConfig;
use crate::pb::vigilio as pb;
use crate::pb::vigilio::vigilio_service_client::VigilioServiceClient;

/// Typed client for the Vigilio service.
///
/// One instance wraps one channel. Handlers construct a fresh instance per
/// request and drop it when the response is built; reconnect-on-failure and
/// pooling are deliberately out of scope.
#[derive(Clone)]
pub struct GrpcGateway {
    client: VigilioServiceClient<Channel>,
}

impl GrpcGateway {
    /// Opens a channel for `config` and wraps the generated stub.
    pub fn connect(config: &GatewayConfig) -> GatewayResult<Self> {
        let channel = channel::open(config)?;
        Ok(Self {
            client: VigilioServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl FundReader for GrpcGateway {
    async fn get_fund_types(&self) -> GatewayResult<Vec<FundType>> {
        let mut client = self.client.clone();
        let reply = client
            .get_fund_types(pb::GetFundTypesRequest {})
            .await?
            .into_inner();
        Ok(reply.fund_types.into_iter().map(Into::into).collect())
    }

    async fn get_nav_trend(&self, fund_id: i32) -> GatewayResult<NavTrend> {
        let mut client = self.client.clone();
        let reply = client
            .get_nav_trend(pb::GetNavTrendRequest { fund_id })
            .await?
            .into_inner();
        Ok(reply.into())
    }

    async fn get_splits(&self, fund_id: i32) -> GatewayResult<Vec<Split>> {
        let mut client = self.client.clone();
        let reply = client
            .get_splits(pb::GetSplitsRequest { fund_id })
            .await?
            .into_inner();
        Ok(reply.splits.into_iter().map(Into::into).collect())
    }

    async fn get_profits(&self, fund_id: i32) -> GatewayResult<Vec<Profit>> {
        let mut client = self.client.clone();
        let reply = client
            .get_profits(pb::GetProfitsRequest { fund_id })
            .await?
            .into_inner();
        Ok(reply.profits.into_iter().map(Into::into).collect())
    }

    async fn get_prices(&self, fund_id: i32) -> GatewayResult<Vec<Price>> {
        let mut client = self.client.clone();
        let reply = client
            .get_prices(pb::GetPricesRequest { fund_id })
            .await?
            .into_inner();
        Ok(reply.prices.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ShareholderReader for GrpcGateway {
    async fn list_shareholders(
        &self,
        query: ShareholderListQuery,
    ) -> GatewayResult<Vec<Shareholder>> {
        let mut client = self.client.clone();
        let request = pb::ShareHolderListRequest {
            fund_type: query.fund_type.unwrap_or_default(),
        };
        let reply = client.list_share_holders(request).await?.into_inner();
        Ok(reply.shareholders.into_iter().map(Into::into).collect())
    }

    async fn get_shareholders_summary(
        &self,
        query: SummaryQuery,
    ) -> GatewayResult<Vec<ShareholderSummary>> {
        let mut client = self.client.clone();
        let request = pb::ShareHolderSummaryListRequest {
            date: query.date.unwrap_or_default(),
            fund_type: query.fund_type.unwrap_or_default(),
            search: query.search.unwrap_or_default(),
            ordering: query.ordering.unwrap_or_default(),
        };
        let reply = client.share_holders_summary(request).await?.into_inner();
        Ok(reply.shareholders.into_iter().map(Into::into).collect())
    }

    async fn get_shareholder_for_date(
        &self,
        query: ForDateQuery,
    ) -> GatewayResult<ShareholderForDate> {
        let mut client = self.client.clone();
        let request = pb::ShareHolderForDateRequest {
            shareholder_id: query.shareholder_id,
            date: query.date.unwrap_or_default(),
            fund_type: query.fund_type.unwrap_or_default(),
        };
        let reply = client.get_share_holder_for_date(request).await?.into_inner();
        Ok(reply.into())
    }

    async fn get_shareholder_detail(
        &self,
        query: DetailQuery,
    ) -> GatewayResult<ShareholderDetail> {
        let mut client = self.client.clone();
        let request = pb::GetShareHolderDetailRequest {
            shareholder_id: query.shareholder_id,
            fund: query.fund.unwrap_or_default(),
        };
        let reply = client.get_share_holder_detail(request).await?.into_inner();
        Ok(reply.into())
    }
}

#[async_trait]
impl ShareholderExporter for GrpcGateway {
    async fn export_shareholders_summary_excel(
        &self,
        query: SummaryExportQuery,
    ) -> GatewayResult<ExportPayload> {
        let mut client = self.client.clone();
        let request = pb::ShareHolderSummaryExportRequest {
            fund_type: query.fund_type,
            date: query.date.unwrap_or_default(),
        };
        let reply = client
            .export_share_holders_summary_excel(request)
            .await?
            .into_inner();
        Ok(reply.into())
    }

    async fn export_shareholder_excel(
        &self,
        query: ShareholderExportQuery,
    ) -> GatewayResult<ExportPayload> {
        let mut client = self.client.clone();
        let request = pb::ExportShareHolderExcelRequest {
            shareholder_id: query.shareholder_id,
            fund: query.fund.unwrap_or_default(),
        };
        let reply = client
            .export_share_holder_excel(request)
            .await?
            .into_inner();
        Ok(reply.into())
    }
}

#[async_trait]
impl CashFlowReader for GrpcGateway {
    async fn list_cash_flows(&self, query: CashFlowListQuery) -> GatewayResult<Vec<CashFlow>> {
        let mut client = self.client.clone();
        let request = pb::ListCashFlowsRequest {
            start_date: query.start_date,
            end_date: query.end_date,
            institute_kind: query.institute_kind.unwrap_or_default(),
        };
        let reply = client.list_cash_flows(request).await?.into_inner();
        Ok(reply.cash_flows.into_iter().map(Into::into).collect())
    }

    async fn get_cash_flow_detail(
        &self,
        query: CashFlowDetailQuery,
    ) -> GatewayResult<Vec<CashFlowDay>> {
        let mut client = self.client.clone();
        let request = pb::GetCashFlowDetailRequest {
            fund_id: query.fund_id,
            start_date: query.start_date,
            end_date: query.end_date,
            fund_type: query.fund_type,
            institute_kind: query.institute_kind.unwrap_or_default(),
        };
        let reply = client.get_cash_flow_detail(request).await?.into_inner();
        Ok(reply.cash_flows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ReturnsReader for GrpcGateway {
    async fn list_total_returns(
        &self,
        query: TotalReturnsQuery,
    ) -> GatewayResult<Vec<ReturnRecord>> {
        let mut client = self.client.clone();
        let request = pb::ListTotalReturnsRequest {
            fund_type: query.fund_type.unwrap_or_default(),
            fund_id: query.fund_id.unwrap_or_default(),
            institute_kind: query.institute_kind.unwrap_or_default(),
            date: query.date.unwrap_or_default(),
        };
        let reply = client.list_total_returns(request).await?.into_inner();
        Ok(reply.returns.into_iter().map(Into::into).collect())
    }

    async fn list_etf_returns(&self, query: EtfReturnsQuery) -> GatewayResult<Vec<ReturnRecord>> {
        let mut client = self.client.clone();
        let request = pb::ListEtfReturnsRequest {
            fund_id: query.fund_id.unwrap_or_default(),
            institute_kind: query.institute_kind.unwrap_or_default(),
            date: query.date.unwrap_or_default(),
        };
        let reply = client.list_etf_returns(request).await?.into_inner();
        Ok(reply.returns.into_iter().map(Into::into).collect())
    }
}
