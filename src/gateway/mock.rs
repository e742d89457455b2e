//! Mock gateway implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

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
    SummaryQuery, TotalReturnsQuery,
};

mock! {
    pub Gateway {}

    #[async_trait]
    impl FundReader for Gateway {
        async fn get_fund_types(&self) -> GatewayResult<Vec<FundType>>;
        async fn get_nav_trend(&self, fund_id: i32) -> GatewayResult<NavTrend>;
        async fn get_splits(&self, fund_id: i32) -> GatewayResult<Vec<Split>>;
        async fn get_profits(&self, fund_id: i32) -> GatewayResult<Vec<Profit>>;
        async fn get_prices(&self, fund_id: i32) -> GatewayResult<Vec<Price>>;
    }

    #[async_trait]
    impl ShareholderReader for Gateway {
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
        async fn get_shareholder_detail(
            &self,
            query: DetailQuery,
        ) -> GatewayResult<ShareholderDetail>;
    }

    #[async_trait]
    impl ShareholderExporter for Gateway {
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
    impl CashFlowReader for Gateway {
        async fn list_cash_flows(&self, query: CashFlowListQuery) -> GatewayResult<Vec<CashFlow>>;
        async fn get_cash_flow_detail(
            &self,
            query: CashFlowDetailQuery,
        ) -> GatewayResult<Vec<CashFlowDay>>;
    }

    #[async_trait]
    impl ReturnsReader for Gateway {
        async fn list_total_returns(
            &self,
            query: TotalReturnsQuery,
        ) -> GatewayResult<Vec<ReturnRecord>>;
        async fn list_etf_returns(
            &self,
            query: EtfReturnsQuery,
        ) -> GatewayResult<Vec<ReturnRecord>>;
    }
}
