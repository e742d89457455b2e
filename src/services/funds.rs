//! Services for fund types and per-fund detail queries (NAV trend, splits,
//! profits, prices). These are thin: the fund id arrives as a path segment,
//! so required-ness is already enforced by routing.

use crate::domain::fund::{FundType, NavTrend, Price, Profit, Split};
use crate::gateway::FundReader;
use crate::services::{ServiceError, ServiceResult};

pub async fn list_fund_types<G>(gateway: &G) -> ServiceResult<Vec<FundType>>
where
    G: FundReader + ?Sized,
{
    gateway.get_fund_types().await.map_err(|err| {
        log::error!("Failed to list fund types: {err}");
        ServiceError::from(err)
    })
}

pub async fn nav_trend<G>(gateway: &G, fund_id: i32) -> ServiceResult<NavTrend>
where
    G: FundReader + ?Sized,
{
    gateway.get_nav_trend(fund_id).await.map_err(|err| {
        log::error!("Failed to get NAV trend for fund {fund_id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn splits<G>(gateway: &G, fund_id: i32) -> ServiceResult<Vec<Split>>
where
    G: FundReader + ?Sized,
{
    gateway.get_splits(fund_id).await.map_err(|err| {
        log::error!("Failed to get splits for fund {fund_id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn profits<G>(gateway: &G, fund_id: i32) -> ServiceResult<Vec<Profit>>
where
    G: FundReader + ?Sized,
{
    gateway.get_profits(fund_id).await.map_err(|err| {
        log::error!("Failed to get profits for fund {fund_id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn prices<G>(gateway: &G, fund_id: i32) -> ServiceResult<Vec<Price>>
where
    G: FundReader + ?Sized,
{
    gateway.get_prices(fund_id).await.map_err(|err| {
        log::error!("Failed to get prices for fund {fund_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::gateway::errors::GatewayError;
    use crate::gateway::mock::MockGateway;

    #[tokio::test]
    async fn list_fund_types_returns_reply_in_order() {
        let mut gateway = MockGateway::new();
        gateway.expect_get_fund_types().times(1).returning(|| {
            Ok(vec![
                FundType {
                    id: 1,
                    name: "ETF".to_string(),
                },
                FundType {
                    id: 2,
                    name: "Leveraged".to_string(),
                },
            ])
        });

        let fund_types = list_fund_types(&gateway).await.expect("should list");
        let ids: Vec<_> = fund_types.iter().map(|ft| ft.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn transport_errors_propagate_unchanged() {
        let mut gateway = MockGateway::new();
        gateway.expect_get_splits().times(1).returning(|_| {
            Err(GatewayError::Transport {
                code: tonic::Code::DeadlineExceeded,
                detail: "deadline exceeded".to_string(),
            })
        });

        let result = splits(&gateway, 7).await;
        assert!(matches!(
            result,
            Err(ServiceError::Gateway(GatewayError::Transport { .. }))
        ));
    }

    #[tokio::test]
    async fn nav_trend_forwards_the_fund_id() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_nav_trend()
            .withf(|fund_id| *fund_id == 12)
            .times(1)
            .returning(|_| Ok(NavTrend::default()));

        nav_trend(&gateway, 12).await.expect("should succeed");
    }
}
