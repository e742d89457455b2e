//! Cash flow list and detail services. Both resources have required date
//! parameters which are validated here before any remote call.

use serde::Deserialize;

use crate::domain::cash_flow::{CashFlow, CashFlowDay};
use crate::gateway::{CashFlowDetailQuery, CashFlowListQuery, CashFlowReader};
use crate::services::{ServiceError, ServiceResult, normalize};

/// Query parameters accepted by the cash flows list resource.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub institute_kind: Option<String>,
}

/// Query parameters accepted by the cash flow detail resource.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub fund_type: Option<String>,
    pub institute_kind: Option<String>,
}

pub async fn list_cash_flows<G>(gateway: &G, params: ListParams) -> ServiceResult<Vec<CashFlow>>
where
    G: CashFlowReader + ?Sized,
{
    let (Some(start_date), Some(end_date)) =
        (normalize(params.start_date), normalize(params.end_date))
    else {
        return Err(ServiceError::Validation(
            "start_date and end_date query parameters are required".to_string(),
        ));
    };

    let mut query = CashFlowListQuery::new(start_date, end_date);
    if let Some(institute_kind) = normalize(params.institute_kind) {
        query = query.institute_kind(institute_kind);
    }

    gateway.list_cash_flows(query).await.map_err(|err| {
        log::error!("Failed to list cash flows: {err}");
        ServiceError::from(err)
    })
}

pub async fn cash_flow_detail<G>(
    gateway: &G,
    fund_id: i32,
    params: DetailParams,
) -> ServiceResult<Vec<CashFlowDay>>
where
    G: CashFlowReader + ?Sized,
{
    let (Some(start_date), Some(end_date), Some(fund_type)) = (
        normalize(params.start_date),
        normalize(params.end_date),
        normalize(params.fund_type),
    ) else {
        return Err(ServiceError::Validation(
            "start_date, end_date, and fund_type query parameters are required".to_string(),
        ));
    };

    let mut query = CashFlowDetailQuery::new(fund_id, start_date, end_date, fund_type);
    if let Some(institute_kind) = normalize(params.institute_kind) {
        query = query.institute_kind(institute_kind);
    }

    gateway.get_cash_flow_detail(query).await.map_err(|err| {
        log::error!("Failed to get cash flow detail for fund {fund_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;

    #[tokio::test]
    async fn list_without_start_date_is_rejected_before_any_call() {
        let mut gateway = MockGateway::new();
        gateway.expect_list_cash_flows().times(0);

        let params = ListParams {
            start_date: None,
            end_date: Some("1403/08/15".to_string()),
            institute_kind: None,
        };
        let result = list_cash_flows(&gateway, params).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn list_forwards_the_validated_range() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_cash_flows()
            .withf(|query| {
                query.start_date == "1403/08/01"
                    && query.end_date == "1403/08/15"
                    && query.institute_kind.is_none()
            })
            .times(1)
            .returning(|_| Ok(vec![CashFlow::default()]));

        let params = ListParams {
            start_date: Some("1403/08/01".to_string()),
            end_date: Some("1403/08/15".to_string()),
            institute_kind: Some("".to_string()),
        };
        let cash_flows = list_cash_flows(&gateway, params).await.expect("should list");
        assert_eq!(cash_flows.len(), 1);
    }

    #[tokio::test]
    async fn detail_requires_fund_type_as_well() {
        let mut gateway = MockGateway::new();
        gateway.expect_get_cash_flow_detail().times(0);

        let params = DetailParams {
            start_date: Some("1403/08/01".to_string()),
            end_date: Some("1403/08/15".to_string()),
            fund_type: None,
            institute_kind: None,
        };
        let result = cash_flow_detail(&gateway, 42, params).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn detail_forwards_fund_id_and_filters() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_cash_flow_detail()
            .withf(|query| {
                query.fund_id == 42
                    && query.fund_type == "ETF"
                    && query.institute_kind.as_deref() == Some("bank")
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let params = DetailParams {
            start_date: Some("1403/08/01".to_string()),
            end_date: Some("1403/08/15".to_string()),
            fund_type: Some("ETF".to_string()),
            institute_kind: Some("bank".to_string()),
        };
        cash_flow_detail(&gateway, 42, params)
            .await
            .expect("should succeed");
    }
}
