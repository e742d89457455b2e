//! Wire-to-domain conversions for cash flow replies.

use crate::domain::cash_flow::{CashFlow, CashFlowDay};
use crate::pb::vigilio as pb;

impl From<pb::CashFlow> for CashFlow {
    fn from(cf: pb::CashFlow) -> Self {
        Self {
            cash_flow: cf.cash_flow,
            in_flow: cf.in_flow,
            out_flow: cf.out_flow,
            profits: cf.profits,
            fund_name: cf.fund_name,
            fund_type: cf.fund_type,
            fund_id: cf.fund_id,
            symbol: cf.symbol,
            institute_kind: cf.institute_kind,
        }
    }
}

impl From<pb::CashFlowDay> for CashFlowDay {
    fn from(cf: pb::CashFlowDay) -> Self {
        Self {
            cash_flow: cf.cash_flow,
            in_flow: cf.in_flow,
            out_flow: cf.out_flow,
            total_units: cf.total_units,
            purchase: cf.purchase,
            redemption: cf.redemption,
            issued_units: cf.issued_units,
            revoked_units: cf.revoked_units,
            fund_name: cf.fund_name,
            fund_type: cf.fund_type,
            fund_id: cf.fund_id,
            symbol: cf.symbol,
            date: cf.date,
        }
    }
}
