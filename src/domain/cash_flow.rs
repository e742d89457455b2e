//! Cash flow aggregates per fund and per day.

use serde::{Deserialize, Serialize};

/// Aggregated flow of one fund over the requested date range.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CashFlow {
    pub cash_flow: f64,
    pub in_flow: f64,
    pub out_flow: f64,
    pub profits: f64,
    pub fund_name: String,
    pub fund_type: String,
    pub fund_id: i32,
    pub symbol: String,
    pub institute_kind: String,
}

/// Daily flow breakdown for a single fund, ordered as the remote reply
/// enumerated the days.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CashFlowDay {
    pub cash_flow: f64,
    pub in_flow: f64,
    pub out_flow: f64,
    pub total_units: f64,
    pub purchase: f64,
    pub redemption: f64,
    pub issued_units: f64,
    pub revoked_units: f64,
    pub fund_name: String,
    pub fund_type: String,
    pub fund_id: i32,
    pub symbol: String,
    pub date: String,
}
