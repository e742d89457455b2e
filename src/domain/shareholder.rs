//! Shareholder entities returned by the list, summary and detail queries.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Shareholder {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ShareholderSummary {
    pub id: i32,
    pub name: String,
    pub num_funds: i32,
    pub total_value: f64,
}

/// One fund position of a shareholder at a given date.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct FundHistory {
    pub fund_id: i32,
    pub fund_name: String,
    pub fund_type: String,
    pub share_count: f64,
    pub value: f64,
    pub pct_of_shares: f64,
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ShareholderForDate {
    pub id: i32,
    pub name: String,
    pub histories: Vec<FundHistory>,
}

/// Parallel date/share-count arrays backing the detail page chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ChartSeries {
    pub dates: Vec<String>,
    pub share_counts: Vec<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ShareholderDetail {
    pub name: String,
    pub histories: Vec<FundHistory>,
    pub chart_series: Vec<ChartSeries>,
}
