//! Fund-level entities: fund types, NAV trends, splits, profits and prices.
//!
//! Date fields are opaque Jalali-calendar strings produced by the remote
//! service; they are passed through verbatim and never parsed here.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct FundType {
    pub id: i32,
    pub name: String,
}

/// Per-date NAV component values. A `None` means the remote reply left the
/// field unset; zero is a real value and is never used to signal absence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NavBreakdown {
    pub purchase: Option<f64>,
    pub redemption: Option<f64>,
    pub statistical: Option<f64>,
    pub preferred_purchase: Option<f64>,
    pub preferred_redemption: Option<f64>,
    pub common: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NavTrendPoint {
    pub net_asset_value: f64,
    pub date: String,
    pub nav_breakdown: NavBreakdown,
}

/// Pre-aggregated series for charting, parallel arrays keyed by `dates`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NavTrendChart {
    pub dates: Vec<String>,
    pub statisticals: Vec<f64>,
    pub purchases: Vec<f64>,
    pub redemptions: Vec<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NavTrend {
    pub points: Vec<NavTrendPoint>,
    pub chart: NavTrendChart,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Split {
    pub date: String,
    pub units_ratio: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Profit {
    pub profit: f64,
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Price {
    pub date: String,
    pub price: f64,
}
