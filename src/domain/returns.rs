//! Fund return records shared by the total-returns and ETF-returns queries.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ReturnRecord {
    pub id: i32,
    pub date: String,
    pub fund_id: i32,
    pub fund_name: String,
    pub fund_type: String,
    pub institute_kind: String,
    pub last_nav: f64,
    pub last_nav_date: String,
    pub last_price: f64,
    pub last_price_date: String,
    pub has_profit: bool,
    pub has_split: bool,
    pub total_units: f64,
    pub bubble: f64,
    /// Trailing returns over 30/90/180/360 days.
    pub thirty: f64,
    pub ninety: f64,
    pub one_eighty: f64,
    pub three_sixty: f64,
}
