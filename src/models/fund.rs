//! Wire-to-domain conversions for fund-level replies.

use crate::domain::fund::{
    FundType, NavBreakdown, NavTrend, NavTrendChart, NavTrendPoint, Price, Profit, Split,
};
use crate::pb::vigilio as pb;

impl From<pb::FundType> for FundType {
    fn from(ft: pb::FundType) -> Self {
        Self {
            id: ft.id,
            name: ft.name,
        }
    }
}

impl From<pb::NavBreakdown> for NavBreakdown {
    fn from(nav: pb::NavBreakdown) -> Self {
        Self {
            purchase: nav.purchase,
            redemption: nav.redemption,
            statistical: nav.statistical,
            preferred_purchase: nav.preferred_purchase,
            preferred_redemption: nav.preferred_redemption,
            common: nav.common,
        }
    }
}

impl From<pb::NavTrendPoint> for NavTrendPoint {
    fn from(point: pb::NavTrendPoint) -> Self {
        Self {
            net_asset_value: point.net_asset_value,
            date: point.date,
            // A missing sub-message means no breakdown at all for the date.
            nav_breakdown: point.nav_data.map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<pb::NavTrendChart> for NavTrendChart {
    fn from(chart: pb::NavTrendChart) -> Self {
        Self {
            dates: chart.dates,
            statisticals: chart.statisticals,
            purchases: chart.purchases,
            redemptions: chart.redemptions,
        }
    }
}

impl From<pb::GetNavTrendResponse> for NavTrend {
    fn from(reply: pb::GetNavTrendResponse) -> Self {
        Self {
            points: reply.nav_trend.into_iter().map(Into::into).collect(),
            chart: reply.chart_data.map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<pb::Split> for Split {
    fn from(split: pb::Split) -> Self {
        Self {
            date: split.date,
            units_ratio: split.units_ratio,
        }
    }
}

impl From<pb::Profit> for Profit {
    fn from(profit: pb::Profit) -> Self {
        Self {
            profit: profit.profit,
            date: profit.date,
        }
    }
}

impl From<pb::Price> for Price {
    fn from(price: pb::Price) -> Self {
        Self {
            date: price.date,
            price: price.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_breakdown_fields_map_to_none_not_zero() {
        let wire = pb::NavTrendPoint {
            net_asset_value: 1234.5,
            date: "1403/08/15".to_string(),
            nav_data: Some(pb::NavBreakdown {
                purchase: None,
                redemption: Some(0.0),
                statistical: Some(1200.0),
                preferred_purchase: None,
                preferred_redemption: None,
                common: None,
            }),
        };

        let point: NavTrendPoint = wire.into();

        assert_eq!(point.nav_breakdown.purchase, None);
        // Explicit zero on the wire is a real value, not absence.
        assert_eq!(point.nav_breakdown.redemption, Some(0.0));
        assert_eq!(point.nav_breakdown.statistical, Some(1200.0));
    }

    #[test]
    fn missing_breakdown_message_maps_to_all_absent() {
        let wire = pb::NavTrendPoint {
            net_asset_value: 10.0,
            date: "1403/01/01".to_string(),
            nav_data: None,
        };

        let point: NavTrendPoint = wire.into();
        assert_eq!(point.nav_breakdown, NavBreakdown::default());
    }

    #[test]
    fn nav_trend_reply_preserves_point_order() {
        let reply = pb::GetNavTrendResponse {
            nav_trend: vec![
                pb::NavTrendPoint {
                    net_asset_value: 1.0,
                    date: "1403/01/01".to_string(),
                    nav_data: None,
                },
                pb::NavTrendPoint {
                    net_asset_value: 2.0,
                    date: "1403/01/02".to_string(),
                    nav_data: None,
                },
            ],
            chart_data: Some(pb::NavTrendChart {
                dates: vec!["1403/01/01".to_string(), "1403/01/02".to_string()],
                statisticals: vec![1.0, 2.0],
                purchases: vec![],
                redemptions: vec![],
            }),
        };

        let trend: NavTrend = reply.into();
        let dates: Vec<_> = trend.points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["1403/01/01", "1403/01/02"]);
        assert_eq!(trend.chart.statisticals, vec![1.0, 2.0]);
    }
}
