//! Wire-to-domain conversions for shareholder replies and export payloads.

use crate::domain::shareholder::{
    ChartSeries, FundHistory, Shareholder, ShareholderDetail, ShareholderForDate,
    ShareholderSummary,
};
use crate::gateway::ExportPayload;
use crate::pb::vigilio as pb;

impl From<pb::ShareHolder> for Shareholder {
    fn from(sh: pb::ShareHolder) -> Self {
        Self {
            id: sh.id,
            name: sh.name,
        }
    }
}

impl From<pb::ShareHolderSummary> for ShareholderSummary {
    fn from(sh: pb::ShareHolderSummary) -> Self {
        Self {
            id: sh.id,
            name: sh.name,
            num_funds: sh.num_funds,
            total_value: sh.total_value,
        }
    }
}

impl From<pb::ShareHolderFundHistory> for FundHistory {
    fn from(fh: pb::ShareHolderFundHistory) -> Self {
        Self {
            fund_id: fh.fund_id,
            fund_name: fh.fund_name,
            fund_type: fh.fund_type,
            share_count: fh.share_count,
            value: fh.value,
            pct_of_shares: fh.pct_of_shares,
            date: fh.date,
        }
    }
}

impl From<pb::ChartSeries> for ChartSeries {
    fn from(chart: pb::ChartSeries) -> Self {
        Self {
            dates: chart.dates,
            share_counts: chart.share_counts,
        }
    }
}

impl From<pb::ShareHolderForDateResponse> for ShareholderForDate {
    fn from(reply: pb::ShareHolderForDateResponse) -> Self {
        Self {
            id: reply.id,
            name: reply.shareholder_name,
            histories: reply
                .share_holder_histories
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<pb::GetShareHolderDetailResponse> for ShareholderDetail {
    fn from(reply: pb::GetShareHolderDetailResponse) -> Self {
        Self {
            name: reply.shareholder_name,
            histories: reply
                .share_holder_histories
                .into_iter()
                .map(Into::into)
                .collect(),
            chart_series: reply.chart_data.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<pb::ShareHolderSummaryExportResponse> for ExportPayload {
    fn from(reply: pb::ShareHolderSummaryExportResponse) -> Self {
        Self {
            bytes: reply.excel_data,
            filename: reply.filename,
        }
    }
}

impl From<pb::ExportShareHolderExcelResponse> for ExportPayload {
    fn from(reply: pb::ExportShareHolderExcelResponse) -> Self {
        Self {
            bytes: reply.excel_file,
            filename: reply.file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shareholder_list_preserves_reply_order() {
        let wire = vec![
            pb::ShareHolder {
                id: 1,
                name: "X".to_string(),
            },
            pb::ShareHolder {
                id: 2,
                name: "Y".to_string(),
            },
        ];

        let mapped: Vec<Shareholder> = wire.into_iter().map(Into::into).collect();

        assert_eq!(
            mapped,
            vec![
                Shareholder {
                    id: 1,
                    name: "X".to_string()
                },
                Shareholder {
                    id: 2,
                    name: "Y".to_string()
                },
            ]
        );
    }

    #[test]
    fn detail_reply_maps_histories_and_chart_series() {
        let reply = pb::GetShareHolderDetailResponse {
            shareholder_name: "Sample Investment Co".to_string(),
            share_holder_histories: vec![pb::ShareHolderFundHistory {
                fund_id: 7,
                fund_name: "Growth ETF".to_string(),
                fund_type: "ETF".to_string(),
                share_count: 1500.0,
                value: 2_250_000.0,
                pct_of_shares: 3.2,
                date: "1403/08/15".to_string(),
            }],
            chart_data: vec![pb::ChartSeries {
                dates: vec!["1403/08/14".to_string(), "1403/08/15".to_string()],
                share_counts: vec![1400.0, 1500.0],
            }],
        };

        let detail: ShareholderDetail = reply.into();

        assert_eq!(detail.name, "Sample Investment Co");
        assert_eq!(detail.histories.len(), 1);
        assert_eq!(detail.histories[0].fund_name, "Growth ETF");
        assert_eq!(detail.histories[0].pct_of_shares, 3.2);
        assert_eq!(detail.chart_series[0].share_counts, vec![1400.0, 1500.0]);
    }

    #[test]
    fn export_replies_map_bytes_and_filename() {
        let summary = pb::ShareHolderSummaryExportResponse {
            excel_data: vec![1, 2, 3],
            filename: "summary.xlsx".to_string(),
        };
        let payload: ExportPayload = summary.into();
        assert_eq!(payload.bytes, vec![1, 2, 3]);
        assert_eq!(payload.filename, "summary.xlsx");

        let single = pb::ExportShareHolderExcelResponse {
            excel_file: vec![4, 5],
            file_name: "shareholder_5040.xlsx".to_string(),
        };
        let payload: ExportPayload = single.into();
        assert_eq!(payload.bytes, vec![4, 5]);
        assert_eq!(payload.filename, "shareholder_5040.xlsx");
    }
}
