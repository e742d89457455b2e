//! Wire-to-domain conversion for return records.

use crate::domain::returns::ReturnRecord;
use crate::pb::vigilio as pb;

impl From<pb::ReturnRecord> for ReturnRecord {
    fn from(ret: pb::ReturnRecord) -> Self {
        Self {
            id: ret.id,
            date: ret.date,
            fund_id: ret.fund_id,
            fund_name: ret.fund_name,
            fund_type: ret.fund_type,
            institute_kind: ret.institute_kind,
            last_nav: ret.last_nav,
            last_nav_date: ret.last_nav_date,
            last_price: ret.last_price,
            last_price_date: ret.last_price_date,
            has_profit: ret.has_profit,
            has_split: ret.has_split,
            total_units: ret.total_units,
            bubble: ret.bubble,
            thirty: ret.thirty,
            ninety: ret.ninety,
            one_eighty: ret.one_eighty,
            three_sixty: ret.three_sixty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_record_maps_flags_and_windows() {
        let wire = pb::ReturnRecord {
            id: 9,
            date: "1403/08/15".to_string(),
            fund_id: 3,
            fund_name: "ETF Alpha".to_string(),
            fund_type: "ETF Fund".to_string(),
            institute_kind: "fund".to_string(),
            last_nav: 1050.0,
            last_nav_date: "1403/08/14".to_string(),
            last_price: 1100.0,
            last_price_date: "1403/08/15".to_string(),
            has_profit: true,
            has_split: false,
            total_units: 1_000_000.0,
            bubble: 4.76,
            thirty: 1.2,
            ninety: 3.4,
            one_eighty: 6.8,
            three_sixty: 12.5,
        };

        let mapped: ReturnRecord = wire.into();
        assert!(mapped.has_profit);
        assert!(!mapped.has_split);
        assert_eq!(mapped.thirty, 1.2);
        assert_eq!(mapped.three_sixty, 12.5);
        assert_eq!(mapped.last_price_date, "1403/08/15");
    }
}
