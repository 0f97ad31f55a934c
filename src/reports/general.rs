use super::push_csv_row;
use crate::filters;
use crate::models::CaptureRecord;

const HEADER: [&str; 4] = ["Date", "Exposure", "Filter", "Count"];

/// One row per light frame in scan order, filters spelled out
pub fn render_general_csv(records: &[CaptureRecord]) -> String {
    let mut out = String::new();
    push_csv_row(&mut out, &HEADER);

    for record in records {
        let date = record.date_string();
        let exposure = record.exposure.to_string();
        push_csv_row(
            &mut out,
            &[
                date.as_str(),
                exposure.as_str(),
                filters::descriptive_name(&record.filter),
                "1",
            ],
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exposure, DATE_FORMAT};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn record(date: &str, exposure: f64, filter: &str) -> CaptureRecord {
        CaptureRecord {
            path: PathBuf::from("frame.fits"),
            date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
            exposure: Exposure::new(exposure).unwrap(),
            filter: filter.to_string(),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(render_general_csv(&[]), "Date,Exposure,Filter,Count\r\n");
    }

    #[test]
    fn test_one_row_per_frame_unaggregated() {
        let records = vec![
            record("2024-05-01", 120.0, "L"),
            record("2024-05-01", 120.0, "L"),
            record("2024-05-01", 300.0, "Ha"),
        ];
        let csv = render_general_csv(&records);
        let lines: Vec<&str> = csv.split_terminator("\r\n").collect();

        assert_eq!(lines.len(), 1 + records.len());
        assert_eq!(
            lines[1],
            "2024-05-01,120.0,\"Antila 2\"\" Luminance Filter\",1"
        );
        assert_eq!(lines[1], lines[2]);
        assert_eq!(
            lines[3],
            "2024-05-01,300.0,\"Astronomik 2\"\" 6nm Ha Filter\",1"
        );
    }

    #[test]
    fn test_unknown_filter_keeps_code() {
        let csv = render_general_csv(&[record("2024-06-01", 2.5, "Clear")]);
        assert!(csv.ends_with("2024-06-01,2.5,Clear,1\r\n"));
    }
}
