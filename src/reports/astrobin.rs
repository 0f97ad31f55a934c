//! AstroBin acquisition import: one row per night, exposure and filter.

use super::push_csv_row;
use crate::aggregate::CaptureSummary;
use crate::filters;
use crate::models::DATE_FORMAT;

const HEADER: [&str; 4] = ["date", "duration", "filter", "number"];

pub fn render_astrobin_csv(summary: &CaptureSummary) -> String {
    let mut out = String::new();
    push_csv_row(&mut out, &HEADER);

    for (key, count) in summary.groups().iter() {
        let date = key.date.format(DATE_FORMAT).to_string();
        let duration = key.exposure.as_duration();
        let number = count.to_string();
        push_csv_row(
            &mut out,
            &[
                date.as_str(),
                duration.as_str(),
                filters::astrobin_id(&key.filter),
                number.as_str(),
            ],
        );
    }

    out
}
