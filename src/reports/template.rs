//! Markdown-ish posting template: date range, equipment, filters and the
//! light/calibration frame tally.

use crate::aggregate::CaptureSummary;
use crate::filters;
use crate::models::DATE_FORMAT;
use crate::profile::ReportProfile;

const TABLE_RULE: &str = ":--|:--|:--|\n";
const FILTERS_PER_ROW: usize = 3;

pub fn render_template(summary: &CaptureSummary, profile: &ReportProfile) -> String {
    let mut output = String::new();

    output.push_str("Astrobin: \n\n");

    let (earliest, latest) = match summary.date_range() {
        Some(range) => (
            range.earliest.format(DATE_FORMAT).to_string(),
            range.latest.format(DATE_FORMAT).to_string(),
        ),
        None => ("n/a".to_string(), "n/a".to_string()),
    };
    output.push_str(&format!("Captured {} - {}\n\n", earliest, latest));
    output.push_str(&format!("{}\n\n", profile.sky));

    output.push_str("Equipment|||\n");
    output.push_str(TABLE_RULE);
    for row in &profile.equipment {
        output.push_str(&format!("{}\n", row.join(" | ")));
    }
    output.push('\n');

    output.push_str("Filters|||\n");
    output.push_str(TABLE_RULE);
    for row in filter_rows(summary) {
        output.push_str(&format!("{}\n", row.join(" | ")));
    }
    output.push('\n');

    output.push_str("Data|||\n");
    output.push_str(TABLE_RULE);
    output.push_str(&lights_row(summary));
    output.push_str(&flats_row(summary, profile));
    output.push_str(&darks_row(summary, profile));
    output.push_str(&format!("Biases|{}|\n\n", profile.bias_count));

    output.push_str("**Miscellaneous:**\n\n");
    for note in &profile.camera_notes {
        output.push_str(&format!("    * {}\n\n", note));
    }
    output.push_str("**Editing and Stacking:**\n\n");
    for note in &profile.processing_notes {
        output.push_str(&format!("* {}\n\n", note));
    }

    output
}

/// Descriptive filter names, alphabetical, three to a row
fn filter_rows(summary: &CaptureSummary) -> Vec<Vec<&str>> {
    summary
        .filters_by_name()
        .into_iter()
        .map(filters::descriptive_name)
        .collect::<Vec<_>>()
        .chunks(FILTERS_PER_ROW)
        .map(<[&str]>::to_vec)
        .collect()
}

fn lights_row(summary: &CaptureSummary) -> String {
    let breakdown: Vec<String> = summary
        .lights()
        .iter()
        .map(|(key, count)| {
            format!("{}x{}s{}", count, key.exposure.whole_seconds(), key.filter)
        })
        .collect();

    format!("Lights|{}|{}\n", summary.total_frames(), breakdown.join(", "))
}

fn flats_row(summary: &CaptureSummary, profile: &ReportProfile) -> String {
    let breakdown: Vec<String> = summary
        .filters_by_name()
        .into_iter()
        .map(|filter| format!("{}{}", profile.flats_per_filter, filter))
        .collect();

    format!(
        "Flats|{}| {}\n",
        profile.flats_per_filter * summary.filter_count(),
        breakdown.join(", ")
    )
}

fn darks_row(summary: &CaptureSummary, profile: &ReportProfile) -> String {
    let exposures = summary.dark_exposures();
    let breakdown: Vec<String> = exposures
        .iter()
        .map(|seconds| format!("{}x{}s", profile.darks_per_exposure, seconds))
        .collect();

    format!(
        "Darks|{}|{}\n",
        profile.darks_per_exposure * exposures.len(),
        breakdown.join(", ")
    )
}
