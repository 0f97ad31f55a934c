use crate::aggregate::{CaptureSummary, FilterTotal};
use crate::models::DATE_FORMAT;
use crate::profile::ReportProfile;
use crate::reports::{
    render_astrobin_csv, render_general_csv, render_template, write_report, ASTROBIN_CSV,
    GENERAL_CSV, TEMPLATE_TXT,
};
use crate::scanner::scan_lights;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct CollectOptions {
    pub lights_dir: PathBuf,
    pub output_dir: PathBuf,
    pub profile: ReportProfile,
}

pub struct CollectOutcome {
    pub summary: CaptureSummary,
    pub written: Vec<PathBuf>,
}

/// Scan the lights directory and write the three reports into the output directory
pub fn collect(options: &CollectOptions) -> Result<CollectOutcome> {
    let records = scan_lights(&options.lights_dir).with_context(|| {
        format!(
            "Failed to scan light frames in {}",
            options.lights_dir.display()
        )
    })?;
    if records.is_empty() {
        warn!(
            "No .fits files found under {}",
            options.lights_dir.display()
        );
    }

    let summary = CaptureSummary::from_records(&records);
    info!(
        "{} frames in {} groups across {} filters",
        records.len(),
        summary.groups().len(),
        summary.filter_count()
    );

    let reports = [
        (GENERAL_CSV, render_general_csv(&records)),
        (ASTROBIN_CSV, render_astrobin_csv(&summary)),
        (TEMPLATE_TXT, render_template(&summary, &options.profile)),
    ];

    let mut written = Vec::with_capacity(reports.len());
    for (name, contents) in reports {
        let path = options.output_dir.join(name);
        write_report(&path, &contents)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(CollectOutcome { summary, written })
}

/// What a run produced, as printed by `--format json`
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub frames: usize,
    pub earliest: Option<String>,
    pub latest: Option<String>,
    pub filters: Vec<FilterTotal<'a>>,
    pub written: Vec<String>,
}

impl<'a> RunSummary<'a> {
    pub fn new(outcome: &'a CollectOutcome) -> Self {
        let summary = &outcome.summary;
        let (earliest, latest) = date_range_strings(summary).unzip();
        RunSummary {
            frames: summary.total_frames(),
            earliest,
            latest,
            filters: summary.filter_totals(),
            written: outcome.written.iter().map(|p| display_path(p)).collect(),
        }
    }
}

pub fn print_outcome(outcome: &CollectOutcome, format: &str) -> Result<()> {
    match format {
        "json" => output_json(outcome),
        "table" => output_table(outcome),
        _ => Err(anyhow::anyhow!(
            "Invalid format: {}. Use table or json",
            format
        )),
    }
}

fn date_range_strings(summary: &CaptureSummary) -> Option<(String, String)> {
    summary.date_range().map(|range| {
        (
            range.earliest.format(DATE_FORMAT).to_string(),
            range.latest.format(DATE_FORMAT).to_string(),
        )
    })
}

fn output_table(outcome: &CollectOutcome) -> Result<()> {
    let summary = &outcome.summary;

    println!("Light frames: {}", summary.total_frames());
    if let Some((earliest, latest)) = date_range_strings(summary) {
        println!("Captured:     {} - {}", earliest, latest);
    }
    println!();

    println!("{:<32} {:>8} {:>10}", "Filter", "Frames", "Hours");
    println!("{:-<52}", "");
    for total in summary.filter_totals() {
        println!(
            "{:<32} {:>8} {:>10.2}",
            total.name,
            total.frames,
            total.seconds / 3600.0
        );
    }

    println!("\nWrote:");
    for path in &outcome.written {
        println!("  {}", display_path(path));
    }
    Ok(())
}

fn output_json(outcome: &CollectOutcome) -> Result<()> {
    let json = serde_json::to_string_pretty(&RunSummary::new(outcome))?;
    println!("{}", json);
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
