use crate::commands::CollectOptions;
use crate::profile::ReportProfile;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_LIGHTS_DIR: &str = "LIGHTS";

#[derive(Parser, Debug)]
#[command(name = "capture-ledger")]
#[command(
    about = "Tally FITS light frames into AstroBin import CSVs and a posting template",
    long_about = None
)]
pub struct Cli {
    /// Directory scanned recursively for .fits light frames
    #[arg(long, default_value = DEFAULT_LIGHTS_DIR)]
    pub lights_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Run summary format (table, json)
    #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            lights_dir: self.lights_dir.clone(),
            output_dir: self.output_dir.clone(),
            profile: ReportProfile::default(),
        }
    }
}
