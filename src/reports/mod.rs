pub mod astrobin;
pub mod general;
pub mod template;

use crate::error::{CaptureError, Result};
use std::fs;
use std::path::Path;

pub use astrobin::render_astrobin_csv;
pub use general::render_general_csv;
pub use template::render_template;

pub const GENERAL_CSV: &str = "results.csv";
pub const ASTROBIN_CSV: &str = "AstroBin.csv";
pub const TEMPLATE_TXT: &str = "reddit_template.txt";

const CSV_LINE_END: &str = "\r\n";

/// Write a rendered report, replacing any previous file
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| CaptureError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn push_csv_row(out: &mut String, fields: &[&str]) {
    let row: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
    out.push_str(&row.join(","));
    out.push_str(CSV_LINE_END);
}
