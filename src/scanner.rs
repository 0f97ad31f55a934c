use crate::error::{CaptureError, Result};
use crate::fits::{parse_real, read_primary_header, FitsHeader};
use crate::models::{CaptureRecord, Exposure, DATE_FORMAT};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const FILTER_KEYWORD: &str = "FILTER";
pub const EXPOSURE_KEYWORDS: &[&str] = &["EXPOSURE", "EXPTIME"];
pub const DATE_KEYWORD: &str = "DATE-LOC";

/// Read capture metadata for every light frame under `dir`, in file-name order
pub fn scan_lights(dir: &Path) -> Result<Vec<CaptureRecord>> {
    if !dir.is_dir() {
        return Err(CaptureError::LightsDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut fits_files = Vec::new();
    find_fits_files(dir, &mut fits_files)?;
    info!("Found {} FITS files under {}", fits_files.len(), dir.display());

    let mut records = Vec::with_capacity(fits_files.len());
    for path in fits_files {
        let record = read_capture(&path)?;
        debug!(
            "{}: {} {}s {}",
            path.display(),
            record.date_string(),
            record.exposure,
            record.filter
        );
        records.push(record);
    }

    Ok(records)
}

/// Recursively collect FITS files, visiting entries sorted by name.
///
/// Symlinked directories are not descended into; symlinks to files are kept.
pub fn find_fits_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| CaptureError::io(dir, e))?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| CaptureError::io(dir, e))?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, file_type) in entries {
        if file_type.is_dir() {
            // Recurse into subdirectories
            find_fits_files(&path, files)?;
        } else if is_fits_file(&path) && (file_type.is_file() || path.is_file()) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_fits_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("fits"))
        .unwrap_or(false)
}

/// Read the filter, exposure and capture day from one light frame
pub fn read_capture(path: &Path) -> Result<CaptureRecord> {
    let header = read_primary_header(path)?;
    capture_from_header(path, &header)
}

fn capture_from_header(path: &Path, header: &FitsHeader) -> Result<CaptureRecord> {
    let missing = |keyword: &str| CaptureError::MissingKeyword {
        path: path.to_path_buf(),
        keyword: keyword.to_string(),
    };

    let filter = header
        .get(FILTER_KEYWORD)
        .ok_or_else(|| missing(FILTER_KEYWORD))?;
    if filter.is_empty() {
        return Err(CaptureError::invalid(path, FILTER_KEYWORD, filter, "empty filter name"));
    }

    let (exposure_keyword, raw_exposure) = header
        .first_of(EXPOSURE_KEYWORDS)
        .ok_or_else(|| missing(EXPOSURE_KEYWORDS[0]))?;
    let seconds = parse_real(raw_exposure).ok_or_else(|| {
        CaptureError::invalid(path, exposure_keyword, raw_exposure, "not a number")
    })?;
    let exposure = Exposure::new(seconds).ok_or_else(|| {
        CaptureError::invalid(
            path,
            exposure_keyword,
            raw_exposure,
            "must be finite and non-negative",
        )
    })?;

    let raw_date = header
        .get(DATE_KEYWORD)
        .ok_or_else(|| missing(DATE_KEYWORD))?;
    let date = parse_capture_day(raw_date).ok_or_else(|| {
        CaptureError::invalid(path, DATE_KEYWORD, raw_date, "expected YYYY-MM-DD[Thh:mm:ss]")
    })?;

    Ok(CaptureRecord {
        path: path.to_path_buf(),
        date,
        exposure,
        filter: filter.to_string(),
    })
}

/// Calendar day of a `YYYY-MM-DDThh:mm:ss` timestamp
fn parse_capture_day(value: &str) -> Option<NaiveDate> {
    let day = value.split('T').next().unwrap_or(value).trim();
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}
