use chrono::NaiveDate;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Calendar day format used by every report
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exposure length in seconds.
///
/// Equality and hashing use the bit pattern of the value so exposures can
/// live inside map keys; `-0.0` is folded into `0.0` first.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Exposure(f64);

impl Exposure {
    /// None unless `seconds` is finite and non-negative
    pub fn new(seconds: f64) -> Option<Self> {
        if seconds.is_finite() && seconds >= 0.0 {
            Some(Exposure(seconds + 0.0))
        } else {
            None
        }
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Whole seconds, truncated toward zero
    pub fn whole_seconds(&self) -> i64 {
        self.0.trunc() as i64
    }

    /// Fixed-point form used by the AstroBin import (`120.0000`)
    pub fn as_duration(&self) -> String {
        format!("{:.4}", self.0)
    }
}

impl Eq for Exposure {}

impl Hash for Exposure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Exposure {
    /// Whole values keep one decimal (`120.0`), fractional ones print as-is (`0.5`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Capture metadata read from one light frame
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRecord {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub exposure: Exposure,
    pub filter: String,
}

impl CaptureRecord {
    pub fn capture_key(&self) -> CaptureKey {
        CaptureKey {
            date: self.date,
            exposure: self.exposure,
            filter: self.filter.clone(),
        }
    }

    pub fn light_key(&self) -> LightKey {
        LightKey {
            exposure: self.exposure,
            filter: self.filter.clone(),
        }
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Grouping key for the AstroBin import rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureKey {
    pub date: NaiveDate,
    pub exposure: Exposure,
    pub filter: String,
}

/// Grouping key for the Lights row of the summary
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LightKey {
    pub exposure: Exposure,
    pub filter: String,
}
