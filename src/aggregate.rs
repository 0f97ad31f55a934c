use crate::filters;
use crate::models::{CaptureKey, CaptureRecord, LightKey};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

/// Occurrence counter that remembers the order keys were first seen
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Tally {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Tally<K> {
    pub fn increment(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn count(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateRange {
    fn widen(range: Option<DateRange>, date: NaiveDate) -> DateRange {
        match range {
            Some(r) => DateRange {
                earliest: r.earliest.min(date),
                latest: r.latest.max(date),
            },
            None => DateRange {
                earliest: date,
                latest: date,
            },
        }
    }
}

/// Frames and integration time for one filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterTotal<'a> {
    pub filter: &'a str,
    pub name: &'a str,
    pub frames: usize,
    #[serde(rename = "integration_seconds")]
    pub seconds: f64,
}

/// Everything the reports need from a scan, built by folding records in scan order
#[derive(Debug, Clone, Default)]
pub struct CaptureSummary {
    groups: Tally<CaptureKey>,
    lights: Tally<LightKey>,
    filters: HashSet<String>,
    date_range: Option<DateRange>,
}

impl CaptureSummary {
    pub fn from_records(records: &[CaptureRecord]) -> Self {
        records
            .iter()
            .fold(CaptureSummary::default(), CaptureSummary::with_record)
    }

    /// Fold one record into the summary
    pub fn with_record(mut self, record: &CaptureRecord) -> Self {
        self.groups.increment(record.capture_key());
        self.date_range = Some(DateRange::widen(self.date_range, record.date));
        self.lights.increment(record.light_key());
        self.filters.insert(record.filter.clone());
        self
    }

    /// Distinct (date, exposure, filter) groups in first-seen order
    pub fn groups(&self) -> &Tally<CaptureKey> {
        &self.groups
    }

    /// Distinct (exposure, filter) pairs in first-seen order
    pub fn lights(&self) -> &Tally<LightKey> {
        &self.lights
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    pub fn total_frames(&self) -> usize {
        self.lights.total()
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Filters used, ordered by descriptive name
    pub fn filters_by_name(&self) -> Vec<&str> {
        filters::sort_by_name(self.filters.iter().map(String::as_str))
    }

    /// Distinct exposures truncated to whole seconds, ascending
    pub fn dark_exposures(&self) -> BTreeSet<i64> {
        self.lights
            .iter()
            .map(|(key, _)| key.exposure.whole_seconds())
            .collect()
    }

    /// Frame count and integration time per filter, ordered by descriptive name
    pub fn filter_totals(&self) -> Vec<FilterTotal<'_>> {
        self.filters_by_name()
            .into_iter()
            .map(|filter| {
                let (frames, seconds) = self
                    .lights
                    .iter()
                    .filter(|(key, _)| key.filter == filter)
                    .fold((0, 0.0), |(frames, seconds), (key, count)| {
                        (
                            frames + count,
                            seconds + key.exposure.seconds() * count as f64,
                        )
                    });
                FilterTotal {
                    filter,
                    name: filters::descriptive_name(filter),
                    frames,
                    seconds,
                }
            })
            .collect()
    }
}
