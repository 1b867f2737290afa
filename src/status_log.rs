//! Groups heterogeneous status-log samples into per-label time series,
//! partitioned by their declared value kind.

use indexmap::IndexMap;

use crate::accessor::{StatusLogEntry, TrailerKind};

/// One instrument parameter over time: a label with parallel time and value
/// vectors of equal length.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatusLogSeries<T> {
    pub label: String,
    pub times: Vec<f64>,
    pub values: Vec<T>,
}

impl<T> StatusLogSeries<T> {
    fn new(label: &str) -> Self {
        Self { label: label.to_string(), times: Vec::new(), values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// All of a file's status-log series, partitioned by value kind. Labels keep
/// their first-seen order within each partition.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatusLogs {
    pub floats: Vec<StatusLogSeries<f64>>,
    pub integers: Vec<StatusLogSeries<i64>>,
    pub booleans: Vec<StatusLogSeries<bool>>,
    pub strings: Vec<StatusLogSeries<String>>,
}

fn push<T>(
    bucket: &mut IndexMap<String, StatusLogSeries<T>>,
    label: &str,
    time: f64,
    value: T,
) {
    let series = bucket
        .entry(label.to_string())
        .or_insert_with(|| StatusLogSeries::new(label));
    series.times.push(time);
    series.values.push(value);
}

/// Replay every status-log entry, bucketing each labeled value by its
/// declared kind. Samples whose value cannot be coerced to the declared kind
/// are dropped rather than failing the whole aggregation.
pub fn aggregate(entries: &[StatusLogEntry]) -> StatusLogs {
    let mut floats: IndexMap<String, StatusLogSeries<f64>> = IndexMap::new();
    let mut integers: IndexMap<String, StatusLogSeries<i64>> = IndexMap::new();
    let mut booleans: IndexMap<String, StatusLogSeries<bool>> = IndexMap::new();
    let mut strings: IndexMap<String, StatusLogSeries<String>> = IndexMap::new();

    for entry in entries {
        let label = entry.label.trim().trim_end_matches(':');
        if label.is_empty() {
            continue;
        }
        match entry.kind {
            TrailerKind::Float | TrailerKind::Double => match entry.value.as_f64() {
                Some(v) => push(&mut floats, label, entry.time, v),
                None => log::debug!("dropping non-numeric sample for {label:?}"),
            },
            TrailerKind::Short | TrailerKind::Long | TrailerKind::Unsigned => {
                match entry.value.as_i64() {
                    Some(v) => push(&mut integers, label, entry.time, v),
                    None => log::debug!("dropping non-integral sample for {label:?}"),
                }
            }
            TrailerKind::Boolean => match entry.value.as_bool() {
                Some(v) => push(&mut booleans, label, entry.time, v),
                None => log::debug!("dropping non-boolean sample for {label:?}"),
            },
            TrailerKind::Char | TrailerKind::String => {
                push(&mut strings, label, entry.time, entry.value.to_text())
            }
        }
    }

    StatusLogs {
        floats: floats.into_values().collect(),
        integers: integers.into_values().collect(),
        booleans: booleans.into_values().collect(),
        strings: strings.into_values().collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::accessor::RawValue;

    fn entry(time: f64, label: &str, kind: TrailerKind, value: RawValue) -> StatusLogEntry {
        StatusLogEntry { time, label: label.to_string(), kind, value }
    }

    #[test]
    fn test_boolean_series() {
        let entries = vec![
            entry(0.1, "Vacuum OK:", TrailerKind::Boolean, RawValue::Boolean(true)),
            entry(0.5, "Vacuum OK:", TrailerKind::Boolean, RawValue::Boolean(false)),
            entry(0.9, "Vacuum OK:", TrailerKind::Boolean, RawValue::Integer(1)),
        ];
        let logs = aggregate(&entries);
        assert_eq!(logs.booleans.len(), 1);
        let series = &logs.booleans[0];
        assert_eq!(series.label, "Vacuum OK");
        assert_eq!(series.len(), 3);
        assert_eq!(series.times, vec![0.1, 0.5, 0.9]);
        assert_eq!(series.values, vec![true, false, true]);
    }

    #[test]
    fn test_kind_partition() {
        let entries = vec![
            entry(0.0, "Ion Gauge Pressure", TrailerKind::Double, RawValue::Float(1.2e-5)),
            entry(0.0, "Scans Acquired", TrailerKind::Long, RawValue::Integer(12)),
            entry(0.0, "Instrument State", TrailerKind::String, RawValue::Text("Ready".into())),
            entry(0.0, "Syringe On", TrailerKind::Boolean, RawValue::Boolean(false)),
            entry(0.0, "API Counts", TrailerKind::Unsigned, RawValue::Integer(3000)),
        ];
        let logs = aggregate(&entries);
        assert_eq!(logs.floats.len(), 1);
        assert_eq!(logs.integers.len(), 2);
        assert_eq!(logs.strings.len(), 1);
        assert_eq!(logs.booleans.len(), 1);
        assert_eq!(logs.integers[0].label, "Scans Acquired");
        assert_eq!(logs.integers[1].label, "API Counts");
    }

    #[test]
    fn test_unparseable_samples_dropped() {
        let entries = vec![
            entry(0.0, "Flow", TrailerKind::Double, RawValue::Text("n/a".into())),
            entry(1.0, "Flow", TrailerKind::Double, RawValue::Float(0.3)),
        ];
        let logs = aggregate(&entries);
        assert_eq!(logs.floats.len(), 1);
        assert_eq!(logs.floats[0].len(), 1);
        assert_eq!(logs.floats[0].times, vec![1.0]);
    }
}
