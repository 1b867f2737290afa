//! Label-to-slot mapping over a file's trailer headers with tolerant typed
//! lookups. Unknown labels are absence, never errors; callers fall back to
//! filter-derived defaults.

use indexmap::IndexMap;

use crate::accessor::{RawValue, TrailerHeader, TrailerKind};

/// Maps each normalized trailer label to its slot index and declared type.
/// Built once per session from the header list the accessor reports.
#[derive(Debug, Default, Clone)]
pub struct TrailerIndex {
    slots: IndexMap<String, (usize, TrailerKind)>,
}

fn normalize_label(label: &str) -> &str {
    label.trim().trim_end_matches(':')
}

impl TrailerIndex {
    pub fn build(headers: &[TrailerHeader]) -> Self {
        let mut slots = IndexMap::with_capacity(headers.len());
        for (slot, header) in headers.iter().enumerate() {
            let label = normalize_label(&header.label).to_string();
            if slots.insert(label, (slot, header.kind)).is_some() {
                log::debug!("duplicate trailer label {:?} at slot {slot}", header.label);
            }
        }
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The normalized labels in slot order, for the file-description record.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(|s| s.as_str())
    }

    pub fn slot(&self, label: &str) -> Option<(usize, TrailerKind)> {
        self.slots.get(normalize_label(label)).copied()
    }

    /// The raw value stored at `label`'s slot, when the label exists and the
    /// slot holds something.
    pub fn lookup<'v>(&self, values: &'v [RawValue], label: &str) -> Option<&'v RawValue> {
        let (slot, _) = self.slot(label)?;
        values.get(slot).filter(|v| !v.is_empty())
    }

    pub fn get_f64(&self, values: &[RawValue], label: &str) -> Option<f64> {
        let (slot, kind) = self.slot(label)?;
        let value = values.get(slot)?;
        match kind {
            TrailerKind::Float | TrailerKind::Double => value.as_f64(),
            TrailerKind::Short | TrailerKind::Long | TrailerKind::Unsigned => {
                value.as_i64().map(|v| v as f64)
            }
            _ => value.as_f64(),
        }
    }

    pub fn get_i32(&self, values: &[RawValue], label: &str) -> Option<i32> {
        let (slot, kind) = self.slot(label)?;
        let value = values.get(slot)?;
        match kind {
            TrailerKind::Short | TrailerKind::Long | TrailerKind::Unsigned => value.as_i32(),
            TrailerKind::Float | TrailerKind::Double => value.as_f64().map(|v| v as i32),
            _ => value.as_i32(),
        }
    }

    pub fn get_bool(&self, values: &[RawValue], label: &str) -> Option<bool> {
        let (slot, _) = self.slot(label)?;
        values.get(slot)?.as_bool()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn headers() -> Vec<TrailerHeader> {
        vec![
            TrailerHeader::new("Monoisotopic M/Z:", TrailerKind::Double),
            TrailerHeader::new("Charge State:", TrailerKind::Short),
            TrailerHeader::new("Ion Injection Time (ms):", TrailerKind::Float),
            TrailerHeader::new("RawOvFtT:", TrailerKind::Boolean),
        ]
    }

    #[test]
    fn test_label_normalization() {
        let index = TrailerIndex::build(&headers());
        assert_eq!(index.len(), 4);
        assert_eq!(index.slot("Monoisotopic M/Z").map(|(s, _)| s), Some(0));
        assert_eq!(index.slot("Charge State:").map(|(s, _)| s), Some(1));
        assert!(index.slot("No Such Label").is_none());
        let labels: Vec<_> = index.labels().collect();
        assert_eq!(labels[0], "Monoisotopic M/Z");
        assert!(!labels[0].ends_with(':'));
    }

    #[test]
    fn test_typed_lookup() {
        let index = TrailerIndex::build(&headers());
        let values = vec![
            RawValue::Float(523.77),
            RawValue::Text("2".into()),
            RawValue::Float(30.5),
            RawValue::Integer(1),
        ];
        assert_eq!(index.get_f64(&values, "Monoisotopic M/Z"), Some(523.77));
        // declared Short, stored as text: coercion still lands
        assert_eq!(index.get_i32(&values, "Charge State"), Some(2));
        assert_eq!(index.get_bool(&values, "RawOvFtT"), Some(true));
        // bool coercion ignores the declared kind entirely
        assert_eq!(index.get_bool(&values, "Ion Injection Time (ms)"), Some(true));
        assert_eq!(index.get_f64(&values, "Unknown Label"), None);
    }

    #[test]
    fn test_empty_value_is_absent() {
        let index = TrailerIndex::build(&headers());
        let values = vec![
            RawValue::Empty,
            RawValue::Text(" ".into()),
            RawValue::Float(1.0),
            RawValue::Empty,
        ];
        assert!(index.lookup(&values, "Monoisotopic M/Z").is_none());
        assert!(index.lookup(&values, "Charge State").is_none());
        assert!(index.lookup(&values, "Ion Injection Time (ms)").is_some());
    }
}
