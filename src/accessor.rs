//! The seam between this library and the vendor's file accessor.
//!
//! The accessor itself is an external capability. Everything here models the
//! loosely-typed results it hands back: per-scan filters, statistics, signal
//! arrays, trailer values with a separate declared-type tag, status-log
//! samples, and file-level headers. A [`ScanAccessor`] instance is confined
//! to the thread that obtained it; an [`AccessorFactory`] is shared and
//! produces one accessor per call.

use chrono::{DateTime, Utc};

use crate::constants::{
    ActivationType, IonizationMode, MSOrder, MassAnalyzer, Polarity, TraceType,
};
use crate::error::{AccessorError, OpenError};

/// The declared type tag attached to every trailer header and status-log
/// column by the vendor layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailerKind {
    Short,
    Long,
    Unsigned,
    Float,
    Double,
    Char,
    #[default]
    String,
    Boolean,
}

/// A dynamically typed value read from a trailer slot or a status-log sample.
///
/// The declared [`TrailerKind`] drives the fast-path decode; the coercion
/// helpers cover the mismatched cases so lookups degrade instead of failing.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum RawValue {
    #[default]
    Empty,
    Float(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl RawValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            Self::Boolean(v) => Some(u8::from(*v) as f64),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Empty => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) => Some(*v as i64),
            Self::Boolean(v) => Some(i64::from(*v)),
            Self::Text(s) => {
                let s = s.trim();
                s.parse().ok().or_else(|| s.parse::<f64>().ok().map(|v| v as i64))
            }
            Self::Empty => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.as_i64().map(|v| v as i32)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            Self::Integer(v) => Some(*v != 0),
            Self::Float(v) => Some(*v != 0.0),
            Self::Text(s) => match s.trim() {
                "1" | "true" | "True" | "On" | "on" | "Yes" | "yes" => Some(true),
                "0" | "false" | "False" | "Off" | "off" | "No" | "no" => Some(false),
                _ => None,
            },
            Self::Empty => None,
        }
    }

    /// The display form used for raw trailer listings and string status logs.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Float(v) => v.to_string(),
            Self::Integer(v) => v.to_string(),
            Self::Boolean(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// One entry of the file's trailer-header list: a label and the declared type
/// of the values stored at that slot.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrailerHeader {
    pub label: String,
    pub kind: TrailerKind,
}

impl TrailerHeader {
    pub fn new(label: impl Into<String>, kind: TrailerKind) -> Self {
        Self { label: label.into(), kind }
    }
}

/// One fragmentation stage of a scan filter. Stage `i` describes the
/// selection that produced MS level `i + 2`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StageInfo {
    pub precursor_mz: f64,
    /// Full isolation width as the filter reports it.
    pub isolation_width: f64,
    pub isolation_offset: f64,
    pub activation: ActivationType,
    pub energy: f64,
}

/// The structured description of how one scan was acquired, decoded from the
/// vendor's filter object.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterInfo {
    pub ms_order: MSOrder,
    pub polarity: Polarity,
    pub mass_analyzer: MassAnalyzer,
    pub ionization_mode: IonizationMode,
    /// Vendor scan-mode code (full, SIM, SRM, ...), carried opaquely.
    pub scan_mode: i16,
    pub compensation_voltage_on: bool,
    pub compensation_voltages: Vec<f32>,
    /// Stage 0 feeds MS2, stage 1 feeds MS3, and so on.
    pub stages: Vec<StageInfo>,
    pub text: String,
}

impl FilterInfo {
    /// The fragmentation stage that produced the given MS level, when the
    /// filter carries one.
    pub fn stage_for_level(&self, level: u8) -> Option<&StageInfo> {
        if level < 2 {
            return None;
        }
        self.stages.get(level as usize - 2)
    }
}

/// Per-scan statistics reported alongside the signal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanStats {
    pub scan_number: i32,
    /// Retention time in minutes.
    pub start_time: f64,
    pub low_mz: f64,
    pub high_mz: f64,
    pub tic: f64,
    pub base_peak_mz: f64,
    pub base_peak_intensity: f64,
    pub is_centroid: bool,
    pub packet_count: u64,
}

/// A scan's signal arrays, profile or centroid as stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SignalData {
    pub mz: Vec<f64>,
    pub intensity: Vec<f32>,
}

/// Extended per-peak annotations from the advanced packet stream. Any field
/// the file does not carry stays `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PacketAnnotations {
    pub noise: Option<Vec<f32>>,
    pub baseline: Option<Vec<f32>>,
    pub charge: Option<Vec<f32>>,
    pub resolution: Option<Vec<f32>>,
    pub sampled_noise_mz: Option<Vec<f32>>,
    pub sampled_noise: Option<Vec<f32>>,
    pub sampled_noise_baseline: Option<Vec<f32>>,
}

/// One labeled status-log sample: an instrument operating parameter reported
/// at a point in time, independent of any scan.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLogEntry {
    /// Sample time in minutes.
    pub time: f64,
    pub label: String,
    pub kind: TrailerKind,
    pub value: RawValue,
}

/// One whole-run summary trace.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TraceData {
    pub trace_type: TraceType,
    pub start_index: u32,
    pub end_index: u32,
    pub time: Vec<f64>,
    pub intensity: Vec<f32>,
}

/// A scan-event definition inside one acquisition segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanEventInfo {
    pub mass_analyzer: MassAnalyzer,
    pub ionization_mode: IonizationMode,
}

/// File-level instrument identity headers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InstrumentInfo {
    pub model: String,
    pub name: String,
    pub serial_number: String,
    pub hardware_version: String,
    pub software_version: String,
}

/// File-level sample headers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SampleInfo {
    pub sample_id: String,
    pub sample_name: String,
    pub sample_vial: String,
    pub sample_comment: String,
}

/// The text of one stored instrument method.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MethodText {
    pub text: String,
    pub display_name: String,
    pub name: String,
}

/// A thread-confined view of one open instrument file.
///
/// Implementations are not required to be `Send`; callers obtain a fresh
/// instance per query through an [`AccessorFactory`].
pub trait ScanAccessor {
    /// The lowest acquired scan number.
    fn first_scan(&self) -> i32;
    /// The highest acquired scan number.
    fn last_scan(&self) -> i32;

    fn filter_for(&self, scan: i32) -> Result<FilterInfo, AccessorError>;
    fn stats_for(&self, scan: i32) -> Result<ScanStats, AccessorError>;

    /// The scan's signal arrays. When `centroid` is set and the stored scan
    /// is profile data, the peak-picked stream is returned instead.
    fn signal_for(&self, scan: i32, centroid: bool) -> Result<SignalData, AccessorError>;

    fn annotations_for(
        &self,
        scan: i32,
        include_sampled_noise: bool,
    ) -> Result<PacketAnnotations, AccessorError>;

    /// The file's trailer-header list, in slot order.
    fn trailer_headers(&self) -> Vec<TrailerHeader>;
    /// The scan's raw trailer values, in slot order.
    fn trailer_values(&self, scan: i32) -> Result<Vec<RawValue>, AccessorError>;

    /// Scan-event definitions grouped by acquisition segment.
    fn scan_events(&self) -> Vec<Vec<ScanEventInfo>>;

    fn status_log_entries(&self) -> Vec<StatusLogEntry>;

    fn summary_trace(&self, trace_type: TraceType) -> Result<TraceData, AccessorError>;

    fn instrument_info(&self) -> InstrumentInfo;
    fn sample_info(&self) -> SampleInfo;
    fn source_file(&self) -> String;
    fn creation_date(&self) -> Option<DateTime<Utc>>;

    fn instrument_method_count(&self) -> u32;
    fn instrument_method(&self, index: u32) -> Option<MethodText>;

    /// Concatenated error and warning text the file carries, empty when
    /// there is none.
    fn error_message(&self) -> String;

    fn scan_in_range(&self, scan: i32) -> Result<(), AccessorError> {
        let (first, last) = (self.first_scan(), self.last_scan());
        if scan < first || scan > last {
            Err(AccessorError::ScanOutOfRange { scan, first, last })
        } else {
            Ok(())
        }
    }
}

/// Produces independent, thread-confined [`ScanAccessor`] instances for one
/// underlying file. Shared across threads by the session.
pub trait AccessorFactory: Send + Sync {
    fn open(&self) -> Result<Box<dyn ScanAccessor>, OpenError>;
}
