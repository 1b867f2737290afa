//! Shared in-memory test doubles for the accessor seam.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::accessor::{
    AccessorFactory, FilterInfo, InstrumentInfo, MethodText, PacketAnnotations, RawValue,
    SampleInfo, ScanAccessor, ScanEventInfo, ScanStats, SignalData, StageInfo,
    StatusLogEntry, TrailerHeader,
};
use crate::constants::{MSOrder, Polarity, TraceType};
use crate::error::{AccessorError, OpenError};

/// An in-memory accessor with settable per-scan state. `with_levels` seeds a
/// plausible run; everything else starts empty and is filled in per test.
#[derive(Debug, Default, Clone)]
pub struct MockAccessor {
    first: i32,
    last: i32,
    filters: HashMap<i32, FilterInfo>,
    stats: HashMap<i32, ScanStats>,
    signals: HashMap<i32, SignalData>,
    centroid_signals: HashMap<i32, SignalData>,
    annotations: HashMap<i32, PacketAnnotations>,
    trailer_headers: Vec<TrailerHeader>,
    trailer_values: HashMap<i32, Vec<RawValue>>,
    scan_events: Vec<Vec<ScanEventInfo>>,
    status_log: Vec<StatusLogEntry>,
    traces: HashMap<i16, crate::accessor::TraceData>,
    instrument: InstrumentInfo,
    sample: SampleInfo,
    source: String,
    created: Option<DateTime<Utc>>,
    methods: Vec<MethodText>,
    errors: String,
}

impl MockAccessor {
    /// Scans numbered `1..=levels.len()`, each with the MS order matching its
    /// level, positive polarity, and a small deterministic signal.
    pub fn with_levels(levels: &[u8]) -> Self {
        let mut this = Self {
            first: 1,
            last: levels.len() as i32,
            source: "run.raw".into(),
            ..Default::default()
        };
        for (i, &level) in levels.iter().enumerate() {
            let scan = i as i32 + 1;
            this.filters.insert(
                scan,
                FilterInfo {
                    ms_order: MSOrder::from(level as i16),
                    polarity: Polarity::Positive,
                    text: format!("+ c Full ms{level}"),
                    ..Default::default()
                },
            );
            this.stats.insert(
                scan,
                ScanStats {
                    scan_number: scan,
                    start_time: scan as f64 * 0.05,
                    low_mz: 150.0,
                    high_mz: 2000.0,
                    tic: 1.0e6 + scan as f64,
                    base_peak_mz: 445.12,
                    base_peak_intensity: 1.0e5 + scan as f64,
                    is_centroid: false,
                    packet_count: 3,
                },
            );
            this.signals.insert(
                scan,
                SignalData {
                    mz: vec![200.0, 445.12, 1800.0],
                    intensity: vec![10.0, 1.0e5 + scan as f32, 5.0],
                },
            );
        }
        this
    }

    pub fn set_trailer_headers(&mut self, headers: Vec<TrailerHeader>) {
        self.trailer_headers = headers;
    }

    pub fn set_trailer_values(&mut self, scan: i32, values: Vec<RawValue>) {
        self.trailer_values.insert(scan, values);
    }

    /// Append a fragmentation stage to the scan's filter.
    pub fn set_stage(&mut self, scan: i32, stage: StageInfo) {
        self.filters.entry(scan).or_default().stages.push(stage);
    }

    pub fn set_filter(&mut self, scan: i32, filter: FilterInfo) {
        self.filters.insert(scan, filter);
    }

    pub fn set_stats(&mut self, scan: i32, stats: ScanStats) {
        self.stats.insert(scan, stats);
    }

    pub fn set_signal(&mut self, scan: i32, signal: SignalData) {
        self.signals.insert(scan, signal);
    }

    pub fn set_centroid_signal(&mut self, scan: i32, signal: SignalData) {
        self.centroid_signals.insert(scan, signal);
    }

    pub fn set_annotations(&mut self, scan: i32, annotations: PacketAnnotations) {
        self.annotations.insert(scan, annotations);
    }

    pub fn set_scan_events(&mut self, segments: Vec<Vec<ScanEventInfo>>) {
        self.scan_events = segments;
    }

    pub fn set_status_log(&mut self, entries: Vec<StatusLogEntry>) {
        self.status_log = entries;
    }

    pub fn set_instrument_info(&mut self, info: InstrumentInfo) {
        self.instrument = info;
    }

    pub fn set_sample_info(&mut self, info: SampleInfo) {
        self.sample = info;
    }

    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.created = Some(date);
    }

    pub fn set_methods(&mut self, methods: Vec<MethodText>) {
        self.methods = methods;
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.errors = message.into();
    }
}

impl ScanAccessor for MockAccessor {
    fn first_scan(&self) -> i32 {
        self.first
    }

    fn last_scan(&self) -> i32 {
        self.last
    }

    fn filter_for(&self, scan: i32) -> Result<FilterInfo, AccessorError> {
        self.scan_in_range(scan)?;
        Ok(self.filters.get(&scan).cloned().unwrap_or_default())
    }

    fn stats_for(&self, scan: i32) -> Result<ScanStats, AccessorError> {
        self.scan_in_range(scan)?;
        Ok(self.stats.get(&scan).cloned().unwrap_or_default())
    }

    fn signal_for(&self, scan: i32, centroid: bool) -> Result<SignalData, AccessorError> {
        self.scan_in_range(scan)?;
        if centroid {
            if let Some(signal) = self.centroid_signals.get(&scan) {
                return Ok(signal.clone());
            }
        }
        Ok(self.signals.get(&scan).cloned().unwrap_or_default())
    }

    fn annotations_for(
        &self,
        scan: i32,
        include_sampled_noise: bool,
    ) -> Result<PacketAnnotations, AccessorError> {
        self.scan_in_range(scan)?;
        let mut annotations = self.annotations.get(&scan).cloned().unwrap_or_default();
        if !include_sampled_noise {
            annotations.sampled_noise_mz = None;
            annotations.sampled_noise = None;
            annotations.sampled_noise_baseline = None;
        }
        Ok(annotations)
    }

    fn trailer_headers(&self) -> Vec<TrailerHeader> {
        self.trailer_headers.clone()
    }

    fn trailer_values(&self, scan: i32) -> Result<Vec<RawValue>, AccessorError> {
        self.scan_in_range(scan)?;
        Ok(self.trailer_values.get(&scan).cloned().unwrap_or_default())
    }

    fn scan_events(&self) -> Vec<Vec<ScanEventInfo>> {
        self.scan_events.clone()
    }

    fn status_log_entries(&self) -> Vec<StatusLogEntry> {
        self.status_log.clone()
    }

    fn summary_trace(
        &self,
        trace_type: TraceType,
    ) -> Result<crate::accessor::TraceData, AccessorError> {
        if let Some(trace) = self.traces.get(&(trace_type as i16)) {
            return Ok(trace.clone());
        }
        // Synthesize the MS traces from the per-scan statistics.
        let mut trace = crate::accessor::TraceData {
            trace_type,
            start_index: 0,
            end_index: (self.last - self.first).max(0) as u32,
            ..Default::default()
        };
        for scan in self.first..=self.last {
            let stats = self.stats.get(&scan).cloned().unwrap_or_default();
            trace.time.push(stats.start_time);
            trace.intensity.push(match trace_type {
                TraceType::BasePeak => stats.base_peak_intensity as f32,
                _ => stats.tic as f32,
            });
        }
        Ok(trace)
    }

    fn instrument_info(&self) -> InstrumentInfo {
        self.instrument.clone()
    }

    fn sample_info(&self) -> SampleInfo {
        self.sample.clone()
    }

    fn source_file(&self) -> String {
        self.source.clone()
    }

    fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    fn instrument_method_count(&self) -> u32 {
        self.methods.len() as u32
    }

    fn instrument_method(&self, index: u32) -> Option<MethodText> {
        self.methods.get(index as usize).cloned()
    }

    fn error_message(&self) -> String {
        self.errors.clone()
    }
}

/// Clones the template accessor on every open, or fails every open.
pub struct MockFactory {
    accessor: Option<MockAccessor>,
}

impl MockFactory {
    pub fn new(accessor: MockAccessor) -> Self {
        Self { accessor: Some(accessor) }
    }

    pub fn failing() -> Self {
        Self { accessor: None }
    }
}

impl AccessorFactory for MockFactory {
    fn open(&self) -> Result<Box<dyn ScanAccessor>, OpenError> {
        match &self.accessor {
            Some(accessor) => Ok(Box::new(accessor.clone())),
            None => Err(OpenError::FileNotFound("missing.raw".into())),
        }
    }
}
