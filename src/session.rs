//! One open instrument file: the indices built at open time, the per-session
//! toggles, and the assembly of every finished record kind.
//!
//! A failed open still produces a session so the boundary can hand out a
//! token whose status explains what went wrong. All record assembly opens a
//! fresh accessor through the shared factory; the session itself holds no
//! accessor and is safe to share across threads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use flatbuffers::FlatBufferBuilder;

use crate::accessor::{AccessorFactory, ScanAccessor};
use crate::constants::{SpectrumMode, TraceType};
use crate::error::{AccessorError, OpenError, SessionStatus};
use crate::index::{ConfigurationCatalog, ScanLevelIndex, TrailerIndex};
use crate::instruments;
use crate::resolve::Resolver;
use crate::schema;
use crate::status_log;

pub struct Session {
    path: String,
    factory: Arc<dyn AccessorFactory>,
    trailers: TrailerIndex,
    levels: ScanLevelIndex,
    configurations: ConfigurationCatalog,
    include_signal: AtomicBool,
    centroid_spectra: AtomicBool,
    status: SessionStatus,
    open_error: Option<String>,
}

impl Session {
    /// Open the file behind `factory` and build the session indices. Never
    /// fails: an open or index-build failure is recorded on the returned
    /// session's status instead.
    pub fn open(path: impl Into<String>, factory: Arc<dyn AccessorFactory>) -> Self {
        let path = path.into();
        match Self::build_indices(&path, factory.as_ref()) {
            Ok((trailers, levels, configurations)) => Self {
                path,
                factory,
                trailers,
                levels,
                configurations,
                include_signal: AtomicBool::new(true),
                centroid_spectra: AtomicBool::new(false),
                status: SessionStatus::Ok,
                open_error: None,
            },
            Err(err) => {
                log::error!("opening {path:?} failed: {err}");
                Self {
                    path,
                    factory,
                    trailers: TrailerIndex::default(),
                    levels: ScanLevelIndex::default(),
                    configurations: ConfigurationCatalog::default(),
                    include_signal: AtomicBool::new(true),
                    centroid_spectra: AtomicBool::new(false),
                    status: err.status(),
                    open_error: Some(err.to_string()),
                }
            }
        }
    }

    fn build_indices(
        path: &str,
        factory: &dyn AccessorFactory,
    ) -> Result<(TrailerIndex, ScanLevelIndex, ConfigurationCatalog), OpenError> {
        let accessor = factory.open()?;
        let trailers = TrailerIndex::build(&accessor.trailer_headers());
        let levels = ScanLevelIndex::build(accessor.as_ref())
            .map_err(|err| OpenError::Failure(path.to_string(), err.to_string()))?;

        let segments = accessor.scan_events();
        let configurations = if segments.iter().all(|segment| segment.is_empty()) {
            let model = accessor.instrument_info().model;
            ConfigurationCatalog::from_pairs(instruments::fallback_configurations(&model))
        } else {
            ConfigurationCatalog::build(&segments)
        };
        Ok((trailers, levels, configurations))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn signal_loading(&self) -> bool {
        self.include_signal.load(Ordering::Relaxed)
    }

    pub fn set_signal_loading(&self, on: bool) {
        self.include_signal.store(on, Ordering::Relaxed);
    }

    pub fn centroid_spectra(&self) -> bool {
        self.centroid_spectra.load(Ordering::Relaxed)
    }

    pub fn set_centroid_spectra(&self, on: bool) {
        self.centroid_spectra.store(on, Ordering::Relaxed);
    }

    /// The lowest acquired scan number, `-1` when the session is not open.
    pub fn first_spectrum(&self) -> i32 {
        if self.status.is_ok() { self.levels.first() } else { -1 }
    }

    /// The highest acquired scan number, `-1` when the session is not open.
    pub fn last_spectrum(&self) -> i32 {
        if self.status.is_ok() { self.levels.last() } else { -1 }
    }

    pub fn spectrum_count(&self) -> u32 {
        if !self.status.is_ok() {
            return 0;
        }
        let (first, last) = (self.levels.first(), self.levels.last());
        if last >= first { (last - first + 1) as u32 } else { 0 }
    }

    /// The file's error and warning text: the open failure when the session
    /// never opened, otherwise whatever the accessor reports.
    pub fn error_message(&self) -> String {
        if let Some(reason) = &self.open_error {
            return reason.clone();
        }
        match self.factory.open() {
            Ok(accessor) => accessor.error_message(),
            Err(err) => err.to_string(),
        }
    }

    fn accessor(&self) -> Result<Box<dyn ScanAccessor>, AccessorError> {
        if !self.status.is_ok() {
            return Err(AccessorError::Failure(format!(
                "session for {:?} is not open: {}",
                self.path, self.status
            )));
        }
        self.factory
            .open()
            .map_err(|err| AccessorError::Failure(err.to_string()))
    }

    /// Assemble the complete scan record for one scan. With `include_signal`
    /// off the record carries no data table but is otherwise identical.
    pub fn describe_scan(
        &self,
        scan: i32,
        include_signal: bool,
        centroid: bool,
    ) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let accessor = accessor.as_ref();
        let filter = accessor.filter_for(scan)?;
        let values = accessor.trailer_values(scan)?;
        let stats = accessor.stats_for(scan)?;
        let level = self
            .levels
            .level_of(scan)
            .unwrap_or_else(|| filter.ms_order.ms_level());

        let resolver = Resolver::new(&self.trailers, &self.levels);
        let (precursor, acquisition) =
            resolver.resolve(accessor, scan, level, &filter, &values, &stats);

        let signal = if include_signal {
            Some(accessor.signal_for(scan, centroid)?)
        } else {
            None
        };
        // The effective mode must not depend on whether signal was loaded.
        let mode = if stats.is_centroid || centroid {
            SpectrumMode::Centroid
        } else {
            SpectrumMode::Profile
        };

        let mut fbb = FlatBufferBuilder::new();
        let precursor_offset = precursor.as_ref().map(|p| {
            schema::Precursor::create(&mut fbb, &schema::PrecursorArgs {
                mono_mz: p.mono_mz,
                charge: p.charge,
                master_scan: p.master_scan,
                isolation_window: Some(schema::IsolationWindow::new(
                    p.isolation.lower,
                    p.isolation.target,
                    p.isolation.upper,
                )),
                method: p.activation.method as u8,
                energy: p.activation.energy,
            })
        });
        let voltages = acquisition
            .compensation_voltages
            .as_ref()
            .map(|v| fbb.create_vector(v));
        let acquisition_offset = schema::Acquisition::create(&mut fbb, &schema::AcquisitionArgs {
            low_mz: acquisition.low_mz,
            high_mz: acquisition.high_mz,
            injection_time: acquisition.injection_time,
            compensation_voltages: voltages,
            mass_analyzer: acquisition.mass_analyzer as u8,
            scan_event: acquisition.scan_event,
            ionization_mode: acquisition.ionization_mode as u8,
            resolution: acquisition.resolution.unwrap_or(0.0),
        });
        let data_offset = signal.as_ref().map(|s| {
            let mz = fbb.create_vector(&s.mz);
            let intensity = fbb.create_vector(&s.intensity);
            schema::SpectrumData::create(&mut fbb, &schema::SpectrumDataArgs {
                mz: Some(mz),
                intensity: Some(intensity),
            })
        });
        let filter_offset = fbb.create_string(&filter.text);

        let record = schema::ScanRecord::create(&mut fbb, &schema::ScanRecordArgs {
            index: (scan - self.levels.first()) as u32,
            ms_level: level,
            time: stats.start_time,
            polarity: filter.polarity as i8,
            mode: mode as u8,
            precursor: precursor_offset,
            filter: Some(filter_offset),
            ms_order: filter.ms_order as i16,
            scan_mode: filter.scan_mode,
            data: data_offset,
            acquisition: Some(acquisition_offset),
        });
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }

    /// Just the scan's signal arrays, without the metadata.
    pub fn spectrum_data(&self, scan: i32, centroid: bool) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let signal = accessor.signal_for(scan, centroid)?;
        let mut fbb = FlatBufferBuilder::new();
        let mz = fbb.create_vector(&signal.mz);
        let intensity = fbb.create_vector(&signal.intensity);
        let record = schema::SpectrumData::create(&mut fbb, &schema::SpectrumDataArgs {
            mz: Some(mz),
            intensity: Some(intensity),
        });
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }

    pub fn packet_annotations(
        &self,
        scan: i32,
        include_sampled_noise: bool,
    ) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let annotations = accessor.annotations_for(scan, include_sampled_noise)?;
        let mut fbb = FlatBufferBuilder::new();
        let mut args = schema::PacketAnnotationsArgs::default();
        args.noise = annotations.noise.as_ref().map(|v| fbb.create_vector(v));
        args.baseline = annotations.baseline.as_ref().map(|v| fbb.create_vector(v));
        args.charge = annotations.charge.as_ref().map(|v| fbb.create_vector(v));
        args.resolution = annotations.resolution.as_ref().map(|v| fbb.create_vector(v));
        args.sampled_noise_mz = annotations
            .sampled_noise_mz
            .as_ref()
            .map(|v| fbb.create_vector(v));
        args.sampled_noise = annotations
            .sampled_noise
            .as_ref()
            .map(|v| fbb.create_vector(v));
        args.sampled_noise_baseline = annotations
            .sampled_noise_baseline
            .as_ref()
            .map(|v| fbb.create_vector(v));
        let record = schema::PacketAnnotations::create(&mut fbb, &args);
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }

    /// The instrument identity headers plus the configuration catalog in id
    /// order.
    pub fn instrument_model(&self) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let info = accessor.instrument_info();
        let pairs: Vec<schema::InstrumentConfiguration> = self
            .configurations
            .iter()
            .map(|((analyzer, mode), _)| {
                schema::InstrumentConfiguration::new(analyzer as u8, mode as u8)
            })
            .collect();

        let mut fbb = FlatBufferBuilder::new();
        let model = fbb.create_string(&info.model);
        let name = fbb.create_string(&info.name);
        let serial = fbb.create_string(&info.serial_number);
        let hardware = fbb.create_string(&info.hardware_version);
        let software = fbb.create_string(&info.software_version);
        let configurations = fbb.create_vector(&pairs);
        let record = schema::InstrumentModel::create(&mut fbb, &schema::InstrumentModelArgs {
            model: Some(model),
            name: Some(name),
            serial_number: Some(serial),
            hardware_version: Some(hardware),
            software_version: Some(software),
            configurations: Some(configurations),
        });
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }

    pub fn file_description(&self) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let sample = accessor.sample_info();
        let source = accessor.source_file();
        let created = accessor.creation_date().map(|d| d.to_rfc3339());
        let per_level = self.levels.spectra_per_ms_level();

        let mut fbb = FlatBufferBuilder::new();
        let sample_id = fbb.create_string(&sample.sample_id);
        let source_file = fbb.create_string(&source);
        let creation_date = created.as_deref().map(|d| fbb.create_string(d));
        let per_level = fbb.create_vector(&per_level);
        let sample_name = fbb.create_string(&sample.sample_name);
        let sample_vial = fbb.create_string(&sample.sample_vial);
        let sample_comment = fbb.create_string(&sample.sample_comment);
        let labels: Vec<_> = self
            .trailers
            .labels()
            .map(|label| fbb.create_string(label))
            .collect();
        let trailer_headers = fbb.create_vector(&labels);

        let record = schema::FileDescription::create(&mut fbb, &schema::FileDescriptionArgs {
            sample_id: Some(sample_id),
            source_file: Some(source_file),
            creation_date,
            spectra_per_ms_level: Some(per_level),
            sample_name: Some(sample_name),
            sample_vial: Some(sample_vial),
            sample_comment: Some(sample_comment),
            trailer_headers: Some(trailer_headers),
        });
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }

    pub fn instrument_method_count(&self) -> Result<u32, AccessorError> {
        Ok(self.accessor()?.instrument_method_count())
    }

    /// `None` when the file stores no method at `index`.
    pub fn instrument_method(&self, index: u32) -> Result<Option<Vec<u8>>, AccessorError> {
        let accessor = self.accessor()?;
        let Some(method) = accessor.instrument_method(index) else {
            return Ok(None);
        };
        let mut fbb = FlatBufferBuilder::new();
        let text = fbb.create_string(&method.text);
        let display_name = fbb.create_string(&method.display_name);
        let name = fbb.create_string(&method.name);
        let record = schema::InstrumentMethod::create(&mut fbb, &schema::InstrumentMethodArgs {
            index: index as u8,
            text: Some(text),
            display_name: Some(display_name),
            name: Some(name),
        });
        fbb.finish(record, None);
        Ok(Some(fbb.finished_data().to_vec()))
    }

    /// One whole-run summary trace, TIC or base peak.
    pub fn summary_trace(&self, trace_type: TraceType) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let trace = accessor.summary_trace(trace_type)?;
        let mut fbb = FlatBufferBuilder::new();
        let time = fbb.create_vector(&trace.time);
        let intensity = fbb.create_vector(&trace.intensity);
        let data = schema::ChromatogramData::create(&mut fbb, &schema::ChromatogramDataArgs {
            time: Some(time),
            intensity: Some(intensity),
        });
        let record =
            schema::ChromatogramRecord::create(&mut fbb, &schema::ChromatogramRecordArgs {
                trace_type: trace.trace_type as i16,
                start_index: trace.start_index,
                end_index: trace.end_index,
                data: Some(data),
            });
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }

    /// The scan's raw trailer listing: normalized labels paired with the
    /// display form of each stored value, in slot order.
    pub fn raw_trailers(&self, scan: i32) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let values = accessor.trailer_values(scan)?;
        let mut fbb = FlatBufferBuilder::new();
        let entries: Vec<_> = self
            .trailers
            .labels()
            .zip(values.iter())
            .map(|(label, value)| {
                let label = fbb.create_string(label);
                let value = fbb.create_string(&value.to_text());
                schema::TrailerValue::create(&mut fbb, &schema::TrailerValueArgs {
                    label: Some(label),
                    value: Some(value),
                })
            })
            .collect();
        let values = fbb.create_vector(&entries);
        let record = schema::TrailerValues::create(&mut fbb, &schema::TrailerValuesArgs {
            values: Some(values),
        });
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }

    /// All status-log series, partitioned by value kind.
    pub fn status_logs(&self) -> Result<Vec<u8>, AccessorError> {
        let accessor = self.accessor()?;
        let logs = status_log::aggregate(&accessor.status_log_entries());

        let mut fbb = FlatBufferBuilder::new();
        let float_logs: Vec<_> = logs
            .floats
            .iter()
            .map(|series| {
                let name = fbb.create_string(&series.label);
                let times = fbb.create_vector(&series.times);
                let values = fbb.create_vector(&series.values);
                schema::StatusLogFloat::create(&mut fbb, &schema::StatusLogFloatArgs {
                    name: Some(name),
                    times: Some(times),
                    values: Some(values),
                })
            })
            .collect();
        let int_logs: Vec<_> = logs
            .integers
            .iter()
            .map(|series| {
                let name = fbb.create_string(&series.label);
                let times = fbb.create_vector(&series.times);
                let values = fbb.create_vector(&series.values);
                schema::StatusLogInt::create(&mut fbb, &schema::StatusLogIntArgs {
                    name: Some(name),
                    times: Some(times),
                    values: Some(values),
                })
            })
            .collect();
        let bool_logs: Vec<_> = logs
            .booleans
            .iter()
            .map(|series| {
                let name = fbb.create_string(&series.label);
                let times = fbb.create_vector(&series.times);
                let values = fbb.create_vector(&series.values);
                schema::StatusLogBool::create(&mut fbb, &schema::StatusLogBoolArgs {
                    name: Some(name),
                    times: Some(times),
                    values: Some(values),
                })
            })
            .collect();
        let string_logs: Vec<_> = logs
            .strings
            .iter()
            .map(|series| {
                let name = fbb.create_string(&series.label);
                let times = fbb.create_vector(&series.times);
                let values: Vec<_> = series
                    .values
                    .iter()
                    .map(|v| fbb.create_string(v))
                    .collect();
                let values = fbb.create_vector(&values);
                schema::StatusLogString::create(&mut fbb, &schema::StatusLogStringArgs {
                    name: Some(name),
                    times: Some(times),
                    values: Some(values),
                })
            })
            .collect();

        let float_logs = fbb.create_vector(&float_logs);
        let int_logs = fbb.create_vector(&int_logs);
        let bool_logs = fbb.create_vector(&bool_logs);
        let string_logs = fbb.create_vector(&string_logs);
        let record =
            schema::StatusLogCollection::create(&mut fbb, &schema::StatusLogCollectionArgs {
                float_logs: Some(float_logs),
                bool_logs: Some(bool_logs),
                int_logs: Some(int_logs),
                string_logs: Some(string_logs),
            });
        fbb.finish(record, None);
        Ok(fbb.finished_data().to_vec())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("path", &self.path)
            .field("status", &self.status)
            .field("first", &self.levels.first())
            .field("last", &self.levels.last())
            .field("configurations", &self.configurations.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    use crate::accessor::{
        InstrumentInfo, MethodText, RawValue, SampleInfo, ScanEventInfo, SignalData,
        StatusLogEntry, TrailerHeader, TrailerKind,
    };
    use crate::constants::{IonizationMode, MassAnalyzer};
    use crate::testing::{MockAccessor, MockFactory};

    /// 100 scans, 50 is a survey, 51..=55 are fragments of it.
    fn survey_run() -> MockAccessor {
        let levels: Vec<u8> = (1..=100)
            .map(|scan| if (51..=55).contains(&scan) { 2 } else { 1 })
            .collect();
        let mut accessor = MockAccessor::with_levels(&levels);
        accessor.set_trailer_headers(vec![
            TrailerHeader::new("Monoisotopic M/Z:", TrailerKind::Double),
            TrailerHeader::new("Charge State:", TrailerKind::Short),
            TrailerHeader::new("MS2 Isolation Width:", TrailerKind::Double),
        ]);
        accessor.set_trailer_values(
            53,
            vec![
                RawValue::Float(500.0),
                RawValue::Integer(2),
                RawValue::Float(2.0),
            ],
        );
        accessor
    }

    fn session(accessor: MockAccessor) -> Session {
        Session::open("run.raw", Arc::new(MockFactory::new(accessor)))
    }

    #[test_log::test]
    fn test_open_failure_still_yields_session() {
        let session = Session::open("missing.raw", Arc::new(MockFactory::failing()));
        assert_eq!(session.status(), SessionStatus::FileNotFound);
        assert_eq!(session.spectrum_count(), 0);
        assert_eq!(session.first_spectrum(), -1);
        assert!(session.error_message().contains("missing.raw"));
        assert!(session.describe_scan(1, true, false).is_err());
    }

    #[test]
    fn test_range_and_toggles() {
        let session = session(survey_run());
        assert_eq!(session.status(), SessionStatus::Ok);
        assert_eq!(session.first_spectrum(), 1);
        assert_eq!(session.last_spectrum(), 100);
        assert_eq!(session.spectrum_count(), 100);
        assert!(session.signal_loading());
        assert!(!session.centroid_spectra());
        session.set_signal_loading(false);
        session.set_centroid_spectra(true);
        assert!(!session.signal_loading());
        assert!(session.centroid_spectra());
    }

    #[test]
    fn test_scan_record_fields() {
        let session = session(survey_run());
        let bytes = session.describe_scan(53, true, false).unwrap();
        let record = schema::root_as_scan_record(&bytes).unwrap();

        assert_eq!(record.index(), 52);
        assert_eq!(record.ms_level(), 2);
        assert_eq!(record.ms_order(), 2);
        assert_eq!(record.polarity(), 1);
        assert_eq!(record.mode(), SpectrumMode::Profile as u8);

        let precursor = record.precursor().unwrap();
        assert_eq!(precursor.mono_mz(), 500.0);
        assert_eq!(precursor.charge(), 2);
        assert_eq!(precursor.master_scan(), 50);
        let window = precursor.isolation_window().unwrap();
        assert_eq!(window.lower(), 499.0);
        assert_eq!(window.target(), 500.0);
        assert_eq!(window.upper(), 501.0);

        let acquisition = record.acquisition().unwrap();
        assert_eq!(acquisition.scan_event(), 1);
        assert_eq!(acquisition.low_mz(), 150.0);
        assert_eq!(acquisition.high_mz(), 2000.0);

        let data = record.data().unwrap();
        assert_eq!(data.mz().unwrap().len(), 3);
        let mz: Vec<f64> = data.mz().unwrap().iter().collect();
        assert!(mz.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_survey_scan_has_no_precursor() {
        let session = session(survey_run());
        let bytes = session.describe_scan(50, true, false).unwrap();
        let record = schema::root_as_scan_record(&bytes).unwrap();
        assert_eq!(record.ms_level(), 1);
        assert!(record.precursor().is_none());
        assert!(record.acquisition().is_some());
    }

    #[test]
    fn test_metadata_identical_without_signal() {
        let session = session(survey_run());
        let with_signal = session.describe_scan(53, true, false).unwrap();
        let without_signal = session.describe_scan(53, false, false).unwrap();

        let full = schema::root_as_scan_record(&with_signal).unwrap();
        let bare = schema::root_as_scan_record(&without_signal).unwrap();
        assert!(full.data().is_some());
        assert!(bare.data().is_none());

        assert_eq!(full.index(), bare.index());
        assert_eq!(full.ms_level(), bare.ms_level());
        assert_eq!(full.time(), bare.time());
        assert_eq!(full.polarity(), bare.polarity());
        assert_eq!(full.mode(), bare.mode());
        assert_eq!(full.filter(), bare.filter());
        assert_eq!(full.ms_order(), bare.ms_order());
        assert_eq!(full.scan_mode(), bare.scan_mode());
        let (p1, p2) = (full.precursor().unwrap(), bare.precursor().unwrap());
        assert_eq!(p1.mono_mz(), p2.mono_mz());
        assert_eq!(p1.charge(), p2.charge());
        assert_eq!(p1.master_scan(), p2.master_scan());
        assert_eq!(p1.isolation_window(), p2.isolation_window());
        let (a1, a2) = (full.acquisition().unwrap(), bare.acquisition().unwrap());
        assert_eq!(a1.low_mz(), a2.low_mz());
        assert_eq!(a1.high_mz(), a2.high_mz());
        assert_eq!(a1.injection_time(), a2.injection_time());
        assert_eq!(a1.scan_event(), a2.scan_event());
    }

    #[test]
    fn test_describe_scan_is_byte_identical() {
        let session = session(survey_run());
        let first = session.describe_scan(53, true, false).unwrap();
        let second = session.describe_scan(53, true, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_scan_is_an_error() {
        let session = session(survey_run());
        let err = session.describe_scan(101, true, false).unwrap_err();
        assert!(matches!(err, AccessorError::ScanOutOfRange { scan: 101, .. }));
        assert!(session.describe_scan(0, true, false).is_err());
    }

    #[test]
    fn test_spectrum_data_only() {
        let mut accessor = MockAccessor::with_levels(&[1]);
        accessor.set_signal(
            1,
            SignalData { mz: vec![100.0, 200.0], intensity: vec![5.0, 7.0] },
        );
        let session = session(accessor);
        let bytes = session.spectrum_data(1, false).unwrap();
        let data = schema::root_as_spectrum_data(&bytes).unwrap();
        let mz: Vec<f64> = data.mz().unwrap().iter().collect();
        assert_eq!(mz, vec![100.0, 200.0]);
        let intensity: Vec<f32> = data.intensity().unwrap().iter().collect();
        assert_eq!(intensity, vec![5.0, 7.0]);
    }

    #[test]
    fn test_centroid_stream_selected() {
        let mut accessor = MockAccessor::with_levels(&[1]);
        accessor.set_signal(
            1,
            SignalData { mz: vec![100.0, 100.1, 100.2], intensity: vec![1.0, 9.0, 1.0] },
        );
        accessor.set_centroid_signal(
            1,
            SignalData { mz: vec![100.1], intensity: vec![11.0] },
        );
        let session = session(accessor);

        let bytes = session.describe_scan(1, true, true).unwrap();
        let record = schema::root_as_scan_record(&bytes).unwrap();
        assert_eq!(record.mode(), SpectrumMode::Centroid as u8);
        assert_eq!(record.data().unwrap().mz().unwrap().len(), 1);

        let bytes = session.describe_scan(1, true, false).unwrap();
        let record = schema::root_as_scan_record(&bytes).unwrap();
        assert_eq!(record.mode(), SpectrumMode::Profile as u8);
        assert_eq!(record.data().unwrap().mz().unwrap().len(), 3);
    }

    #[test]
    fn test_configuration_catalog_ids() {
        let mut accessor = MockAccessor::with_levels(&[1, 2]);
        accessor.set_scan_events(vec![vec![
            ScanEventInfo {
                mass_analyzer: MassAnalyzer::FTMS,
                ionization_mode: IonizationMode::ElectroSpray,
            },
            ScanEventInfo {
                mass_analyzer: MassAnalyzer::ITMS,
                ionization_mode: IonizationMode::ElectroSpray,
            },
            ScanEventInfo {
                mass_analyzer: MassAnalyzer::FTMS,
                ionization_mode: IonizationMode::ElectroSpray,
            },
        ]]);
        let session = session(accessor);
        let bytes = session.instrument_model().unwrap();
        let record = schema::root_as_instrument_model(&bytes).unwrap();
        let configurations = record.configurations().unwrap();
        assert_eq!(configurations.len(), 2);
        assert_eq!(configurations.get(0).mass_analyzer(), MassAnalyzer::FTMS as u8);
        assert_eq!(configurations.get(1).mass_analyzer(), MassAnalyzer::ITMS as u8);
    }

    #[test]
    fn test_model_fallback_when_no_scan_events() {
        let mut accessor = MockAccessor::with_levels(&[1]);
        accessor.set_instrument_info(InstrumentInfo {
            model: "Orbitrap Fusion".into(),
            name: "Fusion".into(),
            ..Default::default()
        });
        let session = session(accessor);
        let bytes = session.instrument_model().unwrap();
        let record = schema::root_as_instrument_model(&bytes).unwrap();
        assert_eq!(record.model(), Some("Orbitrap Fusion"));
        let configurations = record.configurations().unwrap();
        assert_eq!(configurations.len(), 2);
        assert_eq!(configurations.get(0).mass_analyzer(), MassAnalyzer::FTMS as u8);
        assert_eq!(
            configurations.get(0).ionization_mode(),
            IonizationMode::ElectroSpray as u8
        );
    }

    #[test]
    fn test_file_description_record() {
        let mut accessor = survey_run();
        accessor.set_sample_info(SampleInfo {
            sample_id: "S-001".into(),
            sample_name: "plasma digest".into(),
            sample_vial: "A3".into(),
            sample_comment: String::new(),
        });
        accessor.set_creation_date(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());
        let session = session(accessor);

        let bytes = session.file_description().unwrap();
        let record = schema::root_as_file_description(&bytes).unwrap();
        assert_eq!(record.sample_id(), Some("S-001"));
        assert_eq!(record.sample_name(), Some("plasma digest"));
        assert_eq!(record.source_file(), Some("run.raw"));
        assert_eq!(record.creation_date(), Some("2024-03-01T12:30:00+00:00"));
        let per_level: Vec<u32> = record.spectra_per_ms_level().unwrap().iter().collect();
        assert_eq!(per_level, vec![95, 5]);
        let headers = record.trailer_headers().unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get(0), "Monoisotopic M/Z");
    }

    #[test]
    fn test_instrument_methods() {
        let mut accessor = MockAccessor::with_levels(&[1]);
        accessor.set_methods(vec![MethodText {
            text: "scan settings ...".into(),
            display_name: "TMT16".into(),
            name: "method-1".into(),
        }]);
        let session = session(accessor);

        assert_eq!(session.instrument_method_count().unwrap(), 1);
        let bytes = session.instrument_method(0).unwrap().unwrap();
        let record = schema::root_as_instrument_method(&bytes).unwrap();
        assert_eq!(record.index(), 0);
        assert_eq!(record.display_name(), Some("TMT16"));
        assert_eq!(record.text(), Some("scan settings ..."));
        assert!(session.instrument_method(3).unwrap().is_none());
    }

    #[test]
    fn test_summary_traces() {
        let session = session(survey_run());

        let bytes = session.summary_trace(TraceType::TIC).unwrap();
        let record = schema::root_as_chromatogram_record(&bytes).unwrap();
        assert_eq!(record.trace_type(), TraceType::TIC as i16);
        let data = record.data().unwrap();
        assert_eq!(data.time().unwrap().len(), 100);
        let times: Vec<f64> = data.time().unwrap().iter().collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]));

        let bytes = session.summary_trace(TraceType::BasePeak).unwrap();
        let record = schema::root_as_chromatogram_record(&bytes).unwrap();
        assert_eq!(record.trace_type(), TraceType::BasePeak as i16);
    }

    #[test]
    fn test_raw_trailer_listing() {
        let session = session(survey_run());
        let bytes = session.raw_trailers(53).unwrap();
        let record = schema::root_as_trailer_values(&bytes).unwrap();
        let values = record.values().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values.get(0).label(), Some("Monoisotopic M/Z"));
        assert_eq!(values.get(0).value(), Some("500"));
        assert_eq!(values.get(1).label(), Some("Charge State"));
        assert_eq!(values.get(1).value(), Some("2"));
    }

    #[test]
    fn test_status_log_collection() {
        let mut accessor = MockAccessor::with_levels(&[1]);
        accessor.set_status_log(vec![
            StatusLogEntry {
                time: 0.1,
                label: "Vacuum OK:".into(),
                kind: TrailerKind::Boolean,
                value: RawValue::Boolean(true),
            },
            StatusLogEntry {
                time: 0.5,
                label: "Vacuum OK:".into(),
                kind: TrailerKind::Boolean,
                value: RawValue::Boolean(false),
            },
            StatusLogEntry {
                time: 0.9,
                label: "Vacuum OK:".into(),
                kind: TrailerKind::Boolean,
                value: RawValue::Boolean(true),
            },
            StatusLogEntry {
                time: 0.1,
                label: "Ion Gauge Pressure".into(),
                kind: TrailerKind::Double,
                value: RawValue::Float(1.2e-5),
            },
        ]);
        let session = session(accessor);

        let bytes = session.status_logs().unwrap();
        let record = schema::root_as_status_log_collection(&bytes).unwrap();
        let bool_logs = record.bool_logs().unwrap();
        assert_eq!(bool_logs.len(), 1);
        let series = bool_logs.get(0);
        assert_eq!(series.name(), Some("Vacuum OK"));
        assert_eq!(series.times().unwrap().len(), 3);
        assert_eq!(series.values().unwrap().len(), 3);
        let float_logs = record.float_logs().unwrap();
        assert_eq!(float_logs.len(), 1);
        assert_eq!(float_logs.get(0).name(), Some("Ion Gauge Pressure"));
    }

    #[test]
    fn test_error_message_from_accessor() {
        let mut accessor = MockAccessor::with_levels(&[1]);
        accessor.set_error_message("device warning: calibration stale");
        let session = session(accessor);
        assert_eq!(session.error_message(), "device warning: calibration stale");
    }
}
