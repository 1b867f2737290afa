//! Derives acquisition settings and precursor lineage for one scan from its
//! filter, trailer values, and statistics. Every missing value degrades to a
//! documented default; nothing in here raises an error.

use crate::accessor::{FilterInfo, RawValue, ScanAccessor, ScanStats};
use crate::constants::{DissociationMethod, IonizationMode, MassAnalyzer};
use crate::index::{ScanLevelIndex, TrailerIndex};

const INJECTION_TIME_LABEL: &str = "Ion Injection Time (ms)";
const SCAN_EVENT_LABEL: &str = "Scan Event";
const MONOISOTOPIC_MZ_LABEL: &str = "Monoisotopic M/Z";
const CHARGE_STATE_LABEL: &str = "Charge State";
const MASTER_SCAN_LABEL: &str = "Master Scan Number";
const ORBITRAP_RESOLUTION_LABEL: &str = "Orbitrap Resolution";
const FT_RESOLUTION_LABEL: &str = "FT Resolution";

/// The isolation window around a selected precursor.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IsolationSpan {
    pub lower: f64,
    pub target: f64,
    pub upper: f64,
}

impl IsolationSpan {
    /// `target` is the monoisotopic m/z; `half_width` is half the full
    /// isolation width; `offset` shifts the window without moving the
    /// target.
    pub fn new(target: f64, offset: f64, half_width: f64) -> Self {
        Self {
            lower: target + offset - half_width,
            target,
            upper: target + offset + half_width,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ActivationInfo {
    pub method: DissociationMethod,
    pub energy: f32,
}

/// Precursor lineage for a scan at MS level > 1.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrecursorInfo {
    pub mono_mz: f64,
    pub charge: i32,
    pub isolation: IsolationSpan,
    /// Scan number of the generating lower-level scan, `-1` when it could
    /// not be resolved.
    pub master_scan: i32,
    pub activation: ActivationInfo,
}

/// Per-scan acquisition parameters.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AcquisitionSettings {
    pub injection_time: f32,
    /// 1-based scan-event number.
    pub scan_event: i32,
    pub compensation_voltages: Option<Vec<f32>>,
    pub mass_analyzer: MassAnalyzer,
    pub ionization_mode: IonizationMode,
    pub low_mz: f64,
    pub high_mz: f64,
    pub resolution: Option<f32>,
}

/// Shared view over the session's trailer and scan-level indices for
/// resolving one scan at a time.
pub struct Resolver<'a> {
    trailers: &'a TrailerIndex,
    levels: &'a ScanLevelIndex,
}

impl<'a> Resolver<'a> {
    pub fn new(trailers: &'a TrailerIndex, levels: &'a ScanLevelIndex) -> Self {
        Self { trailers, levels }
    }

    /// Resolve the acquisition settings and, for MS level > 1, the precursor
    /// lineage of `scan`.
    pub fn resolve(
        &self,
        accessor: &dyn ScanAccessor,
        scan: i32,
        level: u8,
        filter: &FilterInfo,
        values: &[RawValue],
        stats: &ScanStats,
    ) -> (Option<PrecursorInfo>, AcquisitionSettings) {
        let acquisition = self.resolve_acquisition(filter, values, stats);
        if level <= 1 {
            return (None, acquisition);
        }

        let mut master_scan = self
            .trailers
            .get_i32(values, MASTER_SCAN_LABEL)
            .unwrap_or(-1);
        let mut mono_mz = self
            .trailers
            .get_f64(values, MONOISOTOPIC_MZ_LABEL)
            .unwrap_or(0.0);
        let charge = self.trailers.get_i32(values, CHARGE_STATE_LABEL).unwrap_or(0);
        // The trailer stores a full width; the window math wants a half-width.
        let mut half_width = self
            .trailers
            .get_f64(values, &format!("MS{level} Isolation Width"))
            .unwrap_or(0.0)
            / 2.0;

        let stage = filter.stage_for_level(level);
        let offset = stage.map(|s| s.isolation_offset).unwrap_or(0.0);

        if half_width == 0.0 {
            half_width = stage.map(|s| s.isolation_width / 2.0).unwrap_or(0.0);
        }
        if mono_mz == 0.0 {
            mono_mz = stage.map(|s| s.precursor_mz).unwrap_or(0.0);
        }
        if master_scan == -1 {
            master_scan = self.resolve_master_scan(accessor, scan, level);
        }

        let activation = stage
            .map(|s| ActivationInfo {
                method: s.activation.into(),
                energy: s.energy as f32,
            })
            .unwrap_or_default();

        let precursor = PrecursorInfo {
            mono_mz,
            charge,
            isolation: IsolationSpan::new(mono_mz, offset, half_width),
            master_scan,
            activation,
        };
        (Some(precursor), acquisition)
    }

    fn resolve_acquisition(
        &self,
        filter: &FilterInfo,
        values: &[RawValue],
        stats: &ScanStats,
    ) -> AcquisitionSettings {
        let injection_time = self
            .trailers
            .get_f64(values, INJECTION_TIME_LABEL)
            .unwrap_or(0.0) as f32;
        let scan_event = self.trailers.get_i32(values, SCAN_EVENT_LABEL).unwrap_or(1);

        // Zero means "not reported" in both resolution trailers.
        let resolution = self
            .trailers
            .get_f64(values, ORBITRAP_RESOLUTION_LABEL)
            .filter(|&v| v != 0.0)
            .or_else(|| {
                self.trailers
                    .get_f64(values, FT_RESOLUTION_LABEL)
                    .filter(|&v| v != 0.0)
            })
            .map(|v| v as f32);

        let compensation_voltages = filter
            .compensation_voltage_on
            .then(|| filter.compensation_voltages.clone());

        AcquisitionSettings {
            injection_time,
            scan_event,
            compensation_voltages,
            mass_analyzer: filter.mass_analyzer,
            ionization_mode: filter.ionization_mode,
            low_mz: stats.low_mz,
            high_mz: stats.high_mz,
            resolution,
        }
    }

    /// The scan-level index answers the common case; scans outside its range
    /// fall back to walking backward over the accessor's filters.
    fn resolve_master_scan(&self, accessor: &dyn ScanAccessor, scan: i32, level: u8) -> i32 {
        if let Some(master) = self.levels.master_scan_for(scan, level) {
            return master;
        }
        if self.levels.level_of(scan).is_some() {
            // in range, genuinely no lower-level predecessor
            return -1;
        }
        let mut candidate = scan - 1;
        while candidate >= accessor.first_scan() {
            let candidate_level = match self.levels.level_of(candidate) {
                Some(l) => l,
                None => match accessor.filter_for(candidate) {
                    Ok(filter) => filter.ms_order.ms_level(),
                    Err(err) => {
                        log::debug!("backward master-scan search stopped at {candidate}: {err}");
                        return -1;
                    }
                },
            };
            if candidate_level < level {
                return candidate;
            }
            candidate -= 1;
        }
        -1
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::accessor::{StageInfo, TrailerHeader, TrailerKind};
    use crate::constants::ActivationType;
    use crate::testing::MockAccessor;

    fn survey_then_fragments() -> MockAccessor {
        // scans 1..100, scan 50 level 1, 51..=55 level 2, rest level 1
        let levels: Vec<u8> = (1..=100)
            .map(|scan| if (51..=55).contains(&scan) { 2 } else { 1 })
            .collect();
        MockAccessor::with_levels(&levels)
    }

    fn indices(accessor: &MockAccessor) -> (TrailerIndex, ScanLevelIndex) {
        let trailers = TrailerIndex::build(&accessor.trailer_headers());
        let levels = ScanLevelIndex::build(accessor).unwrap();
        (trailers, levels)
    }

    #[test]
    fn test_master_scan_from_index() {
        let accessor = survey_then_fragments();
        let (trailers, levels) = indices(&accessor);
        let resolver = Resolver::new(&trailers, &levels);

        let filter = accessor.filter_for(53).unwrap();
        let values = accessor.trailer_values(53).unwrap();
        let stats = accessor.stats_for(53).unwrap();
        let (precursor, _) = resolver.resolve(&accessor, 53, 2, &filter, &values, &stats);
        assert_eq!(precursor.unwrap().master_scan, 50);
    }

    #[test]
    fn test_isolation_window_from_trailers() {
        let mut accessor = MockAccessor::with_levels(&[1, 2]);
        accessor.set_trailer_headers(vec![
            TrailerHeader::new("Monoisotopic M/Z:", TrailerKind::Double),
            TrailerHeader::new("MS2 Isolation Width:", TrailerKind::Double),
        ]);
        accessor.set_trailer_values(2, vec![RawValue::Float(500.0), RawValue::Float(2.0)]);
        let (trailers, levels) = indices(&accessor);
        let resolver = Resolver::new(&trailers, &levels);

        let filter = accessor.filter_for(2).unwrap();
        let values = accessor.trailer_values(2).unwrap();
        let stats = accessor.stats_for(2).unwrap();
        let (precursor, _) = resolver.resolve(&accessor, 2, 2, &filter, &values, &stats);
        let precursor = precursor.unwrap();
        assert_eq!(precursor.isolation.lower, 499.0);
        assert_eq!(precursor.isolation.target, 500.0);
        assert_eq!(precursor.isolation.upper, 501.0);
        assert!(precursor.isolation.lower <= precursor.isolation.target);
        assert!(precursor.isolation.target <= precursor.isolation.upper);
    }

    #[test]
    fn test_filter_fallbacks() {
        // no trailers at all: width, mono and activation come from the filter
        let mut accessor = MockAccessor::with_levels(&[1, 2]);
        accessor.set_stage(
            2,
            StageInfo {
                precursor_mz: 420.5,
                isolation_width: 3.0,
                isolation_offset: 0.0,
                activation: ActivationType::HigherEnergyCollisionalDissociation,
                energy: 27.0,
            },
        );
        let (trailers, levels) = indices(&accessor);
        let resolver = Resolver::new(&trailers, &levels);

        let filter = accessor.filter_for(2).unwrap();
        let values = accessor.trailer_values(2).unwrap();
        let stats = accessor.stats_for(2).unwrap();
        let (precursor, acquisition) =
            resolver.resolve(&accessor, 2, 2, &filter, &values, &stats);
        let precursor = precursor.unwrap();
        assert_eq!(precursor.mono_mz, 420.5);
        assert_eq!(precursor.isolation.lower, 419.0);
        assert_eq!(precursor.isolation.upper, 422.0);
        assert_eq!(precursor.activation.method, DissociationMethod::HCD);
        assert_eq!(precursor.activation.energy, 27.0);
        assert_eq!(precursor.master_scan, 1);

        assert_eq!(acquisition.injection_time, 0.0);
        assert_eq!(acquisition.scan_event, 1);
        assert!(acquisition.resolution.is_none());
        assert!(acquisition.compensation_voltages.is_none());
    }

    #[test]
    fn test_master_scan_strictly_precedes() {
        let accessor = survey_then_fragments();
        let (trailers, levels) = indices(&accessor);
        let resolver = Resolver::new(&trailers, &levels);
        for scan in 51..=55 {
            let filter = accessor.filter_for(scan).unwrap();
            let values = accessor.trailer_values(scan).unwrap();
            let stats = accessor.stats_for(scan).unwrap();
            let (precursor, _) =
                resolver.resolve(&accessor, scan, 2, &filter, &values, &stats);
            let master = precursor.unwrap().master_scan;
            assert!(master < scan);
            assert!(levels.level_of(master).unwrap() < 2);
        }
    }

    #[test]
    fn test_resolution_fallback_chain() {
        let mut accessor = MockAccessor::with_levels(&[1]);
        accessor.set_trailer_headers(vec![
            TrailerHeader::new("Orbitrap Resolution:", TrailerKind::Double),
            TrailerHeader::new("FT Resolution:", TrailerKind::Double),
        ]);
        accessor.set_trailer_values(1, vec![RawValue::Float(0.0), RawValue::Float(60000.0)]);
        let (trailers, levels) = indices(&accessor);
        let resolver = Resolver::new(&trailers, &levels);

        let filter = accessor.filter_for(1).unwrap();
        let values = accessor.trailer_values(1).unwrap();
        let stats = accessor.stats_for(1).unwrap();
        let (_, acquisition) = resolver.resolve(&accessor, 1, 1, &filter, &values, &stats);
        assert_eq!(acquisition.resolution, Some(60000.0));
    }
}
