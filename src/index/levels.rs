//! Classifies every scan's MS level up front and precomputes, per scan, the
//! most recent preceding scan at each lower level. Turns the common
//! master-scan lookup into O(1) instead of a backward walk per precursor.

use crate::accessor::ScanAccessor;
use crate::constants::MSOrder;
use crate::error::AccessorError;

pub const MAX_MS_LEVEL: usize = 10;

/// The MS level for an instrument order code, always in `[1, 10]`.
pub fn classify(order: MSOrder) -> u8 {
    order.ms_level()
}

/// Per-scan MS levels plus the lineage snapshots taken during one forward
/// pass over the acquired range.
#[derive(Debug, Default, Clone)]
pub struct ScanLevelIndex {
    first: i32,
    last: i32,
    levels: Vec<u8>,
    /// Entry `i` holds, for scan `first + i` at level `L`, the latest scan
    /// number seen at each level `1..=L` before that scan was processed.
    /// `-1` marks "no such scan yet".
    lineage: Vec<Vec<i32>>,
    counts: [u32; MAX_MS_LEVEL],
}

impl ScanLevelIndex {
    pub fn build(accessor: &dyn ScanAccessor) -> Result<Self, AccessorError> {
        let first = accessor.first_scan();
        let last = accessor.last_scan();
        let size = if last >= first { (last - first + 1) as usize } else { 0 };

        let mut this = Self {
            first,
            last,
            levels: Vec::with_capacity(size),
            lineage: Vec::with_capacity(size),
            counts: [0; MAX_MS_LEVEL],
        };

        let mut latest = [-1i32; MAX_MS_LEVEL];
        for scan in first..=last {
            let filter = accessor.filter_for(scan)?;
            let level = classify(filter.ms_order);
            let snapshot: Vec<i32> =
                (0..level as usize).map(|slot| latest[slot]).collect();
            this.lineage.push(snapshot);
            this.levels.push(level);
            this.counts[level as usize - 1] += 1;
            latest[level as usize - 1] = scan;
        }
        log::debug!(
            "scan level index built over {first}..={last}, counts {:?}",
            this.counts
        );
        Ok(this)
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    fn offset(&self, scan: i32) -> Option<usize> {
        if scan < self.first || scan > self.last {
            None
        } else {
            Some((scan - self.first) as usize)
        }
    }

    /// The classified MS level of `scan`, when it is inside the built range.
    pub fn level_of(&self, scan: i32) -> Option<u8> {
        self.offset(scan).map(|i| self.levels[i])
    }

    /// The nearest preceding scan whose level is strictly lower than
    /// `level`, from the snapshot taken when `scan` was indexed. `None` when
    /// the scan is outside the built range or no lower-level scan precedes
    /// it; the caller then falls back to a linear backward search.
    pub fn master_scan_for(&self, scan: i32, level: u8) -> Option<i32> {
        let entries = &self.lineage[self.offset(scan)?];
        let lower = (level as usize).saturating_sub(1).min(entries.len());
        entries[..lower].iter().copied().filter(|&s| s >= 0).max()
    }

    /// Scan counts per MS level, trimmed to the highest level present.
    pub fn spectra_per_ms_level(&self) -> Vec<u32> {
        let highest = self
            .counts
            .iter()
            .rposition(|&c| c > 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.counts[..highest].to_vec()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::MockAccessor;

    #[test]
    fn test_classify_bounds() {
        for code in [-3i16, -2, -1, 0, 1, 5, 10, 999, 77] {
            let level = classify(MSOrder::from(code));
            assert!((1..=10).contains(&level));
        }
        assert_eq!(classify(MSOrder::Any), 1);
        assert_eq!(classify(MSOrder::Unknown), 1);
    }

    #[test_log::test]
    fn test_lineage_snapshots() {
        // levels: 1 2 2 1 2 3
        let accessor = MockAccessor::with_levels(&[1, 2, 2, 1, 2, 3]);
        let index = ScanLevelIndex::build(&accessor).unwrap();

        assert_eq!(index.level_of(1), Some(1));
        assert_eq!(index.level_of(6), Some(3));
        assert_eq!(index.level_of(7), None);

        assert_eq!(index.master_scan_for(2, 2), Some(1));
        assert_eq!(index.master_scan_for(3, 2), Some(1));
        assert_eq!(index.master_scan_for(5, 2), Some(4));
        // scan 6 is level 3, nearest strictly-lower is the level 2 at scan 5
        assert_eq!(index.master_scan_for(6, 3), Some(5));
        // a level 1 scan has no lower-level predecessor
        assert_eq!(index.master_scan_for(4, 1), None);
        // outside the built range
        assert_eq!(index.master_scan_for(42, 2), None);
    }

    #[test]
    fn test_a_scan_is_never_its_own_master() {
        let accessor = MockAccessor::with_levels(&[2, 2]);
        let index = ScanLevelIndex::build(&accessor).unwrap();
        // no level 1 exists at all
        assert_eq!(index.master_scan_for(1, 2), None);
        assert_eq!(index.master_scan_for(2, 2), None);
    }

    #[test]
    fn test_per_level_counts() {
        let accessor = MockAccessor::with_levels(&[1, 2, 2, 1, 2, 3]);
        let index = ScanLevelIndex::build(&accessor).unwrap();
        assert_eq!(index.spectra_per_ms_level(), vec![2, 3, 1]);
    }

    #[test_log::test]
    fn test_empty_range() {
        let accessor = MockAccessor::with_levels(&[]);
        let index = ScanLevelIndex::build(&accessor).unwrap();
        assert_eq!(index.spectra_per_ms_level(), Vec::<u32>::new());
        assert_eq!(index.level_of(1), None);
    }
}
