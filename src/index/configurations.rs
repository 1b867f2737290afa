//! Deduplicates the (mass analyzer, ionization mode) pairs used across all
//! scan-event definitions and gives each a stable small integer id in
//! first-seen order.

use indexmap::IndexMap;

use crate::accessor::ScanEventInfo;
use crate::constants::{IonizationMode, MassAnalyzer};

#[derive(Debug, Default, Clone)]
pub struct ConfigurationCatalog {
    table: IndexMap<(MassAnalyzer, IonizationMode), u32>,
}

impl ConfigurationCatalog {
    /// Walk every scan-event definition across all segments, interning each
    /// distinct pair. The table is append-only here and frozen afterwards.
    pub fn build(segments: &[Vec<ScanEventInfo>]) -> Self {
        let mut this = Self::default();
        for segment in segments {
            for event in segment {
                this.intern(event.mass_analyzer, event.ionization_mode);
            }
        }
        this
    }

    /// Seed the catalog from a list of pairs when the file carries no scan
    /// event definitions, e.g. from the instrument model's known hardware.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MassAnalyzer, IonizationMode)>,
    {
        let mut this = Self::default();
        for (analyzer, mode) in pairs {
            this.intern(analyzer, mode);
        }
        this
    }

    fn intern(&mut self, analyzer: MassAnalyzer, mode: IonizationMode) -> u32 {
        let next = self.table.len() as u32;
        *self.table.entry((analyzer, mode)).or_insert(next)
    }

    pub fn id_for(&self, analyzer: MassAnalyzer, mode: IonizationMode) -> Option<u32> {
        self.table.get(&(analyzer, mode)).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = ((MassAnalyzer, IonizationMode), u32)> + '_ {
        self.table.iter().map(|(pair, id)| (*pair, *id))
    }
}
