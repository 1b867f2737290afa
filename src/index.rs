//! The three one-time indices a session builds at open: the trailer label
//! map, the scan-level lineage table, and the instrument-configuration
//! catalog. All are immutable after construction and safe to read from many
//! threads at once.

pub mod configurations;
pub mod levels;
pub mod trailer;

pub use configurations::ConfigurationCatalog;
pub use levels::ScanLevelIndex;
pub use trailer::TrailerIndex;
