//! Normalizes the loosely-typed metadata of Thermo instrument files and
//! assembles it into FlatBuffers records that can be handed across a C
//! boundary.
//!
//! The vendor's file accessor is an external capability behind the
//! [`accessor::ScanAccessor`] and [`accessor::AccessorFactory`] traits; this
//! crate supplies everything above it: MS-level classification, precursor
//! lineage and isolation-window resolution, acquisition-parameter decoding,
//! instrument-configuration cataloguing, status-log aggregation, and the
//! binary record contract in `schema/record.fbs`.
//!
//! A [`session::Session`] owns the indices built once per open file and
//! assembles every record kind; the [`ffi`] module maps sessions onto
//! numeric tokens and fills host-allocated buffers.

pub mod accessor;
pub mod constants;
pub mod error;
pub mod ffi;
pub mod index;
pub mod instruments;
pub mod resolve;
pub mod schema;
pub mod session;
pub mod status_log;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::accessor::{AccessorFactory, ScanAccessor};
pub use crate::error::{AccessorError, OpenError, SessionStatus};
pub use crate::session::Session;
