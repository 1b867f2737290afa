//! The C boundary: session tokens, the caller-registered allocator, and one
//! export per record-producing operation.
//!
//! Every bytes-returning export fills a [`RawVec`] with memory obtained from
//! the registered allocator, so the host owns every buffer it receives. A
//! failure of any kind fills an empty `RawVec`; the reason is logged, and
//! `rawbridge_status` distinguishes a dead token from a bad scan number.
//!
//! The handle-table lock is only held to look up or mutate the table itself,
//! never across accessor I/O.

use std::collections::HashMap;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::accessor::{AccessorFactory, ScanAccessor};
use crate::constants::TraceType;
use crate::error::{AccessorError, OpenError, SessionStatus};
use crate::session::Session;

/// A caller-owned byte buffer, layout-compatible with the host's view.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawVec {
    pub data: *mut u8,
    pub len: usize,
    pub capacity: usize,
}

impl RawVec {
    pub const fn empty() -> Self {
        Self { data: std::ptr::null_mut(), len: 0, capacity: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The host-side allocator: asked for `size` bytes, it fills `out` with a
/// buffer of at least that capacity that the host tracks and frees.
pub type AllocatorCallback = extern "C" fn(size: usize, out: *mut RawVec);

/// Produces the accessor factory for a path. Registered once per process by
/// the embedding crate before any file is opened.
pub trait FactoryProvider: Send + Sync {
    fn factory_for(&self, path: &str) -> Arc<dyn AccessorFactory>;
}

static ALLOCATOR: OnceLock<AllocatorCallback> = OnceLock::new();
static PROVIDER: OnceLock<Arc<dyn FactoryProvider>> = OnceLock::new();
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

fn handles() -> &'static Mutex<HashMap<u64, Arc<Session>>> {
    static HANDLES: OnceLock<Mutex<HashMap<u64, Arc<Session>>>> = OnceLock::new();
    HANDLES.get_or_init(|| Mutex::new(HashMap::new()))
}

fn session_for(token: u64) -> Option<Arc<Session>> {
    handles().lock().get(&token).cloned()
}

/// Register the accessor provider. Returns false when one is already set;
/// the first registration wins for the life of the process.
pub fn set_provider(provider: Arc<dyn FactoryProvider>) -> bool {
    PROVIDER.set(provider).is_ok()
}

/// Opens attempted before a provider is registered get a session whose
/// status reports the failure.
struct UnregisteredFactory {
    path: String,
}

impl AccessorFactory for UnregisteredFactory {
    fn open(&self) -> Result<Box<dyn ScanAccessor>, OpenError> {
        Err(OpenError::Failure(
            self.path.clone(),
            "no accessor provider registered".into(),
        ))
    }
}

fn open_session(path: &str) -> u64 {
    let session = match PROVIDER.get() {
        Some(provider) => Session::open(path, provider.factory_for(path)),
        None => {
            log::error!("open of {path:?} before provider registration");
            Session::open(path, Arc::new(UnregisteredFactory { path: path.to_string() }))
        }
    };
    let token = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
    handles().lock().insert(token, Arc::new(session));
    token
}

/// Copy `bytes` into a host-allocated buffer behind `out`. Empty input, a
/// missing allocator, or an undersized buffer all leave `out` empty.
unsafe fn fill(out: *mut RawVec, bytes: &[u8]) {
    if out.is_null() {
        return;
    }
    *out = RawVec::empty();
    if bytes.is_empty() {
        return;
    }
    let Some(allocate) = ALLOCATOR.get() else {
        log::error!("no allocator registered, dropping a {} byte record", bytes.len());
        return;
    };
    allocate(bytes.len(), out);
    let buffer = *out;
    if buffer.data.is_null() || buffer.capacity < bytes.len() {
        log::error!(
            "allocator returned {} bytes for a {} byte record",
            buffer.capacity,
            bytes.len()
        );
        *out = RawVec::empty();
        return;
    }
    std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer.data, bytes.len());
    (*out).len = bytes.len();
}

unsafe fn respond<F>(token: u64, out: *mut RawVec, op: F)
where
    F: FnOnce(&Session) -> Result<Vec<u8>, AccessorError>,
{
    let bytes = match session_for(token) {
        Some(session) => match op(&session) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::debug!("token {token}: {err}");
                Vec::new()
            }
        },
        None => {
            log::debug!("unknown session token {token}");
            Vec::new()
        }
    };
    fill(out, &bytes);
}

/// Register the host allocator. First registration wins.
#[no_mangle]
pub extern "C" fn rawbridge_set_allocator(allocator: AllocatorCallback) -> bool {
    ALLOCATOR.set(allocator).is_ok()
}

/// Open `path` and return a session token. Always returns a live token;
/// `rawbridge_status` reports whether the open actually succeeded.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_open(path: *const c_char) -> u64 {
    let path = if path.is_null() {
        String::new()
    } else {
        CStr::from_ptr(path).to_string_lossy().into_owned()
    };
    open_session(&path)
}

#[no_mangle]
pub extern "C" fn rawbridge_close(token: u64) {
    if handles().lock().remove(&token).is_none() {
        log::debug!("close of unknown session token {token}");
    }
}

#[no_mangle]
pub extern "C" fn rawbridge_close_all() {
    handles().lock().clear();
}

#[no_mangle]
pub extern "C" fn rawbridge_status(token: u64) -> u32 {
    match session_for(token) {
        Some(session) => session.status() as u32,
        None => SessionStatus::HandleNotFound as u32,
    }
}

#[no_mangle]
pub extern "C" fn rawbridge_first_spectrum(token: u64) -> i32 {
    session_for(token).map(|s| s.first_spectrum()).unwrap_or(-1)
}

#[no_mangle]
pub extern "C" fn rawbridge_last_spectrum(token: u64) -> i32 {
    session_for(token).map(|s| s.last_spectrum()).unwrap_or(-1)
}

#[no_mangle]
pub extern "C" fn rawbridge_spectrum_count(token: u64) -> u32 {
    session_for(token).map(|s| s.spectrum_count()).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn rawbridge_get_signal_loading(token: u64) -> bool {
    session_for(token).map(|s| s.signal_loading()).unwrap_or(false)
}

#[no_mangle]
pub extern "C" fn rawbridge_set_signal_loading(token: u64, on: bool) {
    if let Some(session) = session_for(token) {
        session.set_signal_loading(on);
    }
}

#[no_mangle]
pub extern "C" fn rawbridge_get_centroid_spectra(token: u64) -> bool {
    session_for(token).map(|s| s.centroid_spectra()).unwrap_or(false)
}

#[no_mangle]
pub extern "C" fn rawbridge_set_centroid_spectra(token: u64, on: bool) {
    if let Some(session) = session_for(token) {
        session.set_centroid_spectra(on);
    }
}

/// The full scan record for `scan`, honoring the session's signal-loading
/// and centroiding toggles.
///
/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_spectrum_description_for(
    token: u64,
    scan: i32,
    out: *mut RawVec,
) {
    respond(token, out, |session| {
        session.describe_scan(scan, session.signal_loading(), session.centroid_spectra())
    });
}

/// Just the signal arrays for `scan`. `centroid` selects the peak-picked
/// stream for this call alone, independent of the session toggle.
///
/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_spectrum_data_for(
    token: u64,
    scan: i32,
    centroid: bool,
    out: *mut RawVec,
) {
    respond(token, out, |session| session.spectrum_data(scan, centroid));
}

/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_instrument_model(token: u64, out: *mut RawVec) {
    respond(token, out, |session| session.instrument_model());
}

/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_file_description(token: u64, out: *mut RawVec) {
    respond(token, out, |session| session.file_description());
}

#[no_mangle]
pub extern "C" fn rawbridge_instrument_method_count(token: u64) -> u32 {
    session_for(token)
        .and_then(|s| s.instrument_method_count().ok())
        .unwrap_or(0)
}

/// The stored instrument method at `index`; empty when the file has none.
///
/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_instrument_method(token: u64, index: u32, out: *mut RawVec) {
    respond(token, out, |session| {
        Ok(session.instrument_method(index)?.unwrap_or_default())
    });
}

/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_get_tic(token: u64, out: *mut RawVec) {
    respond(token, out, |session| session.summary_trace(TraceType::TIC));
}

/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_get_bpc(token: u64, out: *mut RawVec) {
    respond(token, out, |session| session.summary_trace(TraceType::BasePeak));
}

/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_get_raw_trailer_values_for(
    token: u64,
    scan: i32,
    out: *mut RawVec,
) {
    respond(token, out, |session| session.raw_trailers(scan));
}

/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_get_status_logs(token: u64, out: *mut RawVec) {
    respond(token, out, |session| session.status_logs());
}

/// The file's error and warning text as UTF-8 bytes, empty when clean.
///
/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_get_file_error_message(token: u64, out: *mut RawVec) {
    respond(token, out, |session| Ok(session.error_message().into_bytes()));
}

/// # Safety
/// `out` must be null or a valid pointer to a `RawVec`.
#[no_mangle]
pub unsafe extern "C" fn rawbridge_packet_annotations_for(
    token: u64,
    scan: i32,
    include_sampled_noise: bool,
    out: *mut RawVec,
) {
    respond(token, out, |session| {
        session.packet_annotations(scan, include_sampled_noise)
    });
}
