//! Fixed-layout inline structs of the record contract. Fields are stored
//! little-endian at fixed byte offsets; the wrapper is a plain byte array so
//! it can be cast in place out of a record buffer.

/// 24-byte inline struct: `lower`, `target`, `upper` as three doubles.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Default)]
pub struct IsolationWindow(pub [u8; 24]);

impl IsolationWindow {
    pub fn new(lower: f64, target: f64, upper: f64) -> Self {
        let mut buf = [0u8; 24];
        buf[0..8].copy_from_slice(&lower.to_le_bytes());
        buf[8..16].copy_from_slice(&target.to_le_bytes());
        buf[16..24].copy_from_slice(&upper.to_le_bytes());
        Self(buf)
    }

    fn read_f64(&self, at: usize) -> f64 {
        let mut scratch = [0u8; 8];
        scratch.copy_from_slice(&self.0[at..at + 8]);
        f64::from_le_bytes(scratch)
    }

    pub fn lower(&self) -> f64 {
        self.read_f64(0)
    }

    pub fn target(&self) -> f64 {
        self.read_f64(8)
    }

    pub fn upper(&self) -> f64 {
        self.read_f64(16)
    }
}

impl core::fmt::Debug for IsolationWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IsolationWindow")
            .field("lower", &self.lower())
            .field("target", &self.target())
            .field("upper", &self.upper())
            .finish()
    }
}

impl flatbuffers::SimpleToVerifyInSlice for IsolationWindow {}

impl<'a> flatbuffers::Follow<'a> for IsolationWindow {
    type Inner = &'a IsolationWindow;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        <&'a IsolationWindow>::follow(buf, loc)
    }
}

impl<'a> flatbuffers::Follow<'a> for &'a IsolationWindow {
    type Inner = &'a IsolationWindow;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        flatbuffers::follow_cast_ref::<IsolationWindow>(buf, loc)
    }
}

impl flatbuffers::Push for IsolationWindow {
    type Output = IsolationWindow;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        let src = ::core::slice::from_raw_parts(
            self as *const IsolationWindow as *const u8,
            <Self as flatbuffers::Push>::size(),
        );
        dst.copy_from_slice(src);
    }
    #[inline]
    fn alignment() -> flatbuffers::PushAlignment {
        flatbuffers::PushAlignment::new(8)
    }
}

impl flatbuffers::Verifiable for IsolationWindow {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.in_buffer::<Self>(pos)
    }
}

/// 2-byte inline struct: a (mass analyzer, ionization mode) code pair.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct InstrumentConfiguration(pub [u8; 2]);

impl InstrumentConfiguration {
    pub fn new(mass_analyzer: u8, ionization_mode: u8) -> Self {
        Self([mass_analyzer, ionization_mode])
    }

    pub fn mass_analyzer(&self) -> u8 {
        self.0[0]
    }

    pub fn ionization_mode(&self) -> u8 {
        self.0[1]
    }
}

impl core::fmt::Debug for InstrumentConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InstrumentConfiguration")
            .field("mass_analyzer", &self.mass_analyzer())
            .field("ionization_mode", &self.ionization_mode())
            .finish()
    }
}

impl flatbuffers::SimpleToVerifyInSlice for InstrumentConfiguration {}

impl<'a> flatbuffers::Follow<'a> for InstrumentConfiguration {
    type Inner = &'a InstrumentConfiguration;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        <&'a InstrumentConfiguration>::follow(buf, loc)
    }
}

impl<'a> flatbuffers::Follow<'a> for &'a InstrumentConfiguration {
    type Inner = &'a InstrumentConfiguration;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        flatbuffers::follow_cast_ref::<InstrumentConfiguration>(buf, loc)
    }
}

impl flatbuffers::Push for InstrumentConfiguration {
    type Output = InstrumentConfiguration;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        let src = ::core::slice::from_raw_parts(
            self as *const InstrumentConfiguration as *const u8,
            <Self as flatbuffers::Push>::size(),
        );
        dst.copy_from_slice(src);
    }
    #[inline]
    fn alignment() -> flatbuffers::PushAlignment {
        flatbuffers::PushAlignment::new(1)
    }
}

impl flatbuffers::Verifiable for InstrumentConfiguration {
    #[inline]
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.in_buffer::<Self>(pos)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_isolation_window_layout() {
        let window = IsolationWindow::new(499.0, 500.0, 501.0);
        assert_eq!(window.lower(), 499.0);
        assert_eq!(window.target(), 500.0);
        assert_eq!(window.upper(), 501.0);
        assert_eq!(core::mem::size_of::<IsolationWindow>(), 24);
        assert_eq!(&window.0[0..8], &499.0f64.to_le_bytes());
    }

    #[test]
    fn test_configuration_layout() {
        let config = InstrumentConfiguration::new(5, 3);
        assert_eq!(config.mass_analyzer(), 5);
        assert_eq!(config.ionization_mode(), 3);
        assert_eq!(core::mem::size_of::<InstrumentConfiguration>(), 2);
    }
}
