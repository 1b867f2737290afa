//! Per-scan record tables: `Precursor`, `Acquisition`, `SpectrumData`,
//! `ScanRecord`, and the extended `PacketAnnotations` stream.

use super::structs::IsolationWindow;

#[derive(Clone, Copy)]
pub struct Precursor<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Precursor<'a> {
    type Inner = Precursor<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy)]
pub struct PrecursorArgs {
    pub mono_mz: f64,
    pub charge: i32,
    pub master_scan: i32,
    pub isolation_window: Option<IsolationWindow>,
    pub method: u8,
    pub energy: f32,
}

impl Default for PrecursorArgs {
    fn default() -> Self {
        Self {
            mono_mz: 0.0,
            charge: 0,
            master_scan: -1,
            isolation_window: None,
            method: 0,
            energy: 0.0,
        }
    }
}

impl<'a> Precursor<'a> {
    pub const VT_MONO_MZ: flatbuffers::VOffsetT = 4;
    pub const VT_CHARGE: flatbuffers::VOffsetT = 6;
    pub const VT_MASTER_SCAN: flatbuffers::VOffsetT = 8;
    pub const VT_ISOLATION_WINDOW: flatbuffers::VOffsetT = 10;
    pub const VT_METHOD: flatbuffers::VOffsetT = 12;
    pub const VT_ENERGY: flatbuffers::VOffsetT = 14;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &PrecursorArgs,
    ) -> flatbuffers::WIPOffset<Precursor<'fbb>> {
        let start = fbb.start_table();
        fbb.push_slot::<f64>(Self::VT_MONO_MZ, args.mono_mz, 0.0);
        if let Some(window) = args.isolation_window.as_ref() {
            fbb.push_slot_always::<&IsolationWindow>(Self::VT_ISOLATION_WINDOW, window);
        }
        fbb.push_slot::<i32>(Self::VT_CHARGE, args.charge, 0);
        fbb.push_slot::<i32>(Self::VT_MASTER_SCAN, args.master_scan, -1);
        fbb.push_slot::<f32>(Self::VT_ENERGY, args.energy, 0.0);
        fbb.push_slot::<u8>(Self::VT_METHOD, args.method, 0);
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn mono_mz(&self) -> f64 {
        unsafe { self._tab.get::<f64>(Self::VT_MONO_MZ, Some(0.0)).unwrap_or(0.0) }
    }

    #[inline]
    pub fn charge(&self) -> i32 {
        unsafe { self._tab.get::<i32>(Self::VT_CHARGE, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn master_scan(&self) -> i32 {
        unsafe { self._tab.get::<i32>(Self::VT_MASTER_SCAN, Some(-1)).unwrap_or(-1) }
    }

    #[inline]
    pub fn isolation_window(&self) -> Option<&'a IsolationWindow> {
        unsafe { self._tab.get::<IsolationWindow>(Self::VT_ISOLATION_WINDOW, None) }
    }

    #[inline]
    pub fn method(&self) -> u8 {
        unsafe { self._tab.get::<u8>(Self::VT_METHOD, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn energy(&self) -> f32 {
        unsafe { self._tab.get::<f32>(Self::VT_ENERGY, Some(0.0)).unwrap_or(0.0) }
    }
}

impl flatbuffers::Verifiable for Precursor<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<f64>("mono_mz", Self::VT_MONO_MZ, false)?
            .visit_field::<i32>("charge", Self::VT_CHARGE, false)?
            .visit_field::<i32>("master_scan", Self::VT_MASTER_SCAN, false)?
            .visit_field::<IsolationWindow>("isolation_window", Self::VT_ISOLATION_WINDOW, false)?
            .visit_field::<u8>("method", Self::VT_METHOD, false)?
            .visit_field::<f32>("energy", Self::VT_ENERGY, false)?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct Acquisition<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Acquisition<'a> {
    type Inner = Acquisition<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy)]
pub struct AcquisitionArgs<'a> {
    pub low_mz: f64,
    pub high_mz: f64,
    pub injection_time: f32,
    pub compensation_voltages: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub mass_analyzer: u8,
    pub scan_event: i32,
    pub ionization_mode: u8,
    pub resolution: f32,
}

impl Default for AcquisitionArgs<'_> {
    fn default() -> Self {
        Self {
            low_mz: 0.0,
            high_mz: 0.0,
            injection_time: 0.0,
            compensation_voltages: None,
            mass_analyzer: 0,
            scan_event: 1,
            ionization_mode: 0,
            resolution: 0.0,
        }
    }
}

impl<'a> Acquisition<'a> {
    pub const VT_LOW_MZ: flatbuffers::VOffsetT = 4;
    pub const VT_HIGH_MZ: flatbuffers::VOffsetT = 6;
    pub const VT_INJECTION_TIME: flatbuffers::VOffsetT = 8;
    pub const VT_COMPENSATION_VOLTAGES: flatbuffers::VOffsetT = 10;
    pub const VT_MASS_ANALYZER: flatbuffers::VOffsetT = 12;
    pub const VT_SCAN_EVENT: flatbuffers::VOffsetT = 14;
    pub const VT_IONIZATION_MODE: flatbuffers::VOffsetT = 16;
    pub const VT_RESOLUTION: flatbuffers::VOffsetT = 18;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &AcquisitionArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<Acquisition<'fbb>> {
        let start = fbb.start_table();
        fbb.push_slot::<f64>(Self::VT_LOW_MZ, args.low_mz, 0.0);
        fbb.push_slot::<f64>(Self::VT_HIGH_MZ, args.high_mz, 0.0);
        fbb.push_slot::<f32>(Self::VT_INJECTION_TIME, args.injection_time, 0.0);
        if let Some(voltages) = args.compensation_voltages {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_COMPENSATION_VOLTAGES,
                voltages,
            );
        }
        fbb.push_slot::<i32>(Self::VT_SCAN_EVENT, args.scan_event, 1);
        fbb.push_slot::<f32>(Self::VT_RESOLUTION, args.resolution, 0.0);
        fbb.push_slot::<u8>(Self::VT_MASS_ANALYZER, args.mass_analyzer, 0);
        fbb.push_slot::<u8>(Self::VT_IONIZATION_MODE, args.ionization_mode, 0);
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn low_mz(&self) -> f64 {
        unsafe { self._tab.get::<f64>(Self::VT_LOW_MZ, Some(0.0)).unwrap_or(0.0) }
    }

    #[inline]
    pub fn high_mz(&self) -> f64 {
        unsafe { self._tab.get::<f64>(Self::VT_HIGH_MZ, Some(0.0)).unwrap_or(0.0) }
    }

    #[inline]
    pub fn injection_time(&self) -> f32 {
        unsafe { self._tab.get::<f32>(Self::VT_INJECTION_TIME, Some(0.0)).unwrap_or(0.0) }
    }

    #[inline]
    pub fn compensation_voltages(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f32>>>(
                    Self::VT_COMPENSATION_VOLTAGES,
                    None,
                )
        }
    }

    #[inline]
    pub fn mass_analyzer(&self) -> u8 {
        unsafe { self._tab.get::<u8>(Self::VT_MASS_ANALYZER, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn scan_event(&self) -> i32 {
        unsafe { self._tab.get::<i32>(Self::VT_SCAN_EVENT, Some(1)).unwrap_or(1) }
    }

    #[inline]
    pub fn ionization_mode(&self) -> u8 {
        unsafe { self._tab.get::<u8>(Self::VT_IONIZATION_MODE, Some(0)).unwrap_or(0) }
    }

    /// 0 means "not reported".
    #[inline]
    pub fn resolution(&self) -> f32 {
        unsafe { self._tab.get::<f32>(Self::VT_RESOLUTION, Some(0.0)).unwrap_or(0.0) }
    }
}

impl flatbuffers::Verifiable for Acquisition<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<f64>("low_mz", Self::VT_LOW_MZ, false)?
            .visit_field::<f64>("high_mz", Self::VT_HIGH_MZ, false)?
            .visit_field::<f32>("injection_time", Self::VT_INJECTION_TIME, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "compensation_voltages",
                Self::VT_COMPENSATION_VOLTAGES,
                false,
            )?
            .visit_field::<u8>("mass_analyzer", Self::VT_MASS_ANALYZER, false)?
            .visit_field::<i32>("scan_event", Self::VT_SCAN_EVENT, false)?
            .visit_field::<u8>("ionization_mode", Self::VT_IONIZATION_MODE, false)?
            .visit_field::<f32>("resolution", Self::VT_RESOLUTION, false)?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct SpectrumData<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SpectrumData<'a> {
    type Inner = SpectrumData<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct SpectrumDataArgs<'a> {
    pub mz: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f64>>>,
    pub intensity: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
}

impl<'a> SpectrumData<'a> {
    pub const VT_MZ: flatbuffers::VOffsetT = 4;
    pub const VT_INTENSITY: flatbuffers::VOffsetT = 6;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &SpectrumDataArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<SpectrumData<'fbb>> {
        let start = fbb.start_table();
        if let Some(mz) = args.mz {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_MZ, mz);
        }
        if let Some(intensity) = args.intensity {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_INTENSITY, intensity);
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn mz(&self) -> Option<flatbuffers::Vector<'a, f64>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f64>>>(
                    Self::VT_MZ,
                    None,
                )
        }
    }

    #[inline]
    pub fn intensity(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f32>>>(
                    Self::VT_INTENSITY,
                    None,
                )
        }
    }
}

impl flatbuffers::Verifiable for SpectrumData<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f64>>>(
                "mz",
                Self::VT_MZ,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "intensity",
                Self::VT_INTENSITY,
                false,
            )?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct ScanRecord<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for ScanRecord<'a> {
    type Inner = ScanRecord<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy)]
pub struct ScanRecordArgs<'a> {
    pub index: u32,
    pub ms_level: u8,
    pub time: f64,
    pub polarity: i8,
    pub mode: u8,
    pub precursor: Option<flatbuffers::WIPOffset<Precursor<'a>>>,
    pub filter: Option<flatbuffers::WIPOffset<&'a str>>,
    pub ms_order: i16,
    pub scan_mode: i16,
    pub data: Option<flatbuffers::WIPOffset<SpectrumData<'a>>>,
    pub acquisition: Option<flatbuffers::WIPOffset<Acquisition<'a>>>,
}

impl Default for ScanRecordArgs<'_> {
    fn default() -> Self {
        Self {
            index: 0,
            ms_level: 1,
            time: 0.0,
            polarity: 0,
            mode: 0,
            precursor: None,
            filter: None,
            ms_order: 1,
            scan_mode: 0,
            data: None,
            acquisition: None,
        }
    }
}

impl<'a> ScanRecord<'a> {
    pub const VT_INDEX: flatbuffers::VOffsetT = 4;
    pub const VT_MS_LEVEL: flatbuffers::VOffsetT = 6;
    pub const VT_TIME: flatbuffers::VOffsetT = 8;
    pub const VT_POLARITY: flatbuffers::VOffsetT = 10;
    pub const VT_MODE: flatbuffers::VOffsetT = 12;
    pub const VT_PRECURSOR: flatbuffers::VOffsetT = 14;
    pub const VT_FILTER: flatbuffers::VOffsetT = 16;
    pub const VT_MS_ORDER: flatbuffers::VOffsetT = 18;
    pub const VT_SCAN_MODE: flatbuffers::VOffsetT = 20;
    pub const VT_DATA: flatbuffers::VOffsetT = 22;
    pub const VT_ACQUISITION: flatbuffers::VOffsetT = 24;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &ScanRecordArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<ScanRecord<'fbb>> {
        let start = fbb.start_table();
        fbb.push_slot::<f64>(Self::VT_TIME, args.time, 0.0);
        if let Some(precursor) = args.precursor {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_PRECURSOR, precursor);
        }
        if let Some(filter) = args.filter {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_FILTER, filter);
        }
        if let Some(data) = args.data {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_DATA, data);
        }
        if let Some(acquisition) = args.acquisition {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_ACQUISITION, acquisition);
        }
        fbb.push_slot::<u32>(Self::VT_INDEX, args.index, 0);
        fbb.push_slot::<i16>(Self::VT_MS_ORDER, args.ms_order, 1);
        fbb.push_slot::<i16>(Self::VT_SCAN_MODE, args.scan_mode, 0);
        fbb.push_slot::<u8>(Self::VT_MS_LEVEL, args.ms_level, 1);
        fbb.push_slot::<i8>(Self::VT_POLARITY, args.polarity, 0);
        fbb.push_slot::<u8>(Self::VT_MODE, args.mode, 0);
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn index(&self) -> u32 {
        unsafe { self._tab.get::<u32>(Self::VT_INDEX, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn ms_level(&self) -> u8 {
        unsafe { self._tab.get::<u8>(Self::VT_MS_LEVEL, Some(1)).unwrap_or(1) }
    }

    #[inline]
    pub fn time(&self) -> f64 {
        unsafe { self._tab.get::<f64>(Self::VT_TIME, Some(0.0)).unwrap_or(0.0) }
    }

    #[inline]
    pub fn polarity(&self) -> i8 {
        unsafe { self._tab.get::<i8>(Self::VT_POLARITY, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn mode(&self) -> u8 {
        unsafe { self._tab.get::<u8>(Self::VT_MODE, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn precursor(&self) -> Option<Precursor<'a>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<Precursor>>(Self::VT_PRECURSOR, None)
        }
    }

    #[inline]
    pub fn filter(&self) -> Option<&'a str> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_FILTER, None)
        }
    }

    #[inline]
    pub fn ms_order(&self) -> i16 {
        unsafe { self._tab.get::<i16>(Self::VT_MS_ORDER, Some(1)).unwrap_or(1) }
    }

    #[inline]
    pub fn scan_mode(&self) -> i16 {
        unsafe { self._tab.get::<i16>(Self::VT_SCAN_MODE, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn data(&self) -> Option<SpectrumData<'a>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<SpectrumData>>(Self::VT_DATA, None)
        }
    }

    #[inline]
    pub fn acquisition(&self) -> Option<Acquisition<'a>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<Acquisition>>(Self::VT_ACQUISITION, None)
        }
    }
}

impl flatbuffers::Verifiable for ScanRecord<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<u32>("index", Self::VT_INDEX, false)?
            .visit_field::<u8>("ms_level", Self::VT_MS_LEVEL, false)?
            .visit_field::<f64>("time", Self::VT_TIME, false)?
            .visit_field::<i8>("polarity", Self::VT_POLARITY, false)?
            .visit_field::<u8>("mode", Self::VT_MODE, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<Precursor>>(
                "precursor",
                Self::VT_PRECURSOR,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("filter", Self::VT_FILTER, false)?
            .visit_field::<i16>("ms_order", Self::VT_MS_ORDER, false)?
            .visit_field::<i16>("scan_mode", Self::VT_SCAN_MODE, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<SpectrumData>>(
                "data",
                Self::VT_DATA,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<Acquisition>>(
                "acquisition",
                Self::VT_ACQUISITION,
                false,
            )?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct PacketAnnotations<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PacketAnnotations<'a> {
    type Inner = PacketAnnotations<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct PacketAnnotationsArgs<'a> {
    pub noise: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub baseline: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub charge: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub resolution: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub sampled_noise_mz: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub sampled_noise: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
    pub sampled_noise_baseline: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
}

impl<'a> PacketAnnotations<'a> {
    pub const VT_NOISE: flatbuffers::VOffsetT = 4;
    pub const VT_BASELINE: flatbuffers::VOffsetT = 6;
    pub const VT_CHARGE: flatbuffers::VOffsetT = 8;
    pub const VT_RESOLUTION: flatbuffers::VOffsetT = 10;
    pub const VT_SAMPLED_NOISE_MZ: flatbuffers::VOffsetT = 12;
    pub const VT_SAMPLED_NOISE: flatbuffers::VOffsetT = 14;
    pub const VT_SAMPLED_NOISE_BASELINE: flatbuffers::VOffsetT = 16;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &PacketAnnotationsArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<PacketAnnotations<'fbb>> {
        let start = fbb.start_table();
        let slots = [
            (Self::VT_NOISE, args.noise),
            (Self::VT_BASELINE, args.baseline),
            (Self::VT_CHARGE, args.charge),
            (Self::VT_RESOLUTION, args.resolution),
            (Self::VT_SAMPLED_NOISE_MZ, args.sampled_noise_mz),
            (Self::VT_SAMPLED_NOISE, args.sampled_noise),
            (Self::VT_SAMPLED_NOISE_BASELINE, args.sampled_noise_baseline),
        ];
        for (slot, offset) in slots {
            if let Some(offset) = offset {
                fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(slot, offset);
            }
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    fn vector_at(&self, slot: flatbuffers::VOffsetT) -> Option<flatbuffers::Vector<'a, f32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f32>>>(slot, None)
        }
    }

    #[inline]
    pub fn noise(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        self.vector_at(Self::VT_NOISE)
    }

    #[inline]
    pub fn baseline(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        self.vector_at(Self::VT_BASELINE)
    }

    #[inline]
    pub fn charge(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        self.vector_at(Self::VT_CHARGE)
    }

    #[inline]
    pub fn resolution(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        self.vector_at(Self::VT_RESOLUTION)
    }

    #[inline]
    pub fn sampled_noise_mz(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        self.vector_at(Self::VT_SAMPLED_NOISE_MZ)
    }

    #[inline]
    pub fn sampled_noise(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        self.vector_at(Self::VT_SAMPLED_NOISE)
    }

    #[inline]
    pub fn sampled_noise_baseline(&self) -> Option<flatbuffers::Vector<'a, f32>> {
        self.vector_at(Self::VT_SAMPLED_NOISE_BASELINE)
    }
}

impl flatbuffers::Verifiable for PacketAnnotations<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "noise",
                Self::VT_NOISE,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "baseline",
                Self::VT_BASELINE,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "charge",
                Self::VT_CHARGE,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "resolution",
                Self::VT_RESOLUTION,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "sampled_noise_mz",
                Self::VT_SAMPLED_NOISE_MZ,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "sampled_noise",
                Self::VT_SAMPLED_NOISE,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f32>>>(
                "sampled_noise_baseline",
                Self::VT_SAMPLED_NOISE_BASELINE,
                false,
            )?
            .finish();
        Ok(())
    }
}
