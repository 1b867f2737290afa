//! File-level record tables: `InstrumentModel`, `FileDescription`,
//! `InstrumentMethod`, and the raw trailer listing.

use super::structs::InstrumentConfiguration;

#[derive(Clone, Copy)]
pub struct InstrumentModel<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for InstrumentModel<'a> {
    type Inner = InstrumentModel<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct InstrumentModelArgs<'a> {
    pub model: Option<flatbuffers::WIPOffset<&'a str>>,
    pub name: Option<flatbuffers::WIPOffset<&'a str>>,
    pub serial_number: Option<flatbuffers::WIPOffset<&'a str>>,
    pub hardware_version: Option<flatbuffers::WIPOffset<&'a str>>,
    pub software_version: Option<flatbuffers::WIPOffset<&'a str>>,
    pub configurations:
        Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, InstrumentConfiguration>>>,
}

impl<'a> InstrumentModel<'a> {
    pub const VT_MODEL: flatbuffers::VOffsetT = 4;
    pub const VT_NAME: flatbuffers::VOffsetT = 6;
    pub const VT_SERIAL_NUMBER: flatbuffers::VOffsetT = 8;
    pub const VT_HARDWARE_VERSION: flatbuffers::VOffsetT = 10;
    pub const VT_SOFTWARE_VERSION: flatbuffers::VOffsetT = 12;
    pub const VT_CONFIGURATIONS: flatbuffers::VOffsetT = 14;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &InstrumentModelArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<InstrumentModel<'fbb>> {
        let start = fbb.start_table();
        if let Some(model) = args.model {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_MODEL, model);
        }
        if let Some(name) = args.name {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_NAME, name);
        }
        if let Some(serial) = args.serial_number {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_SERIAL_NUMBER, serial);
        }
        if let Some(hardware) = args.hardware_version {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_HARDWARE_VERSION,
                hardware,
            );
        }
        if let Some(software) = args.software_version {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_SOFTWARE_VERSION,
                software,
            );
        }
        if let Some(configurations) = args.configurations {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_CONFIGURATIONS,
                configurations,
            );
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    fn string_at(&self, slot: flatbuffers::VOffsetT) -> Option<&'a str> {
        unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(slot, None) }
    }

    #[inline]
    pub fn model(&self) -> Option<&'a str> {
        self.string_at(Self::VT_MODEL)
    }

    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        self.string_at(Self::VT_NAME)
    }

    #[inline]
    pub fn serial_number(&self) -> Option<&'a str> {
        self.string_at(Self::VT_SERIAL_NUMBER)
    }

    #[inline]
    pub fn hardware_version(&self) -> Option<&'a str> {
        self.string_at(Self::VT_HARDWARE_VERSION)
    }

    #[inline]
    pub fn software_version(&self) -> Option<&'a str> {
        self.string_at(Self::VT_SOFTWARE_VERSION)
    }

    #[inline]
    pub fn configurations(
        &self,
    ) -> Option<flatbuffers::Vector<'a, InstrumentConfiguration>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'a, InstrumentConfiguration>,
                >>(Self::VT_CONFIGURATIONS, None)
        }
    }
}

impl flatbuffers::Verifiable for InstrumentModel<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("model", Self::VT_MODEL, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "serial_number",
                Self::VT_SERIAL_NUMBER,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "hardware_version",
                Self::VT_HARDWARE_VERSION,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "software_version",
                Self::VT_SOFTWARE_VERSION,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, InstrumentConfiguration>,
            >>("configurations", Self::VT_CONFIGURATIONS, false)?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct FileDescription<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileDescription<'a> {
    type Inner = FileDescription<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct FileDescriptionArgs<'a> {
    pub sample_id: Option<flatbuffers::WIPOffset<&'a str>>,
    pub source_file: Option<flatbuffers::WIPOffset<&'a str>>,
    pub creation_date: Option<flatbuffers::WIPOffset<&'a str>>,
    pub spectra_per_ms_level: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u32>>>,
    pub sample_name: Option<flatbuffers::WIPOffset<&'a str>>,
    pub sample_vial: Option<flatbuffers::WIPOffset<&'a str>>,
    pub sample_comment: Option<flatbuffers::WIPOffset<&'a str>>,
    pub trailer_headers: Option<
        flatbuffers::WIPOffset<
            flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>,
        >,
    >,
}

impl<'a> FileDescription<'a> {
    pub const VT_SAMPLE_ID: flatbuffers::VOffsetT = 4;
    pub const VT_SOURCE_FILE: flatbuffers::VOffsetT = 6;
    pub const VT_CREATION_DATE: flatbuffers::VOffsetT = 8;
    pub const VT_SPECTRA_PER_MS_LEVEL: flatbuffers::VOffsetT = 10;
    pub const VT_SAMPLE_NAME: flatbuffers::VOffsetT = 12;
    pub const VT_SAMPLE_VIAL: flatbuffers::VOffsetT = 14;
    pub const VT_SAMPLE_COMMENT: flatbuffers::VOffsetT = 16;
    pub const VT_TRAILER_HEADERS: flatbuffers::VOffsetT = 18;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &FileDescriptionArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<FileDescription<'fbb>> {
        let start = fbb.start_table();
        if let Some(sample_id) = args.sample_id {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_SAMPLE_ID, sample_id);
        }
        if let Some(source_file) = args.source_file {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_SOURCE_FILE,
                source_file,
            );
        }
        if let Some(creation_date) = args.creation_date {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_CREATION_DATE,
                creation_date,
            );
        }
        if let Some(per_level) = args.spectra_per_ms_level {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_SPECTRA_PER_MS_LEVEL,
                per_level,
            );
        }
        if let Some(sample_name) = args.sample_name {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_SAMPLE_NAME,
                sample_name,
            );
        }
        if let Some(sample_vial) = args.sample_vial {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_SAMPLE_VIAL,
                sample_vial,
            );
        }
        if let Some(sample_comment) = args.sample_comment {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_SAMPLE_COMMENT,
                sample_comment,
            );
        }
        if let Some(trailer_headers) = args.trailer_headers {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_TRAILER_HEADERS,
                trailer_headers,
            );
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    fn string_at(&self, slot: flatbuffers::VOffsetT) -> Option<&'a str> {
        unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(slot, None) }
    }

    #[inline]
    pub fn sample_id(&self) -> Option<&'a str> {
        self.string_at(Self::VT_SAMPLE_ID)
    }

    #[inline]
    pub fn source_file(&self) -> Option<&'a str> {
        self.string_at(Self::VT_SOURCE_FILE)
    }

    /// RFC 3339 formatted acquisition date.
    #[inline]
    pub fn creation_date(&self) -> Option<&'a str> {
        self.string_at(Self::VT_CREATION_DATE)
    }

    #[inline]
    pub fn spectra_per_ms_level(&self) -> Option<flatbuffers::Vector<'a, u32>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u32>>>(
                    Self::VT_SPECTRA_PER_MS_LEVEL,
                    None,
                )
        }
    }

    #[inline]
    pub fn sample_name(&self) -> Option<&'a str> {
        self.string_at(Self::VT_SAMPLE_NAME)
    }

    #[inline]
    pub fn sample_vial(&self) -> Option<&'a str> {
        self.string_at(Self::VT_SAMPLE_VIAL)
    }

    #[inline]
    pub fn sample_comment(&self) -> Option<&'a str> {
        self.string_at(Self::VT_SAMPLE_COMMENT)
    }

    #[inline]
    pub fn trailer_headers(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>,
            >>(Self::VT_TRAILER_HEADERS, None)
        }
    }
}

impl flatbuffers::Verifiable for FileDescription<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "sample_id",
                Self::VT_SAMPLE_ID,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "source_file",
                Self::VT_SOURCE_FILE,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "creation_date",
                Self::VT_CREATION_DATE,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u32>>>(
                "spectra_per_ms_level",
                Self::VT_SPECTRA_PER_MS_LEVEL,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "sample_name",
                Self::VT_SAMPLE_NAME,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "sample_vial",
                Self::VT_SAMPLE_VIAL,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "sample_comment",
                Self::VT_SAMPLE_COMMENT,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&str>>,
            >>("trailer_headers", Self::VT_TRAILER_HEADERS, false)?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct InstrumentMethod<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for InstrumentMethod<'a> {
    type Inner = InstrumentMethod<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct InstrumentMethodArgs<'a> {
    pub index: u8,
    pub text: Option<flatbuffers::WIPOffset<&'a str>>,
    pub display_name: Option<flatbuffers::WIPOffset<&'a str>>,
    pub name: Option<flatbuffers::WIPOffset<&'a str>>,
}

impl<'a> InstrumentMethod<'a> {
    pub const VT_INDEX: flatbuffers::VOffsetT = 4;
    pub const VT_TEXT: flatbuffers::VOffsetT = 6;
    pub const VT_DISPLAY_NAME: flatbuffers::VOffsetT = 8;
    pub const VT_NAME: flatbuffers::VOffsetT = 10;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &InstrumentMethodArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<InstrumentMethod<'fbb>> {
        let start = fbb.start_table();
        if let Some(text) = args.text {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_TEXT, text);
        }
        if let Some(display_name) = args.display_name {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_DISPLAY_NAME,
                display_name,
            );
        }
        if let Some(name) = args.name {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_NAME, name);
        }
        fbb.push_slot::<u8>(Self::VT_INDEX, args.index, 0);
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn index(&self) -> u8 {
        unsafe { self._tab.get::<u8>(Self::VT_INDEX, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_TEXT, None) }
    }

    #[inline]
    pub fn display_name(&self) -> Option<&'a str> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_DISPLAY_NAME, None)
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_NAME, None) }
    }
}

impl flatbuffers::Verifiable for InstrumentMethod<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<u8>("index", Self::VT_INDEX, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("text", Self::VT_TEXT, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                "display_name",
                Self::VT_DISPLAY_NAME,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct TrailerValue<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for TrailerValue<'a> {
    type Inner = TrailerValue<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct TrailerValueArgs<'a> {
    pub label: Option<flatbuffers::WIPOffset<&'a str>>,
    pub value: Option<flatbuffers::WIPOffset<&'a str>>,
}

impl<'a> TrailerValue<'a> {
    pub const VT_LABEL: flatbuffers::VOffsetT = 4;
    pub const VT_VALUE: flatbuffers::VOffsetT = 6;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &TrailerValueArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<TrailerValue<'fbb>> {
        let start = fbb.start_table();
        if let Some(label) = args.label {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_LABEL, label);
        }
        if let Some(value) = args.value {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_VALUE, value);
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn label(&self) -> Option<&'a str> {
        unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_LABEL, None) }
    }

    #[inline]
    pub fn value(&self) -> Option<&'a str> {
        unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_VALUE, None) }
    }
}

impl flatbuffers::Verifiable for TrailerValue<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("label", Self::VT_LABEL, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("value", Self::VT_VALUE, false)?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct TrailerValues<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for TrailerValues<'a> {
    type Inner = TrailerValues<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct TrailerValuesArgs<'a> {
    pub values: Option<
        flatbuffers::WIPOffset<
            flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<TrailerValue<'a>>>,
        >,
    >,
}

impl<'a> TrailerValues<'a> {
    pub const VT_VALUES: flatbuffers::VOffsetT = 4;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &TrailerValuesArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<TrailerValues<'fbb>> {
        let start = fbb.start_table();
        if let Some(values) = args.values {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_VALUES, values);
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn values(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<TrailerValue<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<TrailerValue<'a>>>,
            >>(Self::VT_VALUES, None)
        }
    }
}

impl flatbuffers::Verifiable for TrailerValues<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<TrailerValue>>,
            >>("values", Self::VT_VALUES, false)?
            .finish();
        Ok(())
    }
}
