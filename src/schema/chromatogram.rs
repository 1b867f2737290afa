//! Whole-run summary trace tables.

#[derive(Clone, Copy)]
pub struct ChromatogramData<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for ChromatogramData<'a> {
    type Inner = ChromatogramData<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct ChromatogramDataArgs<'a> {
    pub time: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f64>>>,
    pub intensity: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f32>>>,
}

impl<'a> ChromatogramData<'a> {
    pub const VT_TIME: flatbuffers::VOffsetT = 4;
    pub const VT_INTENSITY: flatbuffers::VOffsetT = 6;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &ChromatogramDataArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<ChromatogramData<'fbb>> {
        let start = fbb.start_table();
        if let Some(time) = args.time {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_TIME, time);
        }
        if let Some(intensity) = args.intensity {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_INTENSITY, intensity);
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn time(&self) -> Option<flatbuffers::Vector<'a, f64>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f64>>>(
                    Self::VT_TIME,
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

impl flatbuffers::Verifiable for ChromatogramData<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f64>>>(
                "time",
                Self::VT_TIME,
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
pub struct ChromatogramRecord<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for ChromatogramRecord<'a> {
    type Inner = ChromatogramRecord<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct ChromatogramRecordArgs<'a> {
    pub trace_type: i16,
    pub start_index: u32,
    pub end_index: u32,
    pub data: Option<flatbuffers::WIPOffset<ChromatogramData<'a>>>,
}

impl<'a> ChromatogramRecord<'a> {
    pub const VT_TRACE_TYPE: flatbuffers::VOffsetT = 4;
    pub const VT_START_INDEX: flatbuffers::VOffsetT = 6;
    pub const VT_END_INDEX: flatbuffers::VOffsetT = 8;
    pub const VT_DATA: flatbuffers::VOffsetT = 10;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &ChromatogramRecordArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<ChromatogramRecord<'fbb>> {
        let start = fbb.start_table();
        if let Some(data) = args.data {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_DATA, data);
        }
        fbb.push_slot::<u32>(Self::VT_START_INDEX, args.start_index, 0);
        fbb.push_slot::<u32>(Self::VT_END_INDEX, args.end_index, 0);
        fbb.push_slot::<i16>(Self::VT_TRACE_TYPE, args.trace_type, 0);
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn trace_type(&self) -> i16 {
        unsafe { self._tab.get::<i16>(Self::VT_TRACE_TYPE, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn start_index(&self) -> u32 {
        unsafe { self._tab.get::<u32>(Self::VT_START_INDEX, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn end_index(&self) -> u32 {
        unsafe { self._tab.get::<u32>(Self::VT_END_INDEX, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn data(&self) -> Option<ChromatogramData<'a>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<ChromatogramData>>(Self::VT_DATA, None)
        }
    }
}

impl flatbuffers::Verifiable for ChromatogramRecord<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<i16>("trace_type", Self::VT_TRACE_TYPE, false)?
            .visit_field::<u32>("start_index", Self::VT_START_INDEX, false)?
            .visit_field::<u32>("end_index", Self::VT_END_INDEX, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<ChromatogramData>>(
                "data",
                Self::VT_DATA,
                false,
            )?
            .finish();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_chromatogram_round_trip() {
        let mut fbb = flatbuffers::FlatBufferBuilder::new();
        let time = fbb.create_vector(&[0.1f64, 0.2, 0.3]);
        let intensity = fbb.create_vector(&[10.0f32, 20.0, 15.0]);
        let data = ChromatogramData::create(&mut fbb, &ChromatogramDataArgs {
            time: Some(time),
            intensity: Some(intensity),
        });
        let record = ChromatogramRecord::create(&mut fbb, &ChromatogramRecordArgs {
            trace_type: 1,
            start_index: 0,
            end_index: 2,
            data: Some(data),
        });
        fbb.finish(record, None);

        let view = super::super::root_as_chromatogram_record(fbb.finished_data()).unwrap();
        assert_eq!(view.trace_type(), 1);
        assert_eq!(view.end_index(), 2);
        let data = view.data().unwrap();
        let time: Vec<f64> = data.time().unwrap().iter().collect();
        assert_eq!(time, vec![0.1, 0.2, 0.3]);
    }
}
