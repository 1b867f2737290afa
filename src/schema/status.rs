//! Status-log record tables. One table shape per value kind, plus the
//! collection that gathers them.

/// The scalar-valued log tables differ only in their value element type.
macro_rules! status_log_table {
    ($table:ident, $args:ident, $value:ty) => {
        #[derive(Clone, Copy)]
        pub struct $table<'a> {
            pub _tab: flatbuffers::Table<'a>,
        }

        impl<'a> flatbuffers::Follow<'a> for $table<'a> {
            type Inner = $table<'a>;
            #[inline]
            unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
                Self { _tab: flatbuffers::Table::new(buf, loc) }
            }
        }

        #[derive(Clone, Copy, Default)]
        pub struct $args<'a> {
            pub name: Option<flatbuffers::WIPOffset<&'a str>>,
            pub times: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f64>>>,
            pub values: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, $value>>>,
        }

        impl<'a> $table<'a> {
            pub const VT_NAME: flatbuffers::VOffsetT = 4;
            pub const VT_TIMES: flatbuffers::VOffsetT = 6;
            pub const VT_VALUES: flatbuffers::VOffsetT = 8;

            pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
                fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
                args: &$args<'fbb>,
            ) -> flatbuffers::WIPOffset<$table<'fbb>> {
                let start = fbb.start_table();
                if let Some(name) = args.name {
                    fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_NAME, name);
                }
                if let Some(times) = args.times {
                    fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_TIMES, times);
                }
                if let Some(values) = args.values {
                    fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_VALUES, values);
                }
                let end = fbb.end_table(start);
                flatbuffers::WIPOffset::new(end.value())
            }

            #[inline]
            pub fn name(&self) -> Option<&'a str> {
                unsafe {
                    self._tab
                        .get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_NAME, None)
                }
            }

            #[inline]
            pub fn times(&self) -> Option<flatbuffers::Vector<'a, f64>> {
                unsafe {
                    self._tab
                        .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f64>>>(
                            Self::VT_TIMES,
                            None,
                        )
                }
            }

            #[inline]
            pub fn values(&self) -> Option<flatbuffers::Vector<'a, $value>> {
                unsafe {
                    self._tab
                        .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, $value>>>(
                            Self::VT_VALUES,
                            None,
                        )
                }
            }
        }

        impl flatbuffers::Verifiable for $table<'_> {
            fn run_verifier(
                v: &mut flatbuffers::Verifier,
                pos: usize,
            ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
                v.visit_table(pos)?
                    .visit_field::<flatbuffers::ForwardsUOffset<&str>>(
                        "name",
                        Self::VT_NAME,
                        false,
                    )?
                    .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f64>>>(
                        "times",
                        Self::VT_TIMES,
                        false,
                    )?
                    .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, $value>>>(
                        "values",
                        Self::VT_VALUES,
                        false,
                    )?
                    .finish();
                Ok(())
            }
        }
    };
}

status_log_table!(StatusLogFloat, StatusLogFloatArgs, f64);
status_log_table!(StatusLogInt, StatusLogIntArgs, i64);
status_log_table!(StatusLogBool, StatusLogBoolArgs, bool);

// The string-valued series holds a vector of string offsets rather than a
// scalar vector, so it does not fit the macro above.
#[derive(Clone, Copy)]
pub struct StatusLogString<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for StatusLogString<'a> {
    type Inner = StatusLogString<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct StatusLogStringArgs<'a> {
    pub name: Option<flatbuffers::WIPOffset<&'a str>>,
    pub times: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, f64>>>,
    pub values: Option<
        flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>,
    >,
}

impl<'a> StatusLogString<'a> {
    pub const VT_NAME: flatbuffers::VOffsetT = 4;
    pub const VT_TIMES: flatbuffers::VOffsetT = 6;
    pub const VT_VALUES: flatbuffers::VOffsetT = 8;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &StatusLogStringArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<StatusLogString<'fbb>> {
        let start = fbb.start_table();
        if let Some(name) = args.name {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_NAME, name);
        }
        if let Some(times) = args.times {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_TIMES, times);
        }
        if let Some(values) = args.values {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_VALUES, values);
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<&str>>(Self::VT_NAME, None)
        }
    }

    #[inline]
    pub fn times(&self) -> Option<flatbuffers::Vector<'a, f64>> {
        unsafe {
            self._tab
                .get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, f64>>>(
                    Self::VT_TIMES,
                    None,
                )
        }
    }

    #[inline]
    pub fn values(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>,
            >>(Self::VT_VALUES, None)
        }
    }
}

impl flatbuffers::Verifiable for StatusLogString<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, f64>>>(
                "times",
                Self::VT_TIMES,
                false,
            )?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&str>>,
            >>("values", Self::VT_VALUES, false)?
            .finish();
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct StatusLogCollection<'a> {
    pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for StatusLogCollection<'a> {
    type Inner = StatusLogCollection<'a>;
    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self { _tab: flatbuffers::Table::new(buf, loc) }
    }
}

#[derive(Clone, Copy, Default)]
pub struct StatusLogCollectionArgs<'a> {
    pub float_logs: Option<
        flatbuffers::WIPOffset<
            flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogFloat<'a>>>,
        >,
    >,
    pub bool_logs: Option<
        flatbuffers::WIPOffset<
            flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogBool<'a>>>,
        >,
    >,
    pub int_logs: Option<
        flatbuffers::WIPOffset<
            flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogInt<'a>>>,
        >,
    >,
    pub string_logs: Option<
        flatbuffers::WIPOffset<
            flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogString<'a>>>,
        >,
    >,
}

impl<'a> StatusLogCollection<'a> {
    pub const VT_FLOAT_LOGS: flatbuffers::VOffsetT = 4;
    pub const VT_BOOL_LOGS: flatbuffers::VOffsetT = 6;
    pub const VT_INT_LOGS: flatbuffers::VOffsetT = 8;
    pub const VT_STRING_LOGS: flatbuffers::VOffsetT = 10;

    pub fn create<'fbb, A: flatbuffers::Allocator + 'fbb>(
        fbb: &mut flatbuffers::FlatBufferBuilder<'fbb, A>,
        args: &StatusLogCollectionArgs<'fbb>,
    ) -> flatbuffers::WIPOffset<StatusLogCollection<'fbb>> {
        let start = fbb.start_table();
        if let Some(float_logs) = args.float_logs {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_FLOAT_LOGS, float_logs);
        }
        if let Some(bool_logs) = args.bool_logs {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_BOOL_LOGS, bool_logs);
        }
        if let Some(int_logs) = args.int_logs {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(Self::VT_INT_LOGS, int_logs);
        }
        if let Some(string_logs) = args.string_logs {
            fbb.push_slot_always::<flatbuffers::WIPOffset<_>>(
                Self::VT_STRING_LOGS,
                string_logs,
            );
        }
        let end = fbb.end_table(start);
        flatbuffers::WIPOffset::new(end.value())
    }

    #[inline]
    pub fn float_logs(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogFloat<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogFloat<'a>>>,
            >>(Self::VT_FLOAT_LOGS, None)
        }
    }

    #[inline]
    pub fn bool_logs(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogBool<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogBool<'a>>>,
            >>(Self::VT_BOOL_LOGS, None)
        }
    }

    #[inline]
    pub fn int_logs(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogInt<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogInt<'a>>>,
            >>(Self::VT_INT_LOGS, None)
        }
    }

    #[inline]
    pub fn string_logs(
        &self,
    ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogString<'a>>>> {
        unsafe {
            self._tab.get::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<StatusLogString<'a>>>,
            >>(Self::VT_STRING_LOGS, None)
        }
    }
}

impl flatbuffers::Verifiable for StatusLogCollection<'_> {
    fn run_verifier(
        v: &mut flatbuffers::Verifier,
        pos: usize,
    ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<StatusLogFloat>>,
            >>("float_logs", Self::VT_FLOAT_LOGS, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<StatusLogBool>>,
            >>("bool_logs", Self::VT_BOOL_LOGS, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<StatusLogInt>>,
            >>("int_logs", Self::VT_INT_LOGS, false)?
            .visit_field::<flatbuffers::ForwardsUOffset<
                flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<StatusLogString>>,
            >>("string_logs", Self::VT_STRING_LOGS, false)?
            .finish();
        Ok(())
    }
}
