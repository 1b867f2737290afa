//! Readers and writers for the binary record contract in
//! `schema/record.fbs`, maintained by hand in the layout the FlatBuffers
//! compiler would emit. Vtable slot numbers are part of the cross-language
//! contract; see the schema file for the authoritative field order.
//!
//! The builder serializes vector elements back-to-front, so buffers read
//! forward by a consumer come out in natural ascending order.

pub mod chromatogram;
pub mod file;
pub mod scan;
pub mod status;
pub mod structs;

pub use chromatogram::{
    ChromatogramData, ChromatogramDataArgs, ChromatogramRecord, ChromatogramRecordArgs,
};
pub use file::{
    FileDescription, FileDescriptionArgs, InstrumentMethod, InstrumentMethodArgs,
    InstrumentModel, InstrumentModelArgs, TrailerValue, TrailerValueArgs, TrailerValues,
    TrailerValuesArgs,
};
pub use scan::{
    Acquisition, AcquisitionArgs, PacketAnnotations, PacketAnnotationsArgs, Precursor,
    PrecursorArgs, ScanRecord, ScanRecordArgs, SpectrumData, SpectrumDataArgs,
};
pub use status::{
    StatusLogBool, StatusLogBoolArgs, StatusLogCollection, StatusLogCollectionArgs,
    StatusLogFloat, StatusLogFloatArgs, StatusLogInt, StatusLogIntArgs, StatusLogString,
    StatusLogStringArgs,
};
pub use structs::{InstrumentConfiguration, IsolationWindow};

use std::borrow::Cow;

macro_rules! root_fns {
    ($checked:ident, $unchecked:ident, $t:ident) => {
        #[inline]
        pub fn $checked(buf: &[u8]) -> Result<$t, ::flatbuffers::InvalidFlatbuffer> {
            ::flatbuffers::root::<$t>(buf)
        }

        /// # Safety
        /// The buffer must contain a valid, verified record of this kind.
        #[inline]
        pub unsafe fn $unchecked(buf: &[u8]) -> $t {
            ::flatbuffers::root_unchecked::<$t>(buf)
        }
    };
}

root_fns!(root_as_scan_record, root_as_scan_record_unchecked, ScanRecord);
root_fns!(root_as_spectrum_data, root_as_spectrum_data_unchecked, SpectrumData);
root_fns!(
    root_as_packet_annotations,
    root_as_packet_annotations_unchecked,
    PacketAnnotations
);
root_fns!(
    root_as_instrument_model,
    root_as_instrument_model_unchecked,
    InstrumentModel
);
root_fns!(
    root_as_file_description,
    root_as_file_description_unchecked,
    FileDescription
);
root_fns!(
    root_as_instrument_method,
    root_as_instrument_method_unchecked,
    InstrumentMethod
);
root_fns!(
    root_as_chromatogram_record,
    root_as_chromatogram_record_unchecked,
    ChromatogramRecord
);
root_fns!(root_as_trailer_values, root_as_trailer_values_unchecked, TrailerValues);
root_fns!(
    root_as_status_log_collection,
    root_as_status_log_collection_unchecked,
    StatusLogCollection
);

/// Zero-copy view of a scalar record vector as a native slice on
/// little-endian targets; falls back to an element-wise copy when the
/// buffer's element bytes are misaligned or the target is big-endian.
pub fn vector_as_slice<'a, T>(vector: flatbuffers::Vector<'a, T>) -> Cow<'a, [T]>
where
    T: bytemuck::Pod + flatbuffers::Follow<'a, Inner = T> + flatbuffers::EndianScalar,
{
    #[cfg(target_endian = "big")]
    {
        Cow::Owned(vector.iter().collect())
    }
    #[cfg(target_endian = "little")]
    {
        match bytemuck::try_cast_slice(vector.bytes()) {
            Ok(slice) => Cow::Borrowed(slice),
            Err(_) => Cow::Owned(vector.iter().collect()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flatbuffers::Follow;

    // Lay a length-prefixed f64 vector down at `loc` inside `buf`.
    fn write_vector(buf: &mut [u8], loc: usize, values: &[f64]) {
        buf[loc..loc + 4].copy_from_slice(&(values.len() as u32).to_le_bytes());
        for (i, v) in values.iter().enumerate() {
            let at = loc + 4 + i * 8;
            buf[at..at + 8].copy_from_slice(&v.to_le_bytes());
        }
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn test_vector_as_slice_borrows_when_aligned() {
        let values = [1.5f64, -2.25, 1234.0];
        let mut buf = vec![0u8; 96];
        let base = buf.as_ptr() as usize;
        // element storage begins at loc + 4; one start lands on an 8-byte
        // address, the other misses it by 4
        let aligned = (8 - (base + 4) % 8) % 8;
        let misaligned = aligned + 36;
        write_vector(&mut buf, aligned, &values);
        write_vector(&mut buf, misaligned, &values);

        let vector = unsafe { flatbuffers::Vector::<f64>::follow(&buf, aligned) };
        let cow = vector_as_slice(vector);
        assert!(matches!(cow, Cow::Borrowed(_)));
        assert_eq!(cow.as_ref(), &values);

        let vector = unsafe { flatbuffers::Vector::<f64>::follow(&buf, misaligned) };
        let cow = vector_as_slice(vector);
        assert!(matches!(cow, Cow::Owned(_)));
        assert_eq!(cow.as_ref(), &values);
    }
}
