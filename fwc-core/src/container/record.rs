//! Fixed-size little-endian record decoding.
//!
//! Every on-disk structure in an update container is a record of known size.
//! [`decode`] reads one such record at a position in an in-memory buffer and
//! advances that position; [`RecordReader`] wraps the position for sequential
//! reads.

use crate::error::{FwcError, Result};

pub trait Record: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Decode from exactly `SIZE` little-endian bytes.
    fn from_le(bytes: &[u8]) -> Self;
}

macro_rules! record_int {
    ($ty:ty) => {
        impl Record for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn from_le(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..Self::SIZE]);
                <$ty>::from_le_bytes(raw)
            }
        }
    };
}

record_int!(u8);
record_int!(u16);
record_int!(u32);
record_int!(u64);

/// Copy `N` bytes starting at `at` into an array.
#[inline]
pub(crate) fn array<const N: usize>(bytes: &[u8], at: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[at..at + N]);
    out
}

#[inline]
pub(crate) fn le32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(array(bytes, at))
}

/// Decode one `T` at `*pos`, advancing `*pos` by `T::SIZE`.
///
/// On failure `*pos` is left untouched.
pub fn decode<T: Record>(buf: &[u8], pos: &mut usize) -> Result<T> {
    let have = buf.len().saturating_sub(*pos);
    if have < T::SIZE {
        return Err(FwcError::Truncated {
            offset: *pos as u64,
            need: T::SIZE as u64,
            have: have as u64,
        });
    }
    let rec = T::from_le(&buf[*pos..*pos + T::SIZE]);
    *pos += T::SIZE;
    Ok(rec)
}

#[derive(Debug, Clone)]
pub struct RecordReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read<T: Record>(&mut self) -> Result<T> {
        decode(self.buf, &mut self.pos)
    }
}
