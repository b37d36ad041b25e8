use std::io::Write;

use super::record::{Record, array, le32};
use crate::util::text::FixedText;

pub const DESCRIPTOR_SIZE: usize = 128;

pub const NAME_LEN: usize = 64;
pub const RESERVED_LEN: usize = 24;

// Field offsets within a descriptor
const OFF_NAME: usize = 0;
const OFF_RESERVED: usize = 64;
const OFF_INDEX: usize = 88;
const OFF_FILE_SIZE: usize = 92;
const OFF_SIGNATURE: usize = 96;
const OFF_DATA: usize = 112;

/// One 128-byte table record.
///
/// The first descriptor of a container is the root: its `index` is the number
/// of file descriptors that follow and its `file_size` is the whole container
/// size in 512-byte blocks. In a file descriptor `file_size` is the exact size
/// in bytes and `index` carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Descriptor {
    pub name: FixedText<NAME_LEN>,
    pub reserved: [u8; RESERVED_LEN],
    pub index: u32,
    pub file_size: u32,
    /// Opaque; equal across related files.
    pub signature: [u8; 16],
    pub data: [u8; 16],
}

impl Descriptor {
    pub fn new(name: &str, index: u32, file_size: u32) -> Self {
        Self {
            name: FixedText::encode(name),
            index,
            file_size,
            ..Default::default()
        }
    }

    pub fn to_bytes(&self) -> [u8; DESCRIPTOR_SIZE] {
        let mut out = [0u8; DESCRIPTOR_SIZE];
        out[OFF_NAME..OFF_RESERVED].copy_from_slice(self.name.as_bytes());
        out[OFF_RESERVED..OFF_INDEX].copy_from_slice(&self.reserved);
        out[OFF_INDEX..OFF_FILE_SIZE].copy_from_slice(&self.index.to_le_bytes());
        out[OFF_FILE_SIZE..OFF_SIGNATURE].copy_from_slice(&self.file_size.to_le_bytes());
        out[OFF_SIGNATURE..OFF_DATA].copy_from_slice(&self.signature);
        out[OFF_DATA..].copy_from_slice(&self.data);
        out
    }

    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        w.write_all(&self.to_bytes())
    }
}

impl Record for Descriptor {
    const SIZE: usize = DESCRIPTOR_SIZE;

    fn from_le(b: &[u8]) -> Self {
        Self {
            name: FixedText::from_bytes(array(b, OFF_NAME)),
            reserved: array(b, OFF_RESERVED),
            index: le32(b, OFF_INDEX),
            file_size: le32(b, OFF_FILE_SIZE),
            signature: array(b, OFF_SIGNATURE),
            data: array(b, OFF_DATA),
        }
    }
}
