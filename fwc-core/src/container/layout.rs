use super::descriptor::DESCRIPTOR_SIZE;

/// Alignment unit for file chunks in the data region.
pub const CHUNK_BLOCK_SIZE: u64 = 512;
/// Alignment unit for the descriptor table.
pub const TABLE_BLOCK_SIZE: u64 = 512;

pub const DESCRIPTORS_PER_BLOCK: u64 = TABLE_BLOCK_SIZE / DESCRIPTOR_SIZE as u64;

/// Accepted range for the root descriptor's entry count.
pub const MIN_ENTRIES: u32 = 1;
pub const MAX_ENTRIES: u32 = 5000;

/// Round `x` up to the next multiple of `block`.
#[inline]
pub fn align_up(x: u64, block: u64) -> u64 {
    x.div_ceil(block) * block
}

/// Byte offset of the data region for a table of `entries` file descriptors.
///
/// Only the file descriptors are counted; the root's own slot is not. Captured
/// containers are laid out this way.
#[inline]
pub fn data_start(entries: u32) -> u64 {
    u64::from(entries).div_ceil(DESCRIPTORS_PER_BLOCK) * TABLE_BLOCK_SIZE
}

#[inline]
pub fn chunk_size(file_size: u32) -> u64 {
    align_up(u64::from(file_size), CHUNK_BLOCK_SIZE)
}
