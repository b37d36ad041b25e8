// fwc_core/src/domain.rs
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub ordinal: usize,
    pub name: String,
    pub file_size: u64,
    pub chunk_size: u64,
    pub start_offset: u64,
    pub signature: String,
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContainerInfo {
    pub name: String,
    pub entries: u32,
    pub declared_blocks: u32,
    pub declared_size: u64,
    pub data_start: u64,
    pub computed_size: u64,
    pub buffer_size: u64,
    pub size_consistent: bool,
}
