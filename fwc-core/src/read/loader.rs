use std::fs;
use std::path::Path;

use crate::container::descriptor::{DESCRIPTOR_SIZE, Descriptor};
use crate::container::layout::{MAX_ENTRIES, MIN_ENTRIES, data_start};
use crate::container::record::decode;
use crate::error::{FwcError, Result};
use crate::report::{Event, Reporter};

/// Container bytes with an accepted root descriptor; file table not yet read.
#[derive(Debug)]
pub struct Loaded {
    pub buf: Vec<u8>,
    pub root: Descriptor,
    pub data_start: u64,
    /// Offset of the first file descriptor.
    pub table_pos: usize,
}

/// Read the whole container at `path` and validate its root descriptor.
pub fn load(path: &Path, reporter: &dyn Reporter) -> Result<Loaded> {
    let buf = fs::read(path)?;
    load_bytes(buf, reporter)
}

pub fn load_bytes(buf: Vec<u8>, reporter: &dyn Reporter) -> Result<Loaded> {
    let mut pos = 0usize;
    let root: Descriptor = decode(&buf, &mut pos)?;

    if !(MIN_ENTRIES..=MAX_ENTRIES).contains(&root.index) {
        return Err(FwcError::CorruptDescriptor { index: root.index });
    }

    let data_start = data_start(root.index);
    reporter.report(Event::Loaded {
        name: root.name.decode().into_owned(),
        entries: root.index,
        declared_blocks: root.file_size,
        data_start,
    });

    debug_assert_eq!(pos, DESCRIPTOR_SIZE);
    Ok(Loaded {
        buf,
        root,
        data_start,
        table_pos: pos,
    })
}
