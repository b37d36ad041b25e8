use std::borrow::Cow;
use std::path::PathBuf;

use crate::container::descriptor::Descriptor;
use crate::container::layout::{CHUNK_BLOCK_SIZE, chunk_size};
use crate::container::record::RecordReader;
use crate::error::Result;
use crate::report::{Event, Reporter};
use crate::util::view::ByteView;

/// A file descriptor placed in the data region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub descriptor: Descriptor,
    /// Block-aligned chunk holding the file and its padding.
    pub chunk: ByteView,
}

impl FileEntry {
    pub fn name(&self) -> Cow<'_, str> {
        self.descriptor.name.decode()
    }

    /// Name as a relative path, built from the raw bytes.
    pub fn path(&self) -> PathBuf {
        self.descriptor.name.to_path()
    }

    pub fn file_size(&self) -> u64 {
        u64::from(self.descriptor.file_size)
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk.len
    }

    pub fn start_offset(&self) -> u64 {
        self.chunk.offset
    }
}

/// Decode `root.index` descriptors starting at `pos` and lay their chunks out
/// back to back from `data_start`.
///
/// Entries come back in container order; each offset depends on every chunk
/// before it. A declared size that disagrees with the layout is reported and
/// otherwise ignored.
pub fn build_file_list(
    buf: &[u8],
    pos: usize,
    root: &Descriptor,
    data_start: u64,
    reporter: &dyn Reporter,
) -> Result<Vec<FileEntry>> {
    let mut reader = RecordReader::at(buf, pos);
    let mut files = Vec::with_capacity(root.index as usize);

    let mut chunk_total = 0u64;
    let mut size_total = 0u64;
    for ordinal in 0..root.index as usize {
        let descriptor: Descriptor = reader.read()?;
        let chunk = ByteView::new(data_start + chunk_total, chunk_size(descriptor.file_size));

        chunk_total += chunk.len;
        size_total += u64::from(descriptor.file_size);

        reporter.report(Event::Entry {
            ordinal,
            name: descriptor.name.decode().into_owned(),
            file_size: descriptor.file_size,
            start_offset: chunk.offset,
        });
        files.push(FileEntry { descriptor, chunk });
    }

    let declared = u64::from(root.file_size) * CHUNK_BLOCK_SIZE;
    let computed = data_start + chunk_total;
    if declared != computed {
        reporter.report(Event::SizeMismatch { declared, computed });
    }
    debug_assert!(size_total <= chunk_total);

    Ok(files)
}
