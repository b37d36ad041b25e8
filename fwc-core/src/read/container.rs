use std::path::Path;

use super::filelist::{FileEntry, build_file_list};
use super::loader::{Loaded, load, load_bytes};
use crate::container::descriptor::Descriptor;
use crate::container::layout::CHUNK_BLOCK_SIZE;
use crate::error::{FwcError, Result};
use crate::report::Reporter;
use crate::util::view::ByteView;

/// A fully decoded update container.
///
/// Owns the raw bytes; every [`FileEntry`] only describes a range of them.
/// Nothing is mutated after construction.
#[derive(Debug)]
pub struct Container {
    buf: Vec<u8>,
    root: Descriptor,
    data_start: u64,
    files: Vec<FileEntry>,
}

impl Container {
    pub fn open(path: &Path, reporter: &dyn Reporter) -> Result<Self> {
        let loaded = load(path, reporter)?;
        Self::from_loaded(loaded, reporter)
    }

    pub fn from_bytes(buf: Vec<u8>, reporter: &dyn Reporter) -> Result<Self> {
        let loaded = load_bytes(buf, reporter)?;
        Self::from_loaded(loaded, reporter)
    }

    fn from_loaded(loaded: Loaded, reporter: &dyn Reporter) -> Result<Self> {
        let files = build_file_list(
            &loaded.buf,
            loaded.table_pos,
            &loaded.root,
            loaded.data_start,
            reporter,
        )?;
        Ok(Self {
            buf: loaded.buf,
            root: loaded.root,
            data_start: loaded.data_start,
            files,
        })
    }

    pub fn root(&self) -> &Descriptor {
        &self.root
    }

    pub fn data_start(&self) -> u64 {
        self.data_start
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn len_bytes(&self) -> u64 {
        self.buf.len() as u64
    }

    /// Size the root descriptor claims, in bytes.
    pub fn declared_size(&self) -> u64 {
        u64::from(self.root.file_size) * CHUNK_BLOCK_SIZE
    }

    /// End of the last chunk.
    pub fn computed_size(&self) -> u64 {
        self.data_start + self.files.iter().map(FileEntry::chunk_size).sum::<u64>()
    }

    /// Bytes under `view`, or `TruncatedContainer` naming `entry` if the
    /// range runs past the loaded buffer.
    pub fn bytes(&self, entry: &FileEntry, view: ByteView) -> Result<&[u8]> {
        view.slice(&self.buf)
            .ok_or_else(|| FwcError::TruncatedContainer {
                name: entry.name().into_owned(),
                start: view.offset,
                end: view.end(),
                len: self.len_bytes(),
            })
    }

    pub fn chunk(&self, entry: &FileEntry) -> Result<&[u8]> {
        self.bytes(entry, entry.chunk)
    }
}
