use std::fs;
use std::path::{Component, Path, PathBuf};

use super::container::Container;
use super::filelist::FileEntry;
use crate::error::{FwcError, Result};
use crate::report::{Event, Reporter};

/// How much of each chunk ends up on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// The whole block-aligned chunk, trailing padding included.
    #[default]
    Chunk,
    /// Exactly `file_size` bytes.
    Exact,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub mode: ExtractMode,
    /// Validate ranges and paths without touching the filesystem.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub name: String,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Default)]
pub struct ExtractSummary {
    pub files: Vec<ExtractedFile>,
}

impl ExtractSummary {
    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Write every entry of `container` under `dest`, in container order.
///
/// Stops at the first failure. Files written before it stay on disk.
pub fn extract(
    container: &Container,
    dest: &Path,
    opts: Option<&ExtractOptions>,
    reporter: &dyn Reporter,
) -> Result<ExtractSummary> {
    let opts = opts.cloned().unwrap_or_default();
    let mut summary = ExtractSummary::default();
    for item in Extractor::new(container, dest, opts, reporter) {
        summary.files.push(item?);
    }
    Ok(summary)
}

/// Yields one result per entry. After an error it yields nothing more.
pub struct Extractor<'a> {
    container: &'a Container,
    dest: PathBuf,
    opts: ExtractOptions,
    reporter: &'a dyn Reporter,
    next: usize,
    failed: bool,
}

impl<'a> Extractor<'a> {
    pub fn new(
        container: &'a Container,
        dest: &Path,
        opts: ExtractOptions,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            container,
            dest: dest.to_path_buf(),
            opts,
            reporter,
            next: 0,
            failed: false,
        }
    }
}

impl Iterator for Extractor<'_> {
    type Item = Result<ExtractedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let container = self.container;
        let entry = container.files().get(self.next)?;
        self.next += 1;

        let res = extract_entry(container, entry, &self.dest, &self.opts, self.reporter);
        self.failed = res.is_err();
        Some(res)
    }
}

impl std::iter::FusedIterator for Extractor<'_> {}

pub fn extract_entry(
    container: &Container,
    entry: &FileEntry,
    dest: &Path,
    opts: &ExtractOptions,
    reporter: &dyn Reporter,
) -> Result<ExtractedFile> {
    // Whole chunk is bounds-checked even when writing less of it
    let chunk = container.chunk(entry)?;
    let data = match opts.mode {
        ExtractMode::Chunk => chunk,
        ExtractMode::Exact => container.bytes(entry, entry.chunk.shorten(entry.file_size()))?,
    };

    let name = entry.name().into_owned();
    let outp = output_path(dest, &entry.path())?;

    if !opts.dry_run {
        if let Some(parent) = outp.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&outp, data)?;
    }

    let done = ExtractedFile {
        name,
        path: outp,
        bytes: data.len() as u64,
    };
    reporter.report(Event::Extracted {
        name: done.name.clone(),
        path: done.path.clone(),
        bytes: done.bytes,
    });
    Ok(done)
}

/// `root/<dir>/<base>` for an embedded name.
///
/// A leading `/` (or drive prefix) is dropped so absolute names land under
/// `root`. Names with `..` components or without a base are refused.
pub fn output_path(root: &Path, name: &Path) -> Result<PathBuf> {
    let unsafe_path = || FwcError::UnsafePath {
        name: name.to_string_lossy().into_owned(),
    };

    let mut rel = PathBuf::new();
    for c in name.components() {
        match c {
            Component::Normal(part) => rel.push(part),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            Component::ParentDir => return Err(unsafe_path()),
        }
    }
    let base = rel.file_name().ok_or_else(unsafe_path)?;
    let dir = rel.parent().unwrap_or_else(|| Path::new(""));
    Ok(root.join(dir).join(base))
}
