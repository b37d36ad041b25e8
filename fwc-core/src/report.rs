//! Diagnostics sink handed to every stage of the pipeline.
//!
//! Library code never logs through a global; callers pass a [`Reporter`]
//! and decide where events end up. The CLI uses [`TracingReporter`], tests
//! use [`MemoryReporter`].

use std::cell::RefCell;
use std::path::PathBuf;

use crate::util::human;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Root descriptor accepted.
    Loaded {
        name: String,
        entries: u32,
        declared_blocks: u32,
        data_start: u64,
    },
    /// One file descriptor placed in the data region.
    Entry {
        ordinal: usize,
        name: String,
        file_size: u32,
        start_offset: u64,
    },
    /// Declared container size disagrees with the computed layout. Not fatal.
    SizeMismatch { declared: u64, computed: u64 },
    Extracted {
        name: String,
        path: PathBuf,
        bytes: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

impl Event {
    pub fn severity(&self) -> Severity {
        match self {
            Event::Loaded { .. } => Severity::Info,
            Event::Entry { .. } | Event::Extracted { .. } => Severity::Debug,
            Event::SizeMismatch { .. } => Severity::Warn,
        }
    }
}

pub trait Reporter {
    fn report(&self, event: Event);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: Event) {
        match event {
            Event::Loaded {
                name,
                entries,
                declared_blocks,
                data_start,
            } => tracing::info!(
                %name,
                entries,
                declared_blocks,
                data_start,
                "loaded container"
            ),
            Event::Entry {
                ordinal,
                name,
                file_size,
                start_offset,
            } => tracing::debug!(
                ordinal,
                file_size,
                start_offset,
                "`{name}` - {} at {start_offset}",
                human::bytes(u64::from(file_size))
            ),
            Event::SizeMismatch { declared, computed } => tracing::warn!(
                declared,
                computed,
                "declared container size does not match layout"
            ),
            Event::Extracted { name, path, bytes } => tracing::debug!(
                %name,
                path = %path.display(),
                bytes,
                "extracted"
            ),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: Event) {}
}

/// Keeps every event in order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: RefCell<Vec<Event>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.severity() == Severity::Warn)
            .cloned()
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}
