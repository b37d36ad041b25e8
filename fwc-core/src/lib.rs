#![forbid(unsafe_code)]

pub mod error;
pub mod report;

pub mod util {
    pub mod human;
    pub mod text;
    pub mod view;
}

pub mod container {
    pub mod descriptor;
    pub mod layout;
    pub mod record;
}

pub mod read {
    pub mod container;
    pub mod extract;
    pub mod filelist;
    pub mod loader;
}

pub mod domain;
pub mod list;

// Re-exports: stable API surface
pub use container::descriptor::Descriptor;
pub use error::{FwcError, Result};
pub use list::{info, list};
pub use read::container::Container;
pub use read::extract::{ExtractMode, ExtractOptions, ExtractSummary, Extractor, extract};
pub use report::{Event, MemoryReporter, NullReporter, Reporter, TracingReporter};
