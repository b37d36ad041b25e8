use thiserror::Error;

#[derive(Error, Debug)]
pub enum FwcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Root descriptor count outside the accepted range.
    #[error("corrupt root descriptor: index {index} outside 1..=5000")]
    CorruptDescriptor { index: u32 },

    /// Not enough bytes left to decode a fixed-size record.
    #[error("truncated record at offset {offset}: need {need} bytes, have {have}")]
    Truncated { offset: u64, need: u64, have: u64 },

    /// A computed chunk range runs past the end of the loaded buffer.
    #[error("truncated container: `{name}` spans {start}..{end} but buffer is {len} bytes")]
    TruncatedContainer {
        name: String,
        start: u64,
        end: u64,
        len: u64,
    },

    #[error("unsafe path in container: {name:?}")]
    UnsafePath { name: String },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, FwcError>;
