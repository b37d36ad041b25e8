use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Fixed-width, NUL-padded text field as stored on disk.
///
/// The raw bytes are kept verbatim; [`FixedText::decode`] yields the text up
/// to (not including) the first NUL byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize>([u8; N]);

impl<const N: usize> FixedText<N> {
    pub fn from_bytes(raw: [u8; N]) -> Self {
        Self(raw)
    }

    /// Encode `text` into the field, truncating at `N` bytes and padding with NUL.
    pub fn encode(text: &str) -> Self {
        let mut raw = [0u8; N];
        let n = text.len().min(N);
        raw[..n].copy_from_slice(&text.as_bytes()[..n]);
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Bytes before the first NUL (the whole field if there is none).
    pub fn trimmed(&self) -> &[u8] {
        match self.0.iter().position(|&b| b == 0) {
            Some(end) => &self.0[..end],
            None => &self.0,
        }
    }

    pub fn decode(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.trimmed())
    }

    /// The trimmed bytes as a path, without lossy UTF-8 conversion on unix.
    #[cfg(unix)]
    pub fn to_path(&self) -> PathBuf {
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(std::ffi::OsStr::from_bytes(self.trimmed()))
    }

    #[cfg(not(unix))]
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(self.decode().into_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.decode())
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}
