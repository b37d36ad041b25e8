/// `(offset, length)` window into a container buffer.
///
/// Holding a view never copies; bytes are only materialised by [`ByteView::slice`],
/// which checks the bounds against the buffer it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteView {
    pub offset: u64,
    pub len: u64,
}

impl ByteView {
    pub fn new(offset: u64, len: u64) -> Self {
        Self { offset, len }
    }

    /// One past the last byte, saturating on overflow.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.len)
    }

    pub fn fits(&self, buf_len: u64) -> bool {
        self.offset.checked_add(self.len).is_some_and(|end| end <= buf_len)
    }

    /// Same start, at most `len` bytes long.
    pub fn shorten(self, len: u64) -> Self {
        Self {
            offset: self.offset,
            len: self.len.min(len),
        }
    }

    pub fn slice<'a>(&self, buf: &'a [u8]) -> Option<&'a [u8]> {
        let start = usize::try_from(self.offset).ok()?;
        let len = usize::try_from(self.len).ok()?;
        buf.get(start..start.checked_add(len)?)
    }
}
