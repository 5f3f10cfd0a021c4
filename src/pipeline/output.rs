use std::io::{self, Cursor, Seek, SeekFrom, Write};

/// Capacity-capped `Write + Seek` sink for encoded output. An encoder that
/// would produce more than the cap fails with an I/O error instead of
/// growing the buffer without bound.
pub struct OutputBuffer {
    inner: Cursor<Vec<u8>>,
    capacity: usize,
}

impl OutputBuffer {
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            inner: Cursor::new(Vec::new()),
            capacity,
        }
    }

    /// Consumes the buffer, returning the written prefix.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let end = self.inner.position() as usize + buf.len();
        if end > self.capacity {
            return Err(io::Error::other("output buffer capacity exceeded"));
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for OutputBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
