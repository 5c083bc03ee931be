use crate::body::BodySource;
use bytes::Bytes;
use std::cmp;
use std::io;

/// An in-memory body, seekable and readable.
///
/// Reads hand out zero-copy slices of the underlying [`Bytes`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBody {
    bytes: Bytes,
    position: usize,
}

impl MemoryBody {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into(), position: 0 }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&'static str> for MemoryBody {
    fn from(value: &'static str) -> Self {
        Self::new(Bytes::from_static(value.as_bytes()))
    }
}

impl From<String> for MemoryBody {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for MemoryBody {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<Bytes> for MemoryBody {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

impl BodySource for MemoryBody {
    fn is_seekable(&self) -> bool {
        true
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn read(&mut self, max_len: usize) -> io::Result<Bytes> {
        let end = cmp::min(self.position.saturating_add(max_len), self.bytes.len());
        let chunk = self.bytes.slice(self.position..end);
        self.position = end;
        Ok(chunk)
    }

    fn eof(&self) -> bool {
        self.position >= self.bytes.len()
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        match usize::try_from(offset) {
            Ok(offset) if offset <= self.bytes.len() => {
                self.position = offset;
                Ok(())
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("seek offset {offset} is beyond the body length {}", self.bytes.len()),
            )),
        }
    }

    fn tell(&self) -> io::Result<u64> {
        Ok(self.position as u64)
    }

    fn contents(&mut self) -> io::Result<Bytes> {
        let rest = self.bytes.slice(self.position..);
        self.position = self.bytes.len();
        Ok(rest)
    }

    fn to_bytes(&mut self) -> io::Result<Bytes> {
        self.position = self.bytes.len();
        Ok(self.bytes.clone())
    }
}
