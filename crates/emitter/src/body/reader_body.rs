//! Body sources backed by `std::io` readers.

use crate::body::BodySource;
use bytes::Bytes;
use std::io;
use std::io::{Read, Seek, SeekFrom};

fn read_at_most<R: Read>(reader: &mut R, max_len: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(max_len);
    reader.take(max_len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// A forward-only body over any [`Read`], readable but not seekable.
///
/// End of content is only known after a read came back short, so a body whose
/// length is an exact multiple of the read size reports eof one (empty) read
/// later.
#[derive(Debug)]
pub struct ReaderBody<R> {
    reader: R,
    position: u64,
    eof: bool,
}

impl<R: Read> ReaderBody<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, position: 0, eof: false }
    }

    /// Wraps a reader whose cursor already sits at `position`.
    ///
    /// Used for range emission from sources that cannot be repositioned, the
    /// reader must already be at the first byte of the range.
    pub fn positioned_at(reader: R, position: u64) -> Self {
        Self { reader, position, eof: false }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> BodySource for ReaderBody<R> {
    fn is_seekable(&self) -> bool {
        false
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn read(&mut self, max_len: usize) -> io::Result<Bytes> {
        if self.eof {
            return Ok(Bytes::new());
        }

        let buf = read_at_most(&mut self.reader, max_len)?;
        if buf.len() < max_len {
            self.eof = true;
        }
        self.position += buf.len() as u64;
        Ok(Bytes::from(buf))
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn seek(&mut self, _offset: u64) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "reader body is not seekable"))
    }

    fn tell(&self) -> io::Result<u64> {
        Ok(self.position)
    }

    fn contents(&mut self) -> io::Result<Bytes> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf)?;
        self.position += buf.len() as u64;
        self.eof = true;
        Ok(Bytes::from(buf))
    }

    fn to_bytes(&mut self) -> io::Result<Bytes> {
        self.contents()
    }
}

/// A body over any [`Read`] + [`Seek`], such as a `std::fs::File`.
///
/// The content length is measured once on construction.
#[derive(Debug)]
pub struct SeekableBody<R> {
    inner: R,
    position: u64,
    length: u64,
}

impl<R: Read + Seek> SeekableBody<R> {
    pub fn new(mut inner: R) -> io::Result<Self> {
        let position = inner.stream_position()?;
        let length = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(position))?;
        Ok(Self { inner, position, length })
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> BodySource for SeekableBody<R> {
    fn is_seekable(&self) -> bool {
        true
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn read(&mut self, max_len: usize) -> io::Result<Bytes> {
        let buf = read_at_most(&mut self.inner, max_len)?;
        self.position += buf.len() as u64;
        Ok(Bytes::from(buf))
    }

    fn eof(&self) -> bool {
        self.position >= self.length
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        self.position = self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    fn tell(&self) -> io::Result<u64> {
        Ok(self.position)
    }

    fn contents(&mut self) -> io::Result<Bytes> {
        let mut buf = Vec::new();
        self.inner.read_to_end(&mut buf)?;
        self.position += buf.len() as u64;
        Ok(Bytes::from(buf))
    }

    fn to_bytes(&mut self) -> io::Result<Bytes> {
        self.seek(0)?;
        self.contents()
    }
}
