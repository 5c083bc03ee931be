//! Response body sources.
//!
//! A [`BodySource`] is the capability-typed resource the emitter streams from.
//! It advertises whether it can be repositioned ([`BodySource::is_seekable`])
//! and whether it can be read incrementally ([`BodySource::is_readable`]);
//! the emitter picks one of four code paths from these two flags, see
//! [`BodyCapability`].
//!
//! Stock sources:
//!
//! - [`MemoryBody`]: in-memory bytes, seekable and readable
//! - [`ReaderBody`]: any `std::io::Read`, readable but not seekable
//! - [`SeekableBody`]: any `std::io::Read + Seek` such as a file

mod memory_body;
mod reader_body;

pub use memory_body::MemoryBody;
pub use reader_body::ReaderBody;
pub use reader_body::SeekableBody;

use bytes::Bytes;
use std::io;

/// A body the emitter can stream from.
///
/// When [`is_readable`](BodySource::is_readable) is false only
/// [`contents`](BodySource::contents) and [`to_bytes`](BodySource::to_bytes)
/// are called. When [`is_seekable`](BodySource::is_seekable) is false
/// [`seek`](BodySource::seek) and [`rewind`](BodySource::rewind) are never called.
#[cfg_attr(test, mockall::automock)]
pub trait BodySource {
    fn is_seekable(&self) -> bool;

    fn is_readable(&self) -> bool;

    /// Reads up to `max_len` bytes and advances the cursor by the number of
    /// bytes returned. A short read is allowed.
    fn read(&mut self, max_len: usize) -> io::Result<Bytes>;

    /// Returns true once the cursor reached the end of the content.
    fn eof(&self) -> bool;

    /// Moves the cursor to the absolute `offset`.
    fn seek(&mut self, offset: u64) -> io::Result<()>;

    fn rewind(&mut self) -> io::Result<()> {
        self.seek(0)
    }

    fn tell(&self) -> io::Result<u64>;

    /// Drains everything from the cursor to the end.
    fn contents(&mut self) -> io::Result<Bytes>;

    /// The whole logical content in one piece, regardless of the cursor.
    fn to_bytes(&mut self) -> io::Result<Bytes>;
}

impl<B: BodySource + ?Sized> BodySource for Box<B> {
    fn is_seekable(&self) -> bool {
        (**self).is_seekable()
    }

    fn is_readable(&self) -> bool {
        (**self).is_readable()
    }

    fn read(&mut self, max_len: usize) -> io::Result<Bytes> {
        (**self).read(max_len)
    }

    fn eof(&self) -> bool {
        (**self).eof()
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        (**self).seek(offset)
    }

    fn rewind(&mut self) -> io::Result<()> {
        (**self).rewind()
    }

    fn tell(&self) -> io::Result<u64> {
        (**self).tell()
    }

    fn contents(&mut self) -> io::Result<Bytes> {
        (**self).contents()
    }

    fn to_bytes(&mut self) -> io::Result<Bytes> {
        (**self).to_bytes()
    }
}

/// The four seekable × readable combinations a body can advertise.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BodyCapability {
    /// can be repositioned and read incrementally
    SeekableReadable,
    /// can be read incrementally from wherever its cursor is
    ReadableOnly,
    /// can be repositioned but only drained in one piece
    SeekableOnly,
    /// only available as one monolithic piece
    Opaque,
}

impl BodyCapability {
    pub fn of<B: BodySource + ?Sized>(body: &B) -> Self {
        match (body.is_seekable(), body.is_readable()) {
            (true, true) => BodyCapability::SeekableReadable,
            (false, true) => BodyCapability::ReadableOnly,
            (true, false) => BodyCapability::SeekableOnly,
            (false, false) => BodyCapability::Opaque,
        }
    }

    #[inline]
    pub fn is_seekable(self) -> bool {
        matches!(self, BodyCapability::SeekableReadable | BodyCapability::SeekableOnly)
    }

    #[inline]
    pub fn is_readable(self) -> bool {
        matches!(self, BodyCapability::SeekableReadable | BodyCapability::ReadableOnly)
    }
}
