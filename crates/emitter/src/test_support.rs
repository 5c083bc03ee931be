//! Test doubles for the host output and body sources.

use crate::body::BodySource;
use crate::host::{HeaderDirective, HostOutput};
use bytes::Bytes;
use std::cell::Cell;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostEvent {
    Header(String),
    Write(usize),
    Flush,
}

/// A host that records every directive and every written chunk.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    headers_sent: bool,
    output_buffered: bool,
    directives: Vec<HeaderDirective>,
    output: Vec<u8>,
    events: Vec<HostEvent>,
}

impl RecordingHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_headers_sent(mut self) -> Self {
        self.headers_sent = true;
        self
    }

    pub(crate) fn with_output_buffered(mut self) -> Self {
        self.output_buffered = true;
        self
    }

    pub(crate) fn directives(&self) -> &[HeaderDirective] {
        &self.directives
    }

    /// `(line, replace, status)` of every directive, in order.
    pub(crate) fn header_lines(&self) -> Vec<(String, bool, u16)> {
        self.directives.iter().map(|d| (d.to_string(), d.replace, d.status.as_u16())).collect()
    }

    pub(crate) fn output(&self) -> &[u8] {
        &self.output
    }

    pub(crate) fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub(crate) fn write_lengths(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Write(len) => Some(*len),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn largest_write(&self) -> usize {
        self.write_lengths().into_iter().max().unwrap_or(0)
    }
}

impl HostOutput for RecordingHost {
    fn headers_sent(&self) -> bool {
        self.headers_sent
    }

    fn output_buffered(&self) -> bool {
        self.output_buffered
    }

    fn write_header(&mut self, directive: HeaderDirective) -> io::Result<()> {
        self.events.push(HostEvent::Header(directive.to_string()));
        self.directives.push(directive);
        Ok(())
    }

    fn write(&mut self, chunk: Bytes) -> io::Result<()> {
        self.events.push(HostEvent::Write(chunk.len()));
        self.output.extend_from_slice(&chunk);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.events.push(HostEvent::Flush);
        Ok(())
    }
}

/// An in-memory body with configurable capabilities.
///
/// Panics when the emitter uses an operation the advertised capabilities
/// forbid, and remembers the largest read it was asked for.
#[derive(Debug)]
pub(crate) struct TrackedBody {
    contents: Bytes,
    position: usize,
    seekable: bool,
    readable: bool,
    largest_read: Cell<usize>,
}

impl TrackedBody {
    pub(crate) fn new(contents: &str, seekable: bool, readable: bool) -> Self {
        Self {
            contents: Bytes::copy_from_slice(contents.as_bytes()),
            position: 0,
            seekable,
            readable,
            largest_read: Cell::new(0),
        }
    }

    /// Moves the cursor without going through the tracked operations.
    pub(crate) fn starting_at(mut self, position: u64) -> Self {
        self.position = usize::try_from(position).unwrap().min(self.contents.len());
        self
    }

    pub(crate) fn largest_read(&self) -> usize {
        self.largest_read.get()
    }
}

impl BodySource for TrackedBody {
    fn is_seekable(&self) -> bool {
        self.seekable
    }

    fn is_readable(&self) -> bool {
        self.readable
    }

    fn read(&mut self, max_len: usize) -> io::Result<Bytes> {
        assert!(self.readable, "read on a non-readable body");
        self.largest_read.set(self.largest_read.get().max(max_len));

        let end = self.contents.len().min(self.position + max_len);
        let chunk = self.contents.slice(self.position..end);
        self.position = end;
        Ok(chunk)
    }

    fn eof(&self) -> bool {
        assert!(self.readable, "eof on a non-readable body");
        self.position >= self.contents.len()
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        assert!(self.seekable, "seek on a non-seekable body");
        let offset = usize::try_from(offset).unwrap();
        if offset >= self.contents.len() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "seek beyond the end"));
        }
        self.position = offset;
        Ok(())
    }

    fn rewind(&mut self) -> io::Result<()> {
        assert!(self.seekable, "rewind on a non-seekable body");
        self.position = 0;
        Ok(())
    }

    fn tell(&self) -> io::Result<u64> {
        Ok(self.position as u64)
    }

    fn contents(&mut self) -> io::Result<Bytes> {
        let rest = self.contents.slice(self.position..);
        self.position = self.contents.len();
        Ok(rest)
    }

    fn to_bytes(&mut self) -> io::Result<Bytes> {
        self.position = self.contents.len();
        Ok(self.contents.clone())
    }
}
