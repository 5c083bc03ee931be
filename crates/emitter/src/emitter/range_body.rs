use crate::EmitterConfig;
use crate::body::{BodyCapability, BodySource};
use crate::host::HostOutput;
use crate::protocol::ContentRange;
use bytes::Bytes;
use std::io;
use tracing::{debug, trace, warn};

/// Streams the inclusive `[first, last]` byte slice of a body.
///
/// Seekable bodies are moved to `first` and read from there. A body that
/// cannot be repositioned is never moved: when it is readable its cursor must
/// already sit at `first`, the streamer only warns when
/// [`tell`](BodySource::tell) disagrees. A body that cannot be read
/// incrementally is drained and sliced in memory.
///
/// Readable bodies are read in chunks of at most `max_chunk_length` bytes, the
/// output stops early if the body ends before the range does.
#[derive(Debug, Copy, Clone)]
pub struct RangeBodyStreamer {
    max_chunk_length: usize,
}

impl RangeBodyStreamer {
    pub fn new(config: &EmitterConfig) -> Self {
        Self { max_chunk_length: config.get_max_chunk_length() }
    }

    pub fn stream<B, H>(&self, range: &ContentRange, body: &mut B, host: &mut H) -> io::Result<()>
    where
        B: BodySource + ?Sized,
        H: HostOutput + ?Sized,
    {
        let first = range.first();
        let length = range.length();
        let capability = BodyCapability::of(body);
        debug!(%range, ?capability, max_chunk_length = self.max_chunk_length, "stream body range");

        match capability {
            BodyCapability::SeekableReadable => {
                body.seek(first)?;
                self.stream_chunks(length, body, host)
            }
            BodyCapability::ReadableOnly => {
                if let Ok(position) = body.tell()
                    && position != first
                {
                    warn!(position, first, "non-seekable body is not positioned at the range start");
                }
                self.stream_chunks(length, body, host)
            }
            BodyCapability::SeekableOnly => {
                body.seek(first)?;
                write_slice(0, length, body, host)
            }
            BodyCapability::Opaque => write_slice(first, length, body, host),
        }
    }

    fn stream_chunks<B, H>(&self, length: u64, body: &mut B, host: &mut H) -> io::Result<()>
    where
        B: BodySource + ?Sized,
        H: HostOutput + ?Sized,
    {
        let max_chunk_length = self.max_chunk_length as u64;
        let mut remaining = length;

        while remaining >= max_chunk_length && !body.eof() {
            let chunk = body.read(self.max_chunk_length)?;
            if chunk.is_empty() {
                warn!(remaining, "body returned no data before the range end, stop streaming");
                return Ok(());
            }

            remaining = remaining.saturating_sub(chunk.len() as u64);
            trace!(chunk_len = chunk.len(), remaining, "write range chunk");
            host.write(chunk)?;
        }

        if remaining == 0 || body.eof() {
            return Ok(());
        }

        // remaining < max_chunk_length here
        let chunk = body.read(usize::try_from(remaining).unwrap_or(self.max_chunk_length))?;
        trace!(chunk_len = chunk.len(), "write last range chunk");
        if chunk.is_empty() {
            return Ok(());
        }
        host.write(chunk)
    }
}

/// Drains the body and writes `[offset, offset + length)` of what it returned,
/// clamped to the drained contents.
fn write_slice<B, H>(offset: u64, length: u64, body: &mut B, host: &mut H) -> io::Result<()>
where
    B: BodySource + ?Sized,
    H: HostOutput + ?Sized,
{
    let contents = body.contents()?;
    let start = clamp(offset, contents.len());
    let end = clamp(offset.saturating_add(length), contents.len());
    let chunk = slice(&contents, start, end);
    if chunk.is_empty() {
        debug!(offset, length, contents_len = contents.len(), "range starts beyond the body contents");
        return Ok(());
    }
    host.write(chunk)
}

fn clamp(offset: u64, len: usize) -> usize {
    usize::try_from(offset).map_or(len, |offset| offset.min(len))
}

fn slice(contents: &Bytes, start: usize, end: usize) -> Bytes {
    if start >= end { Bytes::new() } else { contents.slice(start..end) }
}
