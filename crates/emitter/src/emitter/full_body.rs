use crate::EmitterConfig;
use crate::body::{BodyCapability, BodySource};
use crate::host::HostOutput;
use std::io;
use tracing::{debug, trace, warn};

/// Streams a whole body in chunks of at most `max_chunk_length` bytes.
///
/// Seekable bodies are rewound first, others are streamed from wherever their
/// cursor is. Bodies that cannot be read incrementally are written in one
/// piece, unbounded.
#[derive(Debug, Copy, Clone)]
pub struct FullBodyStreamer {
    max_chunk_length: usize,
}

impl FullBodyStreamer {
    pub fn new(config: &EmitterConfig) -> Self {
        Self { max_chunk_length: config.get_max_chunk_length() }
    }

    pub fn stream<B, H>(&self, body: &mut B, host: &mut H) -> io::Result<()>
    where
        B: BodySource + ?Sized,
        H: HostOutput + ?Sized,
    {
        let capability = BodyCapability::of(body);
        debug!(?capability, max_chunk_length = self.max_chunk_length, "stream full body");

        match capability {
            BodyCapability::SeekableReadable => {
                body.rewind()?;
                self.stream_chunks(body, host)
            }
            BodyCapability::ReadableOnly => self.stream_chunks(body, host),
            BodyCapability::SeekableOnly => {
                body.rewind()?;
                host.write(body.to_bytes()?)
            }
            BodyCapability::Opaque => host.write(body.to_bytes()?),
        }
    }

    fn stream_chunks<B, H>(&self, body: &mut B, host: &mut H) -> io::Result<()>
    where
        B: BodySource + ?Sized,
        H: HostOutput + ?Sized,
    {
        while !body.eof() {
            let chunk = body.read(self.max_chunk_length)?;
            if chunk.is_empty() {
                if !body.eof() {
                    warn!("body returned no data before eof, stop streaming");
                }
                break;
            }

            trace!(chunk_len = chunk.len(), "write body chunk");
            host.write(chunk)?;
        }
        Ok(())
    }
}
