//! Response emitters.
//!
//! An [`Emitter`] takes a built `http::Response` whose body is a
//! [`BodySource`] and transmits it to a [`HostOutput`]:
//!
//! 1. the [`EmissionGuard`] refuses to go on if the host already produced output
//! 2. every header is emitted, then the status line
//! 3. the body is written
//!
//! [`SapiEmitter`] writes the body in one piece. [`StreamEmitter`] flushes the
//! head, then streams the body in bounded chunks and honors a `bytes`
//! `Content-Range` header by emitting only that slice.

mod full_body;
mod header;
mod range_body;

pub use full_body::FullBodyStreamer;
pub use header::emit_headers;
pub use header::emit_status_line;
pub use header::sanitize_header_name;
pub use range_body::RangeBodyStreamer;

use crate::EmitterConfig;
use crate::body::BodySource;
use crate::host::{EmissionGuard, HostOutput};
use crate::protocol::{ContentRange, EmitError, content_range_line};
use http::Response;
use tracing::debug;

/// Transmits a response to a host output, once.
pub trait Emitter {
    /// Emits `response`; `Ok(())` means everything reached the host.
    ///
    /// # Errors
    ///
    /// [`EmitError::AlreadyEmitted`] when the host already produced output, in
    /// which case nothing is written. Body and host failures are returned as
    /// [`EmitError::Io`].
    fn emit<B, H>(&self, response: Response<B>, host: &mut H) -> Result<(), EmitError>
    where
        B: BodySource,
        H: HostOutput + ?Sized;
}

/// Emits the head, then the whole body in a single write.
#[derive(Debug, Copy, Clone, Default)]
pub struct SapiEmitter;

impl SapiEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for SapiEmitter {
    fn emit<B, H>(&self, response: Response<B>, host: &mut H) -> Result<(), EmitError>
    where
        B: BodySource,
        H: HostOutput + ?Sized,
    {
        EmissionGuard::check_clear(&*host)?;
        debug!(status = %response.status(), "emit response");

        emit_headers(&response, host)?;
        emit_status_line(&response, host)?;

        let mut body = response.into_body();
        host.write(body.to_bytes()?)?;
        Ok(())
    }
}

/// Emits the head, flushes it, then streams the body in bounded chunks.
///
/// When the response carries a `Content-Range: bytes <first>-<last>/<length>`
/// header only that slice of the body is emitted. Any other unit, or a value
/// that does not parse, falls back to the whole body.
///
/// A body that is readable but not seekable is never repositioned for a
/// range: the caller must hand it over with its cursor at `first`.
#[derive(Debug, Copy, Clone, Default)]
pub struct StreamEmitter {
    config: EmitterConfig,
}

impl StreamEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }
}

impl Emitter for StreamEmitter {
    fn emit<B, H>(&self, response: Response<B>, host: &mut H) -> Result<(), EmitError>
    where
        B: BodySource,
        H: HostOutput + ?Sized,
    {
        EmissionGuard::check_clear(&*host)?;
        debug!(status = %response.status(), "emit response");

        emit_headers(&response, host)?;
        emit_status_line(&response, host)?;
        host.flush()?;

        let range = content_range_line(response.headers())
            .and_then(|line| ContentRange::parse(&line))
            .filter(ContentRange::is_bytes);

        let mut body = response.into_body();
        match range {
            Some(range) => RangeBodyStreamer::new(&self.config).stream(&range, &mut body, host)?,
            None => FullBodyStreamer::new(&self.config).stream(&mut body, host)?,
        }
        Ok(())
    }
}
