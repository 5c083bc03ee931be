//! The host output surface.
//!
//! The emitter never touches process-wide state. Everything it needs from the
//! runtime that physically transmits the response goes through [`HostOutput`]:
//! two queries consulted by the [`EmissionGuard`] and the header, body and
//! flush operations driven by the emitter.
//!
//! [`WireOutput`] is a ready-made host over any `std::io::Write` that renders
//! an HTTP/1.x message.

mod directive;
mod guard;
mod head_encoder;
mod wire_output;

pub use directive::HeaderDirective;
pub use directive::HeaderLine;
pub use guard::EmissionGuard;
pub use head_encoder::HeadEncoder;
pub use head_encoder::PendingHead;
pub use wire_output::WireOutput;

use bytes::Bytes;
use std::io;

/// The runtime that transmits headers and body bytes to the client.
pub trait HostOutput {
    /// Returns true if a header block has already been transmitted.
    fn headers_sent(&self) -> bool;

    /// Returns true if output is buffered and not yet drained.
    fn output_buffered(&self) -> bool;

    fn write_header(&mut self, directive: HeaderDirective) -> io::Result<()>;

    fn write(&mut self, chunk: Bytes) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

impl<H: HostOutput + ?Sized> HostOutput for &mut H {
    fn headers_sent(&self) -> bool {
        (**self).headers_sent()
    }

    fn output_buffered(&self) -> bool {
        (**self).output_buffered()
    }

    fn write_header(&mut self, directive: HeaderDirective) -> io::Result<()> {
        (**self).write_header(directive)
    }

    fn write(&mut self, chunk: Bytes) -> io::Result<()> {
        (**self).write(chunk)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
