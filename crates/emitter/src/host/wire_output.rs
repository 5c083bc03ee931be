use crate::host::{HeadEncoder, HeaderDirective, HeaderLine, HostOutput, PendingHead};
use crate::protocol::format_status_line;
use bytes::{Bytes, BytesMut};
use http::{StatusCode, Version};
use std::io;
use std::io::Write;
use tokio_util::codec::Encoder;
use tracing::{trace, warn};

/// A [`HostOutput`] that renders an HTTP/1.x message onto any [`Write`].
///
/// Header directives are collected into a [`PendingHead`] honoring their
/// replace/append flag. The head is committed, status line first, the first
/// time body bytes are written or the output is flushed; from then on
/// [`headers_sent`](HostOutput::headers_sent) reports true and further header
/// directives are refused.
///
/// Body bytes go through an output buffer of the configured capacity, a
/// capacity of zero writes every chunk straight through.
#[derive(Debug)]
pub struct WireOutput<W> {
    writer: W,
    head: PendingHead,
    status: StatusCode,
    head_sent: bool,
    buffer: BytesMut,
    capacity: usize,
}

impl<W: Write> WireOutput<W> {
    pub fn new(writer: W) -> Self {
        Self::with_capacity(writer, 0)
    }

    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        Self {
            writer,
            head: PendingHead::default(),
            status: StatusCode::OK,
            head_sent: false,
            buffer: BytesMut::with_capacity(capacity),
            capacity,
        }
    }

    /// The head collected so far.
    pub fn head(&self) -> &PendingHead {
        &self.head
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Flushes everything and hands back the writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        HostOutput::flush(&mut self)?;
        Ok(self.writer)
    }

    fn commit_head(&mut self) -> io::Result<()> {
        if self.head_sent {
            return Ok(());
        }

        if self.head.status_line.is_empty() {
            self.head.status_line =
                format_status_line(Version::HTTP_11, self.status, self.status.canonical_reason().unwrap_or(""));
        }
        trace!(status_line = %self.head.status_line, fields = self.head.fields.len(), "commit response head");

        let mut dst = BytesMut::new();
        HeadEncoder.encode(&self.head, &mut dst)?;
        self.writer.write_all(&dst)?;

        self.head_sent = true;
        Ok(())
    }

    fn drain(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        Ok(())
    }
}

impl<W: Write> HostOutput for WireOutput<W> {
    fn headers_sent(&self) -> bool {
        self.head_sent
    }

    fn output_buffered(&self) -> bool {
        !self.buffer.is_empty()
    }

    fn write_header(&mut self, directive: HeaderDirective) -> io::Result<()> {
        if self.head_sent {
            warn!(header = %directive, "header directive after the head was sent");
            return Err(io::Error::other("headers already sent"));
        }

        self.status = directive.status;
        match directive.line {
            HeaderLine::Status(line) => self.head.status_line = line,
            HeaderLine::Field { name, value } => {
                if directive.replace {
                    self.head.remove(&name);
                }
                self.head.append(name, value);
            }
        }
        Ok(())
    }

    fn write(&mut self, chunk: Bytes) -> io::Result<()> {
        self.commit_head()?;
        if chunk.is_empty() {
            return Ok(());
        }

        if self.buffer.is_empty() && chunk.len() >= self.capacity {
            return self.writer.write_all(&chunk);
        }

        self.buffer.extend_from_slice(&chunk);
        if self.buffer.len() >= self.capacity {
            self.drain()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit_head()?;
        self.drain()?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use indoc::indoc;

    fn field(name: &str, value: &'static str, replace: bool) -> HeaderDirective {
        HeaderDirective::field(name.to_owned(), HeaderValue::from_static(value), replace, StatusCode::OK)
    }

    fn as_text(bytes: &[u8]) -> String {
        std::str::from_utf8(bytes).unwrap().replace("\r\n", "\n")
    }

    #[test]
    fn status_line_is_written_first() {
        let mut output = WireOutput::new(Vec::new());
        output.write_header(field("Content-Type", "text/plain", true)).unwrap();
        output.write_header(HeaderDirective::status_line("HTTP/1.1 200 OK".to_owned(), StatusCode::OK)).unwrap();
        output.write(Bytes::from_static(b"hello world")).unwrap();

        let expected = indoc! {"
        HTTP/1.1 200 OK
        Content-Type: text/plain

        hello world"};
        assert_eq!(as_text(&output.into_inner().unwrap()), expected);
    }

    #[test]
    fn replace_and_append() {
        let mut output = WireOutput::new(Vec::new());
        output.write_header(field("Vary", "Accept", true)).unwrap();
        output.write_header(field("Vary", "Origin", false)).unwrap();
        output.write_header(field("Set-Cookie", "a=1", false)).unwrap();
        output.write_header(field("Set-Cookie", "b=2", false)).unwrap();
        output.write_header(field("vary", "Cookie", true)).unwrap();

        let head = output.head();
        assert_eq!(head.get_all("Vary").collect::<Vec<_>>(), vec!["Cookie"]);
        assert_eq!(head.get_all("Set-Cookie").collect::<Vec<_>>(), vec!["a=1", "b=2"]);
    }

    #[test]
    fn synthesizes_status_line_from_directive_status() {
        let mut output = WireOutput::new(Vec::new());
        output
            .write_header(HeaderDirective::field(
                "Location".to_owned(),
                HeaderValue::from_static("/next"),
                true,
                StatusCode::FOUND,
            ))
            .unwrap();
        output.flush().unwrap();

        let expected = indoc! {"
        HTTP/1.1 302 Found
        Location: /next

        "};
        assert_eq!(as_text(output.get_ref()), expected);
        assert!(output.headers_sent());
        assert_eq!(output.head().status_line, "HTTP/1.1 302 Found");
        assert_eq!(output.head().get_all("location").count(), 1);
    }

    #[test]
    fn headers_after_commit_are_refused() {
        let mut output = WireOutput::new(Vec::new());
        output.flush().unwrap();

        let err = output.write_header(field("X-Late", "1", true)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn buffers_up_to_capacity() {
        let mut output = WireOutput::with_capacity(Vec::new(), 8);
        output.write_header(HeaderDirective::status_line("HTTP/1.1 200 OK".to_owned(), StatusCode::OK)).unwrap();

        output.write(Bytes::from_static(b"abc")).unwrap();
        assert!(output.output_buffered());
        let head_len = output.get_ref().len();

        output.write(Bytes::from_static(b"defgh")).unwrap();
        assert!(!output.output_buffered());
        assert_eq!(&output.get_ref()[head_len..], b"abcdefgh");

        output.write(Bytes::from_static(b"0123456789")).unwrap();
        assert!(!output.output_buffered());
        assert_eq!(&output.get_ref()[head_len..], b"abcdefgh0123456789");
    }
}
