//! Serializes the pending response head held by a [`WireOutput`](super::WireOutput).
//!
//! Header directives reach the host in emission order, fields first and the
//! status line last. On the wire the status line must come first, so the host
//! keeps a [`PendingHead`] and encodes it in one go when the head is committed.

use bytes::{BufMut, BytesMut};
use http::HeaderValue;
use std::io;
use tokio_util::codec::Encoder;

/// Initial buffer size allocated for head serialization
const INIT_HEAD_SIZE: usize = 4 * 1024;

/// The status line and header fields waiting to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingHead {
    pub status_line: String,
    pub fields: Vec<(String, HeaderValue)>,
}

impl PendingHead {
    /// Drops every field named `name`, compared ASCII case-insensitively.
    pub fn remove(&mut self, name: &str) {
        self.fields.retain(|(field, _)| !field.eq_ignore_ascii_case(name));
    }

    pub fn append(&mut self, name: String, value: HeaderValue) {
        self.fields.push((name, value));
    }

    /// Values of `name` in the order they will be written.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a HeaderValue> + 'a {
        self.fields.iter().filter(move |(field, _)| field.eq_ignore_ascii_case(name)).map(|(_, value)| value)
    }
}

/// Encoder for a [`PendingHead`] implementing the [`Encoder`] trait.
///
/// Writes the status line, each field as `Name: value`, and the blank line
/// that ends the head, all `\r\n` terminated.
#[derive(Debug, Copy, Clone, Default)]
pub struct HeadEncoder;

impl Encoder<&PendingHead> for HeadEncoder {
    type Error = io::Error;

    fn encode(&mut self, item: &PendingHead, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(INIT_HEAD_SIZE);

        dst.put_slice(item.status_line.as_bytes());
        dst.put_slice(b"\r\n");

        for (name, value) in &item.fields {
            dst.put_slice(name.as_bytes());
            dst.put_slice(b": ");
            dst.put_slice(value.as_bytes());
            dst.put_slice(b"\r\n");
        }
        dst.put_slice(b"\r\n");
        Ok(())
    }
}
