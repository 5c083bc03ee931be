//! Emit a built HTTP response to a host output, exactly once, in bounded memory.
//!
//! This crate sits between code that builds an `http::Response` and the runtime
//! that physically transmits it. It does not build responses, compute
//! `Content-Length` or touch sockets: it consumes a response whose body is a
//! [`BodySource`](body::BodySource) and drives a [`HostOutput`](host::HostOutput).
//!
//! # Features
//!
//! - Double emission detection before anything is written
//! - Exact header replace/append semantics, multiple `Set-Cookie` values coexist
//! - Status line emitted after all headers
//! - Body streaming in chunks bounded by a configurable length
//! - Single `bytes` `Content-Range` support for every seekable × readable
//!   combination of body capabilities
//!
//! # Example
//!
//! ```
//! use http::{Response, StatusCode};
//! use micro_emitter::body::MemoryBody;
//! use micro_emitter::emitter::{Emitter, StreamEmitter};
//! use micro_emitter::host::WireOutput;
//!
//! let response = Response::builder()
//!     .status(StatusCode::PARTIAL_CONTENT)
//!     .header(http::header::CONTENT_RANGE, "bytes 0-4/11")
//!     .body(MemoryBody::from("Hello world"))
//!     .unwrap();
//!
//! let mut output = WireOutput::new(Vec::new());
//! StreamEmitter::new().emit(response, &mut output).unwrap();
//!
//! let wire = output.into_inner().unwrap();
//! assert!(wire.starts_with(b"HTTP/1.1 206 Partial Content\r\n"));
//! assert!(wire.ends_with(b"\r\n\r\nHello"));
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: error taxonomy, `Content-Range` parsing, status line views
//! - [`body`]: the [`BodySource`](body::BodySource) capability trait and stock bodies
//! - [`host`]: the [`HostOutput`](host::HostOutput) trait, the emission guard and
//!   the [`WireOutput`](host::WireOutput) host
//! - [`emitter`]: [`SapiEmitter`](emitter::SapiEmitter) and
//!   [`StreamEmitter`](emitter::StreamEmitter)
//!
//! # Limitations
//!
//! - a single contiguous range only, no multipart ranges
//! - no compression or transfer-encoding handling
//! - the host output is assumed to accept every write

pub mod body;
pub mod emitter;
pub mod host;
pub mod protocol;

mod config;
pub use config::DEFAULT_MAX_CHUNK_LENGTH;
pub use config::EmitterConfig;

mod utils;
pub(crate) use utils::ensure;

#[cfg(test)]
mod test_support;
