//! Writes a file as an HTTP/1.1 response to stdout.
//!
//! ```text
//! cargo run --example serve_file -- Cargo.toml
//! cargo run --example serve_file -- Cargo.toml 10 99
//! ```
//!
//! With two offsets only that inclusive byte range is emitted, as a
//! `206 Partial Content` response.

use http::header::{CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE};
use http::{Response, StatusCode};
use micro_emitter::EmitterConfig;
use micro_emitter::body::SeekableBody;
use micro_emitter::emitter::{Emitter, StreamEmitter};
use micro_emitter::host::WireOutput;
use std::error::Error;
use std::fs::File;
use std::io;
use std::num::NonZeroUsize;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run() {
        error!(cause = %e, "emit failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: serve_file <path> [first last]")?;
    let range = match (args.next(), args.next()) {
        (Some(first), Some(last)) => Some((first.parse::<u64>()?, last.parse::<u64>()?)),
        _ => None,
    };

    let body = SeekableBody::new(File::open(&path)?)?;
    let length = body.length();
    info!(path, length, ?range, "serve file");

    let builder = Response::builder().header(CONTENT_TYPE, "application/octet-stream");
    let response = match range {
        Some((first, last)) => builder
            .status(StatusCode::PARTIAL_CONTENT)
            .header(CONTENT_RANGE, format!("bytes {first}-{last}/{length}"))
            .header(CONTENT_LENGTH, last - first + 1)
            .body(body)?,
        None => builder.status(StatusCode::OK).header(CONTENT_LENGTH, length).body(body)?,
    };

    let config = EmitterConfig::new().max_chunk_length(NonZeroUsize::new(4096).ok_or("zero chunk length")?);
    let mut output = WireOutput::with_capacity(io::stdout().lock(), 16 * 1024);
    StreamEmitter::with_config(config).emit(response, &mut output)?;
    output.into_inner()?;
    Ok(())
}
