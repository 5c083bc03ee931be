//! Header and status line emission.
//!
//! Headers are emitted first, in the order of the response's header map, the
//! status line last so that it finalizes the status rather than being
//! overwritten by a later header directive.

use crate::host::{HeaderDirective, HostOutput};
use crate::protocol::status_line;
use http::Response;
use std::io;

const SET_COOKIE: &str = "Set-Cookie";

/// Canonical `Word-Word` casing of a header name.
///
/// The first letter of the name and every letter following a `-` or a space
/// is upper-cased, the rest is kept as is, spaces become `-`:
/// `content-type` → `Content-Type`, `x-custom-id` → `X-Custom-Id`.
pub fn sanitize_header_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        match c {
            ' ' => sanitized.push('-'),
            c if word_start => sanitized.push(c.to_ascii_uppercase()),
            c => sanitized.push(c),
        }
        word_start = matches!(c, '-' | ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C');
    }
    sanitized
}

/// Emits one directive per header value, tagged with the response status.
///
/// The first value of a header replaces whatever the host holds for that
/// name, later values append. `Set-Cookie` values always append.
pub fn emit_headers<B, H>(response: &Response<B>, host: &mut H) -> io::Result<()>
where
    H: HostOutput + ?Sized,
{
    let status = response.status();
    let headers = response.headers();

    for name in headers.keys() {
        let sanitized = sanitize_header_name(name.as_str());
        let mut replace = sanitized != SET_COOKIE;

        for value in headers.get_all(name) {
            host.write_header(HeaderDirective::field(sanitized.clone(), value.clone(), replace, status))?;
            replace = false;
        }
    }
    Ok(())
}

/// Emits `HTTP/<version> <code>[ <reason>]`, always replacing.
pub fn emit_status_line<B, H>(response: &Response<B>, host: &mut H) -> io::Result<()>
where
    H: HostOutput + ?Sized,
{
    host.write_header(HeaderDirective::status_line(status_line(response), response.status()))
}
