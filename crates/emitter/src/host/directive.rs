use http::{HeaderValue, StatusCode};
use std::fmt;

/// What a header directive carries: a header field or the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLine {
    /// a field with its sanitized `Word-Word` name
    Field { name: String, value: HeaderValue },
    /// `HTTP/<version> <code>[ <reason>]`
    Status(String),
}

/// One header-set operation handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDirective {
    pub line: HeaderLine,
    /// overwrite previous values of the same name instead of appending
    pub replace: bool,
    pub status: StatusCode,
}

impl HeaderDirective {
    pub fn field(name: String, value: HeaderValue, replace: bool, status: StatusCode) -> Self {
        Self { line: HeaderLine::Field { name, value }, replace, status }
    }

    pub fn status_line(line: String, status: StatusCode) -> Self {
        Self { line: HeaderLine::Status(line), replace: true, status }
    }

    #[inline]
    pub fn is_status_line(&self) -> bool {
        matches!(self.line, HeaderLine::Status(_))
    }
}

impl fmt::Display for HeaderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderLine::Field { name, value } => {
                write!(f, "{name}: {}", String::from_utf8_lossy(value.as_bytes()))
            }
            HeaderLine::Status(line) => f.write_str(line),
        }
    }
}

impl fmt::Display for HeaderDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.line.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_field() {
        let directive = HeaderDirective::field(
            "Content-Type".to_owned(),
            HeaderValue::from_static("text/plain"),
            true,
            StatusCode::OK,
        );
        assert_eq!(directive.to_string(), "Content-Type: text/plain");
        assert!(!directive.is_status_line());
    }

    #[test]
    fn status_line_always_replaces() {
        let directive = HeaderDirective::status_line("HTTP/1.1 404 Not Found".to_owned(), StatusCode::NOT_FOUND);
        assert!(directive.replace);
        assert!(directive.is_status_line());
        assert_eq!(directive.to_string(), "HTTP/1.1 404 Not Found");
    }
}
