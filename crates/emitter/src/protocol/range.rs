//! `Content-Range` value parsing.
//!
//! The emitter only needs the single-range form `<unit> <first>-<last>/<length>`
//! where `<length>` is either a decimal number or `*`. A value that does not
//! have this shape is not an error, it simply means the response carries no
//! usable range and the whole body is emitted.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CONTENT_RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<unit>[A-Za-z0-9_]+)\s+(?P<first>[0-9]+)-(?P<last>[0-9]+)/(?P<length>[0-9]+|\*)")
        .expect("content-range pattern must compile")
});

/// The unit that activates partial body emission.
pub const BYTES_UNIT: &str = "bytes";

/// Complete length of the representation, `*` when unknown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeLength {
    Known(u64),
    Unknown,
}

/// A parsed single `Content-Range` value.
///
/// `first` and `last` are inclusive offsets, `last >= first` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRange {
    unit: String,
    first: u64,
    last: u64,
    total: RangeLength,
}

impl ContentRange {
    /// Parses a header value, returns `None` when it does not describe a range.
    ///
    /// The match is not anchored, leading or trailing noise around a well
    /// formed range is ignored. Offsets that overflow `u64`, and ranges whose
    /// last offset is before the first, are rejected.
    ///
    /// Rejecting a reversed range means the response falls back to the whole
    /// body. It is not treated as an empty range, so `bytes 6-3/*` never
    /// produces an empty partial body.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = CONTENT_RANGE_PATTERN.captures(value)?;

        let first = captures["first"].parse::<u64>().ok()?;
        let last = captures["last"].parse::<u64>().ok()?;
        if last < first {
            return None;
        }

        let total = match &captures["length"] {
            "*" => RangeLength::Unknown,
            length => RangeLength::Known(length.parse().ok()?),
        };

        Some(Self { unit: captures["unit"].to_owned(), first, last, total })
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn last(&self) -> u64 {
        self.last
    }

    pub fn total(&self) -> RangeLength {
        self.total
    }

    /// Returns true if the unit is exactly `bytes` (case-sensitive).
    #[inline]
    pub fn is_bytes(&self) -> bool {
        self.unit == BYTES_UNIT
    }

    /// Number of units covered by the range, both ends included.
    #[inline]
    pub fn length(&self) -> u64 {
        (self.last - self.first).saturating_add(1)
    }
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}/", self.unit, self.first, self.last)?;
        match self.total {
            RangeLength::Known(length) => write!(f, "{length}"),
            RangeLength::Unknown => f.write_str("*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unknown_length() {
        let range = ContentRange::parse("bytes 3-6/*").unwrap();
        assert_eq!(range.unit(), "bytes");
        assert_eq!(range.first(), 3);
        assert_eq!(range.last(), 6);
        assert_eq!(range.total(), RangeLength::Unknown);
        assert_eq!(range.length(), 4);
        assert!(range.is_bytes());
    }

    #[test]
    fn parse_known_length() {
        let range = ContentRange::parse("bytes 0-0/1").unwrap();
        assert_eq!(range.total(), RangeLength::Known(1));
        assert_eq!(range.length(), 1);
        assert_eq!(range.to_string(), "bytes 0-0/1");
    }

    #[test]
    fn other_units_parse_but_are_not_bytes() {
        let range = ContentRange::parse("items 0-0/1").unwrap();
        assert_eq!(range.unit(), "items");
        assert!(!range.is_bytes());

        let range = ContentRange::parse("Bytes 0-4/*").unwrap();
        assert!(!range.is_bytes());
    }

    #[test]
    fn unanchored_match() {
        let range = ContentRange::parse("x, bytes 10-20/100;").unwrap();
        assert_eq!(range.to_string(), "bytes 10-20/100");
    }

    #[test]
    fn not_a_range() {
        assert_eq!(ContentRange::parse(""), None);
        assert_eq!(ContentRange::parse("bytes"), None);
        assert_eq!(ContentRange::parse("bytes 1-/*"), None);
        assert_eq!(ContentRange::parse("bytes -5/*"), None);
        assert_eq!(ContentRange::parse("bytes 0-2"), None);
        assert_eq!(ContentRange::parse("bytes0-2/*"), None);
        assert_eq!(ContentRange::parse("bytes 0-2/x"), None);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(ContentRange::parse("bytes 6-3/*"), None);
    }

    #[test]
    fn overflowing_offsets_are_rejected() {
        assert_eq!(ContentRange::parse("bytes 0-99999999999999999999/*"), None);
        assert_eq!(ContentRange::parse("bytes 0-1/99999999999999999999"), None);
    }

    #[test]
    fn length_saturates_at_the_largest_offset() {
        let range = ContentRange::parse("bytes 0-18446744073709551615/*").unwrap();
        assert_eq!(range.last(), u64::MAX);
        assert_eq!(range.length(), u64::MAX);

        let range = ContentRange::parse("bytes 18446744073709551615-18446744073709551615/*").unwrap();
        assert_eq!(range.length(), 1);
    }
}
