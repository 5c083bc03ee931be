//! Protocol level types shared by the emitter and the host outputs.
//!
//! - [`error`]: the [`EmitError`] taxonomy
//! - [`range`]: [`ContentRange`] parsing for partial body emission
//! - [`response`]: status line and header views over `http::Response`

mod error;
pub use error::AlreadyEmittedCause;
pub use error::EmitError;

mod range;
pub use range::BYTES_UNIT;
pub use range::ContentRange;
pub use range::RangeLength;

mod response;
pub use response::ReasonPhrase;
pub use response::content_range_line;
pub use response::protocol_version;
pub use response::reason_phrase;
pub use response::status_line;
pub(crate) use response::format_status_line;
