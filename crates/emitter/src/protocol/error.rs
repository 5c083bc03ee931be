use std::fmt;
use std::io;
use thiserror::Error;

/// The single error type surfaced by an emission attempt.
///
/// Only [`EmitError::AlreadyEmitted`] is produced by the emitter itself; every
/// other failure comes from the body source or the host output and is passed
/// through unchanged as [`EmitError::Io`].
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("unable to emit response: {cause}")]
    AlreadyEmitted { cause: AlreadyEmittedCause },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Why the host refused a new emission.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlreadyEmittedCause {
    /// the host already transmitted a header block
    HeadersSent,
    /// the host holds output that has not been drained yet
    OutputBuffered,
}

impl fmt::Display for AlreadyEmittedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlreadyEmittedCause::HeadersSent => f.write_str("headers already sent"),
            AlreadyEmittedCause::OutputBuffered => f.write_str("output has been emitted previously"),
        }
    }
}

impl EmitError {
    pub fn already_emitted(cause: AlreadyEmittedCause) -> Self {
        Self::AlreadyEmitted { cause }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    /// Returns true if the host reported previous output.
    #[inline]
    pub fn is_already_emitted(&self) -> bool {
        matches!(self, EmitError::AlreadyEmitted { .. })
    }
}
