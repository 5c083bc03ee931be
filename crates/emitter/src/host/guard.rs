use crate::ensure;
use crate::host::HostOutput;
use crate::protocol::{AlreadyEmittedCause, EmitError};
use tracing::error;

/// Refuses an emission when the host already produced output.
///
/// The guard detects a second emission, it cannot prevent one: it only reads
/// the host signals and has no side effects.
#[derive(Debug, Copy, Clone, Default)]
pub struct EmissionGuard;

impl EmissionGuard {
    /// Fails with [`EmitError::AlreadyEmitted`] if the host reports sent
    /// headers or undrained buffered output.
    pub fn check_clear<H: HostOutput + ?Sized>(host: &H) -> Result<(), EmitError> {
        ensure!(!host.headers_sent(), rejected(AlreadyEmittedCause::HeadersSent));
        ensure!(!host.output_buffered(), rejected(AlreadyEmittedCause::OutputBuffered));
        Ok(())
    }
}

fn rejected(cause: AlreadyEmittedCause) -> EmitError {
    error!(%cause, "refuse to emit response");
    EmitError::already_emitted(cause)
}
