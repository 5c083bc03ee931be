//! Emission configuration.

use serde::Deserialize;
use std::num::NonZeroUsize;

/// Default upper bound of a single streamed read/write, in bytes.
pub const DEFAULT_MAX_CHUNK_LENGTH: NonZeroUsize = NonZeroUsize::new(8192).unwrap();

/// Tunables of a [`StreamEmitter`](crate::emitter::StreamEmitter).
///
/// `max_chunk_length` bounds every read and write performed while streaming a
/// readable body. Monolithic writes for non-readable bodies are not bounded.
///
/// The type deserializes with serde so that it can be embedded in a host
/// application's own configuration:
///
/// ```
/// # use micro_emitter::EmitterConfig;
/// let config: EmitterConfig = serde_json::from_str(r#"{ "max_chunk_length": 4096 }"#).unwrap();
/// assert_eq!(config.get_max_chunk_length(), 4096);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct EmitterConfig {
    #[serde(default = "default_max_chunk_length")]
    max_chunk_length: NonZeroUsize,
}

fn default_max_chunk_length() -> NonZeroUsize {
    DEFAULT_MAX_CHUNK_LENGTH
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_chunk_length(mut self, max_chunk_length: NonZeroUsize) -> Self {
        self.max_chunk_length = max_chunk_length;
        self
    }

    #[inline]
    pub fn get_max_chunk_length(&self) -> usize {
        self.max_chunk_length.get()
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self { max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH }
    }
}
