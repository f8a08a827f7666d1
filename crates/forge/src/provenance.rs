//! Generation provenance
//!
//! Every result records the stream state and parameters it was generated from,
//! plus the generator version, so a caller can replay it exactly.

use serde::{Deserialize, Serialize};

use seeding::{RandomStream, Seed};

/// Version tag stamped on every generated result
pub const GENERATOR_VERSION: &str = concat!("forge/", env!("CARGO_PKG_VERSION"));

/// Stream state, parameters and generator version of a generated result
///
/// `seed` is the initial seed of the stream handed to the generator and
/// `word_pos` how far that stream had advanced when the generator took it.
/// Feeding [`Provenance::replay_stream`] and the same parameters through the
/// same version reproduces the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance<P> {
    seed: Seed,
    word_pos: u128,
    generator_version: String,
    parameters: P,
}

impl<P> Provenance<P> {
    /// Capture `stream` before the generator draws from it
    pub(crate) fn new(stream: &RandomStream, parameters: P) -> Self {
        Self {
            seed: stream.seed(),
            word_pos: stream.word_pos(),
            generator_version: GENERATOR_VERSION.to_string(),
            parameters,
        }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Stream position at the start of generation
    pub fn word_pos(&self) -> u128 {
        self.word_pos
    }

    /// A stream in the exact state the generator started from
    pub fn replay_stream(&self) -> RandomStream {
        RandomStream::at(self.seed, self.word_pos)
    }

    pub fn generator_version(&self) -> &str {
        &self.generator_version
    }

    pub fn parameters(&self) -> &P {
        &self.parameters
    }

    /// True if this result came from the running generator version
    pub fn is_current_version(&self) -> bool {
        self.generator_version == GENERATOR_VERSION
    }
}
