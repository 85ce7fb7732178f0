//! Known-answer conformance oracle.
//!
//! Drives the hash provider through three equivalent computation paths per
//! vector: one-shot, a single streaming update, and byte-at-a-time streaming.
//! The three are defined to be representations of the same total input, so a
//! divergence indicates a broken provider and the suite fails fast.

use core::fmt;

use hashes::fast::{Xxh32, Xxh32State, Xxh64, Xxh64State};
use traits::{FastHash, FastHasher};

use crate::{HashVariant, payload, vectors};

/// Which of the three equivalent computation paths produced a digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputeMode {
  /// One call over the complete buffer.
  OneShot,
  /// One streaming update covering the complete buffer.
  SingleUpdate,
  /// One streaming update per byte.
  ByteAtATime,
}

impl ComputeMode {
  /// Short name as printed in diagnostics.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::OneShot => "one-shot",
      Self::SingleUpdate => "single-update",
      Self::ByteAtATime => "byte-at-a-time",
    }
  }
}

impl fmt::Display for ComputeMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A known-answer mismatch.
///
/// Digest and seed values are widened to `u64`; [`fmt::Display`] prints them
/// at the width of the failing variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConformanceError {
  /// Width that failed.
  pub variant: HashVariant,
  /// Computation path that diverged.
  pub mode: ComputeMode,
  /// Input length in bytes.
  pub len: usize,
  /// Seed used for the failing vector.
  pub seed: u64,
  /// Digest the known-answer table expects.
  pub expected: u64,
  /// Digest the provider produced.
  pub actual: u64,
}

impl fmt::Display for ConformanceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.variant {
      HashVariant::Width32 => write!(
        f,
        "{} {} mismatch at len={} seed={:#x}: expected {:#010x}, got {:#010x}",
        self.variant, self.mode, self.len, self.seed, self.expected, self.actual
      ),
      HashVariant::Width64 => write!(
        f,
        "{} {} mismatch at len={} seed={:#x}: expected {:#018x}, got {:#018x}",
        self.variant, self.mode, self.len, self.seed, self.expected, self.actual
      ),
    }
  }
}

impl core::error::Error for ConformanceError {}

/// Check one vector through all three computation paths.
fn check_vector<H, S>(variant: HashVariant, data: &[u8], seed: H::Seed, expected: H::Output) -> Result<(), ConformanceError>
where
  H: FastHash,
  S: FastHasher<Seed = H::Seed, Output = H::Output>,
  H::Seed: Into<u64>,
  H::Output: Into<u64>,
{
  let mismatch = |mode: ComputeMode, actual: H::Output| ConformanceError {
    variant,
    mode,
    len: data.len(),
    seed: seed.into(),
    expected: expected.into(),
    actual: actual.into(),
  };

  let one_shot = H::hash_with_seed(seed, data);
  if one_shot != expected {
    return Err(mismatch(ComputeMode::OneShot, one_shot));
  }

  let mut state = S::with_seed(seed);
  state.update(data);
  let streamed = state.digest();
  if streamed != expected {
    return Err(mismatch(ComputeMode::SingleUpdate, streamed));
  }

  state.reset(seed);
  for byte in data.chunks(1) {
    state.update(byte);
  }
  let bytewise = state.digest();
  if bytewise != expected {
    return Err(mismatch(ComputeMode::ByteAtATime, bytewise));
  }

  Ok(())
}

/// Drive every known-answer vector through all three computation paths.
///
/// Fails fast: the first mismatch stops the suite, since continuing past a
/// broken provider would only produce misleading further results. The
/// zero-length vectors run through all three paths like any other (the
/// byte-at-a-time path simply performs no updates).
pub fn run_suite() -> Result<(), ConformanceError> {
  let fixture = payload::known_answer_fixture();

  for vector in vectors::VECTORS_32 {
    check_vector::<Xxh32, Xxh32State>(HashVariant::Width32, &fixture[..vector.len], vector.seed, vector.expected)?;
  }
  for vector in vectors::VECTORS_64 {
    check_vector::<Xxh64, Xxh64State>(HashVariant::Width64, &fixture[..vector.len], vector.seed, vector.expected)?;
  }

  Ok(())
}
