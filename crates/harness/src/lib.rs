//! Conformance and throughput harness for the workspace hash providers.
//!
//! Two drivers share the deterministic buffer generators in [`payload`]:
//!
//! - [`conformance`] proves that one-shot, single-update streaming, and
//!   byte-at-a-time streaming agree with fixed known-answer digests.
//! - [`bench`] measures sustained one-shot throughput under aligned and
//!   deliberately misaligned access with a best-of-N trial strategy.
//!
//! [`report`] renders progress and summaries; the `xxh-bench` binary maps a
//! single command-line token onto the drivers.

use core::fmt;
use std::collections::TryReserveError;

pub mod bench;
pub mod conformance;
pub mod payload;
pub mod report;
mod vectors;

pub use bench::{BenchConfig, BenchSummary, Scenario, TrialSample};
pub use conformance::{ComputeMode, ConformanceError};
pub use payload::BenchPayload;

/// Hash output width selector.
///
/// Fixed per benchmark scenario; the conformance suite always covers both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashVariant {
  /// 32-bit digests (XXH32).
  Width32,
  /// 64-bit digests (XXH64).
  Width64,
}

impl HashVariant {
  /// Algorithm name as printed in reports.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Width32 => "XXH32",
      Self::Width64 => "XXH64",
    }
  }

  /// Byte offset guaranteed to be misaligned for this width's natural
  /// alignment on common architectures.
  #[must_use]
  pub const fn misaligned_offset(self) -> usize {
    match self {
      Self::Width32 => 1,
      Self::Width64 => 3,
    }
  }
}

impl fmt::Display for HashVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Error type for harness operations.
#[derive(Debug)]
#[non_exhaustive]
pub enum HarnessError {
  /// A known-answer vector failed in the conformance oracle.
  Conformance(ConformanceError),

  /// Benchmark payload allocation failed.
  Alloc(TryReserveError),

  /// I/O error while reporting.
  Io(String),
}

impl fmt::Display for HarnessError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Conformance(err) => write!(f, "{err}"),
      Self::Alloc(err) => write!(f, "benchmark payload allocation failed: {err}"),
      Self::Io(msg) => write!(f, "I/O error: {msg}"),
    }
  }
}

impl core::error::Error for HarnessError {}

impl From<ConformanceError> for HarnessError {
  fn from(err: ConformanceError) -> Self {
    Self::Conformance(err)
  }
}

impl From<TryReserveError> for HarnessError {
  fn from(err: TryReserveError) -> Self {
    Self::Alloc(err)
  }
}

impl From<std::io::Error> for HarnessError {
  fn from(err: std::io::Error) -> Self {
    Self::Io(err.to_string())
  }
}
