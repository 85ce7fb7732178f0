//! Best-of-N throughput measurement.
//!
//! # Design
//!
//! Each scenario runs a small number of trials; within a trial, one-shot hash
//! calls are issued in batches between clock reads so the cost of reading the
//! clock is amortized against the cost of a hash call. The fastest trial
//! wins: scheduling noise and clock jitter can only slow a trial down, never
//! speed it past the true per-call cost, so the minimum observed per-call
//! time is the most stable estimate a coarse environment can give.
//!
//! The per-call seed is the running call counter, and every digest is
//! XOR-folded into an observable accumulator, so the optimizer can neither
//! hoist nor discard the calls.

use core::hint::black_box;
use core::time::Duration;
use std::time::Instant;

use hashes::fast::{Xxh32, Xxh64};
use traits::FastHash;

use crate::HashVariant;

/// Bytes in one MB as reported by the harness (2^20).
const MIB: f64 = 1_048_576.0;

/// Default benchmark payload length (100 KiB).
pub const DEFAULT_PAYLOAD_LEN: usize = 100 * 1024;

/// Default trial count.
const DEFAULT_TRIALS: u32 = 3;

/// Default calls per batch between clock reads.
const DEFAULT_BATCH: u32 = 100;

/// Default minimum measurement window per trial.
const DEFAULT_MIN_WINDOW_MS: u64 = 1000;

/// Timing harness configuration.
///
/// Explicit parameters rather than process-wide constants so tests can run
/// with tiny payloads and windows.
#[derive(Clone, Debug)]
pub struct BenchConfig {
  /// Trials per scenario; the fastest wins.
  pub trials: u32,

  /// Calls issued between clock reads.
  pub batch: u32,

  /// Minimum wall time a trial must cover before it may stop.
  pub min_window: Duration,
}

impl Default for BenchConfig {
  fn default() -> Self {
    Self {
      trials: DEFAULT_TRIALS,
      batch: DEFAULT_BATCH,
      min_window: Duration::from_millis(DEFAULT_MIN_WINDOW_MS),
    }
  }
}

impl BenchConfig {
  /// Create a quick configuration for faster (but noisier) measurements.
  #[must_use]
  pub fn quick() -> Self {
    Self {
      trials: 2,
      batch: 16,
      min_window: Duration::from_millis(25),
    }
  }

  /// Set the trial count.
  #[must_use]
  pub fn with_trials(mut self, trials: u32) -> Self {
    self.trials = trials;
    self
  }

  /// Set the batch size.
  #[must_use]
  pub fn with_batch(mut self, batch: u32) -> Self {
    self.batch = batch;
    self
  }

  /// Set the minimum measurement window.
  #[must_use]
  pub fn with_min_window(mut self, min_window: Duration) -> Self {
    self.min_window = min_window;
    self
  }
}

/// One benchmark scenario: a hash width plus a byte offset into the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
  /// Width to measure.
  pub variant: HashVariant,
  /// Byte offset past the aligned payload base (0 = aligned).
  pub offset: usize,
}

impl Scenario {
  /// The four scenarios the `xxh-bench` binary exposes.
  pub const ALL: [Self; 4] = [
    Self { variant: HashVariant::Width32, offset: 0 },
    Self { variant: HashVariant::Width32, offset: 1 },
    Self { variant: HashVariant::Width64, offset: 0 },
    Self { variant: HashVariant::Width64, offset: 3 },
  ];

  /// Parse a command-line token (`32`, `32u`, `64`, `64u`).
  #[must_use]
  pub fn parse(token: &str) -> Option<Self> {
    let (name, unaligned) = match token.strip_suffix('u') {
      Some(name) => (name, true),
      None => (token, false),
    };
    let variant = match name {
      "32" => HashVariant::Width32,
      "64" => HashVariant::Width64,
      _ => return None,
    };
    let offset = if unaligned { variant.misaligned_offset() } else { 0 };
    Some(Self { variant, offset })
  }

  /// Scenario label as printed in reports.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match (self.variant, self.offset) {
      (HashVariant::Width32, 0) => "XXH32",
      (HashVariant::Width64, 0) => "XXH64",
      (HashVariant::Width32, _) => "XXH32 unaligned",
      (HashVariant::Width64, _) => "XXH64 unaligned",
    }
  }
}

/// A single timed trial.
#[derive(Clone, Copy, Debug)]
pub struct TrialSample {
  /// One-shot calls issued during the trial.
  pub calls: u64,
  /// Wall time covering exactly those calls.
  pub elapsed: Duration,
}

impl TrialSample {
  /// Mean seconds per hash call in this trial.
  #[must_use]
  pub fn per_call_secs(&self) -> f64 {
    self.elapsed.as_secs_f64() / self.calls as f64
  }

  /// Throughput this trial alone would report, in MB/s (2^20-byte MB).
  #[must_use]
  pub fn throughput_mb_s(&self, payload_len: usize) -> f64 {
    (payload_len as f64 / MIB) / self.per_call_secs()
  }
}

/// Best-of-N reduction over all trials of one scenario.
///
/// Per-trial samples are retained so callers can audit the reduction; the
/// reported throughput always corresponds to the fastest trial.
#[derive(Clone, Debug)]
pub struct BenchSummary {
  /// Width measured.
  pub variant: HashVariant,
  /// Payload length in bytes.
  pub payload_len: usize,
  /// XOR fold of every digest produced across all trials. Observable so the
  /// hash calls cannot be discarded; zero is reported, never an error.
  pub digest_fold: u64,
  /// Every completed trial, in execution order.
  pub trials: Vec<TrialSample>,
}

impl BenchSummary {
  /// Fastest observed per-call time across trials, in seconds.
  #[must_use]
  pub fn best_per_call_secs(&self) -> f64 {
    self.trials.iter().map(TrialSample::per_call_secs).fold(f64::INFINITY, f64::min)
  }

  /// Best-of-N throughput in MB/s (2^20-byte MB).
  #[must_use]
  pub fn throughput_mb_s(&self) -> f64 {
    (self.payload_len as f64 / MIB) / self.best_per_call_secs()
  }
}

/// Measure one-shot throughput for `variant` over `data`.
#[must_use]
pub fn measure(variant: HashVariant, data: &[u8], config: &BenchConfig) -> BenchSummary {
  measure_with(variant, data, config, |_, _| {})
}

/// Like [`measure`], invoking `on_trial` after each completed trial.
pub fn measure_with<F>(variant: HashVariant, data: &[u8], config: &BenchConfig, mut on_trial: F) -> BenchSummary
where
  F: FnMut(u32, &TrialSample),
{
  let trial_count = config.trials.max(1);
  let mut fold = 0u64;
  let mut trials = Vec::with_capacity(trial_count as usize);

  for index in 0..trial_count {
    let sample = match variant {
      HashVariant::Width32 => run_trial(data, config, &mut fold, |counter, buf| {
        u64::from(Xxh32::hash_with_seed(counter as u32, buf))
      }),
      HashVariant::Width64 => run_trial(data, config, &mut fold, |counter, buf| Xxh64::hash_with_seed(counter, buf)),
    };
    on_trial(index, &sample);
    trials.push(sample);
  }

  BenchSummary {
    variant,
    payload_len: data.len(),
    digest_fold: fold,
    trials,
  }
}

/// One timed trial: batches of seeded one-shot calls until the window elapses.
///
/// At least one batch always runs, so `calls` is never zero.
fn run_trial<F>(data: &[u8], config: &BenchConfig, fold: &mut u64, mut call: F) -> TrialSample
where
  F: FnMut(u64, &[u8]) -> u64,
{
  let batch = config.batch.max(1);
  let mut calls: u64 = 0;
  let mut acc = *fold;

  let start = Instant::now();
  let elapsed = loop {
    for _ in 0..batch {
      acc ^= call(calls, black_box(data));
      calls = calls.wrapping_add(1);
    }
    let elapsed = start.elapsed();
    if elapsed >= config.min_window {
      break elapsed;
    }
  };

  *fold = black_box(acc);
  TrialSample { calls, elapsed }
}
