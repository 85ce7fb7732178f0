//! Deterministic buffer generation.
//!
//! Two generators feed the harness: the 101-byte known-answer fixture shared
//! by every conformance vector, and the constant-fill benchmark payload with
//! a guaranteed-aligned base address.

use std::collections::TryReserveError;

/// Multiplier seeding the known-answer fixture recurrence.
pub const FIXTURE_PRIME: u32 = 2_654_435_761;

/// Known-answer fixture length in bytes.
pub const FIXTURE_LEN: usize = 101;

/// Byte value the benchmark payload is filled with.
const FILL_BYTE: u8 = 0x5A;

/// Slack past the payload length so misaligned slices stay in bounds.
const OFFSET_SLACK: usize = 3;

/// Generate the known-answer fixture.
///
/// A 32-bit multiplicative recurrence: emit the high byte of the running
/// value, then square it (wrapping) for the next step. Same output on every
/// call.
#[must_use]
pub fn known_answer_fixture() -> [u8; FIXTURE_LEN] {
  let mut buf = [0u8; FIXTURE_LEN];
  let mut generator = FIXTURE_PRIME;
  for byte in &mut buf {
    *byte = (generator >> 24) as u8;
    generator = generator.wrapping_mul(generator);
  }
  buf
}

/// Benchmark payload with an 8-byte-aligned base address.
///
/// Backed by `u64` storage so offset 0 is naturally aligned for the widest
/// access the hash kernels perform, and offsets 1..=3 are guaranteed
/// misaligned. The storage carries 3 bytes of slack so misaligned slices
/// keep the full payload length.
pub struct BenchPayload {
  words: Vec<u64>,
  len: usize,
}

impl BenchPayload {
  /// Allocate a payload of `len` bytes filled with a constant.
  ///
  /// # Errors
  ///
  /// Returns the allocator's `TryReserveError` when the buffer cannot be
  /// reserved; the caller reports it and aborts the scenario.
  pub fn new(len: usize) -> Result<Self, TryReserveError> {
    let word_count = (len + OFFSET_SLACK).div_ceil(size_of::<u64>());
    let mut words = Vec::new();
    words.try_reserve_exact(word_count)?;
    words.resize(word_count, u64::from_ne_bytes([FILL_BYTE; size_of::<u64>()]));
    Ok(Self { words, len })
  }

  /// Payload length in bytes (excluding the alignment slack).
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the payload is empty.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Borrow the payload starting `offset` bytes past the aligned base.
  ///
  /// `offset` must be at most the 3-byte slack; 0 yields the naturally
  /// aligned view.
  #[must_use]
  pub fn slice(&self, offset: usize) -> &[u8] {
    debug_assert!(offset <= OFFSET_SLACK);
    &self.bytes()[offset..offset + self.len]
  }

  #[inline]
  fn bytes(&self) -> &[u8] {
    let byte_len = self.words.len() * size_of::<u64>();
    // SAFETY: `words` is a live allocation of `byte_len` initialized bytes and
    // `u8` has no alignment or validity requirements; the view borrows `self`.
    unsafe { core::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), byte_len) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fixture_is_deterministic() {
    let a = known_answer_fixture();
    let b = known_answer_fixture();
    assert_eq!(a, b);
    assert_eq!(a[0], (FIXTURE_PRIME >> 24) as u8);
    assert!(a.iter().any(|&byte| byte != a[0]));
  }

  #[test]
  fn test_payload_alignment_and_slack() {
    let payload = BenchPayload::new(100).unwrap();
    assert_eq!(payload.len(), 100);
    assert_eq!(payload.slice(0).as_ptr() as usize % 8, 0);
    for offset in 0..=3 {
      let view = payload.slice(offset);
      assert_eq!(view.len(), 100);
      assert!(view.iter().all(|&byte| byte == 0x5A));
    }
  }

  #[test]
  fn test_empty_payload() {
    let payload = BenchPayload::new(0).unwrap();
    assert!(payload.is_empty());
    assert!(payload.slice(0).is_empty());
  }
}
