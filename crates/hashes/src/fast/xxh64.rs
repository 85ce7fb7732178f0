//! XXH64 (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the 64-bit xxHash variant. Same shape as
//! [`xxh32`](crate::fast::xxh32) with 32-byte stripes and a merge step that
//! folds each accumulator back into the converged hash.

#![allow(clippy::indexing_slicing)] // Tight stripe parsing + fixed-size buffers

use traits::{FastHash, FastHasher};

// xxh64 primes
pub(crate) const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
pub(crate) const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
pub(crate) const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
pub(crate) const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
pub(crate) const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

/// Bytes consumed per accumulator stripe.
const STRIPE_LEN: usize = 32;

#[inline(always)]
fn read_u32_le(input: &[u8], offset: usize) -> u32 {
  debug_assert!(offset + 4 <= input.len());
  // SAFETY: caller ensures `offset + 4 <= input.len()`, and `read_unaligned` supports unaligned
  // loads.
  let v = unsafe { core::ptr::read_unaligned(input.as_ptr().add(offset) as *const u32) };
  u32::from_le(v)
}

#[inline(always)]
fn read_u64_le(input: &[u8], offset: usize) -> u64 {
  debug_assert!(offset + 8 <= input.len());
  // SAFETY: caller ensures `offset + 8 <= input.len()`, and `read_unaligned` supports unaligned
  // loads.
  let v = unsafe { core::ptr::read_unaligned(input.as_ptr().add(offset) as *const u64) };
  u64::from_le(v)
}

#[inline(always)]
const fn round(acc: u64, lane: u64) -> u64 {
  acc
    .wrapping_add(lane.wrapping_mul(PRIME64_2))
    .rotate_left(31)
    .wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(mut hash: u64, acc: u64) -> u64 {
  hash ^= round(0, acc);
  hash.wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
const fn avalanche(mut hash: u64) -> u64 {
  hash ^= hash >> 33;
  hash = hash.wrapping_mul(PRIME64_2);
  hash ^= hash >> 29;
  hash = hash.wrapping_mul(PRIME64_3);
  hash ^= hash >> 32;
  hash
}

#[inline(always)]
const fn init_acc(seed: u64) -> [u64; 4] {
  [
    seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
    seed.wrapping_add(PRIME64_2),
    seed,
    seed.wrapping_sub(PRIME64_1),
  ]
}

#[inline(always)]
fn process_stripe(acc: &mut [u64; 4], input: &[u8], offset: usize) {
  acc[0] = round(acc[0], read_u64_le(input, offset));
  acc[1] = round(acc[1], read_u64_le(input, offset + 8));
  acc[2] = round(acc[2], read_u64_le(input, offset + 16));
  acc[3] = round(acc[3], read_u64_le(input, offset + 24));
}

#[inline(always)]
const fn merge_acc(acc: &[u64; 4]) -> u64 {
  let mut hash = acc[0]
    .rotate_left(1)
    .wrapping_add(acc[1].rotate_left(7))
    .wrapping_add(acc[2].rotate_left(12))
    .wrapping_add(acc[3].rotate_left(18));
  hash = merge_round(hash, acc[0]);
  hash = merge_round(hash, acc[1]);
  hash = merge_round(hash, acc[2]);
  hash = merge_round(hash, acc[3]);
  hash
}

/// Fold the sub-stripe tail into `hash` and avalanche.
#[inline]
fn finish(mut hash: u64, tail: &[u8]) -> u64 {
  debug_assert!(tail.len() < STRIPE_LEN);
  let mut offset = 0;
  while offset + 8 <= tail.len() {
    hash ^= round(0, read_u64_le(tail, offset));
    hash = hash.rotate_left(27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
    offset += 8;
  }
  if offset + 4 <= tail.len() {
    hash ^= u64::from(read_u32_le(tail, offset)).wrapping_mul(PRIME64_1);
    hash = hash.rotate_left(23).wrapping_mul(PRIME64_2).wrapping_add(PRIME64_3);
    offset += 4;
  }
  while offset < tail.len() {
    hash ^= u64::from(tail[offset]).wrapping_mul(PRIME64_5);
    hash = hash.rotate_left(11).wrapping_mul(PRIME64_1);
    offset += 1;
  }
  avalanche(hash)
}

/// Seeded one-shot XXH64 over `data`.
#[must_use]
pub fn hash(seed: u64, data: &[u8]) -> u64 {
  let len = data.len();
  let mut hash = if len >= STRIPE_LEN {
    let mut acc = init_acc(seed);
    let mut offset = 0;
    while offset + STRIPE_LEN <= len {
      process_stripe(&mut acc, data, offset);
      offset += STRIPE_LEN;
    }
    merge_acc(&acc)
  } else {
    seed.wrapping_add(PRIME64_5)
  };
  hash = hash.wrapping_add(len as u64);
  finish(hash, &data[len - len % STRIPE_LEN..])
}

/// XXH64 one-shot entry point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh64;

impl FastHash for Xxh64 {
  const OUTPUT_SIZE: usize = 8;

  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    hash(seed, data)
  }
}

/// Streaming XXH64 state.
///
/// Buffers sub-stripe input so the accumulators only ever see whole 32-byte
/// stripes; the digest is therefore independent of update partitioning.
#[derive(Clone)]
pub struct Xxh64State {
  acc: [u64; 4],
  buf: [u8; STRIPE_LEN],
  buf_len: usize,
  total_len: u64,
  seed: u64,
}

impl FastHasher for Xxh64State {
  type Output = u64;
  type Seed = u64;

  fn with_seed(seed: u64) -> Self {
    Self {
      acc: init_acc(seed),
      buf: [0; STRIPE_LEN],
      buf_len: 0,
      total_len: 0,
      seed,
    }
  }

  fn update(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    if self.buf_len + data.len() < STRIPE_LEN {
      self.buf[self.buf_len..self.buf_len + data.len()].copy_from_slice(data);
      self.buf_len += data.len();
      return;
    }

    let mut offset = 0;
    if self.buf_len > 0 {
      let fill = STRIPE_LEN - self.buf_len;
      self.buf[self.buf_len..].copy_from_slice(&data[..fill]);
      process_stripe(&mut self.acc, &self.buf, 0);
      self.buf_len = 0;
      offset = fill;
    }

    while offset + STRIPE_LEN <= data.len() {
      process_stripe(&mut self.acc, data, offset);
      offset += STRIPE_LEN;
    }

    let rest = data.len() - offset;
    self.buf[..rest].copy_from_slice(&data[offset..]);
    self.buf_len = rest;
  }

  fn digest(&self) -> u64 {
    // At least one stripe has been folded once 32 bytes were absorbed; below
    // that the buffered tail is the whole input.
    let mut hash = if self.total_len >= STRIPE_LEN as u64 {
      merge_acc(&self.acc)
    } else {
      self.seed.wrapping_add(PRIME64_5)
    };
    hash = hash.wrapping_add(self.total_len);
    finish(hash, &self.buf[..self.buf_len])
  }

  fn reset(&mut self, seed: u64) {
    *self = Self::with_seed(seed);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixture() -> [u8; 101] {
    let mut buf = [0u8; 101];
    let mut generator: u32 = 2_654_435_761;
    for byte in &mut buf {
      *byte = (generator >> 24) as u8;
      generator = generator.wrapping_mul(generator);
    }
    buf
  }

  const SANITY: &[(usize, u64, u64)] = &[
    (0, 0, 0xEF46_DB37_51D8_E999),
    (0, 2_654_435_761, 0xAC75_FDA2_929B_17EF),
    (1, 0, 0x4FCE_394C_C889_52D8),
    (1, 2_654_435_761, 0x7398_40CB_819F_A723),
    (14, 0, 0xCFFA_8DB8_81BC_3A3D),
    (14, 2_654_435_761, 0x5B96_1158_5EFC_C9CB),
    (101, 0, 0x0EAB_5433_84F8_78AD),
    (101, 2_654_435_761, 0xCAA6_5939_306F_1E21),
  ];

  #[test]
  fn test_one_shot_sanity_vectors() {
    let buf = fixture();
    for &(len, seed, expected) in SANITY {
      assert_eq!(hash(seed, &buf[..len]), expected, "len={len} seed={seed:#018x}");
    }
  }

  #[test]
  fn test_streaming_matches_one_shot() {
    let buf = fixture();
    for &(len, seed, expected) in SANITY {
      let mut state = Xxh64State::with_seed(seed);
      state.update(&buf[..len]);
      assert_eq!(state.digest(), expected, "single update, len={len}");

      state.reset(seed);
      for chunk in buf[..len].chunks(1) {
        state.update(chunk);
      }
      assert_eq!(state.digest(), expected, "byte-at-a-time, len={len}");
    }
  }

  #[test]
  fn test_uneven_split_points() {
    let buf = fixture();
    let expected = hash(1, &buf);
    for split in [0usize, 1, 31, 32, 33, 63, 64, 65, 100, 101] {
      let mut state = Xxh64State::with_seed(1);
      state.update(&buf[..split]);
      state.update(&buf[split..]);
      assert_eq!(state.digest(), expected, "split={split}");
    }
  }

  #[test]
  fn test_digest_is_idempotent_and_stream_continues() {
    let buf = fixture();
    let mut state = Xxh64State::with_seed(7);
    state.update(&buf[..40]);
    let first = state.digest();
    assert_eq!(state.digest(), first);
    state.update(&buf[40..]);
    assert_eq!(state.digest(), hash(7, &buf));
  }

  #[test]
  fn test_empty_updates_are_inert() {
    let buf = fixture();
    let mut state = Xxh64State::with_seed(0);
    state.update(&[]);
    state.update(&buf[..5]);
    state.update(&[]);
    assert_eq!(state.digest(), hash(0, &buf[..5]));
  }
}
