//! XXH32 (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the 32-bit xxHash variant: a seeded
//! one-shot function plus a streaming state that buffers partial stripes.

#![allow(clippy::indexing_slicing)] // Tight stripe parsing + fixed-size buffers

use traits::{FastHash, FastHasher};

// xxh32 primes
pub(crate) const PRIME32_1: u32 = 0x9E37_79B1;
pub(crate) const PRIME32_2: u32 = 0x85EB_CA77;
pub(crate) const PRIME32_3: u32 = 0xC2B2_AE3D;
pub(crate) const PRIME32_4: u32 = 0x27D4_EB2F;
pub(crate) const PRIME32_5: u32 = 0x1656_67B1;

/// Bytes consumed per accumulator stripe.
const STRIPE_LEN: usize = 16;

#[inline(always)]
fn read_u32_le(input: &[u8], offset: usize) -> u32 {
  debug_assert!(offset + 4 <= input.len());
  // SAFETY: caller ensures `offset + 4 <= input.len()`, and `read_unaligned` supports unaligned
  // loads.
  let v = unsafe { core::ptr::read_unaligned(input.as_ptr().add(offset) as *const u32) };
  u32::from_le(v)
}

#[inline(always)]
const fn round(acc: u32, lane: u32) -> u32 {
  acc
    .wrapping_add(lane.wrapping_mul(PRIME32_2))
    .rotate_left(13)
    .wrapping_mul(PRIME32_1)
}

#[inline(always)]
const fn avalanche(mut hash: u32) -> u32 {
  hash ^= hash >> 15;
  hash = hash.wrapping_mul(PRIME32_2);
  hash ^= hash >> 13;
  hash = hash.wrapping_mul(PRIME32_3);
  hash ^= hash >> 16;
  hash
}

#[inline(always)]
const fn init_acc(seed: u32) -> [u32; 4] {
  [
    seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
    seed.wrapping_add(PRIME32_2),
    seed,
    seed.wrapping_sub(PRIME32_1),
  ]
}

#[inline(always)]
fn process_stripe(acc: &mut [u32; 4], input: &[u8], offset: usize) {
  acc[0] = round(acc[0], read_u32_le(input, offset));
  acc[1] = round(acc[1], read_u32_le(input, offset + 4));
  acc[2] = round(acc[2], read_u32_le(input, offset + 8));
  acc[3] = round(acc[3], read_u32_le(input, offset + 12));
}

#[inline(always)]
const fn merge_acc(acc: &[u32; 4]) -> u32 {
  acc[0]
    .rotate_left(1)
    .wrapping_add(acc[1].rotate_left(7))
    .wrapping_add(acc[2].rotate_left(12))
    .wrapping_add(acc[3].rotate_left(18))
}

/// Fold the sub-stripe tail into `hash` and avalanche.
#[inline]
fn finish(mut hash: u32, tail: &[u8]) -> u32 {
  debug_assert!(tail.len() < STRIPE_LEN);
  let mut offset = 0;
  while offset + 4 <= tail.len() {
    hash = hash
      .wrapping_add(read_u32_le(tail, offset).wrapping_mul(PRIME32_3))
      .rotate_left(17)
      .wrapping_mul(PRIME32_4);
    offset += 4;
  }
  while offset < tail.len() {
    hash = hash
      .wrapping_add((tail[offset] as u32).wrapping_mul(PRIME32_5))
      .rotate_left(11)
      .wrapping_mul(PRIME32_1);
    offset += 1;
  }
  avalanche(hash)
}

/// Seeded one-shot XXH32 over `data`.
#[must_use]
pub fn hash(seed: u32, data: &[u8]) -> u32 {
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
    seed.wrapping_add(PRIME32_5)
  };
  hash = hash.wrapping_add(len as u32);
  finish(hash, &data[len - len % STRIPE_LEN..])
}

/// XXH32 one-shot entry point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh32;

impl FastHash for Xxh32 {
  const OUTPUT_SIZE: usize = 4;

  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    hash(seed, data)
  }
}

/// Streaming XXH32 state.
///
/// Buffers sub-stripe input so the accumulators only ever see whole 16-byte
/// stripes; the digest is therefore independent of update partitioning.
#[derive(Clone)]
pub struct Xxh32State {
  acc: [u32; 4],
  buf: [u8; STRIPE_LEN],
  buf_len: usize,
  total_len: u64,
  seed: u32,
}

impl FastHasher for Xxh32State {
  type Output = u32;
  type Seed = u32;

  fn with_seed(seed: u32) -> Self {
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

  fn digest(&self) -> u32 {
    // At least one stripe has been folded once 16 bytes were absorbed; below
    // that the buffered tail is the whole input.
    let mut hash = if self.total_len >= STRIPE_LEN as u64 {
      merge_acc(&self.acc)
    } else {
      self.seed.wrapping_add(PRIME32_5)
    };
    hash = hash.wrapping_add(self.total_len as u32);
    finish(hash, &self.buf[..self.buf_len])
  }

  fn reset(&mut self, seed: u32) {
    *self = Self::with_seed(seed);
  }
}
