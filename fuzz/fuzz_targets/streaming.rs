//! Fuzz target for the streaming hash API.
//!
//! Tests that arbitrary sequences of update calls match the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{Xxh32, Xxh32State, Xxh64, Xxh64State};
use libfuzzer_sys::fuzz_target;
use traits::{FastHash, FastHasher};

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  test_streaming_xxh32(input.seed as u32, data, &input.chunk_sizes);
  test_streaming_xxh64(input.seed, data, &input.chunk_sizes);
});

fn test_streaming_xxh32(seed: u32, data: &[u8], chunk_sizes: &[usize]) {
  let expected = Xxh32::hash_with_seed(seed, data);

  let mut hasher = Xxh32State::with_seed(seed);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(chunk_sizes.len());
      chunk_sizes[idx].strict_rem(256).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(hasher.digest(), expected, "xxh32 streaming mismatch");
}

fn test_streaming_xxh64(seed: u64, data: &[u8], chunk_sizes: &[usize]) {
  let expected = Xxh64::hash_with_seed(seed, data);

  let mut hasher = Xxh64State::with_seed(seed);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(chunk_sizes.len());
      chunk_sizes[idx].strict_rem(256).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(hasher.digest(), expected, "xxh64 streaming mismatch");
}
