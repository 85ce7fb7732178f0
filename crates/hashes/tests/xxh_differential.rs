use hashes::fast::{Xxh32, Xxh32State, Xxh64, Xxh64State};
use proptest::prelude::*;
use traits::{FastHash as _, FastHasher as _};

fn xxh32_ref(seed: u32, data: &[u8]) -> u32 {
  xxhash_rust::xxh32::xxh32(data, seed)
}

fn xxh64_ref(seed: u64, data: &[u8]) -> u64 {
  xxhash_rust::xxh64::xxh64(data, seed)
}

proptest! {
  #[test]
  fn xxh32_matches_xxhash_rust(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = Xxh32::hash_with_seed(seed, &data);
    let expected = xxh32_ref(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn xxh64_matches_xxhash_rust(seed in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = Xxh64::hash_with_seed(seed, &data);
    let expected = xxh64_ref(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn xxh32_streaming_is_partition_independent(
    seed in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    chunk in 1usize..96,
  ) {
    let mut state = Xxh32State::with_seed(seed);
    for part in data.chunks(chunk) {
      state.update(part);
    }
    prop_assert_eq!(state.digest(), Xxh32::hash_with_seed(seed, &data));
  }

  #[test]
  fn xxh64_streaming_is_partition_independent(
    seed in any::<u64>(),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    chunk in 1usize..96,
  ) {
    let mut state = Xxh64State::with_seed(seed);
    for part in data.chunks(chunk) {
      state.update(part);
    }
    prop_assert_eq!(state.digest(), Xxh64::hash_with_seed(seed, &data));
  }
}
