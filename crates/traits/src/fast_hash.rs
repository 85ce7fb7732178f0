//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// One-shot hashing is the fastest path for data already in memory. The
/// streaming counterpart is [`FastHasher`]; implementations must keep the two
/// in agreement (see the equivalence requirement there).
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type, width-matched to the output (`u32` for 32-bit digests).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  ///
  /// Pure function of its inputs: repeated calls with identical arguments
  /// return identical digests.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

/// A resettable streaming accumulator for a fast hash.
///
/// # Implementor Requirements
///
/// - The digest depends only on the seed and the concatenation of all bytes
///   passed to [`update`](Self::update), never on how that input was
///   partitioned across calls. Empty and single-byte slices are legal updates.
/// - [`digest`](Self::digest) must be idempotent (calling multiple times
///   returns the same value) and must not disturb the accumulation; further
///   updates extend the original stream.
/// - [`reset`](Self::reset) must restore the state to
///   `Self::with_seed(seed)`.
/// - For a paired one-shot implementation, `H::hash_with_seed(seed, data)`
///   equals `with_seed(seed)` + one `update(data)` + `digest()`.
pub trait FastHasher: Clone {
  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (matches the paired [`FastHash`] implementation).
  type Seed: Copy + Debug + Default;

  /// Begin a new accumulation from `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Append `data` to the accumulation.
  ///
  /// Callable any number of times, including with zero-length slices.
  fn update(&mut self, data: &[u8]);

  /// Return the digest of everything accumulated so far.
  #[must_use]
  fn digest(&self) -> Self::Output;

  /// Restore the state to a fresh accumulation seeded with `seed`.
  fn reset(&mut self, seed: Self::Seed);
}
