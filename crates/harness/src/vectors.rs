//! Known-answer vectors over the shared 101-byte fixture.
//!
//! Digests come from the upstream xxHash sanity suite. Lengths exercise the
//! empty input, sub-stripe tails, and the full fixture; seeds cover zero and
//! the fixture prime.

use crate::payload::FIXTURE_PRIME;

pub(crate) struct Vector32 {
  pub len: usize,
  pub seed: u32,
  pub expected: u32,
}

pub(crate) struct Vector64 {
  pub len: usize,
  pub seed: u64,
  pub expected: u64,
}

const PRIME: u32 = FIXTURE_PRIME;

pub(crate) const VECTORS_32: &[Vector32] = &[
  Vector32 { len: 0, seed: 0, expected: 0x02CC_5D05 },
  Vector32 { len: 0, seed: PRIME, expected: 0x36B7_8AE7 },
  Vector32 { len: 1, seed: 0, expected: 0xB85C_BEE5 },
  Vector32 { len: 1, seed: PRIME, expected: 0xD584_5D64 },
  Vector32 { len: 14, seed: 0, expected: 0xE5AA_0AB4 },
  Vector32 { len: 14, seed: PRIME, expected: 0x4481_951D },
  Vector32 { len: 101, seed: 0, expected: 0x1F1A_A412 },
  Vector32 { len: 101, seed: PRIME, expected: 0x498E_C8E2 },
];

pub(crate) const VECTORS_64: &[Vector64] = &[
  Vector64 { len: 0, seed: 0, expected: 0xEF46_DB37_51D8_E999 },
  Vector64 { len: 0, seed: PRIME as u64, expected: 0xAC75_FDA2_929B_17EF },
  Vector64 { len: 1, seed: 0, expected: 0x4FCE_394C_C889_52D8 },
  Vector64 { len: 1, seed: PRIME as u64, expected: 0x7398_40CB_819F_A723 },
  Vector64 { len: 14, seed: 0, expected: 0xCFFA_8DB8_81BC_3A3D },
  Vector64 { len: 14, seed: PRIME as u64, expected: 0x5B96_1158_5EFC_C9CB },
  Vector64 { len: 101, seed: 0, expected: 0x0EAB_5433_84F8_78AD },
  Vector64 { len: 101, seed: PRIME as u64, expected: 0xCAA6_5939_306F_1E21 },
];
