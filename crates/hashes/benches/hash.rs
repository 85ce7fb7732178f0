//! Hash benchmarks
//!
//! Run: `cargo bench -p hashes`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p hashes`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashes::fast::{Xxh32, Xxh64};
use traits::FastHash as _;

fn bench_xxh32(c: &mut Criterion) {
  let mut group = c.benchmark_group("xxh32");

  for size in [64, 256, 1024, 4096, 16384, 65536, 1048576] {
    let data = vec![0x5Au8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| Xxh32::hash_with_seed(0, core::hint::black_box(data)));
    });
  }

  group.finish();
}

fn bench_xxh64(c: &mut Criterion) {
  let mut group = c.benchmark_group("xxh64");

  for size in [64, 256, 1024, 4096, 16384, 65536, 1048576] {
    let data = vec![0x5Au8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| Xxh64::hash_with_seed(0, core::hint::black_box(data)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_xxh32, bench_xxh64);
criterion_main!(benches);
