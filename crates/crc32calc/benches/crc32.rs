//! CRC-32 benchmarks.
//!
//! Run: `cargo bench -p crc32calc`
//! Portable only: `CRC32CALC_FORCE=portable cargo bench -p crc32calc`
//!
//! This benchmarks:
//! - Table vs hardware CRC-32C on one 65529-byte random buffer
//! - Every well-known accessor across a size sweep
//! - The bitwise reference on small inputs

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Odd length so every kernel also exercises its tail path.
const BUFFER_LEN: usize = 65536 - 7;

/// Standard benchmark sizes.
const SIZES: [usize; 7] = [16, 64, 256, 1024, 4096, 16384, 65536];

/// Smaller sizes for the bitwise reference.
const BITWISE_SIZES: [usize; 4] = [16, 64, 256, 1024];

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = Vec::with_capacity(len);
  let mut x = seed;
  for _ in 0..len {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    out.push((x as u8).wrapping_add((x >> 8) as u8));
  }
  out
}

/// Table vs hardware vs the `crc32c` crate on the same buffer.
fn bench_crc32c_strategies(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c/strategies");
  eprintln!("crc32c backend: {}", crc32calc::selected_backend());

  let data = gen_bytes(BUFFER_LEN, 0x9E37_79B9_7F4A_7C15);
  group.throughput(Throughput::Bytes(BUFFER_LEN as u64));

  let table = crc32calc::castagnoli();
  group.bench_function("table", |b| {
    b.iter(|| core::hint::black_box(table.checksum(core::hint::black_box(&data))));
  });

  if let Some(hw) = crc32calc::Calculator::hardware(platform::caps()) {
    group.bench_function("hardware", |b| {
      b.iter(|| core::hint::black_box(hw.checksum(core::hint::black_box(&data))));
    });

    if let crc32calc::Calculator::Hardware(inner) = &hw {
      let narrow = inner.narrowed();
      group.bench_function("hardware-narrow", |b| {
        b.iter(|| core::hint::black_box(narrow.hash(core::hint::black_box(&data), 0)));
      });
    }
  } else {
    eprintln!("Skipping hardware benchmark: CRC instructions not available");
  }

  group.bench_function("crc32c-crate", |b| {
    b.iter(|| core::hint::black_box(crc32c::crc32c(core::hint::black_box(&data))));
  });

  group.finish();
}

/// Every well-known accessor across buffer sizes.
fn bench_accessors(c: &mut Criterion) {
  let accessors: [(&str, &crc32calc::Calculator); 5] = [
    ("zip", crc32calc::zip()),
    ("zip-normal", crc32calc::zip_normal()),
    ("castagnoli", crc32calc::castagnoli()),
    ("castagnoli-normal", crc32calc::castagnoli_normal()),
    ("crc32c", crc32calc::crc32c()),
  ];

  for (name, calc) in accessors {
    let mut group = c.benchmark_group(format!("crc32/{name}"));
    for size in SIZES {
      let data = gen_bytes(size, size as u64);
      group.throughput(Throughput::Bytes(size as u64));
      group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
        b.iter(|| core::hint::black_box(calc.checksum(data)));
      });
    }
    group.finish();
  }
}

/// The table-less bitwise reference.
fn bench_bitwise(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/bitwise");

  for size in BITWISE_SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc32calc::bitwise::hash(crc32calc::poly::CASTAGNOLI, data, 0)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_crc32c_strategies, bench_accessors, bench_bitwise);
criterion_main!(benches);
