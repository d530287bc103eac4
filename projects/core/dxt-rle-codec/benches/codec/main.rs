use core::time::Duration;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxt_rle_codec::{
    decode, decode_mask, encode, ContainerVariant, PixelFormat, TextureDescriptor,
};
use std::hint::black_box;

const SIZE: u16 = 256;

/// 256x256 DXT5 chain (9 mips) mixing transparent, opaque and partially
/// transparent blocks in long runs, as seen in specular masks.
fn build_chain() -> (TextureDescriptor, Vec<u8>) {
    let descriptor = TextureDescriptor::new(PixelFormat::Dxt5, SIZE, SIZE, 9);
    let mut plain = Vec::with_capacity(descriptor.plain_size());
    let block_count = descriptor.plain_size() / 16;
    for block in 0..block_count {
        let seed = (block as u32).wrapping_mul(2654435761) as u8;
        let alpha: [u8; 8] = match (block / 64) % 4 {
            0 => [0x00, 0x00, 0, 0, 0, 0, 0, 0],
            1 => [0xFF, 0xFF, 0, 0, 0, 0, 0, 0],
            _ => [0x80, 0x10, seed, seed ^ 0x5A, seed, 0x12, 0x34, seed],
        };
        plain.extend_from_slice(&alpha);
        plain.extend_from_slice(&[seed, !seed, 0x1F, 0xF8, seed, seed, 0xAA, 0x55]);
    }
    (descriptor, plain)
}

fn criterion_benchmark(c: &mut Criterion) {
    let (descriptor, plain) = build_chain();
    let mut group = c.benchmark_group("DXT5 256x256 Chain");
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    for variant in [ContainerVariant::Rle2, ContainerVariant::Rles] {
        let name = format!("{variant:?}");
        group.bench_function(BenchmarkId::new("encode", &name), |b| {
            b.iter(|| encode(black_box(&descriptor), black_box(&plain), variant))
        });

        let Ok(encoded) = encode(&descriptor, &plain, variant) else {
            continue;
        };
        group.bench_function(BenchmarkId::new("decode", &name), |b| {
            b.iter(|| decode(black_box(&encoded)))
        });

        if variant == ContainerVariant::Rles {
            group.bench_function(BenchmarkId::new("decode_mask", &name), |b| {
                b.iter(|| decode_mask(black_box(&encoded)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
