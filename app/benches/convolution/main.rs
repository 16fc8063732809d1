/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use quadfft::{ComplexSequence, direct_convolution, fast_convolution, hadamard_product};
use rand::Rng;

fn random_sequence(len: usize) -> ComplexSequence<f64> {
    let re = (0..len).map(|_| rand::rng().random()).collect();
    let im = (0..len).map(|_| rand::rng().random()).collect();
    ComplexSequence::new(re, im).unwrap()
}

pub fn bench_convolution(c: &mut Criterion) {
    for n in [64usize, 256, 1024] {
        let x = random_sequence(n);
        let y = random_sequence(n);

        c.bench_function(format!("direct convolution {n}").as_str(), |b| {
            b.iter(|| direct_convolution(&x, &y).unwrap())
        });

        c.bench_function(format!("fast convolution {n}").as_str(), |b| {
            b.iter_batched(
                || (x.clone(), y.clone()),
                |(x, y)| fast_convolution(x, y).unwrap(),
                BatchSize::LargeInput,
            )
        });

        c.bench_function(format!("hadamard product {n}").as_str(), |b| {
            b.iter(|| hadamard_product(&x, &y).unwrap())
        });
    }
}

criterion_group!(benches, bench_convolution);
criterion_main!(benches);
