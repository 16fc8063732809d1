/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use quadfft::{ComplexSequence, QuadFft, forward_transform};
use rand::Rng;
use rustfft::FftPlanner;

fn check_power_group(c: &mut Criterion, n: usize, group: String) {
    let mut input_power = vec![Complex::<f64>::default(); n];
    for z in input_power.iter_mut() {
        *z = Complex {
            re: rand::rng().random(),
            im: rand::rng().random(),
        };
    }

    c.bench_function(format!("rustfft {group}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(input_power.len());
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("quadfft {group}").as_str(), |b| {
        let plan = QuadFft::make_forward_fft_f64(input_power.len()).unwrap();
        let mut re = input_power.iter().map(|x| x.re).collect::<Vec<_>>();
        let mut im = input_power.iter().map(|x| x.im).collect::<Vec<_>>();
        b.iter(|| {
            plan.execute(&mut re, &mut im).unwrap();
        })
    });

    c.bench_function(format!("quadfft unplanned {group}").as_str(), |b| {
        let sequence = ComplexSequence::from_complex(&input_power).unwrap();
        b.iter_batched(
            || sequence.clone(),
            |sequence| forward_transform(sequence).unwrap(),
            BatchSize::LargeInput,
        )
    });
}

fn check_power_group_f32(c: &mut Criterion, n: usize, group: String) {
    let mut input_power = vec![Complex::<f32>::default(); n];
    for z in input_power.iter_mut() {
        *z = Complex {
            re: rand::rng().random(),
            im: rand::rng().random(),
        };
    }

    c.bench_function(format!("rustfft {group}s").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(input_power.len());
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("quadfft {group}s").as_str(), |b| {
        let plan = QuadFft::make_forward_fft_f32(input_power.len()).unwrap();
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.execute_interleaved(&mut working).unwrap();
        })
    });
}

pub fn bench_quadfft(c: &mut Criterion) {
    for deg in [3u32, 5, 7] {
        let n = 4usize.pow(deg);
        check_power_group(c, n, format!("{n}"));
        check_power_group_f32(c, n, format!("{n}"));
    }
}

criterion_group!(benches, bench_quadfft);
criterion_main!(benches);
