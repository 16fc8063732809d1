/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use num_complex::Complex;
use quadfft::{ComplexSequence, QuadFft, direct_convolution, fast_convolution};
use rand::Rng;
use rustfft::FftPlanner;
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Stats {
    pub samples: usize,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
}

/// Run a closure repeatedly and collect timing statistics.
pub fn bench<F, R>(name: &str, mut f: F) -> Stats
where
    F: FnMut() -> R,
{
    let warmup = Duration::from_millis(25);
    let target_sample_time = Duration::from_millis(50);
    let max_samples = 7usize;

    let start = Instant::now();
    while Instant::now() - start < warmup {
        black_box(&f());
    }

    let mut samples: Vec<Duration> = Vec::new();
    let mut iters = 1usize;

    while samples.len() < max_samples {
        let t0 = Instant::now();
        for _ in 0..iters {
            black_box(&f());
        }
        let elapsed = Instant::now() - t0;
        samples.push(elapsed / (iters as u32));

        if elapsed < target_sample_time {
            let ratio = (target_sample_time.as_secs_f64() / elapsed.as_secs_f64()).max(1.0);
            iters = iters.saturating_mul((ratio * 1.5) as usize).clamp(1, 1_000_000);
        }
    }

    samples.sort();
    let stats = Stats {
        samples: samples.len(),
        median: samples[samples.len() / 2],
        min: *samples.first().unwrap_or(&Duration::ZERO),
        max: *samples.last().unwrap_or(&Duration::ZERO),
    };

    println!(
        "bench '{}': {} samples, median = {:?}, min = {:?}, max = {:?}",
        name, stats.samples, stats.median, stats.min, stats.max
    );

    stats
}

fn main() {
    let n = 4096;
    let mut data = vec![Complex::<f32>::default(); n];
    for (i, chunk) in data.iter_mut().enumerate() {
        *chunk = Complex::new(-0.19528865 + i as f32 * 0.001, 0.0019528865 - i as f32 * 0.001);
    }
    let o_data = data.clone();
    let mut cvt = data.clone();

    let forward = QuadFft::make_forward_fft_f32(n).unwrap();
    let inverse = QuadFft::make_inverse_fft_f32(n).unwrap();

    let mut planner = FftPlanner::<f32>::new();
    let planned_fft = planner.plan_fft_forward(n);

    forward.execute_interleaved(&mut data).unwrap();
    planned_fft.process(&mut cvt);

    let max_error = data
        .iter()
        .zip(cvt.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0f32, f32::max);
    println!("Forward max error against rustfft: {max_error}");

    inverse.execute_interleaved(&mut data).unwrap();
    data = data.iter().map(|&x| x * (1.0 / n as f32)).collect();

    data.iter()
        .zip(o_data.iter())
        .enumerate()
        .for_each(|(idx, (a, b))| {
            assert!(
                (a.re - b.re).abs() < 1e-3,
                "a_re {}, b_re {} at {idx}",
                a.re,
                b.re
            );
            assert!(
                (a.im - b.im).abs() < 1e-3,
                "a_im {}, b_im {} at {idx}",
                a.im,
                b.im
            );
        });

    let mut working = o_data.clone();
    bench("quadfft forward 4096", || {
        forward.execute_interleaved(&mut working).unwrap();
    });
    let mut working = o_data.clone();
    bench("rustfft forward 4096", || {
        planned_fft.process(&mut working);
    });

    let size = 256;
    let random = |len: usize| {
        let re = (0..len).map(|_| rand::rng().random::<f64>()).collect();
        let im = (0..len).map(|_| rand::rng().random::<f64>()).collect();
        ComplexSequence::new(re, im).unwrap()
    };
    let x = random(size);
    let y = random(size);
    bench("direct convolution 256", || direct_convolution(&x, &y).unwrap());
    bench("fast convolution 256", || {
        fast_convolution(x.clone(), y.clone()).unwrap()
    });
}
