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
use quadfft::{
    ComplexSequence, QuadFft, direct_convolution, fast_convolution, forward_transform,
    inverse_transform,
};
use rand::Rng;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

fn random_signal(len: usize) -> Vec<Complex<f64>> {
    (0..len)
        .map(|_| {
            Complex::new(
                rand::rng().random::<f64>() - 0.5,
                rand::rng().random::<f64>() - 0.5,
            )
        })
        .collect()
}

fn to_sequence(signal: &[Complex<f64>]) -> ComplexSequence<f64> {
    ComplexSequence::new(
        signal.iter().map(|z| z.re).collect(),
        signal.iter().map(|z| z.im).collect(),
    )
    .unwrap()
}

#[test]
fn forward_transform_matches_rustfft() {
    let mut planner = FftPlanner::<f64>::new();
    for deg in 0..7u32 {
        let size = 4usize.pow(deg);
        let signal = random_signal(size);

        let mut reference = signal.clone();
        planner.plan_fft_forward(size).process(&mut reference);

        let spectrum = forward_transform(to_sequence(&signal)).unwrap();
        for (i, (re, im)) in spectrum.re().iter().zip(spectrum.im()).enumerate() {
            assert!(
                (re - reference[i].re).abs() < 1e-9,
                "re {} != {} at {} for size {}",
                re,
                reference[i].re,
                i,
                size
            );
            assert!(
                (im - reference[i].im).abs() < 1e-9,
                "im {} != {} at {} for size {}",
                im,
                reference[i].im,
                i,
                size
            );
        }
    }
}

#[test]
fn inverse_transform_matches_normalized_rustfft() {
    let mut planner = FftPlanner::<f64>::new();
    for deg in 1..6u32 {
        let size = 4usize.pow(deg);
        let spectrum = random_signal(size);

        let mut reference = spectrum.clone();
        planner.plan_fft_inverse(size).process(&mut reference);

        let restored = inverse_transform(to_sequence(&spectrum)).unwrap();
        for (i, value) in restored.iter().enumerate() {
            let expected = reference[i] / size as f64;
            assert!(
                (value.re - expected.re).abs() < 1e-12 && (value.im - expected.im).abs() < 1e-12,
                "{} != {} at {} for size {}",
                value,
                expected,
                i,
                size
            );
        }
    }
}

#[test]
fn single_precision_executor_matches_rustfft() {
    let size = 1024;
    let signal: Vec<Complex<f32>> = (0..size)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect();

    let mut reference = signal.clone();
    FftPlanner::<f32>::new()
        .plan_fft_forward(size)
        .process(&mut reference);

    let mut working = signal;
    let executor = QuadFft::make_forward_fft_f32(size).unwrap();
    executor.execute_interleaved(&mut working).unwrap();

    for (a, b) in working.iter().zip(reference.iter()) {
        assert!((a - b).norm() < 1e-2, "{a} != {b}");
    }
}

#[test]
fn fast_convolution_matches_spectral_product_from_rustfft() {
    let size = 256;
    let x = random_signal(size);
    let y = random_signal(size);

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(size);
    let inverse = planner.plan_fft_inverse(size);
    let mut fx = x.clone();
    let mut fy = y.clone();
    forward.process(&mut fx);
    forward.process(&mut fy);
    let mut product: Vec<Complex<f64>> = fx.iter().zip(fy.iter()).map(|(a, b)| a * b).collect();
    inverse.process(&mut product);

    let fast = fast_convolution(to_sequence(&x), to_sequence(&y)).unwrap();
    let direct = direct_convolution(&to_sequence(&x), &to_sequence(&y)).unwrap();
    for ((a, b), reference) in fast.iter().zip(direct.iter()).zip(product.iter()) {
        let reference = *reference / size as f64;
        assert!((a - reference).norm() < 1e-9, "{a} != {reference}");
        assert!((b - reference).norm() < 1e-9, "{b} != {reference}");
    }
}
