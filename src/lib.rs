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
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Radix-4 decimation-in-frequency FFT and FFT-accelerated circular convolution over
//! complex sequences stored as separate real and imaginary parts.
//!
//! Transform lengths must be powers of four. Inputs are never padded; see
//! [LengthPolicy] for how other lengths are treated.
//!
//! ```
//! use quadfft::{ComplexSequence, direct_convolution, fast_convolution};
//!
//! let x = ComplexSequence::from_real(vec![1f64, 2., 3., 4.]).unwrap();
//! let y = ComplexSequence::from_real(vec![0f64, 1., 0., 0.]).unwrap();
//! let fast = fast_convolution(x.clone(), y.clone()).unwrap();
//! let direct = direct_convolution(&x, &y).unwrap();
//! for (a, b) in fast.iter().zip(direct.iter()) {
//!     assert!((a - b).norm() < 1e-12);
//! }
//! ```
mod convolution;
mod err;
mod options;
mod radix4;
mod sequence;
mod spectrum_arithmetic;
mod traits;
mod transforms;
mod util;

pub use convolution::{direct_convolution, fast_convolution, fast_convolution_with};
pub use err::QuadFftError;
pub use options::{LengthPolicy, Normalization, TransformOptions};
pub use sequence::ComplexSequence;
pub use spectrum_arithmetic::{hadamard_product, hadamard_product_in_place};
pub use traits::{FftSample, FftTrigonometry};
pub use transforms::{
    forward_transform, forward_transform_in_place, forward_transform_in_place_with,
    forward_transform_with, inverse_transform, inverse_transform_with,
};

use crate::radix4::Radix4;
use num_complex::Complex;
use num_traits::AsPrimitive;

pub trait FftExecutor<T> {
    /// Transforms every [FftExecutor::length]-sized chunk of the split buffers in place,
    /// leaving the spectrum in natural order.
    fn execute(&self, re: &mut [T], im: &mut [T]) -> Result<(), QuadFftError>;
    fn execute_interleaved(&self, in_place: &mut [Complex<T>]) -> Result<(), QuadFftError>;
    fn execute_sequence(&self, sequence: &mut ComplexSequence<T>) -> Result<(), QuadFftError>
    where
        T: Copy,
    {
        let (re, im) = sequence.parts_mut();
        self.execute(re, im)
    }
    fn direction(&self) -> FftDirection;
    fn length(&self) -> usize;
}

pub struct QuadFft {}

impl QuadFft {
    fn strategy<T: FftSample>(
        n: usize,
        fft_direction: FftDirection,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, QuadFftError>
    where
        f64: AsPrimitive<T>,
    {
        Radix4::new(n, fft_direction)
            .map(|x| Box::new(x) as Box<dyn FftExecutor<T> + Send + Sync>)
    }

    pub fn make_forward_fft_f32(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f32> + Send + Sync>, QuadFftError> {
        QuadFft::strategy(n, FftDirection::Forward)
    }

    pub fn make_forward_fft_f64(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f64> + Send + Sync>, QuadFftError> {
        QuadFft::strategy(n, FftDirection::Forward)
    }

    /// Unnormalized inverse, executing it after a forward plan scales the input by `n`.
    pub fn make_inverse_fft_f32(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f32> + Send + Sync>, QuadFftError> {
        QuadFft::strategy(n, FftDirection::Inverse)
    }

    pub fn make_inverse_fft_f64(
        n: usize,
    ) -> Result<Box<dyn FftExecutor<f64> + Send + Sync>, QuadFftError> {
        QuadFft::strategy(n, FftDirection::Inverse)
    }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}
