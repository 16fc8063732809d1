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
use crate::err::try_vec;
use crate::util::{digit_reverse_indices, is_power_of_four, permute_inplace, radix4_dif_twiddles};
use crate::{FftDirection, FftExecutor, FftSample, QuadFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::ops::Neg;

/// Multiplies by `-i` for the forward direction and by `i` for the inverse one.
#[inline(always)]
pub(crate) fn rotate_90<T: Copy + Neg<Output = T>>(
    value: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

/// Radix-4 decimation-in-frequency plan for a power-of-four length.
///
/// Each stage splits a span of `len` points into four quarters, runs the length-4 DFT over
/// `x[j], x[j + len/4], x[j + len/2], x[j + 3len/4]` and multiplies the `k`-th result by
/// `W_len^(j*k)`. After `log4(n)` stages the spectrum sits in base-4 digit-reversed order and
/// is swapped back into natural order.
pub(crate) struct Radix4<T> {
    twiddles: Vec<Complex<T>>,
    permutations: Vec<usize>,
    execution_length: usize,
    direction: FftDirection,
}

impl<T: FftSample> Radix4<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fft_direction: FftDirection) -> Result<Radix4<T>, QuadFftError> {
        if size == 0 {
            return Err(QuadFftError::EmptyInput);
        }
        if !is_power_of_four(size) {
            return Err(QuadFftError::InvalidLength(size));
        }

        let twiddles = radix4_dif_twiddles(size, fft_direction)?;
        let permutations = digit_reverse_indices(size)?;

        Ok(Radix4 {
            twiddles,
            permutations,
            execution_length: size,
            direction: fft_direction,
        })
    }

    fn dif_butterflies(&self, re: &mut [T], im: &mut [T]) {
        let mut m_twiddles = self.twiddles.as_slice();
        let mut len = self.execution_length;

        while len >= 4 {
            let quarter = len / 4;

            for (data_re, data_im) in re.chunks_exact_mut(len).zip(im.chunks_exact_mut(len)) {
                for j in 0..quarter {
                    let a = Complex::new(data_re[j], data_im[j]);
                    let b = Complex::new(data_re[j + quarter], data_im[j + quarter]);
                    let c = Complex::new(data_re[j + 2 * quarter], data_im[j + 2 * quarter]);
                    let d = Complex::new(data_re[j + 3 * quarter], data_im[j + 3 * quarter]);

                    // radix-4 butterfly
                    let t0 = a + c;
                    let t1 = a - c;
                    let t2 = b + d;
                    let t3 = rotate_90(b - d, self.direction);

                    let y0 = t0 + t2;
                    let y1 = (t1 + t3) * m_twiddles[3 * j];
                    let y2 = (t0 - t2) * m_twiddles[3 * j + 1];
                    let y3 = (t1 - t3) * m_twiddles[3 * j + 2];

                    data_re[j] = y0.re;
                    data_im[j] = y0.im;
                    data_re[j + quarter] = y1.re;
                    data_im[j + quarter] = y1.im;
                    data_re[j + 2 * quarter] = y2.re;
                    data_im[j + 2 * quarter] = y2.im;
                    data_re[j + 3 * quarter] = y3.re;
                    data_im[j + 3 * quarter] = y3.im;
                }
            }

            m_twiddles = &m_twiddles[quarter * 3..];
            len = quarter;
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Radix4<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, re: &mut [T], im: &mut [T]) -> Result<(), QuadFftError> {
        if re.len() != im.len() {
            return Err(QuadFftError::MismatchedParts(re.len(), im.len()));
        }
        if re.len() % self.execution_length != 0 {
            return Err(QuadFftError::InvalidSizeMultiplier(
                re.len(),
                self.execution_length,
            ));
        }

        for (chunk_re, chunk_im) in re
            .chunks_exact_mut(self.execution_length)
            .zip(im.chunks_exact_mut(self.execution_length))
        {
            self.dif_butterflies(chunk_re, chunk_im);
            // digit reversal last
            permute_inplace(chunk_re, &self.permutations);
            permute_inplace(chunk_im, &self.permutations);
        }
        Ok(())
    }

    fn execute_interleaved(&self, in_place: &mut [Complex<T>]) -> Result<(), QuadFftError> {
        let mut re = try_vec![T::zero(); in_place.len()];
        let mut im = try_vec![T::zero(); in_place.len()];
        for ((dst_re, dst_im), src) in re.iter_mut().zip(im.iter_mut()).zip(in_place.iter()) {
            *dst_re = src.re;
            *dst_im = src.im;
        }

        self.execute(&mut re, &mut im)?;

        for ((&src_re, &src_im), dst) in re.iter().zip(im.iter()).zip(in_place.iter_mut()) {
            *dst = Complex::new(src_re, src_im);
        }
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}
