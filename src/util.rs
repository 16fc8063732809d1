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
use crate::traits::FftTrigonometry;
use crate::{FftDirection, QuadFftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

pub(crate) fn is_power_of_four(n: usize) -> bool {
    n.is_power_of_two() && n.trailing_zeros() % 2 == 0
}

/// Number of radix-4 stages `deg = floor(log4(n))` a sequence of length `n` can fill,
/// `4^deg` is the largest power of four not exceeding `n`.
pub(crate) fn transform_degree(n: usize) -> Option<u32> {
    if n == 0 {
        return None;
    }
    Some((usize::BITS - 1 - n.leading_zeros()) / 2)
}

/// Largest power of four not exceeding `n`.
pub(crate) fn largest_power_of_four(n: usize) -> Option<usize> {
    transform_degree(n).map(|deg| 1usize << (2 * deg))
}

// Repeatedly divide `value` by `D`, `digits` times, and apply the remainders to a new value.
// For D = 4 this reverses the base-4 digits of `value`.
pub(crate) fn reverse_digits<const D: usize>(value: usize, digits: u32) -> usize {
    assert!(D > 1);

    let mut result: usize = 0;
    let mut value = value;
    for _ in 0..digits {
        result = (result * D) + (value % D);
        value /= D;
    }
    result
}

/// Base-4 digit-reversal permutation of `0..n`, `n` must be a power of four.
pub(crate) fn digit_reverse_indices(n: usize) -> Result<Vec<usize>, QuadFftError> {
    let digits = transform_degree(n).ok_or(QuadFftError::EmptyInput)?;

    let mut indices = Vec::new();
    indices
        .try_reserve_exact(n)
        .map_err(|_| QuadFftError::OutOfMemory(n))?;

    for i in 0..n {
        indices.push(reverse_digits::<4>(i, digits));
    }

    Ok(indices)
}

/// Applies a self-inverse permutation by swapping pairs.
pub(crate) fn permute_inplace<T: Copy>(table: &mut [T], lut: &[usize]) {
    for (i, &j) in lut.iter().enumerate() {
        if i < j {
            table.swap(i, j);
        }
    }
}

pub(crate) fn compute_twiddle<T: Float + FftTrigonometry + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = (-2. * index as f64 / fft_len as f64).as_();
    let (v_sin, v_cos) = angle.sincos_pi();

    let result = Complex {
        re: v_cos,
        im: v_sin,
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Twiddles for every decimation-in-frequency stage, outermost stage first.
///
/// A stage spanning `len` points stores `W_len^(j*k)` for `j in 0..len/4` and `k in 1..4`,
/// so the stage consumes `3 * len / 4` entries.
pub(crate) fn radix4_dif_twiddles<T: Float + FftTrigonometry + 'static>(
    size: usize,
    fft_direction: FftDirection,
) -> Result<Vec<Complex<T>>, QuadFftError>
where
    f64: AsPrimitive<T>,
{
    let capacity = size.saturating_sub(1);
    let mut twiddles = Vec::new();
    twiddles
        .try_reserve_exact(capacity)
        .map_err(|_| QuadFftError::OutOfMemory(capacity))?;

    let mut len = size;
    while len >= 4 {
        let quarter = len / 4;
        for j in 0..quarter {
            for k in 1..4 {
                twiddles.push(compute_twiddle(j * k, len, fft_direction));
            }
        }
        len = quarter;
    }

    Ok(twiddles)
}
