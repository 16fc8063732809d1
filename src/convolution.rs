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
use crate::radix4::Radix4;
use crate::spectrum_arithmetic::hadamard_product_in_place;
use crate::transforms::{inverse_with_plan, prepare_length};
use crate::{
    ComplexSequence, FftDirection, FftExecutor, FftSample, LengthPolicy, QuadFftError,
    TransformOptions,
};
use num_traits::{AsPrimitive, Float};

/// Circular convolution by definition, `out[i] = sum_j x[j] * y[(i - j) mod len]`.
///
/// Runs in `O(len^2)` and accepts any length, both sequences must have the same one.
///
/// # Errors
/// [QuadFftError::MismatchedLengths] if lengths differ,
/// [QuadFftError::EmptyInput] if both are empty.
pub fn direct_convolution<T: Float>(
    x: &ComplexSequence<T>,
    y: &ComplexSequence<T>,
) -> Result<ComplexSequence<T>, QuadFftError> {
    let len = x.len();
    if len != y.len() {
        return Err(QuadFftError::MismatchedLengths(len, y.len()));
    }
    if len == 0 {
        return Err(QuadFftError::EmptyInput);
    }

    let mut re = try_vec![T::zero(); len];
    let mut im = try_vec![T::zero(); len];

    let (x_re, x_im) = (x.re(), x.im());
    let (y_re, y_im) = (y.re(), y.im());

    for (i, (dst_re, dst_im)) in re.iter_mut().zip(im.iter_mut()).enumerate() {
        let mut acc_re = T::zero();
        let mut acc_im = T::zero();
        for j in 0..len {
            let k = (len + i - j) % len;
            acc_re = acc_re + x_re[j] * y_re[k] - x_im[j] * y_im[k];
            acc_im = acc_im + x_re[j] * y_im[k] + x_im[j] * y_re[k];
        }
        *dst_re = acc_re;
        *dst_im = acc_im;
    }

    ComplexSequence::new(re, im)
}

/// Circular convolution through the spectrum: `inverse(forward(x) * forward(y))`.
///
/// Inputs are not padded, callers wanting a linear convolution have to zero-extend both
/// sequences to a common power of four themselves.
///
/// # Errors
/// [QuadFftError::MismatchedLengths] if lengths differ, otherwise the errors of
/// [crate::forward_transform].
pub fn fast_convolution<T: FftSample>(
    x: ComplexSequence<T>,
    y: ComplexSequence<T>,
) -> Result<ComplexSequence<T>, QuadFftError>
where
    f64: AsPrimitive<T>,
{
    fast_convolution_with(x, y, &TransformOptions::default())
}

/// Fast convolution with explicit options.
///
/// `options.normalization` only drives the final inverse transform.
/// [crate::Normalization::Backward] yields the circular convolution itself,
/// [crate::Normalization::Unnormalized] yields it scaled by the transform length
/// and [crate::Normalization::Ortho] by its square root.
///
/// Under [LengthPolicy::TruncateToPowerOfFour] each input is cut to its own largest
/// power-of-four prefix and the product spectrum to the shorter of the two.
pub fn fast_convolution_with<T: FftSample>(
    mut x: ComplexSequence<T>,
    mut y: ComplexSequence<T>,
    options: &TransformOptions,
) -> Result<ComplexSequence<T>, QuadFftError>
where
    f64: AsPrimitive<T>,
{
    if options.length_policy == LengthPolicy::Strict && x.len() != y.len() {
        return Err(QuadFftError::MismatchedLengths(x.len(), y.len()));
    }

    let x_len = prepare_length(&mut x, options.length_policy)?;
    let y_len = prepare_length(&mut y, options.length_policy)?;

    let x_plan = Radix4::new(x_len, FftDirection::Forward)?;
    let y_plan = if y_len == x_len {
        None
    } else {
        Some(Radix4::new(y_len, FftDirection::Forward)?)
    };
    let y_plan = y_plan.as_ref().unwrap_or(&x_plan);

    x_plan.execute_sequence(&mut x)?;
    y_plan.execute_sequence(&mut y)?;

    hadamard_product_in_place(&mut x, &y);

    // the product spans the shorter spectrum
    let inverse_plan = if x_len <= y_len { &x_plan } else { y_plan };
    inverse_with_plan(inverse_plan, &mut x, options.normalization)?;
    Ok(x)
}
