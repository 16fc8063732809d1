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
use crate::radix4::Radix4;
use crate::util::{is_power_of_four, largest_power_of_four};
use crate::{
    ComplexSequence, FftDirection, FftExecutor, FftSample, LengthPolicy, Normalization,
    QuadFftError, TransformOptions,
};
use num_traits::AsPrimitive;

/// Validates or truncates the sequence according to `policy` and returns the transform length.
pub(crate) fn prepare_length<T: Copy>(
    sequence: &mut ComplexSequence<T>,
    policy: LengthPolicy,
) -> Result<usize, QuadFftError> {
    let len = sequence.len();
    if len == 0 {
        return Err(QuadFftError::EmptyInput);
    }
    match policy {
        LengthPolicy::Strict => {
            if !is_power_of_four(len) {
                return Err(QuadFftError::InvalidLength(len));
            }
        }
        LengthPolicy::TruncateToPowerOfFour => {
            let ndeg = largest_power_of_four(len).ok_or(QuadFftError::EmptyInput)?;
            sequence.truncate(ndeg);
        }
    }
    Ok(sequence.len())
}

pub(crate) fn normalization_factor<T: FftSample>(
    normalization: Normalization,
    direction: FftDirection,
    len: usize,
) -> Option<T>
where
    f64: AsPrimitive<T>,
{
    match (normalization, direction) {
        (Normalization::Backward, FftDirection::Inverse) => Some((1. / len as f64).as_()),
        (Normalization::Ortho, _) => Some((1. / (len as f64).sqrt()).as_()),
        (Normalization::Backward, FftDirection::Forward) | (Normalization::Unnormalized, _) => {
            None
        }
    }
}

/// Forward DFT `X[k] = sum x[n] * exp(-2*pi*i*n*k/N)` with the default [TransformOptions].
///
/// The sequence is consumed, its buffers are overwritten by the butterflies and
/// handed back holding the spectrum in natural order.
///
/// # Errors
/// [QuadFftError::EmptyInput] for an empty sequence,
/// [QuadFftError::InvalidLength] if the length is not a power of four.
///
/// # Examples
/// ```
/// use quadfft::{ComplexSequence, forward_transform};
///
/// let x = ComplexSequence::new(vec![1f64, 1., 1., 1.], vec![0.; 4]).unwrap();
/// let spectrum = forward_transform(x).unwrap();
/// assert_eq!(spectrum.re(), &[4., 0., 0., 0.]);
/// assert_eq!(spectrum.im(), &[0., 0., 0., 0.]);
/// ```
pub fn forward_transform<T: FftSample>(
    sequence: ComplexSequence<T>,
) -> Result<ComplexSequence<T>, QuadFftError>
where
    f64: AsPrimitive<T>,
{
    forward_transform_with(sequence, &TransformOptions::default())
}

pub fn forward_transform_with<T: FftSample>(
    mut sequence: ComplexSequence<T>,
    options: &TransformOptions,
) -> Result<ComplexSequence<T>, QuadFftError>
where
    f64: AsPrimitive<T>,
{
    forward_transform_in_place_with(&mut sequence, options)?;
    Ok(sequence)
}

/// Same as [forward_transform], writing the spectrum back into `sequence`.
pub fn forward_transform_in_place<T: FftSample>(
    sequence: &mut ComplexSequence<T>,
) -> Result<(), QuadFftError>
where
    f64: AsPrimitive<T>,
{
    forward_transform_in_place_with(sequence, &TransformOptions::default())
}

/// Under [LengthPolicy::TruncateToPowerOfFour] `sequence` is shortened to the transformed prefix.
pub fn forward_transform_in_place_with<T: FftSample>(
    sequence: &mut ComplexSequence<T>,
    options: &TransformOptions,
) -> Result<(), QuadFftError>
where
    f64: AsPrimitive<T>,
{
    let len = prepare_length(sequence, options.length_policy)?;
    let executor = Radix4::new(len, FftDirection::Forward)?;
    executor.execute_sequence(sequence)?;

    if let Some(factor) = normalization_factor(options.normalization, FftDirection::Forward, len) {
        sequence.scale(factor);
    }
    Ok(())
}

/// Inverse DFT computed as `conj(forward(conj(x)))`, scaled by `1/N` with the default options.
///
/// # Errors
/// Same as [forward_transform].
pub fn inverse_transform<T: FftSample>(
    sequence: ComplexSequence<T>,
) -> Result<ComplexSequence<T>, QuadFftError>
where
    f64: AsPrimitive<T>,
{
    inverse_transform_with(sequence, &TransformOptions::default())
}

/// Inverse DFT with explicit options.
///
/// [Normalization::Unnormalized] returns the raw `N`-scaled result.
pub fn inverse_transform_with<T: FftSample>(
    mut sequence: ComplexSequence<T>,
    options: &TransformOptions,
) -> Result<ComplexSequence<T>, QuadFftError>
where
    f64: AsPrimitive<T>,
{
    let len = prepare_length(&mut sequence, options.length_policy)?;
    let executor = Radix4::new(len, FftDirection::Forward)?;
    inverse_with_plan(&executor, &mut sequence, options.normalization)?;
    Ok(sequence)
}

/// Inverse through an existing forward plan, `sequence` must match the plan length.
pub(crate) fn inverse_with_plan<T: FftSample>(
    forward: &Radix4<T>,
    sequence: &mut ComplexSequence<T>,
    normalization: Normalization,
) -> Result<(), QuadFftError>
where
    f64: AsPrimitive<T>,
{
    sequence.conjugate();
    forward.execute_sequence(sequence)?;
    sequence.conjugate();

    if let Some(factor) =
        normalization_factor(normalization, FftDirection::Inverse, forward.length())
    {
        sequence.scale(factor);
    }
    Ok(())
}
