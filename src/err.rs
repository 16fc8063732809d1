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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuadFftError {
    OutOfMemory(usize),
    /// Length is not a power of four where the transform requires one.
    InvalidLength(usize),
    MismatchedLengths(usize, usize),
    /// Real and imaginary parts of a sequence differ in length.
    MismatchedParts(usize, usize),
    InvalidSizeMultiplier(usize, usize),
    EmptyInput,
}

impl Error for QuadFftError {}

impl std::fmt::Display for QuadFftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadFftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector"))
            }
            QuadFftError::InvalidLength(length) => f.write_fmt(format_args!(
                "Length {length} is not a power of four, radix-4 transform cannot be executed"
            )),
            QuadFftError::MismatchedLengths(s0, s1) => f.write_fmt(format_args!(
                "Sequences are expected to have the same length, but they were {s0} and {s1}"
            )),
            QuadFftError::MismatchedParts(re, im) => f.write_fmt(format_args!(
                "Real part has length {re}, but imaginary part has length {im}"
            )),
            QuadFftError::InvalidSizeMultiplier(s0, s1) => f.write_fmt(format_args!(
                "Size {s0} is assumed to be multiplier of {s1} to execute many FFT, but it wasn't"
            )),
            QuadFftError::EmptyInput => f.write_str("Cannot execute on zero-sized sequences"),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::QuadFftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_lengths() {
        let message = QuadFftError::MismatchedParts(4, 3).to_string();
        assert!(message.contains('4') && message.contains('3'), "{message}");
        let message = QuadFftError::InvalidLength(12).to_string();
        assert!(message.contains("12"), "{message}");
    }

    #[test]
    fn test_try_vec_allocates() {
        fn make(n: usize) -> Result<Vec<f64>, QuadFftError> {
            Ok(try_vec![0f64; n])
        }
        assert_eq!(make(16).unwrap().len(), 16);
        assert_eq!(make(usize::MAX / 2), Err(QuadFftError::OutOfMemory(usize::MAX / 2)));
    }
}
