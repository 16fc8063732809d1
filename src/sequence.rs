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
use crate::QuadFftError;
use crate::err::try_vec;
use num_complex::Complex;
use num_traits::{Float, One, Zero};

/// Complex sequence stored as separate real and imaginary parts of equal length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexSequence<T = f64> {
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: Copy> ComplexSequence<T> {
    /// Pairs real and imaginary parts, fails with [QuadFftError::MismatchedParts]
    /// if their lengths differ.
    pub fn new(re: Vec<T>, im: Vec<T>) -> Result<Self, QuadFftError> {
        if re.len() != im.len() {
            return Err(QuadFftError::MismatchedParts(re.len(), im.len()));
        }
        Ok(ComplexSequence { re, im })
    }

    pub fn from_complex(values: &[Complex<T>]) -> Result<Self, QuadFftError> {
        let mut re = Vec::new();
        re.try_reserve_exact(values.len())
            .map_err(|_| QuadFftError::OutOfMemory(values.len()))?;
        let mut im = Vec::new();
        im.try_reserve_exact(values.len())
            .map_err(|_| QuadFftError::OutOfMemory(values.len()))?;
        for value in values {
            re.push(value.re);
            im.push(value.im);
        }
        Ok(ComplexSequence { re, im })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    #[inline]
    pub fn re(&self) -> &[T] {
        &self.re
    }

    #[inline]
    pub fn im(&self) -> &[T] {
        &self.im
    }

    pub fn get(&self, index: usize) -> Option<Complex<T>> {
        Some(Complex::new(*self.re.get(index)?, *self.im.get(index)?))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Complex<T>> + '_ {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(&re, &im)| Complex::new(re, im))
    }

    pub fn to_complex(&self) -> Vec<Complex<T>> {
        self.iter().collect()
    }

    /// Both parts at once, borrowed mutably; the lengths cannot be changed through them.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut [T], &mut [T]) {
        (self.re.as_mut_slice(), self.im.as_mut_slice())
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.re, self.im)
    }

    /// Keeps the first `len` samples, does nothing if the sequence is already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.re.truncate(len);
        self.im.truncate(len);
    }
}

impl<T: Copy + Zero> ComplexSequence<T> {
    pub fn zeros(len: usize) -> Result<Self, QuadFftError> {
        Ok(ComplexSequence {
            re: try_vec![T::zero(); len],
            im: try_vec![T::zero(); len],
        })
    }

    /// Real-valued sequence with a zero imaginary part.
    pub fn from_real(re: Vec<T>) -> Result<Self, QuadFftError> {
        let im = try_vec![T::zero(); re.len()];
        Ok(ComplexSequence { re, im })
    }
}

impl<T: Copy + Zero + One> ComplexSequence<T> {
    /// Unit impulse `(1, 0, 0, ..., 0)` of length `len`.
    pub fn impulse(len: usize) -> Result<Self, QuadFftError> {
        let mut sequence = Self::zeros(len)?;
        if let Some(first) = sequence.re.first_mut() {
            *first = T::one();
        }
        Ok(sequence)
    }
}

impl<T: Float> ComplexSequence<T> {
    pub fn conjugate(&mut self) {
        for im in self.im.iter_mut() {
            *im = -*im;
        }
    }

    pub fn scale(&mut self, factor: T) {
        for (re, im) in self.re.iter_mut().zip(self.im.iter_mut()) {
            *re = *re * factor;
            *im = *im * factor;
        }
    }
}

impl<T: Copy> TryFrom<(Vec<T>, Vec<T>)> for ComplexSequence<T> {
    type Error = QuadFftError;

    fn try_from(value: (Vec<T>, Vec<T>)) -> Result<Self, Self::Error> {
        ComplexSequence::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_parts_rejected() {
        let result = ComplexSequence::new(vec![1f64, 2., 3.], vec![0f64, 0.]);
        assert_eq!(result, Err(QuadFftError::MismatchedParts(3, 2)));
        let result = ComplexSequence::try_from((vec![1f32], vec![]));
        assert_eq!(result, Err(QuadFftError::MismatchedParts(1, 0)));
    }

    #[test]
    fn test_impulse() {
        let impulse = ComplexSequence::<f64>::impulse(4).unwrap();
        assert_eq!(impulse.re(), &[1., 0., 0., 0.]);
        assert_eq!(impulse.im(), &[0., 0., 0., 0.]);
        assert!(ComplexSequence::<f64>::impulse(0).unwrap().is_empty());
    }

    #[test]
    fn test_complex_interop() {
        let values = vec![Complex::new(1f64, -1.), Complex::new(2., 0.5)];
        let sequence = ComplexSequence::from_complex(&values).unwrap();
        assert_eq!(sequence.re(), &[1., 2.]);
        assert_eq!(sequence.im(), &[-1., 0.5]);
        assert_eq!(sequence.get(1), Some(Complex::new(2., 0.5)));
        assert_eq!(sequence.get(2), None);
        assert_eq!(sequence.to_complex(), values);
    }

    #[test]
    fn test_conjugate_and_scale() {
        let mut sequence = ComplexSequence::new(vec![1f64, -2.], vec![3., -4.]).unwrap();
        sequence.conjugate();
        sequence.scale(0.5);
        assert_eq!(sequence.re(), &[0.5, -1.]);
        assert_eq!(sequence.im(), &[-1.5, 2.]);
    }

    #[test]
    fn test_truncate_keeps_parts_paired() {
        let mut sequence = ComplexSequence::from_real(vec![1f64, 2., 3., 4., 5.]).unwrap();
        sequence.truncate(4);
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.im().len(), 4);
        sequence.truncate(10);
        assert_eq!(sequence.len(), 4);
        let (re, im) = sequence.into_parts();
        assert_eq!(re, vec![1., 2., 3., 4.]);
        assert_eq!(im, vec![0.; 4]);
    }
}
