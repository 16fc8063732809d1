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
use crate::{ComplexSequence, QuadFftError};
use num_traits::Float;

#[inline(always)]
fn c_mul<T: Float>(a_re: T, a_im: T, b_re: T, b_im: T) -> (T, T) {
    (a_re * b_re - a_im * b_im, a_re * b_im + a_im * b_re)
}

/// Elementwise complex product `x[i] * y[i]` over the first `min(x.len(), y.len())` positions.
///
/// Lengths are allowed to differ, the longer sequence is cut to the shorter one.
pub fn hadamard_product<T: Float>(
    x: &ComplexSequence<T>,
    y: &ComplexSequence<T>,
) -> Result<ComplexSequence<T>, QuadFftError> {
    let len = x.len().min(y.len());
    let mut re = try_vec![T::zero(); len];
    let mut im = try_vec![T::zero(); len];

    for ((((dst_re, dst_im), (&a_re, &a_im)), &b_re), &b_im) in re
        .iter_mut()
        .zip(im.iter_mut())
        .zip(x.re().iter().zip(x.im().iter()))
        .zip(y.re().iter())
        .zip(y.im().iter())
    {
        (*dst_re, *dst_im) = c_mul(a_re, a_im, b_re, b_im);
    }

    ComplexSequence::new(re, im)
}

/// Multiplies `dst` by `other` elementwise, `dst` is truncated to the shorter length.
pub fn hadamard_product_in_place<T: Float>(
    dst: &mut ComplexSequence<T>,
    other: &ComplexSequence<T>,
) {
    dst.truncate(other.len());
    let (dst_re, dst_im) = dst.parts_mut();
    for (((a_re, a_im), &b_re), &b_im) in dst_re
        .iter_mut()
        .zip(dst_im.iter_mut())
        .zip(other.re().iter())
        .zip(other.im().iter())
    {
        (*a_re, *a_im) = c_mul(*a_re, *a_im, b_re, b_im);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_sequence(len: usize) -> ComplexSequence<f64> {
        let re = (0..len).map(|_| rand::rng().random()).collect();
        let im = (0..len).map(|_| rand::rng().random()).collect();
        ComplexSequence::new(re, im).unwrap()
    }

    #[test]
    fn test_hadamard_values() {
        let x = ComplexSequence::new(vec![1f64, 0., 2.], vec![1., 1., 0.]).unwrap();
        let y = ComplexSequence::new(vec![1f64, 0., 3.], vec![-1., 1., 0.5]).unwrap();
        let product = hadamard_product(&x, &y).unwrap();
        // (1+i)(1-i) = 2, i*i = -1, 2*(3+0.5i) = 6+i
        assert_eq!(product.re(), &[2., -1., 6.]);
        assert_eq!(product.im(), &[0., 0., 1.]);
    }

    #[test]
    fn test_hadamard_commutes() {
        for len in [1usize, 4, 7, 64] {
            let x = random_sequence(len);
            let y = random_sequence(len);
            let xy = hadamard_product(&x, &y).unwrap();
            let yx = hadamard_product(&y, &x).unwrap();
            for (a, b) in xy.iter().zip(yx.iter()) {
                assert!((a - b).norm() < 1e-15, "{a} != {b} for size {len}");
            }
        }
    }

    #[test]
    fn test_hadamard_truncates_to_shorter() {
        let x = random_sequence(16);
        let y = random_sequence(5);
        let product = hadamard_product(&x, &y).unwrap();
        assert_eq!(product.len(), 5);
        let flipped = hadamard_product(&y, &x).unwrap();
        assert_eq!(flipped.len(), 5);
        for i in 0..5 {
            let expected = x.get(i).unwrap() * y.get(i).unwrap();
            let actual = product.get(i).unwrap();
            assert!((expected - actual).norm() < 1e-15);
        }

        let empty = ComplexSequence::<f64>::default();
        assert!(hadamard_product(&x, &empty).unwrap().is_empty());
    }

    #[test]
    fn test_hadamard_in_place_matches_allocating() {
        let x = random_sequence(16);
        let y = random_sequence(12);
        let expected = hadamard_product(&x, &y).unwrap();
        let mut dst = x.clone();
        hadamard_product_in_place(&mut dst, &y);
        assert_eq!(dst, expected);
    }
}
