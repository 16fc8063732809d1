#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use quadfft::{ComplexSequence, QuadFft, forward_transform, inverse_transform};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    forward: bool,
    degree: u8,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.degree > 6 {
        return;
    }
    let size = 4usize.pow(data.degree as u32);
    let executor = if data.forward {
        QuadFft::make_forward_fft_f64(size).unwrap()
    } else {
        QuadFft::make_inverse_fft_f64(size).unwrap()
    };
    let mut chunk = vec![Complex::new(data.re, data.im); size];
    executor.execute_interleaved(&mut chunk).unwrap();

    let sequence = ComplexSequence::from_complex(&chunk).unwrap();
    let spectrum = forward_transform(sequence).unwrap();
    let restored = inverse_transform(spectrum).unwrap();
    assert_eq!(restored.len(), size);
});
