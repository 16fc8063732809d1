#![no_main]

use libfuzzer_sys::fuzz_target;
use quadfft::{ComplexSequence, LengthPolicy, TransformOptions, forward_transform_with};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    truncate: bool,
    size: u16,
    re: f32,
    im: f32,
}

fuzz_target!(|data: Target| {
    if data.size > 5000 {
        return;
    }
    let size = data.size as usize;
    let policy = if data.truncate {
        LengthPolicy::TruncateToPowerOfFour
    } else {
        LengthPolicy::Strict
    };
    let options = TransformOptions::default().with_length_policy(policy);
    let sequence = ComplexSequence::new(vec![data.re; size], vec![data.im; size]).unwrap();
    match forward_transform_with(sequence, &options) {
        Ok(spectrum) => assert!(spectrum.len() <= size && spectrum.len().is_power_of_two()),
        Err(_) => assert!(size == 0 || !data.truncate),
    }
});
