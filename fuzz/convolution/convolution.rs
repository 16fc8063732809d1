#![no_main]

use libfuzzer_sys::fuzz_target;
use quadfft::{ComplexSequence, direct_convolution, fast_convolution, hadamard_product};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    degree: u8,
    x: Vec<(f64, f64)>,
    y: Vec<(f64, f64)>,
}

fn make_sequence(values: &[(f64, f64)], size: usize) -> ComplexSequence<f64> {
    let mut re = vec![0f64; size];
    let mut im = vec![0f64; size];
    for (i, &(r, m)) in values.iter().take(size).enumerate() {
        re[i] = r;
        im[i] = m;
    }
    ComplexSequence::new(re, im).unwrap()
}

fuzz_target!(|data: Target| {
    if data.degree > 4 {
        return;
    }
    let size = 4usize.pow(data.degree as u32);
    let x = make_sequence(&data.x, size);
    let y = make_sequence(&data.y, size);

    let direct = direct_convolution(&x, &y).unwrap();
    let fast = fast_convolution(x.clone(), y.clone()).unwrap();
    assert_eq!(direct.len(), fast.len());

    let bounded = |s: &ComplexSequence<f64>| s.iter().all(|z| z.norm() < 1e100);
    if bounded(&x) && bounded(&y) {
        let scale: f64 = x.iter().map(|z| z.norm()).sum::<f64>()
            * y.iter().map(|z| z.norm()).sum::<f64>();
        for (a, b) in direct.iter().zip(fast.iter()) {
            assert!(
                (a - b).norm() <= 1e-9 * (1. + scale),
                "direct {a} != fast {b}"
            );
        }
    }

    let product = hadamard_product(&x, &y).unwrap();
    assert_eq!(product.len(), size);
});
