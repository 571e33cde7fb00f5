#![no_main]

use libfuzzer_sys::fuzz_target;
use ntru_crypto::{
    IntPolynomial, MathError, RationalPolynomial,
    math::{center_lift, extended_euclid},
};
use num::{BigInt, One, Zero};

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = (split as usize).min(rest.len());
    let (left, right) = rest.split_at(split);

    let a = IntPolynomial::from(left.iter().map(|&b| b as i8 as i64).collect::<Vec<_>>());
    let b = IntPolynomial::from(right.iter().map(|&b| b as i8 as i64).collect::<Vec<_>>());
    let (ra, rb) = (RationalPolynomial::from(&a), RationalPolynomial::from(&b));

    // exact division must reconstruct the dividend
    match ra.div_rem(&rb) {
        Ok((quotient, remainder)) => {
            assert_eq!(&(&quotient * &rb) + &remainder, ra);
            assert!(remainder.is_zero() || remainder.degree() < rb.degree());
        },
        Err(err) => {
            assert_eq!(err, MathError::DivisionByZeroPolynomial);
            assert!(rb.is_zero());
        },
    }

    // the Bezout coefficients must reproduce the monic gcd
    if let Ok(id) = extended_euclid(&ra, &rb) {
        assert_eq!(&(&id.s * &ra) + &(&id.t * &rb), id.gcd);
        assert!(id.gcd.leading_coefficient().is_one());
    }

    let modulus = BigInt::from(split.max(1));
    if let Ok(lifted) = center_lift(&a, &modulus) {
        assert_eq!(center_lift(&lifted, &modulus), Ok(lifted));
    }
});
