//! Reduction of exact polynomials into `Z_m[x]/(D)` and the signed center-lift.

use num::{BigInt, BigRational, Integer, One, Signed, integer::ExtendedGcd};

use super::{IntPolynomial, MathError, RationalPolynomial};

// SCALAR REDUCTION
// ================================================================================================

/// Returns the inverse of `value` modulo `modulus` in `[0, modulus)`, or `None` when
/// `gcd(value, modulus) != 1` or the modulus is not positive.
pub fn mod_inverse(value: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    if !modulus.is_positive() {
        return None;
    }
    let reduced = value.mod_floor(modulus);
    let ExtendedGcd { gcd, x, .. } = reduced.extended_gcd(modulus);
    if !gcd.is_one() {
        return None;
    }
    Some(x.mod_floor(modulus))
}

/// Maps the rational `numerator / denominator` into `Z_m` as `numerator * denominator^-1 mod m`.
///
/// # Errors
/// - [`MathError::InvalidModulus`] if `modulus` is not positive.
/// - [`MathError::NonInvertibleCoefficient`] if the denominator is not coprime with `modulus`.
pub fn rational_mod(value: &BigRational, modulus: &BigInt) -> Result<BigInt, MathError> {
    check_modulus(modulus)?;
    let denominator_inverse = mod_inverse(value.denom(), modulus).ok_or_else(|| {
        MathError::NonInvertibleCoefficient {
            denominator: value.denom().clone(),
            modulus: modulus.clone(),
        }
    })?;
    Ok((value.numer() * denominator_inverse).mod_floor(modulus))
}

// POLYNOMIAL REDUCTION
// ================================================================================================

/// Reduces every coefficient of a rational polynomial into `[0, modulus)`.
///
/// # Errors
/// Fails if any coefficient cannot be represented in `Z_m`, see [`rational_mod`].
pub fn mod_polynomial(
    poly: &RationalPolynomial,
    modulus: &BigInt,
) -> Result<IntPolynomial, MathError> {
    let coefficients = poly
        .coefficients()
        .iter()
        .map(|c| rational_mod(c, modulus))
        .collect::<Result<_, _>>()?;
    Ok(IntPolynomial::new(coefficients))
}

/// Reduces `poly` modulo the ring polynomial `ring_modulus` and then its coefficients modulo
/// `modulus`.
///
/// The ring reduction keeps the remainder of an exact division, so for a monic `ring_modulus`
/// (such as `x^N - 1`) the remainder of an integer polynomial is integral.
///
/// # Errors
/// - [`MathError::DivisionByZeroPolynomial`] if `ring_modulus` is zero.
/// - Any error of [`mod_polynomial`].
pub fn reduce_modulo(
    poly: &IntPolynomial,
    ring_modulus: &IntPolynomial,
    modulus: &BigInt,
) -> Result<IntPolynomial, MathError> {
    let numerator = RationalPolynomial::from(poly);
    let denominator = RationalPolynomial::from(ring_modulus);
    let (_, remainder) = numerator.div_rem(&denominator)?;
    mod_polynomial(&remainder, modulus)
}

/// Reduces the coefficients of `poly` modulo `modulus` and re-centers them into the symmetric
/// range `(-m/2, m/2]`.
///
/// Residues strictly above `floor(m/2)` have `m` subtracted. Applying the lift twice is the same
/// as applying it once.
///
/// # Errors
/// Returns [`MathError::InvalidModulus`] if `modulus` is not positive.
pub fn center_lift(poly: &IntPolynomial, modulus: &BigInt) -> Result<IntPolynomial, MathError> {
    check_modulus(modulus)?;
    let half = modulus / 2;
    Ok(poly.map(|c| {
        let residue = c.mod_floor(modulus);
        if residue > half { residue - modulus } else { residue }
    }))
}

// HELPERS
// ================================================================================================

fn check_modulus(modulus: &BigInt) -> Result<(), MathError> {
    if modulus.is_positive() {
        Ok(())
    } else {
        Err(MathError::InvalidModulus(modulus.clone()))
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use num::Zero;
    use rstest::rstest;

    use super::*;

    fn int(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn ratio(numerator: i64, denominator: i64) -> BigRational {
        BigRational::new(int(numerator), int(denominator))
    }

    #[rstest]
    #[case(3, 7, Some(5))]
    #[case(-3, 7, Some(2))]
    #[case(1, 29, Some(1))]
    #[case(71, 29, Some(9))]
    #[case(6, 9, None)]
    #[case(0, 5, None)]
    fn mod_inverse_cases(#[case] value: i64, #[case] modulus: i64, #[case] expected: Option<i64>) {
        assert_eq!(mod_inverse(&int(value), &int(modulus)), expected.map(int));
    }

    #[test]
    fn rational_mod_uses_denominator_inverse() {
        // 1/2 mod 7 = 4, -1/2 mod 7 = 3
        assert_eq!(rational_mod(&ratio(1, 2), &int(7)).unwrap(), int(4));
        assert_eq!(rational_mod(&ratio(-1, 2), &int(7)).unwrap(), int(3));
        // integers just reduce
        assert_eq!(rational_mod(&ratio(-10, 1), &int(7)).unwrap(), int(4));
    }

    #[test]
    fn rational_mod_rejects_shared_factors() {
        let err = rational_mod(&ratio(1, 6), &int(9)).unwrap_err();
        assert_matches!(
            err,
            MathError::NonInvertibleCoefficient { denominator, modulus }
                if denominator == int(6) && modulus == int(9)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn non_positive_modulus_is_rejected(#[case] modulus: i64) {
        assert_matches!(
            rational_mod(&ratio(1, 1), &int(modulus)),
            Err(MathError::InvalidModulus(_))
        );
        assert_matches!(
            center_lift(&IntPolynomial::from([1, 2]), &int(modulus)),
            Err(MathError::InvalidModulus(_))
        );
    }

    #[test]
    fn mod_polynomial_trims_after_reduction() {
        let poly = RationalPolynomial::new(vec![ratio(1, 2), ratio(3, 1), ratio(14, 1)]);
        assert_eq!(mod_polynomial(&poly, &int(7)).unwrap(), IntPolynomial::from([4, 3]));
    }

    #[test]
    fn reduce_modulo_folds_cyclically() {
        // x^7 = 1 in Z[x]/(x^7 - 1), so x^8 + 2x^7 + 5 reduces to 7 + x
        let ring = IntPolynomial::from([-1, 0, 0, 0, 0, 0, 0, 1]);
        let poly = IntPolynomial::from([5, 0, 0, 0, 0, 0, 0, 2, 1]);
        assert_eq!(reduce_modulo(&poly, &ring, &int(11)).unwrap(), IntPolynomial::from([7, 1]));
        assert_eq!(reduce_modulo(&poly, &ring, &int(7)).unwrap(), IntPolynomial::from([0, 1]));
        assert_matches!(
            reduce_modulo(&poly, &IntPolynomial::zero(), &int(7)),
            Err(MathError::DivisionByZeroPolynomial)
        );
    }

    #[rstest]
    #[case(7, &[0, 1, 3, 4, 6, -1, 10], &[0, 1, 3, -3, -1, -1, 3])]
    #[case(8, &[4, 5, 12, -4], &[4, -3, 4, 4])]
    #[case(491531, &[394609, 27692], &[-96922, 27692])]
    fn center_lift_maps_into_symmetric_range(
        #[case] modulus: i64,
        #[case] input: &[i64],
        #[case] expected: &[i64],
    ) {
        let lifted = center_lift(&IntPolynomial::from(input), &int(modulus)).unwrap();
        assert_eq!(lifted, IntPolynomial::from(expected));
    }

    #[test]
    fn center_lift_is_idempotent() {
        let modulus = int(10);
        let once = center_lift(&IntPolynomial::from([9, 5, 6, -7, 23]), &modulus).unwrap();
        let twice = center_lift(&once, &modulus).unwrap();
        assert_eq!(once, IntPolynomial::from([-1, 5, -4, 3, 3]));
        assert_eq!(once, twice);
    }
}
