//! Generic dense polynomial type and the exact arithmetic used by the NTRU ring.

use alloc::vec::Vec;
use core::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num::{BigInt, BigRational, One, Zero};

use super::{FieldElement, MathError, RingElement};

/// Represents a polynomial with coefficients of type F.
///
/// Coefficients are ordered from lowest to highest degree, so index `i` holds the coefficient
/// of `x^i`. The representation is always trimmed: the highest coefficient is non-zero, except
/// for the zero polynomial which is stored as the single coefficient `[0]`. Because of this,
/// structural equality is polynomial equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial<F> {
    coefficients: Vec<F>,
}

impl<F: Zero + PartialEq> Polynomial<F> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new polynomial from the provided coefficients, stripping zero coefficients of
    /// the highest degrees.
    pub fn new(coefficients: Vec<F>) -> Self {
        let mut poly = Self { coefficients };
        poly.trim();
        poly
    }

    /// Creates a constant polynomial with a single coefficient.
    pub fn constant(c: F) -> Self {
        Self::new(vec![c])
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient of the highest-degree term.
    pub fn leading_coefficient(&self) -> &F {
        &self.coefficients[self.degree()]
    }

    /// Returns the coefficients ordered from lowest to highest degree.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Consumes the polynomial and returns its coefficients.
    pub fn into_coefficients(self) -> Vec<F> {
        self.coefficients
    }

    /// Applies a function to each coefficient and returns a new (trimmed) polynomial.
    pub fn map<G: Zero + PartialEq, C: FnMut(&F) -> G>(&self, closure: C) -> Polynomial<G> {
        Polynomial::new(self.coefficients.iter().map(closure).collect())
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    /// Strips trailing zero coefficients, never leaving the coefficient vector empty.
    fn trim(&mut self) {
        while self.coefficients.len() > 1 && self.coefficients.last().is_some_and(|c| c.is_zero())
        {
            self.coefficients.pop();
        }
        if self.coefficients.is_empty() {
            self.coefficients.push(F::zero());
        }
    }
}

impl<F: Zero + PartialEq + Clone> Polynomial<F> {
    /// Creates the polynomial `c * x^degree`.
    pub fn monomial(c: F, degree: usize) -> Self {
        let mut coefficients = vec![F::zero(); degree];
        coefficients.push(c);
        Self::new(coefficients)
    }
}

impl<F: Zero + PartialEq> Default for Polynomial<F> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// DIVISION
// ================================================================================================

impl<F: FieldElement> Polynomial<F> {
    /// Divides `self` by `denominator` using long division with exact field arithmetic.
    ///
    /// Returns `(quotient, remainder)` such that `quotient * denominator + remainder == self`
    /// and the remainder is either zero or of degree strictly smaller than the denominator.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZeroPolynomial`] if `denominator` is the zero polynomial.
    pub fn div_rem(&self, denominator: &Self) -> Result<(Self, Self), MathError> {
        if denominator.is_zero() {
            return Err(MathError::DivisionByZeroPolynomial);
        }

        let denominator_degree = denominator.degree();
        if self.is_zero() || self.degree() < denominator_degree {
            return Ok((Self::zero(), self.clone()));
        }

        let lc = denominator.leading_coefficient();
        let mut remainder = self.coefficients.clone();
        let mut quotient = vec![F::zero(); self.degree() - denominator_degree + 1];

        for shift in (0..quotient.len()).rev() {
            let c = remainder[shift + denominator_degree].clone() / lc.clone();
            if c.is_zero() {
                continue;
            }
            for (j, d) in denominator.coefficients.iter().enumerate() {
                remainder[shift + j] = remainder[shift + j].clone() - c.clone() * d.clone();
            }
            quotient[shift] = c;
        }

        // everything from the denominator's degree upwards has been cancelled exactly
        remainder.truncate(denominator_degree);

        Ok((Self::new(quotient), Self::new(remainder)))
    }
}

/// Divides every coefficient by a scalar. The divisor must be non-zero.
impl<F: FieldElement> Div<F> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn div(self, divisor: F) -> Self::Output {
        self.map(|c| c.clone() / divisor.clone())
    }
}

impl<F: FieldElement> Div<F> for Polynomial<F> {
    type Output = Polynomial<F>;

    fn div(self, divisor: F) -> Self::Output {
        &self / divisor
    }
}

// RING OPERATIONS
// ================================================================================================

impl<F: RingElement> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Self::Output {
        let (longer, shorter) = if self.coefficients.len() >= rhs.coefficients.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coefficients = longer.coefficients.clone();
        for (i, c) in shorter.coefficients.iter().enumerate() {
            coefficients[i] = coefficients[i].clone() + c.clone();
        }
        Polynomial::new(coefficients)
    }
}

impl<F: RingElement> Add for Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<F: RingElement> Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl<F: RingElement> Sub for Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<F: RingElement> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Self::Output {
        self.map(|c| -c.clone())
    }
}

impl<F: RingElement> Neg for Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Schoolbook convolution of the two coefficient sequences.
impl<F: RingElement> Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: Self) -> Self::Output {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut coefficients =
            vec![F::zero(); self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] = coefficients[i + j].clone() + a.clone() * b.clone();
            }
        }
        Polynomial::new(coefficients)
    }
}

impl<F: RingElement> Mul for Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: Self) -> Self::Output {
        &self * &other
    }
}

impl<F: RingElement> Mul<F> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: F) -> Self::Output {
        self.map(|c| c.clone() * other.clone())
    }
}

impl<F: RingElement> Mul<F> for Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: F) -> Self::Output {
        &self * other
    }
}

impl<F: RingElement> Zero for Polynomial<F> {
    fn zero() -> Self {
        Self { coefficients: vec![F::zero()] }
    }

    fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }
}

impl<F: RingElement> One for Polynomial<F> {
    fn one() -> Self {
        Self { coefficients: vec![F::one()] }
    }
}

// CONVERSIONS
// ================================================================================================

impl From<Vec<i64>> for Polynomial<BigInt> {
    fn from(item: Vec<i64>) -> Self {
        Self::from(item.as_slice())
    }
}

impl From<&[i64]> for Polynomial<BigInt> {
    fn from(item: &[i64]) -> Self {
        Polynomial::new(item.iter().map(|&c| BigInt::from(c)).collect())
    }
}

impl<const L: usize> From<[i64; L]> for Polynomial<BigInt> {
    fn from(item: [i64; L]) -> Self {
        Self::from(item.as_slice())
    }
}

/// Lifts an integer polynomial into the rationals.
impl From<&Polynomial<BigInt>> for Polynomial<BigRational> {
    fn from(item: &Polynomial<BigInt>) -> Self {
        item.map(|c| BigRational::from_integer(c.clone()))
    }
}

// FORMATTING
// ================================================================================================

/// Renders the polynomial as `c0 + c1x + c2x^2 + ...`, skipping zero terms.
impl<F: fmt::Display + Zero> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() && self.coefficients.len() > 1 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match degree {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                _ => write!(f, "{c}x^{degree}")?,
            }
        }
        Ok(())
    }
}

// SERIALIZATION
// ================================================================================================

#[cfg(feature = "serde")]
impl<F: serde::Serialize> serde::Serialize for Polynomial<F> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.coefficients.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, F> serde::Deserialize<'de> for Polynomial<F>
where
    F: serde::Deserialize<'de> + Zero + PartialEq,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<F>::deserialize(deserializer).map(Self::new)
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use assert_matches::assert_matches;
    use num::{BigRational, Zero};
    use rstest::rstest;

    use super::*;
    use crate::math::{IntPolynomial, RationalPolynomial};

    fn rational(coefficients: &[i64]) -> RationalPolynomial {
        RationalPolynomial::from(&IntPolynomial::from(coefficients))
    }

    #[rstest]
    #[case(vec![1, 2, 0, 0], vec![1, 2])]
    #[case(vec![0, 0, 0], vec![0])]
    #[case(vec![], vec![0])]
    #[case(vec![0, 0, 3], vec![0, 0, 3])]
    fn new_trims_highest_degree_zeros(#[case] input: Vec<i64>, #[case] expected: Vec<i64>) {
        let poly = IntPolynomial::from(input);
        let expected: Vec<BigInt> = expected.into_iter().map(BigInt::from).collect();
        assert_eq!(poly.coefficients(), expected.as_slice());
    }

    #[test]
    fn zero_polynomial_has_degree_zero() {
        let zero = IntPolynomial::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.degree(), 0);
        assert_eq!(zero, IntPolynomial::default());
        assert!(!IntPolynomial::from([5]).is_zero());
    }

    #[test]
    fn add_and_sub_pad_the_shorter_operand() {
        let a = IntPolynomial::from([1, 2, 3]);
        let b = IntPolynomial::from([4, 5]);
        assert_eq!(&a + &b, IntPolynomial::from([5, 7, 3]));
        assert_eq!(&b + &a, IntPolynomial::from([5, 7, 3]));
        assert_eq!(&a - &b, IntPolynomial::from([-3, -3, 3]));
        assert_eq!(&b - &a, IntPolynomial::from([3, 3, -3]));
    }

    #[test]
    fn cancelling_leading_terms_trims_the_result() {
        let a = IntPolynomial::from([1, 2, 3]);
        let b = IntPolynomial::from([0, 1, 3]);
        let difference = &a - &b;
        assert_eq!(difference, IntPolynomial::from([1, 1]));
        assert_eq!(difference.degree(), 1);
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn mul_is_a_convolution() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = IntPolynomial::from([1, 1]);
        let b = IntPolynomial::from([1, -1]);
        assert_eq!(&a * &b, IntPolynomial::from([1, 0, -1]));

        // (2 + 3x + x^2)(1 + 4x) = 2 + 11x + 13x^2 + 4x^3
        let c = IntPolynomial::from([2, 3, 1]);
        let d = IntPolynomial::from([1, 4]);
        assert_eq!(c * d, IntPolynomial::from([2, 11, 13, 4]));

        assert!((&a * &IntPolynomial::zero()).is_zero());
        assert_eq!(&a * BigInt::from(3), IntPolynomial::from([3, 3]));
    }

    #[test]
    fn div_rem_of_exact_multiple() {
        // x^3 - 1 = (x - 1)(x^2 + x + 1)
        let numerator = rational(&[-1, 0, 0, 1]);
        let denominator = rational(&[-1, 1]);
        let (quotient, remainder) = numerator.div_rem(&denominator).unwrap();
        assert_eq!(quotient, rational(&[1, 1, 1]));
        assert!(remainder.is_zero());
    }

    #[test]
    fn div_rem_produces_fractional_coefficients() {
        // (x^2 + 1) / (2x) = x/2 remainder 1
        let numerator = rational(&[1, 0, 1]);
        let denominator = rational(&[0, 2]);
        let (quotient, remainder) = numerator.div_rem(&denominator).unwrap();

        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        assert_eq!(quotient, RationalPolynomial::monomial(half, 1));
        assert_eq!(remainder, rational(&[1]));
        assert_eq!(&(&quotient * &denominator) + &remainder, numerator);
    }

    #[test]
    fn div_rem_with_smaller_numerator_returns_it_as_remainder() {
        let numerator = rational(&[3, 1]);
        let denominator = rational(&[1, 0, 1]);
        let (quotient, remainder) = numerator.div_rem(&denominator).unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, numerator);
    }

    #[test]
    fn div_rem_by_constant_has_zero_remainder() {
        let numerator = rational(&[3, 6, 9]);
        let (quotient, remainder) = numerator.div_rem(&rational(&[3])).unwrap();
        assert_eq!(quotient, rational(&[1, 2, 3]));
        assert!(remainder.is_zero());
    }

    #[test]
    fn div_rem_by_zero_polynomial_fails() {
        let numerator = rational(&[1, 2, 3]);
        let err = numerator.div_rem(&RationalPolynomial::zero()).unwrap_err();
        assert_matches!(err, MathError::DivisionByZeroPolynomial);

        // a denominator that trims to zero is the zero polynomial too
        let err = numerator.div_rem(&rational(&[0, 0, 0])).unwrap_err();
        assert_matches!(err, MathError::DivisionByZeroPolynomial);
    }

    #[test]
    fn display_skips_zero_terms() {
        assert_eq!(IntPolynomial::from([1, 0, -1, 4]).to_string(), "1 + -1x^2 + 4x^3");
        assert_eq!(IntPolynomial::from([0, 2]).to_string(), "2x");
        assert_eq!(IntPolynomial::zero().to_string(), "0");
    }

    #[test]
    fn leading_coefficient_and_monomial() {
        let poly = IntPolynomial::monomial(BigInt::from(7), 4);
        assert_eq!(poly.degree(), 4);
        assert_eq!(poly.leading_coefficient(), &BigInt::from(7));
        assert!(poly.coefficients()[..4].iter().all(Zero::is_zero));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_retrims() {
        let poly = IntPolynomial::from([1, -2, 3]);
        let json = serde_json::to_string(&poly).unwrap();
        let decoded: IntPolynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, poly);

        // coefficients serialized with trailing zeros are trimmed on the way in
        let padded = serde_json::to_string(&vec![BigInt::from(1), BigInt::zero()]).unwrap();
        let decoded: IntPolynomial = serde_json::from_str(&padded).unwrap();
        assert_eq!(decoded, IntPolynomial::from([1]));
    }
}
