use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::prime::{divisors, euler_phi};
use crate::Cyclotomic;

/// The cyclotomic field `Q(ζ_n)`, where `ζ_n = exp(2πi / n)`.
///
/// Elements are stored in the power basis `1, ζ, ..., ζ^{φ(n) - 1}`. Any polynomial in `ζ` is
/// brought into this basis by reducing modulo the cyclotomic polynomial `Φ_n`, which makes the
/// representation of every element unique. The field also caches the reduced form of `ζ^k` for
/// `0 <= k < n`, which is all that is needed to build character values and apply Galois
/// automorphisms.
///
/// Fields are shared behind an [`Arc`]; elements hold a reference to the field they live in.
pub struct CyclotomicField {
    order: u32,
    degree: usize,
    /// Coefficients of `Φ_n`, constant term first. This is monic of degree `degree`.
    modulus: Vec<i64>,
    /// `powers[k]` is `ζ^k` in the power basis.
    powers: Vec<Vec<i64>>,
}

impl CyclotomicField {
    pub fn new(order: u32) -> Arc<Self> {
        assert!(order > 0, "Q(ζ_0) is not a field");
        let modulus = cyclotomic_polynomial(order);
        let degree = modulus.len() - 1;
        debug_assert_eq!(degree as u32, euler_phi(order));

        let mut powers = Vec::with_capacity(order as usize);
        let mut current = vec![0; degree];
        current[0] = 1;
        for _ in 0..order {
            powers.push(current.clone());
            current = times_zeta(&current, &modulus);
        }
        debug_assert_eq!(current[0], 1);

        Arc::new(Self {
            order,
            degree,
            modulus,
            powers,
        })
    }

    /// The `n` in `Q(ζ_n)`.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The degree `φ(n)` of the field over `Q`.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The coefficients of the cyclotomic polynomial `Φ_n`, constant term first.
    pub fn modulus(&self) -> &[i64] {
        &self.modulus
    }

    pub(crate) fn power(&self, k: u32) -> &[i64] {
        &self.powers[(k % self.order) as usize]
    }

    pub fn zero(self: &Arc<Self>) -> Cyclotomic {
        Cyclotomic::from_parts(Arc::clone(self), vec![BigInt::zero(); self.degree], BigInt::one())
    }

    pub fn one(self: &Arc<Self>) -> Cyclotomic {
        self.from_integer(1)
    }

    pub fn from_integer(self: &Arc<Self>, n: i64) -> Cyclotomic {
        let mut num = vec![BigInt::zero(); self.degree];
        num[0] = BigInt::from(n);
        Cyclotomic::from_parts(Arc::clone(self), num, BigInt::one())
    }

    pub fn from_rational(self: &Arc<Self>, q: &BigRational) -> Cyclotomic {
        let mut num = vec![BigInt::zero(); self.degree];
        num[0] = q.numer().clone();
        Cyclotomic::from_parts(Arc::clone(self), num, q.denom().clone())
    }

    /// The root of unity `ζ^k`.
    pub fn zeta(self: &Arc<Self>, k: u32) -> Cyclotomic {
        self.from_exponents(std::iter::once((k, 1)))
    }

    /// Builds `Σ c ζ^k` from `(k, c)` pairs. Exponents are read mod `n` and repeated exponents
    /// accumulate. This is how character values, which are sums of roots of unity, are assembled.
    pub fn from_exponents(
        self: &Arc<Self>,
        terms: impl IntoIterator<Item = (u32, i64)>,
    ) -> Cyclotomic {
        let mut num = vec![0i64; self.degree];
        for (k, c) in terms {
            for (target, &x) in num.iter_mut().zip(self.power(k)) {
                *target += c * x;
            }
        }
        Cyclotomic::from_parts(
            Arc::clone(self),
            num.into_iter().map(BigInt::from).collect(),
            BigInt::one(),
        )
    }

    /// Reduces a polynomial in `ζ`, constant term first and of any length, into the power basis.
    pub(crate) fn reduce(&self, mut poly: Vec<BigInt>) -> Vec<BigInt> {
        let phi = self.degree;
        if poly.len() < phi {
            poly.resize(phi, BigInt::zero());
            return poly;
        }
        for top in (phi..poly.len()).rev() {
            if poly[top].is_zero() {
                continue;
            }
            let c = std::mem::take(&mut poly[top]);
            let shift = top - phi;
            for (t, &m) in self.modulus[..phi].iter().enumerate() {
                if m != 0 {
                    poly[shift + t] -= &c * m;
                }
            }
        }
        poly.truncate(phi);
        poly
    }
}

impl PartialEq for CyclotomicField {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for CyclotomicField {}

impl fmt::Display for CyclotomicField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Q(ζ_{})", self.order)
    }
}

impl fmt::Debug for CyclotomicField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CyclotomicField({})", self.order)
    }
}

/// Multiplies a reduced element by `ζ`.
fn times_zeta(v: &[i64], modulus: &[i64]) -> Vec<i64> {
    let phi = v.len();
    let mut result = vec![0; phi];
    result[1..].copy_from_slice(&v[..phi - 1]);
    // ζ^φ = -(Φ_n - ζ^φ)
    let top = v[phi - 1];
    if top != 0 {
        for (r, &m) in result.iter_mut().zip(modulus) {
            *r -= top * m;
        }
    }
    result
}

/// Computes `Φ_n` by dividing `x^n - 1` by `Φ_d` for every proper divisor `d` of `n`.
pub fn cyclotomic_polynomial(n: u32) -> Vec<i64> {
    let mut poly = vec![0i64; n as usize + 1];
    poly[0] = -1;
    poly[n as usize] = 1;
    for d in divisors(n) {
        if d == n {
            continue;
        }
        poly = divide_monic(&poly, &cyclotomic_polynomial(d));
    }
    poly
}

/// Exact division of integer polynomials by a monic divisor.
fn divide_monic(dividend: &[i64], divisor: &[i64]) -> Vec<i64> {
    let n = dividend.len() - 1;
    let m = divisor.len() - 1;
    debug_assert_eq!(divisor[m], 1);
    let mut remainder = dividend.to_vec();
    let mut quotient = vec![0i64; n - m + 1];
    for k in (0..=n - m).rev() {
        let c = remainder[k + m];
        quotient[k] = c;
        if c != 0 {
            for (j, &d) in divisor.iter().enumerate() {
                remainder[k + j] -= c * d;
            }
        }
    }
    debug_assert!(remainder.iter().all(|&r| r == 0));
    quotient
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, vec![-1, 1])]
    #[case(2, vec![1, 1])]
    #[case(3, vec![1, 1, 1])]
    #[case(4, vec![1, 0, 1])]
    #[case(6, vec![1, -1, 1])]
    #[case(8, vec![1, 0, 0, 0, 1])]
    #[case(12, vec![1, 0, -1, 0, 1])]
    fn small_cyclotomic_polynomials(#[case] n: u32, #[case] expected: Vec<i64>) {
        assert_eq!(cyclotomic_polynomial(n), expected);
    }

    #[test]
    fn degrees_match_totient() {
        for n in 1..=60 {
            assert_eq!(cyclotomic_polynomial(n).len() - 1, euler_phi(n) as usize);
        }
        // The first cyclotomic polynomial with a coefficient outside {-1, 0, 1}.
        assert!(cyclotomic_polynomial(105).contains(&-2));
    }

    #[test]
    fn powers_wrap_around() {
        for n in [1, 2, 3, 5, 12, 30] {
            let field = CyclotomicField::new(n);
            assert_eq!(field.zeta(n), field.one());
            assert_eq!(field.zeta(2 * n + 1), field.zeta(1));
        }
    }

    #[test]
    fn reduction() {
        let field = CyclotomicField::new(4);
        // 1 + ζ + ζ^2 + ζ^3 = 0 in Q(i)
        let reduced = field.reduce((0..4).map(|_| BigInt::one()).collect());
        assert!(reduced.iter().all(Zero::is_zero));
    }
}
