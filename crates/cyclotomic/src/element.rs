use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::Arc;

use itertools::Itertools;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::field::CyclotomicField;
use crate::CyclotomicError;

/// An element of a cyclotomic field.
///
/// The element is `num / den`, where `num` lists integer coefficients in the power basis of the
/// field and `den` is a positive integer. The pair is kept reduced: `den` is coprime to the content
/// of `num`, and zero is stored as `0 / 1`. With the power basis itself being canonical, two
/// elements are equal if and only if their representations are.
#[derive(Clone)]
pub struct Cyclotomic {
    field: Arc<CyclotomicField>,
    num: Vec<BigInt>,
    den: BigInt,
}

impl Cyclotomic {
    /// Builds an element from a numerator already in the power basis.
    pub(crate) fn from_parts(field: Arc<CyclotomicField>, num: Vec<BigInt>, den: BigInt) -> Self {
        debug_assert_eq!(num.len(), field.degree());
        let mut result = Self { field, num, den };
        result.normalize();
        result
    }

    fn normalize(&mut self) {
        assert!(!self.den.is_zero(), "zero denominator");
        if self.num.iter().all(Zero::is_zero) {
            self.den = BigInt::one();
            return;
        }
        let mut g = self.den.abs();
        for c in &self.num {
            if g.is_one() {
                break;
            }
            if !c.is_zero() {
                g = g.gcd(c);
            }
        }
        if self.den.sign() == Sign::Minus {
            g = -g;
        }
        if !g.is_one() {
            for c in &mut self.num {
                *c /= &g;
            }
            self.den /= &g;
        }
    }

    pub fn field(&self) -> &Arc<CyclotomicField> {
        &self.field
    }

    /// Coefficients of the numerator in the power basis.
    pub fn numerator(&self) -> &[BigInt] {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.iter().all(Zero::is_zero)
    }

    pub fn is_one(&self) -> bool {
        self.den.is_one() && self.num[0].is_one() && self.num[1..].iter().all(Zero::is_zero)
    }

    /// Returns the element as a rational number if it lies in `Q`.
    pub fn to_rational(&self) -> Option<BigRational> {
        if self.num[1..].iter().all(Zero::is_zero) {
            Some(BigRational::new(self.num[0].clone(), self.den.clone()))
        } else {
            None
        }
    }

    /// Returns the element as an integer if it lies in `Z`.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.den.is_one() && self.num[1..].iter().all(Zero::is_zero) {
            Some(self.num[0].clone())
        } else {
            None
        }
    }

    fn assert_same_field(&self, other: &Self) {
        assert_eq!(
            self.field.order(),
            other.field.order(),
            "mixing elements of {} and {}",
            self.field,
            other.field
        );
    }

    /// Like `+`, but reports mixing fields as an error instead of panicking.
    pub fn checked_add(&self, other: &Self) -> Result<Self, CyclotomicError> {
        self.check_field(other)?;
        Ok(self + other)
    }

    /// Like `*`, but reports mixing fields as an error instead of panicking.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, CyclotomicError> {
        self.check_field(other)?;
        Ok(self * other)
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, CyclotomicError> {
        self.check_field(other)?;
        Ok(self * &other.inverse()?)
    }

    fn check_field(&self, other: &Self) -> Result<(), CyclotomicError> {
        if self.field.order() == other.field.order() {
            Ok(())
        } else {
            Err(CyclotomicError::FieldMismatch {
                left: self.field.order(),
                right: other.field.order(),
            })
        }
    }

    /// Multiplies by a rational number.
    pub fn scale(&self, q: &BigRational) -> Self {
        Self::from_parts(
            Arc::clone(&self.field),
            self.num.iter().map(|c| c * q.numer()).collect(),
            &self.den * q.denom(),
        )
    }

    /// The image under the Galois automorphism `ζ ↦ ζ^k`. `k` must be coprime to the order of the
    /// field.
    pub fn galois(&self, k: u32) -> Self {
        let n = self.field.order();
        debug_assert!(k.gcd(&n) == 1, "ζ ↦ ζ^{k} is not an automorphism of {}", self.field);
        let mut num = vec![BigInt::zero(); self.field.degree()];
        for (j, c) in self.num.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let exponent = ((j as u64 * k as u64) % n as u64) as u32;
            for (target, &x) in num.iter_mut().zip(self.field.power(exponent)) {
                if x != 0 {
                    *target += c * x;
                }
            }
        }
        Self::from_parts(Arc::clone(&self.field), num, self.den.clone())
    }

    /// Complex conjugation, which is the automorphism `ζ ↦ ζ^{-1}`.
    pub fn conj(&self) -> Self {
        match self.field.order() {
            1 | 2 => self.clone(),
            n => self.galois(n - 1),
        }
    }

    /// The multiplicative inverse.
    ///
    /// For `x ≠ 0` the product of `x` with all of its nontrivial Galois conjugates is the norm of
    /// `x`, a nonzero rational. Dividing the product of the conjugates by the norm gives `1/x`.
    pub fn inverse(&self) -> Result<Self, CyclotomicError> {
        if self.is_zero() {
            return Err(CyclotomicError::DivisionByZero);
        }
        if let Some(q) = self.to_rational() {
            return Ok(self.field.from_rational(&q.recip()));
        }
        let n = self.field.order();
        let integral = Self {
            field: Arc::clone(&self.field),
            num: self.num.clone(),
            den: BigInt::one(),
        };
        let conjugates = (2..n)
            .filter(|k| k.gcd(&n) == 1)
            .fold(self.field.one(), |acc, k| &acc * &integral.galois(k));
        let norm = (&integral * &conjugates)
            .to_rational()
            .expect("the norm of a cyclotomic integer is rational");
        debug_assert!(!norm.is_zero());
        Ok(conjugates.scale(&(BigRational::from_integer(self.den.clone()) / norm)))
    }

    /// The element in a larger field `Q(ζ_m)` with `n | m`, via `ζ_n ↦ ζ_m^{m/n}`.
    pub fn embed(&self, target: &Arc<CyclotomicField>) -> Result<Self, CyclotomicError> {
        let n = self.field.order();
        let m = target.order();
        if m % n != 0 {
            return Err(CyclotomicError::NotASubfield { from: n, to: m });
        }
        if m == n {
            return Ok(self.clone());
        }
        let step = m / n;
        let mut num = vec![BigInt::zero(); target.degree()];
        for (j, c) in self.num.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            for (out, &x) in num.iter_mut().zip(target.power(j as u32 * step)) {
                if x != 0 {
                    *out += c * x;
                }
            }
        }
        Ok(Self::from_parts(Arc::clone(target), num, self.den.clone()))
    }

    /// A total order on canonical representations. This has nothing to do with the ordering of
    /// real numbers; it only exists so that lists of elements can be sorted reproducibly.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.field
            .order()
            .cmp(&other.field.order())
            .then_with(|| self.den.cmp(&other.den))
            .then_with(|| self.num.cmp(&other.num))
    }

    pub fn pow(&self, mut e: u32) -> Self {
        let mut result = self.field.one();
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        result
    }
}

impl PartialEq for Cyclotomic {
    fn eq(&self, other: &Self) -> bool {
        self.field.order() == other.field.order() && self.den == other.den && self.num == other.num
    }
}

impl Eq for Cyclotomic {}

impl fmt::Display for Cyclotomic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let n = self.field.order();
        let terms = self
            .num
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(k, c)| match (k, c) {
                (0, c) => format!("{c}"),
                (k, c) if c.is_one() => zeta_power(n, k),
                (k, c) if (-c).is_one() => format!("-{}", zeta_power(n, k)),
                (k, c) => format!("{c}*{}", zeta_power(n, k)),
            })
            .join(" + ")
            .replace("+ -", "- ");
        if self.den.is_one() {
            write!(f, "{terms}")
        } else if self.num.iter().filter(|c| !c.is_zero()).count() == 1 {
            write!(f, "{terms}/{}", self.den)
        } else {
            write!(f, "({terms})/{}", self.den)
        }
    }
}

fn zeta_power(n: u32, k: usize) -> String {
    if k == 1 {
        format!("ζ{n}")
    } else {
        format!("ζ{n}^{k}")
    }
}

impl fmt::Debug for Cyclotomic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self} in {}", self.field)
    }
}

impl<'a> Add<&'a Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;

    fn add(self, other: &'a Cyclotomic) -> Cyclotomic {
        self.assert_same_field(other);
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }
        let (num, den) = if self.den == other.den {
            let num = self.num.iter().zip(&other.num).map(|(a, b)| a + b).collect();
            (num, self.den.clone())
        } else {
            let num = self
                .num
                .iter()
                .zip(&other.num)
                .map(|(a, b)| a * &other.den + b * &self.den)
                .collect();
            (num, &self.den * &other.den)
        };
        Cyclotomic::from_parts(Arc::clone(&self.field), num, den)
    }
}

impl<'a> Mul<&'a Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;

    fn mul(self, other: &'a Cyclotomic) -> Cyclotomic {
        self.assert_same_field(other);
        let phi = self.field.degree();
        if self.is_zero() || other.is_zero() {
            return self.field.zero();
        }
        let mut product = vec![BigInt::zero(); 2 * phi - 1];
        for (i, a) in self.num.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.num.iter().enumerate() {
                if !b.is_zero() {
                    product[i + j] += a * b;
                }
            }
        }
        let num = self.field.reduce(product);
        Cyclotomic::from_parts(Arc::clone(&self.field), num, &self.den * &other.den)
    }
}

impl Neg for &Cyclotomic {
    type Output = Cyclotomic;

    fn neg(self) -> Cyclotomic {
        Cyclotomic {
            field: Arc::clone(&self.field),
            num: self.num.iter().map(|c| -c).collect(),
            den: self.den.clone(),
        }
    }
}

impl Neg for Cyclotomic {
    type Output = Cyclotomic;

    fn neg(self) -> Cyclotomic {
        -&self
    }
}

impl<'a> Sub<&'a Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;

    fn sub(self, other: &'a Cyclotomic) -> Cyclotomic {
        self + &(-other)
    }
}

macro_rules! impl_by_value {
    ($trt:ident, $mth:ident, $trt_assign:ident, $mth_assign:ident) => {
        impl $trt<Cyclotomic> for Cyclotomic {
            type Output = Cyclotomic;

            fn $mth(self, other: Cyclotomic) -> Cyclotomic {
                (&self).$mth(&other)
            }
        }

        impl<'a> $trt<&'a Cyclotomic> for Cyclotomic {
            type Output = Cyclotomic;

            fn $mth(self, other: &'a Cyclotomic) -> Cyclotomic {
                (&self).$mth(other)
            }
        }

        impl<'a> $trt_assign<&'a Cyclotomic> for Cyclotomic {
            fn $mth_assign(&mut self, other: &'a Cyclotomic) {
                *self = (&*self).$mth(other);
            }
        }

        impl $trt_assign<Cyclotomic> for Cyclotomic {
            fn $mth_assign(&mut self, other: Cyclotomic) {
                *self = (&*self).$mth(&other);
            }
        }
    };
}

impl_by_value!(Add, add, AddAssign, add_assign);
impl_by_value!(Sub, sub, SubAssign, sub_assign);
impl_by_value!(Mul, mul, MulAssign, mul_assign);

impl std::iter::Sum for Cyclotomic {
    /// Panics on an empty iterator, since there is no field to put the zero in.
    fn sum<I: Iterator<Item = Cyclotomic>>(mut iter: I) -> Self {
        let first = iter.next().expect("cannot sum an empty iterator of cyclotomics");
        iter.fold(first, |acc, x| acc + x)
    }
}
