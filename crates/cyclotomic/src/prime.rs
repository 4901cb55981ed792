//! Arithmetic modulo a word-sized prime. This is what the character table computation runs on
//! before lifting its answers back into a cyclotomic field.

pub const fn is_prime(p: u32) -> bool {
    if p < 2 {
        return false;
    }
    let mut k = 2;
    while k * k <= p {
        if p % k == 0 {
            return false;
        }
        k += 1;
    }
    true
}

/// Compute b^e mod p.
pub const fn power_mod(p: u32, mut b: u32, mut e: u32) -> u32 {
    assert!(p > 0);
    let mut result: u32 = 1 % p;
    b %= p;
    while e > 0 {
        if (e & 1) == 1 {
            result = ((result as u64) * (b as u64) % (p as u64)) as u32;
        }
        b = (((b as u64) * (b as u64)) % (p as u64)) as u32;
        e >>= 1;
    }
    result
}

/// The inverse of `k` modulo the prime `p`.
pub fn inverse(p: u32, k: u32) -> u32 {
    assert!(k % p != 0, "{k} is not invertible mod {p}");
    power_mod(p, k, p - 2)
}

pub fn product(p: u32, a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) % p as u64) as u32
}

pub fn sum(p: u32, a: u32, b: u32) -> u32 {
    ((a as u64 + b as u64) % p as u64) as u32
}

/// Reduces a possibly negative integer into `0..p`.
pub fn reduce(p: u32, n: i64) -> u32 {
    n.rem_euclid(p as i64) as u32
}

/// The multiplicative order of `a` mod `p`, or `None` if `a` is not a unit.
pub fn multiplicative_order(p: u32, a: u32) -> Option<u32> {
    if a % p == 0 {
        return None;
    }
    // The order divides p - 1, so it suffices to test the divisors in increasing order.
    let n = p - 1;
    (1..=n)
        .filter(|d| n % d == 0)
        .find(|&d| power_mod(p, a, d) == 1)
}

/// The smallest prime `p` with `p ≡ 1 (mod modulus)` and `p * p > lower_bound_squared`.
///
/// Dirichlet guarantees such a prime exists. We stay below 2^31 so that products of residues fit
/// in a `u64` with room to spare.
pub fn prime_congruent_to_one(modulus: u32, lower_bound_squared: u64) -> Option<u32> {
    assert!(modulus > 0);
    let mut p = modulus as u64 + 1;
    while p < (1 << 31) {
        if p * p > lower_bound_squared && is_prime(p as u32) {
            return Some(p as u32);
        }
        p += modulus as u64;
    }
    None
}

/// The least `z` in `1..p` of multiplicative order exactly `order`.
pub fn root_of_unity(p: u32, order: u32) -> Option<u32> {
    if order == 0 || (p - 1) % order != 0 {
        return None;
    }
    (1..p).find(|&z| multiplicative_order(p, z) == Some(order))
}

/// Euler's totient function.
pub fn euler_phi(n: u32) -> u32 {
    let mut n = n;
    let mut result = n;
    let mut k = 2;
    while k * k <= n {
        if n % k == 0 {
            while n % k == 0 {
                n /= k;
            }
            result -= result / k;
        }
        k += 1;
    }
    if n > 1 {
        result -= result / n;
    }
    result
}

/// The positive divisors of `n`, in increasing order.
pub fn divisors(n: u32) -> Vec<u32> {
    (1..=n).filter(|d| n % d == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primality() {
        let small: Vec<u32> = (0..30).filter(|&p| is_prime(p)).collect();
        assert_eq!(small, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(65537));
        assert!(!is_prime(65535));
    }

    #[test]
    fn inverse_test() {
        for p in [3, 5, 7, 11, 13, 61] {
            for k in 1..p {
                assert_eq!(product(p, inverse(p, k), k), 1);
            }
        }
    }

    #[test]
    fn power_mod_test() {
        assert_eq!(power_mod(7, 3, 6), 1);
        assert_eq!(power_mod(13, 2, 0), 1);
        assert_eq!(power_mod(61, 2, 10), 1024 % 61);
    }

    #[test]
    fn dixon_primes() {
        // |S_5| = 120 and exponent 60, so we need p ≡ 1 mod 60 with p^2 > 480.
        assert_eq!(prime_congruent_to_one(60, 4 * 120), Some(61));
        // The trivial group still needs an odd prime.
        assert_eq!(prime_congruent_to_one(1, 4), Some(3));
        assert_eq!(prime_congruent_to_one(4, 4 * 8), Some(13));
    }

    #[test]
    fn roots_of_unity() {
        for (p, m) in [(61, 60), (13, 4), (13, 6), (7, 1), (31, 5)] {
            let z = root_of_unity(p, m).unwrap();
            assert_eq!(multiplicative_order(p, z), Some(m));
        }
        assert_eq!(root_of_unity(13, 5), None);
    }

    #[test]
    fn totient() {
        let phis: Vec<u32> = (1..=12).map(euler_phi).collect();
        assert_eq!(phis, vec![1, 1, 2, 2, 4, 2, 6, 4, 6, 4, 10, 4]);
        assert_eq!(euler_phi(60), 16);
    }
}
