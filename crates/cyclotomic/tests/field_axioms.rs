use std::sync::Arc;

use cyclotomic::{Cyclotomic, CyclotomicField};
use proptest::prelude::*;

/// Field orders small enough that inversion stays fast, but covering prime, prime power and
/// composite orders.
const ORDERS: [u32; 7] = [1, 3, 4, 5, 8, 12, 15];

/// An arbitrary element with small integer coefficients on roots of unity, scaled by `1/d`.
fn arb_element(field: Arc<CyclotomicField>) -> impl Strategy<Value = Cyclotomic> {
    let n = field.order();
    (
        proptest::collection::vec((0..n, -4i64..=4), 0..6),
        1i64..=6,
    )
        .prop_map(move |(terms, d)| {
            let x = field.from_exponents(terms);
            x.checked_div(&field.from_integer(d))
                .expect("d is nonzero")
        })
}

fn arb_field_and_elements<const N: usize>(
) -> impl Strategy<Value = (Arc<CyclotomicField>, [Cyclotomic; N])> {
    proptest::sample::select(ORDERS.to_vec()).prop_flat_map(|n| {
        let field = CyclotomicField::new(n);
        let elements: [_; N] = (0..N)
            .map(|_| arb_element(Arc::clone(&field)))
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();
        (Just(field), elements)
    })
}

proptest! {
    #[test]
    fn addition_is_commutative((_, [a, b]) in arb_field_and_elements::<2>()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn multiplication_is_commutative((_, [a, b]) in arb_field_and_elements::<2>()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn multiplication_is_associative((_, [a, b, c]) in arb_field_and_elements::<3>()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn distributivity((_, [a, b, c]) in arb_field_and_elements::<3>()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn additive_inverse((_, [a]) in arb_field_and_elements::<1>()) {
        prop_assert!((&a - &a).is_zero());
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn multiplicative_inverse((field, [a]) in arb_field_and_elements::<1>()) {
        prop_assume!(!a.is_zero());
        let inv = a.inverse().unwrap();
        prop_assert_eq!(&a * &inv, field.one());
    }

    #[test]
    fn galois_is_a_ring_map((field, [a, b]) in arb_field_and_elements::<2>()) {
        let n = field.order();
        for k in (1..n.max(2)).filter(|&k| num_gcd(k, n) == 1) {
            prop_assert_eq!((&a * &b).galois(k), &a.galois(k) * &b.galois(k));
            prop_assert_eq!((&a + &b).galois(k), &a.galois(k) + &b.galois(k));
        }
    }

    #[test]
    fn norm_of_conjugate_pair_is_real((_, [a]) in arb_field_and_elements::<1>()) {
        let norm = &a * &a.conj();
        prop_assert_eq!(norm.conj(), norm);
    }

    #[test]
    fn embedding_is_a_ring_map(
        (_, [a, b]) in arb_field_and_elements::<2>(),
        multiple in 1u32..=3,
    ) {
        let target = CyclotomicField::new(a.field().order() * multiple);
        let ea = a.embed(&target).unwrap();
        let eb = b.embed(&target).unwrap();
        prop_assert_eq!((&a * &b).embed(&target).unwrap(), &ea * &eb);
        prop_assert_eq!((&a + &b).embed(&target).unwrap(), &ea + &eb);
    }
}

fn num_gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[test]
fn cube_roots_of_unity() {
    let field = CyclotomicField::new(3);
    let omega = field.zeta(1);
    let total = &(&field.one() + &omega) + &omega.pow(2);
    assert!(total.is_zero());
    assert_eq!(omega.pow(3), field.one());
    assert_eq!(omega.conj(), omega.pow(2));
}

#[test]
fn imaginary_unit() {
    let field = CyclotomicField::new(4);
    let i = field.zeta(1);
    assert_eq!(i.pow(2), field.from_integer(-1));
    assert_eq!(i.pow(2).to_integer(), Some((-1).into()));
}

#[test]
fn golden_ratio() {
    // In Q(ζ5), ζ + ζ^4 = (√5 - 1) / 2 satisfies x^2 + x - 1 = 0.
    let field = CyclotomicField::new(5);
    let x = &field.zeta(1) + &field.zeta(4);
    assert!((&(&x * &x) + &x - field.one()).is_zero());
    assert_eq!(x.to_rational(), None);
}
