//! Integration tests for pg-group.

use pg_core::{K_MAX, gcd, totient_prime_power};
use pg_group::{enumerate, is_power};
use proptest::prelude::*;

const PRIMES: [u64; 5] = [2, 3, 5, 7, 11];

#[test]
fn group_size_is_totient_for_supported_range() {
    for &p in &PRIMES {
        for k in 1..=K_MAX {
            // 11^5 is large but still cheap to enumerate.
            let group = enumerate(p, k).unwrap();
            let phi = totient_prime_power(p, k).unwrap() as usize;
            assert_eq!(group.order(), phi, "p={p} k={k}");
        }
    }
}

#[test]
fn elements_are_ascending_distinct_and_coprime() {
    for &p in &PRIMES[..4] {
        for k in 1..=3 {
            let group = enumerate(p, k).unwrap();
            let m = group.modulus();
            assert!(group.elements().windows(2).all(|w| w[0] < w[1]));
            assert!(group.elements().iter().all(|&x| x >= 1 && x < m));
            assert!(group.elements().iter().all(|&x| gcd(x, m) == 1));
        }
    }
}

#[test]
fn scenario_mod_4() {
    let group = enumerate(2, 2).unwrap();
    assert_eq!(group.elements(), &[1, 3]);
    assert!(!is_power(1, 3, 4).unwrap());
    assert!(is_power(3, 1, 4).unwrap());
    assert!(group.is_power(3, 1).unwrap());
}

#[test]
fn scenario_mod_3() {
    let group = enumerate(3, 1).unwrap();
    assert_eq!(group.elements(), &[1, 2]);
    assert!(group.is_power(2, 1).unwrap());
    assert!(!group.is_power(1, 2).unwrap());
}

proptest! {
    #[test]
    fn power_walk_agrees_with_exponent_scan(
        p in prop::sample::select(vec![2u64, 3, 5, 7]),
        k in 1u32..4,
        i in 0usize..64,
        j in 0usize..64,
    ) {
        let group = enumerate(p, k).unwrap();
        let els = group.elements();
        let (u, v) = (els[i % els.len()], els[j % els.len()]);
        let m = group.modulus();

        // Brute force: u^a for a in 1..=order covers one full period.
        let mut x = 1u64;
        let mut expected = false;
        for _ in 0..group.order() {
            x = x * u % m;
            if x == v {
                expected = true;
                break;
            }
        }
        prop_assert_eq!(group.is_power(u, v).unwrap(), expected);
    }
}
