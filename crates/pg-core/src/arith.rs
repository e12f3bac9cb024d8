//! Integer arithmetic for prime-power moduli.

use crate::{PgError, PgResult};

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `a * b mod m`, widened to 128 bits so the product never wraps.
///
/// `m` must be nonzero.
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Compute `p^k`, failing on overflow instead of wrapping.
pub fn prime_power(p: u64, k: u32) -> PgResult<u64> {
    p.checked_pow(k).ok_or(PgError::Overflow { what: "p^k" })
}

/// Euler's totient of `p^k` for prime `p` and `k >= 1`: `p^(k-1) * (p - 1)`.
pub fn totient_prime_power(p: u64, k: u32) -> PgResult<u64> {
    if k == 0 {
        return Err(PgError::InvalidArg {
            what: "exponent must be at least 1".into(),
        });
    }
    let base = prime_power(p, k - 1)?;
    base.checked_mul(p.saturating_sub(1))
        .ok_or(PgError::Overflow { what: "phi(p^k)" })
}

/// Trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
