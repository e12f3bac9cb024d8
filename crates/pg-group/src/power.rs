//! Power relation between units: does `u^a = v (mod m)` for some `a >= 1`?

use pg_core::{PgError, PgResult, mul_mod};

/// Decide whether `v` is a positive power of `u` modulo `modulus`.
///
/// The walk is capped at `modulus - 1` steps, an upper bound on the order of
/// any unit. Use [`is_power_bounded`] when the group order is known.
pub fn is_power(u: u64, v: u64, modulus: u64) -> PgResult<bool> {
    let cap = usize::try_from(modulus.saturating_sub(1)).unwrap_or(usize::MAX);
    is_power_bounded(u, v, modulus, cap)
}

/// Decide whether `v` is a positive power of `u`, walking at most `cap` powers.
///
/// Walks `u, u^2, u^3, ...` and stops at the first match or when the walk
/// returns to 1. For a unit `u` this takes `ord(u)` steps. Running out of
/// steps means `u` is not a unit (or `cap` is below its order) and is
/// reported as an invariant violation instead of looping.
pub fn is_power_bounded(u: u64, v: u64, modulus: u64, cap: usize) -> PgResult<bool> {
    if modulus < 2 {
        return Err(PgError::InvalidArg {
            what: format!("modulus must be at least 2, got {modulus}"),
        });
    }
    // The only power of 1 is 1.
    if u == 1 {
        return Ok(v == 1);
    }

    let mut x = u;
    for _ in 0..cap {
        if x == v {
            return Ok(true);
        }
        if x == 1 {
            return Ok(false);
        }
        x = mul_mod(x, u, modulus);
    }
    Err(PgError::Invariant {
        what: format!("powers of {u} mod {modulus} did not cycle within {cap} steps"),
    })
}
