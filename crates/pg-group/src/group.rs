//! Reduced residue system modulo a prime power.

use pg_core::{PgResult, gcd, prime_power};
use crate::power;

/// The unit group of Z/p^kZ as an ascending list of residues.
///
/// Immutable once built; only `enumerate` creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularGroup {
    p: u64,
    k: u32,
    modulus: u64,
    elements: Vec<u64>,
}

impl ModularGroup {
    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Residues in `[1, modulus)` coprime with the modulus, ascending.
    pub fn elements(&self) -> &[u64] {
        &self.elements
    }

    /// Group order, i.e. phi(p^k).
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Whether `v` is a positive power of `u` in this group.
    ///
    /// The search is capped at the group order, which bounds the
    /// multiplicative order of every unit.
    pub fn is_power(&self, u: u64, v: u64) -> PgResult<bool> {
        power::is_power_bounded(u, v, self.modulus, self.order())
    }
}

/// Enumerate the units modulo `p^k`.
///
/// `p` is assumed prime and `k >= 1`; neither is re-checked here.
pub fn enumerate(p: u64, k: u32) -> PgResult<ModularGroup> {
    let modulus = prime_power(p, k)?;
    let elements: Vec<u64> = (1..modulus).filter(|&x| gcd(x, modulus) == 1).collect();
    tracing::debug!(p, k, modulus, order = elements.len(), "enumerated unit group");
    Ok(ModularGroup {
        p,
        k,
        modulus,
        elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_two_has_one_element() {
        let g = enumerate(2, 1).unwrap();
        assert_eq!(g.modulus(), 2);
        assert_eq!(g.elements(), &[1]);
        assert_eq!(g.order(), 1);
    }

    #[test]
    fn small_groups() {
        assert_eq!(enumerate(3, 1).unwrap().elements(), &[1, 2]);
        assert_eq!(enumerate(2, 2).unwrap().elements(), &[1, 3]);
        assert_eq!(enumerate(2, 3).unwrap().elements(), &[1, 3, 5, 7]);
        assert_eq!(enumerate(5, 1).unwrap().elements(), &[1, 2, 3, 4]);
    }

    #[test]
    fn accessors() {
        let g = enumerate(7, 2).unwrap();
        assert_eq!(g.p(), 7);
        assert_eq!(g.k(), 2);
        assert_eq!(g.modulus(), 49);
        assert_eq!(g.order(), 42);
    }

    #[test]
    fn overflowing_modulus_is_an_error() {
        assert!(enumerate(1 << 20, 4).is_err());
    }
}
