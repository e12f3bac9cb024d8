//! Computation options shared by the service layer and the CLI.

use serde::{Deserialize, Serialize};

/// Default ceiling on the exponent `k`; bounds group size and runtime.
pub const K_MAX: u32 = 5;

/// Options for one computation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PgConfig {
    /// Upper bound on `k` accepted by the request boundary.
    pub k_max: u32,
    /// Use rayon for pair checks and distance searches.
    pub parallel: bool,
}

impl Default for PgConfig {
    fn default() -> Self {
        Self {
            k_max: K_MAX,
            parallel: true,
        }
    }
}

impl PgConfig {
    /// Sequential configuration with the default ceiling.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = PgConfig::default();
        assert_eq!(cfg.k_max, 5);
        assert!(cfg.parallel);
        assert!(!PgConfig::sequential().parallel);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg: PgConfig = serde_yaml::from_str("k_max: 3\n").unwrap();
        assert_eq!(cfg.k_max, 3);
        assert!(cfg.parallel);
    }
}
