//! Request validation and configuration loading.
//!
//! Everything here runs before the core is invoked; the core functions assume
//! a prime `p`, an exponent within the ceiling and a non-empty selection.

use std::path::Path;

use pg_core::{PgConfig, is_prime};
use pg_indices::{IndexKind, IndexSelection};

use crate::error::{AppError, AppResult};

/// Check `p` is prime and `1 <= k <= config.k_max`.
pub fn validate_request(p: u64, k: u32, config: &PgConfig) -> AppResult<()> {
    if !is_prime(p) {
        return Err(AppError::InvalidPrime(p));
    }
    if k < 1 || k > config.k_max {
        return Err(AppError::InvalidExponent {
            k,
            k_max: config.k_max,
        });
    }
    Ok(())
}

/// Parse index names into a non-empty selection.
pub fn parse_selection<S: AsRef<str>>(names: &[S]) -> AppResult<IndexSelection> {
    let kinds = names
        .iter()
        .map(|name| name.as_ref().parse::<IndexKind>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IndexSelection::new(kinds)?)
}

/// Load configuration from a YAML file, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> AppResult<PgConfig> {
    let Some(path) = path else {
        return Ok(PgConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: PgConfig = serde_yaml::from_str(&text)?;
    if config.k_max == 0 {
        return Err(AppError::Config("k_max must be at least 1".into()));
    }
    tracing::debug!(?config, path = %path.display(), "loaded config");
    Ok(config)
}
