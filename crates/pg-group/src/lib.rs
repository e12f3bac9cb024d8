//! pg-group: the multiplicative group of integers modulo p^k.
//!
//! Provides:
//! - Enumeration of the reduced residue system (`enumerate`)
//! - The power relation between two units (`is_power`)
//!
//! # Example
//!
//! ```
//! use pg_group::enumerate;
//!
//! let group = enumerate(3, 2).unwrap();
//! assert_eq!(group.modulus(), 9);
//! assert_eq!(group.elements(), &[1, 2, 4, 5, 7, 8]);
//! assert!(group.is_power(2, 4).unwrap());
//! ```

pub mod group;
pub mod power;

pub use group::{ModularGroup, enumerate};
pub use power::{is_power, is_power_bounded};
