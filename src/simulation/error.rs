//! Validation errors raised while building bodies and scenarios
//!
//! The core performs no I/O, so every failure is a local validation failure
//! surfaced synchronously at construction time

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be strictly positive and finite
    InvalidMass(f64),
    /// A config vector did not have exactly two components
    InvalidVector { field: &'static str, len: usize },
    /// A numeric parameter was not finite
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass(m) => write!(f, "invalid mass {m}: mass must be > 0"),
            SimError::InvalidVector { field, len } => {
                write!(f, "field `{field}` needs 2 components, got {len}")
            }
            SimError::InvalidParameter { name, value } => {
                write!(f, "parameter `{name}` must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for SimError {}
