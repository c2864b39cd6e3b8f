//! ID types for OpenF1 entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for a driver's permanent race number.
///
/// OpenF1 identifies competitors solely by this number; keeping it a distinct
/// type prevents mixing it up with positions or session keys.
///
/// # Examples
///
/// ```rust
/// use f1_cli::DriverNumber;
///
/// let number = DriverNumber::new(44);
/// assert_eq!(number.as_u32(), 44);
/// assert_eq!(number.to_string(), "44");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriverNumber(pub u32);

impl DriverNumber {
    /// Create a new DriverNumber from a u32 value.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DriverNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for OpenF1 session keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey(pub u32);

impl SessionKey {
    pub fn new(key: u32) -> Self {
        Self(key)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
