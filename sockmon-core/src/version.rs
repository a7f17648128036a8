//! Native library version gate.
//!
//! Monitor notifications are only emitted by library versions that carry the
//! socket-monitor event API. The gate runs before any I/O is attempted so an
//! old library fails fast instead of blocking on a channel that will never
//! produce the expected layout.

use std::fmt;

use crate::error::{MonitorError, Result};

/// Minimum library version that provides the monitor event API.
pub const MONITOR_API_MIN: Version = Version::new(4, 0, 0);

/// A native library version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl Version {
    /// Create a version triple.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Fail fast when this version predates `min`.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::UnsupportedFeature`] naming `feature` when
    /// `self < min`.
    pub fn require(self, min: Version, feature: &'static str) -> Result<()> {
        if self < min {
            return Err(MonitorError::UnsupportedFeature {
                feature,
                required: min,
                actual: self,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}
