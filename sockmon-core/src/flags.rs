//! Receive flags passed through to the socket collaborator.

use std::ops::BitOr;

/// Bitfield of receive flags.
///
/// The flags are forwarded verbatim to the underlying receive primitive,
/// which decides how to honor them; this layer never interprets them beyond
/// forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecvFlags(i32);

impl RecvFlags {
    /// No flags; default blocking semantics.
    pub const NONE: Self = Self(0);

    /// Request non-blocking receive; the collaborator reports
    /// `WouldBlock` when no message is queued.
    pub const DONTWAIT: Self = Self(1);

    /// The raw flag bits.
    #[must_use]
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// True if all bits of `other` are set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RecvFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(RecvFlags::default(), RecvFlags::NONE);
        assert!(!RecvFlags::NONE.contains(RecvFlags::DONTWAIT));
    }

    #[test]
    fn test_bitor_and_contains() {
        let flags = RecvFlags::NONE | RecvFlags::DONTWAIT;
        assert!(flags.contains(RecvFlags::DONTWAIT));
        assert_eq!(flags.bits(), 1);
    }
}
