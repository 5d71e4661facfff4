//! Outcome reporting shared by every oracle entry point.
//!
//! Ordinary outcomes are returned as a [`Signal`]. Reaching a target is not
//! returned at all: the entry point panics with a [`TargetHit`] payload so
//! the fuzz driver records a crash.

use std::fmt;

/// Value returned by an oracle entry point that did not reach its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Signal {
    /// Input was malformed or did not match.
    NoMatch,
    /// Input was successfully parsed as a number, whether or not it matched.
    Parsed,
}

impl Signal {
    /// Returns the raw sentinel expected by go-fuzz style drivers.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::NoMatch => 0,
            Self::Parsed => 1,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => f.write_str("no_match"),
            Self::Parsed => f.write_str("parsed"),
        }
    }
}

/// Panic payload raised when an oracle's hidden condition is satisfied.
///
/// Carried through [`std::panic::panic_any`] so harnesses can tell a reached
/// target apart from any other panic by downcasting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TargetHit {
    /// Message naming what was found.
    pub message: &'static str,
}

impl fmt::Display for TargetHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Abort the current input: the target has been reached.
///
/// # Panics
/// Always panics with a [`TargetHit`] payload.
pub fn target_reached(message: &'static str) -> ! {
    tracing::warn!(message, "target reached");
    std::panic::panic_any(TargetHit { message })
}

/// Extract the [`TargetHit`] from a caught panic payload, if that is what it is.
#[must_use]
pub fn as_target_hit(payload: &(dyn std::any::Any + Send)) -> Option<TargetHit> {
    payload.downcast_ref::<TargetHit>().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_sentinels_match_driver_convention() {
        assert_eq!(Signal::NoMatch.as_raw(), 0);
        assert_eq!(Signal::Parsed.as_raw(), 1);
    }

    #[test]
    fn target_reached_payload_is_downcastable() {
        let caught = std::panic::catch_unwind(|| target_reached("found it"));
        let Err(payload) = caught else {
            panic!("target_reached must panic");
        };
        let hit = as_target_hit(payload.as_ref());
        assert_eq!(hit, Some(TargetHit { message: "found it" }));
    }

    #[test]
    fn ordinary_panic_is_not_a_target_hit() {
        let caught = std::panic::catch_unwind(|| panic!("unrelated bug"));
        let Err(payload) = caught else {
            panic!("closure must panic");
        };
        assert!(as_target_hit(payload.as_ref()).is_none());
    }

    #[test]
    fn signal_display_is_snake_case() {
        assert_eq!(Signal::NoMatch.to_string(), "no_match");
        assert_eq!(Signal::Parsed.to_string(), "parsed");
    }
}
