//! Distribution strategy domain.
//!
//! Wire values are the literal strings the form collaborator sends:
//! `"allocate by priority"` and `"allocate by pages"`. Parsing is lenient by
//! contract: only a (trimmed, case-insensitive) match on the pages string
//! selects `ByPages`; every other value falls back to `ByPriority`.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AllocationMethod {
    /// Walk the pool in original input order (the default).
    #[default]
    ByPriority,
    /// Stable-sort the pool by pages descending before the requester walk.
    ByPages,
}

impl AllocationMethod {
    /// Lenient wire parsing; unrecognized/empty input maps to `ByPriority`.
    pub fn from_wire(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("allocate by pages") {
            AllocationMethod::ByPages
        } else {
            AllocationMethod::ByPriority
        }
    }

    pub fn as_wire_str(self) -> &'static str {
        match self {
            AllocationMethod::ByPriority => "allocate by priority",
            AllocationMethod::ByPages => "allocate by pages",
        }
    }
}

impl fmt::Display for AllocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_matches_case_insensitive_trimmed() {
        assert_eq!(AllocationMethod::from_wire("  Allocate By PAGES "), AllocationMethod::ByPages);
    }

    #[test]
    fn anything_else_falls_back_to_priority() {
        assert_eq!(AllocationMethod::from_wire(""), AllocationMethod::ByPriority);
        assert_eq!(AllocationMethod::from_wire("allocate by priority"), AllocationMethod::ByPriority);
        assert_eq!(AllocationMethod::from_wire("round robin"), AllocationMethod::ByPriority);
    }

    #[test]
    fn wire_round_trip() {
        for m in [AllocationMethod::ByPriority, AllocationMethod::ByPages] {
            assert_eq!(AllocationMethod::from_wire(m.as_wire_str()), m);
        }
    }
}
