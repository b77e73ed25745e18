//! The five operator actions
//!
//! A transition names what the operator asked for; the sheet stores the
//! Korean token. `FromStr` accepts either the token or an ASCII alias so the
//! CLI stays typeable without a Korean input method.

use dorm_table::status;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the five status-change actions applicable to a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// `초기화` — wipe status and history, keep occupant and room
    Reset,
    /// `신규` — new check-in under the given name
    NewCheckIn,
    /// `외박` — overnight leave for the given name
    OvernightLeave,
    /// `퇴소` — check-out, vacating the room
    CheckOut,
    /// `이동` — relocate the occupant to a target room
    Move,
}

impl Transition {
    /// The sheet token this transition writes into the `status` column
    ///
    /// `Reset` and `Move` clear the origin's status instead of writing their
    /// own token; this is the token as the operator selects it.
    #[inline]
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Reset => "초기화",
            Self::NewCheckIn => status::NEW,
            Self::OvernightLeave => status::LEAVE,
            Self::CheckOut => status::CHECKOUT,
            Self::Move => status::MOVED,
        }
    }

    /// ASCII alias accepted on the command line
    #[inline]
    #[must_use]
    pub fn alias(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::NewCheckIn => "new",
            Self::OvernightLeave => "leave",
            Self::CheckOut => "checkout",
            Self::Move => "move",
        }
    }

    /// All transitions in the order the operator sees them
    #[inline]
    #[must_use]
    pub fn all() -> [Transition; 5] {
        [
            Self::CheckOut,
            Self::OvernightLeave,
            Self::Move,
            Self::NewCheckIn,
            Self::Reset,
        ]
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Transition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|t| t.token() == s || t.alias() == s)
            .ok_or_else(|| format!("unknown transition: '{s}'"))
    }
}
