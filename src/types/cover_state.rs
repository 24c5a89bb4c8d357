// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover state type for open/close reporting.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The open/close state of a window covering.
///
/// A covering reports `Open` for any position short of fully closed; the
/// decoder derives this from the raw lift or tilt percentage, depending on
/// the model. Serialized as `"OPEN"` / `"CLOSE"`, the spelling hosts publish.
///
/// # Examples
///
/// ```
/// use zbcover_lib::CoverState;
///
/// let state: CoverState = "OPEN".parse().unwrap();
/// assert_eq!(state, CoverState::Open);
/// assert_eq!(state.as_str(), "OPEN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoverState {
    /// The covering is at least partly open.
    Open,
    /// The covering is fully closed.
    Close,
}

impl CoverState {
    /// Returns the state as an uppercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Close => "CLOSE",
        }
    }

    /// Returns `true` if the covering is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for CoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("OPEN") {
            Ok(Self::Open)
        } else if s.eq_ignore_ascii_case("CLOSE") {
            Ok(Self::Close)
        } else {
            Err(ValueError::InvalidCoverState(s.to_string()))
        }
    }
}
