// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core value types shared by the converters.
//!
//! These types validate and normalize the raw values that appear in
//! attribute reports and published state: percentages for position and
//! tilt, the open/close state, and the operating-mode flag set.

mod cover_mode;
mod cover_state;
mod percentage;

pub use cover_mode::CoverMode;
pub use cover_state::CoverState;
pub use percentage::Percentage;
