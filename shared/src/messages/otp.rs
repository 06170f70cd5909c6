// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Asks the backend to email a one-time code to the given address
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SendOtpRequest {
	pub email: String,
}

/// Checks a one-time code the user received for an email address
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VerifyOtpRequest {
	pub email: String,
	pub otp: String,
}
