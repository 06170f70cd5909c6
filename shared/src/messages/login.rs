// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LoginRequest {
	pub username: String,
	pub password: String,
}

/// Bearer tokens issued by the backend on login
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TokenPair {
	pub access: String,
	pub refresh: String,
}
