// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Data from the client when creating an account for a verified email address
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterRequest {
	pub email: String,
	pub name: String,
	pub password: String,
}

/// Response data from the backend for a successful registration.
///
/// The backend includes a token pair so the new account can be signed in immediately. Every field is optional so
/// that an account response without tokens still counts as a success.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisteredAccount {
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub access: Option<String>,
	#[serde(default)]
	pub refresh: Option<String>,
}

impl RegisteredAccount {
	/// Gets the access token issued with the account, if the backend issued one
	pub fn access_token(&self) -> Option<&str> {
		self.access.as_deref().filter(|token| !token.is_empty())
	}
}
