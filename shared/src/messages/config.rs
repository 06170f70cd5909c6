// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Runtime settings the storefront host hands to the browser client
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClientConfig {
	pub api_base_url: String,
}

impl ClientConfig {
	/// Builds the full URL of a backend endpoint. Endpoint paths start with a slash.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
	}
}
