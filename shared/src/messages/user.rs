// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the backend
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserData {
	#[serde(default)]
	pub name: String,
	pub email: String,
	pub username: String,
	#[serde(default)]
	pub role: Option<String>,
	#[serde(default)]
	pub is_staff: bool,
	#[serde(default)]
	pub is_superuser: bool,
}

impl UserData {
	/// Whether the user may use the admin console
	pub fn is_admin(&self) -> bool {
		self.username == "admin"
			|| matches!(self.role.as_deref(), Some("Admin") | Some("admin"))
			|| self.is_staff
			|| self.is_superuser
	}

	/// Gets the name to show for the user, falling back to the username when no name was set
	pub fn display_name(&self) -> &str {
		if self.name.is_empty() {
			&self.username
		} else {
			&self.name
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn user(username: &str) -> UserData {
		UserData {
			name: String::new(),
			email: String::from("jane@example.com"),
			username: String::from(username),
			role: None,
			is_staff: false,
			is_superuser: false,
		}
	}

	#[test]
	fn admin_detection() {
		assert!(!user("jane@example.com").is_admin());
		assert!(user("admin").is_admin());

		let mut staff = user("jane@example.com");
		staff.is_staff = true;
		assert!(staff.is_admin());

		let mut superuser = user("jane@example.com");
		superuser.is_superuser = true;
		assert!(superuser.is_admin());

		let mut role = user("jane@example.com");
		role.role = Some(String::from("Admin"));
		assert!(role.is_admin());
		role.role = Some(String::from("customer"));
		assert!(!role.is_admin());
	}

	#[test]
	fn current_user_response_parses() {
		let body = r#"{"name": "Jane", "email": "jane@example.com", "username": "jane@example.com"}"#;
		let data: UserData = serde_json::from_str(body).unwrap();
		assert_eq!(data.display_name(), "Jane");
		assert!(!data.is_admin());
	}

	#[test]
	fn display_name_falls_back_to_username() {
		assert_eq!(user("jane@example.com").display_name(), "jane@example.com");
	}
}
