// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_json::Value;

pub mod config;
pub mod login;
pub mod otp;
pub mod product;
pub mod user;
pub mod user_register;

/// Pulls a human-readable message out of a JSON error body from the backend.
///
/// The backend answers most rejections with `{ "error": "..." }`, but validation failures come back as an object
/// mapping field names to lists of messages (`{ "email": ["Enter a valid email address."] }`). For those, the first
/// message in the order the backend sent the fields is used. Bodies that aren't objects or carry no usable message
/// produce `None`.
pub fn error_message(body: &Value) -> Option<String> {
	let Value::Object(fields) = body else {
		return None;
	};

	if let Some(Value::String(message)) = fields.get("error") {
		if !message.is_empty() {
			return Some(message.clone());
		}
	}

	// Validation errors not attached to a field are reported under this key, and they read better without a prefix
	if let Some(message) = first_message(fields.get("non_field_errors")) {
		return Some(message);
	}

	fields.values().find_map(|value| first_message(Some(value)))
}

fn first_message(value: Option<&Value>) -> Option<String> {
	match value? {
		Value::String(message) if !message.is_empty() => Some(message.clone()),
		Value::Array(messages) => messages.iter().find_map(|message| match message {
			Value::String(message) if !message.is_empty() => Some(message.clone()),
			_ => None,
		}),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn message_in(body: &str) -> Option<String> {
		let body: Value = serde_json::from_str(body).unwrap();
		error_message(&body)
	}

	#[test]
	fn error_field_is_preferred() {
		let body = r#"{"error": "bad email", "email": ["Enter a valid email address."]}"#;
		assert_eq!(message_in(body).as_deref(), Some("bad email"));
	}

	#[test]
	fn field_errors_use_first_message() {
		let body = r#"{"email": ["Enter a valid email address.", "Too long."]}"#;
		assert_eq!(message_in(body).as_deref(), Some("Enter a valid email address."));
	}

	#[test]
	fn field_errors_keep_the_order_they_were_sent_in() {
		let body = r#"{"password": ["This password is too short."], "email": ["Enter a valid email address."]}"#;
		assert_eq!(message_in(body).as_deref(), Some("This password is too short."));
	}

	#[test]
	fn non_field_errors_are_used() {
		let body = r#"{"email": ["Enter a valid email address."], "non_field_errors": ["Email not verified with OTP."]}"#;
		assert_eq!(message_in(body).as_deref(), Some("Email not verified with OTP."));
	}

	#[test]
	fn bodies_without_a_message() {
		assert_eq!(message_in(r#"["bad"]"#), None);
		assert_eq!(message_in(r#"{"error": ""}"#), None);
		assert_eq!(message_in(r#"{"detail": 5}"#), None);
		assert_eq!(message_in("{}"), None);
	}
}
