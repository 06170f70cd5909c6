// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knuffel::Decode;
use miette::{IntoDiagnostic, Result};
use moringa_store_shared::messages::config::ClientConfig;
use std::fs;

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	/// Address and port to serve the storefront on
	#[knuffel(child, unwrap(argument))]
	pub listen_address: String,
	/// Directory holding the built client (`index.html`, scripts, and the WebAssembly module)
	#[knuffel(child, unwrap(argument))]
	pub static_directory: String,
	/// Base URL of the storefront backend the client talks to
	#[knuffel(child, unwrap(argument))]
	pub api_base_url: String,
}

impl ConfigDocument {
	pub fn client_config(&self) -> ClientConfig {
		ClientConfig {
			api_base_url: self.api_base_url.clone(),
		}
	}
}

pub fn parse_config(config_path: &str) -> Result<ConfigDocument> {
	let config_file_contents = fs::read_to_string(config_path).into_diagnostic()?;
	parse_config_document(config_path, &config_file_contents)
}

fn parse_config_document(file_name: &str, contents: &str) -> Result<ConfigDocument> {
	let config = knuffel::parse(file_name, contents)?;
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_full_config() {
		let contents = r#"
			listen-address "0.0.0.0:8080"
			static-directory "client/dist"
			api-base-url "http://127.0.0.1:8000"
		"#;
		let config = parse_config_document("config.kdl", contents).unwrap();
		assert_eq!(config.listen_address, "0.0.0.0:8080");
		assert_eq!(config.static_directory, "client/dist");
		assert_eq!(config.client_config().api_base_url, "http://127.0.0.1:8000");
	}

	#[test]
	fn missing_backend_url_is_an_error() {
		let contents = r#"
			listen-address "0.0.0.0:8080"
			static-directory "client/dist"
		"#;
		assert!(parse_config_document("config.kdl", contents).is_err());
	}
}
