// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigDocument;
use miette::{IntoDiagnostic, Result};
use moringa_store_shared::login::{ADMIN_REDIRECT, HOME_REDIRECT, SIGN_IN_PAGE};
use moringa_store_shared::messages::config::ClientConfig;
use moringa_store_shared::registration::REGISTRATION_PAGE;
use std::path::Path;
use tide::{Body, Request, Response, Server, StatusCode};

/// Paths the client application routes itself. Loading any of them directly (a bookmark or a page refresh) has to
/// produce the application page.
pub const CLIENT_ROUTES: &[&str] = &["/", SIGN_IN_PAGE, REGISTRATION_PAGE, HOME_REDIRECT, ADMIN_REDIRECT];

pub const CLIENT_CONFIG_PATH: &str = "/config.json";

/// Sets up the web server that hosts the storefront client.
pub fn build_app(config: &ConfigDocument) -> Result<Server<ClientConfig>> {
	let static_directory = Path::new(&config.static_directory);
	let index_file = static_directory.join("index.html");

	let mut app = tide::with_state(config.client_config());
	app.at(CLIENT_CONFIG_PATH).get(client_config);
	for route in CLIENT_ROUTES {
		app.at(route).serve_file(&index_file).into_diagnostic()?;
	}
	app.at("/").serve_dir(static_directory).into_diagnostic()?;

	Ok(app)
}

async fn client_config(request: Request<ClientConfig>) -> tide::Result {
	let body = Body::from_json(request.state())?;
	Ok(Response::builder(StatusCode::Ok).body(body).build())
}

#[cfg(test)]
mod tests {
	use super::*;
	use moringa_store_shared::registration::REGISTRATION_COMPLETE_REDIRECT;
	use std::fs;
	use tempfile::TempDir;
	use tide::http::{Method, Request as HttpRequest, Response as HttpResponse, Url};

	const INDEX_CONTENTS: &str = "<!DOCTYPE html><html><body><script src=\"/app.js\"></script></body></html>";

	fn test_app() -> (TempDir, Server<ClientConfig>) {
		let static_directory = tempfile::tempdir().unwrap();
		fs::write(static_directory.path().join("index.html"), INDEX_CONTENTS).unwrap();
		fs::write(static_directory.path().join("app.js"), "console.log('store');").unwrap();

		let config = ConfigDocument {
			listen_address: String::from("127.0.0.1:0"),
			static_directory: static_directory.path().to_string_lossy().into_owned(),
			api_base_url: String::from("http://127.0.0.1:8000"),
		};
		let app = build_app(&config).unwrap();
		(static_directory, app)
	}

	async fn get(app: &Server<ClientConfig>, path: &str) -> HttpResponse {
		let url = Url::parse("http://localhost").unwrap().join(path).unwrap();
		app.respond(HttpRequest::new(Method::Get, url)).await.unwrap()
	}

	#[async_std::test]
	async fn client_routes_serve_index() {
		let (_static_directory, app) = test_app();
		for route in CLIENT_ROUTES {
			let mut response = get(&app, route).await;
			assert_eq!(response.status(), StatusCode::Ok, "route {}", route);
			assert_eq!(response.body_string().await.unwrap(), INDEX_CONTENTS);
		}
	}

	#[async_std::test]
	async fn client_navigation_targets_serve_index() {
		let (_static_directory, app) = test_app();
		for target in [
			REGISTRATION_COMPLETE_REDIRECT,
			HOME_REDIRECT,
			ADMIN_REDIRECT,
			SIGN_IN_PAGE,
			REGISTRATION_PAGE,
		] {
			let mut response = get(&app, target).await;
			assert_eq!(response.status(), StatusCode::Ok, "target {}", target);
			assert_eq!(response.body_string().await.unwrap(), INDEX_CONTENTS);
		}
	}

	#[async_std::test]
	async fn config_is_published() {
		let (_static_directory, app) = test_app();
		let mut response = get(&app, CLIENT_CONFIG_PATH).await;
		assert_eq!(response.status(), StatusCode::Ok);
		let config: ClientConfig = response.body_json().await.unwrap();
		assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
	}

	#[async_std::test]
	async fn assets_are_served() {
		let (_static_directory, app) = test_app();
		let mut response = get(&app, "/app.js").await;
		assert_eq!(response.status(), StatusCode::Ok);
		assert_eq!(response.body_string().await.unwrap(), "console.log('store');");

		let response = get(&app, "/missing.js").await;
		assert_eq!(response.status(), StatusCode::NotFound);
	}

	#[test]
	fn missing_static_directory_is_an_error() {
		let config = ConfigDocument {
			listen_address: String::from("127.0.0.1:0"),
			static_directory: String::from("/nonexistent/moringa-store-static"),
			api_base_url: String::from("http://127.0.0.1:8000"),
		};
		assert!(build_app(&config).is_err());
	}
}
