// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use moringa_store_shared::api::{
	ApiError, AuthApi, CURRENT_USER_PATH, LOGIN_PATH, REGISTER_PATH, SEND_OTP_PATH, VERIFY_OTP_PATH,
};
use moringa_store_shared::messages::config::ClientConfig;
use moringa_store_shared::messages::login::{LoginRequest, TokenPair};
use moringa_store_shared::messages::otp::{SendOtpRequest, VerifyOtpRequest};
use moringa_store_shared::messages::user::UserData;
use moringa_store_shared::messages::user_register::{RegisterRequest, RegisteredAccount};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

const CONFIG_PATH: &str = "/config.json";

/// Errors that can occur when loading the client configuration from the host
pub enum ConfigLoadError {
	Request(gloo_net::Error),
	Status(u16),
}

impl fmt::Display for ConfigLoadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "{}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
		}
	}
}

impl From<gloo_net::Error> for ConfigLoadError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

/// Loads the client configuration published by the host that served this application.
///
/// # Errors
///
/// Errors occur when the request fails, when the host doesn't answer with success, and when the response isn't a
/// valid configuration document.
pub async fn load_client_config() -> Result<ClientConfig, ConfigLoadError> {
	let response = Request::get(CONFIG_PATH).send().await?;
	if !response.ok() {
		return Err(ConfigLoadError::Status(response.status()));
	}
	Ok(response.json().await?)
}

fn transport_error(error: gloo_net::Error) -> ApiError {
	ApiError::Transport(error.to_string())
}

/// Turns a backend response into its data, or into the error the body describes.
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
	if response.ok() {
		return response.json().await.map_err(transport_error);
	}
	Err(rejection(response).await)
}

/// Checks a backend response where only the status matters.
async fn check_response(response: Response) -> Result<(), ApiError> {
	if response.ok() {
		return Ok(());
	}
	Err(rejection(response).await)
}

async fn rejection(response: Response) -> ApiError {
	let status = response.status();
	let error = match response.text().await {
		Ok(body) => ApiError::from_status_and_body(status, &body),
		Err(error) => transport_error(error),
	};
	log::warn!("Backend request failed with status {}: {}", status, error);
	error
}

/// Talks to the storefront backend over HTTP from the browser
#[derive(Clone)]
pub struct HttpAuthApi {
	config: ClientConfig,
}

impl HttpAuthApi {
	pub fn new(config: ClientConfig) -> Self {
		Self { config }
	}

	async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
		let url = self.config.endpoint(path);
		log::debug!("POST {}", url);
		let request = Request::post(&url).json(body).map_err(transport_error)?;
		request.send().await.map_err(|error| {
			log::error!("Request to {} failed: {}", url, error);
			transport_error(error)
		})
	}
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
	async fn send_otp(&self, request: &SendOtpRequest) -> Result<(), ApiError> {
		check_response(self.post(SEND_OTP_PATH, request).await?).await
	}

	async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<(), ApiError> {
		check_response(self.post(VERIFY_OTP_PATH, request).await?).await
	}

	async fn register(&self, request: &RegisterRequest) -> Result<RegisteredAccount, ApiError> {
		read_response(self.post(REGISTER_PATH, request).await?).await
	}

	async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError> {
		read_response(self.post(LOGIN_PATH, request).await?).await
	}

	async fn current_user(&self, access_token: &str) -> Result<UserData, ApiError> {
		let url = self.config.endpoint(CURRENT_USER_PATH);
		log::debug!("GET {}", url);
		let response = Request::get(&url)
			.header("Authorization", &format!("Bearer {}", access_token))
			.send()
			.await
			.map_err(transport_error)?;
		read_response(response).await
	}
}
