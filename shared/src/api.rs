// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::error_message;
use crate::messages::login::{LoginRequest, TokenPair};
use crate::messages::otp::{SendOtpRequest, VerifyOtpRequest};
use crate::messages::user::UserData;
use crate::messages::user_register::{RegisterRequest, RegisteredAccount};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

pub const SEND_OTP_PATH: &str = "/send-otp/";
pub const VERIFY_OTP_PATH: &str = "/verify-otp/";
pub const REGISTER_PATH: &str = "/register/";
pub const LOGIN_PATH: &str = "/login/";
pub const CURRENT_USER_PATH: &str = "/user/";

/// Errors that can occur when talking to the storefront backend
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApiError {
	/// The backend answered with a non-success status. The message is the one found in the response body, if any.
	Rejected { status: u16, message: Option<String> },
	/// The request never got a usable answer: the connection failed or the response couldn't be read.
	Transport(String),
}

impl ApiError {
	/// Builds the error for a response the backend answered with a non-success status.
	///
	/// A JSON body makes this a rejection carrying whatever message the body holds. A body that isn't JSON (an HTML
	/// error page from a proxy, or nothing at all) means the backend never produced an answer of its own, so it's
	/// treated the same as a failed connection.
	pub fn from_status_and_body(status: u16, body: &str) -> Self {
		match serde_json::from_str::<Value>(body) {
			Ok(body) => Self::Rejected {
				status,
				message: error_message(&body),
			},
			Err(error) => Self::Transport(format!("unreadable response with status {}: {}", status, error)),
		}
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rejected {
				status,
				message: Some(message),
			} => write!(f, "The server rejected the request ({}): {}", status, message),
			Self::Rejected { status, message: None } => write!(f, "The server rejected the request ({})", status),
			Self::Transport(error) => write!(f, "Failed to communicate with the server: {}", error),
		}
	}
}

impl std::error::Error for ApiError {}

/// The account endpoints of the storefront backend.
///
/// Browser futures aren't `Send`, so neither are these.
#[async_trait(?Send)]
pub trait AuthApi {
	/// `POST /send-otp/`: emails a one-time code to the address
	async fn send_otp(&self, request: &SendOtpRequest) -> Result<(), ApiError>;

	/// `POST /verify-otp/`: checks a one-time code
	async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<(), ApiError>;

	/// `POST /register/`: creates the account for a verified address
	async fn register(&self, request: &RegisterRequest) -> Result<RegisteredAccount, ApiError>;

	/// `POST /login/`: exchanges credentials for a token pair
	async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError>;

	/// `GET /user/`: loads the user the access token belongs to
	async fn current_user(&self, access_token: &str) -> Result<UserData, ApiError>;
}
