// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![allow(dead_code)]

use async_trait::async_trait;
use moringa_store_shared::api::{ApiError, AuthApi};
use moringa_store_shared::messages::login::{LoginRequest, TokenPair};
use moringa_store_shared::messages::otp::{SendOtpRequest, VerifyOtpRequest};
use moringa_store_shared::messages::user::UserData;
use moringa_store_shared::messages::user_register::{RegisterRequest, RegisteredAccount};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A request the scripted backend received
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
	SendOtp(SendOtpRequest),
	VerifyOtp(VerifyOtpRequest),
	Register(RegisterRequest),
	Login(LoginRequest),
	CurrentUser(String),
}

/// A backend that answers from queues of prepared responses and records every request it gets.
///
/// An endpoint with nothing queued answers with a transport error.
#[derive(Default)]
pub struct ScriptedApi {
	calls: RefCell<Vec<Call>>,
	send_otp: RefCell<VecDeque<Result<(), ApiError>>>,
	verify_otp: RefCell<VecDeque<Result<(), ApiError>>>,
	register: RefCell<VecDeque<Result<RegisteredAccount, ApiError>>>,
	login: RefCell<VecDeque<Result<TokenPair, ApiError>>>,
	current_user: RefCell<VecDeque<Result<UserData, ApiError>>>,
}

fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
	queue
		.borrow_mut()
		.pop_front()
		.unwrap_or_else(|| Err(ApiError::Transport(String::from("no scripted response"))))
}

impl ScriptedApi {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}

	pub fn on_send_otp(&self, response: Result<(), ApiError>) -> &Self {
		self.send_otp.borrow_mut().push_back(response);
		self
	}

	pub fn on_verify_otp(&self, response: Result<(), ApiError>) -> &Self {
		self.verify_otp.borrow_mut().push_back(response);
		self
	}

	pub fn on_register(&self, response: Result<RegisteredAccount, ApiError>) -> &Self {
		self.register.borrow_mut().push_back(response);
		self
	}

	pub fn on_login(&self, response: Result<TokenPair, ApiError>) -> &Self {
		self.login.borrow_mut().push_back(response);
		self
	}

	pub fn on_current_user(&self, response: Result<UserData, ApiError>) -> &Self {
		self.current_user.borrow_mut().push_back(response);
		self
	}
}

#[async_trait(?Send)]
impl AuthApi for ScriptedApi {
	async fn send_otp(&self, request: &SendOtpRequest) -> Result<(), ApiError> {
		self.calls.borrow_mut().push(Call::SendOtp(request.clone()));
		next(&self.send_otp)
	}

	async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<(), ApiError> {
		self.calls.borrow_mut().push(Call::VerifyOtp(request.clone()));
		next(&self.verify_otp)
	}

	async fn register(&self, request: &RegisterRequest) -> Result<RegisteredAccount, ApiError> {
		self.calls.borrow_mut().push(Call::Register(request.clone()));
		next(&self.register)
	}

	async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError> {
		self.calls.borrow_mut().push(Call::Login(request.clone()));
		next(&self.login)
	}

	async fn current_user(&self, access_token: &str) -> Result<UserData, ApiError> {
		self.calls.borrow_mut().push(Call::CurrentUser(access_token.to_owned()));
		next(&self.current_user)
	}
}

/// A 400 answer whose body is `{"error": message}`, as the backend sends it
pub fn rejected(message: &str) -> ApiError {
	let body = serde_json::json!({ "error": message });
	ApiError::from_status_and_body(400, &body.to_string())
}

pub fn user(username: &str, is_staff: bool) -> UserData {
	UserData {
		name: String::from("Jane"),
		email: String::from("a@b.com"),
		username: String::from(username),
		role: None,
		is_staff,
		is_superuser: false,
	}
}
