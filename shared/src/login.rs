// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{ApiError, AuthApi};
use crate::messages::login::{LoginRequest, TokenPair};
use crate::messages::user::UserData;
use std::fmt;

pub const ADMIN_REDIRECT: &str = "/admin";
pub const HOME_REDIRECT: &str = "/home";
pub const SIGN_IN_PAGE: &str = "/login";

/// A user who has signed in, along with the tokens for their session
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedIn {
	pub user: UserData,
	pub tokens: TokenPair,
}

impl SignedIn {
	/// Gets the page the user should land on after signing in
	pub fn redirect_target(&self) -> &'static str {
		if self.user.is_admin() {
			ADMIN_REDIRECT
		} else {
			HOME_REDIRECT
		}
	}
}

/// Errors that can occur when signing in
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignInError {
	MissingUsername,
	MissingPassword,
	/// The credentials were refused or the user couldn't be loaded
	Backend(ApiError),
}

impl From<ApiError> for SignInError {
	fn from(error: ApiError) -> Self {
		Self::Backend(error)
	}
}

impl fmt::Display for SignInError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingUsername => write!(f, "Please enter your username"),
			Self::MissingPassword => write!(f, "Please enter your password"),
			// The backend's reason isn't shown so as not to reveal which part of the credentials was wrong
			Self::Backend(_) => write!(f, "Invalid username or password"),
		}
	}
}

impl std::error::Error for SignInError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Backend(error) => Some(error),
			_ => None,
		}
	}
}

/// Signs in with a username and password, then loads the user the issued tokens belong to.
///
/// # Errors
///
/// Empty credentials fail without contacting the backend. Any failure from the backend, either at login or when
/// loading the user, is reported as [`SignInError::Backend`].
pub async fn sign_in<A: AuthApi + ?Sized>(api: &A, credentials: &LoginRequest) -> Result<SignedIn, SignInError> {
	if credentials.username.trim().is_empty() {
		return Err(SignInError::MissingUsername);
	}
	if credentials.password.is_empty() {
		return Err(SignInError::MissingPassword);
	}

	let tokens = api.login(credentials).await?;
	let signed_in = load_user(api, tokens).await?;
	log::debug!("Signed in as {}", signed_in.user.username);
	Ok(signed_in)
}

/// Loads the user for a token pair the backend already issued, such as the one returned on registration.
///
/// # Errors
///
/// Fails when the backend doesn't accept the access token or can't be reached.
pub async fn load_user<A: AuthApi + ?Sized>(api: &A, tokens: TokenPair) -> Result<SignedIn, ApiError> {
	let user = api.current_user(&tokens.access).await?;
	Ok(SignedIn { user, tokens })
}
