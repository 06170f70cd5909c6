// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The account registration wizard.
//!
//! Registration happens in three steps: the user enters an email address and receives a one-time code, enters that
//! code to prove they own the address, and then fills in their name and password to create the account.
//!
//! [`RegistrationSession`] holds the state of one attempt. It doesn't do any I/O itself; [`RegistrationSession::begin`]
//! turns a user action into the request to send, and [`RegistrationSession::finish`] applies the backend's answer. This
//! lets a UI keep the session in a signal without holding a borrow across the request. Callers that can hold the
//! session for the whole exchange can use [`RegistrationSession::step`] instead.

use crate::api::{ApiError, AuthApi};
use crate::login::HOME_REDIRECT;
use crate::messages::otp::{SendOtpRequest, VerifyOtpRequest};
use crate::messages::user_register::{RegisterRequest, RegisteredAccount};

pub const REGISTRATION_PAGE: &str = "/register";

/// Where the browser goes once the account is created
pub const REGISTRATION_COMPLETE_REDIRECT: &str = HOME_REDIRECT;

pub const EMAIL_REQUIRED_MESSAGE: &str = "Please enter your email address";
pub const CODE_REQUIRED_MESSAGE: &str = "Please enter the verification code";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

const SEND_CODE_FAILED_MESSAGE: &str = "Failed to send OTP";
const INVALID_CODE_MESSAGE: &str = "Invalid OTP";
const VERIFY_CODE_FAILED_MESSAGE: &str = "Failed to verify OTP";
const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// The step of the wizard the user is on
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Phase {
	AwaitingEmail,
	/// A code was sent to the address
	AwaitingCode { email: String },
	/// The address is verified and the account can be created
	AwaitingProfile { email: String },
}

impl Phase {
	/// Gets the email address the session is working with. There isn't one until a code was sent.
	pub fn email(&self) -> Option<&str> {
		match self {
			Self::AwaitingEmail => None,
			Self::AwaitingCode { email } | Self::AwaitingProfile { email } => Some(email),
		}
	}
}

/// The account details entered in the final step
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProfileForm {
	pub display_name: String,
	pub password: String,
	pub password_confirmation: String,
}

/// Something the user did on the registration page
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationAction {
	SubmitEmail(String),
	SubmitCode(String),
	ResendCode,
	SubmitProfile(ProfileForm),
}

/// Identifies a request sent on behalf of a session
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RequestTicket(u64);

/// A request to the backend produced by a user action
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationRequest {
	SendCode(SendOtpRequest),
	ResendCode(SendOtpRequest),
	VerifyCode(VerifyOtpRequest),
	CreateAccount(RegisterRequest),
}

impl RegistrationRequest {
	/// Sends the request through the backend API.
	///
	/// # Errors
	///
	/// Passes on whatever error the API reports; the session turns it into a message in
	/// [`RegistrationSession::finish`].
	pub async fn dispatch<A: AuthApi + ?Sized>(&self, api: &A) -> Result<RegistrationReply, ApiError> {
		match self {
			Self::SendCode(request) | Self::ResendCode(request) => {
				api.send_otp(request).await?;
				Ok(RegistrationReply::CodeSent)
			}
			Self::VerifyCode(request) => {
				api.verify_otp(request).await?;
				Ok(RegistrationReply::CodeVerified)
			}
			Self::CreateAccount(request) => Ok(RegistrationReply::AccountCreated(api.register(request).await?)),
		}
	}
}

/// A successful answer from the backend
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationReply {
	CodeSent,
	CodeVerified,
	AccountCreated(RegisteredAccount),
}

/// A request that should be sent, along with the ticket to finish it with
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutgoingRequest {
	pub ticket: RequestTicket,
	pub request: RegistrationRequest,
}

/// The result of starting an action
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Begin {
	/// The action passed its checks and the request should be sent
	Send(OutgoingRequest),
	/// The input failed a local check. The reason is in [`RegistrationSession::last_error`].
	Invalid,
	/// The action doesn't apply right now: another request is in flight, the session is on a different step, or
	/// registration already finished.
	Ignored,
}

/// What happened to the session as the result of an action
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Progress {
	/// The session moved to the next phase
	Advanced,
	/// Another code was sent to the same address
	CodeResent,
	/// The account was created. The caller should take the browser to `redirect_to`.
	Registered {
		account: RegisteredAccount,
		redirect_to: &'static str,
	},
	/// The backend rejected the request or couldn't be reached. The reason is in
	/// [`RegistrationSession::last_error`].
	Failed,
	/// The input failed a local check and nothing was sent
	Invalid,
	/// Nothing happened; see [`Begin::Ignored`]
	Ignored,
	/// The answer was for a request the session is no longer waiting on
	Stale,
}

#[derive(Clone, Debug)]
enum PendingKind {
	SendCode { email: String },
	ResendCode,
	VerifyCode { email: String },
	CreateAccount,
}

#[derive(Clone, Debug)]
struct PendingRequest {
	ticket: RequestTicket,
	kind: PendingKind,
}

/// The in-memory state of one registration attempt
#[derive(Clone, Debug)]
pub struct RegistrationSession {
	phase: Phase,
	pending: Option<PendingRequest>,
	next_ticket: u64,
	last_error: Option<String>,
	complete: bool,
}

impl Default for RegistrationSession {
	fn default() -> Self {
		Self::new()
	}
}

impl RegistrationSession {
	pub fn new() -> Self {
		Self {
			phase: Phase::AwaitingEmail,
			pending: None,
			next_ticket: 0,
			last_error: None,
			complete: false,
		}
	}

	pub fn phase(&self) -> &Phase {
		&self.phase
	}

	pub fn email(&self) -> Option<&str> {
		self.phase.email()
	}

	/// Whether a request is in flight. No other action is accepted until it's finished.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Gets the message describing why the last attempt failed
	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	/// Whether the account has been created
	pub fn is_complete(&self) -> bool {
		self.complete
	}

	/// Checks an action against the current state and produces the request it needs.
	///
	/// The previous error is cleared when an action is accepted. Local checks (an empty email or code, or a
	/// password confirmation that doesn't match) fail without producing a request.
	pub fn begin(&mut self, action: RegistrationAction) -> Begin {
		if self.pending.is_some() || self.complete {
			return Begin::Ignored;
		}

		let (kind, request) = match (&self.phase, action) {
			(Phase::AwaitingEmail, RegistrationAction::SubmitEmail(email)) => {
				self.last_error = None;
				let email = email.trim();
				if email.is_empty() {
					self.last_error = Some(String::from(EMAIL_REQUIRED_MESSAGE));
					return Begin::Invalid;
				}
				let email = email.to_owned();
				(
					PendingKind::SendCode { email: email.clone() },
					RegistrationRequest::SendCode(SendOtpRequest { email }),
				)
			}
			(Phase::AwaitingCode { email }, RegistrationAction::SubmitCode(code)) => {
				self.last_error = None;
				let code = code.trim();
				if code.is_empty() {
					self.last_error = Some(String::from(CODE_REQUIRED_MESSAGE));
					return Begin::Invalid;
				}
				let request = VerifyOtpRequest {
					email: email.clone(),
					otp: code.to_owned(),
				};
				(
					PendingKind::VerifyCode { email: email.clone() },
					RegistrationRequest::VerifyCode(request),
				)
			}
			(Phase::AwaitingCode { email }, RegistrationAction::ResendCode) => {
				self.last_error = None;
				let request = SendOtpRequest { email: email.clone() };
				(PendingKind::ResendCode, RegistrationRequest::ResendCode(request))
			}
			(Phase::AwaitingProfile { email }, RegistrationAction::SubmitProfile(profile)) => {
				self.last_error = None;
				if profile.password != profile.password_confirmation {
					self.last_error = Some(String::from(PASSWORD_MISMATCH_MESSAGE));
					return Begin::Invalid;
				}
				let request = RegisterRequest {
					email: email.clone(),
					name: profile.display_name,
					password: profile.password,
				};
				(PendingKind::CreateAccount, RegistrationRequest::CreateAccount(request))
			}
			_ => return Begin::Ignored,
		};

		let ticket = RequestTicket(self.next_ticket);
		self.next_ticket += 1;
		self.pending = Some(PendingRequest { ticket, kind });

		Begin::Send(OutgoingRequest { ticket, request })
	}

	/// Applies the backend's answer to the request with the given ticket.
	pub fn finish(&mut self, ticket: RequestTicket, reply: Result<RegistrationReply, ApiError>) -> Progress {
		let pending = match self.pending.take() {
			Some(pending) if pending.ticket == ticket => pending,
			other => {
				self.pending = other;
				log::warn!("Dropping a registration response for request {:?} that is no longer pending", ticket);
				return Progress::Stale;
			}
		};

		let error = match (pending.kind, reply) {
			(PendingKind::SendCode { email }, Ok(RegistrationReply::CodeSent)) => {
				log::debug!("Verification code sent; waiting for the code");
				self.phase = Phase::AwaitingCode { email };
				return Progress::Advanced;
			}
			(PendingKind::ResendCode, Ok(RegistrationReply::CodeSent)) => {
				log::debug!("Verification code sent again");
				return Progress::CodeResent;
			}
			(PendingKind::VerifyCode { email }, Ok(RegistrationReply::CodeVerified)) => {
				log::debug!("Email address verified; waiting for profile details");
				self.phase = Phase::AwaitingProfile { email };
				return Progress::Advanced;
			}
			(PendingKind::CreateAccount, Ok(RegistrationReply::AccountCreated(account))) => {
				log::debug!("Account created");
				self.complete = true;
				return Progress::Registered {
					account,
					redirect_to: REGISTRATION_COMPLETE_REDIRECT,
				};
			}
			(PendingKind::SendCode { .. } | PendingKind::ResendCode, Err(error)) => {
				failure_message(&error, SEND_CODE_FAILED_MESSAGE, SEND_CODE_FAILED_MESSAGE)
			}
			(PendingKind::VerifyCode { .. }, Err(error)) => {
				failure_message(&error, INVALID_CODE_MESSAGE, VERIFY_CODE_FAILED_MESSAGE)
			}
			(PendingKind::CreateAccount, Err(error)) => {
				failure_message(&error, REGISTRATION_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE)
			}
			(kind, Ok(reply)) => {
				log::error!("Received {:?} in response to a {:?} request", reply, kind);
				String::from(match kind {
					PendingKind::SendCode { .. } | PendingKind::ResendCode => SEND_CODE_FAILED_MESSAGE,
					PendingKind::VerifyCode { .. } => VERIFY_CODE_FAILED_MESSAGE,
					PendingKind::CreateAccount => REGISTRATION_FAILED_MESSAGE,
				})
			}
		};

		self.last_error = Some(error);
		Progress::Failed
	}

	/// Runs an action from start to finish against the backend.
	pub async fn step<A: AuthApi + ?Sized>(&mut self, api: &A, action: RegistrationAction) -> Progress {
		match self.begin(action) {
			Begin::Send(outgoing) => {
				let reply = outgoing.request.dispatch(api).await;
				self.finish(outgoing.ticket, reply)
			}
			Begin::Invalid => Progress::Invalid,
			Begin::Ignored => Progress::Ignored,
		}
	}
}

/// Picks the message to show for a failed request: the backend's own message for a rejection if it gave one, and
/// otherwise the generic message for the kind of failure.
fn failure_message(error: &ApiError, rejected_fallback: &str, transport_fallback: &str) -> String {
	match error {
		ApiError::Rejected { message: Some(message), .. } => message.clone(),
		ApiError::Rejected { message: None, .. } => String::from(rejected_fallback),
		ApiError::Transport(_) => String::from(transport_fallback),
	}
}
