// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::HttpAuthApi;
use crate::components::password_field::PasswordField;
use crate::page_utils::set_page_title;
use crate::signals::{show_toast, AppSignals};
use moringa_store_shared::login::{load_user, HOME_REDIRECT, SIGN_IN_PAGE};
use moringa_store_shared::messages::login::TokenPair;
use moringa_store_shared::messages::user_register::RegisteredAccount;
use moringa_store_shared::registration::{
	Begin, Phase, ProfileForm, Progress, RegistrationAction, RegistrationSession,
};
use moringa_store_shared::toast::ToastKind;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

/// Signs in the account that was just created, if the backend issued tokens for it
async fn sign_in_new_account(ctx: Scope<'_>, account: RegisteredAccount) {
	let (Some(access), Some(refresh)) = (account.access_token(), account.refresh.as_deref()) else {
		log::debug!("Registration response had no tokens; the new user will need to sign in");
		return;
	};
	let tokens = TokenPair {
		access: access.to_owned(),
		refresh: refresh.to_owned(),
	};
	let api: &HttpAuthApi = use_context(ctx);
	match load_user(api, tokens).await {
		Ok(signed_in) => {
			let signals: &AppSignals = use_context(ctx);
			signals.user.set(Some(signed_in));
		}
		Err(error) => {
			log::warn!("Failed to load the newly registered user: {}", error);
			show_toast(
				ctx,
				"Your account was created, but you'll need to sign in.",
				ToastKind::Info,
			);
		}
	}
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");
	set_page_title("Create Account | Moringa Store");

	{
		let signals: &AppSignals = use_context(ctx);
		if signals.user.get().is_some() {
			spawn_local_scoped(ctx, async {
				navigate(HOME_REDIRECT);
			});
			return view! { ctx, };
		}
	}

	let session = create_signal(ctx, RegistrationSession::new());
	let phase = create_memo(ctx, || session.get().phase().clone());
	let pending = create_memo(ctx, || session.get().is_pending());
	let last_error = create_memo(ctx, || session.get().last_error().map(String::from));

	let email_entry = create_signal(ctx, String::new());
	let code_entry = create_signal(ctx, String::new());
	let name_entry = create_signal(ctx, String::new());
	let password_entry = create_signal(ctx, String::new());
	let confirmation_entry = create_signal(ctx, String::new());

	let heading = create_memo(ctx, || match *phase.get() {
		Phase::AwaitingEmail => "Verify Email",
		Phase::AwaitingCode { .. } => "Enter OTP",
		Phase::AwaitingProfile { .. } => "Create Account",
	});
	let subheading = create_memo(ctx, || match *phase.get() {
		Phase::AwaitingEmail => "We'll send you a verification code",
		Phase::AwaitingCode { .. } => "Check your email for the OTP",
		Phase::AwaitingProfile { .. } => "Complete your registration",
	});

	// Every form on this page goes through here. The session decides whether the action can be sent; anything sent
	// is applied back to the session when the backend answers.
	let run_action = move |action: RegistrationAction| {
		let outgoing = match session.modify().begin(action) {
			Begin::Send(outgoing) => outgoing,
			Begin::Invalid | Begin::Ignored => return,
		};

		spawn_local_scoped(ctx, async move {
			let api: &HttpAuthApi = use_context(ctx);
			let reply = outgoing.request.dispatch(api).await;
			let progress = session.modify().finish(outgoing.ticket, reply);

			match progress {
				Progress::Advanced => code_entry.set(String::new()),
				Progress::CodeResent => {
					let email = session.get().email().unwrap_or_default().to_owned();
					show_toast(ctx, format!("A new code was sent to {}", email), ToastKind::Info);
				}
				Progress::Registered { account, redirect_to } => {
					show_toast(ctx, "Account created successfully", ToastKind::Success);
					sign_in_new_account(ctx, account).await;
					navigate(redirect_to);
				}
				Progress::Failed => {
					let session = session.get();
					if let Some(error) = session.last_error() {
						show_toast(ctx, error, ToastKind::Error);
					}
				}
				Progress::Invalid | Progress::Ignored | Progress::Stale => (),
			}
		});
	};

	let email_submit_handler = move |event: WebEvent| {
		event.prevent_default();
		run_action(RegistrationAction::SubmitEmail((*email_entry.get()).clone()));
	};

	let code_submit_handler = move |event: WebEvent| {
		event.prevent_default();
		run_action(RegistrationAction::SubmitCode((*code_entry.get()).clone()));
	};

	let resend_handler = move |event: WebEvent| {
		event.prevent_default();
		run_action(RegistrationAction::ResendCode);
	};

	let profile_submit_handler = move |event: WebEvent| {
		event.prevent_default();
		let profile = ProfileForm {
			display_name: (*name_entry.get()).clone(),
			password: (*password_entry.get()).clone(),
			password_confirmation: (*confirmation_entry.get()).clone(),
		};
		run_action(RegistrationAction::SubmitProfile(profile));
	};

	view! {
		ctx,
		div(id="register") {
			h1 { (*heading.get()) }
			p(class="register_subheading") { (*subheading.get()) }
			(match (*phase.get()).clone() {
				Phase::AwaitingEmail => view! {
					ctx,
					form(id="register_email", on:submit=email_submit_handler) {
						label(for="register_email_input") { "Email Address" }
						input(id="register_email_input", type="email", placeholder="Enter your email", bind:value=email_entry)
						button(type="submit", disabled=*pending.get()) {
							(if *pending.get() { "Sending OTP..." } else { "Send Verification Code" })
						}
					}
				},
				Phase::AwaitingCode { email } => view! {
					ctx,
					form(id="register_code", on:submit=code_submit_handler) {
						label(for="register_code_input") { "Verification Code" }
						input(id="register_code_input", type="text", placeholder="Enter 6-digit OTP", bind:value=code_entry)
						p(class="register_code_sent") {
							"OTP sent to " (email) ". Didn't receive it? "
							button(type="button", class="register_resend", disabled=*pending.get(), on:click=resend_handler) {
								"Resend OTP"
							}
						}
						button(type="submit", disabled=*pending.get()) {
							(if *pending.get() { "Verifying..." } else { "Verify Code" })
						}
					}
				},
				Phase::AwaitingProfile { .. } => view! {
					ctx,
					form(id="register_profile", on:submit=profile_submit_handler) {
						label(for="register_name_input") { "Full Name" }
						input(id="register_name_input", type="text", placeholder="Enter your full name", bind:value=name_entry)
						PasswordField(value=password_entry, label="Password", field_id="register_password")
						PasswordField(value=confirmation_entry, label="Confirm Password", field_id="register_password_confirmation")
						button(type="submit", disabled=*pending.get()) {
							(if *pending.get() { "Creating Account..." } else { "Complete Registration" })
						}
					}
				},
			})
			(match (*last_error.get()).clone() {
				Some(error) => view! { ctx, div(class="register_error") { (error) } },
				None => view! { ctx, }
			})
			p(class="register_sign_in") {
				"Already have an account? "
				a(href=SIGN_IN_PAGE) { "Sign in" }
			}
		}
	}
}
