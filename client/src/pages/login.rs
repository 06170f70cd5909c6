// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::HttpAuthApi;
use crate::components::password_field::PasswordField;
use crate::page_utils::set_page_title;
use crate::signals::{show_toast, AppSignals};
use moringa_store_shared::login::{sign_in, SignInError};
use moringa_store_shared::messages::login::LoginRequest;
use moringa_store_shared::registration::REGISTRATION_PAGE;
use moringa_store_shared::toast::ToastKind;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn LoginView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating sign-in page");
	set_page_title("Sign In | Moringa Store");

	{
		let signals: &AppSignals = use_context(ctx);
		if let Some(signed_in) = signals.user.get().as_ref() {
			let target = signed_in.redirect_target();
			spawn_local_scoped(ctx, async move {
				navigate(target);
			});
			return view! { ctx, };
		}
	}

	let username_entry = create_signal(ctx, String::new());
	let password_entry = create_signal(ctx, String::new());
	let pending = create_signal(ctx, false);
	let error_signal: &Signal<Option<String>> = create_signal(ctx, None);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();
		if *pending.get() {
			return;
		}
		error_signal.set(None);

		let credentials = LoginRequest {
			username: (*username_entry.get()).clone(),
			password: (*password_entry.get()).clone(),
		};

		pending.set(true);
		spawn_local_scoped(ctx, async move {
			let api: &HttpAuthApi = use_context(ctx);
			let result = sign_in(api, &credentials).await;
			pending.set(false);

			match result {
				Ok(signed_in) => {
					let target = signed_in.redirect_target();
					show_toast(
						ctx,
						format!("Welcome back, {}!", signed_in.user.display_name()),
						ToastKind::Success,
					);
					let signals: &AppSignals = use_context(ctx);
					signals.user.set(Some(signed_in));
					navigate(target);
				}
				Err(error) => {
					if let SignInError::Backend(api_error) = &error {
						log::warn!("Sign-in failed: {}", api_error);
					}
					error_signal.set(Some(error.to_string()));
				}
			}
		});
	};

	view! {
		ctx,
		div(id="login") {
			h1 { "Welcome back" }
			p(class="login_subheading") { "Sign in to your account" }
			form(id="login_form", on:submit=form_submission_handler) {
				label(for="login_username") { "Username" }
				input(id="login_username", type="text", placeholder="Enter your username", bind:value=username_entry)
				PasswordField(value=password_entry, label="Password", field_id="login_password")
				button(type="submit", disabled=*pending.get()) {
					(if *pending.get() { "Signing in..." } else { "Sign in" })
				}
			}
			(match (*error_signal.get()).clone() {
				Some(error) => view! { ctx, div(class="login_error") { (error) } },
				None => view! { ctx, }
			})
			p(class="login_register") {
				"Don't have an account? "
				a(href=REGISTRATION_PAGE) { "Sign up" }
			}
		}
	}
}
