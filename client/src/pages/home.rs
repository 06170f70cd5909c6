// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use crate::signals::AppSignals;
use moringa_store_shared::login::SIGN_IN_PAGE;
use moringa_store_shared::registration::REGISTRATION_PAGE;
use sycamore::prelude::*;

#[component]
pub fn HomeView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating home page");
	set_page_title("Moringa Store");

	let signals: &AppSignals = use_context(ctx);
	let greeting = create_memo(ctx, || match signals.user.get().as_ref() {
		Some(signed_in) => format!("Welcome, {}!", signed_in.user.display_name()),
		None => String::from("Welcome!"),
	});
	let signed_in = create_memo(ctx, || signals.user.get().is_some());

	view! {
		ctx,
		div(id="home") {
			h1 { (*greeting.get()) }
			p { "Discover the goodness of moringa, from our leaf powder to everyday recipes." }
			(if *signed_in.get() {
				view! { ctx, }
			} else {
				view! {
					ctx,
					p(class="home_account_links") {
						a(href=SIGN_IN_PAGE) { "Sign in" }
						" or "
						a(href=REGISTRATION_PAGE) { "create an account" }
					}
				}
			})
		}
	}
}
