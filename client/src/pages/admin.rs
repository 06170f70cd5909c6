// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use crate::signals::AppSignals;
use moringa_store_shared::login::{HOME_REDIRECT, SIGN_IN_PAGE};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

/// Landing page for administrators after signing in
#[component]
pub fn AdminView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating admin landing page");
	set_page_title("Admin | Moringa Store");

	let signals: &AppSignals = use_context(ctx);
	let user = match signals.user.get().as_ref() {
		Some(signed_in) if signed_in.user.is_admin() => signed_in.user.clone(),
		Some(_) => {
			log::debug!("Non-administrator tried to open the admin page");
			spawn_local_scoped(ctx, async {
				navigate(HOME_REDIRECT);
			});
			return view! { ctx, };
		}
		None => {
			spawn_local_scoped(ctx, async {
				navigate(SIGN_IN_PAGE);
			});
			return view! { ctx, };
		}
	};

	let welcome = format!("Welcome back, {}", user.display_name());
	view! {
		ctx,
		div(id="admin") {
			h1 { "Admin Dashboard" }
			p(class="admin_welcome") { (welcome) }
			p { "Signed in as " (user.email) }
		}
	}
}
