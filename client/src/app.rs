// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::toast_display::ToastDisplay;
use crate::pages::admin::AdminView;
use crate::pages::home::HomeView;
use crate::pages::login::LoginView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegistrationView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
pub enum AppRoutes {
	#[to("/")]
	Index,
	#[to("/login")]
	Login,
	#[to("/register")]
	Register,
	#[to("/home")]
	Home,
	#[to("/admin")]
	Admin,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					div(id="page") {
						(match route.get().as_ref() {
							AppRoutes::Index | AppRoutes::Login => view! { ctx, LoginView },
							AppRoutes::Register => view! { ctx, RegistrationView },
							AppRoutes::Home => view! { ctx, HomeView },
							AppRoutes::Admin => view! { ctx, AdminView },
							AppRoutes::NotFound => view! { ctx, NotFoundView },
						})
					}
					ToastDisplay
				}
			}
		)
	}
}
