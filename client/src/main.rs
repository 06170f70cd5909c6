// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::futures::spawn_local;
use sycamore::prelude::*;

mod api;
mod app;
mod components;
mod page_utils;
mod pages;
mod signals;
use api::{load_client_config, HttpAuthApi};
use app::App;
use pages::error::{error_message_view, ErrorData};
use signals::AppSignals;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	spawn_local(async {
		let config = match load_client_config().await {
			Ok(config) => config,
			Err(error) => {
				log::error!("Failed to load client configuration: {}", error);
				sycamore::render(|ctx| {
					error_message_view(
						ctx,
						ErrorData::new_with_error(
							String::from("Unable to load/operate: Failed to load the store configuration"),
							error,
						),
					)
				});
				return;
			}
		};
		log::debug!("Using storefront backend at {}", config.api_base_url);

		sycamore::render(|ctx| {
			provide_context(ctx, HttpAuthApi::new(config));
			provide_context(ctx, AppSignals::new());

			view! { ctx, App }
		});
	});
}
