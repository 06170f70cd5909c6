// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

#[derive(Clone)]
pub struct ErrorData {
	message: String,
	error_display: String,
}

impl ErrorData {
	pub fn new_with_error(message: String, error: impl Display) -> Self {
		let error_display = format!("{}", error);
		Self { message, error_display }
	}
}

/// Renders a page-level error. Used when the application can't start.
pub fn error_message_view<G: Html>(ctx: Scope<'_>, error: ErrorData) -> View<G> {
	view! {
		ctx,
		div(id="app_error") {
			(error.message)
			br {}
			(error.error_display)
		}
	}
}
