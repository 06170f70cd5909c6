// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::future::TimeoutFuture;
use moringa_store_shared::login::SignedIn;
use moringa_store_shared::toast::{ToastKind, ToastSlot, TOAST_DURATION_MS};
use sycamore::futures::spawn_local;
use sycamore::prelude::*;

/// A struct containing all of the signals that live for the whole application.
#[derive(Clone)]
pub struct AppSignals {
	/// The signed-in user. This is only kept in memory, so it's lost when the page is reloaded.
	pub user: RcSignal<Option<SignedIn>>,
	pub toast: RcSignal<ToastSlot>,
}

impl AppSignals {
	pub fn new() -> Self {
		Self {
			user: create_rc_signal(None),
			toast: create_rc_signal(ToastSlot::new()),
		}
	}

	/// Shows a toast and schedules it to disappear
	pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
		let ticket = self.toast.modify().show(message, kind);
		let toast = self.toast.clone();
		spawn_local(async move {
			TimeoutFuture::new(TOAST_DURATION_MS).await;
			toast.modify().expire(ticket);
		});
	}
}

/// Shows a toast using the application signals from the context
pub fn show_toast(ctx: Scope<'_>, message: impl Into<String>, kind: ToastKind) {
	let signals: &AppSignals = use_context(ctx);
	signals.show_toast(message, kind);
}
