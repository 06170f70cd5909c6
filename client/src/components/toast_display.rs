// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::signals::AppSignals;
use sycamore::prelude::*;

/// Renders the current toast, if there is one
#[component]
pub fn ToastDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let signals: &AppSignals = use_context(ctx);
	let toast = create_memo(ctx, || signals.toast.get().visible().cloned());

	view! {
		ctx,
		(match (*toast.get()).clone() {
			Some(toast) => {
				let class = format!("toast {}", toast.kind.css_class());
				view! {
					ctx,
					div(id="toast", class=class, role="status") { (toast.message) }
				}
			}
			None => view! { ctx, }
		})
	}
}
