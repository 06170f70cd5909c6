// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct PasswordFieldProps<'a, 'b> {
	value: &'a Signal<String>,
	label: &'b str,
	field_id: &'b str,
}

/// A password input with a control to show the password as plain text
#[component]
pub fn PasswordField<'a, G: Html>(ctx: Scope<'a>, props: PasswordFieldProps<'a, '_>) -> View<G> {
	let visible_signal = create_signal(ctx, false);
	let input_type = create_memo(ctx, || if *visible_signal.get() { "text" } else { "password" });
	let toggle_text = create_memo(ctx, || if *visible_signal.get() { "Hide" } else { "Show" });

	let toggle_handler = |event: WebEvent| {
		event.prevent_default();
		visible_signal.set(!*visible_signal.get());
	};

	let input_id = props.field_id.to_owned();
	let input_id_for = input_id.clone();
	let label_text = props.label.to_owned();
	view! {
		ctx,
		div(class="password_field") {
			label(for=input_id_for) { (label_text) }
			input(id=input_id, type=*input_type.get(), bind:value=props.value)
			button(type="button", class="password_field_toggle", on:click=toggle_handler) { (*toggle_text.get()) }
		}
	}
}
