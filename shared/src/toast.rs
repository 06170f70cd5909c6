// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// How long a toast stays on screen, in milliseconds
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ToastKind {
	#[default]
	Success,
	Error,
	Info,
}

impl ToastKind {
	/// Gets the CSS class for toasts of this kind
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Success => "toast_success",
			Self::Error => "toast_error",
			Self::Info => "toast_info",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
	pub message: String,
	pub kind: ToastKind,
}

/// Identifies one showing of a toast
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToastTicket(u64);

/// Holds the single toast that's on screen, if any.
///
/// Each toast is hidden by a timer started when it's shown. A newer toast replaces the current one, and the older
/// toast's timer must not hide it, so expiry is tied to the ticket returned by [`ToastSlot::show`].
#[derive(Clone, Debug, Default)]
pub struct ToastSlot {
	current: Option<(ToastTicket, Toast)>,
	next_ticket: u64,
}

impl ToastSlot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shows a toast, replacing any toast on screen
	pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastTicket {
		let ticket = ToastTicket(self.next_ticket);
		self.next_ticket += 1;
		let toast = Toast {
			message: message.into(),
			kind,
		};
		self.current = Some((ticket, toast));
		ticket
	}

	/// Hides the toast shown with this ticket. Does nothing if a different toast has been shown since.
	pub fn expire(&mut self, ticket: ToastTicket) {
		if matches!(self.current, Some((current, _)) if current == ticket) {
			self.current = None;
		}
	}

	pub fn visible(&self) -> Option<&Toast> {
		self.current.as_ref().map(|(_, toast)| toast)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toast_is_hidden_by_its_own_ticket() {
		let mut slot = ToastSlot::new();
		assert_eq!(slot.visible(), None);

		let ticket = slot.show("Added to cart", ToastKind::default());
		assert_eq!(
			slot.visible(),
			Some(&Toast {
				message: String::from("Added to cart"),
				kind: ToastKind::Success,
			})
		);

		slot.expire(ticket);
		assert_eq!(slot.visible(), None);
	}

	#[test]
	fn old_timer_does_not_hide_newer_toast() {
		let mut slot = ToastSlot::new();
		let first = slot.show("Sending", ToastKind::Info);
		let second = slot.show("Failed", ToastKind::Error);

		slot.expire(first);
		assert_eq!(slot.visible().map(|toast| toast.message.as_str()), Some("Failed"));

		slot.expire(second);
		assert_eq!(slot.visible(), None);

		// Expiring twice is harmless
		slot.expire(second);
		assert_eq!(slot.visible(), None);
	}
}
