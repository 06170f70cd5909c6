// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Category {
	pub id: u64,
	pub name: String,
	#[serde(default)]
	pub description: String,
}

/// A product as the backend's `/products/` endpoints describe it
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Product {
	pub id: u64,
	pub name: String,
	#[serde(default)]
	pub description: String,
	/// Decimal price text, e.g. `"12.50"`
	pub price: String,
	pub stock: u32,
	#[serde(default)]
	pub category_id: Option<u64>,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default = "active_by_default")]
	pub is_active: bool,
}

fn active_by_default() -> bool {
	true
}

impl Product {
	/// Gets the price in cents, or `None` if the backend sent a price that isn't a decimal amount
	pub fn price_cents(&self) -> Option<u64> {
		parse_price_cents(&self.price)
	}
}

/// Parses a decimal amount with at most two fractional digits into cents.
///
/// Accepts `"12"`, `"12.5"` and `"12.50"`. Negative amounts, more than two fractional digits, and anything that isn't
/// a plain decimal number are rejected.
pub fn parse_price_cents(text: &str) -> Option<u64> {
	let text = text.trim();
	let (whole, fraction) = match text.split_once('.') {
		Some((_, "")) => return None,
		Some((whole, fraction)) => (whole, fraction),
		None => (text, ""),
	};
	if whole.is_empty() || !whole.bytes().all(|digit| digit.is_ascii_digit()) {
		return None;
	}
	if fraction.len() > 2 || !fraction.bytes().all(|digit| digit.is_ascii_digit()) {
		return None;
	}

	let whole: u64 = whole.parse().ok()?;
	let fraction: u64 = match fraction.len() {
		0 => 0,
		1 => fraction.parse::<u64>().ok()? * 10,
		_ => fraction.parse().ok()?,
	};
	whole.checked_mul(100)?.checked_add(fraction)
}

/// Formats cents as a decimal amount, e.g. `1250` as `"12.50"`
pub fn format_cents(cents: u64) -> String {
	format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prices_parse_to_cents() {
		assert_eq!(parse_price_cents("12"), Some(1200));
		assert_eq!(parse_price_cents("12.5"), Some(1250));
		assert_eq!(parse_price_cents(" 12.05 "), Some(1205));
		assert_eq!(parse_price_cents("0.99"), Some(99));
	}

	#[test]
	fn bad_prices_are_rejected() {
		for text in ["", "-1", "1.234", "abc", ".5", "1.", "1.2.3", "1e3"] {
			assert_eq!(parse_price_cents(text), None, "{:?}", text);
		}
	}

	#[test]
	fn cents_format_with_two_places() {
		assert_eq!(format_cents(1205), "12.05");
		assert_eq!(format_cents(7), "0.07");
	}

	#[test]
	fn product_response_parses() {
		let body = r#"{"id": 3, "name": "Moringa Powder", "description": "Dried leaf", "price": "12.50", "stock": 4, "category_id": 1, "image": null, "is_active": true}"#;
		let product: Product = serde_json::from_str(body).unwrap();
		assert_eq!(product.price_cents(), Some(1250));
		assert_eq!(product.category_id, Some(1));
		assert_eq!(product.image, None);
	}
}
