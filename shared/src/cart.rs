// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::product::Product;
use serde::{Deserialize, Serialize};

/// Sales tax charged on the cart subtotal, in percent
pub const TAX_RATE_PERCENT: u64 = 8;

/// One line of the cart
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CartItem {
	pub id: u64,
	pub product: Product,
	pub quantity: u32,
}

impl CartItem {
	/// Gets the price of the whole line in cents. A price the backend sent that can't be read counts as zero.
	pub fn line_total_cents(&self) -> u64 {
		let unit_price = self.product.price_cents().unwrap_or_else(|| {
			log::warn!("Cart item {} has an unreadable price {:?}", self.id, self.product.price);
			0
		});
		unit_price * u64::from(self.quantity)
	}
}

/// The result of asking for a different quantity of a cart item
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuantityChange {
	Updated { quantity: u32 },
	/// The quantity went below one, so the item was taken out of the cart
	Removed,
	/// There isn't enough stock for the requested quantity. The cart is unchanged.
	OutOfStock { stock: u32 },
	UnknownItem,
}

/// The shopping cart as the user sees it
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cart {
	items: Vec<CartItem>,
}

impl Cart {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_items(items: Vec<CartItem>) -> Self {
		Self { items }
	}

	pub fn items(&self) -> &[CartItem] {
		&self.items
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Gets the number of units across all items
	pub fn total_items(&self) -> u32 {
		self.items.iter().map(|item| item.quantity).sum()
	}

	/// Sets the quantity of an item. Quantities are bounded by the product's stock; zero removes the item.
	pub fn set_quantity(&mut self, item_id: u64, quantity: u32) -> QuantityChange {
		let Some(index) = self.items.iter().position(|item| item.id == item_id) else {
			return QuantityChange::UnknownItem;
		};
		if quantity == 0 {
			self.items.remove(index);
			return QuantityChange::Removed;
		}

		let item = &mut self.items[index];
		if quantity > item.product.stock {
			return QuantityChange::OutOfStock {
				stock: item.product.stock,
			};
		}
		item.quantity = quantity;
		QuantityChange::Updated { quantity }
	}

	pub fn increase(&mut self, item_id: u64) -> QuantityChange {
		match self.quantity_of(item_id) {
			Some(quantity) => self.set_quantity(item_id, quantity.saturating_add(1)),
			None => QuantityChange::UnknownItem,
		}
	}

	pub fn decrease(&mut self, item_id: u64) -> QuantityChange {
		match self.quantity_of(item_id) {
			Some(quantity) => self.set_quantity(item_id, quantity.saturating_sub(1)),
			None => QuantityChange::UnknownItem,
		}
	}

	/// Takes an item out of the cart. Returns whether it was there.
	pub fn remove(&mut self, item_id: u64) -> bool {
		let count = self.items.len();
		self.items.retain(|item| item.id != item_id);
		self.items.len() != count
	}

	pub fn clear(&mut self) {
		self.items.clear();
	}

	pub fn subtotal_cents(&self) -> u64 {
		self.items.iter().map(CartItem::line_total_cents).sum()
	}

	/// Gets the tax on the subtotal, rounded half up to the cent
	pub fn tax_cents(&self) -> u64 {
		(self.subtotal_cents() * TAX_RATE_PERCENT + 50) / 100
	}

	pub fn total_cents(&self) -> u64 {
		self.subtotal_cents() + self.tax_cents()
	}

	fn quantity_of(&self, item_id: u64) -> Option<u32> {
		self.items.iter().find(|item| item.id == item_id).map(|item| item.quantity)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: u64, price: &str, stock: u32, quantity: u32) -> CartItem {
		CartItem {
			id,
			product: Product {
				id: id + 100,
				name: format!("Product {}", id),
				description: String::new(),
				price: String::from(price),
				stock,
				category_id: None,
				image: None,
				is_active: true,
			},
			quantity,
		}
	}

	#[test]
	fn quantity_is_bounded_by_stock() {
		let mut cart = Cart::from_items(vec![item(1, "5.00", 3, 2)]);

		assert_eq!(cart.increase(1), QuantityChange::Updated { quantity: 3 });
		assert_eq!(cart.increase(1), QuantityChange::OutOfStock { stock: 3 });
		assert_eq!(cart.set_quantity(1, 10), QuantityChange::OutOfStock { stock: 3 });
		assert_eq!(cart.items()[0].quantity, 3);
	}

	#[test]
	fn going_below_one_removes_the_item() {
		let mut cart = Cart::from_items(vec![item(1, "5.00", 3, 1), item(2, "1.00", 3, 2)]);

		assert_eq!(cart.decrease(1), QuantityChange::Removed);
		assert_eq!(cart.items().len(), 1);
		assert_eq!(cart.items()[0].id, 2);
		assert_eq!(cart.set_quantity(2, 0), QuantityChange::Removed);
		assert!(cart.is_empty());
	}

	#[test]
	fn unknown_items_are_reported() {
		let mut cart = Cart::from_items(vec![item(1, "5.00", 3, 1)]);
		assert_eq!(cart.increase(9), QuantityChange::UnknownItem);
		assert_eq!(cart.set_quantity(9, 1), QuantityChange::UnknownItem);
		assert!(!cart.remove(9));
		assert!(cart.remove(1));
	}

	#[test]
	fn totals_include_tax() {
		let cart = Cart::from_items(vec![item(1, "12.50", 10, 2), item(2, "0.99", 10, 1)]);

		assert_eq!(cart.total_items(), 3);
		assert_eq!(cart.subtotal_cents(), 2599);
		// 8% of 25.99 is 2.0792
		assert_eq!(cart.tax_cents(), 208);
		assert_eq!(cart.total_cents(), 2807);
	}

	#[test]
	fn unreadable_price_counts_as_zero() {
		let cart = Cart::from_items(vec![item(1, "free", 10, 2), item(2, "3.00", 10, 1)]);
		assert_eq!(cart.subtotal_cents(), 300);
	}
}
