// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The admin product form and the product list beside it.
//!
//! The form either creates a new product or edits one picked from the list. After the backend saves or deletes a
//! product, the list is updated in place from the response instead of being loaded again.

use crate::messages::product::{format_cents, parse_price_cents, Product};
use serde::Serialize;
use std::fmt;

/// What the form will do when submitted
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditorMode {
	Creating,
	Editing { product_id: u64 },
}

/// The values in the product form, as typed
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductForm {
	pub name: String,
	pub description: String,
	pub price: String,
	pub stock: String,
	pub category_id: Option<u64>,
	pub is_active: bool,
}

impl Default for ProductForm {
	fn default() -> Self {
		Self {
			name: String::new(),
			description: String::new(),
			price: String::new(),
			stock: String::new(),
			category_id: None,
			is_active: true,
		}
	}
}

impl ProductForm {
	pub fn from_product(product: &Product) -> Self {
		Self {
			name: product.name.clone(),
			description: product.description.clone(),
			price: product.price.clone(),
			stock: product.stock.to_string(),
			category_id: product.category_id,
			is_active: product.is_active,
		}
	}

	/// Checks the form and produces the fields to send.
	///
	/// # Errors
	///
	/// Fails on the first field that's missing or doesn't hold a valid value.
	pub fn draft(&self) -> Result<ProductDraft, ProductFormError> {
		let name = self.name.trim();
		if name.is_empty() {
			return Err(ProductFormError::MissingName);
		}
		let description = self.description.trim();
		if description.is_empty() {
			return Err(ProductFormError::MissingDescription);
		}
		let price = parse_price_cents(&self.price).ok_or(ProductFormError::InvalidPrice)?;
		let stock = self.stock.trim().parse().map_err(|_| ProductFormError::InvalidStock)?;
		let category_id = self.category_id.ok_or(ProductFormError::MissingCategory)?;

		Ok(ProductDraft {
			name: name.to_owned(),
			description: description.to_owned(),
			price: format_cents(price),
			stock,
			category_id,
			is_active: self.is_active,
		})
	}
}

/// Product fields ready to send to `/products/`
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProductDraft {
	pub name: String,
	pub description: String,
	pub price: String,
	pub stock: u32,
	pub category_id: u64,
	pub is_active: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProductFormError {
	MissingName,
	MissingDescription,
	InvalidPrice,
	InvalidStock,
	MissingCategory,
}

impl fmt::Display for ProductFormError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingName => write!(f, "Product name is required"),
			Self::MissingDescription => write!(f, "Description is required"),
			Self::InvalidPrice => write!(f, "Price must be an amount like 12.50"),
			Self::InvalidStock => write!(f, "Stock quantity must be a whole number"),
			Self::MissingCategory => write!(f, "Please choose a category"),
		}
	}
}

impl std::error::Error for ProductFormError {}

/// The request a form submission turns into
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProductSubmission {
	/// `POST /products/`
	Create(ProductDraft),
	/// `PUT /products/{id}/`
	Update { product_id: u64, draft: ProductDraft },
}

/// What the backend did with a submission
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaveOutcome {
	Created,
	Updated,
}

impl SaveOutcome {
	pub fn message(&self) -> &'static str {
		match self {
			Self::Created => "Product created successfully.",
			Self::Updated => "Product updated successfully.",
		}
	}
}

/// State of the admin product page
#[derive(Clone, Debug, Default)]
pub struct ProductEditor {
	products: Vec<Product>,
	editing: Option<u64>,
	form: ProductForm,
}

impl ProductEditor {
	pub fn new(products: Vec<Product>) -> Self {
		Self {
			products,
			editing: None,
			form: ProductForm::default(),
		}
	}

	pub fn products(&self) -> &[Product] {
		&self.products
	}

	pub fn mode(&self) -> EditorMode {
		match self.editing {
			Some(product_id) => EditorMode::Editing { product_id },
			None => EditorMode::Creating,
		}
	}

	pub fn form(&self) -> &ProductForm {
		&self.form
	}

	pub fn form_mut(&mut self) -> &mut ProductForm {
		&mut self.form
	}

	/// Switches to editing a product from the list and fills the form with it. Returns `false` for an unknown product.
	pub fn start_edit(&mut self, product_id: u64) -> bool {
		let Some(product) = self.products.iter().find(|product| product.id == product_id) else {
			return false;
		};
		self.form = ProductForm::from_product(product);
		self.editing = Some(product_id);
		true
	}

	/// Goes back to creating a product with an empty form
	pub fn cancel_edit(&mut self) {
		self.editing = None;
		self.form = ProductForm::default();
	}

	/// Checks the form and produces the request for the current mode.
	///
	/// # Errors
	///
	/// Passes on the form's validation error.
	pub fn submission(&self) -> Result<ProductSubmission, ProductFormError> {
		let draft = self.form.draft()?;
		Ok(match self.editing {
			Some(product_id) => ProductSubmission::Update { product_id, draft },
			None => ProductSubmission::Create(draft),
		})
	}

	/// Applies the product the backend returned for a submission. The list entry with the same id is replaced, or the
	/// product is added to the end of the list if it's new. The form then goes back to creating a product.
	pub fn apply_saved(&mut self, product: Product) -> SaveOutcome {
		let outcome = match self.editing {
			Some(_) => SaveOutcome::Updated,
			None => SaveOutcome::Created,
		};
		match self.products.iter_mut().find(|listed| listed.id == product.id) {
			Some(listed) => *listed = product,
			None => self.products.push(product),
		}
		self.cancel_edit();
		outcome
	}

	/// Removes a product the backend deleted. Editing stops if it was the product being edited.
	pub fn apply_deleted(&mut self, product_id: u64) {
		self.products.retain(|product| product.id != product_id);
		if self.editing == Some(product_id) {
			self.cancel_edit();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn product(id: u64, name: &str) -> Product {
		Product {
			id,
			name: String::from(name),
			description: String::from("Dried leaf"),
			price: String::from("12.50"),
			stock: 4,
			category_id: Some(1),
			image: None,
			is_active: true,
		}
	}

	fn fill(form: &mut ProductForm) {
		form.name = String::from("Moringa Tea");
		form.description = String::from("Loose leaf tea");
		form.price = String::from("8.5");
		form.stock = String::from("20");
		form.category_id = Some(2);
	}

	#[test]
	fn create_adds_to_list() {
		let mut editor = ProductEditor::new(vec![product(1, "Powder")]);
		fill(editor.form_mut());

		let draft = match editor.submission().unwrap() {
			ProductSubmission::Create(draft) => draft,
			other => panic!("Expected a create request, got {:?}", other),
		};
		assert_eq!(draft.price, "8.50");
		assert_eq!(draft.stock, 20);

		assert_eq!(editor.apply_saved(product(2, "Moringa Tea")), SaveOutcome::Created);
		let names: Vec<&str> = editor.products().iter().map(|product| product.name.as_str()).collect();
		assert_eq!(names, ["Powder", "Moringa Tea"]);
		assert_eq!(editor.form(), &ProductForm::default());
	}

	#[test]
	fn edit_replaces_in_place() {
		let mut editor = ProductEditor::new(vec![product(1, "Powder"), product(2, "Capsules")]);

		assert!(editor.start_edit(1));
		assert_eq!(editor.mode(), EditorMode::Editing { product_id: 1 });
		assert_eq!(editor.form().name, "Powder");
		assert_eq!(editor.form().stock, "4");

		editor.form_mut().name = String::from("Leaf Powder");
		match editor.submission().unwrap() {
			ProductSubmission::Update { product_id, draft } => {
				assert_eq!(product_id, 1);
				assert_eq!(draft.name, "Leaf Powder");
			}
			other => panic!("Expected an update request, got {:?}", other),
		}

		assert_eq!(editor.apply_saved(product(1, "Leaf Powder")), SaveOutcome::Updated);
		let names: Vec<&str> = editor.products().iter().map(|product| product.name.as_str()).collect();
		assert_eq!(names, ["Leaf Powder", "Capsules"]);
		assert_eq!(editor.mode(), EditorMode::Creating);
	}

	#[test]
	fn cancel_clears_the_form() {
		let mut editor = ProductEditor::new(vec![product(1, "Powder")]);
		editor.start_edit(1);
		editor.cancel_edit();
		assert_eq!(editor.mode(), EditorMode::Creating);
		assert_eq!(editor.form(), &ProductForm::default());
	}

	#[test]
	fn unknown_product_cannot_be_edited() {
		let mut editor = ProductEditor::new(vec![product(1, "Powder")]);
		assert!(!editor.start_edit(7));
		assert_eq!(editor.mode(), EditorMode::Creating);
	}

	#[test]
	fn deleting_the_edited_product_stops_editing() {
		let mut editor = ProductEditor::new(vec![product(1, "Powder"), product(2, "Capsules")]);
		editor.start_edit(2);

		editor.apply_deleted(1);
		assert_eq!(editor.mode(), EditorMode::Editing { product_id: 2 });

		editor.apply_deleted(2);
		assert!(editor.products().is_empty());
		assert_eq!(editor.mode(), EditorMode::Creating);
	}

	#[test]
	fn invalid_forms_are_rejected() {
		let mut form = ProductForm::default();
		assert_eq!(form.draft(), Err(ProductFormError::MissingName));
		fill(&mut form);

		form.price = String::from("-3");
		assert_eq!(form.draft(), Err(ProductFormError::InvalidPrice));
		form.price = String::from("3");

		form.stock = String::from("lots");
		assert_eq!(form.draft(), Err(ProductFormError::InvalidStock));
		form.stock = String::from("3");

		form.category_id = None;
		assert_eq!(form.draft(), Err(ProductFormError::MissingCategory));
	}
}
