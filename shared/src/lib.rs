// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod api;
pub mod cart;
pub mod login;
pub mod messages;
pub mod product_admin;
pub mod registration;
pub mod toast;
