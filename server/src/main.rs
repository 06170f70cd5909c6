// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::Parser;
use miette::{IntoDiagnostic, Result};

mod args;
use args::CliArgs;

mod config;
use config::parse_config;

mod web;
use web::build_app;

#[async_std::main]
async fn main() -> Result<()> {
	let args = CliArgs::parse();
	let config = parse_config(&args.config)?;

	tide::log::start();

	let app = build_app(&config)?;
	tide::log::info!(
		"Serving the storefront from {} with backend {}",
		config.static_directory,
		config.api_base_url
	);
	app.listen(config.listen_address.clone()).await.into_diagnostic()?;

	Ok(())
}
