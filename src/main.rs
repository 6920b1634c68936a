// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use animation_hub::config::{DEFAULT_CONFIG_PATH, parse_config};
	use animation_hub::web::routes::APP_ROUTES;
	use animation_hub::web::server::run_server;
	use miette::IntoDiagnostic;
	use std::sync::Arc;
	use tracing_subscriber::EnvFilter;

	let config_path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| String::from(DEFAULT_CONFIG_PATH));
	let config = parse_config(&config_path).await?;

	let log_filter = EnvFilter::try_new(&config.log_filter).into_diagnostic()?;
	tracing_subscriber::fmt().with_env_filter(log_filter).init();

	APP_ROUTES.validate()?;
	tracing::debug!(routes = APP_ROUTES.routes().len(), "Route table is valid");

	run_server(Arc::new(config)).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The binary only exists as a server; the client entry point is `hydrate` in the library.
}
