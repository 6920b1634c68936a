// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{IntoDiagnostic, Result, bail, miette};
use tokio::fs::read_to_string;

pub const DEFAULT_CONFIG_PATH: &str = "config.kdl";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	/// Filter directives for the log output, in `tracing-subscriber`'s `EnvFilter` syntax
	pub log_filter: String,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;

	let web_block = document
		.get("web")
		.and_then(|node| node.children())
		.ok_or_else(|| miette!("Config is missing the `web` block"))?;
	let bind_addr =
		string_argument(web_block, "bind_addr")?.ok_or_else(|| miette!("Config is missing `web.bind_addr`"))?;

	let log_filter = string_argument(&document, "log_filter")?.unwrap_or_else(|| String::from(DEFAULT_LOG_FILTER));

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		log_filter,
	})
}

/// Gets the first positional string argument of the named node, if the node exists.
fn string_argument(document: &KdlDocument, name: &str) -> Result<Option<String>> {
	let Some(node) = document.get(name) else {
		return Ok(None);
	};
	let Some(entry) = node.entries().iter().find(|entry| entry.name().is_none()) else {
		bail!("Config value `{}` needs an argument", name);
	};
	match entry.value().as_string() {
		Some(value) => Ok(Some(value.to_string())),
		None => bail!("Config value `{}` must be a string", name),
	}
}
