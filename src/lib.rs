// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
pub mod config;
pub mod motion;
pub mod web;

/// Sends log output to the browser console. Without a subscriber in the browser, `tracing` events are forwarded
/// as `log` records.
#[cfg(feature = "hydrate")]
fn init_browser_logging() {
	#[cfg(debug_assertions)]
	let level = log::Level::Debug;
	#[cfg(not(debug_assertions))]
	let level = log::Level::Warn;

	wasm_logger::init(wasm_logger::Config::new(level));
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	use crate::web::pages::app::App;
	init_browser_logging();
	console_error_panic_hook::set_once();
	tracing::debug!("Hydrating the app");
	leptos::mount::hydrate_body(App);
}

#[cfg(all(test, feature = "hydrate"))]
mod tests {
	use std::sync::Mutex;

	struct CapturingLogger(Mutex<Vec<String>>);

	impl log::Log for CapturingLogger {
		fn enabled(&self, _metadata: &log::Metadata) -> bool {
			true
		}

		fn log(&self, record: &log::Record) {
			self.0.lock().unwrap().push(record.args().to_string());
		}

		fn flush(&self) {}
	}

	static LOGGER: CapturingLogger = CapturingLogger(Mutex::new(Vec::new()));

	#[test]
	fn tracing_events_reach_the_browser_logger() {
		let _ = log::set_logger(&LOGGER);
		log::set_max_level(log::LevelFilter::Trace);

		tracing::warn!("Failed to attach a pointer listener");
		let messages = LOGGER.0.lock().unwrap();
		assert!(messages.iter().any(|message| message.contains("Failed to attach a pointer listener")));
	}
}
