// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use miette::{Result, bail};
use std::collections::HashSet;

/// Pages the application can show.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PageView {
	Home,
	NotFound,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RouteEntry {
	pub path_pattern: &'static str,
	pub view: PageView,
	/// Marks the view shown when nothing matches or a page fails to render. Its pattern is never matched.
	pub is_error_fallback: bool,
}

impl RouteEntry {
	pub const fn page(path_pattern: &'static str, view: PageView) -> Self {
		Self {
			path_pattern,
			view,
			is_error_fallback: false,
		}
	}

	pub const fn fallback(path_pattern: &'static str, view: PageView) -> Self {
		Self {
			path_pattern,
			view,
			is_error_fallback: true,
		}
	}
}

/// The application's routes, in the order they're tried.
pub static APP_ROUTES: RouteTable = RouteTable::new(&[
	RouteEntry::page("/", PageView::Home),
	RouteEntry::fallback("*", PageView::NotFound),
]);

/// A static, ordered map from path patterns to pages.
///
/// Patterns are split on `/`. Each segment is either a literal, a `:name` parameter matching exactly one
/// non-empty segment, or a final `*` matching whatever remains (including nothing).
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
	routes: &'static [RouteEntry],
}

impl RouteTable {
	pub const fn new(routes: &'static [RouteEntry]) -> Self {
		Self { routes }
	}

	pub fn routes(&self) -> &'static [RouteEntry] {
		self.routes
	}

	/// Checks that exactly one route is the error fallback and that no pattern appears twice.
	pub fn validate(&self) -> Result<()> {
		let fallback_count = self.routes.iter().filter(|route| route.is_error_fallback).count();
		if fallback_count != 1 {
			bail!("Route table needs exactly one error fallback, found {}", fallback_count);
		}

		let mut seen_patterns = HashSet::new();
		for route in self.routes.iter() {
			if !seen_patterns.insert(route.path_pattern) {
				bail!("Route pattern {:?} appears more than once", route.path_pattern);
			}
		}

		Ok(())
	}

	/// The view shown when nothing matches or a page fails to render.
	pub fn fallback_view(&self) -> PageView {
		self.routes
			.iter()
			.find(|route| route.is_error_fallback)
			.map(|route| route.view)
			.unwrap_or(PageView::NotFound)
	}

	pub fn resolve(&self, path: &str) -> PageView {
		let path = normalize_path(path);
		let matched = self
			.routes
			.iter()
			.filter(|route| !route.is_error_fallback)
			.find(|route| pattern_matches(route.path_pattern, path));
		match matched {
			Some(route) => route.view,
			None => {
				tracing::debug!(path, "No route matched; using the fallback view");
				self.fallback_view()
			}
		}
	}
}

/// Strips the query and fragment, and a trailing slash on anything but the root.
fn normalize_path(path: &str) -> &str {
	let end = path.find(['?', '#']).unwrap_or(path.len());
	let path = &path[..end];
	match path.strip_suffix('/') {
		Some(trimmed) if !trimmed.is_empty() => trimmed,
		_ if path.is_empty() => "/",
		_ => path,
	}
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
	path.split('/').filter(|segment| !segment.is_empty())
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
	let mut path_segments = segments(path);
	for pattern_segment in segments(pattern) {
		if pattern_segment == "*" {
			return true;
		}
		let Some(path_segment) = path_segments.next() else {
			return false;
		};
		if pattern_segment.starts_with(':') {
			continue;
		}
		if pattern_segment != path_segment {
			return false;
		}
	}
	path_segments.next().is_none()
}

#[cfg(test)]
mod tests {
	use super::*;

	static PARAM_ROUTES: RouteTable = RouteTable::new(&[
		RouteEntry::page("/", PageView::Home),
		RouteEntry::page("/guide/:topic", PageView::Home),
		RouteEntry::page("/files/*", PageView::Home),
		RouteEntry::fallback("*", PageView::NotFound),
	]);

	#[test]
	fn application_routes_are_valid() {
		assert!(APP_ROUTES.validate().is_ok());
	}

	#[test]
	fn root_resolves_to_home() {
		assert_eq!(APP_ROUTES.resolve("/"), PageView::Home);
		assert_eq!(APP_ROUTES.resolve(""), PageView::Home);
		assert_eq!(APP_ROUTES.resolve("/?from=404"), PageView::Home);
		assert_eq!(APP_ROUTES.resolve("/#top"), PageView::Home);
	}

	#[test]
	fn unknown_paths_resolve_to_the_fallback() {
		for path in ["/animations", "/tutorials", "/blog", "/does/not/exist", "/blog/"] {
			assert_eq!(APP_ROUTES.resolve(path), PageView::NotFound, "{}", path);
		}
	}

	#[test]
	fn fallback_pattern_is_never_matched_directly() {
		assert_eq!(APP_ROUTES.resolve("*"), PageView::NotFound);
		assert_eq!(APP_ROUTES.fallback_view(), PageView::NotFound);
	}

	#[test]
	fn parameters_match_exactly_one_segment() {
		assert_eq!(PARAM_ROUTES.resolve("/guide/easing"), PageView::Home);
		assert_eq!(PARAM_ROUTES.resolve("/guide/easing/"), PageView::Home);
		assert_eq!(PARAM_ROUTES.resolve("/guide"), PageView::NotFound);
		assert_eq!(PARAM_ROUTES.resolve("/guide/easing/extra"), PageView::NotFound);
	}

	#[test]
	fn wildcards_match_any_remainder() {
		assert_eq!(PARAM_ROUTES.resolve("/files"), PageView::Home);
		assert_eq!(PARAM_ROUTES.resolve("/files/a/b/c"), PageView::Home);
		assert_eq!(PARAM_ROUTES.resolve("/filesystem"), PageView::NotFound);
	}

	#[test]
	fn validation_rejects_missing_or_extra_fallbacks() {
		static NO_FALLBACK: RouteTable = RouteTable::new(&[RouteEntry::page("/", PageView::Home)]);
		static TWO_FALLBACKS: RouteTable = RouteTable::new(&[
			RouteEntry::fallback("*", PageView::NotFound),
			RouteEntry::fallback("/oops", PageView::NotFound),
		]);
		assert!(NO_FALLBACK.validate().is_err());
		assert!(TWO_FALLBACKS.validate().is_err());
		assert_eq!(NO_FALLBACK.resolve("/missing"), PageView::NotFound);
	}

	#[test]
	fn validation_rejects_duplicate_patterns() {
		static DUPLICATES: RouteTable = RouteTable::new(&[
			RouteEntry::page("/", PageView::Home),
			RouteEntry::page("/", PageView::NotFound),
			RouteEntry::fallback("*", PageView::NotFound),
		]);
		assert!(DUPLICATES.validate().is_err());
	}
}
