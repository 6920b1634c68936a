// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::home::Home;
use crate::web::routes::{APP_ROUTES, PageView};
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/animation-hub.css" />
		<Title text="Animation Hub" />

		<Router>
			<RoutedPage />
		</Router>
	}
}

fn render_page(page: PageView) -> AnyView {
	match page {
		PageView::Home => view! { <Home /> }.into_any(),
		PageView::NotFound => view! { <NotFound /> }.into_any(),
	}
}

/// Renders its children, or the route table's fallback page if rendering them fails.
#[component]
fn PageBoundary(children: Children) -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			errors
				.with(|errors| {
					for (_, error) in errors.iter() {
						tracing::error!(source = %error, "A page failed to render");
					}
				});
			render_page(APP_ROUTES.fallback_view())
		}>{children()}</ErrorBoundary>
	}
}

/// Shows the page the route table picks for the current location.
#[component]
fn RoutedPage() -> impl IntoView {
	let location = use_location();
	let page = Memo::new(move |_| APP_ROUTES.resolve(&location.pathname.get()));

	view! {
		<PageBoundary>
			{move || render_page(page.get())}
		</PageBoundary>
	}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;
	use leptos_router::location::RequestUrl;
	use std::fmt;

	fn render_at(path: &str, page: impl FnOnce() -> AnyView) -> String {
		let owner = Owner::new();
		owner.with(|| {
			provide_meta_context();
			provide_context(RequestUrl::new(path));
			let page = page();
			view! {
				<Router>
					<PageBoundary>{page}</PageBoundary>
				</Router>
			}
			.to_html()
		})
	}

	#[test]
	fn failing_page_renders_the_fallback_page() {
		let html = render_at("/", || Err::<(), _>(fmt::Error).into_any());
		assert!(html.contains("Oops! Page Not Found"));
		assert!(html.contains("This 404 page is animated!"));
	}

	#[test]
	fn working_page_renders_itself() {
		let html = render_at("/", || render_page(PageView::Home));
		assert!(html.contains("Animation Hub"));
		assert!(!html.contains("Oops! Page Not Found"));
	}
}
