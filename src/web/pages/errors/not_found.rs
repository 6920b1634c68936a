// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Other places to go, linked without any delay
pub const SECONDARY_LINKS: [(&str, &str); 3] = [
	("/animations", "Animations"),
	("/tutorials", "Tutorials"),
	("/blog", "Blog"),
];

#[cfg(feature = "ssr")]
fn set_not_found_status() {
	use axum::http::StatusCode;
	use leptos_axum::ResponseOptions;

	if let Some(response) = use_context::<ResponseOptions>() {
		response.set_status(StatusCode::NOT_FOUND);
	}
}

#[cfg(feature = "hydrate")]
fn collect_scene_elements(
	container: NodeRef<html::Div>,
	glyph: NodeRef<html::Div>,
	heading: NodeRef<html::H1>,
	description: NodeRef<html::P>,
	action: NodeRef<html::A>,
) -> Option<super::dom_stage::SceneElements> {
	use web_sys::HtmlElement;

	Some(super::dom_stage::SceneElements {
		container: HtmlElement::from(container.get()?),
		glyph: HtmlElement::from(glyph.get()?),
		lines: vec![HtmlElement::from(heading.get()?), HtmlElement::from(description.get()?)],
		action: HtmlElement::from(action.get()?),
	})
}

#[component]
pub fn NotFound() -> impl IntoView {
	tracing::debug!("Rendering the not-found page");
	#[cfg(feature = "ssr")]
	set_not_found_status();

	let container_ref = NodeRef::<html::Div>::new();
	let glyph_ref = NodeRef::<html::Div>::new();
	let heading_ref = NodeRef::<html::H1>::new();
	let description_ref = NodeRef::<html::P>::new();
	let action_ref = NodeRef::<html::A>::new();

	#[cfg(feature = "hydrate")]
	let scene_slot = {
		use super::dom_stage::{MountedScene, SceneSlot};

		let scene_slot = SceneSlot::new();
		Effect::new({
			let scene_slot = scene_slot.clone();
			move |_| {
				let Some(elements) =
					collect_scene_elements(container_ref, glyph_ref, heading_ref, description_ref, action_ref)
				else {
					tracing::debug!("Not-found page elements aren't attached yet; skipping animations");
					return;
				};
				if let Some(scene) = MountedScene::mount(elements) {
					scene_slot.fill(scene);
				}
			}
		});
		on_cleanup({
			let scene_slot = scene_slot.clone();
			move || scene_slot.unmount()
		});
		scene_slot
	};

	let on_action_click = move |event: leptos::ev::MouseEvent| {
		event.prevent_default();
		#[cfg(feature = "hydrate")]
		scene_slot.activate();
	};

	view! {
		<Title text="Page Not Found" />
		<div node_ref=container_ref id="not_found_page" class="not_found_backdrop">
			<div class="not_found_rings">
				<div class="not_found_ring not_found_ring_large" />
				<div class="not_found_ring not_found_ring_medium" />
				<div class="not_found_ring not_found_ring_small" />
			</div>

			<div class="not_found_content">
				<div node_ref=glyph_ref class="not_found_glyph">"404"</div>

				<div class="not_found_text">
					<h1 node_ref=heading_ref>"Oops! Page Not Found"</h1>
					<p node_ref=description_ref>
						"The page you're looking for seems to have vanished into the digital void. "
						"Don't worry, even the best animations sometimes go off-script!"
					</p>
				</div>

				<div class="not_found_actions">
					<a
						node_ref=action_ref
						href="/"
						rel="external"
						class="not_found_home_button"
						on:click=on_action_click
					>
						<span class="not_found_home_button_label">
							<svg class="not_found_home_icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
								<path
									stroke-linecap="round"
									stroke-linejoin="round"
									stroke-width="2"
									d="M10 19l-7-7m0 0l7-7m-7 7h18"
								/>
							</svg>
							<span>"Back to Safety"</span>
						</span>
					</a>

					<div class="not_found_links">
						<span>"Or try these:"</span>
						<div class="not_found_link_list">
							{SECONDARY_LINKS
								.into_iter()
								.map(|(href, label)| view! { <A href=href>{label}</A> })
								.collect_view()}
						</div>
					</div>
				</div>

				<div class="not_found_tip">
					<p>
						<span class="not_found_tip_label">"Pro Tip:"</span>
						" This 404 page is animated! "
						"Check our tutorials to learn how to create similar effects."
					</p>
				</div>
			</div>

			<div class="not_found_icon not_found_icon_clapper">"🎬"</div>
			<div class="not_found_icon not_found_icon_sparkles">"✨"</div>
			<div class="not_found_icon not_found_icon_rocket">"🚀"</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::web::routes::{APP_ROUTES, PageView};

	#[test]
	fn secondary_links_lead_to_pages_without_routes() {
		for (href, _) in SECONDARY_LINKS {
			assert_eq!(APP_ROUTES.resolve(href), PageView::NotFound);
		}
	}
}
