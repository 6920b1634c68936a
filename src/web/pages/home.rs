// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text="Animation Hub" />
		<main id="home_page">
			<h1>"Animation Hub"</h1>
			<p>"Tweens, timelines and easing curves, one small example at a time."</p>
		</main>
	}
}
