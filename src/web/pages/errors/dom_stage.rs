// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::particles::Particle;
use super::scene::{ElementKey, NavigationRequest, NotFoundScene, Stage, Teardown};
use crate::motion::Pose;
use crate::motion::frame_loop::{FrameLoop, now_ms};
use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

/// Color of the primary action's box shadow, as RGB components
const ACTION_SHADOW_RGB: &str = "74, 0, 224";
const PARTICLE_CLASS: &str = "not_found_particle";

fn set_style(element: &HtmlElement, property: &str, value: &str) {
	if let Err(error) = element.style().set_property(property, value) {
		tracing::warn!(source = ?error, property, "Failed to set a style on an animated element");
	}
}

/// The elements of a rendered not-found page that the scene draws on.
pub struct SceneElements {
	pub container: HtmlElement,
	pub glyph: HtmlElement,
	pub lines: Vec<HtmlElement>,
	pub action: HtmlElement,
}

/// Draws the scene onto the document.
pub struct DomStage {
	document: Document,
	elements: SceneElements,
	particles: HashMap<usize, HtmlElement>,
}

impl DomStage {
	fn element(&self, key: ElementKey) -> Option<&HtmlElement> {
		match key {
			ElementKey::Backdrop => Some(&self.elements.container),
			ElementKey::Glyph => Some(&self.elements.glyph),
			ElementKey::Line(line) => self.elements.lines.get(line),
			ElementKey::Action => Some(&self.elements.action),
			ElementKey::Particle(index) => self.particles.get(&index),
		}
	}

	fn create_particle(&self, particle: &Particle) -> Option<HtmlElement> {
		let element = match self.document.create_element("div") {
			Ok(element) => element,
			Err(error) => {
				tracing::warn!(source = ?error, "Failed to create a particle element");
				return None;
			}
		};
		let element: HtmlElement = element.dyn_into().ok()?;
		element.set_class_name(PARTICLE_CLASS);

		let (left, top) = particle.position_percent;
		set_style(&element, "left", &format!("{}%", left));
		set_style(&element, "top", &format!("{}%", top));

		if let Err(error) = self.elements.container.append_child(&element) {
			tracing::warn!(source = ?error, "Failed to add a particle to the page");
			return None;
		}
		Some(element)
	}
}

impl Stage for DomStage {
	fn spawn_particle(&mut self, index: usize, particle: &Particle) -> bool {
		match self.create_particle(particle) {
			Some(element) => {
				self.particles.insert(index, element);
				true
			}
			None => false,
		}
	}

	fn clear_particles(&mut self) -> usize {
		let removed = self.particles.len();
		for (_, element) in self.particles.drain() {
			element.remove();
		}
		removed
	}

	fn render(&mut self, key: ElementKey, pose: &Pose) {
		let Some(element) = self.element(key) else {
			return;
		};

		if key == ElementKey::Backdrop {
			if let Some(position) = pose.background_position {
				set_style(element, "background-position", &format!("{}% {}%", position, position));
			}
			return;
		}

		set_style(element, "transform", &pose.transform_css());
		set_style(element, "opacity", &pose.opacity_css());
		if let Some(shadow) = pose.shadow {
			let box_shadow = format!(
				"0 {}px {}px rgba({}, {})",
				shadow.offset_y, shadow.blur, ACTION_SHADOW_RGB, shadow.alpha
			);
			set_style(element, "box-shadow", &box_shadow);
		}
	}
}

/// Pointer listeners on the primary action. Dropping this detaches them.
struct PointerListeners {
	target: HtmlElement,
	on_enter: Closure<dyn FnMut()>,
	on_leave: Closure<dyn FnMut()>,
}

impl PointerListeners {
	fn attach(target: HtmlElement, scene: &Rc<RefCell<NotFoundScene<DomStage>>>) -> Self {
		let enter_scene = Rc::clone(scene);
		let on_enter = Closure::<dyn FnMut()>::new(move || enter_scene.borrow_mut().pointer_enter(now_ms()));
		let leave_scene = Rc::clone(scene);
		let on_leave = Closure::<dyn FnMut()>::new(move || leave_scene.borrow_mut().pointer_leave(now_ms()));

		for (event, callback) in [("mouseenter", &on_enter), ("mouseleave", &on_leave)] {
			if let Err(error) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
				tracing::warn!(source = ?error, event, "Failed to attach a pointer listener");
			}
		}

		Self {
			target,
			on_enter,
			on_leave,
		}
	}
}

impl Drop for PointerListeners {
	fn drop(&mut self) {
		for (event, callback) in [("mouseenter", &self.on_enter), ("mouseleave", &self.on_leave)] {
			if let Err(error) = self
				.target
				.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			{
				tracing::warn!(source = ?error, event, "Failed to detach a pointer listener");
			}
		}
	}
}

/// A scene running on the live document, with its listeners and frame loop.
pub struct MountedScene {
	scene: Rc<RefCell<NotFoundScene<DomStage>>>,
	listeners: Option<PointerListeners>,
	frame_loop: Option<FrameLoop>,
}

impl MountedScene {
	/// Mounts the scene. Returns `None` when there's no document to draw on.
	pub fn mount(elements: SceneElements) -> Option<Self> {
		let document = web_sys::window()?.document()?;
		let action = elements.action.clone();
		let stage = DomStage {
			document,
			elements,
			particles: HashMap::new(),
		};

		let mut rng = SmallRng::from_entropy();
		let scene = Rc::new(RefCell::new(NotFoundScene::mount(stage, &mut rng, now_ms())));
		let listeners = PointerListeners::attach(action, &scene);
		let frame_scene = Rc::clone(&scene);
		let frame_loop = FrameLoop::start(move |timestamp| frame_scene.borrow_mut().tick(timestamp));
		if frame_loop.is_none() {
			tracing::warn!("No animation frames available; the not-found page will stay still");
		}

		Some(Self {
			scene,
			listeners: Some(listeners),
			frame_loop,
		})
	}

	pub fn activate(&self) -> NavigationRequest {
		self.scene.borrow_mut().activate(now_ms())
	}

	/// Detaches the listeners, stops the frame loop and removes the particles.
	pub fn unmount(mut self) -> Teardown {
		self.listeners.take();
		self.frame_loop.take();
		let teardown = self.scene.borrow_mut().unmount();
		tracing::debug!(removed = teardown.particles_removed, "Unmounted the not-found scene");
		teardown
	}
}

#[derive(Default)]
struct SlotState {
	scene: Option<MountedScene>,
	navigation_timer: Option<TimeoutHandle>,
}

/// Holds the mounted scene for the component that owns it, along with the timer of a navigation it requested.
/// Only ever touched from the browser's main thread.
#[derive(Clone)]
pub struct SceneSlot(SendWrapper<Rc<RefCell<SlotState>>>);

impl Default for SceneSlot {
	fn default() -> Self {
		Self::new()
	}
}

impl SceneSlot {
	pub fn new() -> Self {
		Self(SendWrapper::new(Rc::new(RefCell::new(SlotState::default()))))
	}

	/// Stores a freshly mounted scene, unmounting any previous one.
	pub fn fill(&self, scene: MountedScene) {
		let previous = self.0.borrow_mut().scene.replace(scene);
		if let Some(previous) = previous {
			previous.unmount();
		}
	}

	/// Presses the primary action and navigates home once the request's delay has passed.
	pub fn activate(&self) {
		let request = match self.0.borrow().scene.as_ref() {
			Some(scene) => scene.activate(),
			None => NavigationRequest::home(),
		};
		let Some(timer) = navigate_after(request) else {
			return;
		};
		let previous = self.0.borrow_mut().navigation_timer.replace(timer);
		if let Some(previous) = previous {
			previous.clear();
		}
	}

	/// Unmounts the scene and calls off a navigation that hasn't happened yet.
	pub fn unmount(&self) {
		let (scene, navigation_timer) = {
			let mut state = self.0.borrow_mut();
			(state.scene.take(), state.navigation_timer.take())
		};
		let cancelled = scene.and_then(|scene| scene.unmount().cancelled_navigation);
		if let Some(timer) = navigation_timer {
			timer.clear();
			tracing::debug!(path = ?cancelled.map(|request| request.target), "Called off a pending navigation");
		}
	}
}

/// Schedules a full page navigation for once the request's delay has passed.
fn navigate_after(request: NavigationRequest) -> Option<TimeoutHandle> {
	let scheduled = set_timeout_with_handle(
		move || {
			let Some(window) = web_sys::window() else {
				return;
			};
			if let Err(error) = window.location().set_href(request.target) {
				tracing::error!(source = ?error, path = request.target, "Failed to navigate");
			}
		},
		request.delay,
	);
	match scheduled {
		Ok(timer) => Some(timer),
		Err(error) => {
			tracing::error!(source = ?error, path = request.target, "Failed to schedule a navigation");
			None
		}
	}
}
