// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::particles::{Particle, scatter};
use crate::motion::{Animator, Ease, Pose, Position, Property, Repeat, Timeline, Tween};
use rand::Rng;
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 15;
/// The heading and the description line
pub const TEXT_LINES: usize = 2;

pub const HOME_PATH: &str = "/";
pub const HOME_NAVIGATION_DELAY: Duration = Duration::from_millis(500);

const GLYPH_ENTRANCE: Duration = Duration::from_secs(1);
const WOBBLE_ANGLE: f64 = 5.0;
/// One full swing of the wobble, from one side to the other
const WOBBLE_SWING: Duration = Duration::from_secs(2);
const BACKDROP_PAN_PERCENT: f64 = 200.0;
const HOVER_DURATION: Duration = Duration::from_millis(300);

/// Box shadow of the primary action while the pointer is away from it
pub const RESTING_SHADOW: (f64, f64, f64) = (4.0, 15.0, 0.3);
/// Box shadow of the primary action while the pointer is over it
pub const RAISED_SHADOW: (f64, f64, f64) = (10.0, 30.0, 0.4);
const RAISED_SCALE: f64 = 1.05;
/// Properties the hover animation drives on the primary action
const HOVER_PROPERTIES: [Property; 4] = [
	Property::Scale,
	Property::ShadowOffsetY,
	Property::ShadowBlur,
	Property::ShadowAlpha,
];

/// Elements of the not-found page that the scene animates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementKey {
	/// The page container with the panning gradient
	Backdrop,
	/// The big "404"
	Glyph,
	Line(usize),
	/// The "Back to Safety" button
	Action,
	Particle(usize),
}

/// The element tree a scene draws on.
pub trait Stage {
	/// Creates the element for a particle. Returns whether the element exists afterward.
	fn spawn_particle(&mut self, index: usize, particle: &Particle) -> bool;

	/// Removes every particle element, returning how many were removed.
	fn clear_particles(&mut self) -> usize;

	fn render(&mut self, key: ElementKey, pose: &Pose);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoverState {
	Resting,
	Raised,
}

/// A navigation to perform once its delay has passed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationRequest {
	pub target: &'static str,
	pub delay: Duration,
}

impl NavigationRequest {
	pub const fn home() -> Self {
		Self {
			target: HOME_PATH,
			delay: HOME_NAVIGATION_DELAY,
		}
	}
}

/// What unmounting a scene stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Teardown {
	pub particles_removed: usize,
	/// The navigation an activation requested, which the owner of the timer needs to call off
	pub cancelled_navigation: Option<NavigationRequest>,
}

fn entrance_timeline() -> Timeline<ElementKey> {
	let glyph = Tween::new(ElementKey::Glyph, GLYPH_ENTRANCE)
		.from_to(Property::Scale, 0.0, 1.0)
		.from_to(Property::Rotation, -180.0, 0.0)
		.from_to(Property::Opacity, 0.0, 1.0)
		.ease(Ease::elastic_out(1.0, 0.5));
	let lines = (0..TEXT_LINES).map(|line| {
		Tween::new(ElementKey::Line(line), Duration::from_millis(800))
			.from_to(Property::Y, 50.0, 0.0)
			.from_to(Property::Opacity, 0.0, 1.0)
			.ease(Ease::back_out(1.2))
	});
	let action = Tween::new(ElementKey::Action, Duration::from_millis(600))
		.from_to(Property::X, -100.0, 0.0)
		.from_to(Property::Opacity, 0.0, 1.0)
		.from_to(Property::Scale, 0.8, 1.0)
		.ease(Ease::Power2Out);

	Timeline::new()
		.add(glyph, Position::AfterPrevious)
		.stagger(
			lines,
			Duration::from_millis(200),
			Position::Overlap(Duration::from_millis(500)),
		)
		.add(action, Position::AfterPrevious)
}

fn press_timeline() -> Timeline<ElementKey> {
	Timeline::new()
		.add(
			Tween::new(ElementKey::Action, Duration::from_millis(100))
				.to(Property::Scale, 0.9)
				.ease(Ease::Power2In),
			Position::AfterPrevious,
		)
		.add(
			Tween::new(ElementKey::Action, Duration::from_millis(300))
				.to(Property::Scale, 1.0)
				.ease(Ease::elastic_out(1.0, 0.5)),
			Position::AfterPrevious,
		)
}

fn shadow_tween(scale: f64, (offset_y, blur, alpha): (f64, f64, f64)) -> Tween<ElementKey> {
	Tween::new(ElementKey::Action, HOVER_DURATION)
		.to(Property::Scale, scale)
		.to(Property::ShadowOffsetY, offset_y)
		.to(Property::ShadowBlur, blur)
		.to(Property::ShadowAlpha, alpha)
		.ease(Ease::Power2Out)
}

fn backdrop_pan() -> Tween<ElementKey> {
	Tween::new(ElementKey::Backdrop, Duration::from_secs(10))
		.to(Property::BackgroundPosition, BACKDROP_PAN_PERCENT)
		.ease(Ease::Linear)
		.repeat(Repeat::Infinite)
}

/// Wobbles the glyph between -5° and 5° once its entrance has settled. The first step eases from wherever the
/// entrance left the glyph to one side; the loop then swings from that side to the other and back.
fn glyph_wobble() -> [Tween<ElementKey>; 2] {
	let lead_in = Tween::new(ElementKey::Glyph, WOBBLE_SWING / 2)
		.to(Property::Rotation, -WOBBLE_ANGLE)
		.ease(Ease::SineInOut)
		.delay(GLYPH_ENTRANCE);
	let swing = Tween::new(ElementKey::Glyph, WOBBLE_SWING)
		.to(Property::Rotation, WOBBLE_ANGLE)
		.ease(Ease::SineInOut)
		.delay(GLYPH_ENTRANCE + WOBBLE_SWING / 2)
		.repeat(Repeat::Infinite)
		.yoyo(true);
	[lead_in, swing]
}

/// Everything the not-found page animates, independent of how elements are actually drawn.
///
/// The scene is created by mounting and is inert after unmounting: pointer events and ticks are ignored, which
/// stands in for the listeners being detached.
pub struct NotFoundScene<S> {
	stage: S,
	animator: Animator<ElementKey>,
	particles: Vec<Particle>,
	hover: HoverState,
	navigation: Option<NavigationRequest>,
	mounted: bool,
}

impl<S: Stage> NotFoundScene<S> {
	pub fn mount(mut stage: S, rng: &mut impl Rng, now_ms: f64) -> Self {
		let mut animator = Animator::new();
		let (offset_y, blur, alpha) = RESTING_SHADOW;
		animator.set(ElementKey::Action, Property::ShadowOffsetY, offset_y);
		animator.set(ElementKey::Action, Property::ShadowBlur, blur);
		animator.set(ElementKey::Action, Property::ShadowAlpha, alpha);
		animator.set(ElementKey::Backdrop, Property::BackgroundPosition, 0.0);

		animator.play_timeline(entrance_timeline(), now_ms);

		let mut particles = Vec::with_capacity(PARTICLE_COUNT);
		for (index, particle) in scatter(PARTICLE_COUNT, rng).into_iter().enumerate() {
			if !stage.spawn_particle(index, &particle) {
				tracing::debug!(index, "Skipping a particle that couldn't be created");
				continue;
			}
			animator.play(particle.drift_tween(ElementKey::Particle(index)), now_ms);
			particles.push(particle);
		}

		animator.play(backdrop_pan(), now_ms);
		for tween in glyph_wobble() {
			animator.play(tween, now_ms);
		}

		let mut scene = Self {
			stage,
			animator,
			particles,
			hover: HoverState::Resting,
			navigation: None,
			mounted: true,
		};
		scene.tick(now_ms);
		scene
	}

	/// Advances every animation to `now_ms` and draws what changed. Returns whether the scene is still mounted.
	pub fn tick(&mut self, now_ms: f64) -> bool {
		if !self.mounted {
			return false;
		}
		for key in self.animator.tick(now_ms) {
			let pose = self.animator.pose(key);
			self.stage.render(key, &pose);
		}
		true
	}

	pub fn pointer_enter(&mut self, now_ms: f64) {
		if !self.mounted || self.hover == HoverState::Raised {
			return;
		}
		self.hover = HoverState::Raised;
		self.animator.cancel_pending(ElementKey::Action, &HOVER_PROPERTIES, now_ms);
		self.animator.play(shadow_tween(RAISED_SCALE, RAISED_SHADOW), now_ms);
	}

	pub fn pointer_leave(&mut self, now_ms: f64) {
		if !self.mounted || self.hover == HoverState::Resting {
			return;
		}
		self.hover = HoverState::Resting;
		self.animator.cancel_pending(ElementKey::Action, &HOVER_PROPERTIES, now_ms);
		self.animator.play(shadow_tween(1.0, RESTING_SHADOW), now_ms);
	}

	/// Plays the press feedback on the primary action. The returned navigation doesn't wait for the feedback to
	/// finish.
	pub fn activate(&mut self, now_ms: f64) -> NavigationRequest {
		let request = NavigationRequest::home();
		if self.mounted {
			self.animator.cancel_pending(ElementKey::Action, &[Property::Scale], now_ms);
			self.animator.play_timeline(press_timeline(), now_ms);
			self.navigation = Some(request);
		}
		request
	}

	/// Stops every animation, removes the particles and calls off a requested navigation.
	pub fn unmount(&mut self) -> Teardown {
		if !self.mounted {
			return Teardown {
				particles_removed: 0,
				cancelled_navigation: None,
			};
		}
		self.mounted = false;
		self.animator.clear();
		self.particles.clear();
		Teardown {
			particles_removed: self.stage.clear_particles(),
			cancelled_navigation: self.navigation.take(),
		}
	}

	#[cfg(test)]
	fn is_mounted(&self) -> bool {
		self.mounted
	}

	#[cfg(test)]
	fn hover_state(&self) -> HoverState {
		self.hover
	}

	#[cfg(test)]
	fn particles(&self) -> &[Particle] {
		&self.particles
	}

	#[cfg(test)]
	fn pose(&self, key: ElementKey) -> Pose {
		self.animator.pose(key)
	}

	#[cfg(test)]
	fn stage(&self) -> &S {
		&self.stage
	}
}
