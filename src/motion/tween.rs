// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::easing::Ease;
use super::pose::{Pose, Property};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Repeat {
	/// Number of extra cycles played after the first one
	Count(u32),
	Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
	Absolute(f64),
	/// Offset from the value the property has when the tween starts
	Relative(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyTween {
	pub property: Property,
	/// Explicit starting value; `None` captures the current value when the tween first renders
	pub from: Option<f64>,
	pub to: Target,
}

impl PropertyTween {
	/// Resolves the start and end values against the element's current pose.
	pub fn resolve(&self, pose: &Pose) -> ResolvedProperty {
		let current = pose.get(self.property);
		let from = self.from.unwrap_or(current);
		let to = match self.to {
			Target::Absolute(value) => value,
			Target::Relative(offset) => from + offset,
		};
		ResolvedProperty {
			property: self.property,
			from,
			to,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedProperty {
	pub property: Property,
	pub from: f64,
	pub to: f64,
}

impl ResolvedProperty {
	pub fn value_at(&self, eased_progress: f64) -> f64 {
		self.from + (self.to - self.from) * eased_progress
	}
}

/// Where a tween is at a given time since it was scheduled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
	/// Still inside its delay
	Pending,
	/// Running, with the eased progress for this instant
	Running(f64),
	/// Finished; holds the eased progress it rests at
	Complete(f64),
}

/// One animation step: a set of properties on a single target moving over a duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<K> {
	pub target: K,
	pub properties: Vec<PropertyTween>,
	pub duration: Duration,
	pub delay: Duration,
	pub ease: Ease,
	pub repeat: Repeat,
	pub yoyo: bool,
}

impl<K> Tween<K> {
	/// Starts a tween with no properties; properties are added with the builder methods.
	pub fn new(target: K, duration: Duration) -> Self {
		Self {
			target,
			properties: Vec::new(),
			duration,
			delay: Duration::ZERO,
			ease: Ease::default(),
			repeat: Repeat::Count(0),
			yoyo: false,
		}
	}

	/// Animates from the current value to `to`.
	pub fn to(mut self, property: Property, to: f64) -> Self {
		self.properties.push(PropertyTween {
			property,
			from: None,
			to: Target::Absolute(to),
		});
		self
	}

	/// Animates from the current value by `offset`.
	pub fn by(mut self, property: Property, offset: f64) -> Self {
		self.properties.push(PropertyTween {
			property,
			from: None,
			to: Target::Relative(offset),
		});
		self
	}

	pub fn from_to(mut self, property: Property, from: f64, to: f64) -> Self {
		self.properties.push(PropertyTween {
			property,
			from: Some(from),
			to: Target::Absolute(to),
		});
		self
	}

	pub fn ease(mut self, ease: Ease) -> Self {
		self.ease = ease;
		self
	}

	pub fn delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	pub fn repeat(mut self, repeat: Repeat) -> Self {
		self.repeat = repeat;
		self
	}

	pub fn yoyo(mut self, yoyo: bool) -> Self {
		self.yoyo = yoyo;
		self
	}

	pub fn duration_ms(&self) -> f64 {
		self.duration.as_secs_f64() * 1000.0
	}

	pub fn delay_ms(&self) -> f64 {
		self.delay.as_secs_f64() * 1000.0
	}

	/// Delay plus every cycle; infinite for endlessly repeating tweens.
	pub fn total_ms(&self) -> f64 {
		match self.repeat {
			Repeat::Count(extra) => self.delay_ms() + self.duration_ms() * (f64::from(extra) + 1.0),
			Repeat::Infinite => f64::INFINITY,
		}
	}

	pub fn phase(&self, elapsed_ms: f64) -> Phase {
		let local = elapsed_ms - self.delay_ms();
		if local < 0.0 {
			return Phase::Pending;
		}

		let duration = self.duration_ms();
		let resting = match self.repeat {
			Repeat::Count(extra) if self.yoyo && extra % 2 == 1 => 0.0,
			_ => 1.0,
		};
		if duration <= 0.0 {
			return Phase::Complete(resting);
		}

		let cycle = (local / duration).floor();
		match self.repeat {
			Repeat::Count(extra) if cycle > f64::from(extra) => return Phase::Complete(self.ease.apply(resting)),
			_ => (),
		}

		let fraction = (local - cycle * duration) / duration;
		let reversed = self.yoyo && cycle % 2.0 == 1.0;
		let progress = if reversed { 1.0 - fraction } else { fraction };
		Phase::Running(self.ease.apply(progress))
	}

	#[cfg(test)]
	pub(crate) fn touches(&self, property: Property) -> bool {
		self.properties.iter().any(|tween| tween.property == property)
	}
}
