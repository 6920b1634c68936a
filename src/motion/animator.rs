// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pose::{Pose, Property};
use super::timeline::Timeline;
use super::tween::{Phase, ResolvedProperty, Tween};
use std::collections::HashMap;
use std::hash::Hash;

struct ActiveTween<K> {
	tween: Tween<K>,
	start_ms: f64,
	/// Filled in when the tween first renders
	resolved: Option<Vec<ResolvedProperty>>,
}

/// Owns the pose of every animated element and the tweens currently moving them.
///
/// Time is supplied by the caller in milliseconds (frame timestamps in the browser, plain numbers in tests).
/// Tweens are sampled in the order they were played. When a tween first renders, it takes its properties away
/// from tweens that are already rendering the same element, so a finished hover animation doesn't get undone
/// by an older, still-running one.
pub struct Animator<K> {
	poses: HashMap<K, Pose>,
	active: Vec<ActiveTween<K>>,
	dirty: Vec<K>,
}

impl<K> Default for Animator<K> {
	fn default() -> Self {
		Self {
			poses: HashMap::new(),
			active: Vec::new(),
			dirty: Vec::new(),
		}
	}
}

impl<K: Copy + Eq + Hash> Animator<K> {
	pub fn new() -> Self {
		Self::default()
	}

	fn mark_dirty(&mut self, target: K) {
		if !self.dirty.contains(&target) {
			self.dirty.push(target);
		}
	}

	pub fn pose(&self, target: K) -> Pose {
		self.poses.get(&target).copied().unwrap_or_default()
	}

	/// Sets a property immediately, without animating it.
	pub fn set(&mut self, target: K, property: Property, value: f64) {
		self.poses.entry(target).or_default().set(property, value);
		self.mark_dirty(target);
	}

	pub fn play(&mut self, tween: Tween<K>, now_ms: f64) {
		self.active.push(ActiveTween {
			tween,
			start_ms: now_ms,
			resolved: None,
		});
	}

	/// Schedules every step of a timeline relative to `now_ms`. Explicit starting values are applied right away so
	/// elements waiting for their step already show their initial state.
	pub fn play_timeline(&mut self, timeline: Timeline<K>, now_ms: f64) {
		let entries = timeline.into_entries();

		// Later steps are applied first so the earliest step's starting values are the ones left showing.
		for entry in entries.iter().rev() {
			for property in entry.tween.properties.iter() {
				if let Some(from) = property.from {
					self.set(entry.tween.target, property.property, from);
				}
			}
		}

		for entry in entries {
			self.active.push(ActiveTween {
				tween: entry.tween,
				start_ms: now_ms + entry.offset_ms,
				resolved: None,
			});
		}
	}

	fn take_over(&mut self, index: usize) {
		let target = self.active[index].tween.target;
		let claimed: Vec<Property> = self.active[index]
			.tween
			.properties
			.iter()
			.map(|tween| tween.property)
			.collect();

		for (other_index, other) in self.active.iter_mut().enumerate() {
			if other_index == index || other.tween.target != target {
				continue;
			}
			let Some(resolved) = other.resolved.as_mut() else {
				continue;
			};
			resolved.retain(|tween| !claimed.contains(&tween.property));
			other.tween.properties.retain(|tween| !claimed.contains(&tween.property));
		}
	}

	/// Advances every tween to `now_ms` and returns the elements whose pose changed since the last tick.
	pub fn tick(&mut self, now_ms: f64) -> Vec<K> {
		let mut finished = false;
		for index in 0..self.active.len() {
			let phase = {
				let active = &self.active[index];
				active.tween.phase(now_ms - active.start_ms)
			};
			let eased = match phase {
				Phase::Pending => continue,
				Phase::Running(eased) => eased,
				Phase::Complete(eased) => {
					finished = true;
					eased
				}
			};

			if self.active[index].resolved.is_none() {
				self.take_over(index);
			}

			let active = &mut self.active[index];
			let target = active.tween.target;
			let pose = self.poses.entry(target).or_default();
			let resolved = active
				.resolved
				.get_or_insert_with(|| active.tween.properties.iter().map(|tween| tween.resolve(pose)).collect());
			for property in resolved.iter() {
				pose.set(property.property, property.value_at(eased));
			}
			if !self.dirty.contains(&target) {
				self.dirty.push(target);
			}
		}

		if finished {
			self.active
				.retain(|active| !matches!(active.tween.phase(now_ms - active.start_ms), Phase::Complete(_)));
		}
		self.active.retain(|active| !active.tween.properties.is_empty());

		std::mem::take(&mut self.dirty)
	}

	/// Drops `properties` from the tweens on `target` that haven't started by `now_ms`, so a step scheduled for
	/// later can't undo an animation played now. Tweens left with nothing to animate are removed.
	pub fn cancel_pending(&mut self, target: K, properties: &[Property], now_ms: f64) {
		for active in self.active.iter_mut() {
			if active.tween.target != target || active.resolved.is_some() {
				continue;
			}
			if active.tween.phase(now_ms - active.start_ms) == Phase::Pending {
				active.tween.properties.retain(|tween| !properties.contains(&tween.property));
			}
		}
		self.active.retain(|active| !active.tween.properties.is_empty());
	}

	/// Stops every tween and forgets every pose.
	pub fn clear(&mut self) {
		self.active.clear();
		self.poses.clear();
		self.dirty.clear();
	}

	#[cfg(test)]
	fn active_count(&self) -> usize {
		self.active.len()
	}

	#[cfg(test)]
	fn is_animating(&self, target: K) -> bool {
		self.active.iter().any(|active| active.tween.target == target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::motion::easing::Ease;
	use crate::motion::timeline::Position;
	use crate::motion::tween::Repeat;
	use std::time::Duration;

	#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
	enum Key {
		Card,
		Badge,
	}

	fn linear_to(target: Key, property: Property, to: f64, duration_ms: u64) -> Tween<Key> {
		Tween::new(target, Duration::from_millis(duration_ms))
			.to(property, to)
			.ease(Ease::Linear)
	}

	#[test]
	fn tween_captures_the_current_value_when_it_starts() {
		let mut animator = Animator::new();
		animator.set(Key::Card, Property::X, 10.0);
		animator.play(linear_to(Key::Card, Property::X, 110.0, 100), 0.0);

		animator.tick(50.0);
		assert_eq!(animator.pose(Key::Card).x, 60.0);

		animator.tick(100.0);
		assert_eq!(animator.pose(Key::Card).x, 110.0);
		assert_eq!(animator.active_count(), 0);
	}

	#[test]
	fn tick_reports_changed_elements_once() {
		let mut animator = Animator::new();
		animator.play(linear_to(Key::Card, Property::X, 1.0, 100), 0.0);
		animator.play(linear_to(Key::Card, Property::Y, 1.0, 100), 0.0);
		assert_eq!(animator.tick(10.0), vec![Key::Card]);
		assert!(animator.tick(1000.0).contains(&Key::Card));
		assert!(animator.tick(2000.0).is_empty());
	}

	#[test]
	fn timeline_applies_starting_values_before_its_steps_begin() {
		let mut animator = Animator::new();
		let timeline = Timeline::new()
			.add(
				Tween::new(Key::Card, Duration::from_millis(100)).from_to(Property::Opacity, 0.0, 1.0),
				Position::AfterPrevious,
			)
			.add(
				Tween::new(Key::Badge, Duration::from_millis(100))
					.from_to(Property::X, -100.0, 0.0)
					.ease(Ease::Linear),
				Position::AfterPrevious,
			);
		animator.play_timeline(timeline, 1000.0);

		let dirty = animator.tick(1000.0);
		assert!(dirty.contains(&Key::Badge));
		assert_eq!(animator.pose(Key::Card).opacity, 0.0);
		assert_eq!(animator.pose(Key::Badge).x, -100.0);

		animator.tick(1150.0);
		assert_eq!(animator.pose(Key::Card).opacity, 1.0);
		assert_eq!(animator.pose(Key::Badge).x, -50.0);
	}

	#[test]
	fn steps_of_one_timeline_chain_on_the_same_property() {
		let mut animator = Animator::new();
		let timeline = Timeline::new()
			.add(linear_to(Key::Card, Property::Scale, 0.5, 100), Position::AfterPrevious)
			.add(linear_to(Key::Card, Property::Scale, 1.0, 100), Position::AfterPrevious);
		animator.play_timeline(timeline, 0.0);

		animator.tick(100.0);
		assert_eq!(animator.pose(Key::Card).scale, 0.5);
		animator.tick(150.0);
		assert_eq!(animator.pose(Key::Card).scale, 0.75);
		animator.tick(200.0);
		assert_eq!(animator.pose(Key::Card).scale, 1.0);
	}

	#[test]
	fn newer_tween_takes_over_shared_properties() {
		let mut animator = Animator::new();
		let slow = Tween::new(Key::Card, Duration::from_millis(1000))
			.to(Property::Scale, 2.0)
			.to(Property::Opacity, 0.0)
			.ease(Ease::Linear);
		animator.play(slow, 0.0);
		animator.tick(100.0);

		animator.play(linear_to(Key::Card, Property::Scale, 1.0, 100), 100.0);
		animator.tick(200.0);
		animator.tick(500.0);
		assert_eq!(animator.pose(Key::Card).scale, 1.0);
		assert_eq!(animator.pose(Key::Card).opacity, 0.5);
	}

	#[test]
	fn endless_tweens_keep_running() {
		let mut animator = Animator::new();
		let wobble = linear_to(Key::Badge, Property::Rotation, 5.0, 100)
			.repeat(Repeat::Infinite)
			.yoyo(true);
		animator.play(wobble, 0.0);
		animator.tick(1_000_000.0);
		assert!(animator.is_animating(Key::Badge));
		assert!(animator.tick(1_000_050.0).contains(&Key::Badge));
	}

	#[test]
	fn cancelling_pending_steps_keeps_the_ones_already_running() {
		let mut animator = Animator::new();
		let later = Tween::new(Key::Card, Duration::from_millis(100))
			.to(Property::Scale, 3.0)
			.to(Property::X, 50.0)
			.ease(Ease::Linear)
			.delay(Duration::from_millis(500));
		animator.play(later, 0.0);
		animator.play(linear_to(Key::Card, Property::Opacity, 0.0, 1000), 0.0);
		animator.play(
			linear_to(Key::Badge, Property::Scale, 2.0, 100).delay(Duration::from_millis(500)),
			0.0,
		);
		animator.tick(100.0);

		animator.cancel_pending(Key::Card, &[Property::Scale, Property::Opacity], 100.0);
		animator.tick(1000.0);
		let card = animator.pose(Key::Card);
		assert_eq!(card.scale, 1.0);
		assert_eq!(card.x, 50.0);
		assert_eq!(card.opacity, 0.0);
		assert_eq!(animator.pose(Key::Badge).scale, 2.0);
	}

	#[test]
	fn steps_left_empty_by_cancelling_are_dropped() {
		let mut animator = Animator::new();
		animator.play(
			linear_to(Key::Card, Property::Scale, 3.0, 100).delay(Duration::from_millis(500)),
			0.0,
		);
		animator.cancel_pending(Key::Card, &[Property::Scale], 0.0);
		assert_eq!(animator.active_count(), 0);
		assert!(!animator.is_animating(Key::Card));
	}

	#[test]
	fn clear_drops_tweens_and_poses() {
		let mut animator = Animator::new();
		animator.set(Key::Card, Property::X, 4.0);
		animator.play(linear_to(Key::Card, Property::X, 8.0, 100), 0.0);
		animator.clear();
		assert_eq!(animator.active_count(), 0);
		assert_eq!(animator.pose(Key::Card), Pose::default());
		assert!(animator.tick(50.0).is_empty());
	}
}
