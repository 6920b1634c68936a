// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::tween::Tween;
use std::time::Duration;

/// Placement of a step relative to what's already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
	/// Starts when the timeline currently ends
	AfterPrevious,
	/// Starts this long before the timeline currently ends (never before the timeline's start)
	Overlap(Duration),
	/// Starts at a fixed offset from the timeline's start
	At(Duration),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry<K> {
	pub offset_ms: f64,
	pub tween: Tween<K>,
}

/// An ordered sequence of tweens with offsets relative to the timeline's start.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<K> {
	entries: Vec<TimelineEntry<K>>,
	end_ms: f64,
}

impl<K> Default for Timeline<K> {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
			end_ms: 0.0,
		}
	}
}

impl<K> Timeline<K> {
	pub fn new() -> Self {
		Self::default()
	}

	fn resolve_position(&self, position: Position) -> f64 {
		match position {
			Position::AfterPrevious => self.end_ms,
			Position::Overlap(overlap) => (self.end_ms - overlap.as_secs_f64() * 1000.0).max(0.0),
			Position::At(offset) => offset.as_secs_f64() * 1000.0,
		}
	}

	fn push(&mut self, offset_ms: f64, tween: Tween<K>) {
		self.end_ms = self.end_ms.max(offset_ms + tween.total_ms());
		self.entries.push(TimelineEntry { offset_ms, tween });
	}

	pub fn add(mut self, tween: Tween<K>, position: Position) -> Self {
		let offset_ms = self.resolve_position(position);
		self.push(offset_ms, tween);
		self
	}

	/// Adds a group of tweens whose start times are spaced `each` apart, the first one placed at `position`.
	pub fn stagger(mut self, tweens: impl IntoIterator<Item = Tween<K>>, each: Duration, position: Position) -> Self {
		let first_offset_ms = self.resolve_position(position);
		let each_ms = each.as_secs_f64() * 1000.0;
		for (index, tween) in tweens.into_iter().enumerate() {
			self.push(first_offset_ms + each_ms * index as f64, tween);
		}
		self
	}

	#[cfg(test)]
	fn duration_ms(&self) -> f64 {
		self.end_ms
	}

	#[cfg(test)]
	fn entries(&self) -> &[TimelineEntry<K>] {
		&self.entries
	}

	pub fn into_entries(self) -> Vec<TimelineEntry<K>> {
		self.entries
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::motion::pose::Property;

	fn step(target: u8, duration_ms: u64) -> Tween<u8> {
		Tween::new(target, Duration::from_millis(duration_ms)).to(Property::Opacity, 1.0)
	}

	fn offsets(timeline: &Timeline<u8>) -> Vec<(u8, f64)> {
		timeline
			.entries()
			.iter()
			.map(|entry| (entry.tween.target, entry.offset_ms))
			.collect()
	}

	#[test]
	fn sequential_steps_follow_each_other() {
		let timeline = Timeline::new()
			.add(step(0, 1000), Position::AfterPrevious)
			.add(step(1, 500), Position::AfterPrevious);
		assert_eq!(offsets(&timeline), vec![(0, 0.0), (1, 1000.0)]);
		assert_eq!(timeline.duration_ms(), 1500.0);
	}

	#[test]
	fn staggered_group_overlapping_the_previous_step() {
		let timeline = Timeline::new()
			.add(step(0, 1000), Position::AfterPrevious)
			.stagger(
				[step(1, 800), step(2, 800)],
				Duration::from_millis(200),
				Position::Overlap(Duration::from_millis(500)),
			)
			.add(step(3, 600), Position::AfterPrevious);
		assert_eq!(
			offsets(&timeline),
			vec![(0, 0.0), (1, 500.0), (2, 700.0), (3, 1500.0)]
		);
		assert_eq!(timeline.duration_ms(), 2100.0);
	}

	#[test]
	fn overlap_never_starts_before_zero() {
		let timeline = Timeline::new().add(step(0, 100), Position::Overlap(Duration::from_secs(1)));
		assert_eq!(offsets(&timeline), vec![(0, 0.0)]);
	}

	#[test]
	fn absolute_positions_do_not_depend_on_previous_steps() {
		let timeline = Timeline::new()
			.add(step(0, 1000), Position::AfterPrevious)
			.add(step(1, 100), Position::At(Duration::from_millis(250)));
		assert_eq!(offsets(&timeline), vec![(0, 0.0), (1, 250.0)]);
		assert_eq!(timeline.duration_ms(), 1000.0);
	}
}
