// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::motion::{Ease, Property, Repeat, Tween};
use rand::Rng;
use std::time::Duration;

/// How far a particle may drift from its starting point along each axis, in pixels
const DRIFT_RANGE: f64 = 50.0;
const DRIFT_MIN_DURATION_MS: f64 = 3000.0;
const DRIFT_DURATION_SPREAD_MS: f64 = 2000.0;
const DRIFT_DELAY_STEP: Duration = Duration::from_millis(100);

/// A decorative dot floating around the not-found page.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Position within the page, in percent of its width and height
	pub position_percent: (f64, f64),
	/// Offset the particle drifts to before drifting back, in pixels
	pub drift: (f64, f64),
	/// Rotation reached at the end of each drift, in degrees
	pub rotation: f64,
	pub duration: Duration,
	pub delay: Duration,
}

impl Particle {
	pub fn random(index: usize, rng: &mut impl Rng) -> Self {
		let position_percent = (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
		let drift = (
			rng.gen_range(-DRIFT_RANGE..DRIFT_RANGE),
			rng.gen_range(-DRIFT_RANGE..DRIFT_RANGE),
		);
		let rotation = rng.gen_range(0.0..360.0);
		let duration_ms = DRIFT_MIN_DURATION_MS + rng.gen_range(0.0..DRIFT_DURATION_SPREAD_MS);

		Self {
			position_percent,
			drift,
			rotation,
			duration: Duration::from_secs_f64(duration_ms / 1000.0),
			delay: DRIFT_DELAY_STEP * index as u32,
		}
	}

	/// The endless back-and-forth float for this particle.
	pub fn drift_tween<K>(&self, target: K) -> Tween<K> {
		Tween::new(target, self.duration)
			.by(Property::X, self.drift.0)
			.by(Property::Y, self.drift.1)
			.to(Property::Rotation, self.rotation)
			.ease(Ease::SineInOut)
			.delay(self.delay)
			.repeat(Repeat::Infinite)
			.yoyo(true)
	}
}

/// Scatters `count` particles across the page.
pub fn scatter(count: usize, rng: &mut impl Rng) -> Vec<Particle> {
	(0..count).map(|index| Particle::random(index, rng)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn particles_stay_within_their_ranges() {
		let mut rng = SmallRng::seed_from_u64(404);
		for particle in scatter(200, &mut rng) {
			let (left, top) = particle.position_percent;
			assert!((0.0..100.0).contains(&left));
			assert!((0.0..100.0).contains(&top));
			assert!(particle.drift.0.abs() <= DRIFT_RANGE);
			assert!(particle.drift.1.abs() <= DRIFT_RANGE);
			assert!((0.0..360.0).contains(&particle.rotation));
			assert!(particle.duration >= Duration::from_secs(3));
			assert!(particle.duration <= Duration::from_secs(5));
		}
	}

	#[test]
	fn delays_grow_with_the_index() {
		let mut rng = SmallRng::seed_from_u64(1);
		let particles = scatter(15, &mut rng);
		assert_eq!(particles.len(), 15);
		assert_eq!(particles[0].delay, Duration::ZERO);
		assert_eq!(particles[14].delay, Duration::from_millis(1400));
	}

	#[test]
	fn drift_is_relative_and_endless() {
		let mut rng = SmallRng::seed_from_u64(7);
		let particle = Particle::random(3, &mut rng);
		let tween = particle.drift_tween(());
		assert_eq!(tween.repeat, Repeat::Infinite);
		assert!(tween.yoyo);
		assert_eq!(tween.delay, Duration::from_millis(300));
		assert!(tween.touches(Property::X));
		assert!(tween.touches(Property::Y));
		assert!(tween.touches(Property::Rotation));
	}
}
