// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::f64::consts::{PI, TAU};

/// Easing curves used by the tween engine. Every curve maps progress in `[0, 1]` to an eased value that starts
/// at 0 and ends at 1, but may leave that range in between (overshooting curves).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
	Linear,
	Power2In,
	Power2Out,
	SineInOut,
	BackOut { overshoot: f64 },
	ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
	pub const fn back_out(overshoot: f64) -> Self {
		Self::BackOut { overshoot }
	}

	pub const fn elastic_out(amplitude: f64, period: f64) -> Self {
		Self::ElasticOut { amplitude, period }
	}

	pub fn apply(&self, progress: f64) -> f64 {
		if progress <= 0.0 {
			return 0.0;
		}
		if progress >= 1.0 {
			return 1.0;
		}

		match *self {
			Self::Linear => progress,
			Self::Power2In => progress.powi(3),
			Self::Power2Out => 1.0 - (1.0 - progress).powi(3),
			Self::SineInOut => -((PI * progress).cos() - 1.0) / 2.0,
			Self::BackOut { overshoot } => {
				let shifted = progress - 1.0;
				shifted * shifted * ((overshoot + 1.0) * shifted + overshoot) + 1.0
			}
			Self::ElasticOut { amplitude, period } => {
				// Amplitudes below 1 can't reach the target, so they're clamped like other tween libraries do.
				let amplitude = amplitude.max(1.0);
				let phase_shift = period / TAU * (1.0 / amplitude).asin();
				amplitude * 2f64.powf(-10.0 * progress) * ((progress - phase_shift) * TAU / period).sin() + 1.0
			}
		}
	}
}

impl Default for Ease {
	fn default() -> Self {
		Self::Power2Out
	}
}
