// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A small tween engine: easing curves, tweens, timelines and an animator that turns them into element poses.
//! Browser-specific driving lives in `frame_loop`.

pub mod animator;
pub mod easing;
#[cfg(feature = "hydrate")]
pub mod frame_loop;
pub mod pose;
pub mod timeline;
pub mod tween;

pub use animator::Animator;
pub use easing::Ease;
pub use pose::{Pose, Property};
pub use timeline::{Position, Timeline};
pub use tween::{Repeat, Tween};
