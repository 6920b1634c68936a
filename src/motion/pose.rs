// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A single animatable property of an element.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Property {
	/// Horizontal translation in pixels
	X,
	/// Vertical translation in pixels
	Y,
	/// Rotation in degrees
	Rotation,
	Scale,
	Opacity,
	ShadowOffsetY,
	ShadowBlur,
	ShadowAlpha,
	/// Background position in percent, applied to both axes
	BackgroundPosition,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
	pub offset_y: f64,
	pub blur: f64,
	pub alpha: f64,
}

/// The animated state of one element. Shadow and background position are only present once something has set
/// them, so stages can leave those styles alone on elements that never animate them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
	pub x: f64,
	pub y: f64,
	pub rotation: f64,
	pub scale: f64,
	pub opacity: f64,
	pub shadow: Option<Shadow>,
	pub background_position: Option<f64>,
}

impl Default for Pose {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			rotation: 0.0,
			scale: 1.0,
			opacity: 1.0,
			shadow: None,
			background_position: None,
		}
	}
}

impl Pose {
	pub fn get(&self, property: Property) -> f64 {
		let shadow = self.shadow.unwrap_or_default();
		match property {
			Property::X => self.x,
			Property::Y => self.y,
			Property::Rotation => self.rotation,
			Property::Scale => self.scale,
			Property::Opacity => self.opacity,
			Property::ShadowOffsetY => shadow.offset_y,
			Property::ShadowBlur => shadow.blur,
			Property::ShadowAlpha => shadow.alpha,
			Property::BackgroundPosition => self.background_position.unwrap_or(0.0),
		}
	}

	pub fn set(&mut self, property: Property, value: f64) {
		match property {
			Property::X => self.x = value,
			Property::Y => self.y = value,
			Property::Rotation => self.rotation = value,
			Property::Scale => self.scale = value,
			Property::Opacity => self.opacity = value,
			Property::ShadowOffsetY => self.shadow.get_or_insert_default().offset_y = value,
			Property::ShadowBlur => self.shadow.get_or_insert_default().blur = value,
			Property::ShadowAlpha => self.shadow.get_or_insert_default().alpha = value,
			Property::BackgroundPosition => self.background_position = Some(value),
		}
	}

	/// CSS `transform` value, in the translate/rotate/scale order
	pub fn transform_css(&self) -> String {
		format!(
			"translate({}px, {}px) rotate({}deg) scale({})",
			self.x, self.y, self.rotation, self.scale
		)
	}

	/// CSS `opacity` value, clamped since overshooting curves can push it out of range
	pub fn opacity_css(&self) -> String {
		self.opacity.clamp(0.0, 1.0).to_string()
	}
}
