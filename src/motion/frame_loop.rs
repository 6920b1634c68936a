// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

struct FrameLoopState {
	window: Window,
	request_id: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoopState {
	fn request_frame(&self) {
		let callback = self.callback.borrow();
		let Some(callback) = callback.as_ref() else {
			return;
		};
		match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
			Ok(id) => self.request_id.set(Some(id)),
			Err(error) => tracing::warn!(source = ?error, "Failed to request an animation frame"),
		}
	}
}

/// Calls a function on every animation frame until it returns `false` or the loop is dropped.
pub struct FrameLoop {
	state: Rc<FrameLoopState>,
}

impl FrameLoop {
	/// Starts the loop. Returns `None` outside a browser window.
	pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let state = Rc::new(FrameLoopState {
			window,
			request_id: Cell::new(None),
			callback: RefCell::new(None),
		});

		let weak_state = Rc::downgrade(&state);
		let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
			let Some(state) = weak_state.upgrade() else {
				return;
			};
			state.request_id.set(None);
			if on_frame(timestamp) {
				state.request_frame();
			}
		});
		*state.callback.borrow_mut() = Some(callback);
		state.request_frame();

		Some(Self { state })
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let Some(id) = self.state.request_id.take() {
			if let Err(error) = self.state.window.cancel_animation_frame(id) {
				tracing::warn!(source = ?error, "Failed to cancel an animation frame");
			}
		}
		self.state.callback.borrow_mut().take();
	}
}

/// Milliseconds on the same clock as animation frame timestamps.
pub fn now_ms() -> f64 {
	web_sys::window()
		.and_then(|window| window.performance())
		.map(|performance| performance.now())
		.unwrap_or(0.0)
}
