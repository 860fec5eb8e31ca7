//! Frame scheduling and the perpetual update/draw loop.
//!
//! The loop is one recursive registration: each frame runs [`ParticleField::step`] and then
//! asks the scheduler for the next frame. It never stops on its own; page teardown ends it.
//! [`LoopHandle::stop`] exists so tests can bound a run.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::draw::DrawSurface;
use super::field::ParticleField;
use super::surface::SharedDimensions;

/// Handle for a requested frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// Host primitive that runs a callback once, before the next repaint.
pub trait FrameScheduler {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId>;

	fn cancel_frame(&self, id: FrameId);
}

impl FrameScheduler for Window {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
		let cb = Closure::once_into_js(move || callback());
		match self.request_animation_frame(cb.unchecked_ref::<js_sys::Function>()) {
			Ok(id) => Some(FrameId(id)),
			Err(e) => {
				warn!("ambient: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&self, id: FrameId) {
		if let Err(e) = self.cancel_animation_frame(id.0) {
			warn!("ambient: cancelAnimationFrame failed: {:?}", e);
		}
	}
}

/// Loop bookkeeping shared between the running loop and its handle.
struct LoopState {
	scheduler: Rc<dyn FrameScheduler>,
	pending: Cell<Option<FrameId>>,
	stopped: Cell<bool>,
	frames: Cell<u64>,
}

/// Observes (and, for tests, stops) a running frame loop.
#[derive(Clone)]
pub struct LoopHandle {
	state: Rc<LoopState>,
}

impl LoopHandle {
	/// Frames completed so far.
	pub fn frames(&self) -> u64 {
		self.state.frames.get()
	}

	pub fn is_running(&self) -> bool {
		!self.state.stopped.get()
	}

	/// Cancel the pending frame and refuse to schedule more.
	pub fn stop(&self) {
		self.state.stopped.set(true);
		if let Some(id) = self.state.pending.take() {
			self.state.scheduler.cancel_frame(id);
		}
	}
}

struct FrameLoop<S: ?Sized> {
	state: Rc<LoopState>,
	field: Rc<RefCell<ParticleField>>,
	bounds: SharedDimensions,
	failing: Cell<bool>,
	surface: Rc<S>,
}

impl<S: DrawSurface + ?Sized + 'static> FrameLoop<S> {
	fn schedule(self: &Rc<Self>) {
		if self.state.stopped.get() {
			return;
		}
		let this = Rc::clone(self);
		let id = self
			.state
			.scheduler
			.request_frame(Box::new(move || this.frame()));
		if id.is_none() {
			warn!("ambient: could not schedule next frame, particle loop halted");
		}
		self.state.pending.set(id);
	}

	fn frame(self: Rc<Self>) {
		self.state.pending.set(None);
		if self.state.stopped.get() {
			return;
		}

		// Bounds are read fresh so a resize between frames applies immediately.
		let (width, height) = self.bounds.get().as_bounds();
		let result = self
			.field
			.borrow_mut()
			.step(self.surface.as_ref(), width, height);
		match result {
			Err(e) if !self.failing.replace(true) => warn!("ambient: frame failed: {}", e),
			Err(_) => {}
			Ok(()) if self.failing.replace(false) => info!("ambient: frames drawing again"),
			Ok(()) => {}
		}
		self.state.frames.set(self.state.frames.get() + 1);

		self.schedule();
	}
}

/// Start stepping `field` once per frame, forever.
///
/// Draw failures are logged and the next frame is still scheduled. Only the first failure of
/// a run of failing frames is logged.
pub fn run_forever<S>(
	scheduler: Rc<dyn FrameScheduler>,
	field: Rc<RefCell<ParticleField>>,
	surface: Rc<S>,
	bounds: SharedDimensions,
) -> LoopHandle
where
	S: DrawSurface + ?Sized + 'static,
{
	let state = Rc::new(LoopState {
		scheduler,
		pending: Cell::new(None),
		stopped: Cell::new(false),
		frames: Cell::new(0),
	});
	let frame_loop = Rc::new(FrameLoop {
		state: Rc::clone(&state),
		field,
		bounds,
		failing: Cell::new(false),
		surface,
	});
	frame_loop.schedule();
	LoopHandle { state }
}

#[cfg(test)]
pub(crate) mod manual {
	//! Scheduler that only runs frames when the test asks.

	use super::*;

	#[derive(Default)]
	pub struct ManualFrames {
		next_id: Cell<i32>,
		queue: RefCell<Vec<(FrameId, Box<dyn FnOnce()>)>>,
	}

	impl ManualFrames {
		pub fn queued(&self) -> usize {
			self.queue.borrow().len()
		}

		/// Run up to `n` refresh ticks. Callbacks queued during a tick wait for the next one.
		pub fn run_frames(&self, n: usize) -> usize {
			let mut ran = 0;
			for _ in 0..n {
				let due = std::mem::take(&mut *self.queue.borrow_mut());
				if due.is_empty() {
					break;
				}
				for (_, cb) in due {
					cb();
				}
				ran += 1;
			}
			ran
		}
	}

	impl FrameScheduler for ManualFrames {
		fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
			let id = FrameId(self.next_id.get());
			self.next_id.set(id.0 + 1);
			self.queue.borrow_mut().push((id, callback));
			Some(id)
		}

		fn cancel_frame(&self, id: FrameId) {
			self.queue.borrow_mut().retain(|(queued, _)| *queued != id);
		}
	}
}
