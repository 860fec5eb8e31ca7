//! One debounced resize fan-out shared by everything that reacts to the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::components::ambient::{Dimensions, Viewport};
use crate::timing::{Debouncer, TimerHost};

type Subscriber = Box<dyn FnMut(Dimensions)>;

/// Collapses bursts of resize notifications and hands the settled viewport size to every
/// subscriber, in subscription order.
pub struct ResizeDispatcher {
	debouncer: Debouncer,
	viewport: Rc<dyn Viewport>,
	subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl ResizeDispatcher {
	pub fn new(timers: Rc<dyn TimerHost>, viewport: Rc<dyn Viewport>, delay_ms: u32) -> Self {
		Self {
			debouncer: Debouncer::new(timers, delay_ms),
			viewport,
			subscribers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	pub fn subscribe(&self, f: impl FnMut(Dimensions) + 'static) {
		self.subscribers.borrow_mut().push(Box::new(f));
	}

	pub fn subscriber_count(&self) -> usize {
		self.subscribers.borrow().len()
	}

	/// Record a raw resize event. Subscribers run once events stop for the debounce delay.
	pub fn notify(&self) {
		let viewport = Rc::clone(&self.viewport);
		let subscribers = Rc::clone(&self.subscribers);
		self.debouncer.call(move || match viewport.inner_size() {
			Some(dims) => fan_out(&subscribers, dims),
			None => warn!("resize: viewport size unavailable"),
		});
	}

	/// Deliver `dims` to every subscriber right away.
	#[cfg(test)]
	pub(crate) fn dispatch(&self, dims: Dimensions) {
		fan_out(&self.subscribers, dims);
	}

	/// Route the window's `resize` event into [`ResizeDispatcher::notify`] for the page lifetime.
	pub fn listen(self: &Rc<Self>, window: &Window) -> Result<(), JsValue> {
		let dispatcher = Rc::clone(self);
		let cb = Closure::<dyn FnMut()>::new(move || dispatcher.notify());
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
		cb.forget();
		Ok(())
	}
}

fn fan_out(subscribers: &RefCell<Vec<Subscriber>>, dims: Dimensions) {
	debug!("resize: settled at {}x{}", dims.width, dims.height);
	for f in subscribers.borrow_mut().iter_mut() {
		f(dims);
	}
}
