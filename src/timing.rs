//! Timer abstraction over `setTimeout` and a trailing-edge debouncer built on it.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Handle returned by [`TimerHost::set_timeout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// One-shot timers.
pub trait TimerHost {
	/// Run `callback` once after `delay_ms`. `None` if the host refused the timer.
	fn set_timeout(&self, callback: Box<dyn FnOnce()>, delay_ms: u32) -> Option<TimerId>;

	fn clear_timeout(&self, id: TimerId);
}

impl TimerHost for Window {
	fn set_timeout(&self, callback: Box<dyn FnOnce()>, delay_ms: u32) -> Option<TimerId> {
		let cb = Closure::once_into_js(move || callback());
		match self.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.unchecked_ref::<js_sys::Function>(),
			delay_ms.min(i32::MAX as u32) as i32,
		) {
			Ok(id) => Some(TimerId(id)),
			Err(e) => {
				warn!("timing: setTimeout failed: {:?}", e);
				None
			}
		}
	}

	fn clear_timeout(&self, id: TimerId) {
		self.clear_timeout_with_handle(id.0);
	}
}

/// Run `f` after `delay_ms`, ignoring a host refusal.
pub fn after(timers: &dyn TimerHost, delay_ms: u32, f: impl FnOnce() + 'static) {
	let _ = timers.set_timeout(Box::new(f), delay_ms);
}

/// Delays a call until no further calls have arrived for `delay_ms`.
///
/// Each call cancels the pending one, so only the last of a burst runs.
pub struct Debouncer {
	timers: Rc<dyn TimerHost>,
	delay_ms: u32,
	pending: Rc<Cell<Option<TimerId>>>,
}

impl Debouncer {
	pub fn new(timers: Rc<dyn TimerHost>, delay_ms: u32) -> Self {
		Self {
			timers,
			delay_ms,
			pending: Rc::new(Cell::new(None)),
		}
	}

	pub fn is_pending(&self) -> bool {
		self.pending.get().is_some()
	}

	pub fn call(&self, f: impl FnOnce() + 'static) {
		self.cancel();
		let pending = Rc::clone(&self.pending);
		let id = self.timers.set_timeout(
			Box::new(move || {
				pending.set(None);
				f();
			}),
			self.delay_ms,
		);
		self.pending.set(id);
	}

	pub fn cancel(&self) {
		if let Some(id) = self.pending.take() {
			self.timers.clear_timeout(id);
		}
	}
}

#[cfg(test)]
pub(crate) mod manual {
	//! Virtual-clock timer host for tests.

	use std::cell::{Cell, RefCell};

	use super::*;

	struct Entry {
		id: TimerId,
		due: u64,
		callback: Box<dyn FnOnce()>,
	}

	#[derive(Default)]
	pub struct ManualTimers {
		now: Cell<u64>,
		next_id: Cell<i32>,
		queue: RefCell<Vec<Entry>>,
	}

	impl ManualTimers {
		pub fn now(&self) -> u64 {
			self.now.get()
		}

		pub fn pending(&self) -> usize {
			self.queue.borrow().len()
		}

		/// Move the clock forward, firing due timers in deadline order.
		pub fn advance(&self, ms: u64) {
			let target = self.now.get() + ms;
			loop {
				let next = {
					let mut queue = self.queue.borrow_mut();
					let idx = queue
						.iter()
						.enumerate()
						.filter(|(_, e)| e.due <= target)
						.min_by_key(|(_, e)| (e.due, e.id.0))
						.map(|(i, _)| i);
					idx.map(|i| queue.remove(i))
				};
				match next {
					Some(entry) => {
						self.now.set(entry.due);
						(entry.callback)();
					}
					None => break,
				}
			}
			self.now.set(target);
		}
	}

	impl TimerHost for ManualTimers {
		fn set_timeout(&self, callback: Box<dyn FnOnce()>, delay_ms: u32) -> Option<TimerId> {
			let id = TimerId(self.next_id.get());
			self.next_id.set(id.0 + 1);
			self.queue.borrow_mut().push(Entry {
				id,
				due: self.now.get() + delay_ms as u64,
				callback,
			});
			Some(id)
		}

		fn clear_timeout(&self, id: TimerId) {
			self.queue.borrow_mut().retain(|e| e.id != id);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::manual::ManualTimers;
	use super::*;

	#[test]
	fn burst_runs_only_last_call() {
		let timers = Rc::new(ManualTimers::default());
		let debouncer = Debouncer::new(timers.clone(), 250);
		let seen = Rc::new(RefCell::new(Vec::new()));

		for i in 0..5 {
			let seen = seen.clone();
			debouncer.call(move || seen.borrow_mut().push(i));
			timers.advance(100);
		}
		assert!(seen.borrow().is_empty());
		assert!(debouncer.is_pending());

		timers.advance(150);
		assert_eq!(*seen.borrow(), vec![4]);
		assert!(!debouncer.is_pending());
		assert_eq!(timers.pending(), 0);
	}

	#[test]
	fn spaced_calls_each_run() {
		let timers = Rc::new(ManualTimers::default());
		let debouncer = Debouncer::new(timers.clone(), 250);
		let count = Rc::new(Cell::new(0));

		for _ in 0..3 {
			let count = count.clone();
			debouncer.call(move || count.set(count.get() + 1));
			timers.advance(300);
		}
		assert_eq!(count.get(), 3);
	}

	#[test]
	fn cancel_drops_pending_call() {
		let timers = Rc::new(ManualTimers::default());
		let debouncer = Debouncer::new(timers.clone(), 250);
		let fired = Rc::new(Cell::new(false));
		let f = fired.clone();
		debouncer.call(move || f.set(true));
		debouncer.cancel();
		timers.advance(1_000);
		assert!(!fired.get());
	}

	#[test]
	fn after_fires_at_deadline() {
		let timers = ManualTimers::default();
		let fired = Rc::new(Cell::new(false));
		let f = fired.clone();
		after(&timers, 300, move || f.set(true));
		timers.advance(299);
		assert!(!fired.get());
		timers.advance(1);
		assert!(fired.get());
		assert_eq!(timers.now(), 300);
	}
}
