//! Timed visual effects for the hero section.
//!
//! Each effect is a small timeline driven by a [`TimerHost`]; the component plugs signal
//! setters into them.

use crate::timing::{TimerHost, after};

/// Delays for the greeting, subtitle and CTA entrance, in order.
pub const ENTRANCE_DELAYS_MS: [u32; 3] = [300, 600, 900];

pub const PULSE_MS: u32 = 600;
pub const CLICKED_MS: u32 = 300;

pub const HEART_COUNT: usize = 5;
pub const HEART_LIFETIME_MS: u32 = 2_000;
/// Stagger between consecutive hearts' CSS animations, in seconds.
pub const HEART_STAGGER_S: f64 = 0.1;

pub const TOAST_MESSAGE: &str = "✨ Hello sent to Naza! ✨";
pub const TOAST_SHOW_MS: u32 = 10;
pub const TOAST_HIDE_MS: u32 = 3_000;
pub const TOAST_FADE_MS: u32 = 300;

/// Viewport widths below this get the compact hero padding.
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const GREETING_HOVER: &str = "scale(1.05) translateY(-5px)";
pub const GREETING_REST: &str = "scale(1) translateY(0)";
pub const CTA_HOVER: (&str, &str) = ("translateY(-3px)", "0 10px 25px rgba(139, 69, 19, 0.3)");
pub const CTA_REST: (&str, &str) = ("translateY(0)", "0 5px 15px rgba(139, 69, 19, 0.2)");

pub fn hero_padding(viewport_width: u32) -> &'static str {
	if viewport_width < MOBILE_BREAKPOINT {
		"2rem 1rem"
	} else {
		"4rem 2rem"
	}
}

/// `base` followed by every flagged class that is switched on.
pub fn class_list(base: &str, flags: &[(&str, bool)]) -> String {
	flags
		.iter()
		.filter(|(_, on)| *on)
		.fold(base.to_string(), |mut acc, (name, _)| {
			acc.push(' ');
			acc.push_str(name);
			acc
		})
}

/// Enter and Space activate the focused greeting or CTA.
pub fn is_activation_key(key: &str) -> bool {
	matches!(key, "Enter" | " ")
}

/// Turn `set` on now and off again after `duration_ms`.
pub fn flash(timers: &dyn TimerHost, duration_ms: u32, set: impl Fn(bool) + 'static) {
	set(true);
	after(timers, duration_ms, move || set(false));
}

/// A transient heart floating up from a click point.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingHeart {
	pub id: u64,
	pub x: f64,
	pub y: f64,
	pub delay_s: f64,
}

/// Build the burst of hearts for one activation, numbering them from `first_id`.
pub fn heart_burst(first_id: u64, x: f64, y: f64) -> Vec<FloatingHeart> {
	(0..HEART_COUNT)
		.map(|i| FloatingHeart {
			id: first_id + i as u64,
			x,
			y,
			delay_s: i as f64 * HEART_STAGGER_S,
		})
		.collect()
}

/// Add a burst at (`x`, `y`) and remove each heart once its animation is over.
pub fn launch_hearts(
	timers: &dyn TimerHost,
	first_id: u64,
	x: f64,
	y: f64,
	add: impl FnOnce(Vec<FloatingHeart>),
	remove: impl Fn(u64) + Clone + 'static,
) {
	let burst = heart_burst(first_id, x, y);
	let ids: Vec<u64> = burst.iter().map(|h| h.id).collect();
	add(burst);
	for id in ids {
		let remove = remove.clone();
		after(timers, HEART_LIFETIME_MS, move || remove(id));
	}
}

/// The success toast. `shown` drives the CSS transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
	pub id: u64,
	pub shown: bool,
}

/// Show toast `id`, replacing whatever toast is up.
///
/// `get` reads the current toast so timers left over from a replaced toast do nothing.
pub fn show_toast<G, S>(timers: &dyn TimerHost, id: u64, get: G, set: S)
where
	G: Fn() -> Option<Toast> + Clone + 'static,
	S: Fn(Option<Toast>) + Clone + 'static,
{
	set(Some(Toast { id, shown: false }));

	let steps: [(u32, Option<Toast>); 3] = [
		(TOAST_SHOW_MS, Some(Toast { id, shown: true })),
		(TOAST_HIDE_MS, Some(Toast { id, shown: false })),
		(TOAST_HIDE_MS + TOAST_FADE_MS, None),
	];
	for (delay, next) in steps {
		let (get, set) = (get.clone(), set.clone());
		after(timers, delay, move || {
			if get().is_some_and(|t| t.id == id) {
				set(next);
			}
		});
	}
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	use super::*;
	use crate::timing::manual::ManualTimers;

	#[test]
	fn padding_switches_at_breakpoint() {
		assert_eq!(hero_padding(320), "2rem 1rem");
		assert_eq!(hero_padding(767), "2rem 1rem");
		assert_eq!(hero_padding(768), "4rem 2rem");
		assert_eq!(hero_padding(1920), "4rem 2rem");
	}

	#[test]
	fn class_list_appends_enabled_flags() {
		assert_eq!(class_list("greeting", &[]), "greeting");
		assert_eq!(
			class_list("greeting", &[("animate-in", true), ("pulse", false)]),
			"greeting animate-in"
		);
		assert_eq!(
			class_list("cta-button", &[("a", true), ("clicked", true)]),
			"cta-button a clicked"
		);
	}

	#[test]
	fn activation_keys() {
		assert!(is_activation_key("Enter"));
		assert!(is_activation_key(" "));
		assert!(!is_activation_key("Tab"));
		assert!(!is_activation_key("Spacebar"));
	}

	#[test]
	fn flash_turns_off_after_duration() {
		let timers = ManualTimers::default();
		let on = Rc::new(Cell::new(false));
		let o = on.clone();
		flash(&timers, PULSE_MS, move |v| o.set(v));
		assert!(on.get());
		timers.advance(599);
		assert!(on.get());
		timers.advance(1);
		assert!(!on.get());
	}

	#[test]
	fn heart_burst_is_staggered() {
		let hearts = heart_burst(10, 40.0, 50.0);
		assert_eq!(hearts.len(), HEART_COUNT);
		assert_eq!(hearts[0].id, 10);
		assert_eq!(hearts[4].id, 14);
		assert!((hearts[3].delay_s - 0.3).abs() < 1e-12);
		assert!(hearts.iter().all(|h| (h.x, h.y) == (40.0, 50.0)));
	}

	#[test]
	fn hearts_are_removed_after_lifetime() {
		let timers = ManualTimers::default();
		let live = Rc::new(RefCell::new(Vec::<u64>::new()));
		let (a, r) = (live.clone(), live.clone());
		launch_hearts(
			&timers,
			0,
			1.0,
			2.0,
			move |burst| a.borrow_mut().extend(burst.iter().map(|h| h.id)),
			move |id| r.borrow_mut().retain(|h| *h != id),
		);
		assert_eq!(live.borrow().len(), 5);
		timers.advance(1_999);
		assert_eq!(live.borrow().len(), 5);
		timers.advance(1);
		assert!(live.borrow().is_empty());
	}

	fn toast_rig() -> (ManualTimers, Rc<Cell<Option<Toast>>>) {
		(ManualTimers::default(), Rc::new(Cell::new(None)))
	}

	fn show(timers: &ManualTimers, slot: &Rc<Cell<Option<Toast>>>, id: u64) {
		let (g, s) = (slot.clone(), slot.clone());
		show_toast(timers, id, move || g.get(), move |t| s.set(t));
	}

	#[test]
	fn toast_timeline() {
		let (timers, slot) = toast_rig();
		show(&timers, &slot, 1);
		assert_eq!(slot.get(), Some(Toast { id: 1, shown: false }));

		timers.advance(10);
		assert_eq!(slot.get(), Some(Toast { id: 1, shown: true }));

		timers.advance(2_990);
		assert_eq!(slot.get(), Some(Toast { id: 1, shown: false }));

		timers.advance(300);
		assert_eq!(slot.get(), None);
	}

	#[test]
	fn new_toast_replaces_old_one() {
		let (timers, slot) = toast_rig();
		show(&timers, &slot, 1);
		timers.advance(2_000);
		show(&timers, &slot, 2);
		assert_eq!(slot.get(), Some(Toast { id: 2, shown: false }));

		// The first toast's hide/remove timers fire here and must not touch toast 2.
		timers.advance(1_300);
		assert_eq!(slot.get(), Some(Toast { id: 2, shown: true }));

		timers.advance(2_000);
		assert_eq!(slot.get(), None);
	}
}
