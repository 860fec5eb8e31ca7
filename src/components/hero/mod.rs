//! The landing hero: greeting, subtitle and call-to-action.
//!
//! Elements fade in one after another, the greeting pulses and releases hearts when
//! activated, and the CTA shows a short-lived success toast. Both respond to Enter/Space
//! when focused.

mod effects;

use leptos::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::components::ambient::Viewport;
use crate::timing::after;
pub use effects::{FloatingHeart, Toast, hero_padding};
use effects::{
	CLICKED_MS, CTA_HOVER, CTA_REST, ENTRANCE_DELAYS_MS, GREETING_HOVER, GREETING_REST,
	HEART_COUNT, PULSE_MS, TOAST_MESSAGE, class_list, flash, is_activation_key, launch_hearts,
	show_toast,
};

fn viewport_center() -> (f64, f64) {
	web_sys::window()
		.and_then(|w| w.inner_size())
		.map(|d| (d.width as f64 / 2.0, d.height as f64 / 2.0))
		.unwrap_or_default()
}

/// Hero section. `padding` follows the viewport breakpoint.
///
/// Floating hearts and the toast render after the section, as siblings inside the caller's
/// container, so they position against the viewport rather than the section.
#[component]
pub fn Hero(#[prop(into)] padding: Signal<&'static str>) -> impl IntoView {
	let entered = [RwSignal::new(false), RwSignal::new(false), RwSignal::new(false)];
	let pulse = RwSignal::new(false);
	let greeting_hover = RwSignal::new(false);
	let cta_clicked = RwSignal::new(false);
	let cta_hover = RwSignal::new(false);
	let hearts = RwSignal::new(Vec::<FloatingHeart>::new());
	let toast = RwSignal::new(None::<Toast>);
	let next_id = StoredValue::new(0u64);

	if let Some(window) = web_sys::window() {
		for (signal, delay) in entered.into_iter().zip(ENTRANCE_DELAYS_MS) {
			after(&window, delay, move || signal.set(true));
		}
	}

	let take_ids = move |n: u64| {
		let first = next_id.get_value();
		next_id.set_value(first + n);
		first
	};

	let activate_greeting = move |x: f64, y: f64| {
		let Some(window) = web_sys::window() else {
			return;
		};
		flash(&window, PULSE_MS, move |on| pulse.set(on));
		launch_hearts(
			&window,
			take_ids(HEART_COUNT as u64),
			x,
			y,
			move |burst| hearts.update(|live| live.extend(burst)),
			move |id| hearts.update(|live| live.retain(|h| h.id != id)),
		);
	};

	let activate_cta = move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		flash(&window, CLICKED_MS, move |on| cta_clicked.set(on));
		show_toast(
			&window,
			take_ids(1),
			move || toast.get_untracked(),
			move |t| toast.set(t),
		);
	};

	view! {
		<section class="hero" style=move || format!("padding: {}", padding.get())>
			<h1
				class=move || {
					class_list("greeting", &[("animate-in", entered[0].get()), ("pulse", pulse.get())])
				}
				tabindex="0"
				style=move || {
					let transform = if greeting_hover.get() { GREETING_HOVER } else { GREETING_REST };
					format!("transform: {transform}")
				}
				on:click=move |ev: MouseEvent| {
					activate_greeting(ev.client_x() as f64, ev.client_y() as f64)
				}
				on:mouseenter=move |_| greeting_hover.set(true)
				on:mouseleave=move |_| greeting_hover.set(false)
				on:keydown=move |ev: KeyboardEvent| {
					if is_activation_key(&ev.key()) {
						ev.prevent_default();
						let (x, y) = viewport_center();
						activate_greeting(x, y);
					}
				}
			>
				"Hi Naza 💖"
			</h1>
			<p class=move || class_list("subtitle", &[("animate-in", entered[1].get())])>
				"Someone is thinking of you today."
			</p>
			<div class=move || class_list("cta", &[("animate-in", entered[2].get())])>
				<button
					class=move || class_list("cta-button", &[("clicked", cta_clicked.get())])
					style=move || {
						let (transform, shadow) = if cta_hover.get() { CTA_HOVER } else { CTA_REST };
						format!("transform: {transform}; box-shadow: {shadow}")
					}
					on:click=move |ev: MouseEvent| {
						ev.prevent_default();
						activate_cta();
					}
					on:mouseenter=move |_| cta_hover.set(true)
					on:mouseleave=move |_| cta_hover.set(false)
					on:keydown=move |ev: KeyboardEvent| {
						if is_activation_key(&ev.key()) {
							ev.prevent_default();
							activate_cta();
						}
					}
				>
					"Say hello"
				</button>
			</div>
		</section>
		<For
			each=move || hearts.get()
			key=|heart| heart.id
			children=move |heart: FloatingHeart| {
				view! {
					<div
						class="floating-heart"
						style=format!(
							"left: {}px; top: {}px; animation-delay: {}s",
							heart.x,
							heart.y,
							heart.delay_s,
						)
					>
						"💖"
					</div>
				}
			}
		/>
		{move || {
			toast
				.get()
				.map(|t| {
					view! {
						<div class=class_list("success-message", &[("show", t.shown)])>
							{TOAST_MESSAGE}
						</div>
					}
				})
		}}
	}
}
