//! ambient-landing: a small landing page with an ambient particle backdrop.
//!
//! This crate provides the WASM client for the page: a hero section with entrance
//! animations and click/keyboard effects, plus a click-through canvas of drifting
//! particles behind it that follows the viewport size.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ErrorEvent, HtmlScriptElement, Window};

pub mod components;
pub mod resize;
pub mod timing;

pub use components::ambient::{AmbientBackdrop, ParticleConfig, start_ambient};
pub use components::hero::Hero;

use components::ambient::Viewport;
use components::hero::hero_padding;
use resize::ResizeDispatcher;

/// Id of the optional `<script type="application/json">` holding a [`ParticleConfig`].
pub const CONFIG_ELEMENT_ID: &str = "ambient-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ambient-landing: logging initialized");
}

/// Log uncaught page errors instead of letting them go unnoticed; the page keeps running.
pub fn install_error_boundary() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::<dyn FnMut(ErrorEvent)>::new(|e: ErrorEvent| {
		warn!("ambient-landing: uncaught error: {:?}", e.error());
	});
	match window.add_event_listener_with_callback("error", cb.as_ref().unchecked_ref()) {
		Ok(()) => cb.forget(),
		Err(e) => warn!("ambient-landing: could not install error listener: {:?}", e),
	}
}

/// Load particle settings from a script element with id="ambient-config".
/// Missing element means defaults; malformed JSON is logged and also means defaults.
pub fn load_config() -> ParticleConfig {
	let Some(json_text) = config_text() else {
		return ParticleConfig::default();
	};

	match ParticleConfig::from_json(&json_text) {
		Ok(config) => {
			info!("ambient-landing: loaded config ({} particles)", config.count);
			config
		}
		Err(e) => {
			warn!("ambient-landing: failed to parse config: {}", e);
			ParticleConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Start the backdrop and route settled resizes to it and to the hero layout.
fn wire_page(config: &ParticleConfig, padding: RwSignal<&'static str>) {
	let Some(window) = web_sys::window() else {
		warn!("ambient-landing: no window, page effects disabled");
		return;
	};

	let resize = Rc::new(ResizeDispatcher::new(
		Rc::new(window.clone()),
		Rc::new(window.clone()),
		config.resize_debounce_ms,
	));

	// The surface subscribes first so the canvas is resized before layout reacts.
	if let Err(e) = start_ambient(&window, config, &resize) {
		warn!("ambient-landing: particle backdrop disabled: {}", e);
	}

	resize.subscribe(move |dims| padding.set(hero_padding(dims.width)));

	if let Err(e) = resize.listen(&window) {
		warn!("ambient-landing: could not listen for resize: {:?}", e);
	}
}

/// Main application component.
/// Starts the ambient backdrop and renders the hero section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let initial_width = web_sys::window()
		.and_then(|w| w.inner_size())
		.map(|d| d.width)
		.unwrap_or(1024);
	let padding = RwSignal::new(hero_padding(initial_width));

	wire_page(&config, padding);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Hello, Naza" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="landing">
			<Hero padding=padding />
		</main>
	}
}
