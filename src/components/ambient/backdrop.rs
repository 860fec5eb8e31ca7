//! Wires the overlay canvas, the particle field and the frame loop together.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use log::info;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::ParticleConfig;
use super::field::ParticleField;
use super::schedule::{LoopHandle, run_forever};
use super::surface::{SurfaceError, SurfaceManager, attach_surface, create_canvas};
use crate::resize::ResizeDispatcher;

/// A running ambient backdrop. Dropping it leaves the loop running; only page teardown ends it.
pub struct AmbientBackdrop {
	pub surface: Rc<SurfaceManager>,
	pub field: Rc<RefCell<ParticleField>>,
	pub frames: LoopHandle,
}

/// Create the canvas, seed the particles and start the perpetual frame loop.
///
/// Fails without starting anything if the page cannot provide a 2d canvas.
pub fn start_ambient(
	window: &Window,
	config: &ParticleConfig,
	resize: &ResizeDispatcher,
) -> Result<AmbientBackdrop, SurfaceError> {
	let document = window.document().ok_or(SurfaceError::NoDocument)?;
	let canvas = create_canvas(&document, config)?;
	start_ambient_on(window, config, resize, canvas)
}

/// Like [`start_ambient`], but on a canvas the caller already built.
///
/// The canvas is only inserted into the page once its 2d context is in hand. On error it stays
/// detached, no resize subscriber is registered and no frame is requested.
pub fn start_ambient_on(
	window: &Window,
	config: &ParticleConfig,
	resize: &ResizeDispatcher,
	canvas: HtmlCanvasElement,
) -> Result<AmbientBackdrop, SurfaceError> {
	let document = window.document().ok_or(SurfaceError::NoDocument)?;
	let created = attach_surface(&document, canvas)?;
	let context: Rc<CanvasRenderingContext2d> = Rc::new(created.context);

	let surface = Rc::new(SurfaceManager::new(created.canvas));
	let dims = surface.size_to_viewport(window);
	let (width, height) = dims.as_bounds();

	let field = Rc::new(RefCell::new(ParticleField::initialize(
		&mut Rng::new(),
		width,
		height,
		config,
	)));

	let rescale = config.rescale_on_resize;
	let field_resize = Rc::clone(&field);
	surface.on_resize(resize, move |from, to| {
		if rescale {
			field_resize.borrow_mut().rescale(from, to);
		}
	});

	let frames = run_forever(
		Rc::new(window.clone()),
		Rc::clone(&field),
		context,
		surface.dimensions(),
	);
	info!(
		"ambient: {} particles on {}x{} surface",
		config.count, dims.width, dims.height
	);

	Ok(AmbientBackdrop {
		surface,
		field,
		frames,
	})
}
