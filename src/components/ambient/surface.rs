//! Canvas creation and viewport-driven sizing.
//!
//! The overlay canvas is created once, stretched over the viewport, made click-through and
//! stacked behind the page. [`SurfaceManager`] keeps its pixel size in step with the viewport
//! and exposes the current [`Dimensions`] through a shared read handle that the frame loop
//! consults on every frame.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::config::ParticleConfig;
use crate::resize::ResizeDispatcher;

/// Id given to the overlay so other page code can find it.
pub const CANVAS_ID: &str = "particles-canvas";

/// Width/height of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
	pub width: u32,
	pub height: u32,
}

impl Dimensions {
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// True when either side is zero.
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	pub fn as_bounds(&self) -> (f64, f64) {
		(self.width as f64, self.height as f64)
	}
}

/// Read handle onto the dimensions a [`SurfaceManager`] last applied.
#[derive(Clone, Debug, Default)]
pub struct SharedDimensions(Rc<Cell<Dimensions>>);

impl SharedDimensions {
	pub fn get(&self) -> Dimensions {
		self.0.get()
	}
}

/// Source of the current viewport size.
pub trait Viewport {
	/// `None` when the host cannot report a size right now.
	fn inner_size(&self) -> Option<Dimensions>;
}

impl Viewport for Window {
	fn inner_size(&self) -> Option<Dimensions> {
		let w = self.inner_width().ok()?.as_f64()?;
		let h = self.inner_height().ok()?.as_f64()?;
		Some(Dimensions::new(w.max(0.0) as u32, h.max(0.0) as u32))
	}
}

/// An element whose backing store can be resized.
pub trait SurfaceElement {
	fn set_pixel_size(&self, dims: Dimensions);
}

impl SurfaceElement for HtmlCanvasElement {
	fn set_pixel_size(&self, dims: Dimensions) {
		self.set_width(dims.width);
		self.set_height(dims.height);
	}
}

/// Sizing lifecycle. Once sized, a surface never goes back to unsized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
	Unsized,
	Sized,
}

/// Failures while setting up the overlay canvas.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no global window")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("document has no body")]
	NoBody,
	#[error("could not create canvas element")]
	CreateElement,
	#[error("2d drawing context is unavailable")]
	MissingContext,
	#[error("drawing context is not a CanvasRenderingContext2d")]
	ContextCast,
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl SurfaceError {
	fn dom(err: JsValue) -> Self {
		Self::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
	}
}

/// A freshly created overlay canvas and its 2d context.
pub struct Surface {
	pub canvas: HtmlCanvasElement,
	pub context: CanvasRenderingContext2d,
}

/// Create the full-viewport, click-through background canvas and attach it to `<body>`.
pub fn create_surface(document: &Document, config: &ParticleConfig) -> Result<Surface, SurfaceError> {
	attach_surface(document, create_canvas(document, config)?)
}

/// Build the styled overlay canvas without inserting it into the document.
pub fn create_canvas(
	document: &Document,
	config: &ParticleConfig,
) -> Result<HtmlCanvasElement, SurfaceError> {
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")
		.map_err(|_| SurfaceError::CreateElement)?
		.dyn_into()
		.map_err(|_| SurfaceError::CreateElement)?;
	canvas.set_id(CANVAS_ID);

	let style = canvas.style();
	for (prop, value) in [
		("position", "fixed".to_string()),
		("top", "0".to_string()),
		("left", "0".to_string()),
		("width", "100%".to_string()),
		("height", "100%".to_string()),
		("pointer-events", "none".to_string()),
		("z-index", "-1".to_string()),
		("opacity", config.canvas_opacity.to_string()),
	] {
		style.set_property(prop, &value).map_err(SurfaceError::dom)?;
	}

	Ok(canvas)
}

/// Acquire the 2d context of `canvas`, then append it to `<body>`.
///
/// On any error the canvas is left detached.
pub fn attach_surface(document: &Document, canvas: HtmlCanvasElement) -> Result<Surface, SurfaceError> {
	let body = document.body().ok_or(SurfaceError::NoBody)?;

	let context: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(SurfaceError::dom)?
		.ok_or(SurfaceError::MissingContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::ContextCast)?;

	body.append_child(&canvas).map_err(SurfaceError::dom)?;

	Ok(Surface { canvas, context })
}

/// Keeps a surface element sized to the viewport.
pub struct SurfaceManager<E: SurfaceElement = HtmlCanvasElement> {
	element: E,
	dims: SharedDimensions,
	last_visible: Cell<Dimensions>,
	state: Cell<SurfaceState>,
}

impl<E: SurfaceElement> SurfaceManager<E> {
	pub fn new(element: E) -> Self {
		Self {
			element,
			dims: SharedDimensions::default(),
			last_visible: Cell::new(Dimensions::default()),
			state: Cell::new(SurfaceState::Unsized),
		}
	}

	pub fn element(&self) -> &E {
		&self.element
	}

	pub fn state(&self) -> SurfaceState {
		self.state.get()
	}

	pub fn current(&self) -> Dimensions {
		self.dims.get()
	}

	/// Most recent non-empty size, or zero if the surface was never visible.
	pub fn last_visible(&self) -> Dimensions {
		self.last_visible.get()
	}

	/// Shared handle the frame loop reads bounds from.
	pub fn dimensions(&self) -> SharedDimensions {
		self.dims.clone()
	}

	/// Match the element to the viewport. Keeps the last size if the viewport can't be read.
	pub fn size_to_viewport(&self, viewport: &dyn Viewport) -> Dimensions {
		match viewport.inner_size() {
			Some(dims) => {
				self.apply(dims);
			}
			None => warn!("ambient: viewport size unavailable, keeping {:?}", self.current()),
		}
		self.current()
	}

	/// Apply an already-measured size. Returns the size it replaced.
	pub fn apply(&self, dims: Dimensions) -> Dimensions {
		let previous = self.dims.0.replace(dims);
		self.element.set_pixel_size(dims);
		self.state.set(SurfaceState::Sized);
		if !dims.is_empty() {
			self.last_visible.set(dims);
		}
		if previous != dims {
			debug!("ambient: surface {}x{}", dims.width, dims.height);
		}
		previous
	}

	/// Re-size on every settled resize, then hand `(last_visible, current)` to `then`.
	///
	/// `last_visible` skips over zero-sized intervals, so a surface that collapsed and came
	/// back reports the size it had before collapsing.
	///
	/// The dispatcher owns the debouncing; this only subscribes.
	pub fn on_resize<F>(self: &Rc<Self>, dispatcher: &ResizeDispatcher, mut then: F)
	where
		E: 'static,
		F: FnMut(Dimensions, Dimensions) + 'static,
	{
		let manager = Rc::clone(self);
		dispatcher.subscribe(move |dims| {
			let from = manager.last_visible();
			manager.apply(dims);
			then(from, dims);
		});
	}
}
