//! Ambient particle backdrop.
//!
//! A full-viewport, click-through canvas behind the page with a fixed population of
//! slowly drifting particles:
//! - [`Particle`] moves by its velocity and reflects off the current surface bounds
//! - [`ParticleField`] clears and redraws the whole surface once per frame
//! - [`SurfaceManager`] keeps the canvas sized to the viewport
//! - [`run_forever`] re-registers the frame with a [`FrameScheduler`] indefinitely
//!
//! # Example
//!
//! ```ignore
//! let window = web_sys::window().unwrap();
//! let resize = Rc::new(ResizeDispatcher::new(timers, viewport, 250));
//! let backdrop = start_ambient(&window, &ParticleConfig::default(), &resize)?;
//! ```

mod backdrop;
pub mod config;
mod draw;
mod field;
mod particle;
mod schedule;
mod surface;
pub mod theme;

pub use backdrop::{AmbientBackdrop, start_ambient, start_ambient_on};
pub use config::ParticleConfig;
pub use draw::{DrawError, DrawSurface};
pub use field::ParticleField;
pub use particle::Particle;
pub use schedule::{FrameId, FrameScheduler, LoopHandle, run_forever};
pub use surface::{
	CANVAS_ID, Dimensions, SharedDimensions, Surface, SurfaceElement, SurfaceError,
	SurfaceManager, SurfaceState, Viewport, attach_surface, create_canvas, create_surface,
};
pub use theme::Color;

#[cfg(test)]
pub(crate) use draw::recording;
#[cfg(test)]
pub(crate) use surface::testing;
