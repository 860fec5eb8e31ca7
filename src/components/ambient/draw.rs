//! Drawing operations needed by a single frame.

use std::f64::consts::PI;

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// A draw call the host rejected.
#[derive(Debug, Error)]
#[error("draw call `{op}` failed: {message}")]
pub struct DrawError {
	pub op: &'static str,
	pub message: String,
}

impl DrawError {
	pub fn from_js(op: &'static str, err: JsValue) -> Self {
		Self {
			op,
			message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
		}
	}
}

/// Something a particle frame can be painted onto.
pub trait DrawSurface {
	/// Clear the `width` x `height` area starting at the origin.
	fn clear(&self, width: f64, height: f64) -> Result<(), DrawError>;

	/// Fill a circle centered at (`x`, `y`).
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) -> Result<(), DrawError>;
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) -> Result<(), DrawError> {
		self.clear_rect(0.0, 0.0, width, height);
		Ok(())
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) -> Result<(), DrawError> {
		self.begin_path();
		self.arc(x, y, radius, 0.0, PI * 2.0)
			.map_err(|e| DrawError::from_js("arc", e))?;
		self.set_fill_style_str(&color.to_css());
		self.fill();
		Ok(())
	}
}

#[cfg(test)]
pub(crate) mod recording {
	//! In-memory surface used by the frame tests.

	use std::cell::{Cell, RefCell};

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Clear { width: f64, height: f64 },
		Circle { x: f64, y: f64, radius: f64, color: Color },
	}

	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: RefCell<Vec<DrawOp>>,
		/// Number of upcoming `fill_circle` calls that should fail.
		pub fail_next: Cell<usize>,
	}

	impl RecordingSurface {
		pub fn circles(&self) -> usize {
			self.ops
				.borrow()
				.iter()
				.filter(|op| matches!(op, DrawOp::Circle { .. }))
				.count()
		}

		pub fn clears(&self) -> usize {
			self.ops.borrow().len() - self.circles()
		}
	}

	impl DrawSurface for RecordingSurface {
		fn clear(&self, width: f64, height: f64) -> Result<(), DrawError> {
			self.ops.borrow_mut().push(DrawOp::Clear { width, height });
			Ok(())
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) -> Result<(), DrawError> {
			let pending = self.fail_next.get();
			if pending > 0 {
				self.fail_next.set(pending - 1);
				return Err(DrawError {
					op: "arc",
					message: "injected".into(),
				});
			}
			self.ops.borrow_mut().push(DrawOp::Circle { x, y, radius, color });
			Ok(())
		}
	}
}
