//! Tunable parameters for the ambient particle backdrop.

use serde::Deserialize;

use super::theme::Color;

/// Particle effect configuration.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Number of particles, fixed for the field's lifetime
	pub count: usize,
	/// Each velocity component is drawn from `[-max_speed, max_speed)`
	pub max_speed: f64,
	/// Minimum particle radius
	pub radius_min: f64,
	/// Maximum particle radius
	pub radius_max: f64,
	/// Minimum particle opacity
	pub opacity_min: f64,
	/// Maximum particle opacity
	pub opacity_max: f64,
	/// Particle fill color (alpha is replaced per particle)
	pub color: Color,
	/// CSS opacity of the whole overlay canvas
	pub canvas_opacity: f64,
	/// Quiet period before a resize is acted on
	pub resize_debounce_ms: u32,
	/// Scale particle positions with the viewport on resize
	pub rescale_on_resize: bool,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 50,
			max_speed: 0.25,
			radius_min: 1.0,
			radius_max: 3.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
			color: Color::blush(),
			canvas_opacity: 0.6,
			resize_debounce_ms: 250,
			rescale_on_resize: true,
		}
	}
}

impl ParticleConfig {
	/// Parse a JSON config, falling back to defaults for absent fields.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}
