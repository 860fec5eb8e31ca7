//! A single drifting point of the ambient backdrop.

use fastrand::Rng;

use super::config::ParticleConfig;
use super::draw::{DrawError, DrawSurface};
use super::theme::Color;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Fixed at creation, within the configured opacity range.
	pub opacity: f64,
}

fn uniform(rng: &mut Rng, lo: f64, hi: f64) -> f64 {
	lo + rng.f64() * (hi - lo)
}

impl Particle {
	/// Place a particle uniformly inside `width` x `height` with random drift.
	pub fn create(rng: &mut Rng, width: f64, height: f64, config: &ParticleConfig) -> Self {
		Self {
			x: uniform(rng, 0.0, width.max(0.0)),
			y: uniform(rng, 0.0, height.max(0.0)),
			vx: uniform(rng, -config.max_speed, config.max_speed),
			vy: uniform(rng, -config.max_speed, config.max_speed),
			radius: uniform(rng, config.radius_min, config.radius_max),
			opacity: uniform(rng, config.opacity_min, config.opacity_max),
		}
	}

	/// Move one frame, then reflect off any bound the new position crossed.
	///
	/// An axis with a non-positive (or non-finite) extent has no bound to reflect off.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if has_extent(width) && (self.x < 0.0 || self.x > width) {
			self.vx = -self.vx;
		}
		if has_extent(height) && (self.y < 0.0 || self.y > height) {
			self.vy = -self.vy;
		}
	}

	pub fn render<S: DrawSurface + ?Sized>(&self, surface: &S, color: Color) -> Result<(), DrawError> {
		surface.fill_circle(self.x, self.y, self.radius, color.with_alpha(self.opacity))
	}
}

fn has_extent(dim: f64) -> bool {
	dim.is_finite() && dim > 0.0
}
