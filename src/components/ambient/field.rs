//! The particle population and its per-frame update/draw cycle.

use fastrand::Rng;

use super::config::ParticleConfig;
use super::draw::{DrawError, DrawSurface};
use super::particle::Particle;
use super::surface::Dimensions;
use super::theme::Color;

/// Owns the ambient particles. The population is fixed once initialized.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	color: Color,
}

impl ParticleField {
	/// Seed `config.count` independent particles inside `width` x `height`.
	pub fn initialize(rng: &mut Rng, width: f64, height: f64, config: &ParticleConfig) -> Self {
		let particles = (0..config.count)
			.map(|_| Particle::create(rng, width, height, config))
			.collect();

		Self {
			particles,
			color: config.color,
		}
	}

	/// Build a field from explicit particles.
	pub fn from_particles(particles: Vec<Particle>, color: Color) -> Self {
		Self { particles, color }
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// One frame: clear the whole surface, then advance and draw every particle in order.
	///
	/// A failed draw does not stop the remaining particles from advancing; the first
	/// failure is reported once the frame is done.
	pub fn step<S: DrawSurface + ?Sized>(
		&mut self,
		surface: &S,
		width: f64,
		height: f64,
	) -> Result<(), DrawError> {
		let mut first_err = surface.clear(width, height).err();

		for p in &mut self.particles {
			p.advance(width, height);
			if let Err(e) = p.render(surface, self.color) {
				first_err.get_or_insert(e);
			}
		}

		match first_err {
			Some(e) => Err(e),
			None => Ok(()),
		}
	}

	/// Scale particle positions proportionally when the viewport changes, then pull any
	/// particle still outside the new bounds back onto its edge.
	///
	/// An empty `from` (the surface was never visible) skips the scaling step; an empty `to`
	/// leaves positions untouched until a real size arrives.
	pub fn rescale(&mut self, from: Dimensions, to: Dimensions) {
		if to.is_empty() {
			return;
		}
		if !from.is_empty() {
			let (fw, fh) = from.as_bounds();
			let (tw, th) = to.as_bounds();
			let (scale_x, scale_y) = (tw / fw, th / fh);

			for p in &mut self.particles {
				p.x *= scale_x;
				p.y *= scale_y;
			}
		}
		self.confine(to);
	}

	/// Clamp every particle into `bounds`. A no-op for empty bounds.
	pub fn confine(&mut self, bounds: Dimensions) {
		if bounds.is_empty() {
			return;
		}
		let (w, h) = bounds.as_bounds();
		for p in &mut self.particles {
			p.x = p.x.clamp(0.0, w);
			p.y = p.y.clamp(0.0, h);
		}
	}
}
