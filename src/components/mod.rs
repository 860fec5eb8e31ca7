//! Page components: the hero section and the ambient particle backdrop.

pub mod ambient;
pub mod hero;
