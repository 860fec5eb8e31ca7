//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use ambient_landing::{App, init_logging, install_error_boundary};
use leptos::prelude::*;

fn main() {
	init_logging();
	install_error_boundary();

	mount_to_body(|| {
		view! { <App /> }
	})
}
