//! Build-time configuration of the remote endpoints.
//!
//! When `GATE_API_URL` is set at compile time (e.g. a staging worker), API
//! calls go there. Builds without it talk to the production worker.

use gate_core::{DEFAULT_API_BASE, Endpoints};

/// Endpoints of the PIN / barrier service for this build.
#[must_use]
pub fn endpoints() -> Endpoints {
    Endpoints::new(&api_base_with(option_env!("GATE_API_URL").unwrap_or("")))
}

fn api_base_with(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        base.to_string()
    }
}
