//! CORS layer.

use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer.
///
/// The catalog API is an internal administration surface; any origin may
/// read and write it.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
