//! Layer factories for middleware

use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
};

/// Tracing/logging middleware
///
/// Request logging happens in the instrumented `request_id_middleware`,
/// so no separate tower_http TraceLayer is installed here.
pub fn trace() -> tower::layer::util::Identity {
    tower::layer::util::Identity::new()
}

/// CORS middleware
pub fn cors(origins: &[String]) -> CorsLayer {
    let header_values: Vec<_> = origins
        .iter()
        .filter_map(|origin| axum::http::HeaderValue::from_str(origin).ok())
        .collect();

    if header_values.is_empty() {
        // No configured (or no valid) origins: emit no CORS headers at all.
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(header_values))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Compression middleware
pub fn compression() -> CompressionLayer {
    CompressionLayer::new()
}
