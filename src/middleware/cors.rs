use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::types::Config;

/// Any method and any header from the configured origins. A `*` entry opens it up to everyone.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match config.allows_any_origin() {
        true => AllowOrigin::any(),
        false => AllowOrigin::list(config.cors_allow_origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!("Ignoring invalid CORS origin {origin:?}"))
                .ok()
        })),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
