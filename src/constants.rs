//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SHOP_NAME: &str = "SK Mobile Zone";

/// Grid scroll offset past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f32 = 50.0;

/// Concurrent product image fetches during prefetch.
pub const IMAGE_FETCH_CONCURRENCY: usize = 4;
