//! Utility functions

use std::path::PathBuf;

/// Fallback graphic shown when a product image fails to fetch or decode.
/// Mirrors the storefront's placeholder: neutral square with a centered
/// "Smartphone" label.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><rect width="200" height="200" fill="#252525"/><text x="50%" y="50%" font-family="sans-serif" font-size="20" fill="#a0a0a0" text-anchor="middle" dominant-baseline="middle">Smartphone</text></svg>"##;

// Square viewBox, paths only — for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#0d0d0d"/><rect x="20" y="10" width="24" height="44" rx="5" fill="none" stroke="#fbbf24" stroke-width="3"/><path d="M28 15h8" stroke="#fbbf24" stroke-width="2" stroke-linecap="round"/><circle cx="32" cy="48" r="2" fill="#fbbf24"/></svg>"##;

/// Rasterize the placeholder SVG to a square RGBA image.
pub fn rasterize_placeholder(size: u32) -> (Vec<u8>, u32, u32) {
    rasterize_square(PLACEHOLDER_SVG, size)
}

/// Rasterize the app icon SVG to a square RGBA image (window/taskbar).
pub fn rasterize_icon(size: u32) -> (Vec<u8>, u32, u32) {
    rasterize_square(ICON_SVG, size)
}

fn rasterize_square(svg: &str, size: u32) -> (Vec<u8>, u32, u32) {
    let mut options = resvg::usvg::Options::default();
    // The placeholder label needs a sans-serif face; missing fonts just
    // leave the neutral background.
    options.fontdb_mut().load_system_fonts();
    let tree = resvg::usvg::Tree::from_str(svg, &options).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs, cache)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("SK Mobile Zone")
}

/// On-disk cache for fetched product images
pub fn get_image_cache_dir() -> PathBuf {
    get_data_dir().join("cache").join("products")
}
