//! Product image loading
//!
//! Images are fetched once into an on-disk cache by a background prefetch,
//! then decoded into textures on demand. Any fetch or decode failure falls
//! back to the generated placeholder graphic; the placeholder is produced
//! locally, so the fallback itself cannot fail to load.

use super::App;
use crate::catalog::Product;
use crate::constants::*;
use crate::types::ProductId;
use crate::utils::rasterize_placeholder;
use eframe::egui;
use futures::StreamExt;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Texture cache for product images plus the shared placeholder.
pub struct ImageStore {
    /// `Some(tex)` = decoded product image, `None` = decode failed, use
    /// the placeholder from now on.
    textures: HashMap<ProductId, Option<egui::TextureHandle>>,
    placeholder: Option<egui::TextureHandle>,
    cache_dir: PathBuf,
}

impl ImageStore {
    pub fn new(cache_dir: PathBuf) -> Self {
        ImageStore {
            textures: HashMap::new(),
            placeholder: None,
            cache_dir,
        }
    }

    fn cache_path(&self, id: ProductId) -> PathBuf {
        self.cache_dir.join(format!("{}.img", id))
    }

    /// Texture for a product, falling back to the placeholder when the
    /// image is not cached yet or failed to fetch/decode.
    pub fn product_texture(
        &mut self,
        ctx: &egui::Context,
        product: &Product,
    ) -> egui::TextureHandle {
        if let Some(cached) = self.textures.get(&product.id).cloned() {
            return match cached {
                Some(tex) => tex,
                None => self.placeholder(ctx),
            };
        }

        let path = self.cache_path(product.id);
        if !path.exists() {
            // Prefetch still in flight (or fetch failed); show the
            // placeholder without caching so a late arrival still loads.
            return self.placeholder(ctx);
        }

        let texture = std::fs::read(&path)
            .ok()
            .and_then(|bytes| image::load_from_memory(&bytes).ok())
            .map(|img| {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let pixels = rgba.into_raw();
                ctx.load_texture(
                    format!("product_{}", product.id),
                    egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });
        if texture.is_none() {
            warn!(id = product.id, "Cached product image failed to decode, using placeholder");
        }
        self.textures.insert(product.id, texture.clone());
        match texture {
            Some(tex) => tex,
            None => self.placeholder(ctx),
        }
    }

    /// Lazily rasterized placeholder graphic, shared by all fallbacks.
    pub fn placeholder(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        self.placeholder
            .get_or_insert_with(|| {
                let (pixels, w, h) = rasterize_placeholder(256);
                ctx.load_texture(
                    "product_placeholder",
                    egui::ColorImage::from_rgba_unmultiplied(
                        [w as usize, h as usize],
                        &pixels,
                    ),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}

impl App {
    /// Fetch missing product images into the disk cache in the background.
    /// Each completed fetch requests a repaint so cards swap in as they land.
    pub fn start_image_prefetch(&mut self, ctx: &egui::Context) {
        let cache_dir = crate::utils::get_image_cache_dir();
        let ctx_clone = ctx.clone();
        let targets: Vec<(ProductId, String, PathBuf)> = self
            .store
            .catalog
            .products()
            .iter()
            .map(|p| {
                (
                    p.id,
                    p.image_url.to_string(),
                    cache_dir.join(format!("{}.img", p.id)),
                )
            })
            .filter(|(_, _, path)| !path.exists())
            .collect();

        debug!(count = targets.len(), "Starting product image prefetch");
        std::fs::create_dir_all(&cache_dir).ok();

        self.runtime.spawn(async move {
            let client = reqwest::Client::new();

            futures::stream::iter(targets)
                .for_each_concurrent(IMAGE_FETCH_CONCURRENCY, |(id, url, path)| {
                    let client = client.clone();
                    let ctx = ctx_clone.clone();
                    async move {
                        match client.get(&url).send().await {
                            Ok(response) if response.status().is_success() => {
                                if let Ok(bytes) = response.bytes().await {
                                    std::fs::write(&path, &bytes).ok();
                                    debug!(id, "Product image cached");
                                    ctx.request_repaint();
                                }
                            }
                            Ok(response) => {
                                warn!(id, status = %response.status(), "Product image fetch rejected");
                            }
                            Err(e) => {
                                warn!(id, error = %e, "Product image fetch failed");
                            }
                        }
                    }
                })
                .await;
        });
    }
}
