//! App module - contains the main application state and logic

mod images;
mod views;

pub use images::ImageStore;
pub use views::EguiRenderer;

use crate::catalog::Catalog;
use crate::constants::*;
use crate::settings::Settings;
use crate::store::Storefront;
use crate::theme;
use crate::utils::get_image_cache_dir;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    /// Catalog + cart + panel state machine + pending notice. All
    /// interaction events funnel into `store.apply`.
    pub(crate) store: Storefront,
    pub(crate) images: ImageStore,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) prefetch_started: bool,
    // Grid scroll offset, drives the compact-header effect
    pub(crate) main_scroll_offset: f32,
    // Window geometry tracking for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let cache_dir = get_image_cache_dir();
        std::fs::create_dir_all(&cache_dir).ok();

        App {
            store: Storefront::new(Catalog::builtin()),
            images: ImageStore::new(cache_dir),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            prefetch_started: false,
            main_scroll_offset: 0.0,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    /// Whether the header is in its tightened scrolled style.
    pub(crate) fn header_compact(&self) -> bool {
        self.main_scroll_offset > HEADER_SCROLL_THRESHOLD
    }
}
