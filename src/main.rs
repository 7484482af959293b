#![windows_subsystem = "windows"]
//! SK Mobile Zone - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod cart;
mod catalog;
mod constants;
mod price;
mod render;
mod settings;
mod store;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, EguiRenderer};
use constants::*;
use eframe::egui;
use render::Renderer;
use tracing::info;
use types::{CartAction, Notice};
use ui::components::{cart_icon_with_badge, icon_button};
use utils::{get_data_dir, rasterize_icon};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "mobile-zone.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mobile_zone_storefront=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "SK Mobile Zone starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1100.0, 760.0)))
        .with_min_inner_size([780.0, 560.0])
        .with_title(SHOP_NAME);

    // Window/taskbar icon rasterized from the built-in SVG
    {
        let (rgba, w, h) = rasterize_icon(64);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        SHOP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Start product image prefetch on first frame
        if !self.prefetch_started {
            self.prefetch_started = true;
            self.start_image_prefetch(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Blocking notice modal (checkout confirmation / empty cart)
        self.render_notice_modal(ctx);

        // Interactions collected this frame, applied after all regions render
        let mut actions: Vec<CartAction> = Vec::new();

        self.render_header(ctx, &mut actions);
        self.render_product_grid(ctx, &mut actions);
        self.render_cart_panel(ctx, &mut actions);

        for action in actions {
            self.store.apply(action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_settings();
    }
}

impl App {
    /// Header bar: shop name left, cart icon + badge right. Tightens once
    /// the grid is scrolled past the threshold.
    fn render_header(&mut self, ctx: &egui::Context, actions: &mut Vec<CartAction>) {
        let compact = self.header_compact();
        let (height, fill) = if compact {
            (theme::HEADER_HEIGHT_COMPACT, theme::HEADER_BG_COMPACT)
        } else {
            (theme::HEADER_HEIGHT, theme::HEADER_BG)
        };

        egui::TopBottomPanel::top("header")
            .exact_height(height)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(16, 0))
                    .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                ui.with_layout(
                    egui::Layout::left_to_right(egui::Align::Center),
                    |ui| {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::DEVICE_MOBILE)
                                .size(theme::FONT_TITLE + 2.0)
                                .color(theme::ACCENT),
                        );
                        ui.label(
                            egui::RichText::new("SK")
                                .size(theme::FONT_TITLE)
                                .strong()
                                .color(theme::ACCENT),
                        );
                        ui.label(
                            egui::RichText::new("Mobile Zone")
                                .size(theme::FONT_TITLE)
                                .strong(),
                        );

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let cart_btn =
                                    cart_icon_with_badge(ui, self.store.cart.len());
                                if cart_btn.clicked() {
                                    actions.push(CartAction::OpenCart);
                                }
                            },
                        );
                    },
                );
            });
    }

    /// Central product grid. The scroll offset feeds the header effect.
    fn render_product_grid(&mut self, ctx: &egui::Context, actions: &mut Vec<CartAction>) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Latest Smartphones")
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
                ui.add_space(theme::SPACING_LG);

                let output = egui::ScrollArea::vertical()
                    .id_salt("grid_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut renderer = EguiRenderer {
                            ui,
                            images: &mut self.images,
                        };
                        actions.extend(renderer.render_catalog(&self.store.catalog));
                    });
                self.main_scroll_offset = output.state.offset.y;
            });
    }

    /// Slide-over cart panel with a dimmed click-to-close overlay.
    fn render_cart_panel(&mut self, ctx: &egui::Context, actions: &mut Vec<CartAction>) {
        if !self.store.panel.is_open() {
            return;
        }

        let screen = ctx.screen_rect();

        // Dimmed overlay behind the panel; clicking it closes the cart
        let overlay = egui::Area::new(egui::Id::new("cart_overlay"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(120));
                response
            });
        if overlay.inner.clicked() {
            actions.push(CartAction::CloseCart);
        }

        egui::Area::new(egui::Id::new("cart_panel"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(screen.right() - theme::CART_PANEL_WIDTH, screen.top()))
            .show(ctx, |ui| {
                theme::cart_panel_frame().show(ui, |ui| {
                    ui.set_width(theme::CART_PANEL_WIDTH - 2.0 * theme::SPACING_XL);
                    ui.set_min_height(screen.height() - 2.0 * theme::SPACING_XL);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Your Cart ({})",
                                self.store.cart.len()
                            ))
                            .size(theme::FONT_HEADING)
                            .strong(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let close = icon_button(
                                    ui,
                                    egui_phosphor::regular::X,
                                    theme::TEXT_MUTED,
                                );
                                if close.clicked() {
                                    actions.push(CartAction::CloseCart);
                                }
                            },
                        );
                    });
                    ui.add_space(theme::SPACING_SM);
                    ui.separator();
                    ui.add_space(theme::SPACING_MD);

                    let mut renderer = EguiRenderer {
                        ui,
                        images: &mut self.images,
                    };
                    actions.extend(renderer.render_cart(&self.store.cart));
                });
            });
    }

    /// Acknowledgment-required notice (checkout success, empty cart).
    fn render_notice_modal(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.store.notices.pending() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("notice_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let response = modal.show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.set_max_width(320.0);

            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_MD);
                let (icon, color) = match notice {
                    Notice::CheckoutComplete => {
                        (egui_phosphor::regular::CHECK_CIRCLE, theme::ACCENT)
                    }
                    Notice::CartEmpty => {
                        (egui_phosphor::regular::SHOPPING_CART, theme::TEXT_MUTED)
                    }
                };
                ui.label(egui::RichText::new(icon).size(36.0).color(color));
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(notice.message())
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(theme::SPACING_XL);
                let ok_label = format!("{}  OK", egui_phosphor::regular::CHECK);
                let ok_btn = match notice {
                    Notice::CheckoutComplete => ui.add(theme::button_accent(ok_label)),
                    Notice::CartEmpty => ui.add(theme::button(ok_label)),
                };
                if ok_btn.clicked() {
                    self.store.notices.acknowledge();
                }
            });
        });
        if response.should_close() {
            self.store.notices.acknowledge();
        }
    }
}
