//! Concrete egui renderer for the product grid and cart panel

use super::images::ImageStore;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::price::format_price;
use crate::render::Renderer;
use crate::theme;
use crate::types::CartAction;
use crate::ui::components::icon_button;
use eframe::egui;

/// [`Renderer`] over an egui `Ui`. Immediate mode repaints both regions
/// from scratch every frame, so each render fully replaces prior content.
pub struct EguiRenderer<'a> {
    pub ui: &'a mut egui::Ui,
    pub images: &'a mut ImageStore,
}

impl Renderer for EguiRenderer<'_> {
    fn render_catalog(&mut self, catalog: &Catalog) -> Vec<CartAction> {
        let mut actions = Vec::new();
        let ctx = self.ui.ctx().clone();

        let spacing = theme::SPACING_XL;
        let available = self.ui.available_width();
        let num_cols = ((available + spacing) / (theme::CARD_MIN_WIDTH + spacing))
            .floor()
            .max(1.0);
        let card_w = ((available - spacing * (num_cols - 1.0)) / num_cols).floor();

        self.ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
            for product in catalog.products() {
                ui.allocate_ui(egui::vec2(card_w, 0.0), |ui| {
                    ui.set_width(card_w);
                    theme::card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        // Image area, placeholder on any load failure
                        let (img_rect, _) = ui.allocate_exact_size(
                            egui::vec2(ui.available_width(), theme::CARD_IMAGE_HEIGHT),
                            egui::Sense::hover(),
                        );
                        let tex = self.images.product_texture(&ctx, product);
                        paint_fitted_image(ui.painter(), &tex, img_rect);

                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new(product.brand)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(product.name)
                                .size(theme::FONT_BODY)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(format_price(product.price))
                                .size(theme::FONT_LABEL)
                                .color(theme::ACCENT),
                        );

                        ui.add_space(theme::SPACING_MD);
                        let add_btn = ui.add_sized(
                            [ui.available_width(), theme::BUTTON_HEIGHT],
                            theme::button_accent(format!(
                                "{}  Add to Cart",
                                egui_phosphor::regular::SHOPPING_CART_SIMPLE
                            )),
                        );
                        if add_btn.clicked() {
                            actions.push(CartAction::Add(product.id));
                        }
                    });
                });
            }
        });

        actions
    }

    fn render_cart(&mut self, cart: &Cart) -> Vec<CartAction> {
        let mut actions = Vec::new();
        let ctx = self.ui.ctx().clone();

        // Rows scroll, the total/checkout footer stays pinned below them.
        let footer_height = 96.0;
        let rows_height = (self.ui.available_height() - footer_height).max(0.0);

        egui::ScrollArea::vertical()
            .id_salt("cart_rows")
            .max_height(rows_height)
            .auto_shrink([false, false])
            .show(self.ui, |ui| {
                if cart.is_empty() {
                    ui.add_space(theme::SPACING_XL * 2.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Your cart is empty.")
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED),
                        );
                    });
                    return;
                }

                for (index, entry) in cart.entries().iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (img_rect, _) = ui.allocate_exact_size(
                            egui::vec2(theme::CART_ROW_IMAGE, theme::CART_ROW_IMAGE),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(
                            img_rect,
                            theme::RADIUS_DEFAULT,
                            theme::BG_PLACEHOLDER,
                        );
                        let tex = self.images.product_texture(&ctx, entry);
                        paint_fitted_image(ui.painter(), &tex, img_rect.shrink(2.0));

                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(entry.name)
                                    .size(theme::FONT_LABEL)
                                    .strong(),
                            );
                            ui.label(
                                egui::RichText::new(format_price(entry.price))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::ACCENT),
                            );
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let remove = icon_button(
                                    ui,
                                    egui_phosphor::regular::TRASH,
                                    theme::BTN_DANGER,
                                );
                                if remove.clicked() {
                                    // Positional removal: this exact row,
                                    // not "a" matching product.
                                    actions.push(CartAction::Remove(index));
                                }
                            },
                        );
                    });
                    ui.add_space(theme::SPACING_MD);
                }
            });

        self.ui
            .with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                let checkout_btn = ui.add_sized(
                    [ui.available_width(), theme::BUTTON_HEIGHT + 6.0],
                    theme::button_accent(format!(
                        "{}  Checkout",
                        egui_phosphor::regular::CREDIT_CARD
                    )),
                );
                if checkout_btn.clicked() {
                    actions.push(CartAction::Checkout);
                }

                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Total")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.label(
                                egui::RichText::new(format_price(cart.total()))
                                    .size(theme::FONT_HEADING)
                                    .strong()
                                    .color(theme::ACCENT),
                            );
                        },
                    );
                });
                ui.add_space(theme::SPACING_SM);
                ui.separator();
            });

        actions
    }
}

/// Draw a texture centered in `rect`, preserving its aspect ratio.
fn paint_fitted_image(painter: &egui::Painter, tex: &egui::TextureHandle, rect: egui::Rect) {
    let tex_size = tex.size_vec2();
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 {
        return;
    }
    let scale = (rect.width() / tex_size.x).min(rect.height() / tex_size.y);
    let fitted = egui::Rect::from_center_size(rect.center(), tex_size * scale);
    painter.image(
        tex.id(),
        fitted,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
