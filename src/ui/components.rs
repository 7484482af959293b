//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;

/// Cart icon with an entry-count badge. Returns the click response.
pub fn cart_icon_with_badge(ui: &mut egui::Ui, count: usize) -> egui::Response {
    let size = egui::vec2(34.0, 30.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let icon_color = if response.hovered() {
            theme::ACCENT
        } else {
            theme::TEXT_SECONDARY
        };
        painter.text(
            rect.left_center() + egui::vec2(2.0, 0.0),
            egui::Align2::LEFT_CENTER,
            egui_phosphor::regular::SHOPPING_CART,
            egui::FontId::proportional(22.0),
            icon_color,
        );

        // Count badge, top-right of the icon. Shown even at zero, matching
        // the storefront's always-visible counter.
        let badge_center = rect.right_top() + egui::vec2(-theme::BADGE_SIZE / 2.0, theme::BADGE_SIZE / 2.0);
        painter.circle_filled(badge_center, theme::BADGE_SIZE / 2.0, theme::BADGE_BG);
        painter.text(
            badge_center,
            egui::Align2::CENTER_CENTER,
            count.to_string(),
            egui::FontId::proportional(theme::FONT_CAPTION),
            theme::BADGE_TEXT,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Small icon-only button (cart panel close, row remove).
pub fn icon_button(ui: &mut egui::Ui, icon: &str, color: egui::Color32) -> egui::Response {
    let size = egui::vec2(24.0, 24.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        if response.hovered() {
            ui.painter()
                .rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER);
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(16.0),
            color,
        );
    }
    response
}
