//! Top navigation bar:
//! - logo mark and the orange "Freerooms" wordmark on the left
//! - view switcher on the right (Search, Grid, Map, Dark)
//!
//! Grid is the only view that ships, so it renders permanently selected.
//! Search focuses the query box when a search handler is installed; Map and
//! Dark stay disabled until their capabilities exist.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use directory::controls::{BrowserCapabilities, BrowserControls};

use crate::theme;

const HEADER_HEIGHT: f32 = 48.0;
const LOGO_SIZE: f32 = 28.0;

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn header_ui(
    mut contexts: EguiContexts,
    caps: Res<BrowserCapabilities>,
    mut controls: ResMut<BrowserControls>,
) {
    egui::TopBottomPanel::top("header_bar")
        .exact_height(HEADER_HEIGHT)
        .frame(
            egui::Frame::NONE
                .fill(theme::BG_SURFACE)
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                logo_mark(ui);
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Freerooms")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::ACCENT),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Added right to left, so the reading order is
                    // Search, Grid, Map, Dark.
                    dark_button(ui, &caps);

                    ui.add_enabled(false, egui::Button::new("Map"))
                        .on_disabled_hover_text("Map view is not available yet");

                    ui.selectable_label(true, "Grid")
                        .on_hover_text("Browsing the building grid");

                    search_button(ui, &caps, &mut controls);
                });
            });
        });
}

fn logo_mark(ui: &mut egui::Ui) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 6.0, theme::ACCENT);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Fr",
            egui::FontId::proportional(theme::FONT_BODY),
            theme::BG_SURFACE,
        );
    }
}

fn dark_button(ui: &mut egui::Ui, caps: &BrowserCapabilities) {
    let response = ui.add_enabled(
        caps.theme.is_some(),
        egui::Button::new("\u{1f319} Dark"),
    );
    match &caps.theme {
        Some(handler) => {
            if response.clicked() {
                handler.toggle();
            }
        }
        None => {
            response.on_disabled_hover_text("Dark mode is not available");
        }
    }
}

fn search_button(
    ui: &mut egui::Ui,
    caps: &BrowserCapabilities,
    controls: &mut ResMut<BrowserControls>,
) {
    let response = ui.add_enabled(
        caps.search.is_some(),
        egui::Button::new("\u{1f50d} Search"),
    );
    if caps.search.is_some() {
        if response.clicked() {
            controls.request_focus = true;
        }
    } else {
        response.on_disabled_hover_text("Search is not available");
    }
}
