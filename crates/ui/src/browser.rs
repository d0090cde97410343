//! Building browser view:
//! - control row (Filters, search box, Sort), capability-gated
//! - scrollable card grid with responsive column counts
//! - painter-drawn cards: photo or initials placeholder, availability
//!   badge, orange name banner
//!
//! The card list is `BrowserCapabilities::visible`; with no handlers
//! installed it is the directory in dataset order.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use directory::controls::{BrowserCapabilities, BrowserControls};
use directory::dataset::BuildingDirectory;
use directory::{building::Building, status::AvailabilityStatus};

use crate::building_art::BuildingArt;
use crate::theme;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const CARD_WIDTH: f32 = 230.0;
const CARD_HEIGHT: f32 = 250.0;
const CARD_GAP: f32 = 16.0;
const CARD_CORNER: f32 = 8.0;
const BADGE_MARGIN: f32 = 10.0;
/// Wide enough for "35 rooms available" at the small font size.
const BADGE_WIDTH: f32 = 150.0;
const BADGE_HEIGHT: f32 = 24.0;
const BANNER_MARGIN: f32 = 10.0;
const BANNER_HEIGHT: f32 = 40.0;

/// Column count for a given panel width: 1 column on narrow windows up
/// to 5 on wide desktops.
pub fn grid_columns(width: f32) -> usize {
    if width < 768.0 {
        1
    } else if width < 1024.0 {
        2
    } else if width < 1280.0 {
        3
    } else {
        5
    }
}

pub fn status_color(status: AvailabilityStatus) -> egui::Color32 {
    match status {
        AvailabilityStatus::None => theme::STATUS_NONE,
        AvailabilityStatus::Low => theme::STATUS_LOW,
        AvailabilityStatus::High => theme::STATUS_HIGH,
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn browser_ui(
    mut contexts: EguiContexts,
    dir: Res<BuildingDirectory>,
    caps: Res<BrowserCapabilities>,
    mut controls: ResMut<BrowserControls>,
    art: Res<BuildingArt>,
) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(theme::BG_PAGE)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(contexts.ctx_mut(), |ui| {
            control_row(ui, &caps, &mut controls);
            ui.add_space(12.0);

            let visible = caps.visible(&controls.query, &dir.buildings);
            building_grid(ui, &visible, &art);
        });
}

fn control_row(
    ui: &mut egui::Ui,
    caps: &BrowserCapabilities,
    controls: &mut ResMut<BrowserControls>,
) {
    ui.horizontal(|ui| {
        let filters = ui.add_enabled(caps.filter.is_some(), egui::Button::new("Filters"));
        if caps.filter.is_none() {
            filters.on_disabled_hover_text("Filtering is not available");
        }

        // Leave room for the Sort button at the end of the row.
        let reserved = 72.0 + ui.spacing().item_spacing.x * 2.0;
        let field_width = (ui.available_width() - reserved).max(120.0);
        let search = ui.add_enabled(
            caps.search.is_some(),
            egui::TextEdit::singleline(&mut controls.query)
                .desired_width(field_width)
                .hint_text("Search for a building..."),
        );
        if caps.search.is_none() {
            search.on_disabled_hover_text("Search is not available");
        } else if controls.request_focus {
            search.request_focus();
            controls.request_focus = false;
        }

        let sort = ui.add_enabled(caps.sort.is_some(), egui::Button::new("\u{2195} Sort"));
        if caps.sort.is_none() {
            sort.on_disabled_hover_text("Sorting is not available");
        }
    });
}

fn building_grid(ui: &mut egui::Ui, buildings: &[&Building], art: &BuildingArt) {
    if buildings.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("No buildings to show.")
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
        });
        return;
    }

    let columns = grid_columns(ui.available_width());
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.spacing_mut().item_spacing = egui::vec2(CARD_GAP, CARD_GAP);
        for row in buildings.chunks(columns) {
            ui.horizontal(|ui| {
                for building in row {
                    building_card(ui, building, art);
                }
            });
        }
    });
}

fn building_card(ui: &mut egui::Ui, building: &Building, art: &BuildingArt) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(CARD_WIDTH, CARD_HEIGHT), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);

    // The photo fills the card; badge and banner are drawn over it.
    match art.texture_for(&building.image) {
        Some(texture) => {
            painter.rect_filled(rect, CARD_CORNER, theme::BG_SURFACE);
            painter.image(
                texture,
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            painter.rect_filled(rect, CARD_CORNER, theme::BG_IMAGE_PLACEHOLDER);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initials(&building.name),
                egui::FontId::proportional(44.0),
                theme::TEXT_MUTED,
            );
        }
    }
    painter.rect_stroke(
        rect,
        CARD_CORNER,
        egui::Stroke::new(1.0, theme::BORDER),
        egui::StrokeKind::Inside,
    );

    availability_badge(&painter, rect, building);
    name_banner(&painter, rect, &building.name);

    response.on_hover_text(format!("{}: {}", building.name, building.status().label()));
}

fn availability_badge(painter: &egui::Painter, card: egui::Rect, building: &Building) {
    let pill = egui::Rect::from_min_size(
        egui::pos2(
            card.right() - BADGE_MARGIN - BADGE_WIDTH,
            card.top() + BADGE_MARGIN,
        ),
        egui::vec2(BADGE_WIDTH, BADGE_HEIGHT),
    );
    painter.rect_filled(pill, BADGE_HEIGHT * 0.5, theme::BG_SURFACE);

    let dot_radius = 4.0;
    let dot_center = egui::pos2(pill.left() + 10.0 + dot_radius, pill.center().y);
    painter.circle_filled(dot_center, dot_radius, status_color(building.status()));

    painter.text(
        egui::pos2(dot_center.x + dot_radius + 6.0, pill.center().y),
        egui::Align2::LEFT_CENTER,
        building.availability_text(),
        egui::FontId::proportional(theme::FONT_SMALL),
        theme::TEXT_PRIMARY,
    );
}

fn name_banner(painter: &egui::Painter, card: egui::Rect, name: &str) {
    let banner = egui::Rect::from_min_max(
        egui::pos2(
            card.left() + BANNER_MARGIN,
            card.bottom() - BANNER_MARGIN - BANNER_HEIGHT,
        ),
        egui::pos2(card.right() - BANNER_MARGIN, card.bottom() - BANNER_MARGIN),
    );
    painter.rect_filled(banner, 6.0, theme::ACCENT);
    painter.text(
        egui::pos2(banner.left() + 10.0, banner.center().y),
        egui::Align2::LEFT_CENTER,
        name,
        egui::FontId::proportional(theme::FONT_BODY),
        theme::BG_SURFACE,
    );
}

/// Up to two uppercase initials for the placeholder art, skipping words
/// with no alphanumeric lead ("&", "(K17)" keeps the K).
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
