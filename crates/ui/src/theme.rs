//! Shared palette and egui style for the Freerooms look: white surfaces,
//! orange accents, and the three-colour availability scale.

use bevy_egui::{egui, EguiContexts};

/// Brand orange used for the title, name banners, and active widgets.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(249, 115, 22);
/// Soft orange for text selection and the selected nav entry.
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(254, 215, 170);

/// Page background behind the card grid.
pub const BG_PAGE: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
/// Card and header surface.
pub const BG_SURFACE: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
/// Stand-in fill while a building photo has not loaded.
pub const BG_IMAGE_PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);

pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);

/// Badge dot when no rooms are free.
pub const STATUS_NONE: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
/// Badge dot when at most half the rooms are free.
pub const STATUS_LOW: egui::Color32 = egui::Color32::from_rgb(234, 179, 8);
/// Badge dot when more than half the rooms are free.
pub const STATUS_HIGH: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

pub const FONT_TITLE: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

pub fn apply_freerooms_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let idle = egui::Color32::from_rgb(243, 244, 246);
    let hover = egui::Color32::from_rgb(255, 247, 237);

    style.visuals.widgets.noninteractive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.bg_fill = idle;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.inactive.weak_bg_fill = idle;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = ACCENT;

    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, BG_SURFACE);
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);

    style.visuals.window_fill = BG_SURFACE;
    style.visuals.panel_fill = BG_PAGE;
    style.visuals.extreme_bg_color = BG_SURFACE;
    style.visuals.faint_bg_color = idle;

    // Selection highlight
    style.visuals.selection.bg_fill = ACCENT_SOFT;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    // Rounded corners (egui 0.31+ uses CornerRadius with u8 values)
    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
