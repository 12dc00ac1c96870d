use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::StatusTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub card_fill: Color32,
    pub card_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub marker: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 15, 18),
        bg_secondary: Color32::from_rgb(22, 24, 28),
        bg_tertiary: Color32::from_rgb(34, 37, 43),
        panel_outline: Color32::from_rgb(48, 52, 60),
        card_fill: Color32::from_rgb(40, 44, 52),
        card_outline: Color32::from_rgb(66, 72, 82),
        text_primary: Color32::from_rgb(198, 204, 212),
        text_muted: Color32::from_rgb(132, 138, 148),
        accent: Color32::from_rgb(108, 174, 255),
        marker: Color32::from_rgb(86, 196, 145),
        warning: Color32::from_rgb(206, 145, 80),
        success: Color32::from_rgb(96, 180, 138),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_card_like(&mut visuals.widgets.inactive, palette);
    set_card_like(&mut visuals.widgets.hovered, palette);
    set_card_like(&mut visuals.widgets.active, palette);
    set_card_like(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_card_like(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Info => "Info",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.bg_tertiary,
        StatusTone::Info => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => Color32::from_rgb(188, 64, 52),
    }
}

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().card_outline)
}

pub fn focus_stroke() -> Stroke {
    Stroke::new(2.0, palette().accent)
}

pub fn marker_stroke() -> Stroke {
    Stroke::new(3.0, palette().marker)
}
