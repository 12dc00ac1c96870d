//! egui renderer for the application UI.

use eframe::egui::{self, Color32, Frame, Margin, RichText, Vec2};
use tracing::warn;

use crate::config;
use crate::egui_app::controller::{DeckController, KeyboardIntent};
use crate::egui_app::state::StatusTone;

mod deck_panel;
mod drag_overlay;
pub(crate) mod input;
pub(crate) mod style;

use input::InputSnapshot;

/// Smallest window that still fits the grid layout and status bar.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(640.0, 480.0);

/// Renders the egui UI using the shared controller state.
pub struct DeckApp {
    controller: DeckController,
    visuals_set: bool,
}

impl DeckApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = DeckController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let snapshot = InputSnapshot::capture(ctx);
        let keyboard_session = self.controller.keyboard_session_active();
        if let Some(intent) = KeyboardIntent::from_input(&snapshot, keyboard_session) {
            self.controller.handle_keyboard(intent);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::new().fill(palette.bg_secondary).inner_margin(Margin::same(8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Pagedeck").strong().color(Color32::WHITE));
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(12.0);
                    let mut layout = self.controller.layout();
                    egui::ComboBox::from_label("Layout")
                        .selected_text(layout.label())
                        .show_ui(ui, |ui| {
                            for candidate in config::DeckLayout::ALL {
                                ui.selectable_value(&mut layout, candidate, candidate.label());
                            }
                        });
                    self.controller.set_layout(layout);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let count = self.controller.machine().deck().len();
                        ui.label(
                            RichText::new(format!("{count} pages")).color(palette.text_muted),
                        );
                    });
                });
            });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_secondary).inner_margin(Margin::same(6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let status = &self.controller.ui.status;
                    Frame::new()
                        .fill(status.badge_color)
                        .corner_radius(3.0)
                        .inner_margin(Margin::symmetric(6, 2))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&status.badge_label)
                                    .small()
                                    .color(Color32::WHITE),
                            );
                        });
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }

    fn persist_if_dirty(&mut self) {
        if !self.controller.take_config_dirty() {
            return;
        }
        let snapshot = self.controller.config_snapshot();
        if let Err(err) = config::save(&snapshot) {
            warn!("Failed to persist config: {err}");
            self.controller
                .set_status(format!("Failed to save order: {err}"), StatusTone::Warning);
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.handle_keyboard(ctx);
        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            deck_panel::render_deck_panel(ui, &mut self.controller);
        });
        self.render_drag_overlay(ctx);
        self.persist_if_dirty();
    }
}
