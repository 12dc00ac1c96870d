use super::*;
use eframe::egui::{self, Align2, Area, Frame, Margin, Order, RichText, Stroke, Vec2};

use crate::reorder::{InsertPosition, Modality, OverlayPreview};

impl DeckApp {
    /// Floating clone of the dragged page, plus the keyboard drop hint.
    pub(super) fn render_drag_overlay(&mut self, ctx: &egui::Context) {
        let preview = OverlayPreview::project(self.controller.machine());
        if let Some(preview) = preview
            && let Some(pos) = self.controller.ui.drag.position
        {
            let palette = style::palette();
            Area::new("drag_preview".into())
                .order(Order::Tooltip)
                .pivot(Align2::CENTER_CENTER)
                .current_pos(pos + Vec2::new(16.0, 16.0))
                .show(ctx, |ui| {
                    Frame::new()
                        .fill(palette.bg_tertiary)
                        .stroke(Stroke::new(1.0, palette.accent))
                        .corner_radius(4.0)
                        .inner_margin(Margin::same(8))
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("Page {}", preview.page))
                                        .color(palette.text_primary),
                                );
                                if let Some((target, position)) = preview.marker_on_clone() {
                                    let hint = match position {
                                        InsertPosition::Before => format!("before page {target}"),
                                        InsertPosition::After => format!("after page {target}"),
                                    };
                                    ui.label(
                                        RichText::new(hint).small().color(palette.marker),
                                    );
                                }
                            });
                        });
                });
        }

        let pointer_session = self
            .controller
            .machine()
            .session()
            .is_some_and(|session| session.modality() == Modality::Pointer);
        if pointer_session {
            if ctx.input(|i| i.pointer.any_released()) {
                self.controller.finish_active_drag();
            } else if !ctx.input(|i| i.pointer.primary_down()) {
                // Safety net to clear drag state if a release was missed.
                self.controller.finish_active_drag();
            }
        }
    }
}
