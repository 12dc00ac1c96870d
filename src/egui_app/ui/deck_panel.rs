use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Vec2};

use super::style;
use crate::config::DeckLayout;
use crate::egui_app::controller::DeckController;
use crate::egui_app::state::PageCardView;
use crate::reorder::{InsertPosition, Modality, PageId};

const GRID_CARD_SIZE: Vec2 = Vec2::new(110.0, 140.0);
const ROW_HEIGHT: f32 = 44.0;
const CARD_SPACING: f32 = 12.0;

/// Interactions gathered while laying the deck out, applied afterwards so
/// the controller sees one coherent update per frame.
#[derive(Default)]
struct PanelOutcome {
    rects: Vec<(PageId, Rect)>,
    drag_started: Option<(PageId, Pos2)>,
    clicked: Option<PageId>,
    drag_stopped: bool,
}

pub(super) fn render_deck_panel(ui: &mut egui::Ui, controller: &mut DeckController) {
    let layout = controller.layout();
    let cards = controller.page_cards();
    let mut outcome = PanelOutcome::default();

    ui.spacing_mut().item_spacing = Vec2::splat(CARD_SPACING);
    match layout {
        DeckLayout::Vertical => {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = ui.available_width();
                    for card in &cards {
                        show_card(ui, card, Vec2::new(width, ROW_HEIGHT), layout, &mut outcome);
                    }
                });
        }
        DeckLayout::Horizontal => {
            egui::ScrollArea::horizontal()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for card in &cards {
                            show_card(ui, card, GRID_CARD_SIZE, layout, &mut outcome);
                        }
                    });
                });
        }
        DeckLayout::Grid => {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for card in &cards {
                            show_card(ui, card, GRID_CARD_SIZE, layout, &mut outcome);
                        }
                    });
                });
        }
    }

    apply_outcome(ui, controller, outcome);
}

fn show_card(
    ui: &mut egui::Ui,
    card: &PageCardView,
    size: Vec2,
    layout: DeckLayout,
    outcome: &mut PanelOutcome,
) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let response = ui.interact(
        rect,
        ui.make_persistent_id(card.id.as_str()),
        Sense::click_and_drag(),
    );
    outcome.rects.push((card.id.clone(), rect));

    let palette = style::palette();
    let fill = if card.active {
        palette.bg_secondary
    } else if response.hovered() {
        palette.bg_tertiary
    } else {
        palette.card_fill
    };
    let stroke = if card.focused {
        style::focus_stroke()
    } else {
        style::card_stroke()
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, fill);
    painter.rect_stroke(rect, 4.0, stroke, egui::StrokeKind::Inside);
    let text_color = if card.active {
        palette.text_muted
    } else {
        palette.text_primary
    };
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        card.id.as_str(),
        FontId::proportional(18.0),
        text_color,
    );
    if let Some(position) = card.insert {
        paint_insert_marker(ui, rect, position, layout);
    }

    if response.clicked() {
        outcome.clicked = Some(card.id.clone());
    }
    if response.drag_started()
        && let Some(pos) = response.interact_pointer_pos()
    {
        outcome.drag_started = Some((card.id.clone(), pos));
    }
    if response.drag_stopped() {
        outcome.drag_stopped = true;
    }
}

/// Edge line on the target card: leading edge for Before, trailing for After.
fn paint_insert_marker(ui: &egui::Ui, rect: Rect, position: InsertPosition, layout: DeckLayout) {
    let stroke = style::marker_stroke();
    let inset = 2.0;
    let points = match (layout, position) {
        (DeckLayout::Vertical, InsertPosition::Before) => {
            [rect.left_top() + Vec2::new(inset, 0.0), rect.right_top() - Vec2::new(inset, 0.0)]
        }
        (DeckLayout::Vertical, InsertPosition::After) => [
            rect.left_bottom() + Vec2::new(inset, 0.0),
            rect.right_bottom() - Vec2::new(inset, 0.0),
        ],
        (_, InsertPosition::Before) => {
            [rect.left_top() + Vec2::new(0.0, inset), rect.left_bottom() - Vec2::new(0.0, inset)]
        }
        (_, InsertPosition::After) => [
            rect.right_top() + Vec2::new(0.0, inset),
            rect.right_bottom() - Vec2::new(0.0, inset),
        ],
    };
    ui.painter().line_segment(points, stroke);
}

fn apply_outcome(ui: &egui::Ui, controller: &mut DeckController, outcome: PanelOutcome) {
    if let Some(id) = outcome.clicked {
        controller.focus_page(&id);
    }
    if let Some((id, pos)) = outcome.drag_started {
        controller.start_pointer_drag(&id, pos);
    }

    let pointer_session = controller
        .machine()
        .session()
        .is_some_and(|session| session.modality() == Modality::Pointer);
    if pointer_session {
        if let Some(pointer) = pointer_pos_for_drag(ui, controller.ui.drag.position) {
            let hover = outcome
                .rects
                .iter()
                .find(|(_, rect)| rect.contains(pointer))
                .map(|(id, _)| id.clone());
            controller.update_pointer_drag(pointer, hover);
        }
        if outcome.drag_stopped {
            controller.finish_active_drag();
        }
        return;
    }

    // Keyboard sessions anchor the floating preview to the targeted card.
    if controller.keyboard_session_active()
        && let Some(session) = controller.machine().session()
    {
        let anchor_id = session.target().unwrap_or(session.active());
        if let Some((_, rect)) = outcome.rects.iter().find(|(id, _)| id == anchor_id) {
            controller.ui.drag.position = Some(rect.center());
        }
    }
}

fn pointer_pos_for_drag(ui: &egui::Ui, drag_position: Option<Pos2>) -> Option<Pos2> {
    ui.input(|i| i.pointer.hover_pos().or_else(|| i.pointer.interact_pos()))
        .or(drag_position)
}
