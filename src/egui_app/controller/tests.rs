use egui::Pos2;

use super::*;
use crate::config::DeckSettings;
use crate::reorder::InsertPosition;

fn seeded_controller(page_count: usize) -> DeckController {
    let mut controller = DeckController::new();
    let mut cfg = AppConfig::default();
    cfg.deck.page_count = page_count;
    controller.apply_config(cfg);
    controller
}

fn order(controller: &DeckController) -> Vec<&str> {
    controller
        .machine()
        .deck()
        .ids()
        .iter()
        .map(PageId::as_str)
        .collect()
}

#[test]
fn pointer_session_commits_on_finish() {
    let mut controller = seeded_controller(4);
    controller.start_pointer_drag(&PageId::from("1"), Pos2::new(10.0, 10.0));
    controller.update_pointer_drag(Pos2::new(40.0, 10.0), Some(PageId::from("3")));
    controller.finish_active_drag();

    assert_eq!(order(&controller), ["2", "3", "1", "4"]);
    assert_eq!(controller.ui.focused, Some(PageId::from("1")));
    assert!(controller.take_config_dirty());
    assert!(!controller.is_dragging());
    assert_eq!(controller.ui.drag.position, None);
}

#[test]
fn pointer_finish_without_hover_changes_nothing() {
    let mut controller = seeded_controller(3);
    controller.start_pointer_drag(&PageId::from("2"), Pos2::new(0.0, 0.0));
    controller.update_pointer_drag(Pos2::new(5.0, 0.0), None);
    controller.finish_active_drag();

    assert_eq!(order(&controller), ["1", "2", "3"]);
    assert!(!controller.take_config_dirty());
}

#[test]
fn keyboard_lift_step_drop_commits() {
    let mut controller = seeded_controller(4);
    controller.focus_page(&PageId::from("2"));
    controller.handle_keyboard(KeyboardIntent::Lift);
    assert!(controller.keyboard_session_active());

    controller.handle_keyboard(KeyboardIntent::TargetNext);
    controller.handle_keyboard(KeyboardIntent::TargetNext);
    controller.handle_keyboard(KeyboardIntent::Drop);

    assert_eq!(order(&controller), ["1", "3", "4", "2"]);
    assert_eq!(controller.ui.focused, Some(PageId::from("2")));
    assert!(controller.take_config_dirty());
}

#[test]
fn keyboard_targeting_clamps_at_the_deck_edges() {
    let mut controller = seeded_controller(3);
    controller.focus_page(&PageId::from("3"));
    controller.handle_keyboard(KeyboardIntent::Lift);

    controller.handle_keyboard(KeyboardIntent::TargetNext);
    let session = controller.machine().session().unwrap();
    assert_eq!(session.target(), Some(&PageId::from("3")));

    controller.handle_keyboard(KeyboardIntent::TargetPrev);
    controller.handle_keyboard(KeyboardIntent::TargetPrev);
    controller.handle_keyboard(KeyboardIntent::TargetPrev);
    let session = controller.machine().session().unwrap();
    assert_eq!(session.target(), Some(&PageId::from("1")));
}

#[test]
fn keyboard_targeting_wraps_when_enabled() {
    let mut controller = seeded_controller(3);
    let mut cfg = AppConfig::default();
    cfg.deck.page_count = 3;
    cfg.controls.wrap_keyboard_targeting = true;
    controller.apply_config(cfg);

    controller.focus_page(&PageId::from("3"));
    controller.handle_keyboard(KeyboardIntent::Lift);
    controller.handle_keyboard(KeyboardIntent::TargetNext);
    let session = controller.machine().session().unwrap();
    assert_eq!(session.target(), Some(&PageId::from("1")));
}

#[test]
fn escape_cancels_a_keyboard_session() {
    let mut controller = seeded_controller(3);
    controller.focus_page(&PageId::from("1"));
    controller.handle_keyboard(KeyboardIntent::Lift);
    controller.handle_keyboard(KeyboardIntent::TargetNext);
    controller.handle_keyboard(KeyboardIntent::Cancel);

    assert_eq!(order(&controller), ["1", "2", "3"]);
    assert!(!controller.is_dragging());
    assert!(!controller.take_config_dirty());
}

#[test]
fn arrows_move_focus_while_idle() {
    let mut controller = seeded_controller(3);
    controller.handle_keyboard(KeyboardIntent::FocusNext);
    assert_eq!(controller.ui.focused, Some(PageId::from("1")));
    controller.handle_keyboard(KeyboardIntent::FocusNext);
    assert_eq!(controller.ui.focused, Some(PageId::from("2")));
    controller.handle_keyboard(KeyboardIntent::FocusPrev);
    assert_eq!(controller.ui.focused, Some(PageId::from("1")));
}

#[test]
fn lift_without_focus_picks_the_first_page() {
    let mut controller = seeded_controller(2);
    controller.handle_keyboard(KeyboardIntent::Lift);
    let session = controller.machine().session().unwrap();
    assert_eq!(session.active(), &PageId::from("1"));
}

#[test]
fn page_cards_mark_active_focus_and_insert() {
    let mut controller = seeded_controller(3);
    controller.focus_page(&PageId::from("1"));
    controller.handle_keyboard(KeyboardIntent::Lift);
    controller.handle_keyboard(KeyboardIntent::TargetNext);

    let cards = controller.page_cards();
    assert_eq!(cards.len(), 3);
    assert!(cards[0].active && cards[0].focused);
    assert_eq!(cards[1].insert, Some(InsertPosition::After));
    assert_eq!(cards[2].insert, None);
}

#[test]
fn stepping_back_onto_the_lifted_page_clears_the_marker() {
    let mut controller = seeded_controller(3);
    controller.focus_page(&PageId::from("2"));
    controller.handle_keyboard(KeyboardIntent::Lift);
    controller.handle_keyboard(KeyboardIntent::TargetNext);
    controller.handle_keyboard(KeyboardIntent::TargetPrev);

    let cards = controller.page_cards();
    assert!(cards.iter().all(|card| card.insert.is_none()));
}

#[test]
fn duplicate_persisted_order_reseeds_the_deck() {
    let mut controller = DeckController::new();
    let mut cfg = AppConfig::default();
    cfg.deck = DeckSettings {
        page_count: 4,
        order: vec!["1".into(), "1".into(), "2".into()],
    };
    controller.apply_config(cfg);

    assert_eq!(order(&controller), ["1", "2", "3", "4"]);
}

#[test]
fn config_snapshot_captures_the_committed_order() {
    let mut controller = seeded_controller(3);
    controller.start_pointer_drag(&PageId::from("3"), Pos2::new(0.0, 0.0));
    controller.update_pointer_drag(Pos2::new(0.0, 0.0), Some(PageId::from("1")));
    controller.finish_active_drag();

    let snapshot = controller.config_snapshot();
    assert_eq!(snapshot.deck.order, ["3", "1", "2"]);
    assert_eq!(snapshot.deck.page_count, 3);
}

#[test]
fn layout_change_marks_config_dirty() {
    let mut controller = seeded_controller(2);
    controller.set_layout(DeckLayout::Horizontal);
    assert!(controller.take_config_dirty());
    controller.set_layout(DeckLayout::Horizontal);
    assert!(!controller.take_config_dirty());
}
