use eframe::egui;

/// One frame of keyboard state, captured once per update.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSnapshot {
    pub escape: bool,
    pub space: bool,
    pub enter: bool,
    pub arrow_down: bool,
    pub arrow_up: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
}

impl InputSnapshot {
    pub fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            escape: i.key_pressed(egui::Key::Escape),
            space: i.key_pressed(egui::Key::Space),
            enter: i.key_pressed(egui::Key::Enter),
            arrow_down: i.key_pressed(egui::Key::ArrowDown),
            arrow_up: i.key_pressed(egui::Key::ArrowUp),
            arrow_left: i.key_pressed(egui::Key::ArrowLeft),
            arrow_right: i.key_pressed(egui::Key::ArrowRight),
        })
    }
}
