mod input;
mod lifecycle;
mod navigation;
mod toast;

use self::toast::ToastManager;
use crate::board::BoardController;
use crate::models::settings::BoardSettings;
use crate::ui_egui::drag::ColumnLayout;
use crate::ui_egui::theme::BoardTheme;

pub struct BoardApp {
    /// Drag and navigation engine, plus the event store it owns
    board: BoardController,
    settings: BoardSettings,
    active_theme: BoardTheme,
    /// Column rectangles from the last rendered frame, used to resolve drops
    layout: ColumnLayout,
    /// True between a touch press on the board and its release
    swipe_tracking: bool,
    show_detail: bool,
    toast_manager: ToastManager,
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
