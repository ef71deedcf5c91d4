//! Feeds egui pointer and touch input into the board controller.

use egui::Pos2;

use super::BoardApp;
use crate::board::{DragPayload, DropOutcome};
use crate::ui_egui::drag::{capabilities, pointer_pos, pointer_pressed, pointer_released, to_drag_point};

impl BoardApp {
    pub(super) fn start_drag(&mut self, ctx: &egui::Context, payload: DragPayload, pos: Pos2) {
        self.swipe_tracking = false;
        self.board.begin_drag(payload, to_drag_point(pos), capabilities(ctx));
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    /// Track the carried card, and resolve the drop on release.
    ///
    /// Release is read from global input rather than the card's response: the
    /// card may have scrolled out of view after an edge navigation.
    pub(super) fn handle_drag_input(&mut self, ctx: &egui::Context, viewport_width: f32) {
        if !self.board.is_dragging() {
            return;
        }

        let pos = pointer_pos(ctx);
        let released = pointer_released(ctx) || !ctx.input(|i| i.pointer.any_down());

        if let Some(pos) = pos {
            self.board.drag_to(to_drag_point(pos), viewport_width);
            self.board.hover(self.layout.hit_test(pos));
        }

        if !released {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            return;
        }

        match pos.and_then(|pos| self.layout.hit_test(pos)) {
            Some(key) => {
                let title = self
                    .board
                    .session()
                    .and_then(|s| s.event())
                    .map(|e| e.title.clone())
                    .unwrap_or_default();
                if let Some(DropOutcome::Moved { to, .. }) = self.board.drop_on(key) {
                    let label = to.date().format("%a, %b %-d");
                    self.toast_manager.success(format!("Moved '{}' to {}", title, label));
                }
            }
            None => self.board.cancel_drag(),
        }
    }

    /// Horizontal touch swipes on the board step the window
    pub(super) fn handle_swipe_input(&mut self, ctx: &egui::Context) {
        if self.board.is_dragging() {
            self.swipe_tracking = false;
            return;
        }

        let touching = ctx.input(|i| i.any_touches());
        if touching && pointer_pressed(ctx) {
            if let Some(origin) = ctx.input(|i| i.pointer.press_origin()) {
                self.board.swipe_start(origin.x);
                self.swipe_tracking = true;
            }
        }

        if self.swipe_tracking && pointer_released(ctx) {
            self.swipe_tracking = false;
            if let Some(pos) = pointer_pos(ctx) {
                self.board.swipe_end(pos.x);
            }
        }
    }
}
