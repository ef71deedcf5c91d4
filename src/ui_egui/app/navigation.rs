use super::BoardApp;
use crate::board::Density;
use crate::ui_egui::views::board_view::render_date_strip;

impl BoardApp {
    pub(super) fn navigate_previous(&mut self) {
        self.board.retreat();
    }

    pub(super) fn navigate_next(&mut self) {
        self.board.advance();
    }

    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        self.handle_keyboard_navigation(ctx);

        let theme = self.active_theme.clone();
        egui::TopBottomPanel::top("board_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("←").on_hover_text("Previous").clicked() {
                    self.navigate_previous();
                }

                let label = self.board.window().range_label();
                let available = ui.available_width() - 40.0;
                ui.allocate_ui_with_layout(
                    egui::vec2(available.max(0.0), ui.spacing().interact_size.y),
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(egui::RichText::new(label).heading().color(theme.text_primary));
                    },
                );

                if ui.button("→").on_hover_text("Next").clicked() {
                    self.navigate_next();
                }
            });

            if self.board.window().density() == Density::Single {
                ui.add_space(4.0);
                let window = self.board.window();
                let picked = render_date_strip(ui, &window.week_dates(), window.anchor(), &theme);
                if let Some(date) = picked {
                    self.board.jump_to(date);
                }
            }
            ui.add_space(6.0);
        });
    }

    /// Arrow keys step the window, except while a card is being carried
    fn handle_keyboard_navigation(&mut self, ctx: &egui::Context) {
        if self.board.is_dragging() || ctx.wants_keyboard_input() {
            return;
        }
        let (left, right) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if left {
            self.navigate_previous();
        }
        if right {
            self.navigate_next();
        }
    }
}
