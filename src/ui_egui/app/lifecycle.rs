use super::toast::ToastManager;
use super::BoardApp;
use crate::board::{BoardController, MonotonicClock, Phase};
use crate::models::settings::BoardSettings;
use crate::services::event_store::seed::load_store;
use crate::ui_egui::drag::ColumnLayout;
use crate::ui_egui::theme::BoardTheme;
use crate::ui_egui::views::board_view::render_board;
use crate::ui_egui::views::event_rendering::render_preview;

impl BoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: BoardSettings) -> Self {
        let store = load_store(settings.seed_path.as_deref());
        let width = cc.egui_ctx.screen_rect().width();
        let board = BoardController::new(
            MonotonicClock::new(),
            store,
            &settings,
            settings.is_narrow(width),
        );

        let active_theme = BoardTheme::light();
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Board starting at {} (hold {} ms, repeat {} ms)",
            settings.initial_date,
            settings.hold_delay_ms,
            settings.repeat_interval_ms
        );

        Self {
            board,
            settings,
            active_theme,
            layout: ColumnLayout::default(),
            swipe_tracking: false,
            show_detail: false,
            toast_manager: ToastManager::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let viewport_width = ctx.screen_rect().width();
        self.board.set_narrow(self.settings.is_narrow(viewport_width));

        if self.board.phase() == Phase::Unmounted {
            self.board.mount();
        }

        self.handle_drag_input(ctx, viewport_width);

        let fired = self.board.tick();
        if !fired.is_empty() {
            log::debug!("Navigated {:?} while dragging", fired);
        }
        self.schedule_repaint(ctx);

        if !self.board.is_visible() {
            // Priming frame: keep the board hidden and come straight back
            egui::CentralPanel::default().show(ctx, |_ui| {});
            ctx.request_repaint();
            return;
        }

        self.render_header(ctx);

        let theme = self.active_theme.clone();
        let result = egui::CentralPanel::default()
            .show(ctx, |ui| render_board(ui, &self.board, &mut self.layout, &theme))
            .inner;

        if let Some((payload, pos)) = result.drag_started {
            self.start_drag(ctx, payload, pos);
        } else if let Some(event) = result.clicked {
            self.board.select(event.id);
            self.show_detail = true;
        }

        self.handle_swipe_input(ctx);

        if let Some(session) = self.board.session() {
            if session.shows_preview() {
                if let (Some(event), Some(at)) = (session.event(), session.position()) {
                    render_preview(ctx, event, egui::pos2(at.x, at.y), &theme);
                }
            }
        }

        self.render_detail(ctx);
        self.toast_manager.render(ctx, theme.is_dark);
    }

    /// Keep frames coming while a drag may still fire edge navigation
    fn schedule_repaint(&self, ctx: &egui::Context) {
        if let Some(wait) = self.board.next_deadline_in() {
            ctx.request_repaint_after(wait);
        }
        if self.board.is_dragging() {
            ctx.request_repaint();
        }
    }

    fn render_detail(&mut self, ctx: &egui::Context) {
        if !self.show_detail {
            return;
        }
        let Some(event) = self.board.selected().cloned() else {
            self.show_detail = false;
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(event.title.as_str())
            .id(egui::Id::new("event_detail"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                if !event.time.is_empty() {
                    ui.label(egui::RichText::new(&event.time).weak());
                }
                if let Some(date) = self.board.store().date_of(event.id) {
                    ui.label(egui::RichText::new(date.date().format("%A, %B %-d").to_string()).small());
                }
                ui.add_space(6.0);
                ui.label(&event.description);
                if let Some(url) = &event.image_url {
                    ui.add_space(6.0);
                    ui.hyperlink_to("Open image", url);
                }
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.show_detail = false;
            self.board.clear_selection();
        }
    }
}
