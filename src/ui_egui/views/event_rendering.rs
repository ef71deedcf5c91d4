//! Event card painting.
//!
//! Cards are painted directly with the painter so the same routine serves the
//! in-column card and the floating touch preview.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Vec2};

use crate::board::DragSource;
use crate::models::event::Event;
use crate::ui_egui::theme::BoardTheme;

pub const CARD_HEIGHT: f32 = 84.0;
pub const PREVIEW_WIDTH: f32 = 240.0;
const PADDING: f32 = 8.0;
const DESCRIPTION_CHARS: usize = 48;

/// Paint one card into `rect`, faded by `opacity`
pub fn paint_card(painter: &Painter, rect: Rect, event: &Event, theme: &BoardTheme, opacity: f32) {
    let fade = |c: Color32| c.gamma_multiply(opacity);

    painter.rect_filled(rect, 8.0, fade(theme.card_fill()));
    // Lighter band along the top hints at the gradient of the card
    let band = Rect::from_min_size(rect.min, Vec2::new(rect.width(), 6.0));
    painter.rect_filled(band, 8.0, fade(theme.card_start));

    let mut cursor = rect.min + Vec2::new(PADDING, PADDING + 4.0);
    painter.text(
        cursor,
        Align2::LEFT_TOP,
        &event.title,
        FontId::proportional(14.0),
        fade(theme.card_text),
    );
    cursor.y += 20.0;

    if !event.time.is_empty() {
        painter.text(
            cursor,
            Align2::LEFT_TOP,
            &event.time,
            FontId::proportional(11.0),
            fade(theme.card_text.gamma_multiply(0.9)),
        );
        cursor.y += 16.0;
    }

    if !event.description.is_empty() {
        painter.text(
            cursor,
            Align2::LEFT_TOP,
            truncate(&event.description, DESCRIPTION_CHARS),
            FontId::proportional(12.0),
            fade(Color32::from_rgb(229, 231, 235)),
        );
    }
}

/// Lay out a draggable card and return its interaction response
pub fn render_card(ui: &mut egui::Ui, source: &DragSource, theme: &BoardTheme) -> egui::Response {
    let event = source.event();
    let size = Vec2::new(ui.available_width(), CARD_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let id = egui::Id::new(("board_card", event.id.0));
    let response = ui.interact(rect, id, Sense::click_and_drag());

    if ui.is_rect_visible(rect) {
        paint_card(ui.painter(), rect, event, theme, source.opacity());
    }

    if response.hovered() && !source.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
    response.on_hover_text(event.title.as_str())
}

/// Floating copy of the dragged card, drawn under the finger for touch drags
pub fn render_preview(ctx: &egui::Context, event: &Event, at: Pos2, theme: &BoardTheme) {
    let pos = at - Vec2::new(PREVIEW_WIDTH / 2.0, CARD_HEIGHT / 2.0);
    egui::Area::new(egui::Id::new("board_drag_preview"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(PREVIEW_WIDTH, CARD_HEIGHT), Sense::hover());
            paint_card(ui.painter(), rect, event, theme, 0.9);
        });
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
