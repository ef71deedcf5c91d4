use chrono::NaiveDate;
use egui::{Pos2, RichText, Stroke};

use super::event_rendering::render_card;
use crate::board::{BoardController, Clock, Density, DragPayload, DragSource, DropTarget};
use crate::models::event::{Event, EventId};
use crate::ui_egui::drag::ColumnLayout;
use crate::ui_egui::theme::BoardTheme;
use crate::utils::date::day_label;

/// What the user did to the board during this frame
#[derive(Debug, Default)]
pub struct BoardViewResult {
    /// Payload handed out by the picked-up card, with the press position
    pub drag_started: Option<(DragPayload, Pos2)>,
    pub clicked: Option<Event>,
}

/// Render one column per drop target and record where each one landed.
pub fn render_board<C: Clock>(
    ui: &mut egui::Ui,
    board: &BoardController<C>,
    layout: &mut ColumnLayout,
    theme: &BoardTheme,
) -> BoardViewResult {
    let mut result = BoardViewResult::default();
    layout.clear();

    let targets = board.drop_targets();
    if targets.is_empty() {
        return result;
    }

    let show_day_header = board.window().density() == Density::Week;
    let min_height = ui.available_height();
    let dragged = board.dragged_event_id();

    ui.columns(targets.len(), |columns| {
        for (column_ui, target) in columns.iter_mut().zip(targets.iter()) {
            let date = target.date_key().date();
            let rect = render_column(
                column_ui,
                board,
                target,
                show_day_header,
                min_height,
                dragged,
                theme,
                &mut result,
            );
            layout.push(date, rect);
        }
    });

    result
}

#[allow(clippy::too_many_arguments)]
fn render_column<C: Clock>(
    ui: &mut egui::Ui,
    board: &BoardController<C>,
    target: &DropTarget,
    show_day_header: bool,
    min_height: f32,
    dragged: Option<EventId>,
    theme: &BoardTheme,
    result: &mut BoardViewResult,
) -> egui::Rect {
    let fill = if target.is_over() {
        theme.column_hover
    } else {
        theme.column_background
    };

    let frame = egui::Frame::none()
        .fill(fill)
        .rounding(12.0)
        .inner_margin(8.0)
        .stroke(Stroke::new(1.0, theme.column_border));

    let response = frame.show(ui, |ui| {
        ui.set_min_height(min_height - 16.0);
        if show_day_header {
            ui.label(
                RichText::new(day_label(target.date_key().date()))
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(6.0);
        }

        let events = board.events_for(target.date_key());
        if events.is_empty() {
            ui.label(RichText::new("No events").small().color(theme.text_secondary));
        }

        for event in events {
            let mut source = DragSource::new(event.clone()).with_active(dragged == Some(event.id));
            let card = render_card(ui, &source, theme);
            if card.drag_started() {
                if let Some(pos) = card.interact_pointer_pos() {
                    result.drag_started = Some((source.begin(), pos));
                }
            } else if card.clicked() {
                result.clicked = Some(event.clone());
            }
            ui.add_space(8.0);
        }
    });

    response.response.rect
}

/// Weekday tabs shown above the single-date board. Returns the tapped date.
pub fn render_date_strip(
    ui: &mut egui::Ui,
    week: &[NaiveDate],
    anchor: NaiveDate,
    theme: &BoardTheme,
) -> Option<NaiveDate> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for date in week {
            let (weekday, day) = crate::utils::date::tab_labels(*date);
            let selected = *date == anchor;
            let text = RichText::new(format!("{}\n{}", weekday, day));
            let text = if selected {
                text.strong().color(theme.card_text)
            } else {
                text.color(theme.text_primary)
            };
            let button = egui::Button::new(text)
                .fill(if selected {
                    theme.tab_selected
                } else {
                    theme.column_background
                })
                .min_size(egui::vec2(44.0, 40.0));
            if ui.add(button).clicked() {
                picked = Some(*date);
            }
        }
    });
    picked
}
