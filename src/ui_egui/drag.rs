use chrono::NaiveDate;
use egui::{Context, Pos2, Rect};

use crate::board::{DragPoint, InputCapabilities};
use crate::models::date_key::DateKey;

/// Where each date column was laid out this frame.
///
/// Columns come and go as the window navigates mid-drag, so drops are
/// resolved against the latest layout instead of the card that started them.
#[derive(Debug, Default, Clone)]
pub struct ColumnLayout {
    columns: Vec<(DateKey, Rect)>,
}

impl ColumnLayout {
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    pub fn push(&mut self, date: NaiveDate, rect: Rect) {
        self.columns.push((DateKey::from(date), rect));
    }

    pub fn hit_test(&self, pos: Pos2) -> Option<DateKey> {
        self.columns
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(key, _)| *key)
    }
}

pub fn to_drag_point(pos: Pos2) -> DragPoint {
    DragPoint::new(pos.x, pos.y)
}

/// Probe the input layer for the capabilities of the drag about to start
pub fn capabilities(ctx: &Context) -> InputCapabilities {
    InputCapabilities {
        touch: ctx.input(|i| i.any_touches()),
    }
}

/// Latest pointer or finger position, if any
pub fn pointer_pos(ctx: &Context) -> Option<Pos2> {
    ctx.input(|i| i.pointer.latest_pos().or_else(|| i.pointer.interact_pos()))
}

pub fn pointer_released(ctx: &Context) -> bool {
    ctx.input(|i| i.pointer.any_released())
}

pub fn pointer_pressed(ctx: &Context) -> bool {
    ctx.input(|i| i.pointer.any_pressed())
}
