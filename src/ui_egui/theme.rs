//! Colors used by the board.

use egui::Color32;

/// Board color set
#[derive(Debug, Clone)]
pub struct BoardTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub app_background: Color32,

    /// Column background
    pub column_background: Color32,

    /// Column background while a drag hovers over it
    pub column_hover: Color32,

    pub column_border: Color32,

    /// Card gradient endpoints (top-left to bottom-right)
    pub card_start: Color32,
    pub card_end: Color32,

    pub card_text: Color32,

    /// Selected tab in the date strip
    pub tab_selected: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,
}

impl BoardTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(246, 248, 255),
            column_background: Color32::from_rgb(255, 255, 255),
            column_hover: Color32::from_rgb(219, 234, 254),
            column_border: Color32::from_rgb(220, 220, 228),
            card_start: Color32::from_rgb(79, 70, 229),
            card_end: Color32::from_rgb(147, 51, 234),
            card_text: Color32::WHITE,
            tab_selected: Color32::from_rgb(99, 102, 241),
            text_primary: Color32::from_rgb(55, 65, 81),
            text_secondary: Color32::from_rgb(107, 114, 128),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 24, 32),
            column_background: Color32::from_rgb(36, 36, 46),
            column_hover: Color32::from_rgb(40, 56, 90),
            column_border: Color32::from_rgb(60, 60, 72),
            card_start: Color32::from_rgb(67, 56, 202),
            card_end: Color32::from_rgb(126, 34, 206),
            card_text: Color32::WHITE,
            tab_selected: Color32::from_rgb(99, 102, 241),
            text_primary: Color32::from_rgb(235, 235, 240),
            text_secondary: Color32::from_rgb(160, 160, 175),
        }
    }

    /// Midpoint of the card gradient, used where a flat fill is needed
    pub fn card_fill(&self) -> Color32 {
        lerp(self.card_start, self.card_end, 0.5)
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.column_background;
        ctx.set_visuals(visuals);
    }
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self::light()
    }
}

fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
