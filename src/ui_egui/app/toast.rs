//! Short-lived confirmations such as "Moved 'Standup' to Tue, Mar 12".

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            created_at: now,
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Fades out over the last half second
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed >= self.duration {
            return 0.0;
        }
        let remaining = self.duration - elapsed;
        if remaining < FADE {
            (remaining.as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, Instant::now()));
    }

    /// Render active toasts stacked upward from the bottom-right corner
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.is_expired(now));
        if self.toasts.is_empty() {
            return;
        }

        // Keep animating the fade
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 300.0;
        let toast_height = 40.0;
        let margin = 10.0;
        let spacing = 5.0;

        let (bg, fg) = if is_dark_theme {
            (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120))
        } else {
            (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50))
        };

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity(now);
            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(("board_toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg.gamma_multiply(0.9 * opacity))
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new("✓").color(fg.gamma_multiply(opacity)).strong());
                                ui.label(RichText::new(&toast.message).color(fg.gamma_multiply(opacity)));
                            });
                        });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_fades_then_expires() {
        let start = Instant::now();
        let toast = Toast::new("Moved", start);

        assert_eq!(toast.opacity(start), 1.0);
        assert!(!toast.is_expired(start + Duration::from_millis(2000)));

        let fading = toast.opacity(start + Duration::from_millis(2750));
        assert!(fading > 0.0 && fading < 1.0);

        assert!(toast.is_expired(start + Duration::from_secs(3)));
        assert_eq!(toast.opacity(start + Duration::from_secs(4)), 0.0);
    }
}
