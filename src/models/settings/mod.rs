// Settings module
// Board tuning loaded from board.toml

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Distance from a viewport edge (px) that counts as "near the edge"
    pub edge_threshold_px: f32,
    /// How long a drag must rest near an edge before the first navigation
    pub hold_delay_ms: u64,
    /// Interval between repeated navigations while still resting at the edge
    pub repeat_interval_ms: u64,
    /// Minimum horizontal travel (px) for a touch swipe to navigate
    pub swipe_threshold_px: f32,
    /// Viewports narrower than this show a single date
    pub narrow_breakpoint_px: f32,
    pub initial_date: NaiveDate,
    /// Optional JSON snapshot to seed the board with
    pub seed_path: Option<PathBuf>,
}

impl BoardSettings {
    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }

    pub fn is_narrow(&self, viewport_width: f32) -> bool {
        viewport_width < self.narrow_breakpoint_px
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.edge_threshold_px.is_nan() || self.edge_threshold_px <= 0.0 {
            return Err("edge_threshold_px must be positive".to_string());
        }
        if self.swipe_threshold_px.is_nan() || self.swipe_threshold_px <= 0.0 {
            return Err("swipe_threshold_px must be positive".to_string());
        }
        if self.repeat_interval_ms == 0 {
            return Err("repeat_interval_ms must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            edge_threshold_px: 50.0,
            hold_delay_ms: 1000,
            repeat_interval_ms: 1000,
            swipe_threshold_px: 50.0,
            narrow_breakpoint_px: 768.0,
            initial_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap_or(NaiveDate::MIN),
            seed_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = BoardSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.hold_delay(), Duration::from_millis(1000));
        assert_eq!(settings.initial_date.to_string(), "2024-03-11");
    }

    #[test]
    fn test_zero_repeat_interval_is_rejected() {
        let settings = BoardSettings {
            repeat_interval_ms: 0,
            ..BoardSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_narrow_breakpoint() {
        let settings = BoardSettings::default();
        assert!(settings.is_narrow(400.0));
        assert!(!settings.is_narrow(768.0));
    }
}
