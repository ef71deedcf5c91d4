use chrono::NaiveDate;

use crate::utils::date::{add_days, short_label, week_of};

/// How many dates the board shows at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Narrow viewports: one date at a time, navigation steps one day
    Single,
    /// Wide viewports: a Monday-starting week, navigation steps seven days
    Week,
}

impl Density {
    pub fn from_narrow(is_narrow: bool) -> Self {
        if is_narrow {
            Density::Single
        } else {
            Density::Week
        }
    }

    /// Days moved by one advance or retreat
    pub fn step_days(self) -> i64 {
        match self {
            Density::Single => 1,
            Density::Week => 7,
        }
    }
}

/// The anchor date and the set of dates currently rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    anchor: NaiveDate,
    density: Density,
}

impl ViewWindow {
    pub fn new(anchor: NaiveDate, density: Density) -> Self {
        Self { anchor, density }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn set_density(&mut self, density: Density) {
        if self.density != density {
            log::debug!("View density {:?} -> {:?}", self.density, density);
            self.density = density;
        }
    }

    pub fn advance(&mut self) {
        self.step(self.density.step_days());
    }

    pub fn retreat(&mut self) {
        self.step(-self.density.step_days());
    }

    /// Stays put at the ends of the calendar
    fn step(&mut self, days: i64) {
        match add_days(self.anchor, days) {
            Some(anchor) => self.anchor = anchor,
            None => log::debug!("Cannot move {} days past {}", days, self.anchor),
        }
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.anchor = date;
    }

    /// Dates to render, ascending and contiguous.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        match self.density {
            Density::Single => vec![self.anchor],
            Density::Week => week_of(self.anchor),
        }
    }

    /// The Monday-starting week around the anchor, regardless of density.
    /// Drives the header range and the single-date tab strip.
    pub fn week_dates(&self) -> Vec<NaiveDate> {
        week_of(self.anchor)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.visible_dates().contains(&date)
    }

    /// Header text such as "Mar 11 - Mar 17"
    pub fn range_label(&self) -> String {
        let week = self.week_dates();
        match (week.first(), week.last()) {
            (Some(first), Some(last)) => format!("{} - {}", short_label(*first), short_label(*last)),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(Density::Single, 1 ; "single date")]
    #[test_case(Density::Week, 7 ; "week")]
    fn test_visible_len(density: Density, expected: usize) {
        let window = ViewWindow::new(ymd(2024, 3, 13), density);
        assert_eq!(window.visible_dates().len(), expected);
    }

    #[test]
    fn test_week_starts_monday() {
        let window = ViewWindow::new(ymd(2024, 3, 17), Density::Week);
        let dates = window.visible_dates();
        assert_eq!(dates[0], ymd(2024, 3, 11));
        assert_eq!(dates[0].weekday(), Weekday::Mon);
        assert_eq!(dates[6], ymd(2024, 3, 17));
    }

    #[test_case(Density::Single, ymd(2024, 3, 12) ; "single steps a day")]
    #[test_case(Density::Week, ymd(2024, 3, 18) ; "week steps seven days")]
    fn test_advance_step(density: Density, expected: NaiveDate) {
        let mut window = ViewWindow::new(ymd(2024, 3, 11), density);
        window.advance();
        assert_eq!(window.anchor(), expected);
        window.retreat();
        assert_eq!(window.anchor(), ymd(2024, 3, 11));
    }

    #[test]
    fn test_jump_to() {
        let mut window = ViewWindow::new(ymd(2024, 3, 11), Density::Single);
        window.jump_to(ymd(2024, 3, 14));
        assert_eq!(window.visible_dates(), vec![ymd(2024, 3, 14)]);
        assert!(window.contains(ymd(2024, 3, 14)));
        assert!(!window.contains(ymd(2024, 3, 11)));
    }

    #[test_case(Density::Single ; "single date")]
    #[test_case(Density::Week ; "week")]
    fn test_calendar_limits_hold_the_anchor(density: Density) {
        let mut window = ViewWindow::new(NaiveDate::MAX, density);
        window.advance();
        assert_eq!(window.anchor(), NaiveDate::MAX);
        assert!(window.contains(NaiveDate::MAX));
        window.retreat();
        assert!(window.anchor() < NaiveDate::MAX);

        let mut window = ViewWindow::new(NaiveDate::MIN, density);
        window.retreat();
        assert_eq!(window.anchor(), NaiveDate::MIN);
        assert_eq!(window.visible_dates()[0], NaiveDate::MIN);
        assert!(!window.range_label().is_empty());
    }

    #[test]
    fn test_range_label_uses_week_even_in_single_mode() {
        let window = ViewWindow::new(ymd(2024, 3, 13), Density::Single);
        assert_eq!(window.range_label(), "Mar 11 - Mar 17");
    }
}
