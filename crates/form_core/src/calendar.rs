//! Model behind the appointment date picker: month grid, selectability and
//! display formatting. Rendering lives in the GUI.

use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Days before `today` can never be picked.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// One calendar month, anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first
            .iter_days()
            .take_while(move |day| day.month() == self.first.month())
    }

    /// Sunday-first rows; cells outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let leading = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = std::iter::repeat(None).take(leading).collect();
        cells.extend(self.days().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row.copy_from_slice(chunk);
                row
            })
            .collect()
    }
}

/// Open/closed overlay state plus the month currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    open: bool,
    view: MonthView,
}

impl DatePicker {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            open: false,
            view: MonthView::containing(today),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn open(&mut self, selected: Option<NaiveDate>, today: NaiveDate) {
        self.view = MonthView::containing(selected.unwrap_or(today));
        self.open = true;
    }

    pub fn toggle(&mut self, selected: Option<NaiveDate>, today: NaiveDate) {
        if self.open {
            self.dismiss();
        } else {
            self.open(selected, today);
        }
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn show_prev_month(&mut self) {
        self.view = self.view.prev();
    }

    pub fn show_next_month(&mut self) {
        self.view = self.view.next();
    }

    /// Picks `date` and closes the overlay, unless the day is disabled.
    pub fn select(&mut self, date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
        if !is_selectable(date, today) {
            return None;
        }
        self.open = false;
        Some(date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateDisplayFormat {
    /// `2026-10-17`
    Iso,
    /// `2026/10/17`
    #[default]
    Slash,
    /// `10/17/2026`
    Us,
}

impl DateDisplayFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DateDisplayFormat::Iso => "%Y-%m-%d",
            DateDisplayFormat::Slash => "%Y/%m/%d",
            DateDisplayFormat::Us => "%m/%d/%Y",
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

impl FromStr for DateDisplayFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(DateDisplayFormat::Iso),
            "slash" => Ok(DateDisplayFormat::Slash),
            "us" => Ok(DateDisplayFormat::Us),
            other => Err(format!("unknown date format '{other}'")),
        }
    }
}

#[cfg(test)]
#[path = "tests/calendar_tests.rs"]
mod tests;
