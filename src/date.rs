use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Render one calendar component as a URL path segment.
///
/// Single-digit values get one leading zero; everything else is the natural
/// decimal form. Years are four digits in practice, so the padding rule never
/// fires for them, but they go through here anyway so all three segments are
/// built the same way.
pub fn format_segment(raw: i64) -> String {
    if raw < 10 {
        format!("0{}", raw)
    } else {
        raw.to_string()
    }
}

/// A calendar date identifying one day of the scoreboard feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GameDate {
    /// Today's date from the host system clock, in local time.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        GameDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Path tail of the feed URL for this date, e.g.
    /// `year_2024/month_03/day_07/miniscoreboard.json`.
    pub fn feed_path(&self) -> String {
        format!(
            "year_{}/month_{}/day_{}/miniscoreboard.json",
            format_segment(self.year as i64),
            format_segment(self.month as i64),
            format_segment(self.day as i64),
        )
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
