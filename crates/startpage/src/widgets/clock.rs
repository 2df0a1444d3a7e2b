//! Clock and greeting text, refreshed by the page's one-second timer.

use chrono::{Datelike, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    /// Font Awesome icon shown next to the greeting.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Morning => "fa-sun",
            Self::Afternoon => "fa-cloud-sun",
            Self::Evening => "fa-moon",
        }
    }
}

/// Everything the clock area shows for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub clock: String,
    pub greeting: String,
    pub icon: &'static str,
    pub date_line: String,
    pub time_line: String,
}

impl ClockFace {
    pub fn at(now: &NaiveDateTime) -> Self {
        let time_of_day = TimeOfDay::from_hour(now.hour());
        Self {
            clock: clock_line(now),
            greeting: format!("Good {}.", time_of_day.label()),
            icon: time_of_day.icon(),
            date_line: date_line(now),
            time_line: time_line(now),
        }
    }
}

/// `"Sunday, January 5, 2025 3:04:05 PM"`
pub fn clock_line(now: &NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y %-I:%M:%S %p").to_string()
}

/// `"3:04:05 PM"`, with midnight shown as 12 AM and noon as 12 PM.
pub fn time_line(now: &NaiveDateTime) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

/// `"Today is Sunday, 5th of January."`
pub fn date_line(now: &NaiveDateTime) -> String {
    format!(
        "Today is {}, {}{} of {}.",
        now.format("%A"),
        now.day(),
        ordinal_suffix(now.day()),
        now.format("%B")
    )
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_clock_line() {
        assert_eq!(
            clock_line(&at(2025, 1, 5, 15, 4, 5)),
            "Sunday, January 5, 2025 3:04:05 PM"
        );
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(time_line(&at(2025, 1, 5, 0, 0, 9)), "12:00:09 AM");
        assert_eq!(time_line(&at(2025, 1, 5, 12, 30, 0)), "12:30:00 PM");
        assert_eq!(time_line(&at(2025, 1, 5, 11, 59, 59)), "11:59:59 AM");
    }

    #[test]
    fn test_date_line_names() {
        assert_eq!(
            date_line(&at(2024, 12, 11, 23, 0, 0)),
            "Today is Wednesday, 11th of December."
        );
        assert_eq!(
            clock_line(&at(2024, 2, 29, 0, 5, 0)),
            "Thursday, February 29, 2024 12:05:00 AM"
        );
    }

    #[test]
    fn test_greeting_bands() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_clock_face() {
        let face = ClockFace::at(&at(2024, 3, 22, 8, 7, 6));
        assert_eq!(face.greeting, "Good Morning.");
        assert_eq!(face.icon, "fa-sun");
        assert_eq!(face.date_line, "Today is Friday, 22nd of March.");
        assert_eq!(face.time_line, "8:07:06 AM");
    }
}
