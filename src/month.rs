//! Month keys (`YYYY-MM`) used to filter expenses by calendar month.

use std::{fmt, str::FromStr};

use time::{Date, Month};

use crate::{Error, i18n::translate_text};

/// The number of months offered by the month selector, including the current month.
pub const TRAILING_MONTH_COUNT: usize = 12;

/// A calendar month, written as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    first_day: Date,
}

impl MonthKey {
    /// The month that contains `date`.
    pub fn containing(date: Date) -> Self {
        Self {
            first_day: date.replace_day(1).unwrap_or(date),
        }
    }

    /// The first day of the month, the inclusive lower bound of the month's date range.
    pub fn first_day(&self) -> Date {
        self.first_day
    }

    /// The following month, or `None` past the last representable date.
    ///
    /// Its first day is the exclusive upper bound of this month's date range.
    pub fn next(&self) -> Option<Self> {
        let (year, month) = match self.first_day.month() {
            Month::December => (self.first_day.year() + 1, Month::January),
            month => (self.first_day.year(), month.next()),
        };

        Date::from_calendar_date(year, month, 1)
            .ok()
            .map(|first_day| Self { first_day })
    }

    /// The preceding month, or `None` before the first representable date.
    pub fn previous(&self) -> Option<Self> {
        self.first_day.previous_day().map(Self::containing)
    }

    /// `count` month keys ending with the month containing `today`, newest first.
    pub fn trailing(today: Date, count: usize) -> Vec<Self> {
        std::iter::successors(Some(Self::containing(today)), MonthKey::previous)
            .take(count)
            .collect()
    }

    /// A human readable label for the month selector, e.g. "Aug 2025" or "2025年8月".
    ///
    /// The layout comes from the `MONTH_OPTION_FORMAT` translation of `locale`.
    pub fn label(&self, locale: &str) -> String {
        let month = self.first_day.month();
        let month_name = month.to_string();

        translate_text("MONTH_OPTION_FORMAT", locale)
            .replace("{year}", &self.first_day.year().to_string())
            .replace("{month_abbr}", &month_name[..3])
            .replace("{month}", &(month as u8).to_string())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}",
            self.first_day.year(),
            self.first_day.month() as u8
        )
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonthKey(text.to_owned());

        let (year, month) = text.split_once('-').ok_or_else(invalid)?;

        let is_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|byte| byte.is_ascii_digit())
        };

        if !is_digits(year, 4) || !is_digits(month, 2) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Date::from_calendar_date(year, month, 1)
            .map(|first_day| Self { first_day })
            .map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::MonthKey;

    #[test]
    fn parses_and_displays_month_keys() {
        let month: MonthKey = "2025-08".parse().unwrap();

        assert_eq!(month.first_day(), date!(2025 - 08 - 01));
        assert_eq!(month.to_string(), "2025-08");
    }

    #[test]
    fn rejects_malformed_month_keys() {
        for text in ["2025-8", "2025-13", "2025-00", "25-08", "2025/08", "2025-08-01", ""] {
            assert_eq!(
                text.parse::<MonthKey>(),
                Err(Error::InvalidMonthKey(text.to_owned())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn next_month_bounds_the_range() {
        let august: MonthKey = "2025-08".parse().unwrap();
        let december: MonthKey = "2025-12".parse().unwrap();

        assert_eq!(august.next().unwrap().first_day(), date!(2025 - 09 - 01));
        assert_eq!(december.next().unwrap().first_day(), date!(2026 - 01 - 01));
    }

    #[test]
    fn trailing_months_start_with_the_current_month() {
        let months = MonthKey::trailing(date!(2025 - 03 - 15), 12);

        let keys: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(
            keys,
            [
                "2025-03", "2025-02", "2025-01", "2024-12", "2024-11", "2024-10", "2024-09",
                "2024-08", "2024-07", "2024-06", "2024-05", "2024-04"
            ]
        );
    }

    #[test]
    fn labels_follow_the_locale() {
        let month: MonthKey = "2025-08".parse().unwrap();

        assert_eq!(month.label("en-US"), "Aug 2025");
        assert_eq!(month.label("ja-JP"), "2025年8月");
        assert_eq!(month.label("zh-CN"), "2025年8月");
    }

    #[test]
    fn unsupported_locale_uses_the_fallback_layout() {
        let month: MonthKey = "2025-01".parse().unwrap();

        assert_eq!(month.label("fr-FR"), "2025年1月");
    }
}
