//! Billing-period values: start date plus calendar-aware duration.

use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Calendar-aware difference between two instants, component-wise the way
/// civil date arithmetic counts it: months keep their real lengths, so
/// January 1st to February 1st is one month, not 31 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarInterval {
    /// Whole years.
    pub years: u32,
    /// Whole months past the years (0..12).
    pub months: u32,
    /// Days past the months.
    pub days: u32,
    /// Hours past the days (0..24).
    pub hours: u32,
    /// Minutes past the hours (0..60).
    pub minutes: u32,
    /// Seconds past the minutes (0..60).
    pub seconds: u32,
}

impl CalendarInterval {
    /// Measure the interval between two instants. Endpoint order does not
    /// matter; a reversed range measures the same span.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let (earlier, later, inverted) = if end < start {
            (end, start, true)
        } else {
            (start, end, false)
        };

        let mut seconds = i64::from(later.second()) - i64::from(earlier.second());
        let mut minutes = i64::from(later.minute()) - i64::from(earlier.minute());
        let mut hours = i64::from(later.hour()) - i64::from(earlier.hour());
        let mut days = i64::from(later.day()) - i64::from(earlier.day());
        let mut months = i64::from(later.month()) - i64::from(earlier.month());
        let mut years = i64::from(later.year()) - i64::from(earlier.year());

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            hours += 24;
            days -= 1;
        }
        if months < 0 {
            months += 12;
            years -= 1;
        }

        // A negative day component borrows real month lengths, one month
        // per borrow, walking backwards from the later date (forwards from
        // the earlier one for reversed input).
        if days < 0 {
            if inverted {
                let mut year = i64::from(earlier.year());
                let mut month = i64::from(earlier.month());
                while days < 0 {
                    days += days_in_month(year, month);
                    month += 1;
                    if month > 12 {
                        month -= 12;
                        year += 1;
                    }
                    months -= 1;
                }
            } else {
                let mut year = i64::from(later.year());
                let mut month = i64::from(later.month());
                while days < 0 {
                    month -= 1;
                    if month < 1 {
                        month += 12;
                        year -= 1;
                    }
                    days += days_in_month(year, month);
                    months -= 1;
                }
            }
            if months < 0 {
                months += 12;
                years -= 1;
            }
        }

        Self {
            years: years as u32,
            months: months as u32,
            days: days as u32,
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }

    /// ISO 8601 duration designator with zero components omitted; the
    /// zero interval renders as `PT0S`.
    pub fn to_iso8601(&self) -> String {
        let mut designator = String::from("P");
        if self.years > 0 {
            designator.push_str(&format!("{}Y", self.years));
        }
        if self.months > 0 {
            designator.push_str(&format!("{}M", self.months));
        }
        if self.days > 0 {
            designator.push_str(&format!("{}D", self.days));
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            designator.push('T');
            if self.hours > 0 {
                designator.push_str(&format!("{}H", self.hours));
            }
            if self.minutes > 0 {
                designator.push_str(&format!("{}M", self.minutes));
            }
            if self.seconds > 0 {
                designator.push_str(&format!("{}S", self.seconds));
            }
        }
        if designator == "P" {
            return "PT0S".to_string();
        }
        designator
    }
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// schema.org `billingPeriod` value: the period start date and the
/// duration to the period end, separated by a slash.
pub fn billing_period(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{}/{}",
        start.format("%Y-%m-%d"),
        CalendarInterval::between(start, end)
    )
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: i64) -> i64 {
    const DAYS: [i64; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[month as usize]
    }
}
