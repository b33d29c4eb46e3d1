use crate::domain::model::CalendarDate;
use crate::utils::error::CalendarError;
use chrono::{Datelike, NaiveDate, Weekday};

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn check_year(year: i32) -> Result<(), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(())
}

/// Divisible by 4 and not by 100, or divisible by 400.
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    check_year(year)?;
    Ok((year % 4 == 0 && year % 100 != 0) || year % 400 == 0)
}

/// The year is checked before the month.
pub fn days_in_month(year: i32, month: i32) -> Result<u8, CalendarError> {
    let leap = is_leap_year(year)?;

    if !(1..=12).contains(&month) {
        return Err(CalendarError::MonthOutOfRange { month });
    }

    if month == 2 && leap {
        return Ok(29);
    }

    Ok(DAYS_IN_MONTH[(month - 1) as usize])
}

impl CalendarDate {
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        let max = days_in_month(year, month)?;
        if day < 1 || day > i32::from(max) {
            return Err(CalendarError::DayOutOfRange {
                year,
                month,
                day,
                max,
            });
        }

        // Every (year, month, day) that passed the checks above is a real date.
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .map(CalendarDate)
            .ok_or(CalendarError::DayOutOfRange {
                year,
                month,
                day,
                max,
            })
    }

    pub fn from_naive(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

/// Whole years between `birth` and `today`. The year count drops by one until
/// the birthday (month/day) has come round; a Feb 29 birthday counts as reached
/// on Mar 1 in common years.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> Result<u32, CalendarError> {
    if birth > today {
        return Err(CalendarError::FutureBirthDate { birth, today });
    }

    let mut age = today.year() - birth.year();
    if (birth.month(), birth.day()) > (today.month(), today.day()) {
        age -= 1;
    }

    // birth <= today keeps this non-negative.
    Ok(age.max(0) as u32)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn day_of_week_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// `today` is injected so callers (and tests) control the clock.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}
