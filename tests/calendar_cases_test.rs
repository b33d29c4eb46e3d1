use chrono::{Datelike, NaiveDate};
use kata_calc::core::calendar::{self, day_of_week_name, is_weekend};
use kata_calc::core::cases::catalog;
use kata_calc::utils::error::CalendarError;
use kata_calc::{CaseRunner, ErrorKind, HasErrorKind, InlineCases, TestCase};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_leap_year_named_source() {
    let report = CaseRunner::default().run(&catalog::LEAP_YEAR, |y: &i32| calendar::is_leap_year(*y));
    assert!(report.is_success(), "{}", report);
    assert_eq!(report.total, 13);
}

#[test]
fn test_days_in_month_named_source() {
    let report = CaseRunner::default().run(&catalog::DAYS_IN_MONTH, |&(y, m): &(i32, i32)| {
        calendar::days_in_month(y, m)
    });
    assert!(report.is_success(), "{}", report);
}

#[test]
fn test_month_13_fails_for_every_year() {
    for year in [1, 4, 100, 1900, 2000, 2023, 2024, 9999] {
        let err = calendar::days_in_month(year, 13).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MonthOutOfRange, "year {year}");
    }
}

#[test]
fn test_every_month_has_between_28_and_31_days() {
    for year in [1900, 2000, 2023, 2024] {
        let total: u32 = (1..=12)
            .map(|m| u32::from(calendar::days_in_month(year, m).unwrap()))
            .sum();
        let expected = if calendar::is_leap_year(year).unwrap() { 366 } else { 365 };
        assert_eq!(total, expected, "year {year}");
    }
}

#[test]
fn test_days_in_month_agrees_with_chrono() {
    for year in [1, 1600, 1900, 2000, 2023, 2024, 9999] {
        for month in 1..=12u32 {
            let first = date(year, month, 1);
            let next = if month == 12 {
                NaiveDate::from_ymd_opt(year + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(year, month + 1, 1)
            }
            .unwrap();
            let chrono_days = (next - first).num_days();
            assert_eq!(
                i64::from(calendar::days_in_month(year, month as i32).unwrap()),
                chrono_days,
                "{year}-{month}"
            );
        }
    }
}

#[test]
fn test_calculate_age_inline() {
    let today = date(2024, 6, 15);
    let cases = InlineCases::new(
        "calculate_age",
        vec![
            TestCase::ok(today, 0),
            TestCase::ok(date(2023, 6, 15), 1),
            TestCase::ok(date(2023, 6, 16), 0),
            TestCase::ok(date(2000, 1, 1), 24),
            TestCase::ok(date(2000, 12, 31), 23),
            TestCase::err(date(2024, 6, 16), ErrorKind::FutureBirthDate),
            TestCase::err(date(2030, 1, 1), ErrorKind::FutureBirthDate),
        ],
    );

    let report = CaseRunner::default().run(&cases, |birth: &NaiveDate| -> Result<u32, CalendarError> {
        calendar::calculate_age(*birth, today)
    });
    assert!(report.is_success(), "{}", report);
}

#[test]
fn test_age_one_year_before_today_for_many_todays() {
    for today in [date(2023, 1, 1), date(2024, 2, 28), date(2024, 12, 31), date(2025, 7, 4)] {
        let birth = date(today.year() - 1, today.month(), today.day());
        assert_eq!(calendar::calculate_age(birth, today).unwrap(), 1);
        assert_eq!(calendar::calculate_age(today, today).unwrap(), 0);
    }
}

#[test]
fn test_weekend_inline() {
    let cases = InlineCases::new(
        "weekend",
        vec![
            TestCase::ok(date(2023, 9, 2), true),
            TestCase::ok(date(2023, 9, 3), true),
            TestCase::ok(date(2023, 12, 30), true),
            TestCase::ok(date(2023, 12, 31), true),
            TestCase::ok(date(2023, 9, 4), false),
            TestCase::ok(date(2023, 9, 8), false),
        ],
    );
    let report = CaseRunner::default().run(&cases, |d: &NaiveDate| {
        Ok::<_, CalendarError>(is_weekend(*d))
    });
    assert!(report.is_success(), "{}", report);
}

#[test]
fn test_day_of_week_names() {
    let names: Vec<&str> = (4..=10).map(|d| day_of_week_name(date(2023, 9, d))).collect();
    assert_eq!(
        names,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
}
