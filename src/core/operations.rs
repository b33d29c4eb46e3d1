//! Name-addressable catalog of the calculators.
//!
//! Rows in external case tables and arguments on the command line arrive as
//! strings. `Operation` names a calculator, `Operation::parse_args` turns the
//! raw argument text into a typed `Invocation`, and `Invocation::invoke` calls
//! the calculator and wraps the result in a `Value`.

use crate::core::{calendar, geometry, strings};
use crate::utils::error::CalcError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ValidateTriangle,
    TriangleArea,
    TrianglePerimeter,
    IsRightTriangle,
    IsEquilateral,
    IsIsosceles,
    CircleCircumference,
    CircleArea,
    IsLeapYear,
    DaysInMonth,
    CalculateAge,
    IsWeekend,
    DayOfWeek,
    Reverse,
    StringLength,
    ToUpperCase,
}

/// Shape of an operation's successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Unit,
    Real,
    Flag,
    Count,
    Text,
}

/// Result of a dynamic invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unit,
    Real(f64),
    Flag(bool),
    Count(u32),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("ok"),
            Value::Real(v) => write!(f, "{}", v),
            Value::Flag(v) => write!(f, "{}", v),
            Value::Count(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// An operation with typed arguments. Built by `Operation::parse_args`.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    ValidateTriangle(f64, f64, f64),
    TriangleArea(f64, f64, f64),
    TrianglePerimeter(f64, f64, f64),
    IsRightTriangle(f64, f64, f64),
    IsEquilateral(f64, f64, f64),
    IsIsosceles(f64, f64, f64),
    CircleCircumference(f64),
    CircleArea(f64),
    IsLeapYear(i32),
    DaysInMonth(i32, i32),
    CalculateAge(NaiveDate, NaiveDate),
    IsWeekend(NaiveDate),
    DayOfWeek(NaiveDate),
    Reverse(String),
    StringLength(String),
    ToUpperCase(String),
}

impl Operation {
    pub const ALL: [Operation; 16] = [
        Operation::ValidateTriangle,
        Operation::TriangleArea,
        Operation::TrianglePerimeter,
        Operation::IsRightTriangle,
        Operation::IsEquilateral,
        Operation::IsIsosceles,
        Operation::CircleCircumference,
        Operation::CircleArea,
        Operation::IsLeapYear,
        Operation::DaysInMonth,
        Operation::CalculateAge,
        Operation::IsWeekend,
        Operation::DayOfWeek,
        Operation::Reverse,
        Operation::StringLength,
        Operation::ToUpperCase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::ValidateTriangle => "validate_triangle",
            Operation::TriangleArea => "triangle_area",
            Operation::TrianglePerimeter => "triangle_perimeter",
            Operation::IsRightTriangle => "is_right_triangle",
            Operation::IsEquilateral => "is_equilateral",
            Operation::IsIsosceles => "is_isosceles",
            Operation::CircleCircumference => "circle_circumference",
            Operation::CircleArea => "circle_area",
            Operation::IsLeapYear => "is_leap_year",
            Operation::DaysInMonth => "days_in_month",
            Operation::CalculateAge => "calculate_age",
            Operation::IsWeekend => "is_weekend",
            Operation::DayOfWeek => "day_of_week",
            Operation::Reverse => "reverse",
            Operation::StringLength => "string_length",
            Operation::ToUpperCase => "to_upper_case",
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Operation::ValidateTriangle => ValueType::Unit,
            Operation::TriangleArea
            | Operation::TrianglePerimeter
            | Operation::CircleCircumference
            | Operation::CircleArea => ValueType::Real,
            Operation::IsRightTriangle
            | Operation::IsEquilateral
            | Operation::IsIsosceles
            | Operation::IsLeapYear
            | Operation::IsWeekend => ValueType::Flag,
            Operation::DaysInMonth | Operation::CalculateAge | Operation::StringLength => {
                ValueType::Count
            }
            Operation::DayOfWeek | Operation::Reverse | Operation::ToUpperCase => ValueType::Text,
        }
    }

    /// Human-readable argument list, used in error messages and `--help`.
    pub fn signature(&self) -> &'static str {
        match self {
            Operation::ValidateTriangle
            | Operation::TriangleArea
            | Operation::TrianglePerimeter
            | Operation::IsRightTriangle
            | Operation::IsEquilateral
            | Operation::IsIsosceles => "<a> <b> <c>",
            Operation::CircleCircumference | Operation::CircleArea => "<radius>",
            Operation::IsLeapYear => "<year>",
            Operation::DaysInMonth => "<year> <month>",
            Operation::CalculateAge => "<birth YYYY-MM-DD> <today YYYY-MM-DD>",
            Operation::IsWeekend | Operation::DayOfWeek => "<date YYYY-MM-DD>",
            Operation::Reverse | Operation::StringLength | Operation::ToUpperCase => "<text>",
        }
    }

    /// Text operations take the whole argument string, trimmed like expected
    /// values are; everything else splits on whitespace and must match the
    /// signature's arity.
    pub fn parse_args(&self, raw: &str) -> Result<Invocation, String> {
        let parts: Vec<&str> = raw.split_whitespace().collect();
        let sides = |parts: &[&str]| -> Result<(f64, f64, f64), String> {
            let [a, b, c] = self.exact::<3>(parts)?;
            Ok((parse_real(a)?, parse_real(b)?, parse_real(c)?))
        };
        let radius = |parts: &[&str]| -> Result<f64, String> {
            let [r] = self.exact::<1>(parts)?;
            parse_real(r)
        };
        let date = |parts: &[&str]| -> Result<NaiveDate, String> {
            let [d] = self.exact::<1>(parts)?;
            parse_date(d)
        };

        let invocation = match self {
            Operation::ValidateTriangle => {
                let (a, b, c) = sides(&parts)?;
                Invocation::ValidateTriangle(a, b, c)
            }
            Operation::TriangleArea => {
                let (a, b, c) = sides(&parts)?;
                Invocation::TriangleArea(a, b, c)
            }
            Operation::TrianglePerimeter => {
                let (a, b, c) = sides(&parts)?;
                Invocation::TrianglePerimeter(a, b, c)
            }
            Operation::IsRightTriangle => {
                let (a, b, c) = sides(&parts)?;
                Invocation::IsRightTriangle(a, b, c)
            }
            Operation::IsEquilateral => {
                let (a, b, c) = sides(&parts)?;
                Invocation::IsEquilateral(a, b, c)
            }
            Operation::IsIsosceles => {
                let (a, b, c) = sides(&parts)?;
                Invocation::IsIsosceles(a, b, c)
            }
            Operation::CircleCircumference => Invocation::CircleCircumference(radius(&parts)?),
            Operation::CircleArea => Invocation::CircleArea(radius(&parts)?),
            Operation::IsLeapYear => {
                let [year] = self.exact::<1>(&parts)?;
                Invocation::IsLeapYear(parse_int(year)?)
            }
            Operation::DaysInMonth => {
                let [year, month] = self.exact::<2>(&parts)?;
                Invocation::DaysInMonth(parse_int(year)?, parse_int(month)?)
            }
            Operation::CalculateAge => {
                let [birth, today] = self.exact::<2>(&parts)?;
                Invocation::CalculateAge(parse_date(birth)?, parse_date(today)?)
            }
            Operation::IsWeekend => Invocation::IsWeekend(date(&parts)?),
            Operation::DayOfWeek => Invocation::DayOfWeek(date(&parts)?),
            Operation::Reverse => Invocation::Reverse(raw.trim().to_string()),
            Operation::StringLength => Invocation::StringLength(raw.trim().to_string()),
            Operation::ToUpperCase => Invocation::ToUpperCase(raw.trim().to_string()),
        };

        Ok(invocation)
    }

    fn exact<'a, const N: usize>(&self, parts: &[&'a str]) -> Result<[&'a str; N], String> {
        <[&str; N]>::try_from(parts).map_err(|_| {
            format!(
                "{} expects {} argument(s) {}, got {}",
                self.name(),
                N,
                self.signature(),
                parts.len()
            )
        })
    }

    /// Parses an expected-value literal for this operation's result type.
    pub fn parse_value(&self, raw: &str) -> Result<Value, String> {
        let raw = raw.trim();
        match self.value_type() {
            ValueType::Unit => match raw {
                "" | "ok" => Ok(Value::Unit),
                other => Err(format!("expected 'ok', got '{}'", other)),
            },
            ValueType::Real => parse_real(raw).map(Value::Real),
            ValueType::Flag => raw
                .parse::<bool>()
                .map(Value::Flag)
                .map_err(|_| format!("expected true/false, got '{}'", raw)),
            ValueType::Count => raw
                .parse::<u32>()
                .map(Value::Count)
                .map_err(|_| format!("expected a non-negative integer, got '{}'", raw)),
            ValueType::Text => Ok(Value::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| format!("unknown operation: {}", s))
    }
}

impl Invocation {
    pub fn operation(&self) -> Operation {
        match self {
            Invocation::ValidateTriangle(..) => Operation::ValidateTriangle,
            Invocation::TriangleArea(..) => Operation::TriangleArea,
            Invocation::TrianglePerimeter(..) => Operation::TrianglePerimeter,
            Invocation::IsRightTriangle(..) => Operation::IsRightTriangle,
            Invocation::IsEquilateral(..) => Operation::IsEquilateral,
            Invocation::IsIsosceles(..) => Operation::IsIsosceles,
            Invocation::CircleCircumference(_) => Operation::CircleCircumference,
            Invocation::CircleArea(_) => Operation::CircleArea,
            Invocation::IsLeapYear(_) => Operation::IsLeapYear,
            Invocation::DaysInMonth(..) => Operation::DaysInMonth,
            Invocation::CalculateAge(..) => Operation::CalculateAge,
            Invocation::IsWeekend(_) => Operation::IsWeekend,
            Invocation::DayOfWeek(_) => Operation::DayOfWeek,
            Invocation::Reverse(_) => Operation::Reverse,
            Invocation::StringLength(_) => Operation::StringLength,
            Invocation::ToUpperCase(_) => Operation::ToUpperCase,
        }
    }

    pub fn invoke(&self) -> Result<Value, CalcError> {
        let value = match *self {
            Invocation::ValidateTriangle(a, b, c) => {
                geometry::validate_triangle(a, b, c)?;
                Value::Unit
            }
            Invocation::TriangleArea(a, b, c) => Value::Real(geometry::triangle_area(a, b, c)?),
            Invocation::TrianglePerimeter(a, b, c) => {
                Value::Real(geometry::triangle_perimeter(a, b, c)?)
            }
            Invocation::IsRightTriangle(a, b, c) => {
                Value::Flag(geometry::is_right_triangle(a, b, c)?)
            }
            Invocation::IsEquilateral(a, b, c) => Value::Flag(geometry::is_equilateral(a, b, c)),
            Invocation::IsIsosceles(a, b, c) => Value::Flag(geometry::is_isosceles(a, b, c)),
            Invocation::CircleCircumference(r) => Value::Real(geometry::circle_circumference(r)?),
            Invocation::CircleArea(r) => Value::Real(geometry::circle_area(r)?),
            Invocation::IsLeapYear(year) => Value::Flag(calendar::is_leap_year(year)?),
            Invocation::DaysInMonth(year, month) => {
                Value::Count(u32::from(calendar::days_in_month(year, month)?))
            }
            Invocation::CalculateAge(birth, today) => {
                Value::Count(calendar::calculate_age(birth, today)?)
            }
            Invocation::IsWeekend(date) => Value::Flag(calendar::is_weekend(date)),
            Invocation::DayOfWeek(date) => {
                Value::Text(calendar::day_of_week_name(date).to_string())
            }
            Invocation::Reverse(ref text) => Value::Text(strings::reverse(text)),
            Invocation::StringLength(ref text) => {
                Value::Count(strings::char_length(Some(text)) as u32)
            }
            Invocation::ToUpperCase(ref text) => {
                Value::Text(strings::to_upper_case(Some(text)).unwrap_or_default())
            }
        };
        Ok(value)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::ValidateTriangle(a, b, c)
            | Invocation::TriangleArea(a, b, c)
            | Invocation::TrianglePerimeter(a, b, c)
            | Invocation::IsRightTriangle(a, b, c)
            | Invocation::IsEquilateral(a, b, c)
            | Invocation::IsIsosceles(a, b, c) => {
                write!(f, "{}({}, {}, {})", self.operation(), a, b, c)
            }
            Invocation::CircleCircumference(r) | Invocation::CircleArea(r) => {
                write!(f, "{}({})", self.operation(), r)
            }
            Invocation::IsLeapYear(year) => write!(f, "{}({})", self.operation(), year),
            Invocation::DaysInMonth(year, month) => {
                write!(f, "{}({}, {})", self.operation(), year, month)
            }
            Invocation::CalculateAge(birth, today) => {
                write!(f, "{}({}, {})", self.operation(), birth, today)
            }
            Invocation::IsWeekend(date) | Invocation::DayOfWeek(date) => {
                write!(f, "{}({})", self.operation(), date)
            }
            Invocation::Reverse(text)
            | Invocation::StringLength(text)
            | Invocation::ToUpperCase(text) => write!(f, "{}({:?})", self.operation(), text),
        }
    }
}

fn parse_real(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", raw))
}

fn parse_int(raw: &str) -> Result<i32, String> {
    raw.parse::<i32>()
        .map_err(|_| format!("'{}' is not an integer", raw))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date: {}", raw, e))
}
