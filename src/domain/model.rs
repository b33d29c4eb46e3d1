use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Three side lengths that passed the strict triangle inequality.
///
/// Built through `Triangle::new` (see `core::geometry`); the raw-side functions
/// there cover callers that only have loose numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
}

impl Triangle {
    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

/// A date with year in 1..=9999. Constructed by `CalendarDate::new` in `core::calendar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarDate(pub(crate) NaiveDate);

impl CalendarDate {
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format("%Y-%m-%d").fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub grades: BTreeMap<String, u8>,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grades: BTreeMap::new(),
        }
    }
}

/// Amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(pub i64);

impl Money {
    /// `None` when the amount does not fit in `i64` cents.
    pub fn from_major(units: i64) -> Option<Self> {
        units.checked_mul(100).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub total: Money,
    pub is_paid: bool,
}

impl Order {
    pub fn new(total: Money) -> Self {
        Self {
            total,
            is_paid: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_major(100).unwrap().to_string(), "100.00");
        assert_eq!(Money(7550).to_string(), "75.50");
        assert_eq!(Money(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_from_major_rejects_overflow() {
        assert_eq!(Money::from_major(-3), Some(Money(-300)));
        assert_eq!(Money::from_major(i64::MAX / 100), Some(Money(i64::MAX / 100 * 100)));
        assert_eq!(Money::from_major(i64::MAX / 100 + 1), None);
        assert_eq!(Money::from_major(i64::MIN), None);
    }

    #[test]
    fn test_new_order_is_unpaid() {
        let order = Order::new(Money::from_major(50).unwrap());
        assert!(!order.is_paid);
        assert_eq!(order.total, Money(5000));
    }
}
