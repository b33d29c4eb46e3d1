use crate::core::cases::{CaseProvider, CaseTable, Expected};
use crate::core::operations::{Invocation, Value};
use crate::utils::error::HasErrorKind;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Comparison of an actual result against the expected one.
pub trait Outcome: fmt::Debug {
    fn matches(&self, expected: &Self, tolerance: f64) -> bool;
}

impl Outcome for f64 {
    fn matches(&self, expected: &Self, tolerance: f64) -> bool {
        self == expected || (self - expected).abs() <= tolerance
    }
}

macro_rules! exact_outcome {
    ($($ty:ty),*) => {
        $(
            impl Outcome for $ty {
                fn matches(&self, expected: &Self, _tolerance: f64) -> bool {
                    self == expected
                }
            }
        )*
    };
}

exact_outcome!(bool, u8, u32, usize, String, ());

impl Outcome for Value {
    fn matches(&self, expected: &Self, tolerance: f64) -> bool {
        match (self, expected) {
            (Value::Real(actual), Value::Real(expected)) => actual.matches(expected, tolerance),
            (actual, expected) => actual == expected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunnerSettings {
    pub tolerance: f64,
    pub fail_fast: bool,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            fail_fast: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseFailure {
    pub index: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub provider: String,
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
    pub stopped_early: bool,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && !self.stopped_early
    }

    pub fn executed(&self) -> usize {
        self.passed + self.failures.len()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} passed",
            self.provider, self.passed, self.total
        )?;
        if self.stopped_early {
            write!(f, " (stopped after first failure)")?;
        }
        for failure in &self.failures {
            write!(
                f,
                "\n  case #{} {}: expected {}, got {}",
                failure.index, failure.input, failure.expected, failure.actual
            )?;
        }
        Ok(())
    }
}

/// Drives a provider's cases through a calculator and collects the results.
#[derive(Debug, Clone, Default)]
pub struct CaseRunner {
    settings: RunnerSettings,
}

impl CaseRunner {
    pub fn new(settings: RunnerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    /// A case passes when the value matches (reals within tolerance), or when
    /// the calculator fails with exactly the expected error kind.
    pub fn run<P, F, E>(&self, provider: &P, calculate: F) -> RunReport
    where
        P: CaseProvider + ?Sized,
        P::Input: fmt::Debug,
        P::Output: Outcome,
        F: Fn(&P::Input) -> Result<P::Output, E>,
        E: HasErrorKind + fmt::Display,
    {
        let cases = provider.cases();
        let mut report = RunReport {
            provider: provider.name().to_string(),
            total: cases.len(),
            passed: 0,
            failures: Vec::new(),
            stopped_early: false,
        };

        tracing::info!("Running {} case(s) from '{}'", report.total, report.provider);

        for (index, case) in cases.iter().enumerate() {
            let actual = calculate(&case.input);
            let passed = match (&case.expected, &actual) {
                (Expected::Value(expected), Ok(value)) => {
                    value.matches(expected, self.settings.tolerance)
                }
                (Expected::Error(kind), Err(err)) => err.kind() == *kind,
                _ => false,
            };

            if passed {
                tracing::debug!(index, input = ?case.input, "case passed");
                report.passed += 1;
                continue;
            }

            let failure = CaseFailure {
                index,
                input: format!("{:?}", case.input),
                expected: match &case.expected {
                    Expected::Value(value) => format!("{:?}", value),
                    Expected::Error(kind) => format!("error {}", kind),
                },
                actual: match &actual {
                    Ok(value) => format!("{:?}", value),
                    Err(err) => format!("error {} ({})", err.kind(), err),
                },
            };
            tracing::warn!(
                "Case #{} of '{}' failed: expected {}, got {}",
                index,
                report.provider,
                failure.expected,
                failure.actual
            );
            report.failures.push(failure);

            if self.settings.fail_fast {
                report.stopped_early = index + 1 < report.total;
                break;
            }
        }

        if report.is_success() {
            tracing::info!("✅ {}", report);
        } else {
            tracing::error!("❌ {}", report);
        }

        report
    }

    pub fn run_table(&self, table: &CaseTable) -> RunReport {
        self.run(table, Invocation::invoke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cases::{InlineCases, TestCase};
    use crate::core::geometry;
    use crate::utils::error::{ErrorKind, GeometryError};

    fn area(sides: &(f64, f64, f64)) -> Result<f64, GeometryError> {
        geometry::triangle_area(sides.0, sides.1, sides.2)
    }

    #[test]
    fn test_tolerance_is_absolute() {
        assert!(1.0_f64.matches(&(1.0 + 5e-11), DEFAULT_TOLERANCE));
        assert!(!1.0_f64.matches(&(1.0 + 5e-10), DEFAULT_TOLERANCE));
        assert!(Value::Real(6.0).matches(&Value::Real(6.0 + 1e-12), DEFAULT_TOLERANCE));
        assert!(!Value::Real(6.0).matches(&Value::Count(6), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_report_counts_failures() {
        let provider = InlineCases::new(
            "mixed",
            vec![
                TestCase::ok((3.0, 4.0, 5.0), 6.0),
                // wrong on purpose
                TestCase::ok((3.0, 4.0, 5.0), 7.0),
                TestCase::err((1.0, 1.0, 2.0), ErrorKind::InvalidTriangle),
                // wrong error kind
                TestCase::err((1.0, 1.0, 3.0), ErrorKind::DegenerateTriangle),
            ],
        );

        let report = CaseRunner::default().run(&provider, area);
        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].index, 1);
        assert!(report.failures[1].actual.contains("InvalidTriangle"));
        assert!(!report.is_success());
        assert!(report.to_string().contains("mixed: 2/4 passed"));
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let provider = InlineCases::new(
            "fail_fast",
            vec![
                TestCase::ok((3.0, 4.0, 5.0), 0.0),
                TestCase::ok((3.0, 4.0, 5.0), 6.0),
            ],
        );
        let runner = CaseRunner::new(RunnerSettings {
            fail_fast: true,
            ..RunnerSettings::default()
        });

        let report = runner.run(&provider, area);
        assert_eq!(report.executed(), 1);
        assert!(report.stopped_early);
    }

    #[test]
    fn test_expected_value_but_got_error() {
        let provider = InlineCases::new("unexpected", vec![TestCase::ok((1.0, 2.0, 3.0), 0.0)]);
        let report = CaseRunner::default().run(&provider, area);
        assert_eq!(report.passed, 0);
        assert!(report.failures[0].actual.starts_with("error InvalidTriangle"));
    }
}
