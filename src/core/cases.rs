//! Case providers: sources of `(inputs, expected)` tuples for the case runner.
//!
//! Four shapes produce the same thing, a fresh `Vec<TestCase<I, O>>` on every
//! call to `CaseProvider::cases`:
//!
//! * `InlineCases`: a literal list declared next to the test that uses it.
//! * `catalog`: named functions returning shared case sets.
//! * generator types (`TriangleAreaComplexCases` and friends): unit structs
//!   whose only behaviour is producing a case set.
//! * `CaseTable`: rows loaded from an external CSV file.
//!
//! Sequences are materialized eagerly and never cached, so enumerating a
//! provider twice yields the same cases both times.

use crate::core::operations::{Invocation, Operation, Value};
use crate::utils::error::{ErrorKind, KataError, Result};
use serde::Deserialize;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;

/// What a case expects: a value, or a failure of a particular kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected<O> {
    Value(O),
    Error(ErrorKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase<I, O> {
    pub input: I,
    pub expected: Expected<O>,
}

impl<I, O> TestCase<I, O> {
    pub fn ok(input: I, expected: O) -> Self {
        Self {
            input,
            expected: Expected::Value(expected),
        }
    }

    pub fn err(input: I, kind: ErrorKind) -> Self {
        Self {
            input,
            expected: Expected::Error(kind),
        }
    }
}

pub trait CaseProvider {
    type Input;
    type Output;

    fn name(&self) -> &str;

    /// A fresh, finite sequence. Calling this again restarts from the first case.
    fn cases(&self) -> Vec<TestCase<Self::Input, Self::Output>>;
}

/// Cases written out next to the test that uses them.
#[derive(Debug, Clone)]
pub struct InlineCases<I, O> {
    name: String,
    cases: Vec<TestCase<I, O>>,
}

impl<I: Clone, O: Clone> InlineCases<I, O> {
    pub fn new(name: impl Into<String>, cases: Vec<TestCase<I, O>>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }
}

impl<I: Clone, O: Clone> CaseProvider for InlineCases<I, O> {
    type Input = I;
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    fn cases(&self) -> Vec<TestCase<I, O>> {
        self.cases.clone()
    }
}

/// A named case set wrapped as a provider, so catalog functions can be handed
/// to the runner directly.
pub struct NamedCases<I, O> {
    name: &'static str,
    source: fn() -> Vec<TestCase<I, O>>,
}

impl<I, O> NamedCases<I, O> {
    pub const fn new(name: &'static str, source: fn() -> Vec<TestCase<I, O>>) -> Self {
        Self { name, source }
    }
}

impl<I, O> CaseProvider for NamedCases<I, O> {
    type Input = I;
    type Output = O;

    fn name(&self) -> &str {
        self.name
    }

    fn cases(&self) -> Vec<TestCase<I, O>> {
        (self.source)()
    }
}

pub type Sides = (f64, f64, f64);

/// Shared case sets referenced by several tests.
pub mod catalog {
    use super::{NamedCases, Sides, TestCase};
    use crate::utils::error::ErrorKind;
    use std::f64::consts::PI;

    pub fn triangle_area_cases() -> Vec<TestCase<Sides, f64>> {
        vec![
            // scalene
            TestCase::ok((3.0, 4.0, 5.0), 6.0),
            TestCase::ok((13.0, 14.0, 15.0), 84.0),
            TestCase::ok((7.0, 8.0, 9.0), 26.832815729997478),
            TestCase::ok((11.0, 12.0, 13.0), 61.48170459575759),
            // equilateral
            TestCase::ok((1.0, 1.0, 1.0), 0.4330127018922193),
            TestCase::ok((2.0, 2.0, 2.0), 1.7320508075688772),
            TestCase::ok((5.0, 5.0, 5.0), 10.825317547305483),
            TestCase::ok((8.0, 15.0, 17.0), 60.0),
            TestCase::ok((9.0, 12.0, 15.0), 54.0),
        ]
    }

    pub fn right_triangle_cases() -> Vec<TestCase<Sides, bool>> {
        vec![
            TestCase::ok((3.0, 4.0, 5.0), true),
            TestCase::ok((5.0, 12.0, 13.0), true),
            TestCase::ok((8.0, 15.0, 17.0), true),
            TestCase::ok((7.0, 24.0, 25.0), true),
            TestCase::ok((20.0, 21.0, 29.0), true),
            TestCase::ok((2.0, 3.0, 4.0), false),
            TestCase::ok((5.0, 5.0, 8.0), false),
            TestCase::ok((6.0, 7.0, 8.0), false),
            // almost right
            TestCase::ok((3.0, 4.0, 5.0000001), false),
            TestCase::ok((3.0, 4.0, 4.9999999), false),
        ]
    }

    pub fn circle_circumference_cases() -> Vec<TestCase<f64, f64>> {
        vec![
            TestCase::ok(1.0, 2.0 * PI),
            TestCase::ok(2.0, 4.0 * PI),
            TestCase::ok(3.0, 6.0 * PI),
            TestCase::ok(10.0, 20.0 * PI),
            TestCase::ok(0.5, PI),
            TestCase::ok(1.5, 3.0 * PI),
            TestCase::ok(2.5, 5.0 * PI),
            TestCase::ok(100.0, 200.0 * PI),
            TestCase::ok(1000.0, 2000.0 * PI),
            TestCase::err(0.0, ErrorKind::InvalidRadius),
            TestCase::err(-1.0, ErrorKind::InvalidRadius),
        ]
    }

    /// Expects `InvalidTriangle` only, so it fits any output type.
    pub fn invalid_triangle_cases<O>() -> Vec<TestCase<Sides, O>> {
        [
            (0.0, 4.0, 5.0),
            (3.0, 0.0, 5.0),
            (3.0, 4.0, 0.0),
            (-1.0, 4.0, 5.0),
            (3.0, -4.0, 5.0),
            (3.0, 4.0, -5.0),
            // a + b == c
            (1.0, 1.0, 2.0),
            (1.0, 2.0, 3.0),
            (1.0, 1.0, 3.0),
            (2.0, 3.0, 6.0),
            (5.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
            (-1.0, -1.0, -1.0),
        ]
        .into_iter()
        .map(|sides| TestCase::err(sides, ErrorKind::InvalidTriangle))
        .collect()
    }

    pub fn leap_year_cases() -> Vec<TestCase<i32, bool>> {
        vec![
            TestCase::ok(2020, true),
            TestCase::ok(2024, true),
            TestCase::ok(2000, true),
            TestCase::ok(2400, true),
            TestCase::ok(2021, false),
            TestCase::ok(2022, false),
            TestCase::ok(2023, false),
            TestCase::ok(1900, false),
            TestCase::ok(2100, false),
            TestCase::err(0, ErrorKind::YearOutOfRange),
            TestCase::err(-1, ErrorKind::YearOutOfRange),
            TestCase::err(10000, ErrorKind::YearOutOfRange),
            TestCase::err(10001, ErrorKind::YearOutOfRange),
        ]
    }

    pub fn days_in_month_cases() -> Vec<TestCase<(i32, i32), u8>> {
        vec![
            TestCase::ok((2023, 1), 31),
            TestCase::ok((2023, 3), 31),
            TestCase::ok((2023, 4), 30),
            TestCase::ok((2023, 6), 30),
            TestCase::ok((2020, 2), 29),
            TestCase::ok((2024, 2), 29),
            TestCase::ok((2000, 2), 29),
            TestCase::ok((2023, 2), 28),
            TestCase::ok((2021, 2), 28),
            TestCase::ok((1900, 2), 28),
            TestCase::err((2023, 0), ErrorKind::MonthOutOfRange),
            TestCase::err((2023, 13), ErrorKind::MonthOutOfRange),
            TestCase::err((2023, -1), ErrorKind::MonthOutOfRange),
            TestCase::err((0, 1), ErrorKind::YearOutOfRange),
            TestCase::err((-1, 1), ErrorKind::YearOutOfRange),
            TestCase::err((10000, 1), ErrorKind::YearOutOfRange),
        ]
    }

    pub const TRIANGLE_AREA: NamedCases<Sides, f64> =
        NamedCases::new("triangle_area", triangle_area_cases);
    pub const RIGHT_TRIANGLE: NamedCases<Sides, bool> =
        NamedCases::new("right_triangle", right_triangle_cases);
    pub const CIRCLE_CIRCUMFERENCE: NamedCases<f64, f64> =
        NamedCases::new("circle_circumference", circle_circumference_cases);
    pub const INVALID_TRIANGLE: NamedCases<Sides, f64> =
        NamedCases::new("invalid_triangle", invalid_triangle_cases::<f64>);
    pub const LEAP_YEAR: NamedCases<i32, bool> = NamedCases::new("leap_year", leap_year_cases);
    pub const DAYS_IN_MONTH: NamedCases<(i32, i32), u8> =
        NamedCases::new("days_in_month", days_in_month_cases);
}

pub struct TriangleAreaComplexCases;

impl CaseProvider for TriangleAreaComplexCases {
    type Input = Sides;
    type Output = f64;

    fn name(&self) -> &str {
        "triangle_area_complex"
    }

    fn cases(&self) -> Vec<TestCase<Sides, f64>> {
        let sqrt3 = 3.0_f64.sqrt();
        vec![
            TestCase::ok((3.0, 4.0, 5.0), 6.0),
            TestCase::ok((6.0, 8.0, 10.0), 24.0),
            TestCase::ok((5.0, 12.0, 13.0), 30.0),
            TestCase::ok((2.0, 2.0, 2.0), sqrt3),
            TestCase::ok((4.0, 4.0, 4.0), 4.0 * sqrt3),
            TestCase::ok((7.0, 24.0, 25.0), 84.0),
            TestCase::ok((8.0, 15.0, 17.0), 60.0),
            TestCase::ok((9.0, 40.0, 41.0), 180.0),
            TestCase::ok((2.5, 3.5, 4.5), 4.353070037341462),
            TestCase::ok((1.2, 1.3, 1.4), 0.7230793524918271),
        ]
    }
}

pub struct RightTriangleComplexCases;

impl CaseProvider for RightTriangleComplexCases {
    type Input = Sides;
    type Output = bool;

    fn name(&self) -> &str {
        "right_triangle_complex"
    }

    fn cases(&self) -> Vec<TestCase<Sides, bool>> {
        let mut cases: Vec<_> = [
            (3.0, 4.0, 5.0),
            (5.0, 12.0, 13.0),
            (8.0, 15.0, 17.0),
            (7.0, 24.0, 25.0),
            (20.0, 21.0, 29.0),
            (12.0, 35.0, 37.0),
            (9.0, 40.0, 41.0),
            // side order does not matter
            (5.0, 3.0, 4.0),
            (13.0, 5.0, 12.0),
        ]
        .into_iter()
        .map(|sides| TestCase::ok(sides, true))
        .collect();

        cases.extend(
            [(4.0, 5.0, 6.0), (7.0, 8.0, 9.0), (10.0, 10.0, 15.0)]
                .into_iter()
                .map(|sides| TestCase::ok(sides, false)),
        );
        cases
    }
}

pub struct CircleCircumferenceComplexCases;

impl CaseProvider for CircleCircumferenceComplexCases {
    type Input = f64;
    type Output = f64;

    fn name(&self) -> &str {
        "circle_circumference_complex"
    }

    fn cases(&self) -> Vec<TestCase<f64, f64>> {
        [0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0, 12.5, 15.0]
            .into_iter()
            .map(|radius| TestCase::ok(radius, 2.0 * std::f64::consts::PI * radius))
            .collect()
    }
}

/// Every way a triangle can fail to exist. Both the area and the right-angle
/// check must reject all of them, hence the free output type.
pub struct InvalidTriangleCases<O = f64>(PhantomData<fn() -> O>);

impl<O> InvalidTriangleCases<O> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<O> Default for InvalidTriangleCases<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> CaseProvider for InvalidTriangleCases<O> {
    type Input = Sides;
    type Output = O;

    fn name(&self) -> &str {
        "invalid_triangle"
    }

    fn cases(&self) -> Vec<TestCase<Sides, O>> {
        catalog::invalid_triangle_cases()
    }
}

#[derive(Debug, Deserialize)]
struct CaseRecord {
    operation: String,
    #[serde(default)]
    args: String,
    expected: String,
}

const ERROR_PREFIX: &str = "error:";

/// Cases loaded from a CSV file with header `operation,args,expected`.
///
/// `args` is whitespace-separated (text operations take the trimmed field) and
/// `expected` is either a literal of the operation's result type or
/// `error:<Kind>`.
#[derive(Debug, Clone)]
pub struct CaseTable {
    name: String,
    cases: Vec<TestCase<Invocation, Value>>,
}

impl CaseTable {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("cases")
            .to_string();
        Self::from_csv_reader(name, file)
    }

    pub fn from_csv_reader<R: Read>(name: impl Into<String>, mut reader: R) -> Result<Self> {
        let name = name.into();
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .comment(Some(b'#'))
            .from_reader(content.as_bytes());

        let headers = csv_reader.headers()?.clone();
        let mut raw = csv::StringRecord::new();
        let mut cases = Vec::new();
        while csv_reader.read_record(&mut raw)? {
            let row = record_line(&content, raw.position());
            let record: CaseRecord = raw.deserialize(Some(&headers))?;
            cases.push(Self::parse_record(row, &record)?);
        }

        tracing::debug!(table = %name, cases = cases.len(), "loaded case table");
        Ok(Self { name, cases })
    }

    fn parse_record(row: usize, record: &CaseRecord) -> Result<TestCase<Invocation, Value>> {
        let operation: Operation = record
            .operation
            .parse()
            .map_err(|e: String| KataError::case_table(row, e))?;
        let invocation = operation
            .parse_args(&record.args)
            .map_err(|e| KataError::case_table(row, e))?;

        let expected = record.expected.trim();
        let expected = match expected.strip_prefix(ERROR_PREFIX) {
            Some(kind) => Expected::Error(
                kind.parse::<ErrorKind>()
                    .map_err(|e| KataError::case_table(row, e))?,
            ),
            None => Expected::Value(
                operation
                    .parse_value(expected)
                    .map_err(|e| KataError::case_table(row, e))?,
            ),
        };

        Ok(TestCase {
            input: invocation,
            expected,
        })
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// One-based line a record starts on. The reader stamps a record with the
/// position right after the previous one, ahead of any comment or blank lines
/// it then skips.
fn record_line(content: &str, position: Option<&csv::Position>) -> usize {
    let Some(position) = position else {
        return 0;
    };
    let start = usize::try_from(position.byte()).unwrap_or(usize::MAX);
    let skipped = content
        .get(start..)
        .unwrap_or("")
        .lines()
        .take_while(|line| line.is_empty() || line.starts_with('#'))
        .count();
    usize::try_from(position.line()).unwrap_or(usize::MAX) + skipped
}

impl CaseProvider for CaseTable {
    type Input = Invocation;
    type Output = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn cases(&self) -> Vec<TestCase<Invocation, Value>> {
        self.cases.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_restart() {
        let provider = RightTriangleComplexCases;
        let first = provider.cases();
        let second = provider.cases();
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
    }

    #[test]
    fn test_named_cases_wrap_catalog() {
        assert_eq!(catalog::LEAP_YEAR.name(), "leap_year");
        assert_eq!(catalog::LEAP_YEAR.cases(), catalog::leap_year_cases());
    }

    #[test]
    fn test_case_table_parses_values_and_errors() {
        let csv = "\
operation,args,expected
triangle_area,3 4 5,6
is_leap_year,1900,false
# comment rows are skipped
days_in_month,2023 13,error:MonthOutOfRange
reverse,hello world,dlrow olleh
";
        let table = CaseTable::from_csv_reader("inline", csv.as_bytes()).unwrap();
        assert_eq!(table.name(), "inline");
        assert_eq!(table.len(), 4);

        let cases = table.cases();
        assert_eq!(cases[0].input, Invocation::TriangleArea(3.0, 4.0, 5.0));
        assert_eq!(cases[0].expected, Expected::Value(Value::Real(6.0)));
        assert_eq!(cases[1].expected, Expected::Value(Value::Flag(false)));
        assert_eq!(
            cases[2].expected,
            Expected::Error(ErrorKind::MonthOutOfRange)
        );
        assert_eq!(
            cases[3].expected,
            Expected::Value(Value::Text("dlrow olleh".to_string()))
        );
    }

    #[test]
    fn test_case_table_reports_row() {
        let csv = "operation,args,expected\ntriangle_area,3 4 5,6\ntriangle_area,3 4,6\n";
        let err = CaseTable::from_csv_reader("bad", csv.as_bytes()).unwrap_err();
        match err {
            KataError::CaseTableError { row, message } => {
                assert_eq!(row, 3);
                assert!(message.contains("expects 3 argument(s)"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_case_table_row_counts_comment_and_blank_lines() {
        let csv = "\
operation,args,expected
# area
# checks
triangle_area,3 4 5,6

triangle_area,3 4,6
";
        match CaseTable::from_csv_reader("bad", csv.as_bytes()).unwrap_err() {
            KataError::CaseTableError { row, .. } => assert_eq!(row, 6),
            other => panic!("unexpected error: {other}"),
        }

        let crlf = "operation,args,expected\r\n# note\r\nis_leap_year,0,error:Boom\r\n";
        assert!(matches!(
            CaseTable::from_csv_reader("bad", crlf.as_bytes()),
            Err(KataError::CaseTableError { row: 3, .. })
        ));
    }

    #[test]
    fn test_case_table_rejects_unknown_kind() {
        let csv = "operation,args,expected\nis_leap_year,0,error:Boom\n";
        assert!(matches!(
            CaseTable::from_csv_reader("bad", csv.as_bytes()),
            Err(KataError::CaseTableError { row: 2, .. })
        ));
    }
}
