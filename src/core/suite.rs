use crate::core::cases::{
    catalog, CaseProvider, CaseTable, CircleCircumferenceComplexCases, InvalidTriangleCases,
    RightTriangleComplexCases, Sides, TriangleAreaComplexCases,
};
use crate::core::runner::{CaseRunner, RunReport};
use crate::core::{calendar, geometry};
use crate::utils::error::{self, GeometryError};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub reports: Vec<RunReport>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl SuiteReport {
    fn from_reports(reports: Vec<RunReport>) -> Self {
        let total = reports.iter().map(|r| r.total).sum();
        let passed = reports.iter().map(|r| r.passed).sum();
        let failed = reports.iter().map(|r| r.failures.len()).sum();
        Self {
            reports,
            total,
            passed,
            failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.reports.iter().all(RunReport::is_success)
    }

    pub fn to_json(&self) -> error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn area(&(a, b, c): &Sides) -> Result<f64, GeometryError> {
    geometry::triangle_area(a, b, c)
}

fn right(&(a, b, c): &Sides) -> Result<bool, GeometryError> {
    geometry::is_right_triangle(a, b, c)
}

/// Runs the built-in case sets and any external tables through one runner.
pub struct VerificationSuite {
    runner: CaseRunner,
    include_builtin: bool,
    tables: Vec<CaseTable>,
}

impl VerificationSuite {
    pub fn new(runner: CaseRunner) -> Self {
        Self {
            runner,
            include_builtin: true,
            tables: Vec::new(),
        }
    }

    pub fn include_builtin(mut self, include: bool) -> Self {
        self.include_builtin = include;
        self
    }

    pub fn with_table(mut self, table: CaseTable) -> Self {
        self.tables.push(table);
        self
    }

    fn run_builtin(&self) -> Vec<RunReport> {
        let runner = &self.runner;
        vec![
            runner.run(&catalog::TRIANGLE_AREA, area),
            runner.run(&catalog::RIGHT_TRIANGLE, right),
            runner.run(&catalog::CIRCLE_CIRCUMFERENCE, |r: &f64| {
                geometry::circle_circumference(*r)
            }),
            runner.run(&catalog::INVALID_TRIANGLE, area),
            runner.run(&catalog::LEAP_YEAR, |y: &i32| calendar::is_leap_year(*y)),
            runner.run(&catalog::DAYS_IN_MONTH, |&(y, m): &(i32, i32)| {
                calendar::days_in_month(y, m)
            }),
            runner.run(&TriangleAreaComplexCases, area),
            runner.run(&RightTriangleComplexCases, right),
            runner.run(&CircleCircumferenceComplexCases, |r: &f64| {
                geometry::circle_circumference(*r)
            }),
            runner.run(&InvalidTriangleCases::<bool>::new(), right),
        ]
    }

    pub fn run(&self) -> SuiteReport {
        let mut reports = Vec::new();

        if self.include_builtin {
            tracing::info!("Running built-in case sets...");
            reports.extend(self.run_builtin());
        }

        for table in &self.tables {
            tracing::info!("Running case table '{}'...", table.name());
            reports.push(self.runner.run_table(table));
        }

        let summary = SuiteReport::from_reports(reports);
        tracing::info!(
            "Verified {} case(s): {} passed, {} failed",
            summary.total,
            summary.passed,
            summary.failed
        );
        summary
    }
}
