use anyhow::Result;
use kata_calc::core::cases::Expected;
use kata_calc::core::operations::{Invocation, Value};
use kata_calc::utils::validation::Validate;
use kata_calc::{CaseProvider, CaseRunner, CaseTable, ErrorKind, KataConfig, VerificationSuite};
use tempfile::TempDir;

const GEOMETRY_TABLE: &str = "\
operation,args,expected
triangle_area,3 4 5,6
triangle_area,13 14 15,84
triangle_area,1 2 3,error:InvalidTriangle
is_right_triangle,5 3 4,true
is_right_triangle,2 3 4,false
circle_circumference,1,6.283185307179586
circle_area,0,error:InvalidRadius
validate_triangle,3 4 5,ok
";

#[test]
fn test_table_from_file_runs_clean() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("geometry.csv");
    std::fs::write(&path, GEOMETRY_TABLE)?;

    let table = CaseTable::from_csv_path(&path)?;
    assert_eq!(table.name(), "geometry");
    assert_eq!(table.len(), 8);

    let report = CaseRunner::default().run_table(&table);
    assert!(report.is_success(), "{}", report);
    assert_eq!(report.passed, 8);
    Ok(())
}

#[test]
fn test_table_is_restartable() -> Result<()> {
    let table = CaseTable::from_csv_reader("geometry", GEOMETRY_TABLE.as_bytes())?;
    let first = table.cases();
    let second = table.cases();
    assert_eq!(first, second);
    assert_eq!(first[0].input, Invocation::TriangleArea(3.0, 4.0, 5.0));
    assert_eq!(first[2].expected, Expected::Error(ErrorKind::InvalidTriangle));
    Ok(())
}

#[test]
fn test_table_with_wrong_expectation_reports_failure() -> Result<()> {
    let csv = "\
operation,args,expected
is_leap_year,1900,true
days_in_month,2024 2,29
calculate_age,2000-06-15 2024-06-15,24
calculate_age,2024-06-16 2024-06-15,error:FutureBirthDate
";
    let table = CaseTable::from_csv_reader("calendar", csv.as_bytes())?;
    let report = CaseRunner::default().run_table(&table);

    assert_eq!(report.total, 4);
    assert_eq!(report.passed, 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 0);
    assert!(report.failures[0].actual.contains("false"));
    Ok(())
}

#[test]
fn test_text_rows_with_padding_pass() -> Result<()> {
    let csv = "operation,args,expected\nreverse, ab,ba \nto_upper_case,  kata ,KATA\n";
    let table = CaseTable::from_csv_reader("padded", csv.as_bytes())?;
    let report = CaseRunner::default().run_table(&table);
    assert!(report.is_success(), "{}", report);
    assert_eq!(report.passed, 2);
    Ok(())
}

#[test]
fn test_missing_table_is_io_error() {
    let err = CaseTable::from_csv_path("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, kata_calc::KataError::IoError(_)));
}

#[test]
fn test_config_file_resolves_relative_case_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("cases"))?;
    std::fs::write(temp_dir.path().join("cases/geometry.csv"), GEOMETRY_TABLE)?;

    let config_path = temp_dir.path().join("kata.toml");
    std::fs::write(
        &config_path,
        r#"
[runner]
tolerance = 1e-10
include_builtin = false
case_files = ["cases/geometry.csv"]

[logging]
level = "info"
"#,
    )?;

    let config = KataConfig::from_file(&config_path)?;
    config.validate()?;

    let paths = config.case_file_paths();
    assert_eq!(paths, vec![temp_dir.path().join("cases/geometry.csv")]);

    let mut suite = VerificationSuite::new(CaseRunner::new(config.runner_settings()))
        .include_builtin(config.include_builtin());
    for path in &paths {
        suite = suite.with_table(CaseTable::from_csv_path(path)?);
    }

    let summary = suite.run();
    assert!(summary.is_success());
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.total, 8);

    let json = serde_json::to_value(&summary)?;
    assert_eq!(json["passed"], 8);
    assert_eq!(json["reports"][0]["provider"], "geometry");
    Ok(())
}

#[test]
fn test_value_serializes_untagged() -> Result<()> {
    assert_eq!(serde_json::to_string(&Value::Real(6.0))?, "6.0");
    assert_eq!(serde_json::to_string(&Value::Flag(true))?, "true");
    assert_eq!(serde_json::to_string(&Value::Text("ok".into()))?, "\"ok\"");
    Ok(())
}

#[test]
fn test_bundled_sample_config_passes() -> Result<()> {
    let config_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("kata.toml");
    let config = KataConfig::from_file(&config_path)?;
    config.validate()?;

    let mut suite = VerificationSuite::new(CaseRunner::new(config.runner_settings()))
        .include_builtin(config.include_builtin());
    for path in config.case_file_paths() {
        suite = suite.with_table(CaseTable::from_csv_path(&path)?);
    }

    let summary = suite.run();
    for report in &summary.reports {
        assert!(report.is_success(), "{}", report);
    }
    assert!(summary.reports.iter().any(|r| r.provider == "calendar"));
    Ok(())
}
