use crate::utils::error::{KataError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KataError::config(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(KataError::config(
            field_name,
            format!("Path '{}' contains null bytes", path.escape_debug()),
        ));
    }

    Ok(())
}

pub fn validate_positive_real(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(KataError::config(
            field_name,
            format!("Value must be a positive finite number, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        validate_path(field_name, file)?;
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(KataError::config(
                    field_name,
                    format!(
                        "Unsupported file extension '{}' for {}. Allowed extensions: {}",
                        extension,
                        file,
                        allowed_extensions.join(", ")
                    ),
                ));
            }
            None => {
                return Err(KataError::config(
                    field_name,
                    format!("{} has no extension or is not a valid filename", file),
                ));
            }
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KataError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(KataError::config(
            field_name,
            format!("Value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_real() {
        assert!(validate_positive_real("runner.tolerance", 1e-10).is_ok());
        assert!(validate_positive_real("runner.tolerance", 0.0).is_err());
        assert!(validate_positive_real("runner.tolerance", -1.0).is_err());
        assert!(validate_positive_real("runner.tolerance", f64::NAN).is_err());
        assert!(validate_positive_real("runner.tolerance", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["cases/geometry.csv".to_string()];
        assert!(validate_file_extensions("runner.case_files", &files, &["csv"]).is_ok());

        let invalid_files = vec!["cases/geometry.txt".to_string()];
        assert!(validate_file_extensions("runner.case_files", &invalid_files, &["csv"]).is_err());

        let no_extension = vec!["cases/geometry".to_string()];
        assert!(validate_file_extensions("runner.case_files", &no_extension, &["csv"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("runner.tolerance", 1e-10, f64::MIN_POSITIVE, 1.0).is_ok());
        assert!(validate_range("runner.tolerance", 1.0, f64::MIN_POSITIVE, 1.0).is_ok());
        assert!(validate_range("runner.tolerance", 0.0, f64::MIN_POSITIVE, 1.0).is_err());
        assert!(validate_range("runner.tolerance", 2.5, f64::MIN_POSITIVE, 1.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("logging.level", "info").is_ok());
        assert!(validate_non_empty_string("logging.level", "   ").is_err());
    }
}
