use crate::core::runner::{RunnerSettings, DEFAULT_TOLERANCE};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KataConfig {
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,

    /// Directory relative case-file paths are resolved against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub tolerance: Option<f64>,
    pub fail_fast: Option<bool>,
    pub include_builtin: Option<bool>,
    pub case_files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl KataConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(KataError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| KataError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| KataError::config("toml_parsing", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn runner_settings(&self) -> RunnerSettings {
        RunnerSettings {
            tolerance: self.runner.tolerance.unwrap_or(DEFAULT_TOLERANCE),
            fail_fast: self.runner.fail_fast.unwrap_or(false),
        }
    }

    pub fn include_builtin(&self) -> bool {
        self.runner.include_builtin.unwrap_or(true)
    }

    pub fn case_files(&self) -> &[String] {
        self.runner.case_files.as_deref().unwrap_or(&[])
    }

    /// Case files with relative entries resolved against the config file's directory.
    pub fn case_file_paths(&self) -> Vec<PathBuf> {
        self.case_files()
            .iter()
            .map(|file| {
                let path = PathBuf::from(file);
                match &self.base_dir {
                    Some(base) if path.is_relative() => base.join(path),
                    _ => path,
                }
            })
            .collect()
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for KataConfig {
    fn validate(&self) -> Result<()> {
        if let Some(tolerance) = self.runner.tolerance {
            validation::validate_positive_real("runner.tolerance", tolerance)?;
            validation::validate_range("runner.tolerance", tolerance, f64::MIN_POSITIVE, 1.0)?;
        }

        validation::validate_file_extensions("runner.case_files", self.case_files(), &["csv"])?;

        let level = self.log_level();
        validation::validate_non_empty_string("logging.level", level)?;
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(KataError::config(
                "logging.level",
                format!("Unknown level '{}'. Valid levels: {}", level, LOG_LEVELS.join(", ")),
            ));
        }

        Ok(())
    }
}
