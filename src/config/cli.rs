use crate::core::operations::Operation;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kata-calc")]
#[command(about = "Geometry and calendar calculators with parameterized case verification")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Evaluate a single operation, e.g. `eval triangle_area 3 4 5`
    Eval {
        operation: Operation,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run the built-in case sets and any external CSV case tables
    Verify {
        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra CSV case tables (comma-separated or repeated)
        #[arg(long = "cases", value_delimiter = ',')]
        cases: Vec<String>,

        /// Skip the built-in case sets
        #[arg(long)]
        no_builtin: bool,

        /// Stop each case set at its first failure
        #[arg(long)]
        fail_fast: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available operations and their arguments
    Operations,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Verify { config, cases, .. } = &self.command {
            if let Some(path) = config {
                validation::validate_path("--config", &path.to_string_lossy())?;
            }
            validation::validate_file_extensions("--cases", cases, &["csv"])?;
        }
        Ok(())
    }
}
