use anyhow::{Context, Result};
use clap::Parser;
use kata_calc::config::{CliConfig, Command, KataConfig};
use kata_calc::core::operations::Operation;
use kata_calc::utils::{logger, validation::Validate};
use kata_calc::{CaseRunner, CaseTable, HasErrorKind, VerificationSuite};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match cli.command.clone() {
        Command::Eval { operation, args } => {
            logger::init_cli_logger("info", cli.verbose);
            eval(operation, &args.join(" "))
        }
        Command::Verify {
            config,
            cases,
            no_builtin,
            fail_fast,
            json,
        } => {
            let file_config = match &config {
                Some(path) => KataConfig::from_file(path)
                    .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
                None => KataConfig::default(),
            };
            file_config.validate().context("Invalid configuration")?;

            let level = file_config.log_level();
            if file_config.json_logs() {
                logger::init_json_logger(level, cli.verbose);
            } else {
                logger::init_cli_logger(level, cli.verbose);
            }
            tracing::info!("Starting kata-calc verification");
            tracing::debug!("CLI config: {:?}", cli);

            let mut settings = file_config.runner_settings();
            settings.fail_fast |= fail_fast;

            let mut suite = VerificationSuite::new(CaseRunner::new(settings))
                .include_builtin(file_config.include_builtin() && !no_builtin);

            let table_paths = file_config
                .case_file_paths()
                .into_iter()
                .chain(cases.iter().map(PathBuf::from));
            for path in table_paths {
                let table = CaseTable::from_csv_path(&path)
                    .with_context(|| format!("Failed to load case table '{}'", path.display()))?;
                tracing::info!("📁 Loaded {} case(s) from {}", table.len(), path.display());
                suite = suite.with_table(table);
            }

            let summary = suite.run();
            if json {
                println!("{}", summary.to_json()?);
            } else {
                for report in &summary.reports {
                    println!("{}", report);
                }
                println!(
                    "{} case(s): {} passed, {} failed",
                    summary.total, summary.passed, summary.failed
                );
            }

            if !summary.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Operations => {
            for operation in Operation::ALL {
                println!("{:<22} {}", operation.name(), operation.signature());
            }
            Ok(())
        }
    }
}

fn eval(operation: Operation, raw_args: &str) -> Result<()> {
    let invocation = match operation.parse_args(raw_args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    };
    tracing::debug!("Evaluating {}", invocation);

    match invocation.invoke() {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {} failed: {} ({})", invocation, e, e.kind());
            eprintln!("❌ {}: {}", e.kind(), e);
            std::process::exit(2);
        }
    }
}
