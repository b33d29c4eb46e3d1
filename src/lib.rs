pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::KataConfig;

pub use crate::core::calendar::{calculate_age, days_in_month, is_leap_year};
pub use crate::core::cases::{CaseProvider, CaseTable, Expected, InlineCases, TestCase};
pub use crate::core::geometry::{
    circle_area, circle_circumference, is_equilateral, is_isosceles, is_right_triangle,
    triangle_area, validate_triangle,
};
pub use crate::core::runner::{CaseRunner, RunReport, RunnerSettings};
pub use crate::core::suite::VerificationSuite;
pub use utils::error::{ErrorKind, HasErrorKind, KataError, Result};
