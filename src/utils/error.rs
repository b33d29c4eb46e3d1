use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Flat tag for every domain failure. Case tables name expected failures by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidTriangle,
    DegenerateTriangle,
    InvalidRadius,
    YearOutOfRange,
    MonthOutOfRange,
    DayOutOfRange,
    FutureBirthDate,
    DuplicateStudent,
    StudentNotFound,
    EmptySubject,
    GradeOutOfRange,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::InvalidTriangle,
        ErrorKind::DegenerateTriangle,
        ErrorKind::InvalidRadius,
        ErrorKind::YearOutOfRange,
        ErrorKind::MonthOutOfRange,
        ErrorKind::DayOutOfRange,
        ErrorKind::FutureBirthDate,
        ErrorKind::DuplicateStudent,
        ErrorKind::StudentNotFound,
        ErrorKind::EmptySubject,
        ErrorKind::GradeOutOfRange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidTriangle => "InvalidTriangle",
            ErrorKind::DegenerateTriangle => "DegenerateTriangle",
            ErrorKind::InvalidRadius => "InvalidRadius",
            ErrorKind::YearOutOfRange => "YearOutOfRange",
            ErrorKind::MonthOutOfRange => "MonthOutOfRange",
            ErrorKind::DayOutOfRange => "DayOutOfRange",
            ErrorKind::FutureBirthDate => "FutureBirthDate",
            ErrorKind::DuplicateStudent => "DuplicateStudent",
            ErrorKind::StudentNotFound => "StudentNotFound",
            ErrorKind::EmptySubject => "EmptySubject",
            ErrorKind::GradeOutOfRange => "GradeOutOfRange",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ErrorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown error kind: {}", s))
    }
}

/// Anything that can be matched against an expected `ErrorKind`.
pub trait HasErrorKind {
    fn kind(&self) -> ErrorKind;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Triangle with sides ({a}, {b}, {c}) does not exist: {reason}")]
    InvalidTriangle {
        a: f64,
        b: f64,
        c: f64,
        reason: &'static str,
    },

    #[error("Triangle with sides ({a}, {b}, {c}) is degenerate (area {area:e})")]
    DegenerateTriangle { a: f64, b: f64, c: f64, area: f64 },

    #[error("Radius must be positive, got {radius}")]
    InvalidRadius { radius: f64 },
}

impl HasErrorKind for GeometryError {
    fn kind(&self) -> ErrorKind {
        match self {
            GeometryError::InvalidTriangle { .. } => ErrorKind::InvalidTriangle,
            GeometryError::DegenerateTriangle { .. } => ErrorKind::DegenerateTriangle,
            GeometryError::InvalidRadius { .. } => ErrorKind::InvalidRadius,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Year must be between 1 and 9999, got {year}")]
    YearOutOfRange { year: i32 },

    #[error("Month must be between 1 and 12, got {month}")]
    MonthOutOfRange { month: i32 },

    #[error("Day must be between 1 and {max} for {year}-{month:02}, got {day}")]
    DayOutOfRange {
        year: i32,
        month: i32,
        day: i32,
        max: u8,
    },

    #[error("Birth date {birth} cannot be after {today}")]
    FutureBirthDate {
        birth: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },
}

impl HasErrorKind for CalendarError {
    fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::YearOutOfRange { .. } => ErrorKind::YearOutOfRange,
            CalendarError::MonthOutOfRange { .. } => ErrorKind::MonthOutOfRange,
            CalendarError::DayOutOfRange { .. } => ErrorKind::DayOutOfRange,
            CalendarError::FutureBirthDate { .. } => ErrorKind::FutureBirthDate,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Student with ID {id} already exists.")]
    DuplicateStudent { id: u32 },

    #[error("Student with ID {id} was not found.")]
    StudentNotFound { id: u32 },

    #[error("Subject cannot be empty or whitespace-only.")]
    EmptySubject,

    #[error("Grade must be between 0 and 100, got {grade}")]
    GradeOutOfRange { grade: i32 },
}

impl RegistryError {
    /// Id of the student the failure refers to, when there is one.
    pub fn student_id(&self) -> Option<u32> {
        match self {
            RegistryError::DuplicateStudent { id } | RegistryError::StudentNotFound { id } => {
                Some(*id)
            }
            _ => None,
        }
    }
}

impl HasErrorKind for RegistryError {
    fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::DuplicateStudent { .. } => ErrorKind::DuplicateStudent,
            RegistryError::StudentNotFound { .. } => ErrorKind::StudentNotFound,
            RegistryError::EmptySubject => ErrorKind::EmptySubject,
            RegistryError::GradeOutOfRange { .. } => ErrorKind::GradeOutOfRange,
        }
    }
}

/// Failure of any pure calculator; what dynamic invocations return.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl HasErrorKind for CalcError {
    fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Geometry(e) => e.kind(),
            CalcError::Calendar(e) => e.kind(),
        }
    }
}

#[derive(Error, Debug)]
pub enum KataError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Case table error at row {row}: {message}")]
    CaseTableError { row: usize, message: String },
}

impl KataError {
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        KataError::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn case_table(row: usize, message: impl Into<String>) -> Self {
        KataError::CaseTableError {
            row,
            message: message.into(),
        }
    }

    /// Domain kind, if this is an input-validation failure rather than an
    /// infrastructure one.
    pub fn domain_kind(&self) -> Option<ErrorKind> {
        match self {
            KataError::Geometry(e) => Some(e.kind()),
            KataError::Calendar(e) => Some(e.kind()),
            KataError::Registry(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<CalcError> for KataError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::Geometry(e) => KataError::Geometry(e),
            CalcError::Calendar(e) => KataError::Calendar(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
