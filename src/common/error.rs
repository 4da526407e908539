/// Raised by ledger mutations that target a specific student.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("student not found: {0}")]
    StudentNotFound(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <commands.csv>")]
    MissingArg,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
