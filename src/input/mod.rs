use thiserror::Error;

pub mod assessment;
pub mod catalog;

pub use assessment::{assessment_template, load_assessment};
pub use catalog::load_catalog;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("assessment JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
