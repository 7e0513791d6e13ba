//! pf-project: pipe flow problem file format, validation and compilation.

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{compile, compile_fitting, compile_solver};
pub use schema::*;
pub use validate::{ValidationError, validate_problem};

use pf_components::ComponentError;
use pf_solver::SolverError;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Unsupported file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<ProblemFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ProblemFile = serde_yaml::from_str(&content)?;
    validate_problem(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &ProblemFile) -> ProjectResult<()> {
    validate_problem(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<ProblemFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ProblemFile = serde_json::from_str(&content)?;
    validate_problem(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &ProblemFile) -> ProjectResult<()> {
    validate_problem(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a problem file, picking the format from the extension
/// (`.yaml`/`.yml` or `.json`).
pub fn load(path: &Path) -> ProjectResult<ProblemFile> {
    match format_of(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

pub fn save(path: &Path, file: &ProblemFile) -> ProjectResult<()> {
    match format_of(path)? {
        Format::Yaml => save_yaml(path, file),
        Format::Json => save_json(path, file),
    }
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> ProjectResult<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
