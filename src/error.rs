use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    /// The catalog could not be read or parsed. Fatal at startup.
    #[error("failed to load catalog from {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("Section not found")]
    NotFound { code: String, section: String },

    #[error("malformed class id '{0}': expected <subject code>-<section>")]
    MalformedKey(String),
}

impl SchedError {
    pub fn load(path: impl Into<String>, reason: impl ToString) -> Self {
        SchedError::Load { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, SchedError>;
