//! Error types for skillgap-core.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A value parsed but is outside its allowed range.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    OutOfRange {
        /// Config key.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// What the key accepts.
        reason: &'static str,
    },

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which of the two analysis inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// The candidate's resume.
    Resume,
    /// The job description (reference document).
    JobDescription,
}

impl InputKind {
    /// Human-readable name of the input.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::JobDescription => "job description",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during skill analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// An input has no meaningful content after normalization.
    #[error("no usable text in {which}")]
    EmptyInput {
        /// The input that was empty.
        which: InputKind,
    },

    /// A vocabulary entry violates the skill phrase rules.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// A match pattern could not be compiled for a phrase.
    #[error("failed to build match pattern for {phrase:?}: {source}")]
    Pattern {
        /// The phrase whose pattern failed.
        phrase: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
