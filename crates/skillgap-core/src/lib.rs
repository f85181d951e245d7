//! Core library for skillgap.
//!
//! Compares the skills named in a resume against those named in a job
//! description, using a fixed vocabulary of skill phrases.
//!
//! # Modules
//!
//! - [`normalize`] - Text normalization
//! - [`vocabulary`] - Skill phrases and exclusion rules
//! - [`extract`] - Word-boundary skill extraction
//! - [`matcher`] - Skill set comparison and scoring
//! - [`suggestions`] - Improvement tips
//! - [`analysis`] - The end-to-end resume/job-description comparison
//! - [`markdown`] - Markdown flattening for inputs
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use skillgap_core::{SkillExtractor, analyze};
//!
//! let extractor = SkillExtractor::builtin().expect("builtin vocabulary compiles");
//! let report = analyze(
//!     "Experienced in Python, SQL and Docker.",
//!     "Looking for Python, Java, SQL, AWS, and Docker expert.",
//!     &extractor,
//! );
//! assert_eq!(report.match_percentage, 60);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod markdown;
pub mod matcher;
pub mod normalize;
pub mod suggestions;
pub mod vocabulary;

pub use analysis::{SkillGapReport, analyze, check_inputs};
pub use config::{Config, ConfigLoader, InputFormat, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, InputKind};
pub use extract::{SkillExtractor, extract_skills};
pub use matcher::{MatchResult, SkillSet, match_skills};
pub use normalize::{NormalizedText, normalize};
pub use vocabulary::{ExclusionPolicy, SkillEntry, SkillPhrase, Vocabulary};

/// Default input size limit: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
