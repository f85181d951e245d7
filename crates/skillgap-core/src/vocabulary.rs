//! Skill vocabulary.
//!
//! The vocabulary is an ordered, read-only list of skill phrases. Entries can
//! be marked ambiguous, and an [`ExclusionPolicy`] decides which entries the
//! extractor skips. The default policy skips single-character phrases, which
//! would otherwise match stray letters all over a document.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Built-in skill phrases, in display order.
///
/// Languages, frameworks, data tools, cloud/dev tools, then process terms.
const BUILTIN_SKILLS: &[(&str, bool)] = &[
    ("python", false),
    ("java", false),
    ("c", true),
    ("sql", false),
    ("mysql", false),
    ("mongodb", false),
    ("html", false),
    ("css", false),
    ("javascript", false),
    ("react", false),
    ("angular", false),
    ("nodejs", false),
    ("express", false),
    ("django", false),
    ("flask", false),
    ("machine learning", false),
    ("deep learning", false),
    ("data science", false),
    ("pandas", false),
    ("numpy", false),
    ("matplotlib", false),
    ("power bi", false),
    ("tableau", false),
    ("aws", false),
    ("azure", false),
    ("docker", false),
    ("git", false),
    ("linux", false),
    ("testing", false),
    ("debugging", false),
    ("sdlc", false),
    ("software development", false),
    ("software engineering", false),
    ("api", false),
    ("rest", false),
];

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary {
    entries: BUILTIN_SKILLS
        .iter()
        .map(|&(phrase, ambiguous)| SkillEntry {
            phrase: SkillPhrase(phrase.to_string()),
            ambiguous,
        })
        .collect(),
    policy: ExclusionPolicy::default(),
});

/// A skill phrase: one or more lowercase ASCII alphanumeric words separated
/// by single spaces.
///
/// Identity is the exact phrase text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct SkillPhrase(String);

impl SkillPhrase {
    /// Validate and wrap a phrase.
    pub fn parse(phrase: &str) -> AnalysisResult<Self> {
        let valid = !phrase.is_empty()
            && phrase.split(' ').all(|token| {
                !token.is_empty()
                    && token
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            });
        if valid {
            Ok(Self(phrase.to_string()))
        } else {
            Err(AnalysisError::InvalidVocabulary(format!(
                "{phrase:?} is not a lowercase alphanumeric phrase"
            )))
        }
    }

    /// Borrow the phrase text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The phrase's word tokens, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// Length of the phrase in characters.
    pub fn char_len(&self) -> usize {
        // ASCII only, so bytes == chars
        self.0.len()
    }
}

impl fmt::Display for SkillPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SkillPhrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SkillPhrase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkillEntry {
    /// The phrase to match.
    pub phrase: SkillPhrase,
    /// Never match this entry, regardless of length.
    #[serde(default)]
    pub ambiguous: bool,
}

impl SkillEntry {
    /// Create a regular (matchable) entry.
    pub fn new(phrase: &str) -> AnalysisResult<Self> {
        Ok(Self {
            phrase: SkillPhrase::parse(phrase)?,
            ambiguous: false,
        })
    }

    /// Mark this entry as ambiguous.
    #[must_use]
    pub fn ambiguous(mut self) -> Self {
        self.ambiguous = true;
        self
    }
}

/// Rules deciding which vocabulary entries the extractor skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExclusionPolicy {
    /// Phrases shorter than this many characters are never matched.
    pub min_phrase_chars: usize,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            min_phrase_chars: 2,
        }
    }
}

impl ExclusionPolicy {
    /// Whether the extractor must skip `entry`.
    pub fn excludes(&self, entry: &SkillEntry) -> bool {
        entry.ambiguous || entry.phrase.char_len() < self.min_phrase_chars
    }
}

/// An ordered, immutable skill vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Vocabulary {
    entries: Vec<SkillEntry>,
    policy: ExclusionPolicy,
}

impl Vocabulary {
    /// Build a vocabulary from explicit entries, preserving their order.
    ///
    /// Fails if the same phrase appears twice.
    pub fn new(entries: Vec<SkillEntry>) -> AnalysisResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.phrase.as_str()) {
                return Err(AnalysisError::InvalidVocabulary(format!(
                    "duplicate phrase {:?}",
                    entry.phrase.as_str()
                )));
            }
        }
        Ok(Self {
            entries,
            policy: ExclusionPolicy::default(),
        })
    }

    /// Build a vocabulary of regular entries from plain phrases.
    pub fn from_phrases<I, S>(phrases: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = phrases
            .into_iter()
            .map(|p| SkillEntry::new(p.as_ref()))
            .collect::<AnalysisResult<Vec<_>>>()?;
        Self::new(entries)
    }

    /// The built-in vocabulary shared by every analysis.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Replace the exclusion policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ExclusionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active exclusion policy.
    pub const fn policy(&self) -> ExclusionPolicy {
        self.policy
    }

    /// All entries, in vocabulary order.
    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    /// Entries the extractor will try to match, in vocabulary order.
    pub fn eligible(&self) -> impl Iterator<Item = &SkillEntry> {
        self.entries.iter().filter(|e| !self.policy.excludes(e))
    }

    /// Whether `entry` is skipped during extraction.
    pub fn is_excluded(&self, entry: &SkillEntry) -> bool {
        self.policy.excludes(entry)
    }

    /// Number of entries, including excluded ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
