//! Skill extraction.
//!
//! Every eligible vocabulary phrase is compiled once into a word-boundary
//! regex of the form `\b tok1 \s+ tok2 ... \b`. A phrase is present in a
//! document when its pattern matches anywhere in the normalized text.

use regex::Regex;
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::matcher::SkillSet;
use crate::normalize::{NormalizedText, normalize};
use crate::vocabulary::{SkillPhrase, Vocabulary};

/// Compiled matcher for a vocabulary.
///
/// Cheap to share: extraction only reads the compiled patterns.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    patterns: Vec<(SkillPhrase, Regex)>,
}

impl SkillExtractor {
    /// Compile match patterns for every entry the vocabulary does not exclude.
    #[tracing::instrument(skip_all, fields(entries = vocab.len()))]
    pub fn new(vocab: &Vocabulary) -> AnalysisResult<Self> {
        let patterns = vocab
            .eligible()
            .map(|entry| {
                let pattern = phrase_pattern(&entry.phrase);
                Regex::new(&pattern)
                    .map(|re| (entry.phrase.clone(), re))
                    .map_err(|source| AnalysisError::Pattern {
                        phrase: entry.phrase.to_string(),
                        source,
                    })
            })
            .collect::<AnalysisResult<Vec<_>>>()?;

        debug!(
            compiled = patterns.len(),
            skipped = vocab.len() - patterns.len(),
            "compiled skill patterns"
        );
        Ok(Self { patterns })
    }

    /// Extractor for the built-in vocabulary.
    pub fn builtin() -> AnalysisResult<Self> {
        Self::new(Vocabulary::builtin())
    }

    /// Number of phrases this extractor can find.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the extractor has no phrases to look for.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Return the set of vocabulary phrases present in `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.as_str().len()))]
    pub fn extract(&self, text: &NormalizedText) -> SkillSet {
        let found: SkillSet = self
            .patterns
            .iter()
            .filter(|(_, re)| re.is_match(text.as_str()))
            .map(|(phrase, _)| phrase.clone())
            .collect();
        debug!(found = found.len(), "extracted skills");
        found
    }
}

/// Normalize raw text and extract skills from it.
pub fn extract_skills(raw: &str, extractor: &SkillExtractor) -> SkillSet {
    extractor.extract(&normalize(raw))
}

/// Build the boundary pattern for a phrase.
fn phrase_pattern(phrase: &SkillPhrase) -> String {
    let body = phrase
        .tokens()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    format!(r"\b{body}\b")
}
