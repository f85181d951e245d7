//! Skill set comparison.
//!
//! The job description is the reference: its skills define what is required.
//! The resume is the candidate: skills it has beyond the reference do not
//! count toward the match.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vocabulary::SkillPhrase;

/// A set of skill phrases, iterated and serialized in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<SkillPhrase>);

impl SkillSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the set contains `phrase`.
    pub fn contains(&self, phrase: &SkillPhrase) -> bool {
        self.0.contains(phrase)
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Phrases in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillPhrase> {
        self.0.iter()
    }

    /// Phrases common to both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Phrases in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Phrases in lexicographic order, as owned strings.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<SkillPhrase> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillPhrase>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a SkillPhrase;
    type IntoIter = std::collections::btree_set::Iter<'a, SkillPhrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of comparing candidate skills against reference skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchResult {
    /// Reference skills the candidate has.
    pub matched: SkillSet,
    /// Reference skills the candidate lacks.
    pub missing: SkillSet,
    /// `floor(100 * |matched| / |reference|)`, or 0 for an empty reference.
    pub percentage: u8,
}

/// Compare a candidate's skills against the reference skills.
#[tracing::instrument(skip_all, fields(candidate = candidate.len(), reference = reference.len()))]
pub fn match_skills(candidate: &SkillSet, reference: &SkillSet) -> MatchResult {
    let matched = reference.intersection(candidate);
    let missing = reference.difference(candidate);
    let percentage = coverage_percent(matched.len(), reference.len());

    tracing::debug!(
        matched = matched.len(),
        missing = missing.len(),
        percentage,
        "compared skill sets"
    );

    MatchResult {
        matched,
        missing,
        percentage,
    }
}

/// Integer percentage of `part` over `whole`, rounded down.
fn coverage_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let pct = part.min(whole) * 100 / whole;
    // part <= whole, so pct <= 100
    u8::try_from(pct).unwrap_or(100)
}
