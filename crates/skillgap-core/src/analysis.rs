//! Resume vs. job description analysis.
//!
//! [`analyze`] is the single entry point a presentation layer needs: it takes
//! the two extracted texts and returns everything there is to show. It is
//! total over all inputs; callers that want to refuse empty documents use
//! [`check_inputs`] first.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AnalysisError, AnalysisResult, InputKind};
use crate::extract::SkillExtractor;
use crate::matcher::{SkillSet, match_skills};
use crate::normalize::normalize;
use crate::suggestions::suggest;

/// Full result of comparing a resume against a job description.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SkillGapReport {
    /// Skills found in the resume.
    pub resume_skills: SkillSet,
    /// Skills found in the job description.
    pub jd_skills: SkillSet,
    /// Job description skills the resume covers.
    pub matched: SkillSet,
    /// Job description skills the resume lacks.
    pub missing: SkillSet,
    /// Share of job description skills covered, 0--100, rounded down.
    pub match_percentage: u8,
    /// Improvement tips.
    pub suggestions: Vec<String>,
    /// Skills to learn; always equal to `missing`.
    pub to_learn: SkillSet,
}

impl SkillGapReport {
    /// Whether the match percentage reaches `min_percent`.
    pub const fn meets(&self, min_percent: u8) -> bool {
        self.match_percentage >= min_percent
    }

    /// Whether the resume covers every job description skill.
    ///
    /// False when the job description has no recognised skills at all.
    pub fn is_full_match(&self) -> bool {
        !self.jd_skills.is_empty() && self.missing.is_empty()
    }
}

/// Refuse inputs with no alphanumeric content.
///
/// The resume is checked first, matching the order a user supplies them.
pub fn check_inputs(resume_text: &str, jd_text: &str) -> AnalysisResult<()> {
    if normalize(resume_text).is_blank() {
        return Err(AnalysisError::EmptyInput {
            which: InputKind::Resume,
        });
    }
    if normalize(jd_text).is_blank() {
        return Err(AnalysisError::EmptyInput {
            which: InputKind::JobDescription,
        });
    }
    Ok(())
}

/// Compare a resume against a job description.
///
/// The job description is the reference set: the percentage is the share of
/// its skills that also appear in the resume.
#[tracing::instrument(
    skip_all,
    fields(resume_len = resume_text.len(), jd_len = jd_text.len())
)]
pub fn analyze(resume_text: &str, jd_text: &str, extractor: &SkillExtractor) -> SkillGapReport {
    let resume_skills = extractor.extract(&normalize(resume_text));
    let jd_skills = extractor.extract(&normalize(jd_text));

    let result = match_skills(&resume_skills, &jd_skills);
    let suggestions = suggest(&result.missing);

    info!(
        resume_skills = resume_skills.len(),
        jd_skills = jd_skills.len(),
        matched = result.matched.len(),
        missing = result.missing.len(),
        percentage = result.percentage,
        "analysis complete"
    );

    SkillGapReport {
        resume_skills,
        jd_skills,
        to_learn: result.missing.clone(),
        matched: result.matched,
        missing: result.missing,
        match_percentage: result.percentage,
        suggestions,
    }
}
