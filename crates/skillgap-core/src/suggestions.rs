//! Resume improvement suggestions.

use crate::matcher::SkillSet;

/// Tips shown when the resume is missing required skills.
const GAP_TIPS: &[&str] = &[
    "Add projects that demonstrate the missing skills.",
    "Include certifications or online courses related to the missing skills.",
    "Highlight hands-on experience in your resume.",
    "Customize your resume keywords based on the job description.",
];

/// Shown when nothing is missing.
const NO_GAP_MESSAGE: &str = "Your resume matches the job description very well.";

/// Suggest improvements for a skill gap.
///
/// The advice is generic; only whether anything is missing matters.
pub fn suggest(missing: &SkillSet) -> Vec<String> {
    if missing.is_empty() {
        vec![NO_GAP_MESSAGE.to_string()]
    } else {
        GAP_TIPS.iter().map(|tip| (*tip).to_string()).collect()
    }
}
