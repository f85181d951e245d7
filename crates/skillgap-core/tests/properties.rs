//! Property tests for normalization, extraction and matching.

use proptest::prelude::*;
use skillgap_core::{
    SkillExtractor, SkillPhrase, SkillSet, Vocabulary, extract_skills, match_skills, normalize,
};

/// Matchable phrases of the built-in vocabulary.
fn builtin_phrases() -> Vec<SkillPhrase> {
    Vocabulary::builtin()
        .eligible()
        .map(|entry| entry.phrase.clone())
        .collect()
}

/// Arbitrary subsets of the built-in vocabulary.
fn vocab_subset() -> impl Strategy<Value = SkillSet> {
    let phrases = builtin_phrases();
    proptest::collection::vec(any::<bool>(), phrases.len()).prop_map(move |mask| {
        phrases
            .iter()
            .zip(mask)
            .filter(|(_, keep)| *keep)
            .map(|(phrase, _)| phrase.clone())
            .collect()
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_output_is_lowercase_alphanumeric_words(s in any::<String>()) {
        let out = normalize(&s);
        let out = out.as_str();
        prop_assert!(
            out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '),
            "unexpected character in {:?}", out
        );
        prop_assert!(!out.contains("  "), "double space in {:?}", out);
    }

    #[test]
    fn match_obeys_set_laws(candidate in vocab_subset(), reference in vocab_subset()) {
        let result = match_skills(&candidate, &reference);

        prop_assert_eq!(&result.matched, &reference.intersection(&candidate));
        prop_assert_eq!(&result.missing, &reference.difference(&candidate));
        prop_assert!(result.matched.intersection(&result.missing).is_empty());
        prop_assert_eq!(result.matched.len() + result.missing.len(), reference.len());
        prop_assert!(result.percentage <= 100);
        if reference.is_empty() {
            prop_assert_eq!(result.percentage, 0);
        } else {
            let expected = result.matched.len() * 100 / reference.len();
            prop_assert_eq!(usize::from(result.percentage), expected);
        }
    }

    #[test]
    fn single_character_phrases_never_extracted(
        s in "[a-zA-Z0-9 ,.+#/()\\-]{0,200}",
    ) {
        let vocab = Vocabulary::from_phrases(["c", "r", "x", "7", "go", "sql"]).unwrap();
        let extractor = SkillExtractor::new(&vocab).unwrap();
        let found = extract_skills(&s, &extractor);
        prop_assert!(found.iter().all(|p| p.char_len() >= 2), "found {:?}", found);
    }

    #[test]
    fn builtin_never_extracts_single_letter_c(s in any::<String>()) {
        let extractor = SkillExtractor::builtin().unwrap();
        let found = extract_skills(&s, &extractor);
        prop_assert!(found.iter().all(|p| p.char_len() >= 2), "found {:?}", found);
    }

    #[test]
    fn extracted_skills_come_from_the_vocabulary(s in any::<String>()) {
        let extractor = SkillExtractor::builtin().unwrap();
        let known = builtin_phrases();
        for phrase in &extract_skills(&s, &extractor) {
            prop_assert!(known.contains(phrase), "unknown phrase {}", phrase);
        }
    }
}
