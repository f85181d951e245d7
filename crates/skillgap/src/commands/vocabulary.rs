//! Vocabulary command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use skillgap_core::Vocabulary;
use tracing::{debug, instrument};

/// Arguments for the `vocabulary` subcommand.
#[derive(Args, Debug, Default)]
pub struct VocabularyArgs {
    /// Hide entries that are never matched.
    #[arg(long)]
    pub matchable_only: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct VocabularyRow<'a> {
    phrase: &'a str,
    matchable: bool,
}

fn rows(vocab: &Vocabulary, matchable_only: bool) -> Vec<VocabularyRow<'_>> {
    vocab
        .entries()
        .iter()
        .map(|entry| VocabularyRow {
            phrase: entry.phrase.as_str(),
            matchable: !vocab.is_excluded(entry),
        })
        .filter(|row| row.matchable || !matchable_only)
        .collect()
}

/// Print the built-in skill vocabulary.
#[instrument(name = "cmd_vocabulary", skip_all)]
pub fn cmd_vocabulary(args: VocabularyArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(matchable_only = args.matchable_only, "executing vocabulary command");

    let vocab = Vocabulary::builtin();
    let rows = rows(vocab, args.matchable_only);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        if row.matchable {
            println!("{}", row.phrase);
        } else {
            println!("{} {}", row.phrase.dimmed(), "(excluded)".yellow());
        }
    }

    Ok(())
}
