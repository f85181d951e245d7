//! Skills command: list the vocabulary skills found in one document.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use skillgap_core::{InputFormat, SkillExtractor, SkillSet, extract_skills};

use super::{read_document, resolve_format};

/// Arguments for the `skills` subcommand.
#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// Document to scan (text, markdown, or PDF).
    pub file: Utf8PathBuf,

    /// Read the file as this format instead of guessing from the extension.
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
}

#[derive(Serialize)]
struct SkillsOutput<'a> {
    file: &'a str,
    count: usize,
    skills: &'a SkillSet,
}

/// Extract and print the skills named in a single document.
#[instrument(name = "cmd_skills", skip_all, fields(file = %args.file))]
pub fn cmd_skills(
    args: SkillsArgs,
    global_json: bool,
    default_format: Option<InputFormat>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let format = resolve_format(&args.file, args.format, default_format);
    debug!(file = %args.file, %format, "executing skills command");

    let text = read_document(&args.file, format, max_input_bytes)?;
    let extractor = SkillExtractor::builtin().context("failed to build skill extractor")?;
    let skills = extract_skills(&text, &extractor);

    if global_json {
        let output = SkillsOutput {
            file: args.file.as_str(),
            count: skills.len(),
            skills: &skills,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!("{}: {}", args.file.bold(), "No skills detected".yellow());
        return Ok(());
    }

    println!(
        "{}: {} skill{}",
        args.file.bold(),
        skills.len(),
        if skills.len() == 1 { "" } else { "s" }
    );
    for skill in &skills {
        println!("  {skill}");
    }

    Ok(())
}
