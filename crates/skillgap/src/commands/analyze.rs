//! Analyze command: compare a resume against a job description.

use std::time::Duration;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use skillgap_core::{InputFormat, SkillExtractor, SkillGapReport, SkillSet, analyze, check_inputs};

use super::{read_document, resolve_format};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Resume to evaluate (text, markdown, or PDF).
    pub resume: Utf8PathBuf,

    /// Job description file (text, markdown, or PDF).
    #[arg(required_unless_present = "jd_text", conflicts_with = "jd_text")]
    pub job_description: Option<Utf8PathBuf>,

    /// Job description given inline instead of as a file.
    #[arg(long, value_name = "TEXT")]
    pub jd_text: Option<String>,

    /// Fail unless at least this percentage of job skills is matched.
    #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_match: Option<u8>,

    /// Read inputs as this format instead of guessing from the extension.
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
}

/// Compare a resume against a job description and report the skill gap.
#[instrument(name = "cmd_analyze", skip_all, fields(resume = %args.resume))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_match: Option<u8>,
    default_format: Option<InputFormat>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        resume = %args.resume,
        job_description = ?args.job_description,
        inline_jd = args.jd_text.is_some(),
        "executing analyze command"
    );

    let AnalyzeArgs {
        resume,
        job_description,
        jd_text,
        min_match,
        format,
    } = args;

    let spinner = if global_json {
        ProgressBar::hidden()
    } else {
        new_spinner()
    };

    let report = with_spinner(&spinner, |spinner| {
        spinner.set_message(format!("Reading {resume}"));
        let resume_format = resolve_format(&resume, format, default_format);
        let resume_text = read_document(&resume, resume_format, max_input_bytes)?;

        let jd_text = match (job_description, jd_text) {
            (Some(path), _) => {
                spinner.set_message(format!("Reading {path}"));
                let format = resolve_format(&path, format, default_format);
                read_document(&path, format, max_input_bytes)?
            }
            (None, Some(text)) => {
                if let Some(max) = max_input_bytes
                    && text.len() > max
                {
                    bail!(
                        "input too large: job description text is {} bytes (limit: {max} bytes)",
                        text.len()
                    );
                }
                text
            }
            // clap requires one of the two
            (None, None) => bail!("provide a job description file or --jd-text"),
        };

        spinner.set_message("Analyzing resume and job description");
        check_inputs(&resume_text, &jd_text)
            .with_context(|| format!("cannot analyze {resume}"))?;

        let extractor = SkillExtractor::builtin().context("failed to build skill extractor")?;
        Ok(analyze(&resume_text, &jd_text, &extractor))
    })?;

    let min_match = min_match.or(config_min_match);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    if let Some(min) = min_match {
        if !report.meets(min) {
            bail!(
                "{} matches {}% of the job description's skills (min: {min}%). Missing: {}",
                resume,
                report.match_percentage,
                join_or(&report.missing, "none"),
            );
        }
        if global_json {
            return Ok(());
        }
        println!(
            "{} {} matches {}% (min: {min}%)",
            "PASS:".green(),
            resume,
            report.match_percentage,
        );
    }

    Ok(())
}

/// Run `work` with the spinner showing, and clear it however `work` ends.
fn with_spinner<T>(
    spinner: &ProgressBar,
    work: impl FnOnce(&ProgressBar) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let result = work(spinner);
    spinner.finish_and_clear();
    result
}

fn new_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Comma-separated skills, or `empty` when there are none.
fn join_or(skills: &SkillSet, empty: &str) -> String {
    if skills.is_empty() {
        empty.to_string()
    } else {
        skills.to_sorted_vec().join(", ")
    }
}

/// Human-readable report.
fn render_report(report: &SkillGapReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}% ({} of {} job skills)\n\n",
        "Skill match:".bold(),
        report.match_percentage,
        report.matched.len(),
        report.jd_skills.len(),
    ));
    out.push_str(&format!(
        "{} {}\n",
        "Resume skills:".dimmed(),
        join_or(&report.resume_skills, "No skills detected"),
    ));
    out.push_str(&format!(
        "{} {}\n\n",
        "Job skills:   ".dimmed(),
        join_or(&report.jd_skills, "No skills detected"),
    ));
    out.push_str(&format!(
        "{} {}\n",
        "Matched:".green(),
        join_or(&report.matched, "No matched skills"),
    ));
    out.push_str(&format!(
        "{} {}\n\n",
        "Missing:".red(),
        join_or(&report.missing, "No skill gaps found"),
    ));

    out.push_str(&format!("{}\n", "Suggestions".bold().underline()));
    for tip in &report.suggestions {
        out.push_str(&format!("  - {tip}\n"));
    }

    out.push_str(&format!("\n{}\n", "Skills to learn".bold().underline()));
    if report.to_learn.is_empty() {
        out.push_str("  You already meet the job skill requirements!\n");
    } else {
        for skill in &report.to_learn {
            out.push_str(&format!("  - {skill}\n"));
        }
    }

    out
}
