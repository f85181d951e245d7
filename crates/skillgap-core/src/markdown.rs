//! Markdown flattening.
//!
//! Resumes and job descriptions are often kept as markdown. Skill extraction
//! wants every visible word, so unlike a prose stripper this keeps headings,
//! list items, table cells and code, and drops only markup, link targets and
//! YAML frontmatter.

use pulldown_cmark::{Event, Options, Parser, TagEnd};

/// Flatten markdown to its visible text.
///
/// Block boundaries become spaces so adjacent blocks never glue words
/// together.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn to_plain_text(text: &str) -> String {
    // pulldown-cmark doesn't know about frontmatter
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());

    for event in parser {
        match event {
            Event::Text(t) | Event::Code(t) => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak => result.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::BlockQuote(_)
                | TagEnd::TableCell,
            ) => result.push(' '),
            _ => {}
        }
    }

    result
}

/// Strip YAML frontmatter delimited by `---` lines.
///
/// The first line must be exactly `---`, the block must open with a
/// `key:` line, and it must close on a line that is exactly `---` or `...`.
/// Anything else (a leading thematic break, say) is left alone.
fn strip_frontmatter(text: &str) -> &str {
    let Some(body) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return text;
    };

    let opens_with_key = body
        .lines()
        .next()
        .and_then(|line| line.split_once(':'))
        .is_some_and(|(key, _)| is_yaml_key(key));
    if !opens_with_key {
        return text;
    }

    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let bare = line.trim_end_matches(['\n', '\r']);
        offset += line.len();
        if bare == "---" || bare == "..." {
            return &body[offset..];
        }
    }
    text
}

fn is_yaml_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' '))
        && !key.starts_with([' ', '-'])
}
