//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use skillgap_core::{InputFormat, markdown};
use tracing::debug;

pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod skills;
pub mod vocabulary;

/// Check a file's size against the configured limit before reading it.
fn check_input_size(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<()> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }
    Ok(())
}

/// Decide how to read `path`.
///
/// An explicit `--format` wins, then the file extension, then the configured
/// default, then plain text.
pub fn resolve_format(
    path: &Utf8Path,
    explicit: Option<InputFormat>,
    default_format: Option<InputFormat>,
) -> InputFormat {
    explicit
        .or_else(|| path.extension().and_then(InputFormat::from_extension))
        .or(default_format)
        .unwrap_or(InputFormat::Text)
}

/// Read a document and return its plain text.
///
/// Markdown is flattened and PDFs are run through text extraction; the
/// result is ready for skill extraction.
pub fn read_document(
    path: &Utf8Path,
    format: InputFormat,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    check_input_size(path, max_bytes)?;
    debug!(%path, %format, "reading document");

    match format {
        InputFormat::Text => std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("failed to read {path}")),
        InputFormat::Markdown => {
            let raw = std::fs::read_to_string(path.as_std_path())
                .with_context(|| format!("failed to read {path}"))?;
            Ok(markdown::to_plain_text(&raw))
        }
        InputFormat::Pdf => pdf_extract::extract_text(path.as_std_path())
            .map_err(|e| anyhow::anyhow!("failed to extract text from PDF {path}: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn explicit_format_wins() {
        let path = Utf8Path::new("resume.md");
        assert_eq!(
            resolve_format(path, Some(InputFormat::Text), Some(InputFormat::Pdf)),
            InputFormat::Text
        );
    }

    #[test]
    fn extension_beats_configured_default() {
        let path = Utf8Path::new("resume.PDF");
        assert_eq!(
            resolve_format(path, None, Some(InputFormat::Markdown)),
            InputFormat::Pdf
        );
    }

    #[test]
    fn unknown_extension_uses_default_then_text() {
        let path = Utf8Path::new("job.posting");
        assert_eq!(
            resolve_format(path, None, Some(InputFormat::Markdown)),
            InputFormat::Markdown
        );
        assert_eq!(resolve_format(path, None, None), InputFormat::Text);
    }

    #[test]
    fn oversized_input_rejected_before_reading() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.txt")).unwrap();
        std::fs::write(&path, "python ".repeat(100)).unwrap();

        let err = read_document(&path, InputFormat::Text, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_document(&path, InputFormat::Text, None).is_ok());
    }

    /// A one-page PDF showing `text` in Helvetica.
    fn one_page_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_at = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for off in offsets {
            xref.push_str(&format!("{off:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    #[test]
    fn pdf_text_is_extracted() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("resume.pdf")).unwrap();
        std::fs::write(&path, one_page_pdf("Python SQL Docker")).unwrap();

        let text = read_document(&path, InputFormat::Pdf, None).unwrap();
        let extractor = skillgap_core::SkillExtractor::builtin().unwrap();
        let skills = skillgap_core::extract_skills(&text, &extractor);
        assert_eq!(skills.to_sorted_vec(), vec!["docker", "python", "sql"]);
    }

    #[test]
    fn malformed_pdf_is_a_clean_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("resume.pdf")).unwrap();
        std::fs::write(&path, "%PDF-1.4\nnot really a pdf python").unwrap();

        let err = read_document(&path, InputFormat::Pdf, None).unwrap_err();
        assert!(
            err.to_string().contains("failed to extract text from PDF"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn pdf_size_limit_checked_before_extraction() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("resume.pdf")).unwrap();
        std::fs::write(&path, one_page_pdf("Python")).unwrap();

        let err = read_document(&path, InputFormat::Pdf, Some(16)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn markdown_is_flattened() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("resume.md")).unwrap();
        std::fs::write(&path, "# Skills\n\n- **Docker**\n- [AWS](https://aws.amazon.com)\n").unwrap();

        let text = read_document(&path, InputFormat::Markdown, None).unwrap();
        assert!(text.contains("Docker"));
        assert!(text.contains("AWS"));
        assert!(!text.contains("amazon.com"));
    }
}
