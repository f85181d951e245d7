//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes skill extraction and resume analysis over stdio so assistants can
//! call them as tools. Each `#[tool]` method delegates to `skillgap_core`;
//! no matching logic lives here.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use skillgap_core::{
    AnalysisResult, SkillExtractor, SkillGapReport, SkillSet, analyze, check_inputs,
    extract_skills, markdown,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `extract_skills` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractSkillsParams {
    /// The document text to scan.
    pub text: String,
    /// Whether to strip markdown formatting before extraction.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `analyze_resume` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeResumeParams {
    /// Resume text.
    pub resume_text: String,
    /// Job description text.
    pub jd_text: String,
    /// Whether to strip markdown formatting from both texts.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Minimum acceptable match percentage (0-100).
    pub min_match: Option<u8>,
}

#[derive(Serialize)]
struct ExtractSkillsResponse {
    count: usize,
    skills: SkillSet,
}

#[derive(Serialize)]
struct AnalyzeResumeResponse {
    #[serde(flatten)]
    report: SkillGapReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pass: Option<bool>,
}

/// MCP server exposing skill-gap analysis to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    extractor: Arc<SkillExtractor>,
    max_input_bytes: Option<usize>,
}

#[tool_router]
impl ProjectServer {
    /// Create a server over the built-in vocabulary.
    ///
    /// `max_input_bytes` bounds each text parameter; `None` disables the check.
    pub fn new(max_input_bytes: Option<usize>) -> AnalysisResult<Self> {
        Ok(Self {
            tool_router: Self::tool_router(),
            extractor: Arc::new(SkillExtractor::builtin()?),
            max_input_bytes,
        })
    }

    fn check_size(&self, field: &str, text: &str) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {field} is {} bytes (limit: {max} bytes)",
                    text.len()
                ),
                None,
            ));
        }
        Ok(())
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List the vocabulary skills named in a document.
    #[tool(
        description = "Extract known technical skills from text. Returns the sorted skill list and its size."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_skills(
        &self,
        Parameters(params): Parameters<ExtractSkillsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "extract_skills",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size("text", &params.text)?;

        let text = if params.strip_markdown {
            markdown::to_plain_text(&params.text)
        } else {
            params.text
        };
        let skills = extract_skills(&text, &self.extractor);
        let response = ExtractSkillsResponse {
            count: skills.len(),
            skills,
        };

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "extract_skills",
            count = response.count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Compare a resume against a job description.
    #[tool(
        description = "Compare resume text against a job description. Returns matched and missing skills, the match percentage, and improvement suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_resume(
        &self,
        Parameters(params): Parameters<AnalyzeResumeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_resume",
            strip_md = params.strip_markdown,
            min_match = ?params.min_match,
            "executing MCP tool"
        );
        self.check_size("resume_text", &params.resume_text)?;
        self.check_size("jd_text", &params.jd_text)?;

        let (resume, jd) = if params.strip_markdown {
            (
                markdown::to_plain_text(&params.resume_text),
                markdown::to_plain_text(&params.jd_text),
            )
        } else {
            (params.resume_text, params.jd_text)
        };

        check_inputs(&resume, &jd).map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let report = analyze(&resume, &jd, &self.extractor);
        let response = AnalyzeResumeResponse {
            pass: params.min_match.map(|min| report.meets(min)),
            report,
        };

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_resume",
            match_percentage = response.report.match_percentage,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_resume to compare a resume with a job description, \
                 or extract_skills to list the skills in one document.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
