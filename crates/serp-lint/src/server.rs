//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes project functionality over the MCP protocol, making it
//! available to AI assistants (Claude Code, Cursor, etc.) via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer — it wraps the same core library that
//! the CLI commands use. Each `#[tool]` method should delegate to core library
//! functions rather than implementing business logic directly.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use serp_lint_core::config::Config;
use serp_lint_core::rules::ResolvedChecks;
use serp_lint_core::{ProductContent, lint, readability, seo};

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

/// Parameters for the `score_seo` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreSeoParams {
    /// The product content to score.
    pub product: ProductContent,
}

/// Parameters for the `score_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreReadabilityParams {
    /// The description HTML to score.
    pub html: String,
}

/// Parameters for the `lint_product` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LintProductParams {
    /// The product content to lint.
    pub product: ProductContent,
    /// Minimum acceptable SEO score (0-100).
    pub min_seo: Option<u8>,
    /// Minimum acceptable readability score (0-100).
    pub min_readability: Option<u8>,
}

/// MCP server exposing project functionality to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProductServer {
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl ProductServer {
    /// Create a new MCP server instance.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Reject oversized descriptions before scoring.
    fn check_input_size(&self, len: usize) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && len > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
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
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
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

    /// Score a product's on-page SEO.
    #[tool(
        description = "Score a product's on-page SEO: 17 checks over title, slug, description HTML, meta fields, keyphrases, and image alt text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_seo(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ScoreSeoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_seo", slug = %params.product.slug, "executing MCP tool");
        self.check_input_size(params.product.description_html.len())?;

        let report = seo::score_seo(&params.product);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "score_seo",
            percentage = report.percentage,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score description readability.
    #[tool(
        description = "Score description readability: 7 checks covering passive voice, paragraph and sentence length, repeated openers, subheadings, and transition words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_readability(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ScoreReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "score_readability",
            html_len = params.html.len(),
            "executing MCP tool"
        );
        self.check_input_size(params.html.len())?;

        let report = readability::score_readability(&params.html);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "score_readability",
            percentage = report.percentage,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Run both scorers and gate a product against minimum scores.
    #[tool(
        description = "Run both scorers against a product and gate the result on minimum SEO and readability scores. Returns pass/fail with full reports."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", slug = %params.product.slug))]
    fn lint_product(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<LintProductParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "lint_product", slug = %params.product.slug, "executing MCP tool");
        self.check_input_size(params.product.description_html.len())?;

        let config = Config {
            min_seo_score: params.min_seo,
            min_readability_score: params.min_readability,
            ..Config::default()
        };
        let resolved = ResolvedChecks {
            seo: Some(Default::default()),
            readability: Some(Default::default()),
        };
        let report = lint::run_lint(&params.product, &resolved, &config);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "lint_product", pass = report.pass, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProductServer {
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
                "{} MCP server. Use tools to interact with project functionality.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn server() -> ProductServer {
        ProductServer::new(None)
    }

    fn sample_product() -> ProductContent {
        ProductContent {
            title: "The Sea".to_string(),
            slug: "books/the-sea".to_string(),
            description_html: "<p>A quiet novel about memory and loss.</p>".to_string(),
            keyphrases: vec!["the sea".to_string()],
            ..ProductContent::default()
        }
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&server());

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let info = ServerHandler::get_info(&server());

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let info = ServerHandler::get_info(&server());

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server().get_info(params).expect("get_info should succeed");

        assert!(!result.is_error.unwrap_or(false));
        assert!(!result.content.is_empty());

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server().get_info(params).expect("get_info should succeed");

        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");

        // Verify it's valid JSON
        let json: serde_json::Value =
            serde_json::from_str(text).expect("output should be valid JSON");

        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn score_seo_tool_works() {
        let params = Parameters(ScoreSeoParams {
            product: sample_product(),
        });

        let result = server().score_seo(params).expect("score_seo should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["total_count"].as_u64().unwrap(), 17);
        assert!(json["percentage"].as_u64().unwrap() <= 100);
    }

    #[test]
    fn score_readability_tool_works() {
        let params = Parameters(ScoreReadabilityParams {
            html: "<p>The cat sat on the mat. The dog ran fast.</p>".to_string(),
        });

        let result = server()
            .score_readability(params)
            .expect("score_readability should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["total_count"].as_u64().unwrap(), 7);
    }

    #[test]
    fn lint_product_tool_gates_on_minimums() {
        let params = Parameters(LintProductParams {
            product: sample_product(),
            min_seo: Some(100),
            min_readability: None,
        });

        let result = server()
            .lint_product(params)
            .expect("lint_product should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert!(!json["pass"].as_bool().unwrap());
    }

    #[test]
    fn oversized_input_rejected() {
        let server = ProductServer::new(Some(8));
        let params = Parameters(ScoreReadabilityParams {
            html: "<p>Far larger than eight bytes.</p>".to_string(),
        });

        assert!(server.score_readability(params).is_err());
    }
}
