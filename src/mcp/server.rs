use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    context::{ContextOverrides, SyncContext},
    core::{generate_override, merge},
    resources::split_lines,
};

use super::types::{
    CheckOverridesParams, ConfigDto, ConfigValues, GetConfigParams, MergeLinesParams,
    MergeLinesResult, SyncOverridesParams, SyncResult,
};

#[derive(Clone)]
pub struct LangsyncMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for LangsyncMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl LangsyncMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current langsync configuration
    #[tool(description = "Get the current langsync configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Report what a sync would do without writing anything
    #[tool(
        description = "Report, per language and file, whether the override file would be created, merged or is up to date. Writes nothing."
    )]
    pub async fn check_overrides(
        &self,
        params: Parameters<CheckOverridesParams>,
    ) -> Result<CallToolResult, McpError> {
        run_project(&params.0.project_root_path, false)
    }

    /// Create and merge override files
    #[tool(
        description = "Create missing override files and merge new default keys into existing ones as disabled entries. Active user entries are never modified."
    )]
    pub async fn sync_overrides(
        &self,
        params: Parameters<SyncOverridesParams>,
    ) -> Result<CallToolResult, McpError> {
        run_project(&params.0.project_root_path, true)
    }

    /// Merge in-memory text
    #[tool(
        description = "Merge default .lang text into user override text and return the result. Without userText, returns a new override with every entry disabled."
    )]
    pub async fn merge_lines(
        &self,
        params: Parameters<MergeLinesParams>,
    ) -> Result<CallToolResult, McpError> {
        let default_lines = split_lines(&params.0.default_text);

        let result = match &params.0.user_text {
            Some(user_text) => {
                let output = merge(&default_lines, &split_lines(user_text));
                MergeLinesResult {
                    changed: output.has_changes(),
                    added_count: output.added_count,
                    updated_count: output.updated_count,
                    text: join_lines(&output.lines),
                }
            }
            None => MergeLinesResult {
                changed: true,
                added_count: 0,
                updated_count: 0,
                text: join_lines(&generate_override(&default_lines)),
            },
        };

        to_tool_result(&result)
    }
}

fn run_project(project_root_path: &str, apply: bool) -> Result<CallToolResult, McpError> {
    let ctx = SyncContext::new(
        Path::new(project_root_path),
        ContextOverrides::default(),
        false,
    )
    .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;

    let outcome = ctx
        .run(apply)
        .map_err(|e| McpError::internal_error(format!("Sync failed: {:#}", e), None))?;

    to_tool_result(&SyncResult::from_outcome(outcome, apply))
}

fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for LangsyncMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "langsync keeps user .lang override files in sync with the default language files.\n\n\
                 Override files hold the user's own translations as active `key=value` lines; every\n\
                 other default entry is present as a disabled `# key=value` comment.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. check_overrides - Show which override files would change (read-only)\n\
                 3. sync_overrides - Create and merge override files on disk\n\
                 4. merge_lines - Merge default text into user text in memory\n\n\
                 Recommended Workflow:\n\
                 1. Use check_overrides to see pending changes\n\
                 2. Run sync_overrides to write them\n\n\
                 Active entries are never modified. To customize a value, enable its line in the\n\
                 override file by removing the leading `# `."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LangsyncMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
