//! Line info tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{pretty_result, upstream_error_result};
use crate::domains::transit::TransitClient;

/// Parameters for the line info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LineInfoParams {
    /// Display name of the line.
    #[schemars(description = "Line name, e.g. `39` or `T3`")]
    pub line_name: String,
}

/// Line info tool - static metadata for a named line.
pub struct LineInfoTool;

impl LineInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "line_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Query a line's static information by its name (e.g. `39`, `T3`): first and last departure times for both directions and the start and end stations. A name may resolve to several directions or variants.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &TransitClient,
        params: &LineInfoParams,
    ) -> Result<CallToolResult, McpError> {
        info!("Fetching line info for: {}", params.line_name);

        match client.line_info_by_name(&params.line_name).await {
            Ok(infos) => pretty_result(&infos),
            Err(e) => Ok(upstream_error_result(&e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LineInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the transport router.
    pub fn create_route<S>(client: Arc<TransitClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: LineInfoParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &params).await
            }
            .boxed()
        })
    }
}
