//! Lines by station tool definition.

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

/// Parameters for the lines-by-station tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LinesByStationParams {
    /// Full station name in Chinese.
    #[schemars(description = "Station name (Chinese), e.g. `铜陵站`")]
    pub station_name: String,
}

/// Lines by station tool - every line serving the named station.
pub struct LinesByStationTool;

impl LinesByStationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "lines_by_station";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List every line passing through the named station, including each line's ordered station sequence and schedule flags.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &TransitClient,
        params: &LinesByStationParams,
    ) -> Result<CallToolResult, McpError> {
        info!("Fetching lines serving station: {}", params.station_name);

        match client.lines_by_station(&params.station_name).await {
            Ok(lines) => pretty_result(&lines),
            Err(e) => Ok(upstream_error_result(&e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LinesByStationParams>(),
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
                let params: LinesByStationParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &params).await
            }
            .boxed()
        })
    }
}
