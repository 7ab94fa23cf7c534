//! Next departure tool definition.

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

use super::common::{parse_direction, pretty_result, upstream_error_result};
use crate::domains::transit::TransitClient;

/// Parameters for the next departure tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NextDepartureParams {
    /// Identifier of the line to query.
    #[schemars(description = "Line ID")]
    #[serde(rename = "lineid")]
    pub line_id: String,

    /// Travel direction flag.
    #[schemars(
        description = "Direction: 1 for the main direction, 2 for the return direction",
        range(min = 1, max = 2)
    )]
    pub direction: u8,
}

/// Next departure tool - the next scheduled departure time.
pub struct NextDepartureTool;

impl NextDepartureTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "next_departure";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the next scheduled departure time for a line in one direction (1 = main, 2 = return).";

    /// Execute the tool logic. The direction flag is validated before any
    /// network I/O happens.
    pub async fn execute(
        client: &TransitClient,
        params: &NextDepartureParams,
    ) -> Result<CallToolResult, McpError> {
        let direction = parse_direction(params.direction)?;
        info!(
            "Fetching next departure for line {} direction {}",
            params.line_id, direction
        );

        match client.next_departure(&params.line_id, direction).await {
            Ok(plan) => pretty_result(&plan),
            Err(e) => Ok(upstream_error_result(&e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NextDepartureParams>(),
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
                let params: NextDepartureParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &params).await
            }
            .boxed()
        })
    }
}
