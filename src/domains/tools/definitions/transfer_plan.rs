//! Transfer plan tool definition.

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

/// Parameters for the transfer plan tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferPlanParams {
    /// Boarding station name in Chinese.
    #[schemars(description = "Start station name (Chinese), e.g. `铜陵站`")]
    pub start_station_name: String,

    /// Destination station name in Chinese.
    #[schemars(description = "End station name (Chinese), e.g. `铜陵北站`")]
    pub end_station_name: String,
}

/// Transfer plan tool - route alternatives between two stations.
pub struct TransferPlanTool;

impl TransferPlanTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "transfer_plan";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Query transfer plans between a start and an end station. Each result is one alternative route with its ordered sequence of legs.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &TransitClient,
        params: &TransferPlanParams,
    ) -> Result<CallToolResult, McpError> {
        info!(
            "Planning transfer from {} to {}",
            params.start_station_name, params.end_station_name
        );

        match client
            .transfer_plans(&params.start_station_name, &params.end_station_name)
            .await
        {
            Ok(plans) => pretty_result(&plans),
            Err(e) => Ok(upstream_error_result(&e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TransferPlanParams>(),
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
                let params: TransferPlanParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &params).await
            }
            .boxed()
        })
    }
}
