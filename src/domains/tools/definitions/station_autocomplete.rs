//! Station name autocomplete tool definition.

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

/// Parameters for the station autocomplete tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StationAutocompleteParams {
    /// Pinyin-initial fragment of the station name.
    #[schemars(description = "Pinyin initials of the station name, e.g. `cy` matches 陈瑶湖镇")]
    pub station_name: String,
}

/// Station autocomplete tool - resolves pinyin initials to station names.
pub struct StationAutocompleteTool;

impl StationAutocompleteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "station_autocomplete";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up full station names matching a pinyin-initial fragment (e.g. `cy` matches 陈瑶湖镇). Only pinyin initials are supported, not Chinese text. The upstream service returns at most the first 10 matches.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &TransitClient,
        params: &StationAutocompleteParams,
    ) -> Result<CallToolResult, McpError> {
        info!("Autocompleting station name: {}", params.station_name);

        match client.station_name_autocomplete(&params.station_name).await {
            Ok(names) => pretty_result(&names),
            Err(e) => Ok(upstream_error_result(&e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<StationAutocompleteParams>(),
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
                let params: StationAutocompleteParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &params).await
            }
            .boxed()
        })
    }
}
