//! Service notice tool definition.

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

use super::common::{text_result, upstream_error_result};
use crate::domains::transit::TransitClient;

/// The notice tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ServiceNoticeParams {}

/// Service notice tool - relays the operator's current announcement.
pub struct ServiceNoticeTool;

impl ServiceNoticeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "service_notice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch the current system announcement. The body is returned verbatim and may be HTML or plain text.";

    /// Execute the tool logic. The body is passed through unmodified,
    /// markup included.
    pub async fn execute(client: &TransitClient) -> Result<CallToolResult, McpError> {
        info!("Fetching service notice");

        match client.notice().await {
            Ok(body) => Ok(text_result(body)),
            Err(e) => Ok(upstream_error_result(&e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ServiceNoticeParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            async move { Self::execute(&client).await }.boxed()
        })
    }
}
