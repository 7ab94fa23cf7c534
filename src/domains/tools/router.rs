//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! The router is constructed once at startup and handed to the server
//! handler; each tool definition knows how to create its own route. The
//! shared `TransitClient` is the only state a route closes over.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::transit::TransitClient;

use super::definitions::{
    LineGpsTool, LineInfoTool, LinesByStationTool, NextDepartureTool, ServiceNoticeTool,
    StationAutocompleteTool, TransferPlanTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<TransitClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(StationAutocompleteTool::create_route(client.clone()))
        .with_route(ServiceNoticeTool::create_route(client.clone()))
        .with_route(LineInfoTool::create_route(client.clone()))
        .with_route(LinesByStationTool::create_route(client.clone()))
        .with_route(LineGpsTool::create_route(client.clone()))
        .with_route(NextDepartureTool::create_route(client.clone()))
        .with_route(TransferPlanTool::create_route(client))
}
