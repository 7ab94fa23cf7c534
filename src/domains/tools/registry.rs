//! Tool Registry - central metadata for all tools.
//!
//! This module is the single source of truth for which tools exist; the
//! router in `router.rs` must stay in sync with it (enforced by a test).

use rmcp::model::Tool;

use super::definitions::{
    LineGpsTool, LineInfoTool, LinesByStationTool, NextDepartureTool, ServiceNoticeTool,
    StationAutocompleteTool, TransferPlanTool,
};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            StationAutocompleteTool::NAME,
            ServiceNoticeTool::NAME,
            LineInfoTool::NAME,
            LinesByStationTool::NAME,
            LineGpsTool::NAME,
            NextDepartureTool::NAME,
            TransferPlanTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            StationAutocompleteTool::to_tool(),
            ServiceNoticeTool::to_tool(),
            LineInfoTool::to_tool(),
            LinesByStationTool::to_tool(),
            LineGpsTool::to_tool(),
            NextDepartureTool::to_tool(),
            TransferPlanTool::to_tool(),
        ]
    }
}
