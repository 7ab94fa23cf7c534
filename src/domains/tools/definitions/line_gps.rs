//! Live GPS snapshot tool definition.

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

/// Parameters for the live GPS tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LineGpsParams {
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

/// Live GPS tool - station list plus running vehicles for one direction.
pub struct LineGpsTool;

impl LineGpsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "line_gps";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the station list of a line together with the real-time positions of its running vehicles, for one direction (1 = main, 2 = return).";

    /// Execute the tool logic. The direction flag is validated before any
    /// network I/O happens.
    pub async fn execute(
        client: &TransitClient,
        params: &LineGpsParams,
    ) -> Result<CallToolResult, McpError> {
        let direction = parse_direction(params.direction)?;
        info!(
            "Fetching GPS snapshot for line {} direction {}",
            params.line_id, direction
        );

        match client.line_gps_data(&params.line_id, direction).await {
            Ok(snapshot) => pretty_result(&snapshot),
            Err(e) => Ok(upstream_error_result(&e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LineGpsParams>(),
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
                let params: LineGpsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &params).await
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UpstreamConfig;
    use crate::domains::tools::definitions::common::result_text;
    use crate::domains::transit::models::{LineGpsData, LineStationInfoTemp, VehicleGpsInfo};

    fn test_client(server: &mockito::ServerGuard) -> TransitClient {
        TransitClient::new(&UpstreamConfig {
            base_url: server.url(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn fixture() -> LineGpsData {
        LineGpsData {
            vehicles: vec![VehicleGpsInfo {
                line_id: "39".into(),
                vehicle_licence: "皖G12345".into(),
                current_station_id: "S3".into(),
                current_station_vehicle_count: 1,
                is_operate: true,
            }],
            stations: vec![LineStationInfoTemp {
                line_id: "39".into(),
                station_id: "S3".into(),
                direction: 1,
                station_name: "淮河大道".into(),
            }],
        }
    }

    #[test]
    fn test_params_reject_non_integer_direction() {
        let result: Result<LineGpsParams, _> =
            serde_json::from_value(serde_json::json!({"lineid": "39", "direction": 1.5}));
        assert!(result.is_err());

        let result: Result<LineGpsParams, _> =
            serde_json::from_value(serde_json::json!({"lineid": "39", "direction": -1}));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_direction_rejected_before_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetLineStationGpsData")
            .match_query(mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        for flag in [0u8, 3] {
            let params = LineGpsParams {
                line_id: "39".into(),
                direction: flag,
            };
            let err = LineGpsTool::execute(&test_client(&server), &params)
                .await
                .unwrap_err();
            assert!(err.message.contains("direction"));
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_execute_both_directions_pass_literal_flag() {
        let snapshot = fixture();

        for (flag, literal) in [(1u8, "1"), (2u8, "2")] {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("GET", "/GetLineStationGpsData")
                .match_query(mockito::Matcher::AllOf(vec![
                    mockito::Matcher::UrlEncoded("lineid".into(), "39".into()),
                    mockito::Matcher::UrlEncoded("direction".into(), literal.into()),
                ]))
                .with_status(200)
                .with_body(serde_json::to_string(&snapshot).unwrap())
                .create_async()
                .await;

            let params = LineGpsParams {
                line_id: "39".into(),
                direction: flag,
            };
            let result = LineGpsTool::execute(&test_client(&server), &params)
                .await
                .unwrap();

            mock.assert_async().await;
            assert_eq!(
                result_text(&result),
                serde_json::to_string_pretty(&snapshot).unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_execute_surfaces_upstream_failure() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetLineStationGpsData")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let params = LineGpsParams {
            line_id: "39".into(),
            direction: 1,
        };
        let result = LineGpsTool::execute(&test_client(&server), &params)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("500"));
    }
}
