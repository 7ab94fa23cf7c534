//! Upstream endpoint documentation resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Endpoint documentation resource (static Markdown).
pub struct EndpointsDocResource;

impl ResourceDefinition for EndpointsDocResource {
    const URI: &'static str = "mcp://server/docs/endpoints";
    const NAME: &'static str = "Tool and Endpoint Documentation";
    const DESCRIPTION: &'static str =
        "Documentation of the available tools and the upstream endpoints behind them";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(DOCUMENTATION.to_string())
    }
}

const DOCUMENTATION: &str = r#"# Tongling Transit MCP Server

Each tool issues a single GET request against the upstream touch-screen API
and relays the response.

## Available Tools

| Tool | Upstream path | Parameters |
|---|---|---|
| `station_autocomplete` | `/GetStationName` | `station_name` (pinyin initials) |
| `service_notice` | `/getNotice` | none |
| `line_info` | `/GetLineInfoByLine` | `line_name` |
| `lines_by_station` | `/GetLineInfosByStation` | `station_name` |
| `line_gps` | `/GetLineStationGpsData` | `lineid`, `direction` (1 or 2) |
| `next_departure` | `/GetLinePlanInfos` | `lineid`, `direction` (1 or 2) |
| `transfer_plan` | `/GetTransferInfo` | `start_station_name`, `end_station_name` |

Direction 1 is the main route direction, 2 the return direction.

Station autocomplete expects pinyin initials (`cy` matches 陈瑶湖镇) and the
upstream returns at most the first 10 matches. Station names for the other
tools are full Chinese names, e.g. `铜陵站`.

## Available Prompts

- `plan_trip`: plan a route between two stations
- `next_bus`: find the next departure of a line
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_doc_metadata() {
        assert_eq!(EndpointsDocResource::URI, "mcp://server/docs/endpoints");
        assert_eq!(EndpointsDocResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_endpoints_doc_lists_all_tools() {
        match EndpointsDocResource::content() {
            ResourceContent::Text(text) => {
                for name in [
                    "station_autocomplete",
                    "service_notice",
                    "line_info",
                    "lines_by_station",
                    "line_gps",
                    "next_departure",
                    "transfer_plan",
                ] {
                    assert!(text.contains(name), "missing {}", name);
                }
            }
            _ => panic!("Expected Text content"),
        }
    }
}
