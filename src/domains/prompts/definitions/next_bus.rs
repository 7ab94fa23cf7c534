//! Next bus prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Guided lookup of the next departure for a line.
pub struct NextBusPrompt;

impl PromptDefinition for NextBusPrompt {
    const NAME: &'static str = "next_bus";
    const DESCRIPTION: &'static str = "Find the next departure of a bus line";

    fn template() -> &'static str {
        r#"When does the next bus of line {{line}} leave? Requested direction: {{direction}}

1. Resolve the line ID with the `line_info` tool using the line name.
2. Call `next_departure` with that line ID. Use the requested direction if
   one was given above (1 = main, 2 = return), otherwise check both.
3. Report the departure time, and mention the line's first/last departure
   times if the next departure is far away."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "line".to_string(),
                title: None,
                description: Some("Line name, e.g. 39 or T3".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "direction".to_string(),
                title: None,
                description: Some("Direction flag: 1 (main) or 2 (return)".to_string()),
                required: Some(false),
            },
        ]
    }
}
