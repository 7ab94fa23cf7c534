//! Trip planning prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Guided transfer planning between two stations.
pub struct PlanTripPrompt;

impl PromptDefinition for PlanTripPrompt {
    const NAME: &'static str = "plan_trip";
    const DESCRIPTION: &'static str = "Plan a bus route between two stations";

    fn template() -> &'static str {
        r#"Help me travel by bus from {{start}} to {{destination}}.

1. If either station name is not an exact Chinese station name, resolve it
   first with the `station_autocomplete` tool (it takes pinyin initials).
2. Call `transfer_plan` with the resolved start and end station names.
3. Compare the alternatives and recommend the one with the fewest transfers,
   listing each leg as: board at, line, alight at.
4. Check `service_notice` for disruptions that could affect the trip."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "start".to_string(),
                title: None,
                description: Some("Boarding station, e.g. 铜陵站".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "destination".to_string(),
                title: None,
                description: Some("Destination station, e.g. 铜陵北站".to_string()),
                required: Some(true),
            },
        ]
    }
}
