//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod line_gps;
pub mod line_info;
pub mod lines_by_station;
pub mod next_departure;
pub mod notice;
pub mod station_autocomplete;
pub mod transfer_plan;

pub use line_gps::{LineGpsParams, LineGpsTool};
pub use line_info::{LineInfoParams, LineInfoTool};
pub use lines_by_station::{LinesByStationParams, LinesByStationTool};
pub use next_departure::{NextDepartureParams, NextDepartureTool};
pub use notice::ServiceNoticeTool;
pub use station_autocomplete::{StationAutocompleteParams, StationAutocompleteTool};
pub use transfer_plan::{TransferPlanParams, TransferPlanTool};
