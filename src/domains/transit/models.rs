//! Upstream response entities.
//!
//! These structs mirror the JSON shapes returned by the transit data
//! service. The upstream keys are mostly PascalCase with a handful of
//! camelCase list fields, so every struct carries serde renames that
//! reproduce the wire names exactly on re-serialization. Entities are
//! never mutated after decode; tools serialize them back verbatim.

use serde::{Deserialize, Serialize};

/// Travel direction flag as used by the upstream service.
///
/// `Main` is the primary route direction, `Sub` the return direction.
/// The upstream expects the flag as the literal text "1" or "2".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Main,
    Sub,
}

impl Direction {
    /// The query-string value the upstream expects.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Main => "1",
            Self::Sub => "2",
        }
    }

    /// Parse the numeric flag used in tool arguments. Only 1 and 2 are
    /// valid; everything else is a caller error.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            1 => Some(Self::Main),
            2 => Some(Self::Sub),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Static metadata of a transit line in one direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineInfo {
    pub line_id: String,
    pub alias_name: String,
    pub direction: u8,
    pub main_first_time: String,
    pub main_last_time: String,
    pub sub_first_time: String,
    pub sub_last_time: String,
    pub start_point: String,
    pub end_point: String,
}

/// A station's position on a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineStationInfo {
    pub line_id: String,
    pub station_id: String,
    pub direction: u8,
    pub seque_num: u32,
    pub station_name: String,
}

/// Line metadata together with its ordered station list and scheduling
/// flags, as returned by the lines-by-station endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineInfoWithStations {
    #[serde(flatten)]
    pub line: LineInfo,
    pub name: String,
    pub is_schedule: i32,
    pub up_length: f64,
    pub down_length: f64,
    #[serde(rename = "lineStationInfos")]
    pub stations: Vec<LineStationInfo>,
}

/// Live state of a single vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleGpsInfo {
    pub line_id: String,
    pub vehicle_licence: String,
    pub current_station_id: String,
    pub current_station_vehicle_count: u32,
    pub is_operate: bool,
}

/// Lightweight station reference shipped alongside GPS data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineStationInfoTemp {
    pub line_id: String,
    pub station_id: String,
    pub direction: u8,
    pub station_name: String,
}

/// Snapshot of live vehicles plus the station reference list for one
/// line/direction pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineGpsData {
    #[serde(rename = "lineGpsListTemp")]
    pub vehicles: Vec<VehicleGpsInfo>,
    #[serde(rename = "lineStationInfoTemp")]
    pub stations: Vec<LineStationInfoTemp>,
}

/// Next scheduled departure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinePlanInfo {
    pub send_time: String,
}

/// One leg of a transfer plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransferStation {
    pub begin_station: String,
    pub line_name: String,
    pub end_station: String,
}

/// A complete transfer option between two stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransferInfo {
    pub station_count: u32,
    pub transfer_stations: Vec<TransferStation>,
}
