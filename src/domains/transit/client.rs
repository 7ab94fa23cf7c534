//! HTTP client for the upstream transit data service.
//!
//! Every public method maps one logical query onto a single GET request
//! against a fixed path under the configured base address. The client is
//! stateless apart from the shared connection pool; results are never
//! cached and failures are never retried.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{TransitError, TransitResult};
use super::models::{
    Direction, LineGpsData, LineInfo, LineInfoWithStations, LinePlanInfo, TransferInfo,
};
use crate::core::config::UpstreamConfig;

/// Client for the upstream transit HTTP surface.
#[derive(Debug, Clone)]
pub struct TransitClient {
    base_url: String,
    client: reqwest::Client,
}

impl TransitClient {
    /// Create a client with the configured base address and timeout.
    pub fn new(config: &UpstreamConfig) -> TransitResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TransitError::Client)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The base address all request paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full station names matching a pinyin-initial fragment. Truncation
    /// to the first ten matches happens upstream; whatever length arrives
    /// is passed through.
    pub async fn station_name_autocomplete(&self, station_name: &str) -> TransitResult<Vec<String>> {
        self.get_json("/GetStationName", &[("stationName", station_name)])
            .await
    }

    /// Current service notice, returned verbatim (may contain markup).
    pub async fn notice(&self) -> TransitResult<String> {
        self.get_text("/getNotice", &[]).await
    }

    /// Static line metadata for a line name. A name may resolve to several
    /// directions or variants, hence the sequence.
    pub async fn line_info_by_name(&self, line_name: &str) -> TransitResult<Vec<LineInfo>> {
        self.get_json("/GetLineInfoByLine", &[("lineName", line_name)])
            .await
    }

    /// Every line passing through the named station, with station lists.
    pub async fn lines_by_station(
        &self,
        station_name: &str,
    ) -> TransitResult<Vec<LineInfoWithStations>> {
        self.get_json("/GetLineInfosByStation", &[("stationName", station_name)])
            .await
    }

    /// Live vehicle positions plus the station reference list for one
    /// line/direction pair.
    pub async fn line_gps_data(
        &self,
        line_id: &str,
        direction: Direction,
    ) -> TransitResult<LineGpsData> {
        self.get_json(
            "/GetLineStationGpsData",
            &[("lineid", line_id), ("direction", direction.as_query_value())],
        )
        .await
    }

    /// Next scheduled departure for one line/direction pair.
    pub async fn next_departure(
        &self,
        line_id: &str,
        direction: Direction,
    ) -> TransitResult<LinePlanInfo> {
        self.get_json(
            "/GetLinePlanInfos",
            &[("lineid", line_id), ("direction", direction.as_query_value())],
        )
        .await
    }

    /// Transfer options between two stations, one entry per alternative.
    pub async fn transfer_plans(
        &self,
        start_station_name: &str,
        end_station_name: &str,
    ) -> TransitResult<Vec<TransferInfo>> {
        self.get_json(
            "/GetTransferInfo",
            &[
                ("startStationName", start_station_name),
                ("endStationName", end_station_name),
            ],
        )
        .await
    }

    /// One GET request, decoded as JSON into the operation's shape.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> TransitResult<T> {
        let response = self.get(path, params).await?;
        response.json::<T>().await.map_err(TransitError::Decode)
    }

    /// One GET request, body returned as raw text.
    async fn get_text(&self, path: &str, params: &[(&str, &str)]) -> TransitResult<String> {
        let response = self.get(path, params).await?;
        response.text().await.map_err(TransitError::Decode)
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> TransitResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(TransitError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransitError::request_failed(status));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::transit::models::{TransferStation, VehicleGpsInfo};

    fn test_client(server: &mockito::ServerGuard) -> TransitClient {
        TransitClient::new(&UpstreamConfig {
            base_url: server.url(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_station_name_autocomplete() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetStationName")
            .match_query(mockito::Matcher::UrlEncoded(
                "stationName".into(),
                "cy".into(),
            ))
            .with_status(200)
            .with_body(r#"["陈瑶湖镇","陈店"]"#)
            .create_async()
            .await;

        let names = test_client(&server)
            .station_name_autocomplete("cy")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(names, vec!["陈瑶湖镇".to_string(), "陈店".to_string()]);
    }

    #[tokio::test]
    async fn test_notice_returns_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let body = "<p>临时绕行公告</p>";
        let mock = server
            .mock("GET", "/getNotice")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let notice = test_client(&server).notice().await.unwrap();

        mock.assert_async().await;
        assert_eq!(notice, body);
    }

    #[tokio::test]
    async fn test_line_info_by_name() {
        let expected = vec![LineInfo {
            line_id: "39".into(),
            alias_name: "39路".into(),
            direction: 1,
            main_first_time: "06:00".into(),
            main_last_time: "21:30".into(),
            sub_first_time: "06:30".into(),
            sub_last_time: "22:00".into(),
            start_point: "铜陵站".into(),
            end_point: "铜陵北站".into(),
        }];

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetLineInfoByLine")
            .match_query(mockito::Matcher::UrlEncoded(
                "lineName".into(),
                "39".into(),
            ))
            .with_status(200)
            .with_body(serde_json::to_string(&expected).unwrap())
            .create_async()
            .await;

        let infos = test_client(&server).line_info_by_name("39").await.unwrap();

        mock.assert_async().await;
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].line_id, "39");
        assert_eq!(infos[0].end_point, "铜陵北站");
    }

    #[tokio::test]
    async fn test_line_gps_direction_passed_as_literal_text() {
        let data = LineGpsData {
            vehicles: vec![VehicleGpsInfo {
                line_id: "39".into(),
                vehicle_licence: "皖G12345".into(),
                current_station_id: "S3".into(),
                current_station_vehicle_count: 1,
                is_operate: true,
            }],
            stations: vec![],
        };

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetLineStationGpsData")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lineid".into(), "39".into()),
                mockito::Matcher::UrlEncoded("direction".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(serde_json::to_string(&data).unwrap())
            .create_async()
            .await;

        let snapshot = test_client(&server)
            .line_gps_data("39", Direction::Main)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(snapshot.vehicles.len(), 1);
        assert_eq!(snapshot.vehicles[0].vehicle_licence, "皖G12345");
    }

    #[tokio::test]
    async fn test_next_departure_sub_direction() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetLinePlanInfos")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lineid".into(), "T3".into()),
                mockito::Matcher::UrlEncoded("direction".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"SendTime":"2024-05-01 08:15:00"}"#)
            .create_async()
            .await;

        let plan = test_client(&server)
            .next_departure("T3", Direction::Sub)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(plan.send_time, "2024-05-01 08:15:00");
    }

    #[tokio::test]
    async fn test_transfer_plans() {
        let expected = vec![TransferInfo {
            station_count: 1,
            transfer_stations: vec![TransferStation {
                begin_station: "铜陵站".into(),
                line_name: "39".into(),
                end_station: "铜陵北站".into(),
            }],
        }];

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetTransferInfo")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("startStationName".into(), "铜陵站".into()),
                mockito::Matcher::UrlEncoded("endStationName".into(), "铜陵北站".into()),
            ]))
            .with_status(200)
            .with_body(serde_json::to_string(&expected).unwrap())
            .create_async()
            .await;

        let plans = test_client(&server)
            .transfer_plans("铜陵站", "铜陵北站")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].station_count, 1);
        assert_eq!(plans[0].transfer_stations[0].begin_station, "铜陵站");
    }

    #[tokio::test]
    async fn test_non_success_status_fails_without_retry() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/GetStationName")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let err = test_client(&server)
            .station_name_autocomplete("cy")
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("500 Internal Server Error"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        // Port 9 is the discard service; nothing listens there in tests.
        let client = TransitClient::new(&UpstreamConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 1,
        })
        .unwrap();

        let err = client.notice().await.unwrap_err();
        assert!(matches!(
            err,
            TransitError::Unreachable(_) | TransitError::Timeout
        ));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let client = TransitClient::new(&UpstreamConfig {
            base_url: "http://example.com/api/".into(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://example.com/api");
    }
}
