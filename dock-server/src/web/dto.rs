//! Data transfer objects for web responses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::stations::{Category, CategoryCounts, Marker, Snapshot};

use super::style::{MarkerStyle, marker_style};

/// One station marker in the stations API response.
#[derive(Debug, Serialize)]
pub struct MarkerDto {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Assigned category (e.g. `"OUT_OF_ORDER"`)
    pub category: Category,

    /// Popup label text, one line per field
    pub label: String,
}

impl MarkerDto {
    /// Create from a domain marker.
    pub fn from_marker(marker: &Marker) -> Self {
        Self {
            lat: marker.lat,
            lon: marker.lon,
            category: marker.category,
            label: marker.label.clone(),
        }
    }
}

/// Response for the stations API.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Unix timestamp of the information feed
    pub last_updated: i64,

    /// Classified markers, one per station
    pub stations: Vec<MarkerDto>,

    /// Per-category tallies for the legend
    pub counts: CategoryCounts,

    /// Category → marker style table for the renderer
    pub styles: BTreeMap<&'static str, MarkerStyle>,
}

impl StationsResponse {
    /// Create from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let stations = snapshot.markers.iter().map(MarkerDto::from_marker).collect();

        let styles = Category::ALL
            .iter()
            .map(|&c| (c.as_str(), marker_style(c)))
            .collect();

        Self {
            last_updated: snapshot.last_updated.timestamp(),
            stations,
            counts: snapshot.counts,
            styles,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::{StationId, StationInfo, StationStatus};
    use chrono::DateTime;

    fn test_snapshot() -> Snapshot {
        let id = StationId::parse("72").unwrap();
        Snapshot::build(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            vec![StationInfo {
                id: id.clone(),
                name: "W 52 St & 11 Ave".into(),
                lat: 40.767,
                lon: -73.994,
                capacity: 39,
                is_installed: true,
            }],
            vec![StationStatus {
                id,
                num_bikes_available: 3,
                is_renting: true,
            }],
        )
        .unwrap()
    }

    #[test]
    fn response_from_snapshot() {
        let response = StationsResponse::from_snapshot(&test_snapshot());

        assert_eq!(response.last_updated, 1_700_000_000);
        assert_eq!(response.stations.len(), 1);
        assert_eq!(response.stations[0].category, Category::Low);
        assert_eq!(response.counts.get(Category::Low), 1);
    }

    #[test]
    fn styles_cover_every_category() {
        let response = StationsResponse::from_snapshot(&test_snapshot());

        assert_eq!(response.styles.len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(response.styles.contains_key(category.as_str()));
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let response = StationsResponse::from_snapshot(&test_snapshot());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["last_updated"], 1_700_000_000_i64);
        assert_eq!(value["stations"][0]["category"], "LOW");
        assert_eq!(value["counts"]["LOW"], 1);
        assert_eq!(value["styles"]["LOW"]["marker_color"], "orange");
    }
}
