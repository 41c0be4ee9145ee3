//! Conversion from GBFS DTOs to domain types.

use chrono::{DateTime, Utc};

use crate::stations::{StationId, StationInfo, StationStatus};

use super::types::{InformationFeed, StatusFeed};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// A record carries an unusable station ID
    #[error("invalid station ID: {0:?}")]
    InvalidStationId(String),

    /// The feed timestamp is not a representable unix time
    #[error("invalid feed timestamp: {0}")]
    InvalidTimestamp(i64),
}

/// Converted information feed: the feed timestamp plus domain records.
#[derive(Debug, Clone)]
pub struct ConvertedInformation {
    /// When the feed was generated
    pub last_updated: DateTime<Utc>,

    /// Station records in feed order
    pub stations: Vec<StationInfo>,
}

/// Convert the information feed envelope to domain types.
///
/// A record with an unusable station ID fails the whole conversion
/// rather than being skipped; a half-converted feed would break the
/// join against the status feed.
pub fn convert_information(feed: InformationFeed) -> Result<ConvertedInformation, ConversionError> {
    let last_updated = DateTime::from_timestamp(feed.last_updated, 0)
        .ok_or(ConversionError::InvalidTimestamp(feed.last_updated))?;

    let mut stations = Vec::with_capacity(feed.data.stations.len());
    for dto in feed.data.stations {
        let id = StationId::parse(&dto.station_id)
            .map_err(|_| ConversionError::InvalidStationId(dto.station_id.clone()))?;

        stations.push(StationInfo {
            id,
            name: dto.name,
            lat: dto.lat,
            lon: dto.lon,
            capacity: dto.capacity,
            is_installed: dto.is_installed,
        });
    }

    Ok(ConvertedInformation {
        last_updated,
        stations,
    })
}

/// Convert the status feed envelope to domain types.
pub fn convert_status(feed: StatusFeed) -> Result<Vec<StationStatus>, ConversionError> {
    let mut stations = Vec::with_capacity(feed.data.stations.len());
    for dto in feed.data.stations {
        let id = StationId::parse(&dto.station_id)
            .map_err(|_| ConversionError::InvalidStationId(dto.station_id.clone()))?;

        stations.push(StationStatus {
            id,
            num_bikes_available: dto.num_bikes_available,
            is_renting: dto.is_renting,
        });
    }

    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gbfs::types::{
        InformationData, StationInformationDto, StationStatusDto, StatusData,
    };

    fn info_feed(stations: Vec<StationInformationDto>) -> InformationFeed {
        InformationFeed {
            last_updated: 1_700_000_000,
            ttl: Some(5),
            data: InformationData { stations },
        }
    }

    fn info_dto(station_id: &str) -> StationInformationDto {
        StationInformationDto {
            station_id: station_id.into(),
            name: "W 52 St & 11 Ave".into(),
            lat: 40.767,
            lon: -73.994,
            capacity: 39,
            is_installed: true,
        }
    }

    #[test]
    fn converts_information_feed() {
        let converted = convert_information(info_feed(vec![info_dto("72")])).unwrap();

        assert_eq!(converted.last_updated.timestamp(), 1_700_000_000);
        assert_eq!(converted.stations.len(), 1);

        let station = &converted.stations[0];
        assert_eq!(station.id.as_str(), "72");
        assert_eq!(station.name, "W 52 St & 11 Ave");
        assert_eq!(station.capacity, 39);
        assert!(station.is_installed);
    }

    #[test]
    fn rejects_bad_station_id() {
        let err = convert_information(info_feed(vec![info_dto("")])).unwrap_err();

        assert!(matches!(err, ConversionError::InvalidStationId(ref s) if s.is_empty()));
    }

    #[test]
    fn converts_status_feed() {
        let feed = StatusFeed {
            last_updated: 1_700_000_003,
            ttl: Some(5),
            data: StatusData {
                stations: vec![StationStatusDto {
                    station_id: "72".into(),
                    num_bikes_available: 7,
                    is_renting: true,
                }],
            },
        };

        let statuses = convert_status(feed).unwrap();

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].id.as_str(), "72");
        assert_eq!(statuses[0].num_bikes_available, 7);
        assert!(statuses[0].is_renting);
    }

    #[test]
    fn rejects_whitespace_status_id() {
        let feed = StatusFeed {
            last_updated: 1_700_000_003,
            ttl: None,
            data: StatusData {
                stations: vec![StationStatusDto {
                    station_id: "7 2".into(),
                    num_bikes_available: 7,
                    is_renting: true,
                }],
            },
        };

        let err = convert_status(feed).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidStationId(ref s) if s == "7 2"));
    }
}
