//! GBFS feed DTOs.
//!
//! These types map directly to the JSON served by the two station feeds.
//! Both feeds share the same envelope: a generation timestamp, a cache
//! TTL, and a `data.stations` array. Boolean flags are real booleans in
//! GBFS 2.x but `0`/`1` integers in 1.x feeds, so they are deserialized
//! leniently.

use serde::{Deserialize, Deserializer};

/// Envelope of the station information feed.
#[derive(Debug, Clone, Deserialize)]
pub struct InformationFeed {
    /// Unix timestamp of feed generation.
    pub last_updated: i64,

    /// Seconds the response may be cached for.
    pub ttl: Option<u64>,

    /// Feed payload.
    pub data: InformationData,
}

/// Payload of the station information feed.
#[derive(Debug, Clone, Deserialize)]
pub struct InformationData {
    pub stations: Vec<StationInformationDto>,
}

/// One record of the station information feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationDto {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub capacity: u32,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_installed: bool,
}

/// Envelope of the station status feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusFeed {
    /// Unix timestamp of feed generation.
    pub last_updated: i64,

    /// Seconds the response may be cached for.
    pub ttl: Option<u64>,

    /// Feed payload.
    pub data: StatusData,
}

/// Payload of the station status feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusData {
    pub stations: Vec<StationStatusDto>,
}

/// One record of the station status feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusDto {
    pub station_id: String,
    pub num_bikes_available: u32,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_renting: bool,
}

/// Accept both JSON booleans and the 0/1 integers used by GBFS 1.x.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(u8),
    }

    match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => Ok(b),
        BoolOrInt::Int(n) => Ok(n != 0),
    }
}
