//! GBFS (General Bikeshare Feed Specification) client.
//!
//! This module provides an HTTP client for the two public station
//! feeds and the conversion of their JSON into domain types.
//!
//! Key characteristics of the feeds:
//! - Both share a `{ last_updated, ttl, data: { stations: [...] } }`
//!   envelope
//! - The feeds are unauthenticated and regenerate every few seconds
//! - The information feed describes docks (name, position, capacity);
//!   the status feed carries their live availability
//! - The two feeds list the same stations but make no ordering promise,
//!   so records are always paired by station ID

mod client;
mod convert;
mod error;
mod types;

pub use client::{GbfsClient, GbfsConfig};
pub use convert::{ConversionError, ConvertedInformation, convert_information, convert_status};
pub use error::{GbfsError, SnapshotError};
pub use types::{
    InformationData, InformationFeed, StationInformationDto, StationStatusDto, StatusData,
    StatusFeed,
};
