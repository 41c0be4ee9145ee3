//! Station records.

use super::StationId;

/// Static description of a dock, from the station information feed.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    /// Feed identifier for this dock
    pub id: StationId,

    /// Human-readable dock name (usually a street corner)
    pub name: String,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Total number of docking points
    pub capacity: u32,

    /// Whether the dock is physically installed yet
    pub is_installed: bool,
}

/// Live state of a dock, from the station status feed.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStatus {
    /// Feed identifier for this dock
    pub id: StationId,

    /// Bikes currently available to rent
    pub num_bikes_available: u32,

    /// Whether the dock is currently renting bikes
    pub is_renting: bool,
}

/// One physical dock with its info and status records joined.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedStation {
    pub id: StationId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub capacity: u32,
    pub is_installed: bool,
    pub num_bikes_available: u32,
    pub is_renting: bool,
}

impl MergedStation {
    /// Join an info record with its status record.
    ///
    /// The two records must describe the same station; the snapshot
    /// builder looks the status up by ID before calling this.
    pub fn join(info: StationInfo, status: StationStatus) -> Self {
        debug_assert_eq!(info.id, status.id);

        Self {
            id: info.id,
            name: info.name,
            lat: info.lat,
            lon: info.lon,
            capacity: info.capacity,
            is_installed: info.is_installed,
            num_bikes_available: status.num_bikes_available,
            is_renting: status.is_renting,
        }
    }

    /// Popup label: name, capacity, and current availability, one per line.
    pub fn display_label(&self) -> String {
        format!(
            "{}\nCapacity: {}\n{} Bikes Available",
            self.name, self.capacity, self.num_bikes_available
        )
    }
}
