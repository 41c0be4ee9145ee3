//! Snapshot construction: join, classify, tally.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use super::{
    Category, CategoryCounts, DataShapeError, MergedStation, StationInfo, StationStatus,
};

/// A classified map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Assigned health category
    pub category: Category,

    /// Popup label text, one line per field
    pub label: String,
}

/// One fully-joined, classified view of the system at a feed timestamp.
///
/// Snapshots are rebuilt from scratch on every fetch cycle; nothing is
/// mutated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// When the information feed was generated
    pub last_updated: DateTime<Utc>,

    /// Classified markers, one per station, in info-feed order
    pub markers: Vec<Marker>,

    /// Per-category tallies; `counts.total()` equals `markers.len()`
    pub counts: CategoryCounts,
}

impl Snapshot {
    /// Build a snapshot from the two feed collections.
    ///
    /// Records are joined explicitly by station ID, so the result does
    /// not depend on feed ordering. Any station present in one feed but
    /// not the other, or listed twice in either, is a [`DataShapeError`].
    pub fn build(
        last_updated: DateTime<Utc>,
        infos: Vec<StationInfo>,
        statuses: Vec<StationStatus>,
    ) -> Result<Self, DataShapeError> {
        let mut status_by_id: HashMap<_, _> = HashMap::with_capacity(statuses.len());
        for status in statuses {
            let id = status.id.clone();
            if status_by_id.insert(id.clone(), status).is_some() {
                return Err(DataShapeError::DuplicateStation(id));
            }
        }

        let mut markers = Vec::with_capacity(infos.len());
        let mut counts = CategoryCounts::default();
        let mut seen = HashSet::with_capacity(infos.len());

        for info in infos {
            if !seen.insert(info.id.clone()) {
                return Err(DataShapeError::DuplicateStation(info.id));
            }

            let status = status_by_id
                .remove(&info.id)
                .ok_or_else(|| DataShapeError::MissingStatus(info.id.clone()))?;

            let station = MergedStation::join(info, status);
            let category = Category::classify(&station);

            counts.increment(category);
            markers.push(Marker {
                lat: station.lat,
                lon: station.lon,
                category,
                label: station.display_label(),
            });
        }

        // Anything left over references a station the info feed never listed.
        if let Some(id) = status_by_id.into_keys().min() {
            return Err(DataShapeError::UnknownStation(id));
        }

        Ok(Self {
            last_updated,
            markers,
            counts,
        })
    }

    /// Number of stations in the snapshot.
    pub fn station_count(&self) -> usize {
        self.markers.len()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::stations::StationId;
    use proptest::prelude::*;

    /// Strategy: a fleet of aligned (info, status) pairs with unique IDs.
    fn arb_fleet() -> impl Strategy<Value = Vec<(StationInfo, StationStatus)>> {
        prop::collection::vec((any::<bool>(), any::<bool>(), 0u32..60, 0u32..80), 0..40).prop_map(
            |fields| {
                fields
                    .into_iter()
                    .enumerate()
                    .map(|(i, (is_installed, is_renting, bikes, capacity))| {
                        let station_id = StationId::parse(&format!("station-{i}")).unwrap();
                        (
                            StationInfo {
                                id: station_id.clone(),
                                name: format!("Dock {i}"),
                                lat: 40.7,
                                lon: -74.0,
                                capacity,
                                is_installed,
                            },
                            StationStatus {
                                id: station_id,
                                num_bikes_available: bikes,
                                is_renting,
                            },
                        )
                    })
                    .collect()
            },
        )
    }

    fn updated_at() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    proptest! {
        /// Counts always sum to the number of stations
        #[test]
        fn counts_sum_to_station_count(fleet in arb_fleet()) {
            let (infos, statuses): (Vec<_>, Vec<_>) = fleet.into_iter().unzip();
            let expected = infos.len();

            let snapshot = Snapshot::build(updated_at(), infos, statuses).unwrap();

            prop_assert_eq!(snapshot.station_count(), expected);
            prop_assert_eq!(snapshot.counts.total() as usize, expected);
        }

        /// The join does not depend on status feed ordering
        #[test]
        fn status_order_is_irrelevant(fleet in arb_fleet()) {
            let (infos, statuses): (Vec<_>, Vec<_>) = fleet.into_iter().unzip();
            let reversed: Vec<_> = statuses.iter().cloned().rev().collect();

            let forward = Snapshot::build(updated_at(), infos.clone(), statuses).unwrap();
            let backward = Snapshot::build(updated_at(), infos, reversed).unwrap();

            prop_assert_eq!(forward, backward);
        }
    }
}
