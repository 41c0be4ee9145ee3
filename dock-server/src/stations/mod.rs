//! Station domain types and classification.
//!
//! This module contains the validated domain model plus the pure
//! join/classify/tally pass that turns the two raw feed collections
//! into a [`Snapshot`]. All types enforce their invariants at
//! construction time, so code that receives them can trust their
//! validity.

mod category;
mod error;
mod id;
mod snapshot;
mod station;

pub use category::{Category, CategoryCounts};
pub use error::DataShapeError;
pub use id::{InvalidStationId, StationId};
pub use snapshot::{Marker, Snapshot};
pub use station::{MergedStation, StationInfo, StationStatus};
