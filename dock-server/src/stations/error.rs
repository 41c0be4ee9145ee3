//! Feed join error types.

use super::StationId;

/// Errors raised when the two feeds disagree about which stations exist.
///
/// The upstream data source lists stations in both feeds and relies on
/// consumers pairing them up. Joining by ID turns any disagreement into
/// a loud error instead of silently attaching status to the wrong dock.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataShapeError {
    /// An information record has no matching status record
    #[error("station {0} has no status record")]
    MissingStatus(StationId),

    /// A status record references a station absent from the info feed
    #[error("status record for unknown station {0}")]
    UnknownStation(StationId),

    /// The same station ID appears twice within one feed
    #[error("duplicate station {0} in feed")]
    DuplicateStation(StationId),
}
