//! Availability status classification.
//!
//! Every card shows one of three indicator colors, picked from the ratio of
//! free rooms to total rooms. The mapping to actual colors lives in the UI
//! crate; this module owns the rule.

/// Occupancy level of a building, from its free-room ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityStatus {
    /// No rooms free.
    None,
    /// Some rooms free, at most half.
    Low,
    /// More than half the rooms free.
    High,
}

impl AvailabilityStatus {
    /// Human-readable label for tooltips.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No rooms free",
            Self::Low => "Few rooms free",
            Self::High => "Plenty of rooms free",
        }
    }
}

/// Classify a building's occupancy level.
///
/// Ratio bands: 0 is `None`, up to and including one half is `Low`,
/// anything above is `High`. The comparison is integer-only so the
/// exact-half boundary never drifts through float rounding. A building
/// with zero rooms total has zero rooms free and classifies as `None`.
pub fn classify(available: u32, total: u32) -> AvailabilityStatus {
    if available == 0 || total == 0 {
        AvailabilityStatus::None
    } else if available as u64 * 2 <= total as u64 {
        AvailabilityStatus::Low
    } else {
        AvailabilityStatus::High
    }
}
