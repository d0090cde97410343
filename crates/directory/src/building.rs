//! Building records: the unit of the directory the browser renders.

use serde::{Deserialize, Serialize};

use crate::status::{classify, AvailabilityStatus};

/// Unique key for a building record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub u32);

/// One campus building with its room-availability counts.
///
/// Invariant: `available <= total` and `total > 0`. The bundled campus
/// upholds this; injected directories are expected to as well (see
/// [`Building::is_valid`]). A zero-total record still classifies without
/// panicking (see [`classify`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    /// Rooms free right now.
    pub available: u32,
    /// Rooms in the building.
    pub total: u32,
    /// Relative asset path for the card image, resolved by the host's
    /// asset pipeline.
    pub image: String,
}

impl Building {
    pub fn new(id: u32, name: &str, available: u32, total: u32, image: &str) -> Self {
        Self {
            id: BuildingId(id),
            name: name.to_string(),
            available,
            total,
            image: image.to_string(),
        }
    }

    /// Free-room ratio in `0.0..=1.0`. A zero-room building reports 0.0.
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.available as f32 / self.total as f32
        }
    }

    /// Occupancy level used to pick the card's indicator color.
    pub fn status(&self) -> AvailabilityStatus {
        classify(self.available, self.total)
    }

    /// Badge text: `"1 room available"`, `"7 rooms available"`,
    /// `"0 rooms available"`.
    pub fn availability_text(&self) -> String {
        if self.available == 1 {
            "1 room available".to_string()
        } else {
            format!("{} rooms available", self.available)
        }
    }

    /// Counts are consistent: at least one room, none over-counted free.
    pub fn is_valid(&self) -> bool {
        self.total > 0 && self.available <= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_text_singular_only_at_one() {
        let one = Building::new(1, "Business School", 1, 18, "buildings/business_school.png");
        assert_eq!(one.availability_text(), "1 room available");

        let none = Building::new(2, "Ainsworth Building", 0, 16, "buildings/ainsworth.png");
        assert_eq!(none.availability_text(), "0 rooms available");

        let many = Building::new(3, "AGSM", 9, 9, "buildings/agsm.png");
        assert_eq!(many.availability_text(), "9 rooms available");
    }

    #[test]
    fn test_ratio() {
        let b = Building::new(1, "Anita B Lawrence Centre", 35, 44, "buildings/anitab.png");
        assert!((b.ratio() - 35.0 / 44.0).abs() < 1e-6);

        let full = Building::new(2, "Colombo Building", 5, 5, "buildings/colombo.png");
        assert_eq!(full.ratio(), 1.0);

        let empty_total = Building::new(3, "Demolished Annex", 0, 0, "buildings/annex.png");
        assert_eq!(empty_total.ratio(), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(Building::new(1, "AGSM", 9, 9, "buildings/agsm.png").is_valid());
        assert!(!Building::new(2, "Overfull", 10, 9, "buildings/overfull.png").is_valid());
        assert!(!Building::new(3, "No Rooms", 0, 0, "buildings/none.png").is_valid());
    }

    #[test]
    fn test_status_delegates_to_classify() {
        let b = Building::new(1, "Civil Engineering Building", 6, 8, "buildings/civil.png");
        assert_eq!(b.status(), AvailabilityStatus::High);
    }
}
