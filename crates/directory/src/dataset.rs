//! The bundled campus dataset and the injectable directory resource.

use bevy::prelude::*;

use crate::building::Building;

/// The collection of buildings the browser renders.
///
/// The app shell decides what goes in here: the bundled campus by default,
/// or a JSON directory when one is supplied. The view only ever reads it,
/// so rendering the same directory twice produces the same grid.
#[derive(Resource, Debug, Clone)]
pub struct BuildingDirectory {
    pub buildings: Vec<Building>,
}

impl Default for BuildingDirectory {
    fn default() -> Self {
        Self {
            buildings: default_campus(),
        }
    }
}

impl BuildingDirectory {
    pub fn new(buildings: Vec<Building>) -> Self {
        Self { buildings }
    }

    /// Parse a directory from a JSON array of building records.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let buildings: Vec<Building> = serde_json::from_str(json)?;
        Ok(Self::new(buildings))
    }
}

/// The ten Kensington-campus buildings the browser ships with. Counts are
/// mock occupancy figures, fixed at startup.
pub fn default_campus() -> Vec<Building> {
    vec![
        Building::new(1, "AGSM", 9, 9, "buildings/agsm.png"),
        Building::new(2, "Ainsworth Building", 0, 16, "buildings/ainsworth.png"),
        Building::new(3, "Anita B Lawrence Centre", 35, 44, "buildings/anitab.png"),
        Building::new(4, "Biological Sciences", 2, 6, "buildings/biological_science.png"),
        Building::new(
            5,
            "Biological Sciences (West)",
            7,
            8,
            "buildings/biological_science_west.png",
        ),
        Building::new(6, "Blockhouse", 3, 42, "buildings/blockhouse.png"),
        Building::new(7, "Business School", 1, 18, "buildings/business_school.png"),
        Building::new(8, "Civil Engineering Building", 6, 8, "buildings/civil_building.png"),
        Building::new(9, "Colombo Building", 5, 5, "buildings/colombo.png"),
        Building::new(10, "Computer Science & Eng (K17)", 3, 7, "buildings/cse_building.png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_campus_is_valid() {
        let campus = default_campus();
        assert_eq!(campus.len(), 10);
        for building in &campus {
            assert!(building.is_valid(), "invalid counts for {}", building.name);
            assert!(!building.name.is_empty());
            assert!(!building.image.is_empty());
        }
    }

    #[test]
    fn test_default_campus_ids_unique() {
        let campus = default_campus();
        let ids: HashSet<_> = campus.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), campus.len());
    }

    #[test]
    fn test_default_resource_uses_bundled_campus() {
        let dir = BuildingDirectory::default();
        assert_eq!(dir.buildings, default_campus());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"id": 1, "name": "AGSM", "available": 9, "total": 9, "image": "buildings/agsm.png"},
            {"id": 2, "name": "Blockhouse", "available": 3, "total": 42, "image": "buildings/blockhouse.png"}
        ]"#;
        let dir = BuildingDirectory::from_json_str(json).unwrap();
        assert_eq!(dir.buildings.len(), 2);
        assert_eq!(dir.buildings[0].name, "AGSM");
        assert_eq!(dir.buildings[1].available, 3);
        assert_eq!(dir.buildings[1].total, 42);
    }

    #[test]
    fn test_from_json_str_rejects_malformed_input() {
        assert!(BuildingDirectory::from_json_str("not json").is_err());
        assert!(BuildingDirectory::from_json_str(r#"{"id": 1}"#).is_err());
    }
}
