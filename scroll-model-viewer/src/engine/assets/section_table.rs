use bevy::prelude::*;
use constants::section::SECTION_TRANSFORMS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target transform for one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTarget {
    pub id: String,
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
}

/// Ordered table mapping section ids to model targets. Lookup is by id only.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SectionTable {
    entries: Vec<SectionTarget>,
}

impl Default for SectionTable {
    fn default() -> Self {
        Self {
            entries: SECTION_TRANSFORMS
                .iter()
                .map(|section| SectionTarget {
                    id: section.id.to_string(),
                    position: section.position,
                    rotation: section.rotation,
                })
                .collect(),
        }
    }
}

impl SectionTable {
    /// Index of the entry with `id`, scanning in table order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&SectionTarget> {
        self.position_of(id).map(|index| &self.entries[index])
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a table from a loaded JSON file, rejecting empty tables,
    /// duplicate ids and non-finite values.
    pub fn from_file(file: &SectionTableFile) -> Result<Self, SectionTableError> {
        if file.sections.is_empty() {
            return Err(SectionTableError::Empty);
        }

        let mut entries: Vec<SectionTarget> = Vec::with_capacity(file.sections.len());
        for section in &file.sections {
            if entries.iter().any(|entry| entry.id == section.id) {
                return Err(SectionTableError::DuplicateId(section.id.clone()));
            }

            let position = Vec3::from(section.position);
            let rotation = Vec3::from(section.rotation);
            if !position.is_finite() || !rotation.is_finite() {
                return Err(SectionTableError::NonFinite(section.id.clone()));
            }

            entries.push(SectionTarget {
                id: section.id.clone(),
                position,
                rotation,
            });
        }

        Ok(Self { entries })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SectionTableError {
    #[error("section table has no entries")]
    Empty,
    #[error("section id `{0}` appears more than once")]
    DuplicateId(String),
    #[error("section `{0}` has a non-finite position or rotation")]
    NonFinite(String),
}

/// `{x, y, z}` triple as written in section table files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Axes> for Vec3 {
    fn from(axes: Axes) -> Self {
        Vec3::new(axes.x, axes.y, axes.z)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    pub position: Axes,
    pub rotation: Axes,
}

/// Section table as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct SectionTableFile {
    pub sections: Vec<SectionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, position: [f32; 3], rotation: [f32; 3]) -> SectionEntry {
        SectionEntry {
            id: id.to_string(),
            position: Axes {
                x: position[0],
                y: position[1],
                z: position[2],
            },
            rotation: Axes {
                x: rotation[0],
                y: rotation[1],
                z: rotation[2],
            },
        }
    }

    #[test]
    fn default_table_keeps_page_order() {
        let table = SectionTable::default();
        let ids: Vec<&str> = table.ids().collect();
        assert_eq!(ids, ["banner", "intro", "description", "contact"]);
    }

    #[test]
    fn intro_target_matches_builtin_values() {
        let table = SectionTable::default();
        let intro = table.find("intro").unwrap();
        assert_eq!(intro.position, Vec3::new(1.0, -1.0, -15.0));
        assert_eq!(intro.rotation, Vec3::new(0.5, -0.5, 0.0));
        assert_eq!(table.position_of("intro"), Some(1));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let table = SectionTable::default();
        assert_eq!(table.position_of("footer"), None);
        assert!(table.find("").is_none());
    }

    #[test]
    fn json_table_parses_into_targets() {
        let json = r#"{
            "sections": [
                { "id": "hero", "position": { "x": 0, "y": -1, "z": 0 }, "rotation": { "x": 0, "y": 1.5, "z": 0 } },
                { "id": "faq", "position": { "x": 2, "y": 0.5, "z": -4 }, "rotation": { "x": 0.1, "y": 0, "z": 0 } }
            ]
        }"#;
        let file: SectionTableFile = serde_json::from_str(json).unwrap();
        let table = SectionTable::from_file(&file).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.find("faq").unwrap().position, Vec3::new(2.0, 0.5, -4.0));
        assert!(table.find("banner").is_none());
    }

    #[test]
    fn bundled_json_table_matches_builtin() {
        let file: SectionTableFile =
            serde_json::from_str(include_str!("../../../assets/page.sections.json")).unwrap();
        assert_eq!(SectionTable::from_file(&file).unwrap(), SectionTable::default());
    }

    #[test]
    fn rejects_empty_and_duplicate_tables() {
        let empty = SectionTableFile { sections: vec![] };
        assert_eq!(SectionTable::from_file(&empty), Err(SectionTableError::Empty));

        let duplicate = SectionTableFile {
            sections: vec![
                entry("intro", [0.0; 3], [0.0; 3]),
                entry("intro", [1.0; 3], [0.0; 3]),
            ],
        };
        assert_eq!(
            SectionTable::from_file(&duplicate),
            Err(SectionTableError::DuplicateId("intro".to_string()))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let file = SectionTableFile {
            sections: vec![entry("intro", [f32::NAN, 0.0, 0.0], [0.0; 3])],
        };
        assert_eq!(
            SectionTable::from_file(&file),
            Err(SectionTableError::NonFinite("intro".to_string()))
        );
    }
}
