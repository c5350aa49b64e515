use bevy::math::Vec3;

/// Placement the model eases towards while a page section is in view.
/// Rotation holds XYZ Euler angles in radians.
pub struct SectionTransform {
    pub id: &'static str,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Built-in section table, in page order.
pub const SECTION_TRANSFORMS: &[SectionTransform] = &[
    SectionTransform {
        id: "banner",
        position: Vec3::new(0.0, -1.0, 0.0),
        rotation: Vec3::new(0.0, 1.5, 0.0),
    },
    SectionTransform {
        id: "intro",
        position: Vec3::new(1.0, -1.0, -15.0),
        rotation: Vec3::new(0.5, -0.5, 0.0),
    },
    SectionTransform {
        id: "description",
        position: Vec3::new(-1.0, 0.0, -5.0),
        rotation: Vec3::new(0.0, 1.0, 0.0),
    },
    SectionTransform {
        id: "contact",
        position: Vec3::new(0.8, -1.0, -8.0),
        rotation: Vec3::new(0.3, -0.5, 0.0),
    },
];
