/// Model file, relative to the asset root.
pub const MODEL_PATH: &str = "models/demon_bee_full_texture.glb";

/// Canvas the renderer attaches to on web builds.
pub const CANVAS_SELECTOR: &str = "#container3D";

/// Marker shared by every page section that can move the model.
pub const SECTION_SELECTOR: &str = ".section";

/// Extension registered for optional JSON section tables.
pub const SECTION_TABLE_EXTENSION: &str = "sections.json";

/// Section table loaded at startup. It replaces the built-in table if it is valid.
pub const SECTION_TABLE_PATH: &str = "page.sections.json";
