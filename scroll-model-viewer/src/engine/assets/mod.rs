/// Section position table: built-in defaults and the JSON file format.
pub mod section_table;
