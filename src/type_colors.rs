//! Type Colors
//!
//! Display color for each of the 18 known types.

/// Type names and their hex values
pub const TYPE_COLORS: &[(&str, &str)] = &[
    ("normal", "#A8A878"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("electric", "#F8D030"),
    ("grass", "#78C850"),
    ("ice", "#98D8D8"),
    ("fighting", "#C03028"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("flying", "#A890F0"),
    ("psychic", "#F85888"),
    ("bug", "#A8B820"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8D0"),
    ("fairy", "#F0B6BC"),
];

/// Badge color for unknown types
pub const DEFAULT_TYPE_COLOR: &str = "#ccc";
/// Move chip color for unknown types
pub const DEFAULT_MOVE_COLOR: &str = "#e0e0e0";

pub fn lookup(name: &str) -> Option<&'static str> {
    TYPE_COLORS
        .iter()
        .find(|(type_name, _)| type_name.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

pub fn type_color(name: &str) -> &'static str {
    lookup(name).unwrap_or(DEFAULT_TYPE_COLOR)
}

pub fn move_color(name: &str) -> &'static str {
    lookup(name).unwrap_or(DEFAULT_MOVE_COLOR)
}

pub fn type_names() -> impl Iterator<Item = &'static str> {
    TYPE_COLORS.iter().map(|(name, _)| *name)
}
