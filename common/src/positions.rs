//! The fixed set of open positions applicants can choose from.

use crate::models::Position;

/// `(id, title, department)` for every open position, in display order.
const OPEN_POSITIONS: [(&str, &str, &str); 5] = [
    ("senior-software-engineer", "Senior Software Engineer", "Engineering"),
    ("product-designer", "Product Designer", "Design"),
    ("devops-engineer", "DevOps Engineer", "Engineering"),
    ("product-manager", "Product Manager", "Product"),
    ("data-scientist", "Data Scientist", "Data"),
];

/// Titles of the open positions, in display order.
pub fn open_position_titles() -> impl Iterator<Item = &'static str> {
    OPEN_POSITIONS.iter().map(|(_, title, _)| *title)
}

/// Whether `title` names an open position. Exact match.
pub fn is_open_position(title: &str) -> bool {
    open_position_titles().any(|t| t == title)
}

/// Open positions as catalog records.
pub fn open_positions() -> Vec<Position> {
    OPEN_POSITIONS
        .iter()
        .map(|(id, title, department)| Position {
            id: id.to_string(),
            title: title.to_string(),
            department: department.to_string(),
            is_active: true,
        })
        .collect()
}
