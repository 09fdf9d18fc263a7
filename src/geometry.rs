/*!
Plane geometry used to derive route weights from station positions.

Weights are measured in position units (pixels in an editor). Conversion to a
real-world unit is a plain multiplication by a caller-chosen scale.
*/

use serde::{Deserialize, Serialize};

/// Real-world units per position unit used when the caller does not supply one (km per pixel).
pub const DEFAULT_DISTANCE_SCALE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        euclidean_distance(self, other)
    }
}

pub fn euclidean_distance(a: &Position, b: &Position) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Converts a weight in position units to display units. No clamping or rounding is applied.
pub fn to_display_units(weight: f64, scale: f64) -> f64 {
    weight * scale
}

/// Renders a weight in display units with one decimal place, e.g. `"12.5"`.
pub fn format_distance(weight: f64, scale: f64) -> String {
    format!("{:.1}", to_display_units(weight, scale))
}

pub fn midpoint(a: &Position, b: &Position) -> Position {
    Position {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

pub fn is_too_close(a: &Position, b: &Position, min_distance: f64) -> bool {
    euclidean_distance(a, b) < min_distance
}
