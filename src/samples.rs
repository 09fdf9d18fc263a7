/*!
Ready-made station layouts.

`small`, `medium` and `vietnam_cities` are fixed tables; `circle` and `grid`
are generated. None of them carry routes: pair them with `complete_edges` (or
routes of your own) before computing a tree.
*/

use std::f64::consts::PI;

use once_cell::sync::Lazy;

use crate::{
    geometry::Position,
    network::{edge::Edge, node::Node},
};

fn table(rows: &[(u32, f64, f64, &str)]) -> Vec<Node> {
    rows.iter()
        .map(|&(id, x, y, label)| Node::new(id, Position::new(x, y), label))
        .collect()
}

static SMALL: Lazy<Vec<Node>> = Lazy::new(|| {
    table(&[
        (0, 200.0, 150.0, "A"),
        (1, 400.0, 100.0, "B"),
        (2, 600.0, 150.0, "C"),
        (3, 300.0, 300.0, "D"),
        (4, 500.0, 300.0, "E"),
    ])
});

static MEDIUM: Lazy<Vec<Node>> = Lazy::new(|| {
    (0..8u32)
        .map(|i| {
            let x = [150.0, 350.0, 550.0, 700.0][(i % 4) as usize];
            let y = if i < 4 { 100.0 } else { 300.0 };
            Node::new(i, Position::new(x, y), format!("Station {}", i + 1))
        })
        .collect()
});

// Schematic coordinates, not projected lat/long.
static VIETNAM_CITIES: Lazy<Vec<Node>> = Lazy::new(|| {
    table(&[
        (0, 350.0, 80.0, "Hà Nội"),
        (1, 450.0, 100.0, "Hải Phòng"),
        (2, 380.0, 150.0, "Vinh"),
        (3, 420.0, 200.0, "Huế"),
        (4, 500.0, 220.0, "Đà Nẵng"),
        (5, 450.0, 280.0, "Quy Nhơn"),
        (6, 380.0, 350.0, "Nha Trang"),
        (7, 300.0, 400.0, "Đà Lạt"),
        (8, 350.0, 450.0, "TP.HCM"),
        (9, 250.0, 480.0, "Cần Thơ"),
    ])
});

/// Five stations, labelled `A` to `E`.
pub fn small() -> Vec<Node> {
    SMALL.clone()
}

/// Eight stations in two rows of four.
pub fn medium() -> Vec<Node> {
    MEDIUM.clone()
}

pub fn vietnam_cities() -> Vec<Node> {
    VIETNAM_CITIES.clone()
}

/// `n` stations evenly spaced on a circle, the first one at the top.
pub fn circle(n: u32, center: Position, radius: f64) -> Vec<Node> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * f64::from(i) / f64::from(n) - PI / 2.0;
            Node::new(
                i,
                Position::new(center.x + radius * angle.cos(), center.y + radius * angle.sin()),
                format!("Station {}", i + 1),
            )
        })
        .collect()
}

/// `rows` x `cols` stations, row-major ids.
pub fn grid(rows: u32, cols: u32, spacing: f64, offset: Position) -> Vec<Node> {
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| {
            let id = row * cols + col;
            Node::new(
                id,
                Position::new(offset.x + f64::from(col) * spacing, offset.y + f64::from(row) * spacing),
                format!("Station {}", id + 1),
            )
        })
        .collect()
}

/// Twelve stations on a circle of radius 180 around (400, 250).
pub fn default_circle() -> Vec<Node> {
    circle(12, Position::new(400.0, 250.0), 180.0)
}

/// 3 x 3 grid with spacing 150 starting at (200, 150).
pub fn default_grid() -> Vec<Node> {
    grid(3, 3, 150.0, Position::new(200.0, 150.0))
}

/// Looks a layout up by name: `small`, `medium`, `circle`, `grid` or `vietnam`.
pub fn by_name(name: &str) -> Option<Vec<Node>> {
    match name {
        "small" => Some(small()),
        "medium" => Some(medium()),
        "circle" => Some(default_circle()),
        "grid" => Some(default_grid()),
        "vietnam" => Some(vietnam_cities()),
        _ => None,
    }
}

/// Every unordered pair of `nodes` as an unweighted route, so weights come from distances.
pub fn complete_edges(nodes: &[Node]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(crate::algorithms::connectivity::max_edges(nodes.len()));
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            edges.push(Edge::new(a.id, b.id));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Algorithm, compute, connectivity::is_connected};

    #[test]
    fn test_fixed_tables() {
        assert_eq!(small().len(), 5);
        assert_eq!(medium().len(), 8);
        assert_eq!(medium()[5].position, Position::new(350.0, 300.0));
        assert_eq!(medium()[5].label, "Station 6");
        assert_eq!(vietnam_cities()[4].label, "Đà Nẵng");
    }

    #[test]
    fn test_generated_layouts() {
        let ring = default_circle();
        assert_eq!(ring.len(), 12);
        assert!((ring[0].position.x - 400.0).abs() < 1e-9);
        assert!((ring[0].position.y - 70.0).abs() < 1e-9);

        let g = default_grid();
        assert_eq!(g.len(), 9);
        assert_eq!(g[5].position, Position::new(500.0, 300.0));
        assert_eq!(g[8].label, "Station 9");
        assert!(by_name("missing").is_none());
    }

    #[test]
    fn test_complete_edges() {
        let nodes = small();
        let edges = complete_edges(&nodes);
        assert_eq!(edges.len(), 10);
        assert!(is_connected(&nodes, &edges));
    }

    #[test]
    fn test_grid_tree_cost() {
        let nodes = default_grid();
        let edges = complete_edges(&nodes);
        for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
            let result = compute(algorithm, &nodes, &edges, None);
            assert_eq!(result.len(), 8);
            assert!((result.total_cost - 8.0 * 150.0).abs() < 1e-9);
        }
    }
}
