//! Corner rounding cutters and their lookup tables.
//!
//! A fillet is produced by subtracting an *inverted arc* from a sharp corner:
//! the part of a `radius × radius` square that lies outside the quarter circle
//! of the same radius. Which quadrant the cutter covers, and where it sits, is
//! fixed per corner by the tables below.

use glam::{DVec2, DVec3};
use qrplaque_core::{GeometryNode, ROUND_SEGMENTS};

/// Quarter-turn sector of the plane, counter-clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// 0° to 90° (+x, +y).
    First,
    /// 90° to 180° (-x, +y).
    Second,
    /// 180° to 270° (-x, -y).
    Third,
    /// 270° to 360° (+x, -y).
    Fourth,
}

impl Quadrant {
    /// Quadrant index, 0 for [`Quadrant::First`].
    pub fn index(self) -> u32 {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }

    /// Start angle in degrees.
    pub fn start_degrees(self) -> f64 {
        f64::from(self.index()) * 90.0
    }
}

/// Corner of the plate, in the order the corner cutters are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, counter-clockwise from +x +y.
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Unit direction of the corner from the plate center.
    pub fn signs(self) -> DVec2 {
        match self {
            Self::TopRight => DVec2::new(1.0, 1.0),
            Self::TopLeft => DVec2::new(-1.0, 1.0),
            Self::BottomLeft => DVec2::new(-1.0, -1.0),
            Self::BottomRight => DVec2::new(1.0, -1.0),
        }
    }

    /// Quadrant the corner's cutter covers.
    pub fn quadrant(self) -> Quadrant {
        match self {
            Self::TopRight => Quadrant::First,
            Self::TopLeft => Quadrant::Second,
            Self::BottomLeft => Quadrant::Third,
            Self::BottomRight => Quadrant::Fourth,
        }
    }
}

/// First or last index along one grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    First,
    Last,
}

/// Fillet cutter placement for one module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleFillet {
    pub quadrant: Quadrant,
    /// Cutter origin inside the module, in module pitches.
    pub offset: DVec2,
}

/// Fillet table for the grid corners, keyed by `(row edge, column edge)`.
///
/// Three corners are rounded outward; `(Last, Last)` stays square.
pub fn module_fillet(corner: (Edge, Edge)) -> Option<ModuleFillet> {
    let (quadrant, x, y) = match corner {
        (Edge::First, Edge::Last) => (Quadrant::Second, 1.0, 0.0),
        (Edge::First, Edge::First) => (Quadrant::Third, 1.0, 1.0),
        (Edge::Last, Edge::First) => (Quadrant::Fourth, 0.0, 1.0),
        (Edge::Last, Edge::Last) => return None,
    };
    Some(ModuleFillet {
        quadrant,
        offset: DVec2::new(x, y),
    })
}

/// Classifies a grid position as a corner of an `side × side` grid.
///
/// On a single-module grid every edge is both first and last; the row reads as
/// last and the column as first.
pub fn grid_corner(row: usize, col: usize, side: usize) -> Option<(Edge, Edge)> {
    let last = side.checked_sub(1)?;
    let row_edge = if row == last {
        Edge::Last
    } else if row == 0 {
        Edge::First
    } else {
        return None;
    };
    let col_edge = if col == 0 {
        Edge::First
    } else if col == last {
        Edge::Last
    } else {
        return None;
    };
    Some((row_edge, col_edge))
}

/// 2-D cutter covering the given quadrant of a `radius × radius` square minus
/// the quarter circle centered on the origin.
pub fn inverted_arc(radius: f64, quadrant: Quadrant) -> GeometryNode {
    let steps = ROUND_SEGMENTS / 4;
    let start = quadrant.start_degrees();
    let end = start + 90.0;

    let on_circle = |degrees: f64| {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec2::new(cos, sin) * radius
    };

    // Square corner first, then back along the arc from end to start.
    let mut points = Vec::with_capacity(steps as usize + 2);
    points.push(on_circle(start) + on_circle(end));
    for k in (0..=steps).rev() {
        points.push(on_circle(start + 90.0 * f64::from(k) / f64::from(steps)));
    }
    GeometryNode::polygon(points)
}

/// Inverted arc translated so it rounds the plate corner of a `width × length`
/// rectangle centered on the origin.
pub fn corner_cutter(corner: Corner, width: f64, length: f64, radius: f64) -> GeometryNode {
    let signs = corner.signs();
    let position = DVec3::new(
        signs.x * (width / 2.0 - radius),
        signs.y * (length / 2.0 - radius),
        0.0,
    );
    inverted_arc(radius, corner.quadrant()).translate(position)
}
