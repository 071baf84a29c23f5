//! Vertex and path calculations for the drawing primitives.
//!
//! Everything here is pure: the functions validate their inputs, compute
//! coordinates in surface pixel space and never touch a surface.

use super::error::{DrawError, DrawResult};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Upper bound on the vertices of one polygon.
pub const MAX_POLYGON_SIDES: usize = 100_000;

/// Upper bound on the rings of one polygon ring.
pub const MAX_POLYGON_RINGS: usize = 10_000;

/// Upper bound on the lines of a grid along one axis.
pub const MAX_GRID_LINES: usize = 100_000;

/// A point in surface pixel space. X grows to the right, Y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

/// One piece of an outline: a straight edge or a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line(LineSegment),
    /// Arc swept in the positive-angle direction from `start` to `end`.
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    },
}

/// Lines making up a grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// Lines of constant X, left to right.
    pub vertical: Vec<LineSegment>,
    /// Lines of constant Y, top to bottom.
    pub horizontal: Vec<LineSegment>,
}

impl GridLines {
    /// All segments, verticals first.
    pub fn iter(&self) -> impl Iterator<Item = &LineSegment> {
        self.vertical.iter().chain(self.horizontal.iter())
    }
}

fn require_positive(name: &str, value: f64) -> DrawResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DrawError::invalid(format!("{name} must be positive, got {value}")))
    }
}

fn require_finite(name: &str, value: f64) -> DrawResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DrawError::invalid(format!("{name} must be finite, got {value}")))
    }
}

/// Computes the vertices of a regular polygon.
///
/// Returns `sides` points on the circle of `radius` around `center`, the first
/// at `start_angle` and each following one `2π / sides` further along the
/// positive-angle direction.
///
/// # Errors
/// `InvalidArgument` when `sides < 3`, `sides > MAX_POLYGON_SIDES` or
/// `radius <= 0`.
pub fn regular_polygon_vertices(
    center: Point,
    radius: f64,
    sides: usize,
    start_angle: f64,
) -> DrawResult<Vec<Point>> {
    if sides < 3 {
        return Err(DrawError::invalid(format!(
            "polygon needs at least 3 sides, got {sides}"
        )));
    }
    if sides > MAX_POLYGON_SIDES {
        return Err(DrawError::invalid(format!(
            "polygon has {sides} sides, at most {MAX_POLYGON_SIDES} are supported"
        )));
    }
    require_positive("radius", radius)?;
    require_finite("center.x", center.x)?;
    require_finite("center.y", center.y)?;
    require_finite("start angle", start_angle)?;

    let step = TAU / sides as f64;
    Ok((0..sides)
        .map(|i| {
            let angle = start_angle + step * i as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect())
}

/// Computes `rings` concentric regular polygons.
///
/// Radii are interpolated linearly from `inner_radius` to `outer_radius`,
/// hitting both ends when `rings >= 2`. A single ring uses `inner_radius`.
///
/// # Errors
/// `InvalidArgument` when `rings` is outside `1..=MAX_POLYGON_RINGS`,
/// `inner_radius > outer_radius`, or any ring would be an invalid polygon.
pub fn polygon_ring_vertices(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    sides: usize,
    rings: usize,
) -> DrawResult<Vec<Vec<Point>>> {
    if rings < 1 {
        return Err(DrawError::invalid("polygon ring needs at least 1 ring"));
    }
    if rings > MAX_POLYGON_RINGS {
        return Err(DrawError::invalid(format!(
            "polygon ring has {rings} rings, at most {MAX_POLYGON_RINGS} are supported"
        )));
    }
    require_positive("inner radius", inner_radius)?;
    require_finite("outer radius", outer_radius)?;
    if inner_radius > outer_radius {
        return Err(DrawError::invalid(format!(
            "inner radius {inner_radius} exceeds outer radius {outer_radius}"
        )));
    }

    let step = if rings > 1 {
        (outer_radius - inner_radius) / (rings - 1) as f64
    } else {
        0.0
    };

    (0..rings)
        .map(|i| {
            // Pin the last ring to the exact outer radius
            let radius = if rings > 1 && i == rings - 1 {
                outer_radius
            } else {
                inner_radius + step * i as f64
            };
            regular_polygon_vertices(center, radius, sides, 0.0)
        })
        .collect()
}

/// Computes the outline of a rounded rectangle.
///
/// The outline starts on the top edge just right of the top-left corner and
/// runs clockwise on screen: top edge, top-right arc, right edge, and so on.
/// `corner_radius` is clamped to half the shorter side; a non-positive radius
/// yields four plain edges starting at the top-left corner.
///
/// # Errors
/// `InvalidArgument` when `width` or `height` is not positive.
pub fn rounded_rectangle_segments(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    corner_radius: f64,
) -> DrawResult<Vec<PathSegment>> {
    require_finite("x", x)?;
    require_finite("y", y)?;
    require_positive("width", width)?;
    require_positive("height", height)?;
    if corner_radius.is_nan() {
        return Err(DrawError::invalid("corner radius must be a number"));
    }

    let r = corner_radius.min(width.min(height) / 2.0);
    let (left, top, right, bottom) = (x, y, x + width, y + height);
    let line = |from: (f64, f64), to: (f64, f64)| {
        PathSegment::Line(LineSegment {
            from: from.into(),
            to: to.into(),
        })
    };

    if r <= 0.0 {
        return Ok(vec![
            line((left, top), (right, top)),
            line((right, top), (right, bottom)),
            line((right, bottom), (left, bottom)),
            line((left, bottom), (left, top)),
        ]);
    }

    let arc = |cx: f64, cy: f64, start: f64| PathSegment::Arc {
        center: Point::new(cx, cy),
        radius: r,
        start,
        end: start + FRAC_PI_2,
    };

    Ok(vec![
        line((left + r, top), (right - r, top)),
        arc(right - r, top + r, -FRAC_PI_2),
        line((right, top + r), (right, bottom - r)),
        arc(right - r, bottom - r, 0.0),
        line((right - r, bottom), (left + r, bottom)),
        arc(left + r, bottom - r, FRAC_PI_2),
        line((left, bottom - r), (left, top + r)),
        arc(left + r, top + r, PI),
    ])
}

/// Computes the lines of a grid anchored at `(x, y)`.
///
/// Vertical lines sit at `x + k * cell_width` for `k = 0..=floor(total_width /
/// cell_width)` and span `total_height`; horizontal lines mirror that.
///
/// # Errors
/// `InvalidArgument` for non-positive cell sizes, negative totals, or more
/// than `MAX_GRID_LINES` lines along either axis.
pub fn grid_lines(
    x: f64,
    y: f64,
    cell_width: f64,
    cell_height: f64,
    total_width: f64,
    total_height: f64,
) -> DrawResult<GridLines> {
    require_finite("x", x)?;
    require_finite("y", y)?;
    require_positive("cell width", cell_width)?;
    require_positive("cell height", cell_height)?;
    for (name, total) in [("total width", total_width), ("total height", total_height)] {
        if !total.is_finite() || total < 0.0 {
            return Err(DrawError::invalid(format!(
                "{name} must be non-negative, got {total}"
            )));
        }
    }

    let columns = cell_count("columns", total_width / cell_width)?;
    let rows = cell_count("rows", total_height / cell_height)?;

    let vertical = (0..=columns)
        .map(|k| {
            let lx = x + k as f64 * cell_width;
            LineSegment {
                from: Point::new(lx, y),
                to: Point::new(lx, y + total_height),
            }
        })
        .collect();
    let horizontal = (0..=rows)
        .map(|k| {
            let ly = y + k as f64 * cell_height;
            LineSegment {
                from: Point::new(x, ly),
                to: Point::new(x + total_width, ly),
            }
        })
        .collect();

    Ok(GridLines {
        vertical,
        horizontal,
    })
}

fn cell_count(name: &str, ratio: f64) -> DrawResult<usize> {
    let cells = ratio.floor();
    // One more line than cells
    if cells >= MAX_GRID_LINES as f64 {
        return Err(DrawError::invalid(format!(
            "grid needs {cells} {name}, at most {} are supported",
            MAX_GRID_LINES - 1
        )));
    }
    Ok(cells as usize)
}
