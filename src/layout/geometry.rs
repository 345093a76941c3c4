//! Diagonal split geometry in unit space.
//!
//! Each pattern is two polygons on the unit square (`x` and `y` in `0..=1`): the
//! text region and the image region. Every region also stores its axis-aligned
//! bounding box, which must equal the minimal box containing the polygon.

use crate::{
    foundation::core::{BezPath, Canvas, Point, Rect},
    model::options::DiagonalPattern,
};

/// Closed polygon given by its vertices in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    fn quad(pts: [(f64, f64); 4]) -> Self {
        Self::new(pts.map(|(x, y)| Point::new(x, y)))
    }

    /// Minimal axis-aligned rectangle containing every vertex.
    pub fn bounding_box(&self) -> Rect {
        let mut it = self.points.iter();
        let Some(first) = it.next() else {
            return Rect::ZERO;
        };
        it.fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
    }

    /// Shoelace area.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        (twice / 2.0).abs()
    }

    /// Horizontal extent `[x0, x1]` covered by the polygon at every height.
    ///
    /// Valid for convex polygons spanning the full height of their bounding box.
    /// Returns `None` when no column is covered at all heights.
    pub fn inscribed_band(&self) -> Option<(f64, f64)> {
        let bbox = self.bounding_box();
        let (top, bottom) = (bbox.y0, bbox.y1);
        let mut x0 = f64::NEG_INFINITY;
        let mut x1 = f64::INFINITY;
        for y in [top, bottom] {
            let xs: Vec<f64> = self
                .points
                .iter()
                .filter(|p| (p.y - y).abs() <= 1e-9)
                .map(|p| p.x)
                .collect();
            let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            x0 = x0.max(lo);
            x1 = x1.min(hi);
        }
        (x0.is_finite() && x1.is_finite() && x1 > x0).then_some((x0, x1))
    }

    /// Map unit-space vertices onto `canvas` pixels.
    pub fn scaled(&self, canvas: Canvas) -> Polygon {
        Polygon::new(
            self.points
                .iter()
                .map(|p| canvas.scale_point(*p))
                .collect::<Vec<_>>(),
        )
    }

    /// Closed path for clip masks.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter();
        if let Some(first) = it.next() {
            path.move_to(*first);
            for p in it {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }

    /// Even-odd point containment, boundary inclusive.
    pub fn contains(&self, pt: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            // on-edge check
            let cross = (b.x - a.x) * (pt.y - a.y) - (b.y - a.y) * (pt.x - a.x);
            if cross.abs() <= 1e-9
                && pt.x >= a.x.min(b.x) - 1e-9
                && pt.x <= a.x.max(b.x) + 1e-9
                && pt.y >= a.y.min(b.y) - 1e-9
                && pt.y <= a.y.max(b.y) + 1e-9
            {
                return true;
            }
            if (a.y > pt.y) != (b.y > pt.y) {
                let x_at = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if pt.x < x_at {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// One side of a diagonal split.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Region {
    pub polygon: Polygon,
    pub bbox: Rect,
}

impl Region {
    fn new(polygon: Polygon, bbox: Rect) -> Self {
        Self { polygon, bbox }
    }

    /// Zero-area regions are skipped when composing.
    pub fn is_empty(&self) -> bool {
        self.bbox.area() <= 0.0
    }
}

/// Text and image regions for one [`DiagonalPattern`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DiagonalGeometry {
    pub pattern: DiagonalPattern,
    pub text: Region,
    pub image: Region,
}

impl DiagonalGeometry {
    pub fn for_pattern(pattern: DiagonalPattern) -> Self {
        let (text, image) = match pattern {
            DiagonalPattern::Left => (
                Region::new(
                    Polygon::quad([(0.0, 0.0), (0.68, 0.0), (0.68, 1.0), (0.0, 1.0)]),
                    Rect::new(0.0, 0.0, 0.68, 1.0),
                ),
                Region::new(
                    Polygon::quad([(0.68, 0.0), (1.0, 0.0), (1.0, 1.0), (0.68, 1.0)]),
                    Rect::new(0.68, 0.0, 1.0, 1.0),
                ),
            ),
            DiagonalPattern::Right => (
                Region::new(
                    Polygon::quad([(0.32, 0.0), (1.0, 0.0), (1.0, 1.0), (0.32, 1.0)]),
                    Rect::new(0.32, 0.0, 1.0, 1.0),
                ),
                Region::new(
                    Polygon::quad([(0.0, 0.0), (0.32, 0.0), (0.32, 1.0), (0.0, 1.0)]),
                    Rect::new(0.0, 0.0, 0.32, 1.0),
                ),
            ),
            DiagonalPattern::InclineRight => (
                Region::new(
                    Polygon::quad([(0.37, 0.0), (1.0, 0.0), (1.0, 1.0), (0.25, 1.0)]),
                    Rect::new(0.25, 0.0, 1.0, 1.0),
                ),
                Region::new(
                    Polygon::quad([(0.0, 0.0), (0.37, 0.0), (0.25, 1.0), (0.0, 1.0)]),
                    Rect::new(0.0, 0.0, 0.37, 1.0),
                ),
            ),
            DiagonalPattern::InclineLeft => (
                Region::new(
                    Polygon::quad([(0.0, 0.0), (0.58, 0.0), (0.68, 1.0), (0.0, 1.0)]),
                    Rect::new(0.0, 0.0, 0.68, 1.0),
                ),
                Region::new(
                    Polygon::quad([(0.58, 0.0), (1.0, 0.0), (1.0, 1.0), (0.68, 1.0)]),
                    Rect::new(0.58, 0.0, 1.0, 1.0),
                ),
            ),
            DiagonalPattern::None => (
                Region::new(
                    Polygon::quad([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
                    Rect::new(0.0, 0.0, 1.0, 1.0),
                ),
                Region::new(
                    Polygon::quad([(1.0, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0, 1.0)]),
                    Rect::new(1.0, 0.0, 1.0, 1.0),
                ),
            ),
        };
        Self {
            pattern,
            text,
            image,
        }
    }

    /// Unit-space widths at the left and right edges of the text bbox that the
    /// text polygon does not cover at every height.
    pub fn text_seam_overhang(&self) -> (f64, f64) {
        let bbox = self.text.bbox;
        match self.text.polygon.inscribed_band() {
            Some((x0, x1)) => ((x0 - bbox.x0).max(0.0), (bbox.x1 - x1).max(0.0)),
            None => (0.0, 0.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
