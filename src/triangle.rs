//////////////////////////////////////////////////////////////////////
// labeled triangles and their local frames

use crate::errors::*;
use crate::prototile::TileLabel;
use crate::{Isometry2d, Point2d, Vec2d};

// bases shorter than this can't be oriented reliably
pub const MIN_BASE_LENGTH: f64 = 1e-12;

//////////////////////////////////////////////////////////////////////
// Robinson triangle: vertices[0] -> vertices[1] is the base,
// vertices[2] is the apex, which always lies to the left of the
// directed base (positive signed area).

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Point2d; 3],
    pub label: TileLabel
}

impl Triangle {

    pub fn new(p0: Point2d, p1: Point2d, p2: Point2d, label: TileLabel) -> Self {
        Triangle { vertices: [p0, p1, p2], label: label }
    }

    // unit prototile for the label, base along +x from the origin
    pub fn prototile(label: TileLabel) -> Self {

        let w = label.width();
        let h = label.height();

        Self::new(Point2d::origin(),
                  Point2d::new(w, 0.0),
                  Point2d::new(0.5*w, h),
                  label)

    }

    // place a tile solved in a local frame (v0 at the origin, base
    // along +x) into the plane
    pub fn from_local(frame: &Isometry2d,
                      p0: Point2d, p1: Point2d, p2: Point2d,
                      label: TileLabel) -> Self {
        Self::new(frame * p0, frame * p1, frame * p2, label)
    }

    pub fn base(&self) -> Vec2d {
        self.vertices[1] - self.vertices[0]
    }

    pub fn base_length(&self) -> f64 {
        self.base().norm()
    }

    // angle of the base edge from +x, valid for runs of either sign
    pub fn rotation(&self) -> f64 {
        let b = self.base();
        b.y.atan2(b.x)
    }

    // rigid motion taking the local frame (v0 at origin, base along +x)
    // to this triangle's placement
    pub fn frame(&self) -> Isometry2d {
        Isometry2d::new(self.vertices[0].coords, self.rotation())
    }

    pub fn signed_area(&self) -> f64 {
        let [p0, p1, p2] = &self.vertices;
        0.5 * (p1 - p0).perp(&(p2 - p0))
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    // apex on the left of v0 -> v1
    pub fn is_well_ordered(&self) -> bool {
        self.signed_area() > 0.0
    }

    // size relative to the unit prototile of the same label
    pub fn scale(&self) -> f64 {
        self.base_length() / self.label.width()
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    // reject inputs whose base can't be oriented; everything downstream
    // would be NaN otherwise
    pub fn validate(&self) -> Result<()> {

        let length = self.base_length();

        if !self.is_finite() || !(length >= MIN_BASE_LENGTH) {
            bail!(ErrorKind::DegenerateBase(length));
        }

        Ok(())

    }

}

//////////////////////////////////////////////////////////////////////
// Rect2d type has lower-left p0 and upper-right p1

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Rect2d {

    pub p0: Point2d,
    pub p1: Point2d

}

impl Rect2d {

    // empty rectangle has p0 > p1
    pub fn empty() -> Self {

        let p0 = Point2d::new(f64::MAX, f64::MAX);
        let p1 = -p0;

        Rect2d { p0: p0, p1: p1 }

    }

    // new rect from points
    pub fn new(p0: Point2d, p1: Point2d) -> Self {
        Rect2d { p0: p0, p1: p1 }
    }

    // smallest rect holding every vertex of every triangle
    pub fn around(tiles: &[Triangle]) -> Self {

        let mut rect = Self::empty();

        for t in tiles {
            for p in &t.vertices {
                rect.expand(p);
            }
        }

        rect

    }

    pub fn is_empty(&self) -> bool {
        self.p0.x > self.p1.x || self.p0.y > self.p1.y
    }

    // expand this rect to include the given point
    pub fn expand(&mut self, p: &Point2d) {
        self.p0 = self.p0.inf(p);
        self.p1 = self.p1.sup(p);
    }

    // dimensions of this rect
    pub fn dims(&self) -> Vec2d {
        self.p1 - self.p0
    }

    // center of this rect
    pub fn center(&self) -> Point2d {
        self.p0 + 0.5*(self.p1 - self.p0)
    }

}

//////////////////////////////////////////////////////////////////////
